//! MedScan Imaging Engine
//!
//! This crate implements the deterministic image pipelines behind MedScan's
//! visual biomarkers:
//!
//! - **Anemia estimation** - conjunctiva erythema-index analysis
//! - **Vein visualization** - double-pass local contrast enhancement
//! - **Risk projection** - illustrative heatmap overlay
//! - **Fracture detection** - Sobel gradient discontinuity analysis
//!
//! # Determinism
//!
//! Every pipeline is a pure function over the decoded pixel buffer. Given
//! the same input bytes, the output is identical across runs; there is no
//! random number generation and no shared state.
//!
//! # Crate Structure
//!
//! - [`frame`] - pixel buffer types (`ImageFrame`, `GrayFrame`, `FloatPlane`)
//! - [`codec`] - JPEG/PNG decode and encode, base64 data URIs
//! - [`clahe`] - tiled adaptive histogram equalization
//! - [`gradient`] - Sobel gradients and the Laplacian blur metric
//! - [`peaks`] - 1-D peak detection with prominence/distance/width filters
//! - [`raster`] - resize, crop, blur, blend, draw, and colormap helpers
//! - [`analyzers`] - the four biomarker analyzers built on the primitives

pub mod analyzers;
pub mod clahe;
pub mod codec;
pub mod error;
pub mod frame;
pub mod gradient;
pub mod peaks;
pub mod raster;

pub use error::{ImagingError, ImagingResult};
pub use frame::{FloatPlane, GrayFrame, ImageFrame};
pub use peaks::{find_peaks, FindPeaksParams, Peak};
