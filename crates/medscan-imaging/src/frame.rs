//! Pixel buffer types.

/// An RGB raster image, row-major.
#[derive(Debug, Clone)]
pub struct ImageFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGB, row-major).
    data: Vec<[u8; 3]>,
}

impl ImageFrame {
    /// Create a new frame filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![[0, 0, 0]; size],
        }
    }

    /// Create a frame from raw row-major RGB pixels.
    ///
    /// Callers must supply exactly `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, data: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: [u8; 3]) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = pixel;
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Flattened RGB byte view (for encoders).
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            raw.extend_from_slice(px);
        }
        raw
    }

    /// Mean intensity of one channel (0 = red, 1 = green, 2 = blue).
    pub fn channel_mean(&self, channel: usize) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.data.iter().map(|px| px[channel] as f64).sum();
        sum / self.data.len() as f64
    }

    /// Extract one channel as a grayscale plane.
    pub fn channel_plane(&self, channel: usize) -> GrayFrame {
        GrayFrame {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|px| px[channel]).collect(),
        }
    }

    /// Convert to grayscale using Rec.601 luma weights.
    pub fn to_gray(&self) -> GrayFrame {
        let data = self
            .data
            .iter()
            .map(|px| {
                let y = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
                y.round().clamp(0.0, 255.0) as u8
            })
            .collect();
        GrayFrame {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// A single-channel 8-bit raster, row-major.
#[derive(Debug, Clone)]
pub struct GrayFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, row-major.
    data: Vec<u8>,
}

impl GrayFrame {
    /// Create a new frame filled with a value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a frame from raw row-major pixels.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx]
    }

    /// Get a pixel with coordinates clamped to the frame bounds.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> u8 {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(cx, cy)
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Mean intensity over the whole frame.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }
}

/// A single-channel floating-point plane, used for gradient fields.
#[derive(Debug, Clone)]
pub struct FloatPlane {
    /// Width in samples.
    pub width: u32,
    /// Height in samples.
    pub height: u32,
    /// Sample data, row-major.
    data: Vec<f32>,
}

impl FloatPlane {
    /// Create a new plane filled with zero.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![0.0; size],
        }
    }

    /// Get a sample at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx]
    }

    /// Set a sample at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// One row of samples.
    pub fn row(&self, y: u32) -> &[f32] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[f32] {
        &self.data
    }
}
