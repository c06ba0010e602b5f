//! Output helpers shared by the image commands.

use std::fs;

use anyhow::{Context, Result};
use base64::Engine;

/// Write the payload of a `data:image/jpeg;base64,` URI to a file.
pub fn write_data_uri(data_uri: &str, path: &str) -> Result<()> {
    let payload = data_uri
        .split_once("base64,")
        .map(|(_, p)| p)
        .ok_or_else(|| anyhow::anyhow!("Output image is not a base64 data URI"))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .context("Output image payload is not valid base64")?;
    fs::write(path, bytes).with_context(|| format!("Failed to write file: {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_a_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let uri = format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(b"jpegbytes")
        );
        write_data_uri(&uri, path.to_str().unwrap()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"jpegbytes");
    }

    #[test]
    fn rejects_a_plain_string() {
        assert!(write_data_uri("not a data uri", "/tmp/never-written").is_err());
    }
}
