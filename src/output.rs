use std::{io::Cursor, path::Path};

use image::{ImageFormat, RgbImage};

use crate::foundation::error::{IconError, IconResult};

/// Encode `img` as an RGB8 PNG held in memory.
pub fn encode_png(img: &RgbImage) -> IconResult<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| IconError::encode(format!("png {}x{}: {e}", img.width(), img.height())))?;
    Ok(bytes)
}

/// Encode `img` and write it to `path`, replacing any existing file.
///
/// Encoding finishes before the file is created, so an encoder failure leaves
/// the destination untouched.
pub fn write_png(img: &RgbImage, path: &Path) -> IconResult<()> {
    let bytes = encode_png(img)?;
    std::fs::write(path, &bytes).map_err(|e| IconError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
