use image::{RgbImage, imageops::FilterType};

use crate::foundation::{
    core::IconSize,
    error::{IconError, IconResult},
};

/// Filter used for every derived icon size.
pub const DOWNSCALE_FILTER: FilterType = FilterType::Lanczos3;

/// Resample the finished base raster to `size`.
///
/// Returns an independent buffer; `base` is left untouched. Upscaling is
/// refused since derived sizes must come from a larger drawing.
#[tracing::instrument(skip(base), fields(from = base.width(), to = size.px()))]
pub fn downscale(base: &RgbImage, size: IconSize) -> IconResult<RgbImage> {
    let px = size.px();
    if px > base.width() || px > base.height() {
        return Err(IconError::geometry(format!(
            "cannot derive {px}px icon from a {}x{} raster",
            base.width(),
            base.height()
        )));
    }

    Ok(image::imageops::resize(base, px, px, DOWNSCALE_FILTER))
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
