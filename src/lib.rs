//! noteicon draws the note app's launcher icon and writes it as PNG files.
//!
//! A run is a straight line:
//!
//! 1. **Render**: [`IconLayout::NOTE`] is rasterized onto a 512×512 RGB canvas
//! 2. **Write**: the canvas is encoded as `icon-512.png`
//! 3. **Resample**: the same canvas is Lanczos-downscaled to 192×192
//! 4. **Write**: the result is encoded as `icon-192.png`
//!
//! Output is deterministic: identical runs produce byte-identical files.
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod output;
mod pipeline;
mod render;

pub use foundation::core::{IconSize, PixelBox, Rect, Rgb8, RoundedRect};
pub use foundation::error::{IconError, IconResult};
pub use layout::{IconLayout, Shape, TextLines};
pub use output::{encode_png, write_png};
pub use pipeline::{GenerateSettings, GeneratedIcons, Progress, generate_icons, generate_icons_in};
pub use render::cpu::render_base;
pub use render::resample::{DOWNSCALE_FILTER, downscale};
