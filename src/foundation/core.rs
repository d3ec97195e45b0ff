pub use kurbo::{Rect, RoundedRect};

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Channels as an `[r, g, b]` array, the layout `image::Rgb` expects.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Integer bounding box with inclusive corners.
///
/// `(x0, y0)`–`(x1, y1)` covers pixel columns `x0..=x1` and rows `y0..=y1`,
/// so the continuous rectangle it maps to ends one pixel past `x1`/`y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelBox {
    /// Left column.
    pub x0: u32,
    /// Top row.
    pub y0: u32,
    /// Right column (inclusive).
    pub x1: u32,
    /// Bottom row (inclusive).
    pub y1: u32,
}

impl PixelBox {
    /// Box from its two inclusive corners.
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Same box moved down by `dy` rows.
    pub const fn offset_y(self, dy: u32) -> Self {
        Self {
            x0: self.x0,
            y0: self.y0 + dy,
            x1: self.x1,
            y1: self.y1 + dy,
        }
    }

    pub fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Covered columns. Zero for an empty box.
    pub fn width(self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        self.x1 - self.x0 + 1
    }

    /// Covered rows. Zero for an empty box.
    pub fn height(self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        self.y1 - self.y0 + 1
    }

    pub fn contains(self, x: u32, y: u32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// True when every covered pixel lies on a `width`×`height` canvas.
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        self.x1 < width && self.y1 < height
    }

    /// Continuous rectangle covering exactly the box's pixels.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1) + 1.0,
            f64::from(self.y1) + 1.0,
        )
    }

    /// Rounded rectangle over the box's pixels with uniform corner `radius`.
    pub fn to_rounded_rect(self, radius: f64) -> RoundedRect {
        RoundedRect::from_rect(self.to_rect(), radius)
    }
}

/// The two icon resolutions written by a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// 512×512, the drawn base raster.
    Base,
    /// 192×192, resampled from the base raster.
    Touch,
}

impl IconSize {
    /// Every size in write order.
    pub const ALL: [IconSize; 2] = [IconSize::Base, IconSize::Touch];

    /// Edge length in pixels (icons are square).
    pub const fn px(self) -> u32 {
        match self {
            IconSize::Base => 512,
            IconSize::Touch => 192,
        }
    }

    pub fn file_name(self) -> String {
        format!("icon-{}.png", self.px())
    }

    /// Linear scale relative to the base raster (`0.375` for the touch icon).
    pub fn scale_from_base(self) -> f64 {
        f64::from(self.px()) / f64::from(IconSize::Base.px())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
