use crate::foundation::{
    core::{IconSize, PixelBox, Rgb8},
    error::{IconError, IconResult},
};

/// Solid fill primitive handed to the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect {
        /// Covered pixels.
        bbox: PixelBox,
        /// Fill color.
        color: Rgb8,
    },
    /// Rectangle whose four corners are circular arcs of `radius`.
    RoundedRect {
        /// Covered pixels.
        bbox: PixelBox,
        /// Corner radius in pixels.
        radius: u32,
        /// Fill color.
        color: Rgb8,
    },
}

impl Shape {
    pub fn bbox(&self) -> PixelBox {
        match *self {
            Shape::Rect { bbox, .. } | Shape::RoundedRect { bbox, .. } => bbox,
        }
    }

    pub fn color(&self) -> Rgb8 {
        match *self {
            Shape::Rect { color, .. } | Shape::RoundedRect { color, .. } => color,
        }
    }

    fn radius(&self) -> u32 {
        match *self {
            Shape::Rect { .. } => 0,
            Shape::RoundedRect { radius, .. } => radius,
        }
    }
}

/// Evenly spaced horizontal bars standing in for lines of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLines {
    /// Topmost bar; the others are copies shifted down by `pitch`.
    pub first: PixelBox,
    /// Number of bars.
    pub count: u32,
    /// Distance between the top edges of consecutive bars.
    pub pitch: u32,
    /// Bar color.
    pub color: Rgb8,
}

impl TextLines {
    /// Bar `index`, counted from the top.
    pub fn bar(&self, index: u32) -> PixelBox {
        self.first.offset_y(index * self.pitch)
    }

    pub fn bars(&self) -> impl Iterator<Item = PixelBox> + '_ {
        (0..self.count).map(|i| self.bar(i))
    }
}

/// Fixed composition of the note icon, drawn back to front.
///
/// The canvas is flood-filled with `background`, then `card`, `document`
/// and the text `lines` are painted in that order. Later shapes win where
/// they overlap earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconLayout {
    /// Edge length of the square base canvas.
    pub canvas_px: u32,
    /// Flood fill under every shape.
    pub background: Rgb8,
    /// Large rounded panel covering most of the canvas.
    pub card: PixelBox,
    /// Corner radius of `card`.
    pub card_radius: u32,
    /// Fill of `card`.
    pub card_color: Rgb8,
    /// Document body drawn on the card.
    pub document: PixelBox,
    /// Corner radius of `document`.
    pub document_radius: u32,
    /// Fill of `document`.
    pub document_color: Rgb8,
    /// Text bars drawn on the document body.
    pub lines: TextLines,
}

impl IconLayout {
    /// Material green, `#4CAF50`.
    pub const BRAND_GREEN: Rgb8 = Rgb8::from_hex(0x4CAF50);

    /// The app's note icon.
    pub const NOTE: IconLayout = IconLayout {
        canvas_px: IconSize::Base.px(),
        background: Self::BRAND_GREEN,
        card: PixelBox::new(50, 50, 462, 462),
        card_radius: 60,
        card_color: Rgb8::WHITE,
        document: PixelBox::new(150, 120, 362, 400),
        document_radius: 10,
        document_color: Self::BRAND_GREEN,
        lines: TextLines {
            first: PixelBox::new(180, 180, 332, 200),
            count: 4,
            pitch: 50,
            color: Rgb8::WHITE,
        },
    };

    /// Shapes in paint order. The background flood fill is not included.
    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        let card = Shape::RoundedRect {
            bbox: self.card,
            radius: self.card_radius,
            color: self.card_color,
        };
        let document = Shape::RoundedRect {
            bbox: self.document,
            radius: self.document_radius,
            color: self.document_color,
        };
        let color = self.lines.color;

        [card, document]
            .into_iter()
            .chain(self.lines.bars().map(move |bbox| Shape::Rect { bbox, color }))
    }

    /// Reject layouts the rasterizer cannot draw faithfully.
    pub fn validate(&self) -> IconResult<()> {
        if self.canvas_px == 0 {
            return Err(IconError::geometry("canvas must be at least 1px wide"));
        }

        for (i, shape) in self.shapes().enumerate() {
            let bbox = shape.bbox();
            if bbox.is_empty() {
                return Err(IconError::geometry(format!(
                    "shape {i} has an empty bounding box {bbox:?}"
                )));
            }
            if !bbox.fits_within(self.canvas_px, self.canvas_px) {
                return Err(IconError::geometry(format!(
                    "shape {i} bounding box {bbox:?} exceeds the {0}x{0} canvas",
                    self.canvas_px
                )));
            }
            let radius = shape.radius();
            if radius.saturating_mul(2) > bbox.width().min(bbox.height()) {
                return Err(IconError::geometry(format!(
                    "shape {i} corner radius {radius} does not fit {bbox:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
