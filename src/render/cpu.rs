use image::RgbImage;

use crate::{
    foundation::{
        core::{Rect, Rgb8},
        error::{IconError, IconResult},
    },
    layout::{IconLayout, Shape},
};

// Flattening tolerance for the rounded corners, in pixels.
const CURVE_TOLERANCE: f64 = 0.1;

/// Rasterize `layout` onto a fresh square canvas.
///
/// The canvas starts as a flood fill of the layout background and every shape
/// is painted over it in order, so the result is opaque everywhere. Rendering
/// is deterministic: the same layout always yields the same bytes.
#[tracing::instrument(skip_all, fields(canvas_px = layout.canvas_px))]
pub fn render_base(layout: &IconLayout) -> IconResult<RgbImage> {
    layout.validate()?;

    let side: u16 = layout
        .canvas_px
        .try_into()
        .map_err(|_| IconError::raster("canvas side exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(side, side);
    let full = Rect::new(0.0, 0.0, f64::from(side), f64::from(side));
    set_color(&mut ctx, layout.background);
    ctx.fill_rect(&rect_to_cpu(full));

    for shape in layout.shapes() {
        tracing::debug!(?shape, "draw");
        draw_shape(&mut ctx, &shape);
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(side, side);
    ctx.render_to_pixmap(&mut pixmap);

    pixmap_to_rgb(&pixmap, layout.canvas_px)
}

fn draw_shape(ctx: &mut vello_cpu::RenderContext, shape: &Shape) {
    set_color(ctx, shape.color());
    match *shape {
        Shape::Rect { bbox, .. } => ctx.fill_rect(&rect_to_cpu(bbox.to_rect())),
        Shape::RoundedRect { bbox, radius, .. } => {
            let rr = bbox.to_rounded_rect(f64::from(radius));
            ctx.fill_path(&shape_to_cpu(&rr));
        }
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgb8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn shape_to_cpu(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(CURVE_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

// The pixmap holds premultiplied RGBA8; the icon format has no alpha channel.
fn pixmap_to_rgb(pixmap: &vello_cpu::Pixmap, side: u32) -> IconResult<RgbImage> {
    let data = pixmap.data_as_u8_slice();
    let mut rgb = Vec::with_capacity(data.len() / 4 * 3);
    for px in data.chunks_exact(4) {
        let [r, g, b] = unpremul_rgb8(px[0], px[1], px[2], px[3]);
        rgb.extend_from_slice(&[r, g, b]);
    }

    RgbImage::from_raw(side, side, rgb)
        .ok_or_else(|| IconError::raster("pixmap size does not match canvas"))
}

fn unpremul_rgb8(r: u8, g: u8, b: u8, a: u8) -> [u8; 3] {
    match a {
        0 => [0, 0, 0],
        255 => [r, g, b],
        _ => {
            let a = u16::from(a);
            let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
            [un(r), un(g), un(b)]
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
