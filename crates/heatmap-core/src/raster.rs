// File: crates/heatmap-core/src/raster.rs
// Summary: Headless PNG rendering of a Scene using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::info;

use crate::color::Rgb;
use crate::scene::{Element, Scene, Shape};
use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    /// Device pixels per viewBox unit.
    pub scale: f32,
    /// Text is skipped when false (deterministic snapshots across font setups).
    pub draw_labels: bool,
    /// Comma separated font families, as in `Theme::font_family`.
    pub font_family: &'static str,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_labels: true, font_family: Theme::default().font_family }
    }
}

#[inline]
fn sk(c: Rgb) -> skia::Color { skia::Color::from_rgb(c.r, c.g, c.b) }

/// Render the scene to PNG bytes.
pub fn render_to_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let scale = if opts.scale > 0.0 { opts.scale } else { 1.0 };
    let w = (scene.width as f32 * scale).round().max(1.0) as i32;
    let h = (scene.height as f32 * scale).round().max(1.0) as i32;

    // Create raster surface
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(sk(scene.background));
    canvas.scale((scale, scale));

    let shaper = if opts.draw_labels { Some(TextShaper::new(opts.font_family)) } else { None };
    for el in &scene.elements {
        draw_element(canvas, el, shaper.as_ref());
    }

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG file at `output_png_path`.
pub fn render_to_png(scene: &Scene, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(scene, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_element(canvas: &skia::Canvas, el: &Element, shaper: Option<&TextShaper>) {
    canvas.save();
    let (tx, ty) = el.translate;
    if tx != 0.0 || ty != 0.0 {
        canvas.translate((tx as f32, ty as f32));
    }

    match &el.shape {
        Shape::Group => {}
        Shape::Rect { x, y, width, height, fill, stroke } => {
            let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
            let mut body = skia::Paint::default();
            body.set_style(skia::paint::Style::Fill);
            body.set_color(sk(*fill));
            canvas.draw_rect(rect, &body);
            if let Some(s) = stroke {
                let mut outline = skia::Paint::default();
                outline.set_anti_alias(true);
                outline.set_style(skia::paint::Style::Stroke);
                outline.set_stroke_width(1.0);
                outline.set_color(sk(*s));
                canvas.draw_rect(rect, &outline);
            }
        }
        Shape::Line { x1, y1, x2, y2, stroke } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_stroke_width(1.0);
            paint.set_color(sk(*stroke));
            canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
        }
        Shape::Text { x, y, dy, content, anchor, size, fill, rotate } => {
            if let Some(shaper) = shaper {
                let (x, y) = (*x as f32, *y as f32);
                if *rotate != 0.0 {
                    canvas.rotate(*rotate as f32, Some(skia::Point::new(x, y)));
                }
                shaper.draw_anchored(canvas, content, x, y + dy * size, *size, sk(*fill), anchor.offset_frac());
            }
        }
    }

    for child in &el.children {
        draw_element(canvas, child, shaper);
    }
    canvas.restore();
}
