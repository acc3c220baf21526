// File: crates/heatmap-core/src/text.rs
// Summary: Anchored text drawing for the PNG backend using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    /// `families` is a CSS-style, comma separated font list (the theme's `font_family`).
    pub fn new(families: &str) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        let mut families: Vec<String> = families
            .split(',')
            .map(|f| f.trim().trim_matches('"').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if families.is_empty() {
            families.push("sans-serif".to_string());
        }
        Self { fonts: fc, families }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(self.families.as_slice());

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the baseline at `y`, shifted left by `anchor_frac` of the text width
    /// (0 = start, 0.5 = middle, 1 = end).
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor_frac: f32,
    ) {
        let mut p = self.layout(text, size, color);
        let dx = p.longest_line() * anchor_frac;
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x - dx, y - size * 0.8));
    }
}
