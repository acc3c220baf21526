// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming for the heat map page, axes, legend and tooltip.

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub title: Rgb,
    pub text: Rgb,
    pub axis_line: Rgb,
    pub tick: Rgb,
    pub legend_stroke: Rgb,
    pub tooltip_background: Rgb,
    pub tooltip_text: Rgb,
    pub font_family: &'static str,
    pub title_size: f32,
    pub description_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::WHITE,
            title: Rgb::new(20, 20, 30),
            text: Rgb::new(40, 40, 50),
            axis_line: Rgb::BLACK,
            tick: Rgb::BLACK,
            legend_stroke: Rgb::BLACK,
            tooltip_background: Rgb::new(40, 40, 50),
            tooltip_text: Rgb::WHITE,
            font_family: "Segoe UI, Arial, Helvetica, sans-serif",
            title_size: 28.0,
            description_size: 18.0,
            label_size: 16.0,
            tick_size: 11.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            title: Rgb::new(235, 235, 245),
            text: Rgb::new(210, 210, 220),
            axis_line: Rgb::new(180, 180, 190),
            tick: Rgb::new(150, 150, 160),
            legend_stroke: Rgb::new(180, 180, 190),
            tooltip_background: Rgb::new(235, 235, 245),
            tooltip_text: Rgb::new(18, 18, 20),
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("neon").name, "light");
    }
}
