// File: crates/heatmap-core/src/tooltip.rs
// Summary: Hover tooltip state and the per-cell tooltip text.

use chrono::Month;

/// Full English month name for 1..=12.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// "1753 - January", absolute temperature, then the signed variance, one per line.
pub fn format_content(year: i32, month: u32, temperature: f64, variance: f64) -> String {
    let sign = if variance > 0.0 { "+" } else { "" };
    format!("{year} - {}\n{temperature:.2}°C\n{sign}{variance:.2}°C", month_name(month))
}

/// Tooltip overlay. Each `show` overwrites the previous state; `hide` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    content: Option<String>,
    x: f64,
    y: f64,
    key: Option<i32>,
}

impl Tooltip {
    pub fn new() -> Self { Self::default() }

    pub fn show(&mut self, content: impl Into<String>, x: f64, y: f64, key: i32) {
        self.content = Some(content.into());
        self.x = x;
        self.y = y;
        self.key = Some(key);
    }

    pub fn hide(&mut self) {
        *self = Self::default();
    }

    pub fn is_visible(&self) -> bool { self.content.is_some() }

    pub fn content(&self) -> Option<&str> { self.content.as_deref() }

    pub fn position(&self) -> (f64, f64) { (self.x, self.y) }

    /// The year the tooltip was opened for (exposed as `data-year`).
    pub fn key(&self) -> Option<i32> { self.key }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_signed_with_two_decimals() {
        assert_eq!(format_content(1753, 1, 7.294, -1.366), "1753 - January\n7.29°C\n-1.37°C");
        assert_eq!(format_content(2015, 9, 9.713, 1.053), "2015 - September\n9.71°C\n+1.05°C");
        assert_eq!(format_content(1900, 12, 8.66, 0.0), "1900 - December\n8.66°C\n0.00°C");
    }

    #[test]
    fn show_then_hide() {
        let mut t = Tooltip::new();
        assert!(!t.is_visible());
        t.show("a", 1.0, 2.0, 1999);
        t.show("b", 3.0, 4.0, 2000);
        assert_eq!(t.content(), Some("b"));
        assert_eq!(t.position(), (3.0, 4.0));
        assert_eq!(t.key(), Some(2000));
        t.hide();
        assert!(!t.is_visible());
        assert_eq!(t.key(), None);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }
}
