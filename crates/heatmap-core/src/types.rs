// File: crates/heatmap-core/src/types.rs
// Summary: Chart configuration (size, padding, legend) and the two layout presets.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::theme::{self, Theme};

/// Default viewBox width of the wide layout.
pub const WIDTH: f64 = 1600.0;
/// Default viewBox height of the wide layout.
pub const HEIGHT: f64 = 540.0;
/// Default inset on every side of the plot area.
pub const PADDING: f64 = 90.0;

/// Legend geometry: `cells` swatches of `cell_width` x `cell_height`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LegendOptions {
    pub cells: usize,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl LegendOptions {
    pub const fn new(cells: usize, cell_width: f64, cell_height: f64) -> Self {
        Self { cells, cell_width, cell_height }
    }

    /// Total legend width in pixels.
    pub fn width(&self) -> f64 { self.cells as f64 * self.cell_width }
}

impl Default for LegendOptions {
    fn default() -> Self { Layout::Wide.legend() }
}

/// The two shipped page layouts. They differ only in size constants and legend sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Compact,
}

impl Layout {
    pub fn legend(self) -> LegendOptions {
        match self {
            Layout::Wide => LegendOptions::new(10, 40.0, 40.0),
            Layout::Compact => LegendOptions::new(9, 30.0, 20.0),
        }
    }

    pub fn configuration(self) -> Configuration {
        let (width, height, padding) = match self {
            Layout::Wide => (WIDTH, HEIGHT, PADDING),
            Layout::Compact => (1200.0, 600.0, 80.0),
        };
        Configuration { width, height, padding, legend: self.legend(), theme: Theme::light() }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wide" => Some(Layout::Wide),
            "compact" => Some(Layout::Compact),
            _ => None,
        }
    }
}

/// Validated chart configuration. Immutable once handed to `HeatMap::new`.
#[derive(Clone, Copy, Debug)]
pub struct Configuration {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub legend: LegendOptions,
    pub theme: Theme,
}

impl Default for Configuration {
    fn default() -> Self { Layout::Wide.configuration() }
}

impl Configuration {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding, ..Self::default() }
    }

    /// Contract: width, height and padding are present (finite, > 0) and
    /// the padding leaves a non-empty plot area.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("width", self.width), ("height", self.height), ("padding", self.padding)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::config(format!("{name} is required and must be positive (got {v})")));
            }
        }
        if 2.0 * self.padding >= self.width || 2.0 * self.padding >= self.height {
            return Err(Error::config(format!(
                "padding {} leaves no plot area inside {}x{}",
                self.padding, self.width, self.height
            )));
        }
        if self.legend.cells < 2 {
            return Err(Error::config("legend needs at least 2 cells"));
        }
        if !(self.legend.cell_width > 0.0 && self.legend.cell_height > 0.0) {
            return Err(Error::config("legend cell size must be positive"));
        }
        Ok(())
    }
}

/// Partially specified configuration, as read from a JSON file or CLI flags.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding: Option<f64>,
    pub legend: Option<LegendOptions>,
    pub theme: Option<String>,
}

impl ConfigOverrides {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Fields set in `other` win.
    pub fn merge(self, other: ConfigOverrides) -> Self {
        Self {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            padding: other.padding.or(self.padding),
            legend: other.legend.or(self.legend),
            theme: other.theme.or(self.theme),
        }
    }

    /// Overlay these values onto a preset.
    pub fn apply(&self, base: Configuration) -> Configuration {
        Configuration {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            padding: self.padding.unwrap_or(base.padding),
            legend: self.legend.unwrap_or(base.legend),
            theme: self.theme.as_deref().map(theme::find).unwrap_or(base.theme),
        }
    }
}

impl TryFrom<ConfigOverrides> for Configuration {
    type Error = Error;

    /// Standalone conversion: width, height and padding must all be given.
    fn try_from(o: ConfigOverrides) -> Result<Self> {
        let width = o.width.ok_or_else(|| Error::config("width is required"))?;
        let height = o.height.ok_or_else(|| Error::config("height is required"))?;
        let padding = o.padding.ok_or_else(|| Error::config("padding is required"))?;
        let cfg = ConfigOverrides { width: Some(width), height: Some(height), padding: Some(padding), ..o }
            .apply(Configuration::default());
        cfg.validate()?;
        Ok(cfg)
    }
}
