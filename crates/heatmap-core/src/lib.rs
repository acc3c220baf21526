// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports the dataset loader, HeatMap renderer and output backends.

pub mod axis;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod loader;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use chart::{Cell, HeatMap, TITLE};
pub use dataset::{Dataset, MonthlyVariance};
pub use error::{Error, Result};
pub use loader::{fetch_dataset, load_dataset_file, DATASET_URL};
pub use raster::{render_to_png, render_to_png_bytes, RenderOptions};
pub use scene::{Element, Scene};
pub use svg::{to_html, to_svg};
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::Tooltip;
pub use types::{ConfigOverrides, Configuration, LegendOptions, Layout};
