// File: crates/heatmap-core/src/chart.rs
// Summary: HeatMap renderer: scales computed at construction, a fixed render pipeline into a Scene.

use tracing::{debug, info};

use crate::axis::{Axis, Tick};
use crate::color::{interpolate_rd_yl_bu, Rgb, SequentialScale};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::grid::{linspace, quantile};
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{Anchor, Element, Scene};
use crate::tooltip::{format_content, month_name, Tooltip};
use crate::types::Configuration;

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// One year x one month rectangle, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub year: i32,
    /// 1-based month from the dataset.
    pub month: u32,
    pub variance: f64,
    pub temperature: f64,
    pub rect: Rect,
    pub fill: Rgb,
}

impl Cell {
    /// Zero-based month, as exposed in `data-month`.
    pub fn month_index(&self) -> u32 { self.month - 1 }

    pub fn tooltip_content(&self) -> String {
        format_content(self.year, self.month, self.temperature, self.variance)
    }
}

pub struct HeatMap {
    dataset: Dataset,
    config: Configuration,
    x_scale: TimeScale,
    y_scale: LinearScale,
    color_scale: SequentialScale,
    years: (i32, i32),
    months: (u32, u32),
    temps: (f64, f64),
    cells: Vec<Cell>,
    scene: Scene,
    tooltip: Tooltip,
}

impl HeatMap {
    /// Validate inputs and compute the three scales. Fails before anything is drawn.
    pub fn new(dataset: Dataset, config: Configuration) -> Result<Self> {
        config.validate()?;
        dataset.validate()?;
        let years = dataset.year_extent().ok_or_else(|| Error::dataset("no years"))?;
        let months = dataset.month_extent().ok_or_else(|| Error::dataset("no months"))?;
        let temps = dataset.temperature_extent().ok_or_else(|| Error::dataset("no temperatures"))?;

        let (w, h, p) = (config.width, config.height, config.padding);
        // Columns start on 1 January; the last year's column ends on 1 January of the next.
        let x_scale = TimeScale::years(years.0, years.1 + 1, p, w - p);
        // Month rows are centred on the month value, first month on top.
        let y_scale = LinearScale::new((months.0 as f64 - 0.5, months.1 as f64 + 0.5), (p, h - p));
        // Hottest maps to the red end of the ramp.
        let color_scale = SequentialScale::new(temps.1, temps.0, interpolate_rd_yl_bu);

        let row = y_scale.to_px(2.0) - y_scale.to_px(1.0);
        let cells = dataset
            .monthly_variance
            .iter()
            .map(|e| {
                let temperature = dataset.temperature(e);
                let x = x_scale.to_px(e.year);
                let y = y_scale.to_px(e.month as f64) - row / 2.0;
                Cell {
                    year: e.year,
                    month: e.month,
                    variance: e.variance,
                    temperature,
                    rect: Rect::from_ltwh(x, y, x_scale.year_width(e.year), row),
                    fill: color_scale.color(temperature),
                }
            })
            .collect::<Vec<_>>();

        debug!(cells = cells.len(), ?years, ?temps, "heat map scales computed");
        let scene = Scene::new(w, h, config.theme.background);
        Ok(Self { dataset, config, x_scale, y_scale, color_scale, years, months, temps, cells, scene, tooltip: Tooltip::new() })
    }

    /// Run the drawing pipeline on a fresh scene and return it.
    pub fn render(&mut self) -> &Scene {
        self.scene = Scene::new(self.config.width, self.config.height, self.config.theme.background);
        self.create_title();
        self.create_description();
        self.create_axes();
        self.create_legend();
        self.plot_data();
        self.move_axes_to_foreground();
        info!(elements = self.scene.elements.len(), cells = self.cells.len(), "heat map rendered");
        &self.scene
    }

    pub fn cells(&self) -> &[Cell] { &self.cells }
    pub fn temperature_extent(&self) -> (f64, f64) { self.temps }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }

    /// `"1753 - 2015: base temperature 8.66°C"`
    pub fn description(&self) -> String {
        format!("{} - {}: base temperature {}°C", self.years.0, self.years.1, self.dataset.base_temperature)
    }

    /// Legend swatch temperatures: evenly spaced quantiles of `[min, max]`.
    pub fn legend_stops(&self) -> Vec<f64> {
        let (lo, hi) = self.temps;
        let n = self.config.legend.cells;
        linspace(0.0, 1.0, n)
            .into_iter()
            .filter_map(|p| quantile(&[lo, hi], p))
            .collect()
    }

    /// Mouse-over on cell `index` at pointer (`x`, `y`). Unknown indices leave the tooltip untouched.
    pub fn hover(&mut self, index: usize, x: f64, y: f64) -> Option<&Tooltip> {
        let cell = self.cells.get(index)?;
        let content = cell.tooltip_content();
        let key = cell.year;
        self.tooltip.show(content, x, y, key);
        Some(&self.tooltip)
    }

    /// Mouse-out: clear the tooltip.
    pub fn unhover(&mut self) { self.tooltip.hide(); }

    // ---- pipeline steps -------------------------------------------------------

    fn create_title(&mut self) {
        let theme = &self.config.theme;
        self.scene.push(
            Element::text(self.config.width / 2.0, self.config.padding * 0.25, TITLE, theme.title_size, theme.title)
                .anchored(Anchor::Middle)
                .shifted_em(0.35)
                .with_id("title"),
        );
        debug!("title");
    }

    fn create_description(&mut self) {
        let theme = &self.config.theme;
        let text = self.description();
        self.scene.push(
            Element::text(self.config.width / 2.0, self.config.padding * 0.6, text, theme.description_size, theme.text)
                .anchored(Anchor::Middle)
                .shifted_em(0.35)
                .with_id("description"),
        );
        debug!("description");
    }

    fn create_axes(&mut self) {
        let theme = self.config.theme;
        let (w, h, p) = (self.config.width, self.config.height, self.config.padding);

        let x_ticks = self
            .x_scale
            .ticks_every(10)
            .into_iter()
            .map(|year| Tick::new(self.x_scale.to_px(year), year.to_string()))
            .collect();
        let x_axis = Axis::bottom((p, w - p), x_ticks)
            .tick_size_outer(0.0)
            .build(theme.axis_line, theme.tick, theme.tick_size)
            .with_id("x-axis")
            .at(0.0, h - p);
        self.scene.push(x_axis);
        self.scene.push(
            Element::text(w / 2.0, h - p + 40.0, "Years", theme.label_size, theme.text)
                .anchored(Anchor::Middle)
                .with_id("x-axis-label"),
        );

        let y_ticks = (self.months.0..=self.months.1)
            .map(|m| Tick::new(self.y_scale.to_px(m as f64), month_name(m)))
            .collect();
        let y_axis = Axis::left((p, h - p), y_ticks)
            .tick_size_outer(0.0)
            .build(theme.axis_line, theme.tick, theme.tick_size)
            .with_id("y-axis")
            .at(p, 0.0);
        self.scene.push(y_axis);
        self.scene.push(
            Element::text(p - 70.0, h / 2.0, "Months", theme.label_size, theme.text)
                .anchored(Anchor::Middle)
                .rotated(-90.0)
                .with_id("y-axis-label"),
        );
        debug!("axes");
    }

    fn create_legend(&mut self) {
        let theme = self.config.theme;
        let legend_opts = self.config.legend;
        let (lo, hi) = self.temps;
        let mut legend = Element::group()
            .with_id("legend")
            .at(self.config.padding, self.config.height - self.config.padding + 30.0);

        for (i, t) in self.legend_stops().into_iter().enumerate() {
            legend.push(
                Element::rect(i as f64 * legend_opts.cell_width, 0.0, legend_opts.cell_width, legend_opts.cell_height, self.color_scale.color(t))
                    .with_stroke(theme.legend_stroke)
                    .with_data("temp", format!("{t:.2}")),
            );
        }

        let temp_scale = LinearScale::new((lo, hi), (0.0, legend_opts.width()));
        let ticks = temp_scale
            .ticks(legend_opts.cells)
            .into_iter()
            .map(|t| Tick::new(temp_scale.to_px(t), format!("{t:.2}")))
            .collect();
        legend.push(
            Axis::bottom((0.0, legend_opts.width()), ticks)
                .tick_size_outer(0.0)
                .build(theme.axis_line, theme.tick, theme.tick_size)
                .with_id("legend-axis")
                .at(0.0, legend_opts.cell_height),
        );
        self.scene.push(legend);
        debug!(cells = legend_opts.cells, "legend");
    }

    fn plot_data(&mut self) {
        for cell in &self.cells {
            let r = cell.rect;
            self.scene.push(
                Element::rect(r.left, r.top, r.width(), r.height(), cell.fill)
                    .with_class("cell")
                    .with_data("month", cell.month_index())
                    .with_data("year", cell.year)
                    .with_data("temp", cell.temperature)
                    .with_title(cell.tooltip_content()),
            );
        }
        debug!(cells = self.cells.len(), "cells");
    }

    fn move_axes_to_foreground(&mut self) {
        self.scene.raise("x-axis");
        self.scene.raise("y-axis");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MonthlyVariance;

    fn tiny() -> Dataset {
        let mut v = Vec::new();
        for year in 1999..=2001 {
            for month in 1..=12 {
                v.push(MonthlyVariance { year, month, variance: (month as f64 - 6.5) * 0.1 });
            }
        }
        Dataset::new(8.66, v)
    }

    #[test]
    fn rejects_zero_padding_before_drawing() {
        let err = HeatMap::new(tiny(), Configuration::new(1600.0, 540.0, 0.0)).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn pipeline_order_puts_axes_last() {
        let mut hm = HeatMap::new(tiny(), Configuration::default()).unwrap();
        let scene = hm.render();
        let n = scene.elements.len();
        assert_eq!(scene.position("x-axis"), Some(n - 2));
        assert_eq!(scene.position("y-axis"), Some(n - 1));
        assert_eq!(scene.position("title"), Some(0));
        assert_eq!(scene.position("description"), Some(1));
    }

    #[test]
    fn render_is_repeatable() {
        let mut hm = HeatMap::new(tiny(), Configuration::default()).unwrap();
        let first = hm.render().clone();
        let second = hm.render().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn hover_unknown_index_is_ignored() {
        let mut hm = HeatMap::new(tiny(), Configuration::default()).unwrap();
        assert!(hm.hover(10_000, 0.0, 0.0).is_none());
        assert!(!hm.tooltip().is_visible());
    }

    #[test]
    fn description_mentions_range_and_base() {
        let hm = HeatMap::new(tiny(), Configuration::default()).unwrap();
        assert_eq!(hm.description(), "1999 - 2001: base temperature 8.66°C");
    }
}
