// File: crates/heatmap-cli/src/main.rs
// Summary: Loads the monthly temperature dataset (network or file) and renders the heat map to SVG/HTML/PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heatmap_core::{
    fetch_dataset, load_dataset_file, render_to_png, to_html, to_svg, ConfigOverrides, Configuration, Dataset, HeatMap,
    Layout, RenderOptions, DATASET_URL,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "heatmap", version)]
#[command(about = "Render monthly global land-surface temperature as a heat map")]
struct Cli {
    /// Dataset URL (ignored when --input is given).
    #[arg(long, default_value = DATASET_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching it.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Page layout preset.
    #[arg(long, value_enum, default_value_t = LayoutChoice::Wide)]
    layout: LayoutChoice,

    /// JSON file with any of: width, height, padding, legend, theme.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    #[arg(long)]
    padding: Option<f64>,

    /// Number of legend swatches.
    #[arg(long)]
    legend_cells: Option<usize>,

    /// Theme preset name (light, dark).
    #[arg(long)]
    theme: Option<String>,

    /// Output format; inferred from --out's extension when omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Output path (default: target/out/heatmap_<layout>.<ext>).
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// PNG pixels per viewBox unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    Wide,
    Compact,
}

impl From<LayoutChoice> for Layout {
    fn from(c: LayoutChoice) -> Self {
        match c {
            LayoutChoice::Wide => Layout::Wide,
            LayoutChoice::Compact => Layout::Compact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Html,
    Png,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Html => "html",
            Format::Png => "png",
        }
    }

    fn from_path(p: &Path) -> Option<Self> {
        let ext = p.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "svg" => Some(Format::Svg),
            "html" | "htm" => Some(Format::Html),
            "png" => Some(Format::Png),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heatmap=info,heatmap_core=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(width = config.width, height = config.height, padding = config.padding, legend = config.legend.cells, theme = config.theme.name, "configuration");

    let dataset = load(&cli).await?;

    let mut heatmap = HeatMap::new(dataset, config).context("cannot build heat map")?;
    let scene = heatmap.render();

    let format = cli
        .format
        .or_else(|| cli.out.as_deref().and_then(Format::from_path))
        .unwrap_or(Format::Svg);
    let out = cli.out.clone().unwrap_or_else(|| default_out(cli.layout, format));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    match format {
        Format::Svg => write_text(&out, &to_svg(scene, &config.theme))?,
        Format::Html => write_text(&out, &to_html(scene, &config.theme))?,
        Format::Png => {
            let opts = RenderOptions { scale: cli.scale, font_family: config.theme.font_family, ..RenderOptions::default() };
            render_to_png(scene, &opts, &out).with_context(|| format!("rendering {}", out.display()))?;
        }
    }
    println!("Wrote {}", out.display());
    Ok(())
}

/// Preset, then config file, then individual flags.
fn resolve_config(cli: &Cli) -> Result<Configuration> {
    let file = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
            ConfigOverrides::from_json_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ConfigOverrides::default(),
    };
    let flags = ConfigOverrides {
        width: cli.width,
        height: cli.height,
        padding: cli.padding,
        legend: None,
        theme: cli.theme.clone(),
    };
    let merged = file.merge(flags);
    let mut config = merged.apply(Layout::from(cli.layout).configuration());
    if let Some(n) = cli.legend_cells {
        config.legend.cells = n;
    }
    if let Some(name) = unknown_theme(&merged) {
        warn!(theme = %name, "unknown theme, using {}", config.theme.name);
    }
    config.validate()?;
    Ok(config)
}

/// Theme name requested by the config file or `--theme` that matches no preset.
fn unknown_theme(overrides: &ConfigOverrides) -> Option<&str> {
    let name = overrides.theme.as_deref()?;
    let known = heatmap_core::theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(name));
    (!known).then_some(name)
}

async fn load(cli: &Cli) -> Result<Dataset> {
    match &cli.input {
        Some(path) => load_dataset_file(path).with_context(|| format!("failed to load dataset '{}'", path.display())),
        None => fetch_dataset(&cli.url).await.with_context(|| format!("failed to fetch dataset from {}", cli.url)),
    }
}

/// target/out/heatmap_<layout>.<ext>
fn default_out(layout: LayoutChoice, format: Format) -> PathBuf {
    let name = match layout {
        LayoutChoice::Wide => "wide",
        LayoutChoice::Compact => "compact",
    };
    PathBuf::from("target/out").join(format!("heatmap_{name}.{}", format.extension()))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.PNG")), Some(Format::Png));
        assert_eq!(Format::from_path(Path::new("chart.htm")), Some(Format::Html));
        assert_eq!(Format::from_path(Path::new("chart")), None);
    }

    #[test]
    fn flags_override_preset() {
        let cli = Cli::parse_from(["heatmap", "--layout", "compact", "--width", "1000", "--legend-cells", "5", "--theme", "dark"]);
        let cfg = resolve_config(&cli).unwrap();
        assert_eq!(cfg.width, 1000.0);
        assert_eq!(cfg.height, 600.0);
        assert_eq!(cfg.legend.cells, 5);
        assert_eq!(cfg.theme.name, "dark");
    }

    #[test]
    fn unknown_theme_is_detected_from_file_or_flag() {
        let file = ConfigOverrides::from_json_str(r#"{"theme": "solarized"}"#).unwrap();
        assert_eq!(unknown_theme(&file.clone().merge(ConfigOverrides::default())), Some("solarized"));
        let flag = ConfigOverrides { theme: Some("Dark".into()), ..Default::default() };
        assert_eq!(unknown_theme(&file.merge(flag)), None);
        assert_eq!(unknown_theme(&ConfigOverrides::default()), None);
    }

    #[test]
    fn invalid_flags_fail_validation() {
        let cli = Cli::parse_from(["heatmap", "--padding", "0"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn default_output_path() {
        assert_eq!(default_out(LayoutChoice::Compact, Format::Png), PathBuf::from("target/out/heatmap_compact.png"));
    }
}
