// File: crates/heatmap-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing SVG, HTML and PNG outputs.

use heatmap_core::{load_dataset_file, render_to_png, render_to_png_bytes, to_html, to_svg, Configuration, HeatMap, RenderOptions};

#[test]
fn render_smoke_outputs() {
    let input = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/global-temperature-sample.json");
    let ds = load_dataset_file(&input).expect("load fixture");
    let cfg = Configuration::default();
    let theme = cfg.theme;
    let mut hm = HeatMap::new(ds, cfg).expect("valid inputs");
    let scene = hm.render().clone();

    let out_dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&out_dir).unwrap();

    let svg = to_svg(&scene, &theme);
    assert_eq!(svg.matches(r#"class="cell""#).count(), hm.cells().len());
    assert!(svg.contains(r#"id="x-axis""#));
    std::fs::write(out_dir.join("smoke.svg"), &svg).unwrap();

    let html = to_html(&scene, &theme);
    assert!(html.contains(r#"id="chart-container""#));
    std::fs::write(out_dir.join("smoke.html"), &html).unwrap();

    let png = out_dir.join("smoke.png");
    render_to_png(&scene, &RenderOptions::default(), &png).expect("render should succeed");
    let meta = std::fs::metadata(&png).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&scene, &RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
