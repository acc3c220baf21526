// File: crates/heatmap-core/src/svg.rs
// Summary: Serialize a Scene to a standalone interactive SVG document or an HTML page.

use std::fmt::Write as _;

use crate::chart::TITLE;
use crate::scene::{Element, Scene, Shape};
use crate::theme::Theme;

/// Escape text for XML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Shortest decimal that round-trips, trimmed to 3 decimals for coordinates.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

// Hover wiring: every `.cell` shows the shared `#tooltip` with the text of its <title>.
const TOOLTIP_SCRIPT: &str = r#"  <script type="text/javascript"><![CDATA[
    (function () {
      var svg = document.currentScript ? document.currentScript.ownerSVGElement : null;
      var tip = document.getElementById('tooltip');
      if (!tip) return;
      svg = svg || tip.ownerSVGElement;
      var box = tip.querySelector('rect');
      var text = tip.querySelector('text');
      function toSvg(evt) {
        var pt = svg.createSVGPoint();
        pt.x = evt.clientX; pt.y = evt.clientY;
        var ctm = svg.getScreenCTM();
        return ctm ? pt.matrixTransform(ctm.inverse()) : pt;
      }
      function showTooltip(content, x, y, key) {
        while (text.firstChild) text.removeChild(text.firstChild);
        content.split('\n').forEach(function (line) {
          var span = document.createElementNS('http://www.w3.org/2000/svg', 'tspan');
          span.setAttribute('x', 8);
          span.setAttribute('dy', '1.2em');
          span.textContent = line;
          text.appendChild(span);
        });
        tip.setAttribute('data-year', key);
        var bb = text.getBBox();
        box.setAttribute('width', bb.width + 16);
        box.setAttribute('height', bb.height + 12);
        tip.setAttribute('transform', 'translate(' + (x + 12) + ',' + (y - bb.height - 24) + ')');
        tip.setAttribute('visibility', 'visible');
      }
      function hideTooltip() {
        tip.setAttribute('visibility', 'hidden');
      }
      Array.prototype.forEach.call(document.querySelectorAll('.cell'), function (cell) {
        var title = cell.querySelector('title');
        var content = title ? title.textContent : '';
        cell.addEventListener('mouseover', function (evt) {
          var p = toSvg(evt);
          showTooltip(content, p.x, p.y, cell.getAttribute('data-year'));
        });
        cell.addEventListener('mouseout', hideTooltip);
      });
    })();
  ]]></script>
"#;

/// Standalone SVG document (`viewBox="0 0 width height"`).
pub fn to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::with_capacity(256 + scene.elements.len() * 256);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{font}">"#,
        w = num(scene.width),
        h = num(scene.height),
        font = escape(theme.font_family),
    );
    let _ = writeln!(
        out,
        r#"  <style>
    #title {{ font-weight: bold; }}
    .cell:hover {{ stroke: {hl}; stroke-width: 1; }}
    #tooltip text {{ font-size: 13px; fill: {fg}; }}
    #tooltip rect {{ fill: {bg}; opacity: 0.9; }}
  </style>"#,
        hl = theme.axis_line,
        fg = theme.tooltip_text,
        bg = theme.tooltip_background,
    );
    let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, scene.background);
    for el in &scene.elements {
        write_element(&mut out, el, 1);
    }
    out.push_str(
        r#"  <g id="tooltip" visibility="hidden" pointer-events="none"><rect rx="4" width="0" height="0"/><text x="0" y="0"></text></g>
"#,
    );
    out.push_str(TOOLTIP_SCRIPT);
    out.push_str("</svg>\n");
    out
}

/// Minimal HTML page hosting the chart inside `#chart-container`.
pub fn to_html(scene: &Scene, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ margin: 0; background: {bg}; color: {fg}; font-family: {font}; }}
  #chart-container {{ max-width: 100%; padding: 1rem; box-sizing: border-box; }}
  #chart-container svg {{ width: 100%; height: auto; }}
</style>
</head>
<body>
<div id="chart-container">
{svg}</div>
</body>
</html>
"#,
        title = escape(TITLE),
        bg = scene.background,
        fg = theme.text,
        font = theme.font_family,
        svg = to_svg(scene, theme),
    )
}

fn attrs(out: &mut String, el: &Element) {
    if let Some(id) = &el.id {
        let _ = write!(out, r#" id="{}""#, escape(id));
    }
    if let Some(class) = &el.class {
        let _ = write!(out, r#" class="{}""#, escape(class));
    }
    let (tx, ty) = el.translate;
    let rotate = match el.shape {
        Shape::Text { x, y, rotate, .. } if rotate != 0.0 => {
            format!(" rotate({} {} {})", num(rotate), num(x), num(y))
        }
        _ => String::new(),
    };
    if tx != 0.0 || ty != 0.0 || !rotate.is_empty() {
        let translate = if tx != 0.0 || ty != 0.0 { format!("translate({},{})", num(tx), num(ty)) } else { String::new() };
        let _ = write!(out, r#" transform="{}""#, format!("{translate}{rotate}").trim());
    }
    for (k, v) in &el.data {
        let _ = write!(out, r#" data-{k}="{}""#, escape(v));
    }
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let pad = "  ".repeat(depth);
    let (tag, shape_attrs, text) = match &el.shape {
        Shape::Group => ("g", String::new(), None),
        Shape::Rect { x, y, width, height, fill, stroke } => {
            let mut a = format!(
                r#" x="{}" y="{}" width="{}" height="{}" fill="{fill}""#,
                num(*x),
                num(*y),
                num(*width),
                num(*height)
            );
            if let Some(s) = stroke {
                let _ = write!(a, r#" stroke="{s}""#);
            }
            ("rect", a, None)
        }
        Shape::Line { x1, y1, x2, y2, stroke } => (
            "line",
            format!(
                r#" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}""#,
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2)
            ),
            None,
        ),
        Shape::Text { x, y, dy, content, anchor, size, fill, .. } => {
            let mut a = format!(
                r#" x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{fill}""#,
                num(*x),
                num(*y),
                anchor.as_svg(),
                num(*size as f64)
            );
            if *dy != 0.0 {
                let _ = write!(a, r#" dy="{}em""#, num(*dy as f64));
            }
            ("text", a, Some(content.as_str()))
        }
    };

    let _ = write!(out, "{pad}<{tag}");
    attrs(out, el);
    out.push_str(&shape_attrs);

    if el.children.is_empty() && el.title.is_none() && text.is_none() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');
    if let Some(title) = &el.title {
        let _ = write!(out, "<title>{}</title>", escape(title));
    }
    if let Some(t) = text {
        out.push_str(&escape(t));
    }
    if el.children.is_empty() {
        let _ = writeln!(out, "</{tag}>");
        return;
    }
    out.push('\n');
    for child in &el.children {
        write_element(out, child, depth + 1);
    }
    let _ = writeln!(out, "{pad}</{tag}>");
}
