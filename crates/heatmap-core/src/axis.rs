// File: crates/heatmap-core/src/axis.rs
// Summary: Axis model (ticks + labels) and its conversion into scene elements.

use crate::color::Rgb;
use crate::scene::{Anchor, Element};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// A tick at pixel `position` along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self { position, label: label.into() }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orientation: Orientation,
    /// Pixel extent of the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(orientation: Orientation, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self { orientation, range, ticks, tick_size: 6.0, tick_size_outer: 6.0, tick_padding: 3.0 }
    }

    pub fn bottom(range: (f64, f64), ticks: Vec<Tick>) -> Self { Self::new(Orientation::Bottom, range, ticks) }

    pub fn left(range: (f64, f64), ticks: Vec<Tick>) -> Self { Self::new(Orientation::Left, range, ticks) }

    pub fn tick_size_outer(mut self, size: f64) -> Self {
        self.tick_size_outer = size;
        self
    }

    /// Build a `g.axis` containing the domain line and one `g.tick` (mark + label) per tick.
    pub fn build(&self, line: Rgb, label: Rgb, font_size: f32) -> Element {
        let (r0, r1) = self.range;
        let outer = self.tick_size_outer;
        let mut g = Element::group().with_class("axis");

        // Domain path: end caps of `outer` length, then the spine.
        match self.orientation {
            Orientation::Bottom => {
                if outer > 0.0 {
                    g.push(Element::line(r0, 0.0, r0, outer, line).with_class("domain"));
                    g.push(Element::line(r1, 0.0, r1, outer, line).with_class("domain"));
                }
                g.push(Element::line(r0, 0.0, r1, 0.0, line).with_class("domain"));
            }
            Orientation::Left => {
                if outer > 0.0 {
                    g.push(Element::line(-outer, r0, 0.0, r0, line).with_class("domain"));
                    g.push(Element::line(-outer, r1, 0.0, r1, line).with_class("domain"));
                }
                g.push(Element::line(0.0, r0, 0.0, r1, line).with_class("domain"));
            }
        }

        let k = self.tick_size;
        let gap = k.max(0.0) + self.tick_padding;
        for t in &self.ticks {
            let tick = match self.orientation {
                Orientation::Bottom => {
                    let mut tick = Element::group().with_class("tick").at(t.position, 0.0);
                    tick.push(Element::line(0.0, 0.0, 0.0, k, line));
                    tick.push(
                        Element::text(0.0, gap, &t.label, font_size, label)
                            .anchored(Anchor::Middle)
                            .shifted_em(0.71),
                    );
                    tick
                }
                Orientation::Left => {
                    let mut tick = Element::group().with_class("tick").at(0.0, t.position);
                    tick.push(Element::line(-k, 0.0, 0.0, 0.0, line));
                    tick.push(
                        Element::text(-gap, 0.0, &t.label, font_size, label)
                            .anchored(Anchor::End)
                            .shifted_em(0.32),
                    );
                    tick
                }
            };
            g.push(tick);
        }
        g
    }
}
