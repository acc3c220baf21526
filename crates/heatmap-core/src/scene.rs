// File: crates/heatmap-core/src/scene.rs
// Summary: Retained element tree the renderer draws into; serialized to SVG or rasterized to PNG.

use crate::color::Rgb;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// Fraction of the text width to shift left.
    pub fn offset_frac(self) -> f32 {
        match self {
            Anchor::Start => 0.0,
            Anchor::Middle => 0.5,
            Anchor::End => 1.0,
        }
    }

    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Group,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
        stroke: Option<Rgb>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgb,
    },
    /// `y` is the baseline; `dy` shifts it in em units. `rotate` is in degrees around (x, y).
    Text {
        x: f64,
        y: f64,
        dy: f32,
        content: String,
        anchor: Anchor,
        size: f32,
        fill: Rgb,
        rotate: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub id: Option<String>,
    pub class: Option<String>,
    /// Applied to this element and its children.
    pub translate: (f64, f64),
    /// Emitted as `data-<key>` attributes.
    pub data: Vec<(&'static str, String)>,
    /// Emitted as a `<title>` child (native hover text).
    pub title: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    fn from_shape(shape: Shape) -> Self {
        Self { shape, id: None, class: None, translate: (0.0, 0.0), data: Vec::new(), title: None, children: Vec::new() }
    }

    pub fn group() -> Self { Self::from_shape(Shape::Group) }

    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: Rgb) -> Self {
        Self::from_shape(Shape::Rect { x, y, width, height, fill, stroke: None })
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Rgb) -> Self {
        Self::from_shape(Shape::Line { x1, y1, x2, y2, stroke })
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>, size: f32, fill: Rgb) -> Self {
        Self::from_shape(Shape::Text {
            x,
            y,
            dy: 0.0,
            content: content.into(),
            anchor: Anchor::Start,
            size,
            fill,
            rotate: 0.0,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn at(mut self, tx: f64, ty: f64) -> Self {
        self.translate = (tx, ty);
        self
    }

    pub fn with_data(mut self, key: &'static str, value: impl ToString) -> Self {
        self.data.push((key, value.to_string()));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_stroke(mut self, color: Rgb) -> Self {
        if let Shape::Rect { stroke, .. } = &mut self.shape {
            *stroke = Some(color);
        }
        self
    }

    /// Text-only modifiers; no-ops on other shapes.
    pub fn anchored(mut self, a: Anchor) -> Self {
        if let Shape::Text { anchor, .. } = &mut self.shape {
            *anchor = a;
        }
        self
    }

    pub fn shifted_em(mut self, em: f32) -> Self {
        if let Shape::Text { dy, .. } = &mut self.shape {
            *dy = em;
        }
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        if let Shape::Text { rotate, .. } = &mut self.shape {
            *rotate = degrees;
        }
        self
    }

    pub fn push(&mut self, child: Element) { self.children.push(child); }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref().is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Text content for text shapes.
    pub fn text_content(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Rect bounds in the parent's coordinate space, `None` for non-rects.
    pub fn rect_bounds(&self) -> Option<Rect> {
        match self.shape {
            Shape::Rect { x, y, width, height, .. } => {
                Some(Rect::from_ltwh(x + self.translate.0, y + self.translate.1, width, height))
            }
            _ => None,
        }
    }

    fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn collect_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for c in &self.children {
            c.collect_class(class, out);
        }
    }
}

/// The drawing surface: a `width` x `height` viewBox with top-level elements in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: Rgb) -> Self {
        Self { width, height, background, elements: Vec::new() }
    }

    pub fn push(&mut self, el: Element) { self.elements.push(el); }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find_map(|e| e.find(id))
    }

    /// All elements carrying `class`, in paint order.
    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        for e in &self.elements {
            e.collect_class(class, &mut out);
        }
        out
    }

    /// Paint-order index of a top-level element.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id.as_deref() == Some(id))
    }

    /// Move a top-level element to the end of the paint order (drawn last, on top).
    /// Returns false when no top-level element has this id.
    pub fn raise(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(i) => {
                let el = self.elements.remove(i);
                self.elements.push(el);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_moves_to_end() {
        let mut s = Scene::new(10.0, 10.0, Rgb::WHITE);
        s.push(Element::group().with_id("a"));
        s.push(Element::group().with_id("b"));
        s.push(Element::rect(0.0, 0.0, 1.0, 1.0, Rgb::BLACK).with_class("cell"));
        assert!(s.raise("a"));
        assert_eq!(s.position("a"), Some(2));
        assert!(!s.raise("missing"));
    }

    #[test]
    fn find_and_select_are_recursive() {
        let mut s = Scene::new(10.0, 10.0, Rgb::WHITE);
        let mut g = Element::group().with_id("legend");
        g.push(Element::rect(0.0, 0.0, 1.0, 1.0, Rgb::BLACK).with_class("swatch").with_id("inner"));
        s.push(g);
        assert!(s.find("inner").is_some());
        assert_eq!(s.select_class("swatch").len(), 1);
        assert_eq!(s.position("inner"), None);
    }

    #[test]
    fn builders_only_touch_matching_shapes() {
        let r = Element::rect(1.0, 2.0, 3.0, 4.0, Rgb::WHITE).at(10.0, 0.0).rotated(90.0).with_stroke(Rgb::BLACK);
        assert_eq!(r.rect_bounds(), Some(Rect::from_ltwh(11.0, 2.0, 3.0, 4.0)));
        assert!(matches!(r.shape, Shape::Rect { stroke: Some(_), .. }));
        let t = Element::text(0.0, 0.0, "Years", 12.0, Rgb::BLACK).anchored(Anchor::Middle);
        assert_eq!(t.text_content(), Some("Years"));
        assert!(matches!(t.shape, Shape::Text { anchor: Anchor::Middle, .. }));
    }
}
