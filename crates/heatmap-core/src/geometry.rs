// File: crates/heatmap-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Bounding box of a set of rects, `None` when empty.
pub fn bounds<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Rect> {
    rects.into_iter().fold(None, |acc: Option<Rect>, r| Some(acc.map_or(*r, |a| a.union(r))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_bounds() {
        let a = Rect::from_ltwh(0.0, 0.0, 10.0, 5.0);
        let b = Rect::from_ltrb(5.0, -2.0, 20.0, 3.0);
        assert_eq!(a.union(&b), Rect::from_ltrb(0.0, -2.0, 20.0, 5.0));
        assert_eq!(bounds([&a, &b]), Some(a.union(&b)));
        assert_eq!(bounds(std::iter::empty()), None);
    }
}
