// File: crates/heatmap-core/src/color.rs
// Summary: RGB color type, the RdYlBu diverging ramp and a sequential color scale.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn channels(&self) -> [f64; 3] { [self.r as f64, self.g as f64, self.b as f64] }

    fn from_channels(c: [f64; 3]) -> Self {
        let q = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self::new(q(c[0]), q(c[1]), q(c[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// ColorBrewer RdYlBu, 11 classes, red (hot) to blue (cold).
pub const RD_YL_BU: [Rgb; 11] = [
    Rgb::from_hex(0xa50026),
    Rgb::from_hex(0xd73027),
    Rgb::from_hex(0xf46d43),
    Rgb::from_hex(0xfdae61),
    Rgb::from_hex(0xfee090),
    Rgb::from_hex(0xffffbf),
    Rgb::from_hex(0xe0f3f8),
    Rgb::from_hex(0xabd9e9),
    Rgb::from_hex(0x74add1),
    Rgb::from_hex(0x4575b4),
    Rgb::from_hex(0x313695),
];

#[inline]
fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Uniform cubic B-spline through `stops`, per channel. `t` is clamped to [0, 1];
/// the curve passes exactly through the first and last stop.
pub fn interpolate_basis(stops: &[Rgb], t: f64) -> Rgb {
    match stops.len() {
        0 => return Rgb::BLACK,
        1 => return stops[0],
        _ => {}
    }
    let n = stops.len() - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let i = if t >= 1.0 { n - 1 } else { (t * n as f64).floor() as usize };
    let local = (t - i as f64 / n as f64) * n as f64;

    let v1 = stops[i].channels();
    let v2 = stops[i + 1].channels();
    let mut out = [0.0; 3];
    for k in 0..3 {
        let v0 = if i > 0 { stops[i - 1].channels()[k] } else { 2.0 * v1[k] - v2[k] };
        let v3 = if i + 2 <= n { stops[i + 2].channels()[k] } else { 2.0 * v2[k] - v1[k] };
        out[k] = basis(local, v0, v1[k], v2[k], v3);
    }
    Rgb::from_channels(out)
}

pub fn interpolate_rd_yl_bu(t: f64) -> Rgb { interpolate_basis(&RD_YL_BU, t) }

/// Maps a continuous domain onto an interpolator's [0, 1] input.
/// A reversed domain (`d0 > d1`) inverts the ramp.
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    pub d0: f64,
    pub d1: f64,
    interpolator: fn(f64) -> Rgb,
}

impl SequentialScale {
    pub fn new(d0: f64, d1: f64, interpolator: fn(f64) -> Rgb) -> Self {
        Self { d0, d1, interpolator }
    }

    /// Normalized position of `v` in the domain; 0.5 for a degenerate domain.
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 { 0.5 } else { (v - self.d0) / span }
    }

    pub fn color(&self, v: f64) -> Rgb { (self.interpolator)(self.normalize(v)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_display() {
        assert_eq!(Rgb::from_hex(0xa50026).to_string(), "#a50026");
        assert_eq!(Rgb::new(0, 15, 255).to_string(), "#000fff");
    }

    #[test]
    fn ramp_hits_endpoints_and_midpoint() {
        assert_eq!(interpolate_rd_yl_bu(0.0), RD_YL_BU[0]);
        assert_eq!(interpolate_rd_yl_bu(1.0), RD_YL_BU[10]);
        assert_eq!(interpolate_rd_yl_bu(-3.0), RD_YL_BU[0]);
        assert_eq!(interpolate_rd_yl_bu(7.0), RD_YL_BU[10]);
        // the spline smooths interior stops; the centre stays a pale yellow
        let mid = interpolate_rd_yl_bu(0.5);
        assert!(mid.r > 230 && mid.g > 230 && mid.b > 160, "{mid}");
    }

    #[test]
    fn inverted_domain_maps_max_to_red() {
        let scale = SequentialScale::new(13.9, 1.7, interpolate_rd_yl_bu);
        assert_eq!(scale.color(13.9), RD_YL_BU[0]);
        assert_eq!(scale.color(1.7), RD_YL_BU[10]);
        let warm = scale.color(12.0);
        assert!(warm.r > warm.b);
        let cold = scale.color(3.0);
        assert!(cold.b > cold.r);
    }

    #[test]
    fn degenerate_domain_uses_centre() {
        let scale = SequentialScale::new(8.0, 8.0, interpolate_rd_yl_bu);
        assert_eq!(scale.color(8.0), interpolate_rd_yl_bu(0.5));
    }
}
