// File: crates/heatmap-core/src/scale.rs
// Summary: Time (X, calendar years) and linear (Y months, legend temperatures) scales.

use chrono::{Datelike, NaiveDate};

/// Days since 0001-01-01 of 1 January of `year` (proleptic Gregorian).
fn year_start_days(year: i32) -> f64 {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d.num_days_from_ce() as f64,
        // outside chrono's range; mean Gregorian year is close enough
        None => (year as f64 - 1.0) * 365.2425,
    }
}

/// Horizontal time scale mapping calendar instants (1 January of a year) onto pixels.
/// Leap years are one day wider, exactly like a calendar axis.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub first_year: i32,
    pub end_year: i32,
    pub left_px: f64,
    pub right_px: f64,
    d0: f64,
    d1: f64,
}

impl TimeScale {
    /// Domain is `[1 Jan first_year, 1 Jan end_year]`; `end_year` is exclusive.
    pub fn years(first_year: i32, end_year: i32, left_px: f64, right_px: f64) -> Self {
        let end_year = end_year.max(first_year.saturating_add(1));
        Self {
            first_year,
            end_year,
            left_px,
            right_px,
            d0: year_start_days(first_year),
            d1: year_start_days(end_year),
        }
    }

    #[inline]
    pub fn to_px(&self, year: i32) -> f64 {
        let t = (year_start_days(year) - self.d0) / (self.d1 - self.d0);
        self.left_px + t * (self.right_px - self.left_px)
    }

    /// Pixel width of one calendar year starting at `year`.
    pub fn year_width(&self, year: i32) -> f64 { self.to_px(year.saturating_add(1)) - self.to_px(year) }

    /// Years inside `[first_year, end_year)` that fall on a multiple of `every`.
    pub fn ticks_every(&self, every: i32) -> Vec<i32> {
        let every = every.max(1);
        let start = self.first_year + (every - self.first_year.rem_euclid(every)) % every;
        (start..self.end_year).step_by(every as usize).collect()
    }
}

/// Continuous linear scale; a reversed range (or domain) inverts the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            d0 -= 0.5;
            d1 += 0.5;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Round tick values covering the domain: steps of 1, 2 or 5 x 10^n chosen so
    /// roughly `count` ticks fit.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        if count == 0 || !(stop - start).is_finite() {
            return Vec::new();
        }
        let step = (stop - start) / count as f64;
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        if power < 0.0 {
            // work with the reciprocal increment to keep decimal ticks exact
            let inc = 10f64.powf(-power) / factor;
            let mut i1 = (start * inc).round();
            let mut i2 = (stop * inc).round();
            if i1 / inc < start { i1 += 1.0; }
            if i2 / inc > stop { i2 -= 1.0; }
            if i2 < i1 { return Vec::new(); }
            (0..=(i2 - i1) as i64).map(|i| (i1 + i as f64) / inc).collect()
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut i1 = (start / inc).round();
            let mut i2 = (stop / inc).round();
            if i1 * inc < start { i1 += 1.0; }
            if i2 * inc > stop { i2 -= 1.0; }
            if i2 < i1 { return Vec::new(); }
            (0..=(i2 - i1) as i64).map(|i| (i1 + i as f64) * inc).collect()
        }
    }
}
