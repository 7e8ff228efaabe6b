//! Grading arithmetic shared by the result workflow.
//!
//! All percentage handling in the workspace funnels through this module so
//! that letter grades, analytics bands, and rankings agree on one set of
//! thresholds. Percentages are `f64` values in `[0, 100]`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tolerance used when comparing percentages for ranking ties.
const TIE_EPSILON: f64 = 1e-9;

/// Letter grade bands, highest first.
///
/// The same thresholds drive both the per-subject letter grade and the
/// exam-wide distribution histogram: a percentage belongs to the first band
/// whose lower bound it meets, checked in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Map a percentage to its letter grade.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            Grade::APlus
        } else if pct >= 80.0 {
            Grade::A
        } else if pct >= 70.0 {
            Grade::B
        } else if pct >= 60.0 {
            Grade::C
        } else if pct >= 50.0 {
            Grade::D
        } else if pct >= 40.0 {
            Grade::E
        } else {
            Grade::F
        }
    }

    /// Letter form stored in the database (`"A+"`, `"A"`, ... `"F"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }

    /// Human-readable band label used in analytics responses.
    pub fn band_label(&self) -> &'static str {
        match self {
            Grade::APlus => "90-100",
            Grade::A => "80-89",
            Grade::B => "70-79",
            Grade::C => "60-69",
            Grade::D => "50-59",
            Grade::E => "40-49",
            Grade::F => "Below 40",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of `obtained` over `max`, clamped to `[0, 100]`.
///
/// A non-positive `max` yields 0 rather than a division by zero.
pub fn percentage(obtained: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (obtained / max * 100.0).clamp(0.0, 100.0)
}

/// Assign standard competition ranks ("1224") to percentages already sorted
/// in descending order.
///
/// Tied percentages share a rank; the next distinct percentage takes a rank
/// offset by the number of tied entries above it, so `[95, 90, 90, 80]`
/// yields `[1, 2, 2, 4]`.
pub fn competition_ranks(sorted_desc: &[f64]) -> Vec<i32> {
    let mut ranks = Vec::with_capacity(sorted_desc.len());
    for (i, pct) in sorted_desc.iter().enumerate() {
        if i > 0 && (pct - sorted_desc[i - 1]).abs() < TIE_EPSILON {
            let prev = ranks[i - 1];
            ranks.push(prev);
        } else {
            ranks.push(i as i32 + 1);
        }
    }
    ranks
}

/// Fixed-band histogram of overall percentages.
///
/// Bands match [`Grade`] exactly; every percentage lands in one band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GradeDistribution {
    pub band_90_100: i32,
    pub band_80_89: i32,
    pub band_70_79: i32,
    pub band_60_69: i32,
    pub band_50_59: i32,
    pub band_40_49: i32,
    pub band_below_40: i32,
}

impl GradeDistribution {
    /// Add one percentage to the histogram.
    pub fn record(&mut self, pct: f64) {
        match Grade::from_percentage(pct) {
            Grade::APlus => self.band_90_100 += 1,
            Grade::A => self.band_80_89 += 1,
            Grade::B => self.band_70_79 += 1,
            Grade::C => self.band_60_69 += 1,
            Grade::D => self.band_50_59 += 1,
            Grade::E => self.band_40_49 += 1,
            Grade::F => self.band_below_40 += 1,
        }
    }

    /// Build a histogram from an iterator of percentages.
    pub fn from_percentages<I>(percentages: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut dist = Self::default();
        for pct in percentages {
            dist.record(pct);
        }
        dist
    }

    /// Total number of recorded percentages.
    pub fn total(&self) -> i32 {
        self.band_90_100
            + self.band_80_89
            + self.band_70_79
            + self.band_60_69
            + self.band_50_59
            + self.band_40_49
            + self.band_below_40
    }
}

/// Pass/fail counts over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PassStats {
    pub total: i32,
    pub passed: i32,
    pub failed: i32,
    /// `passed / total * 100`, rounded to the nearest integer; 0 for an
    /// empty set.
    pub pass_percentage: f64,
}

impl PassStats {
    /// Tally pass/fail outcomes.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut total = 0;
        let mut passed = 0;
        for is_passed in outcomes {
            total += 1;
            if is_passed {
                passed += 1;
            }
        }
        let pass_percentage = if total == 0 {
            0.0
        } else {
            (f64::from(passed) / f64::from(total) * 100.0).round()
        };
        Self {
            total,
            passed,
            failed: total - passed,
            pass_percentage,
        }
    }
}
