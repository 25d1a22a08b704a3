//! Cooked-score evaluation
//!
//! The score is a weighted sum over a degree's statistics, adjusted for
//! postgraduate study and starting salary, scaled by the grade multiplier and
//! finally clamped to `[0, 1]`. The order of those steps is part of the
//! result: clamping or multiplying earlier gives different numbers.

use crate::core::models::{DegreeRecord, Grade, PostGrad};
use serde::Serialize;

/// Weight of automation exposure in the base sum
pub const AI_EXPOSURE_WEIGHT: f64 = 0.45;
/// Weight of the unemployment fraction (`1 - employment_rate`) in the base sum
pub const UNEMPLOYMENT_WEIGHT: f64 = 2.5;
/// Weight of market saturation in the base sum
pub const SATURATION_WEIGHT: f64 = 0.1;

/// Exposure or saturation above this makes a PhD count against the graduate
pub const OVERQUALIFIED_THRESHOLD: f64 = 0.7;
/// Added for a PhD in an exposed or saturated field
pub const PHD_OVERQUALIFIED_PENALTY: f64 = 0.15;
/// Added for a PhD in any other field
pub const PHD_ADJUSTMENT: f64 = -0.10;
/// Added for a Masters
pub const MASTERS_ADJUSTMENT: f64 = -0.05;

/// Starting salaries strictly above this (thousands) reduce the score
pub const HIGH_SALARY_THRESHOLD: f64 = 30.0;
/// Starting salaries strictly below this (thousands) raise the score
pub const LOW_SALARY_THRESHOLD: f64 = 20.0;
/// Size of the salary buffer in either direction
pub const SALARY_BUFFER: f64 = 0.10;

/// Multiplier used when a grade label is not recognized
pub const FALLBACK_GRADE_MULTIPLIER: f64 = 1.0;

/// Every intermediate term of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// `ai_exposure * 0.45`
    pub exposure_term: f64,
    /// `(1 - employment_rate) * 2.5`
    pub employment_term: f64,
    /// `saturation * 0.1`
    pub saturation_term: f64,
    /// Postgraduate adjustment added to the base sum
    pub postgrad_adjustment: f64,
    /// Salary buffer added after the postgraduate adjustment
    pub salary_adjustment: f64,
    /// Grade multiplier applied to the running sum
    pub grade_multiplier: f64,
    /// Final score in `[0, 1]`
    pub score: f64,
}

impl ScoreBreakdown {
    /// Breakdown for "no degree selected": every term zero
    #[must_use]
    pub const fn empty(grade_multiplier: f64) -> Self {
        Self {
            exposure_term: 0.0,
            employment_term: 0.0,
            saturation_term: 0.0,
            postgrad_adjustment: 0.0,
            salary_adjustment: 0.0,
            grade_multiplier,
            score: 0.0,
        }
    }

    /// Sum of the three weighted degree terms
    #[must_use]
    pub fn base(&self) -> f64 {
        self.exposure_term + self.employment_term + self.saturation_term
    }

    /// Running sum right before the grade multiplier
    #[must_use]
    pub fn pre_multiplier(&self) -> f64 {
        self.base() + self.postgrad_adjustment + self.salary_adjustment
    }

    /// Product before clamping
    #[must_use]
    pub fn unclamped(&self) -> f64 {
        self.pre_multiplier() * self.grade_multiplier
    }
}

/// Grade multiplier, applied last before clamping
#[must_use]
pub const fn grade_multiplier(grade: Grade) -> f64 {
    match grade {
        Grade::First => 0.85,
        Grade::UpperSecond => 1.00,
        Grade::LowerSecond => 1.15,
        Grade::Third => 1.40,
    }
}

/// Postgraduate adjustment for `degree`.
///
/// A PhD in a field whose exposure or saturation exceeds
/// [`OVERQUALIFIED_THRESHOLD`] is penalized instead of discounted.
#[must_use]
pub fn postgrad_adjustment(degree: &DegreeRecord, post_grad: PostGrad) -> f64 {
    match post_grad {
        PostGrad::PhD
            if degree.ai_exposure > OVERQUALIFIED_THRESHOLD
                || degree.saturation > OVERQUALIFIED_THRESHOLD =>
        {
            PHD_OVERQUALIFIED_PENALTY
        }
        PostGrad::PhD => PHD_ADJUSTMENT,
        PostGrad::Masters => MASTERS_ADJUSTMENT,
        PostGrad::None => 0.0,
    }
}

/// Salary buffer. Exactly 20 or 30 thousand triggers neither side.
#[must_use]
pub fn salary_adjustment(starting_salary: f64) -> f64 {
    if starting_salary > HIGH_SALARY_THRESHOLD {
        -SALARY_BUFFER
    } else if starting_salary < LOW_SALARY_THRESHOLD {
        SALARY_BUFFER
    } else {
        0.0
    }
}

fn compute(
    degree: Option<&DegreeRecord>,
    multiplier: f64,
    post_grad: Option<PostGrad>,
) -> ScoreBreakdown {
    let Some(degree) = degree else {
        return ScoreBreakdown::empty(multiplier);
    };

    let mut breakdown = ScoreBreakdown {
        exposure_term: degree.ai_exposure * AI_EXPOSURE_WEIGHT,
        employment_term: (1.0 - degree.employment_rate) * UNEMPLOYMENT_WEIGHT,
        saturation_term: degree.saturation * SATURATION_WEIGHT,
        postgrad_adjustment: post_grad.map_or(0.0, |pg| postgrad_adjustment(degree, pg)),
        salary_adjustment: salary_adjustment(degree.starting_salary),
        grade_multiplier: multiplier,
        score: 0.0,
    };
    breakdown.score = breakdown.unclamped().clamp(0.0, 1.0);
    breakdown
}

/// Evaluate with every intermediate term kept
#[must_use]
pub fn breakdown(degree: Option<&DegreeRecord>, grade: Grade, post_grad: PostGrad) -> ScoreBreakdown {
    compute(degree, grade_multiplier(grade), Some(post_grad))
}

/// Cooked score in `[0, 1]` for a degree, grade and postgraduate level.
///
/// No degree gives exactly `0.0`.
#[must_use]
pub fn evaluate(degree: Option<&DegreeRecord>, grade: Grade, post_grad: PostGrad) -> f64 {
    breakdown(degree, grade, post_grad).score
}

/// Evaluate from raw labels.
///
/// An unknown grade uses [`FALLBACK_GRADE_MULTIPLIER`]; an unknown postgraduate
/// label applies no adjustment. Never fails.
#[must_use]
pub fn evaluate_labels(degree: Option<&DegreeRecord>, grade: &str, post_grad: &str) -> f64 {
    let multiplier = grade
        .parse::<Grade>()
        .map_or(FALLBACK_GRADE_MULTIPLIER, grade_multiplier);
    compute(degree, multiplier, post_grad.parse().ok()).score
}

/// Convert a score to a whole percentage.
///
/// Rounds half away from zero, so `0.495` becomes `50` and lands in the
/// higher tier. The result is clamped to `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_percentage(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
