//! Relevance-score normalization.
//!
//! The generation service returns free-form floats. Accepted items always
//! carry a score in `(RELEVANCE_LOWER_BOUND, MAX_RELEVANCE]`, rounded to one
//! decimal, so the lowest stored value is [`MIN_RELEVANCE`].

/// Exclusive lower bound of the relevance range. Never stored.
pub const RELEVANCE_LOWER_BOUND: f64 = 0.1;

/// Lowest stored relevance score: the first one-decimal value above
/// [`RELEVANCE_LOWER_BOUND`].
pub const MIN_RELEVANCE: f64 = 0.2;

/// Highest stored relevance score.
pub const MAX_RELEVANCE: f64 = 99.9;

/// Round a raw relevance score to one decimal and clamp it into range.
///
/// Non-finite input maps to [`MIN_RELEVANCE`].
#[must_use]
pub fn normalize_relevance(raw: f64) -> f64 {
    if !raw.is_finite() {
        return MIN_RELEVANCE;
    }
    let rounded = (raw * 10.0).round() / 10.0;
    rounded.clamp(MIN_RELEVANCE, MAX_RELEVANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 50.0)]
    #[case(87.46, 87.5)]
    #[case(0.0, MIN_RELEVANCE)]
    #[case(-3.0, MIN_RELEVANCE)]
    #[case(0.1, MIN_RELEVANCE)]
    #[case(0.14, MIN_RELEVANCE)]
    #[case(0.26, 0.3)]
    #[case(100.0, MAX_RELEVANCE)]
    #[case(250.0, MAX_RELEVANCE)]
    #[case(f64::NAN, MIN_RELEVANCE)]
    #[case(f64::INFINITY, MIN_RELEVANCE)]
    fn clamps_and_rounds(#[case] raw: f64, #[case] expected: f64) {
        assert!((normalize_relevance(raw) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(0.1)]
    #[case(0.14)]
    #[case(f64::NAN)]
    #[case(f64::NEG_INFINITY)]
    #[case(1e9)]
    fn stored_score_stays_inside_half_open_range(#[case] raw: f64) {
        let score = normalize_relevance(raw);
        assert!(
            score > RELEVANCE_LOWER_BOUND && score <= MAX_RELEVANCE,
            "raw={raw} -> {score}"
        );
    }
}
