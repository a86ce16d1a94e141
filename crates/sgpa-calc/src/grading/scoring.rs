/// Weight of each of CIE and SEE in the final score.
pub const COMPONENT_WEIGHT: f64 = 50.0;

/// Weighted final score on a 0–100 scale: `(cie/cie_max)*50 + (see/see_max)*50`.
///
/// Returns 0 when either maximum is zero. Inputs are not clamped here; the rubric
/// reducers own that.
pub fn combine(cie: f64, see: f64, cie_max: f64, see_max: f64) -> f64 {
    if cie_max == 0.0 || see_max == 0.0 {
        return 0.0;
    }
    weighted(cie, cie_max) + weighted(see, see_max)
}

/// Contribution of one component to the final score.
pub fn weighted(marks: f64, max: f64) -> f64 {
    if max == 0.0 {
        return 0.0;
    }
    marks / max * COMPONENT_WEIGHT
}

/// `marks` as a percentage of `max`; 0 when `max` is zero.
pub fn percent(marks: f64, max: f64) -> f64 {
    if max == 0.0 {
        return 0.0;
    }
    marks / max * 100.0
}

/// Round half away from zero to two decimals, as displayed results are.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
