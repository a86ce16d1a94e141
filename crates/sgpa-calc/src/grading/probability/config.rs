use serde::{Deserialize, Serialize};

/// Tuning table for the target-SGPA forecast.
///
/// These numbers are product calibration, not statistics: they were chosen so the
/// forecast "feels right" to students and should be reviewed by the product owner
/// rather than derived. Any field left out of a JSON override keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityConfig {
    /// Effort score by the SEE percentage a course needs, checked in order.
    pub effort_steps: Vec<EffortStep>,
    /// Effort when the need exceeds every step.
    pub max_effort: f64,
    /// Factor by mean CIE percentage, checked in order.
    pub cie_quality_steps: Vec<QualityStep>,
    pub cie_quality_floor: f64,
    /// Difficulty factor is `1 - mean_effort/100 * slope`, bounded below.
    pub difficulty_slope: f64,
    pub difficulty_min: f64,
    pub difficulty_max: f64,
    /// Base rarity factor by target SGPA, checked in order.
    pub rarity_steps: Vec<RarityStep>,
    pub rarity_floor: f64,
    pub rarity_max: f64,
    /// Strong CIE softens target rarity, linearly from `rarity_relief_from` to 100%.
    pub rarity_relief_from: f64,
    pub rarity_relief_max: f64,
    /// Upper bounds by target, checked in order.
    pub caps: Vec<ProbabilityCap>,
    /// Mean CIE percentage that unlocks the higher cap.
    pub elite_cie_quality: f64,
    pub floor_boost: FloorBoost,
    pub study_hours_per_course: f64,
    pub study_effort_pivot: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortStep {
    pub below_percent: f64,
    pub effort: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityStep {
    pub min_percent: f64,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityStep {
    pub max_target: f64,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityCap {
    pub min_target: f64,
    pub cap: f64,
    pub elite_cap: f64,
}

/// Minimum probability for strong students chasing a high but not perfect target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorBoost {
    pub min_cie_quality: f64,
    pub min_target: f64,
    pub max_target: f64,
    pub base: f64,
    pub max: f64,
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            effort_steps: vec![
                EffortStep { below_percent: 35.0, effort: 10.0 },
                EffortStep { below_percent: 50.0, effort: 30.0 },
                EffortStep { below_percent: 70.0, effort: 50.0 },
                EffortStep { below_percent: 85.0, effort: 70.0 },
                EffortStep { below_percent: 95.0, effort: 85.0 },
            ],
            max_effort: 100.0,
            cie_quality_steps: vec![
                QualityStep { min_percent: 90.0, factor: 1.0 },
                QualityStep { min_percent: 80.0, factor: 0.92 },
                QualityStep { min_percent: 70.0, factor: 0.82 },
                QualityStep { min_percent: 60.0, factor: 0.7 },
                QualityStep { min_percent: 50.0, factor: 0.55 },
            ],
            cie_quality_floor: 0.4,
            difficulty_slope: 0.7,
            difficulty_min: 0.3,
            difficulty_max: 0.98,
            rarity_steps: vec![
                RarityStep { max_target: 8.0, factor: 0.98 },
                RarityStep { max_target: 8.5, factor: 0.92 },
                RarityStep { max_target: 9.0, factor: 0.82 },
                RarityStep { max_target: 9.15, factor: 0.75 },
                RarityStep { max_target: 9.45, factor: 0.62 },
                RarityStep { max_target: 9.75, factor: 0.48 },
            ],
            rarity_floor: 0.35,
            rarity_max: 0.98,
            rarity_relief_from: 70.0,
            rarity_relief_max: 0.8,
            caps: vec![
                ProbabilityCap { min_target: 10.0, cap: 75.0, elite_cap: 85.0 },
                ProbabilityCap { min_target: 9.75, cap: 88.0, elite_cap: 92.0 },
                ProbabilityCap { min_target: 9.45, cap: 92.0, elite_cap: 95.0 },
                ProbabilityCap { min_target: 9.0, cap: 95.0, elite_cap: 97.0 },
                ProbabilityCap { min_target: 0.0, cap: 98.0, elite_cap: 98.0 },
            ],
            elite_cie_quality: 95.0,
            floor_boost: FloorBoost {
                min_cie_quality: 85.0,
                min_target: 9.0,
                max_target: 9.45,
                base: 65.0,
                max: 75.0,
            },
            study_hours_per_course: 10.0,
            study_effort_pivot: 50.0,
        }
    }
}

impl ProbabilityConfig {
    /// Reject tables the forecast cannot work with, naming the first problem found.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.effort_steps.is_empty() {
            return Err("effort_steps must not be empty");
        }
        if self.cie_quality_steps.is_empty() {
            return Err("cie_quality_steps must not be empty");
        }
        if self.rarity_steps.is_empty() {
            return Err("rarity_steps must not be empty");
        }
        if self.caps.is_empty() {
            return Err("caps must not be empty");
        }
        if self.difficulty_min > self.difficulty_max {
            return Err("difficulty_min must not exceed difficulty_max");
        }
        if self.rarity_floor > self.rarity_max {
            return Err("rarity_floor must not exceed rarity_max");
        }
        if self.floor_boost.base > self.floor_boost.max {
            return Err("floor_boost.base must not exceed floor_boost.max");
        }
        Ok(())
    }

    pub fn effort_for(&self, see_percent_needed: f64) -> f64 {
        self.effort_steps
            .iter()
            .find(|step| see_percent_needed < step.below_percent)
            .map(|step| step.effort)
            .unwrap_or(self.max_effort)
    }

    pub fn cie_quality_factor(&self, cie_quality: f64) -> f64 {
        self.cie_quality_steps
            .iter()
            .find(|step| cie_quality >= step.min_percent)
            .map(|step| step.factor)
            .unwrap_or(self.cie_quality_floor)
    }

    pub fn difficulty_factor(&self, mean_effort: f64) -> f64 {
        let factor = 1.0 - mean_effort / 100.0 * self.difficulty_slope;
        factor.max(self.difficulty_min).min(self.difficulty_max)
    }

    pub fn rarity_factor(&self, target: f64, cie_quality: f64) -> f64 {
        let base = self
            .rarity_steps
            .iter()
            .find(|step| target <= step.max_target)
            .map(|step| step.factor)
            .unwrap_or(self.rarity_floor);

        let span = 100.0 - self.rarity_relief_from;
        let relief = if span > 0.0 {
            let strength = ((cie_quality - self.rarity_relief_from) / span).clamp(0.0, 1.0);
            strength * self.rarity_relief_max
        } else {
            0.0
        };

        (base + (1.0 - base) * relief)
            .max(self.rarity_floor)
            .min(self.rarity_max)
    }

    pub fn cap_for(&self, target: f64, cie_quality: f64) -> f64 {
        self.caps
            .iter()
            .find(|cap| target >= cap.min_target)
            .map(|cap| {
                if cie_quality >= self.elite_cie_quality {
                    cap.elite_cap
                } else {
                    cap.cap
                }
            })
            .unwrap_or(100.0)
    }

    /// Floor for strong students, if the boost applies.
    pub fn floor_for(&self, target: f64, cie_quality: f64) -> Option<f64> {
        let boost = &self.floor_boost;
        if cie_quality < boost.min_cie_quality
            || target < boost.min_target
            || target > boost.max_target
        {
            return None;
        }

        let span = 100.0 - boost.min_cie_quality;
        let lift = if span > 0.0 {
            ((cie_quality - boost.min_cie_quality) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Some(boost.base + (boost.max - boost.base) * lift)
    }

    pub fn study_hours(&self, mean_effort: f64, courses: usize) -> u32 {
        if self.study_effort_pivot <= 0.0 {
            return 0;
        }
        let hours =
            self.study_hours_per_course * (mean_effort / self.study_effort_pivot) * courses as f64;
        hours.round().max(0.0) as u32
    }
}
