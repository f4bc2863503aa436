use serde::{Deserialize, Serialize};

// Abramowitz & Stegun 7.1.26 coefficients for erf
const ERF_P: f64 = 0.3275911;
const ERF_A1: f64 = 0.254829592;
const ERF_A2: f64 = -0.284496736;
const ERF_A3: f64 = 1.421413741;
const ERF_A4: f64 = -1.453152027;
const ERF_A5: f64 = 1.061405429;

/// Reference population selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn toggle(&self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    /// Fixed height distribution (centimeters) for this population
    pub fn reference(&self) -> ReferenceDistribution {
        match self {
            Gender::Male => ReferenceDistribution {
                mean: 176.0,
                std_dev: 7.0,
            },
            Gender::Female => ReferenceDistribution {
                mean: 163.0,
                std_dev: 6.5,
            },
        }
    }
}

/// Normal distribution parameters for a population's height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl ReferenceDistribution {
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }
}

/// Where a height falls within its reference population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileEstimate {
    pub z_score: f64,
    /// Share of the population shorter than the height, in percent
    pub percentile_below: f64,
    /// Share of the population at least this tall, in percent
    pub top_percentile: f64,
}

/// Standard normal CDF via the Abramowitz-Stegun erf approximation.
///
/// Maximum absolute error is about 1.5e-7, plenty for display.
pub fn standard_normal_cdf(z: f64) -> f64 {
    let sign = if z >= 0.0 { 1.0 } else { -1.0 };
    let w = z.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + ERF_P * w);
    let poly = ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t;
    let erf = 1.0 - poly * (-w * w).exp();

    0.5 * (1.0 + sign * erf)
}

/// Estimate the percentile of `height_cm` for the given population
pub fn estimate(height_cm: f64, gender: Gender) -> PercentileEstimate {
    let z_score = gender.reference().z_score(height_cm);
    let percentile_below = standard_normal_cdf(z_score) * 100.0;

    PercentileEstimate {
        z_score,
        percentile_below,
        top_percentile: 100.0 - percentile_below,
    }
}
