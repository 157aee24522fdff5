//! Generation parameters shared by every entry point.

use anyhow::bail;

use crate::config::{LEN_EXP_DEFAULT, LIT_EXP_DEFAULT, RATIO_DEFAULT};

/// Shape of the generated stream.
///
/// The generator assumes `ratio >= 1.0` and both exponents strictly positive;
/// callers taking these values from users should run [`Params::validate`]
/// first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Ratio target. A run becomes a literal run with probability `1 / ratio`.
    pub ratio: f64,
    /// Exponent of the run-length distribution. Larger values favour short runs.
    pub len_exp: f64,
    /// Exponent of the literal distribution. `1.0` is uniform, larger values
    /// favour small byte values.
    pub lit_exp: f64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            ratio: RATIO_DEFAULT,
            len_exp: LEN_EXP_DEFAULT,
            lit_exp: LIT_EXP_DEFAULT,
        }
    }
}

impl Params {
    pub fn new(ratio: f64, len_exp: f64, lit_exp: f64) -> Self {
        Params {
            ratio,
            len_exp,
            lit_exp,
        }
    }

    /// Checks the preconditions the generator relies on.
    ///
    /// NaN fails every check.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ratio.is_nan() || self.ratio < 1.0 {
            bail!("ratio must be a floating point value >= 1.0");
        }
        if !self.len_exp.is_finite() || self.len_exp <= 0.0 {
            bail!("match exponent must be a floating point value > 0");
        }
        if !self.lit_exp.is_finite() || self.lit_exp <= 0.0 {
            bail!("literal exponent must be a floating point value > 0");
        }
        Ok(())
    }
}
