//! Ordered (speed, torque) sample sets.

use crate::error::{CurveError, CurveResult};

/// Discrete torque-vs-speed samples for one curve.
///
/// Speeds are in km/h (the domain the dyno data is published in), torques in
/// N·m at the wheel. Speeds are strictly increasing; a malformed negative
/// first-sample speed is clamped to zero rather than rejected, since every
/// curve must be defined from standstill.
#[derive(Debug, Clone, PartialEq)]
pub struct TorqueSamples {
    speeds_kph: Vec<f64>,
    torques_nm: Vec<f64>,
}

impl TorqueSamples {
    pub fn new(pairs: &[(f64, f64)]) -> CurveResult<Self> {
        if pairs.len() < 2 {
            return Err(CurveError::TooFewSamples {
                needed: 2,
                got: pairs.len(),
            });
        }

        let mut speeds_kph: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let torques_nm: Vec<f64> = pairs.iter().map(|p| p.1).collect();

        for (i, (&v, &t)) in speeds_kph.iter().zip(torques_nm.iter()).enumerate() {
            if !v.is_finite() || !t.is_finite() {
                return Err(CurveError::NonFiniteSample { index: i });
            }
        }

        // Correct a malformed first-sample speed override.
        if speeds_kph[0] < 0.0 {
            speeds_kph[0] = 0.0;
        }

        for i in 1..speeds_kph.len() {
            if speeds_kph[i] <= speeds_kph[i - 1] {
                return Err(CurveError::NotIncreasing { index: i });
            }
        }

        Ok(Self {
            speeds_kph,
            torques_nm,
        })
    }

    /// Parse delimited text: one header row, then numeric (speed, torque)
    /// rows separated by commas, tabs or spaces.
    pub fn from_delimited(text: &str) -> CurveResult<Self> {
        let mut pairs = Vec::new();
        for (lineno, line) in text.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let cols: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();
            if cols.len() < 2 {
                return Err(CurveError::Parse {
                    line: lineno + 1,
                    what: "expected two numeric columns",
                });
            }
            let speed: f64 = cols[0].parse().map_err(|_| CurveError::Parse {
                line: lineno + 1,
                what: "speed column is not a number",
            })?;
            let torque: f64 = cols[1].parse().map_err(|_| CurveError::Parse {
                line: lineno + 1,
                what: "torque column is not a number",
            })?;
            pairs.push((speed, torque));
        }
        Self::new(&pairs)
    }

    pub fn len(&self) -> usize {
        self.speeds_kph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds_kph.is_empty()
    }

    pub fn speeds_kph(&self) -> &[f64] {
        &self.speeds_kph
    }

    pub fn torques_nm(&self) -> &[f64] {
        &self.torques_nm
    }
}
