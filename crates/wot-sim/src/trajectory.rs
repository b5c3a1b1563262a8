//! Column-oriented trajectory record.

/// One recorded instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_s: f64,
    pub position_m: f64,
    pub velocity_mps: f64,
    pub acceleration_mps2: f64,
}

/// Uniformly sampled run history plus the exact terminal point.
///
/// Stored as parallel columns; acceleration is an output channel recorded
/// alongside the two states.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub time_s: Vec<f64>,
    pub position_m: Vec<f64>,
    pub velocity_mps: Vec<f64>,
    pub acceleration_mps2: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            time_s: Vec::with_capacity(n),
            position_m: Vec::with_capacity(n),
            velocity_mps: Vec::with_capacity(n),
            acceleration_mps2: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, time_s: f64, position_m: f64, velocity_mps: f64, accel_mps2: f64) {
        self.time_s.push(time_s);
        self.position_m.push(position_m);
        self.velocity_mps.push(velocity_mps);
        self.acceleration_mps2.push(accel_mps2);
    }

    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn sample(&self, i: usize) -> Sample {
        Sample {
            time_s: self.time_s[i],
            position_m: self.position_m[i],
            velocity_mps: self.velocity_mps[i],
            acceleration_mps2: self.acceleration_mps2[i],
        }
    }

    pub fn terminal(&self) -> Option<Sample> {
        if self.is_empty() {
            None
        } else {
            Some(self.sample(self.len() - 1))
        }
    }
}
