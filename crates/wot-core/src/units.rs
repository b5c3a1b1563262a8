// wot-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, Energy as UomEnergy, Force as UomForce,
    Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Energy = UomEnergy;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kph(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[inline]
pub fn mph(v: f64) -> Velocity {
    use uom::si::velocity::mile_per_hour;
    Velocity::new::<mile_per_hour>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn mi(v: f64) -> Length {
    use uom::si::length::mile;
    Length::new::<mile>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

// Imperial boundary conversions. Published test figures are mph/feet/miles;
// everything inside the model is SI (m, s, m/s, N).

#[inline]
pub fn mph_to_mps(v_mph: f64) -> f64 {
    use uom::si::velocity::meter_per_second;
    mph(v_mph).get::<meter_per_second>()
}

#[inline]
pub fn mps_to_mph(v_mps: f64) -> f64 {
    use uom::si::velocity::mile_per_hour;
    mps(v_mps).get::<mile_per_hour>()
}

#[inline]
pub fn kph_to_mps(v_kph: f64) -> f64 {
    use uom::si::velocity::meter_per_second;
    kph(v_kph).get::<meter_per_second>()
}

#[inline]
pub fn mps_to_kph(v_mps: f64) -> f64 {
    use uom::si::velocity::kilometer_per_hour;
    mps(v_mps).get::<kilometer_per_hour>()
}

#[inline]
pub fn feet_to_m(l_ft: f64) -> f64 {
    use uom::si::length::meter;
    ft(l_ft).get::<meter>()
}

#[inline]
pub fn miles_to_m(l_mi: f64) -> f64 {
    use uom::si::length::meter;
    mi(l_mi).get::<meter>()
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Timing rollout distance (1 ft) in meters.
    pub const ROLLOUT_M: f64 = 0.3048;

    /// Quarter mile in meters.
    pub const QUARTER_MILE_M: f64 = 402.336;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}
