use std::f64::consts::PI;

use typenum::{P1, P2, Z0};

use crate::unit;
use super::{Quantity, ISQ};

// Base Units
pub type Number   = Quantity<ISQ<Z0, Z0, Z0, Z0, Z0>>;
pub type Mass     = Quantity<ISQ<P1, Z0, Z0, Z0, Z0>>;
pub type Length   = Quantity<ISQ<Z0, P1, Z0, Z0, Z0>>;
pub type Time     = Quantity<ISQ<Z0, Z0, P1, Z0, Z0>>;
pub type Current  = Quantity<ISQ<Z0, Z0, Z0, P1, Z0>>;
pub type Angle    = Quantity<ISQ<Z0, Z0, Z0, Z0, P1>>;

pub type Area     = Quantity<ISQ<Z0, P2, Z0, Z0, Z0>>;

impl From<f64> for Number {
  fn from(value: f64) -> Self {
    Number::from_base(value)
  }
}

impl From<Number> for f64 {
  fn from(value: Number) -> Self {
    value.value()
  }
}

unit!(Number, number, "num");
unit!(Number, percent, "percent", number::ONE.scale(1.0 / 100.0));

unit!(Mass, kilogram, "kg");
unit!(Mass, gram, "g", kilogram::ONE.scale(1.0 / 1000.0));
unit!(Mass, pound, "lb", gram::ONE.scale(453.6));

unit!(Time, second, "sec");
unit!(Time, millisecond, "ms", second::ONE.scale(1.0 / 1000.0));
unit!(Time, microsecond, "us", millisecond::ONE.scale(1.0 / 1000.0));
unit!(Time, minute, "min", second::ONE.scale(60.0));
unit!(Time, hour, "hr", minute::ONE.scale(60.0));
unit!(Time, day, "day", hour::ONE.scale(24.0));

unit!(Length, meter, "m");
unit!(Length, millimeter, "mm", meter::ONE.scale(1.0 / 1000.0));
unit!(Length, centimeter, "cm", meter::ONE.scale(1.0 / 100.0));
unit!(Length, kilometer, "km", meter::ONE.scale(1000.0));
unit!(Length, inch, "in", centimeter::ONE.scale(2.54));
unit!(Length, foot, "ft", inch::ONE.scale(12.0));
unit!(Length, yard, "yd", foot::ONE.scale(3.0));
unit!(Length, mile, "mi", foot::ONE.scale(5280.0));
unit!(Length, tile, "tiles", millimeter::ONE.scale(600.0));

unit!(Area, square_meter, "m2");
unit!(Area, square_centimeter, "cm2", centimeter::ONE.times(centimeter::ONE));

unit!(Current, ampere, "amp");
unit!(Current, milliampere, "mA", ampere::ONE.scale(1.0 / 1000.0));

unit!(Angle, radian, "rad");
unit!(Angle, degree, "deg", radian::ONE.scale(PI / 180.0));
unit!(Angle, rotation, "rot", degree::ONE.scale(360.0));

impl Angle {
  pub fn sin(self) -> Number {
    crate::math::sin(self)
  }

  pub fn cos(self) -> Number {
    crate::math::cos(self)
  }

  pub fn tan(self) -> Number {
    crate::math::tan(self)
  }
}
