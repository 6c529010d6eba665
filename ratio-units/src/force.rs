use typenum::{N2, N3, P1, P2, Z0};

use super::{Quantity, ISQ};
use crate::unit;

pub type Inertia = Quantity<ISQ<P1, P2, Z0, Z0, Z0>>;
pub type Force = Quantity<ISQ<P1, P1, N2, Z0, Z0>>;
pub type Torque = Quantity<ISQ<P1, P2, N2, Z0, Z0>>;
pub type Power = Quantity<ISQ<P1, P2, N3, Z0, Z0>>;

pub type MOI = Inertia;

unit!(Inertia, kilogram_meter2, "kgm2");

unit!(Force, newton, "n");

unit!(Torque, newton_meter, "nm");

unit!(Power, watt, "watt");
unit!(Power, kilowatt, "kW", watt::ONE.scale(1000.0));

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use crate::{base::*, motion::*};

  use super::*;

  #[test]
  fn test_mechanics() {
    let f: Force = (2.0 * kilogram) * (9.81 * meters_per_second2);
    assert_relative_eq!(f, 19.62 * newton, epsilon = 1e-12 * newton);

    let t: Torque = f * (0.5 * meter);
    assert_relative_eq!(t, 9.81 * newton_meter, epsilon = 1e-12 * newton_meter);

    let p: Power = (10.0 * newton) * (3.0 * meters_per_second);
    assert_eq!(p, 30.0 * watt);
    assert_eq!(1.5 * kilowatt, 1500.0 * watt);

    let moi: MOI = (3.0 * kilogram) * (2.0 * meter) * (2.0 * meter);
    assert_eq!(moi, 12.0 * kilogram_meter2);
  }

  #[test]
  fn test_angular_dynamics() {
    // Torque over inertia leaves a plain 1/s^2; multiplying by a radian restores the angle.
    let alpha: AngularAcceleration = (6.0 * newton_meter) / (2.0 * kilogram_meter2) * (1.0 * radian);
    assert_eq!(alpha, 3.0 * radians_per_second2);
  }
}
