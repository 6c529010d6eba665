use typenum::{N1, N2, N3, P1, P2, P3, P4, Z0};

use super::{Quantity, ISQ};
use crate::unit;

pub type Charge       = Quantity<ISQ<Z0, Z0, P1, P1, Z0>>;
pub type Voltage      = Quantity<ISQ<P1, P2, N3, N1, Z0>>;
pub type Resistance   = Quantity<ISQ<P1, P2, N3, N2, Z0>>;
pub type Conductance  = Quantity<ISQ<N1, N2, P3, P2, Z0>>;
pub type Capacitance  = Quantity<ISQ<N1, N2, P4, P2, Z0>>;
pub type Inductance   = Quantity<ISQ<P1, P2, N2, N2, Z0>>;

unit!(Charge, coulomb, "coulomb");

unit!(Voltage, volt, "volt");
unit!(Voltage, millivolt, "mV", volt::ONE.scale(1e-3));
unit!(Voltage, microvolt, "uV", volt::ONE.scale(1e-6));

unit!(Resistance, ohm, "ohm");
unit!(Resistance, milliohm, "mohm", ohm::ONE.scale(1e-3));
unit!(Resistance, kiloohm, "kohm", ohm::ONE.scale(1e3));

unit!(Conductance, siemens, "siemen");

unit!(Capacitance, farad, "F");
unit!(Capacitance, millifarad, "mF", farad::ONE.scale(1e-3));
unit!(Capacitance, microfarad, "uF", farad::ONE.scale(1e-6));

unit!(Inductance, henry, "H");
unit!(Inductance, millihenry, "mH", henry::ONE.scale(1e-3));
unit!(Inductance, microhenry, "uH", henry::ONE.scale(1e-6));

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use crate::{base::*, force::watt};

  use super::*;

  #[test]
  fn test_ohms_law() {
    let v: Voltage = (2.0 * ampere) * (6.0 * ohm);
    assert_eq!(v, 12.0 * volt);
    assert_eq!(v * (2.0 * ampere), 24.0 * watt);

    let g: Conductance = 1.0 / (4.0 * ohm);
    assert_eq!(g, 0.25 * siemens);

    let q: Charge = (3.0 * ampere) * (2.0 * second);
    assert_eq!(q, 6.0 * coulomb);
    assert_relative_eq!(1.5 * kiloohm, 1500.0 * ohm);
  }

  #[test]
  fn test_reactive() {
    let c: Capacitance = (6.0 * coulomb) / (3.0 * volt);
    assert_eq!(c, 2.0 * farad);
    assert_relative_eq!(1000.0 * microfarad, 1.0 * millifarad, epsilon = 1e-15 * farad);

    // Time constant of an RC circuit.
    let tau: Time = (2.0 * kiloohm) * (500.0 * microfarad);
    assert_relative_eq!(tau, 1.0 * second, epsilon = 1e-12 * second);

    let l: Inductance = (volt::ONE * second::ONE) / ampere::ONE;
    assert_eq!(l, 1.0 * henry);
    assert_relative_eq!(1000.0 * microhenry, 1.0 * millihenry, epsilon = 1e-15 * henry);
  }
}
