//! Dimension-aware counterparts of the usual `f64` math functions.
//!
//! Functions that take several quantities require them to share a dimension unless noted.
//! Nothing here panics: domain errors come back as NaN, like the `f64` methods.

use typenum::{Integer, NonZero, P2, P3};

use crate::{base::{Angle, Number}, dimension::{DimPow, DimRoot, Dimension, Raised, Rooted}, Quantity};

pub fn abs<D: ?Sized + Dimension>(x: Quantity<D>) -> Quantity<D> {
  Quantity::from_base(x.value().abs())
}

/// `-1` for negative values, `1` otherwise (including zero and NaN).
pub fn sgn<D: ?Sized + Dimension>(x: Quantity<D>) -> i32 {
  if x.value() < 0.0 { -1 } else { 1 }
}

pub fn signbit<D: ?Sized + Dimension>(x: Quantity<D>) -> bool {
  x.value().is_sign_negative()
}

pub fn max<D: ?Sized + Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
  if a > b { a } else { b }
}

pub fn min<D: ?Sized + Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
  if a < b { a } else { b }
}

/// Floating point remainder, with the sign of `a`.
pub fn modulo<D: ?Sized + Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
  a % b
}

/// The magnitude of `magnitude` with the sign of `sign`. The dimension of `sign` is irrelevant.
pub fn copysign<D: ?Sized + Dimension, S: ?Sized + Dimension>(magnitude: Quantity<D>, sign: Quantity<S>) -> Quantity<D> {
  Quantity::from_base(magnitude.value().copysign(sign.value()))
}

pub fn clamp<D: ?Sized + Dimension>(x: Quantity<D>, lo: Quantity<D>, hi: Quantity<D>) -> Quantity<D> {
  if x < lo { lo } else if hi < x { hi } else { x }
}

fn to_step<D: ?Sized + Dimension>(x: Quantity<D>, step: Quantity<D>, rule: fn(f64) -> f64) -> Quantity<D> {
  Quantity::from_base(rule(x.value() / step.value()) * step.value())
}

/// Rounds `x` up to a multiple of `step`.
pub fn ceil<D: ?Sized + Dimension>(x: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
  to_step(x, step, f64::ceil)
}

pub fn floor<D: ?Sized + Dimension>(x: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
  to_step(x, step, f64::floor)
}

pub fn trunc<D: ?Sized + Dimension>(x: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
  to_step(x, step, f64::trunc)
}

/// Rounds `x` to the nearest multiple of `step`, halfway cases away from zero.
pub fn round<D: ?Sized + Dimension>(x: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
  to_step(x, step, f64::round)
}

pub fn pow<R: Integer, D: ?Sized + DimPow<R>>(x: Quantity<D>) -> Quantity<Raised<D, R>> {
  Quantity::from_base(x.value().powi(R::I32))
}

pub fn square<D: ?Sized + DimPow<P2>>(x: Quantity<D>) -> Quantity<Raised<D, P2>> {
  pow::<P2, D>(x)
}

pub fn cube<D: ?Sized + DimPow<P3>>(x: Quantity<D>) -> Quantity<Raised<D, P3>> {
  pow::<P3, D>(x)
}

/// The `R`th root. `R` must be positive; the result may carry fractional exponents.
pub fn root<R: Integer + NonZero, D: ?Sized + DimRoot<R>>(x: Quantity<D>) -> Quantity<Rooted<D, R>> {
  let value = x.value();
  let rooted = match R::I32 {
    2 => value.sqrt(),
    3 => value.cbrt(),
    r => value.powf(1.0 / r as f64),
  };
  Quantity::from_base(rooted)
}

pub fn sqrt<D: ?Sized + DimRoot<P2>>(x: Quantity<D>) -> Quantity<Rooted<D, P2>> {
  root::<P2, D>(x)
}

pub fn cbrt<D: ?Sized + DimRoot<P3>>(x: Quantity<D>) -> Quantity<Rooted<D, P3>> {
  root::<P3, D>(x)
}

pub fn hypot<D: ?Sized + Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
  Quantity::from_base(a.value().hypot(b.value()))
}

// Trigonometry

pub fn sin(angle: Angle) -> Number {
  Number::from_base(angle.value().sin())
}

pub fn cos(angle: Angle) -> Number {
  Number::from_base(angle.value().cos())
}

pub fn tan(angle: Angle) -> Number {
  Number::from_base(angle.value().tan())
}

pub fn asin<D: ?Sized + Dimension>(x: Quantity<D>) -> Angle {
  Angle::from_base(x.value().asin())
}

pub fn acos<D: ?Sized + Dimension>(x: Quantity<D>) -> Angle {
  Angle::from_base(x.value().acos())
}

pub fn atan<D: ?Sized + Dimension>(x: Quantity<D>) -> Angle {
  Angle::from_base(x.value().atan())
}

/// Angle of the point `(x, y)`, measured from the positive `x` axis.
pub fn atan2<D: ?Sized + Dimension>(y: Quantity<D>, x: Quantity<D>) -> Angle {
  Angle::from_base(y.value().atan2(x.value()))
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use typenum::{N1, P4, Z0};

  use crate::{base::*, electrical::*, motion::*, QuantityBase};

  use super::*;

  #[test]
  fn test_sign_helpers() {
    assert_eq!(abs(-3.0 * meter), 3.0 * meter);
    assert_eq!(sgn(-2.0 * second), -1);
    assert_eq!(sgn(0.0 * second), 1);
    assert_eq!(sgn(4.0 * second), 1);
    assert!(signbit(-0.0 * kilogram));
    assert!(!signbit(0.0 * kilogram));
  }

  #[test]
  fn test_min_max_clamp() {
    assert_eq!(max(1.0 * kilometer, 999.0 * meter), 1.0 * kilometer);
    assert_eq!(min(1.0 * kilometer, 999.0 * meter), 999.0 * meter);
    assert_eq!(clamp(15.0 * meter, 0.0 * meter, 10.0 * meter), 10.0 * meter);
    assert_eq!(clamp(-5.0 * meter, 0.0 * meter, 10.0 * meter), 0.0 * meter);
    assert_eq!(clamp(5.0 * meter, 0.0 * meter, 10.0 * meter), 5.0 * meter);
    assert!(clamp(f64::NAN * meter, 0.0 * meter, 10.0 * meter).value().is_nan());
  }

  #[test]
  fn test_modulo_copysign() {
    assert_eq!(modulo(7.0 * meter, 5.0 * meter), 2.0 * meter);
    assert_eq!(modulo(-7.0 * meter, 5.0 * meter), -2.0 * meter);
    assert_eq!(copysign(3.0 * meter, -1.0 * second), -3.0 * meter);
    assert_eq!(copysign(-3.0 * meter, 2.0 * number), 3.0 * meter);
  }

  #[test]
  fn test_rounding_to_step() {
    assert_eq!(round(7.0 * meter, 5.0 * meter), 5.0 * meter);
    assert_eq!(round(8.0 * meter, 5.0 * meter), 10.0 * meter);
    assert_eq!(ceil(7.0 * meter, 5.0 * meter), 10.0 * meter);
    assert_eq!(floor(7.0 * meter, 5.0 * meter), 5.0 * meter);
    assert_eq!(trunc(-7.0 * meter, 5.0 * meter), -5.0 * meter);
    assert_eq!(floor(-7.0 * meter, 5.0 * meter), -10.0 * meter);
    assert_eq!(round(100.0 * minute, 1.0 * hour), 2.0 * hour);
  }

  #[test]
  fn test_powers() {
    assert_eq!(square(3.0 * meter), 9.0 * square_meter);
    let volume = cube(2.0 * meter);
    assert_eq!(volume.value(), 8.0);
    assert_eq!(volume.dimension(), meter::ONE.dimension() * 3);

    let rate = pow::<N1, _>(4.0 * second);
    assert_eq!(rate.value(), 0.25);
    assert_eq!(rate.dimension(), -second::ONE.dimension());
    assert_eq!(pow::<Z0, _>(4.0 * meter), 1.0 * number);
  }

  #[test]
  fn test_roots() {
    assert_eq!(sqrt(9.0 * square_meter), 3.0 * meter);
    assert_eq!(cbrt(cube(2.0 * second)), 2.0 * second);
    let quartic = root::<P4, _>(square(4.0 * square_meter));
    assert_relative_eq!(quartic.value(), 2.0);
    assert_eq!(quartic.dimension(), meter::ONE.dimension());
    assert!(sqrt(-1.0 * square_meter).value().is_nan());
  }

  #[test]
  fn test_power_root_round_trip() {
    let a = 3.7 * meters_per_second;
    let back: Velocity = sqrt(square(a));
    assert_relative_eq!(back, a);
    let back: Velocity = cbrt(cube(a));
    assert_relative_eq!(back, a, epsilon = 1e-12 * meters_per_second);
  }

  #[test]
  fn test_hypot() {
    assert_eq!(hypot(3.0 * meter, 4.0 * meter), 5.0 * meter);
    assert_eq!(hypot(3.0 * volt, 4.0 * volt), 5.0 * volt);
  }

  #[test]
  fn test_trig() {
    assert_relative_eq!(sin(30.0 * degree), 0.5 * number, epsilon = 1e-12 * number);
    assert_relative_eq!(cos(60.0 * degree), 0.5 * number, epsilon = 1e-12 * number);
    assert_relative_eq!(tan(45.0 * degree), 1.0 * number, epsilon = 1e-12 * number);
    assert_eq!(sin(0.0 * radian), 0.0 * number);
  }

  #[test]
  fn test_inverse_trig() {
    assert_relative_eq!(asin(0.5 * number).to::<degree>(), 30.0, epsilon = 1e-9);
    assert_relative_eq!(acos(0.0 * number), 90.0 * degree, epsilon = 1e-12 * radian);
    assert_relative_eq!(atan(1.0 * number), 45.0 * degree, epsilon = 1e-12 * radian);
    assert_relative_eq!(atan2(1.0 * meter, -1.0 * meter), 135.0 * degree, epsilon = 1e-12 * radian);

    // A ratio of two lengths is a plain number.
    let slope = (1.0 * meter) / (2.0 * meter);
    assert_relative_eq!(atan(slope).value(), 0.5f64.atan());
    assert!(asin(2.0 * number).value().is_nan());
  }
}
