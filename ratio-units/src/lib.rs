//! Compile-time checked physical quantities with rational dimension exponents.
//!
//! A [`Quantity`] is a single `f64` tagged with a [`Dimension`] that only exists at the type
//! level. Adding, subtracting and comparing require identical dimensions; multiplying and
//! dividing derive a new one.
//!
//! ```
//! use ratio_units::{*, motion::*};
//!
//! let speed: Velocity = (5.0 * kilometer) / (1.0 * hour);
//! assert!((speed.to::<meters_per_second>() - 5000.0 / 3600.0).abs() < 1e-12);
//! ```
//!
//! Mixing dimensions does not compile:
//!
//! ```compile_fail
//! use ratio_units::*;
//! let _ = 1.0 * meter + 1.0 * kilogram;
//! ```
//!
//! ```compile_fail
//! use ratio_units::*;
//! let _ = 1.0 * second < 1.0 * meter;
//! ```
//!
//! ```compile_fail
//! use ratio_units::*;
//! let _ = (10.0 * meter).convert(1.0 * second);
//! ```
//!
//! ```compile_fail
//! use ratio_units::*;
//! let _ = ratio_units::math::sin(1.0 * meter);
//! ```

pub mod base;
pub mod dimension;
pub mod electrical;
pub mod force;
pub mod math;
pub mod motion;
pub mod rational;

pub use base::*;
pub use dimension::{
  DimDiv, DimMul, DimPow, DimRoot, Dimension, DimensionVector, Dimensionless, Inverse, Product, Quotient, Raised, Rooted, ISQ,
};
pub use rational::{Exponent, Frac, Rational};
pub use typenum;

use std::{fmt::{self, Debug}, iter::Sum, marker::PhantomData, ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign}};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Zero;

use dimension::{vector_of, DisplayAxes};

pub trait QuantityBase : Sized {
  type Dimension: ?Sized;
  fn new<U: Unit<Self>>(value: f64) -> Self;
  fn from_base(value: f64) -> Self;
  fn to<U: Unit<Self>>(&self) -> f64;
  fn to_base(&self) -> f64;
}

pub trait Unit<Q> {
  const FACTOR_TO_BASE: f64;
  const SYMBOL: &'static str;
}

/// Links a quantity type to the unit with a factor of exactly one.
pub trait CanonicalUnit : Sized {
  type Unit: Unit<Self>;

  fn in_canonical(self) -> InUnit<Self, Self::Unit> {
    InUnit::new(self)
  }
}

// Quantities
#[repr(transparent)]
pub struct Quantity<Dim: ?Sized + Dimension> {
  dimension: PhantomData<Dim>,
  base_unit_value: f64
}

impl<Dim: ?Sized + Dimension> Clone for Quantity<Dim> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<Dim: ?Sized + Dimension> Copy for Quantity<Dim> { }

impl<D: ?Sized + Dimension> Quantity<D> {
  pub const DIMENSION: DimensionVector = vector_of::<D>();

  pub const fn from_base(value: f64) -> Self {
    Self { dimension: PhantomData, base_unit_value: value }
  }

  /// The raw value, expressed in the base units of this dimension.
  pub const fn value(self) -> f64 {
    self.base_unit_value
  }

  pub const fn dimension(self) -> DimensionVector {
    Self::DIMENSION
  }

  /// How many `unit`s fit in this quantity.
  pub const fn convert(self, unit: Self) -> f64 {
    self.base_unit_value / unit.base_unit_value
  }

  pub const fn scale(self, factor: f64) -> Self {
    Self::from_base(self.base_unit_value * factor)
  }

  /// `const` multiplication, used to build derived units at compile time.
  pub const fn times<Dr: ?Sized + Dimension>(self, rhs: Quantity<Dr>) -> Quantity<Product<D, Dr>>
  where
    D: DimMul<Dr>,
  {
    Quantity::from_base(self.base_unit_value * rhs.base_unit_value)
  }

  /// `const` division, used to build derived units at compile time.
  pub const fn per<Dr: ?Sized + Dimension>(self, rhs: Quantity<Dr>) -> Quantity<Quotient<D, Dr>>
  where
    D: DimDiv<Dr>,
  {
    Quantity::from_base(self.base_unit_value / rhs.base_unit_value)
  }

  pub fn in_unit<U: Unit<Self>>(self) -> InUnit<Self, U> {
    InUnit::new(self)
  }
}

impl<Dim: ?Sized + Dimension> QuantityBase for Quantity<Dim> {
  type Dimension = Dim;

  fn new<U: Unit<Self>>(value: f64) -> Self {
    Self::from_base(value * U::FACTOR_TO_BASE)
  }

  fn from_base(value: f64) -> Self {
    Quantity::from_base(value)
  }

  fn to<U: Unit<Self>>(&self) -> f64 {
    self.base_unit_value / U::FACTOR_TO_BASE
  }

  fn to_base(&self) -> f64 {
    self.base_unit_value
  }
}

/// Formats a quantity as `<value>_<symbol>` in a chosen unit.
pub struct InUnit<Q, U> {
  quantity: Q,
  unit: PhantomData<U>,
}

impl<Q, U> InUnit<Q, U> {
  pub fn new(quantity: Q) -> Self {
    Self { quantity, unit: PhantomData }
  }
}

impl<Q: QuantityBase, U: Unit<Q>> fmt::Display for InUnit<Q, U> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}_{}", self.quantity.to::<U>(), U::SYMBOL)
  }
}

impl<Dim: ?Sized + Dimension> Debug for Quantity<Dim> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.base_unit_value, DisplayAxes(Self::DIMENSION))
  }
}

impl<Dim: ?Sized + Dimension> fmt::Display for Quantity<Dim> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl<D: Dimension + ?Sized> Default for Quantity<D> {
  fn default() -> Self {
    Self::zero()
  }
}

impl<D: Dimension + ?Sized> Neg for Quantity<D> {
  type Output = Quantity<D>;

  fn neg(self) -> Self::Output {
    Quantity::from_base(-self.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> Mul<f64> for Quantity<D> {
  type Output = Quantity<D>;

  fn mul(self, rhs: f64) -> Self::Output {
    Quantity::from_base(self.base_unit_value * rhs)
  }
}

impl<D: Dimension + ?Sized> Mul<Quantity<D>> for f64 {
  type Output = Quantity<D>;

  fn mul(self, rhs: Quantity<D>) -> Self::Output {
    Quantity::from_base(self * rhs.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> Div<f64> for Quantity<D> {
  type Output = Quantity<D>;

  fn div(self, rhs: f64) -> Self::Output {
    Quantity::from_base(self.base_unit_value / rhs)
  }
}

impl<D: Dimension + ?Sized> Div<Quantity<D>> for f64
where
  Dimensionless: DimDiv<D>,
{
  type Output = Quantity<Inverse<D>>;

  fn div(self, rhs: Quantity<D>) -> Self::Output {
    Quantity::from_base(self / rhs.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> Add<Quantity<D>> for Quantity<D> {
  type Output = Quantity<D>;

  fn add(self, rhs: Quantity<D>) -> Self::Output {
    Quantity::from_base(self.base_unit_value + rhs.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> Sub<Quantity<D>> for Quantity<D> {
  type Output = Quantity<D>;

  fn sub(self, rhs: Quantity<D>) -> Self::Output {
    Quantity::from_base(self.base_unit_value - rhs.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> Rem<Quantity<D>> for Quantity<D> {
  type Output = Quantity<D>;

  fn rem(self, rhs: Quantity<D>) -> Self::Output {
    Quantity::from_base(self.base_unit_value % rhs.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> AddAssign<Quantity<D>> for Quantity<D> {
  fn add_assign(&mut self, rhs: Quantity<D>) {
    self.base_unit_value += rhs.base_unit_value
  }
}

impl<D: Dimension + ?Sized> SubAssign<Quantity<D>> for Quantity<D> {
  fn sub_assign(&mut self, rhs: Quantity<D>) {
    self.base_unit_value -= rhs.base_unit_value
  }
}

impl<D: Dimension + ?Sized> MulAssign<f64> for Quantity<D> {
  fn mul_assign(&mut self, rhs: f64) {
    self.base_unit_value *= rhs
  }
}

impl<D: Dimension + ?Sized> DivAssign<f64> for Quantity<D> {
  fn div_assign(&mut self, rhs: f64) {
    self.base_unit_value /= rhs
  }
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized> Mul<Quantity<Dr>> for Quantity<Dl>
where
  Dl: DimMul<Dr>,
{
  type Output = Quantity<Product<Dl, Dr>>;

  fn mul(self, rhs: Quantity<Dr>) -> Self::Output {
    self.times(rhs)
  }
}

impl<Dl: Dimension + ?Sized, Dr: Dimension + ?Sized> Div<Quantity<Dr>> for Quantity<Dl>
where
  Dl: DimDiv<Dr>,
{
  type Output = Quantity<Quotient<Dl, Dr>>;

  fn div(self, rhs: Quantity<Dr>) -> Self::Output {
    self.per(rhs)
  }
}

impl<D: Dimension + ?Sized> Sum for Quantity<D> {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::zero(), Add::add)
  }
}

impl<D: Dimension + ?Sized> PartialEq<Quantity<D>> for Quantity<D> {
  fn eq(&self, other: &Quantity<D>) -> bool {
    self.base_unit_value.eq(&other.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> PartialOrd<Quantity<D>> for Quantity<D> {
  fn partial_cmp(&self, other: &Quantity<D>) -> Option<std::cmp::Ordering> {
    self.base_unit_value.partial_cmp(&other.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> AbsDiffEq<Quantity<D>> for Quantity<D> {
  type Epsilon = Quantity<D>;

  fn default_epsilon() -> Self::Epsilon {
    Quantity::from_base(f64::default_epsilon())
  }

  fn abs_diff_eq(&self, other: &Quantity<D>, epsilon: Self::Epsilon) -> bool {
    self.base_unit_value.abs_diff_eq(&other.base_unit_value, epsilon.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> RelativeEq<Quantity<D>> for Quantity<D> {
  fn default_max_relative() -> Self::Epsilon {
    Quantity::from_base(f64::default_max_relative())
  }

  fn relative_eq(&self, other: &Quantity<D>, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
    self.base_unit_value.relative_eq(&other.base_unit_value, epsilon.base_unit_value, max_relative.base_unit_value)
  }
}

impl<D: Dimension + ?Sized> UlpsEq<Quantity<D>> for Quantity<D> {
  fn default_max_ulps() -> u32 {
    f64::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Quantity<D>, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
    self.base_unit_value.ulps_eq(&other.base_unit_value, epsilon.base_unit_value, max_ulps)
  }
}

impl<D: Dimension + ?Sized> Zero for Quantity<D> {
  fn zero() -> Self {
    Quantity::from_base(f64::zero())
  }

  fn is_zero(&self) -> bool {
    self.base_unit_value.is_zero()
  }
}

/// Declares a unit of `$qty`.
///
/// Without a value the unit is canonical: its factor is one and it becomes the
/// [`CanonicalUnit`] of `$qty`. With a value, the value is a `const` expression over units
/// declared earlier, e.g. `foot::ONE.scale(5280.0)` or `kilometer::ONE.per(hour::ONE)`.
/// Each unit gets literal constructors `f64 * unit` and `i32 * unit`.
#[macro_export]
macro_rules! unit {
  ($qty:ty, $name:ident, $symbol:literal) => {
    $crate::unit!($qty, $name, $symbol, <$qty>::from_base(1.0));

    impl $crate::CanonicalUnit for $qty {
      type Unit = $name;
    }
  };
  ($qty:ty, $name:ident, $symbol:literal, $value:expr) => {
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct $name;

    impl $name {
      pub const ONE: $qty = $value;
    }

    impl $crate::Unit<$qty> for $name {
      const FACTOR_TO_BASE: f64 = $name::ONE.value();
      const SYMBOL: &'static str = $symbol;
    }

    impl ::std::convert::From<$name> for $qty {
      fn from(_unit: $name) -> Self {
        $name::ONE
      }
    }

    impl ::std::ops::Mul<$name> for f64 {
      type Output = $qty;

      fn mul(self, _rhs: $name) -> Self::Output {
        <$qty as $crate::QuantityBase>::new::<$name>(self)
      }
    }

    impl ::std::ops::Mul<$name> for i32 {
      type Output = $qty;

      fn mul(self, _rhs: $name) -> Self::Output {
        <$qty as $crate::QuantityBase>::new::<$name>(self as f64)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use approx::{assert_relative_eq, assert_abs_diff_eq};
  use crate::{force::newton, motion::Velocity, typenum::{P1, P2, Z0}, *};

  #[test]
  fn test_add_sub() {
    let a = 3.0 * meter;
    let b = 250 * centimeter;
    assert_eq!(a + b, 5.5 * meter);
    assert_eq!(a - b, 0.5 * meter);
    assert_eq!(-a, -3.0 * meter);
  }

  #[test]
  fn test_in_place() {
    let mut a = 10.0 * second;
    a -= 3.0 * second;
    assert_eq!(a, 7.0 * second);
    a += 1.0 * second;
    assert_eq!(a, 8.0 * second);
    a *= 2.0;
    assert_eq!(a, 16.0 * second);
    a /= 4.0;
    assert_eq!(a, 4.0 * second);
  }

  #[test]
  fn test_scalar() {
    let a = 2.0 * kilogram;
    assert_eq!(a * 3.0, 6.0 * kilogram);
    assert_eq!(3.0 * a, 6.0 * kilogram);
    assert_eq!(a / 4.0, 0.5 * kilogram);

    let rate = 2.0 / (4.0 * second);
    assert_eq!(rate.value(), 0.5);
    assert_eq!(rate.dimension(), -second::ONE.dimension());
  }

  #[test]
  fn test_mul_div_dimensions() {
    let area = (2.0 * meter) * (3.0 * meter);
    assert_eq!(area, 6.0 * square_meter);

    let speed: Velocity = (5.0 * kilometer) / (1.0 * hour);
    assert_relative_eq!(speed.value(), 5000.0 / 3600.0);
    assert_eq!(speed.dimension(), kilometer::ONE.dimension() - hour::ONE.dimension());

    let ratio: Number = (3.0 * meter) / (1.5 * meter);
    assert_eq!(f64::from(ratio), 2.0);
    assert!(ratio.dimension().is_dimensionless());
  }

  #[test]
  fn test_comparisons() {
    assert!(1.0 * kilometer > 999.0 * meter);
    assert!(1.0 * minute <= 60.0 * second);
    assert!(1.0 * minute >= 60.0 * second);
    assert!(1.0 * gram < 1.0 * kilogram);
    assert!(1.0 * meter != 1.0 * foot);
    assert!(f64::NAN * meter != f64::NAN * meter);
  }

  #[test]
  fn test_convert() {
    assert_eq!((1.0 * kilometer).convert(meter::ONE), 1000.0);
    assert_relative_eq!((180.0 * degree).convert(radian::ONE), std::f64::consts::PI);
    assert_eq!((3.0 * hour).to::<minute>(), 180.0);
  }

  #[test]
  fn test_literals_match() {
    assert_eq!(5 * kilometer, 5.0 * kilometer);
    assert_eq!((5 * kilometer).value().to_bits(), (5.0 * kilometer).value().to_bits());
    assert_eq!(7 * percent, 7.0 * percent);
    assert_eq!(Length::from(kilometer), 1000.0 * meter);
  }

  #[test]
  fn test_divide_by_zero() {
    assert_eq!((1.0 * meter) / 0.0, f64::INFINITY * meter);
    assert_eq!((-1.0 * meter) / 0.0, f64::NEG_INFINITY * meter);
    assert!(((0.0 * meter) / 0.0).value().is_nan());
  }

  #[test]
  fn test_rem_and_sum() {
    assert_eq!((7.0 * meter) % (5.0 * meter), 2.0 * meter);
    let total: Length = [1.0 * meter, 2.0 * meter, 50.0 * centimeter].into_iter().sum();
    assert_eq!(total, 3.5 * meter);
    assert_eq!(Length::default(), 0.0 * meter);
  }

  #[test]
  fn test_approx() {
    assert_abs_diff_eq!(1.0 * meter, 1.05 * meter, epsilon = 0.1 * meter);
    assert!(!(1.0 * meter).abs_diff_eq(&(2.0 * meter), 0.1 * meter));
    assert_relative_eq!(1.0 * inch, 25.4 * millimeter, epsilon = 1e-12 * meter);
  }

  #[test]
  fn test_fractional_dimensions_flow() {
    let root_length: Quantity<ISQ<Z0, Frac<P1, P2>, Z0, Z0, Z0>> = math::sqrt(4.0 * meter);
    assert_eq!(root_length.value(), 2.0);
    assert_eq!(root_length * root_length, 4.0 * meter);
    let _: Quantity<ISQ<Z0, P1, Z0, Z0, Z0>> = root_length * root_length;
  }

  #[test]
  fn test_formatting() {
    assert_eq!(format!("{}", 2.0 * newton), "2 kg m s^{-2}");
    assert_eq!(format!("{:?}", math::sqrt(4.0 * meter)), "2 m^{1/2}");
    assert_eq!((1.5 * kilometer).in_unit::<meter>().to_string(), "1500_m");
    assert_eq!((2.0 * hour).in_canonical().to_string(), "7200_sec");
    assert_eq!(<meter as Unit<Length>>::SYMBOL, "m");
  }
}
