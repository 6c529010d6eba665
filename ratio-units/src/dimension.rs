use std::{fmt, ops::{Add, Div, Mul, Neg, Sub}};

use typenum::Z0;

use crate::rational::{
  Exponent, Rational, RationalAdd, RationalDiff, RationalRoot, RationalRooted, RationalScale, RationalScaled, RationalSub,
  RationalSum,
};

// Inspired by uom, but with rational exponents so roots of any quantity stay representable.
pub trait Dimension : Send + Sync + Unpin {
  type Mass: Rational;
  type Length: Rational;
  type Time: Rational;
  type Current: Rational;
  type Angle: Rational;
}

pub type ISQ<Mass, Length, Time, Current, Angle> = dyn Dimension<Mass = Mass, Length = Length, Time = Time, Current = Current, Angle = Angle>;

pub type Dimensionless = ISQ<Z0, Z0, Z0, Z0, Z0>;

/// The runtime image of a dimension: one reduced exponent per base axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector {
  pub mass: Exponent,
  pub length: Exponent,
  pub time: Exponent,
  pub current: Exponent,
  pub angle: Exponent,
}

impl DimensionVector {
  pub const DIMENSIONLESS: DimensionVector = DimensionVector {
    mass: Exponent::ZERO,
    length: Exponent::ZERO,
    time: Exponent::ZERO,
    current: Exponent::ZERO,
    angle: Exponent::ZERO,
  };

  pub const fn new(mass: Exponent, length: Exponent, time: Exponent, current: Exponent, angle: Exponent) -> Self {
    Self { mass, length, time, current, angle }
  }

  pub const fn is_dimensionless(self) -> bool {
    self.mass.is_zero() && self.length.is_zero() && self.time.is_zero() && self.current.is_zero() && self.angle.is_zero()
  }

  pub const fn plus(self, rhs: DimensionVector) -> Self {
    Self {
      mass: self.mass.plus(rhs.mass),
      length: self.length.plus(rhs.length),
      time: self.time.plus(rhs.time),
      current: self.current.plus(rhs.current),
      angle: self.angle.plus(rhs.angle),
    }
  }

  pub const fn minus(self, rhs: DimensionVector) -> Self {
    Self {
      mass: self.mass.minus(rhs.mass),
      length: self.length.minus(rhs.length),
      time: self.time.minus(rhs.time),
      current: self.current.minus(rhs.current),
      angle: self.angle.minus(rhs.angle),
    }
  }

  pub const fn scale(self, k: i64) -> Self {
    Self {
      mass: self.mass.scale(k),
      length: self.length.scale(k),
      time: self.time.scale(k),
      current: self.current.scale(k),
      angle: self.angle.scale(k),
    }
  }

  pub const fn divide(self, k: i64) -> Self {
    Self {
      mass: self.mass.divide(k),
      length: self.length.divide(k),
      time: self.time.divide(k),
      current: self.current.divide(k),
      angle: self.angle.divide(k),
    }
  }

  /// Base-unit abbreviation and exponent of each axis, in storage order.
  pub const fn axes(self) -> [(&'static str, Exponent); 5] {
    [("kg", self.mass), ("m", self.length), ("s", self.time), ("A", self.current), ("rad", self.angle)]
  }
}

pub const fn vector_of<D: Dimension + ?Sized>() -> DimensionVector {
  DimensionVector {
    mass: <D::Mass as Rational>::EXPONENT,
    length: <D::Length as Rational>::EXPONENT,
    time: <D::Time as Rational>::EXPONENT,
    current: <D::Current as Rational>::EXPONENT,
    angle: <D::Angle as Rational>::EXPONENT,
  }
}

impl Add for DimensionVector {
  type Output = DimensionVector;

  fn add(self, rhs: DimensionVector) -> Self::Output {
    self.plus(rhs)
  }
}

impl Sub for DimensionVector {
  type Output = DimensionVector;

  fn sub(self, rhs: DimensionVector) -> Self::Output {
    self.minus(rhs)
  }
}

impl Neg for DimensionVector {
  type Output = DimensionVector;

  fn neg(self) -> Self::Output {
    DimensionVector::DIMENSIONLESS.minus(self)
  }
}

impl Mul<i64> for DimensionVector {
  type Output = DimensionVector;

  fn mul(self, rhs: i64) -> Self::Output {
    self.scale(rhs)
  }
}

impl Div<i64> for DimensionVector {
  type Output = DimensionVector;

  fn div(self, rhs: i64) -> Self::Output {
    self.divide(rhs)
  }
}

pub(crate) fn format_axis(f: &mut fmt::Formatter<'_>, exponent: Exponent, abbrev: &str) -> fmt::Result {
  if exponent == Exponent::ONE { write!(f, " {}", abbrev)?; }
  else if !exponent.is_zero() { write!(f, " {}^{{{}}}", abbrev, exponent)?; }
  Ok(())
}

impl fmt::Display for DimensionVector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_dimensionless() {
      return write!(f, "1");
    }
    // format_axis leads every axis with a space; render once and drop the first.
    let rendered = DisplayAxes(*self).to_string();
    write!(f, "{}", rendered.trim_start())
  }
}

pub(crate) struct DisplayAxes(pub DimensionVector);

impl fmt::Display for DisplayAxes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (abbrev, exponent) in self.0.axes() {
      format_axis(f, exponent, abbrev)?;
    }
    Ok(())
  }
}

// Dimension algebra

pub trait DimMul<Rhs: ?Sized> : Dimension {
  type Output: ?Sized + Dimension;
}

impl<Dl, Dr> DimMul<Dr> for Dl
where
  Dl: ?Sized + Dimension,
  Dr: ?Sized + Dimension,
  Dl::Mass: RationalAdd<Dr::Mass>,
  Dl::Length: RationalAdd<Dr::Length>,
  Dl::Time: RationalAdd<Dr::Time>,
  Dl::Current: RationalAdd<Dr::Current>,
  Dl::Angle: RationalAdd<Dr::Angle>,
{
  type Output = ISQ<
    RationalSum<Dl::Mass, Dr::Mass>,
    RationalSum<Dl::Length, Dr::Length>,
    RationalSum<Dl::Time, Dr::Time>,
    RationalSum<Dl::Current, Dr::Current>,
    RationalSum<Dl::Angle, Dr::Angle>,
  >;
}

pub trait DimDiv<Rhs: ?Sized> : Dimension {
  type Output: ?Sized + Dimension;
}

impl<Dl, Dr> DimDiv<Dr> for Dl
where
  Dl: ?Sized + Dimension,
  Dr: ?Sized + Dimension,
  Dl::Mass: RationalSub<Dr::Mass>,
  Dl::Length: RationalSub<Dr::Length>,
  Dl::Time: RationalSub<Dr::Time>,
  Dl::Current: RationalSub<Dr::Current>,
  Dl::Angle: RationalSub<Dr::Angle>,
{
  type Output = ISQ<
    RationalDiff<Dl::Mass, Dr::Mass>,
    RationalDiff<Dl::Length, Dr::Length>,
    RationalDiff<Dl::Time, Dr::Time>,
    RationalDiff<Dl::Current, Dr::Current>,
    RationalDiff<Dl::Angle, Dr::Angle>,
  >;
}

/// Raises a dimension to the integer power `K`.
pub trait DimPow<K> : Dimension {
  type Output: ?Sized + Dimension;
}

impl<D, K> DimPow<K> for D
where
  D: ?Sized + Dimension,
  D::Mass: RationalScale<K>,
  D::Length: RationalScale<K>,
  D::Time: RationalScale<K>,
  D::Current: RationalScale<K>,
  D::Angle: RationalScale<K>,
{
  type Output = ISQ<
    RationalScaled<D::Mass, K>,
    RationalScaled<D::Length, K>,
    RationalScaled<D::Time, K>,
    RationalScaled<D::Current, K>,
    RationalScaled<D::Angle, K>,
  >;
}

/// Takes the `K`th root of a dimension. `K` must be a positive integer.
pub trait DimRoot<K> : Dimension {
  type Output: ?Sized + Dimension;
}

impl<D, K> DimRoot<K> for D
where
  D: ?Sized + Dimension,
  D::Mass: RationalRoot<K>,
  D::Length: RationalRoot<K>,
  D::Time: RationalRoot<K>,
  D::Current: RationalRoot<K>,
  D::Angle: RationalRoot<K>,
{
  type Output = ISQ<
    RationalRooted<D::Mass, K>,
    RationalRooted<D::Length, K>,
    RationalRooted<D::Time, K>,
    RationalRooted<D::Current, K>,
    RationalRooted<D::Angle, K>,
  >;
}

pub type Product<Dl, Dr> = <Dl as DimMul<Dr>>::Output;
pub type Quotient<Dl, Dr> = <Dl as DimDiv<Dr>>::Output;
pub type Raised<D, K> = <D as DimPow<K>>::Output;
pub type Rooted<D, K> = <D as DimRoot<K>>::Output;
pub type Inverse<D> = Quotient<Dimensionless, D>;
