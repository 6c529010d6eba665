//! Rational exponents, both as runtime values and as types.
//!
//! Integer exponents are written as plain `typenum` integers (`P1`, `N2`, `Z0`). Fractional
//! exponents are written `Frac<N, D>` with `D >= 2`. Every type-level operation reduces its
//! result and collapses a unit denominator back to the bare integer, so two exponents are equal
//! exactly when their types are identical.

use std::{fmt, marker::PhantomData, ops::{Add, Div, Mul, Neg, Sub}};

use typenum::{Bit, Diff, Gcd, Gcf, Integer, NInt, NonZero, PInt, Prod, Quot, Sum, UInt, Unsigned, P1, Z0};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exponent {
  numer: i64,
  denom: i64,
}

const fn gcd(a: i64, b: i64) -> i64 {
  let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
  while b != 0 {
    let t = a % b;
    a = b;
    b = t;
  }
  a as i64
}

impl Exponent {
  pub const ZERO: Exponent = Exponent { numer: 0, denom: 1 };
  pub const ONE: Exponent = Exponent { numer: 1, denom: 1 };

  /// Build a reduced exponent. The sign is always carried by the numerator.
  pub const fn new(numer: i64, denom: i64) -> Self {
    assert!(denom != 0, "exponent denominator must be non-zero");
    let g = gcd(numer, denom);
    let (mut numer, mut denom) = (numer / g, denom / g);
    if denom < 0 {
      numer = -numer;
      denom = -denom;
    }
    Self { numer, denom }
  }

  pub const fn integer(value: i64) -> Self {
    Self { numer: value, denom: 1 }
  }

  pub const fn numer(self) -> i64 {
    self.numer
  }

  pub const fn denom(self) -> i64 {
    self.denom
  }

  pub const fn is_integer(self) -> bool {
    self.denom == 1
  }

  pub const fn is_zero(self) -> bool {
    self.numer == 0
  }

  pub const fn plus(self, rhs: Exponent) -> Self {
    Self::new(self.numer * rhs.denom + rhs.numer * self.denom, self.denom * rhs.denom)
  }

  pub const fn minus(self, rhs: Exponent) -> Self {
    Self::new(self.numer * rhs.denom - rhs.numer * self.denom, self.denom * rhs.denom)
  }

  pub const fn scale(self, k: i64) -> Self {
    Self::new(self.numer * k, self.denom)
  }

  /// Divide by an integer, e.g. when taking the `k`th root. Panics if `k` is zero.
  pub const fn divide(self, k: i64) -> Self {
    assert!(k != 0, "cannot divide an exponent by zero");
    Self::new(self.numer, self.denom * k)
  }

  pub const fn checked_divide(self, k: i64) -> Option<Self> {
    if k == 0 { None } else { Some(self.divide(k)) }
  }
}

impl Default for Exponent {
  fn default() -> Self {
    Exponent::ZERO
  }
}

impl Add for Exponent {
  type Output = Exponent;

  fn add(self, rhs: Exponent) -> Self::Output {
    self.plus(rhs)
  }
}

impl Sub for Exponent {
  type Output = Exponent;

  fn sub(self, rhs: Exponent) -> Self::Output {
    self.minus(rhs)
  }
}

impl Neg for Exponent {
  type Output = Exponent;

  fn neg(self) -> Self::Output {
    Exponent { numer: -self.numer, denom: self.denom }
  }
}

impl Mul<i64> for Exponent {
  type Output = Exponent;

  fn mul(self, rhs: i64) -> Self::Output {
    self.scale(rhs)
  }
}

impl Div<i64> for Exponent {
  type Output = Exponent;

  fn div(self, rhs: i64) -> Self::Output {
    self.divide(rhs)
  }
}

impl fmt::Display for Exponent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.denom == 1 {
      write!(f, "{}", self.numer)
    } else {
      write!(f, "{}/{}", self.numer, self.denom)
    }
  }
}

impl fmt::Debug for Exponent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

// Type-level exponents

/// A type-level fraction with a denominator of at least two. Never instantiated.
pub struct Frac<N, D>(PhantomData<(N, D)>);

pub trait Rational {
  type Numer: Integer;
  type Denom: Integer + NonZero;

  const EXPONENT: Exponent = Exponent::new(<Self::Numer as Integer>::I64, <Self::Denom as Integer>::I64);
}

impl Rational for Z0 {
  type Numer = Z0;
  type Denom = P1;
}

impl<U: Unsigned + NonZero> Rational for PInt<U> {
  type Numer = PInt<U>;
  type Denom = P1;
}

impl<U: Unsigned + NonZero> Rational for NInt<U> {
  type Numer = NInt<U>;
  type Denom = P1;
}

impl<N: Integer, D: Integer + NonZero> Rational for Frac<N, D> {
  type Numer = N;
  type Denom = D;
}

/// Picks the canonical spelling of `N / Self` once the fraction is in lowest terms.
pub trait Simplify<N> {
  type Output: Rational;
}

impl<N: Rational> Simplify<N> for P1 {
  type Output = N;
}

impl<N: Integer, U: Unsigned, Ba: Bit, Bb: Bit> Simplify<N> for PInt<UInt<UInt<U, Ba>, Bb>> {
  type Output = Frac<N, Self>;
}

/// Reduces the fraction `Self / D` to lowest terms.
pub trait Reduce<D> {
  type Output: Rational;
}

impl<N, D> Reduce<D> for N
where
  N: Gcd<D> + Div<Gcf<N, D>>,
  D: Div<Gcf<N, D>>,
  Quot<D, Gcf<N, D>>: Simplify<Quot<N, Gcf<N, D>>>,
{
  type Output = <Quot<D, Gcf<N, D>> as Simplify<Quot<N, Gcf<N, D>>>>::Output;
}

pub type Reduced<N, D> = <N as Reduce<D>>::Output;

pub trait RationalAdd<Rhs> {
  type Output: Rational;
}

impl<L: Rational, R: Rational> RationalAdd<R> for L
where
  L::Numer: Mul<R::Denom>,
  R::Numer: Mul<L::Denom>,
  L::Denom: Mul<R::Denom>,
  Prod<L::Numer, R::Denom>: Add<Prod<R::Numer, L::Denom>>,
  Sum<Prod<L::Numer, R::Denom>, Prod<R::Numer, L::Denom>>: Reduce<Prod<L::Denom, R::Denom>>,
{
  type Output = Reduced<Sum<Prod<L::Numer, R::Denom>, Prod<R::Numer, L::Denom>>, Prod<L::Denom, R::Denom>>;
}

pub trait RationalSub<Rhs> {
  type Output: Rational;
}

impl<L: Rational, R: Rational> RationalSub<R> for L
where
  L::Numer: Mul<R::Denom>,
  R::Numer: Mul<L::Denom>,
  L::Denom: Mul<R::Denom>,
  Prod<L::Numer, R::Denom>: Sub<Prod<R::Numer, L::Denom>>,
  Diff<Prod<L::Numer, R::Denom>, Prod<R::Numer, L::Denom>>: Reduce<Prod<L::Denom, R::Denom>>,
{
  type Output = Reduced<Diff<Prod<L::Numer, R::Denom>, Prod<R::Numer, L::Denom>>, Prod<L::Denom, R::Denom>>;
}

/// Multiplies an exponent by the integer `K`.
pub trait RationalScale<K> {
  type Output: Rational;
}

impl<Q: Rational, K: Integer> RationalScale<K> for Q
where
  Q::Numer: Mul<K>,
  Prod<Q::Numer, K>: Reduce<Q::Denom>,
{
  type Output = Reduced<Prod<Q::Numer, K>, Q::Denom>;
}

/// Divides an exponent by the positive integer `K`.
pub trait RationalRoot<K> {
  type Output: Rational;
}

impl<Q: Rational, U: Unsigned + NonZero> RationalRoot<PInt<U>> for Q
where
  Q::Denom: Mul<PInt<U>>,
  Q::Numer: Reduce<Prod<Q::Denom, PInt<U>>>,
{
  type Output = Reduced<Q::Numer, Prod<Q::Denom, PInt<U>>>;
}

pub type RationalSum<L, R> = <L as RationalAdd<R>>::Output;
pub type RationalDiff<L, R> = <L as RationalSub<R>>::Output;
pub type RationalScaled<Q, K> = <Q as RationalScale<K>>::Output;
pub type RationalRooted<Q, K> = <Q as RationalRoot<K>>::Output;
