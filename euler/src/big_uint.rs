use std::{
  cmp::Ordering,
  fmt::{self, Write},
  hash::{Hash, Hasher},
  iter, ops,
  str::FromStr,
};

use tracing::trace_span;

use crate::{diag::Diag, digit::Digit};

/// An unsigned integer of unbounded size, stored as decimal digits with the
/// most significant digit first.
///
/// The digit sequence is never empty. A value parsed from a string keeps any
/// leading zeros it was written with, but every arithmetic operation leaves
/// its receiver in canonical form (no leading zeros unless the value is
/// zero). Equality, ordering, and hashing all ignore leading zeros.
///
/// `add`, `sub`, `mult`, `div`, and `rem` mutate the receiver in place;
/// clone first to keep the original. `&a + &b` and `&a * &b` return new
/// values.
#[derive(Clone)]
pub struct BigUInt {
  digits: Vec<Digit>,
}

impl BigUInt {
  pub fn zero() -> Self {
    BigUInt { digits: vec![Digit::ZERO] }
  }

  pub fn one() -> Self {
    BigUInt { digits: vec![Digit::ONE] }
  }

  /// Parses a string of ASCII decimal digits. Leading zeros are kept as
  /// written. An invalid digit is reported by its character position.
  pub fn from_decimal_string(s: &str) -> Result<Self, Diag> {
    if s.is_empty() {
      Err(Diag::EmptyNumber)?
    }
    let digits = s
      .chars()
      .enumerate()
      .map(|(index, found)| Digit::from_char(found).ok_or(Diag::InvalidDigit { found, index }))
      .collect::<Result<_, _>>()?;
    Ok(BigUInt { digits })
  }

  /// The canonical decimal representation.
  pub fn to_decimal_string(&self) -> String {
    self.significant().iter().map(|d| d.to_char()).collect()
  }

  /// The stored digits, most significant first, including any leading zeros
  /// the value was constructed with.
  pub fn digits(&self) -> &[Digit] {
    &self.digits
  }

  /// The number of digits in the canonical representation.
  pub fn len(&self) -> usize {
    self.significant().len()
  }

  pub fn is_zero(&self) -> bool {
    self.significant() == [Digit::ZERO]
  }

  pub fn to_u64(&self) -> Option<u64> {
    self.significant().iter().try_fold(0u64, |n, d| n.checked_mul(10)?.checked_add(d.get() as u64))
  }

  /// Replaces `self` with `self + other`.
  pub fn add(&mut self, other: &BigUInt) {
    let (longer, shorter) = if self.digits.len() >= other.digits.len() {
      (&self.digits, &other.digits)
    } else {
      (&other.digits, &self.digits)
    };
    let diff = longer.len() - shorter.len();
    let mut sum = Vec::with_capacity(longer.len() + 1);
    let mut carry = 0;
    for i in (0..longer.len()).rev() {
      let lower = i.checked_sub(diff).map_or(0, |j| shorter[j].get());
      let (digit, next) = Digit::split(longer[i].get() + lower + carry);
      sum.push(digit);
      carry = next;
    }
    if carry != 0 {
      sum.push(Digit::ONE);
    }
    sum.reverse();
    self.digits = sum;
    self.normalize();
  }

  /// Replaces `self` with `self - other`.
  ///
  /// Fails with [`Diag::NegativeResult`] if `other` is larger than `self`, in
  /// which case `self` is left unchanged.
  pub fn sub(&mut self, other: &BigUInt) -> Result<(), Diag> {
    if *self < *other {
      Err(Diag::NegativeResult { minuend: self.normalized(), subtrahend: other.normalized() })?
    }
    let minuend = self.significant();
    let subtrahend = other.significant();
    let diff = minuend.len() - subtrahend.len();
    let mut result = Vec::with_capacity(minuend.len());
    let mut borrow = 0;
    for i in (0..minuend.len()).rev() {
      let taken = i.checked_sub(diff).map_or(0, |j| subtrahend[j].get()) + borrow;
      let have = minuend[i].get();
      if have >= taken {
        result.push(Digit::low(have - taken));
        borrow = 0;
      } else {
        result.push(Digit::low(have + 10 - taken));
        borrow = 1;
      }
    }
    debug_assert_eq!(borrow, 0);
    result.reverse();
    self.digits = result;
    self.normalize();
    Ok(())
  }

  /// Replaces `self` with `self * other`.
  ///
  /// Long multiplication: one partial product per digit of `self`, shifted to
  /// its place value and summed with [`BigUInt::add`].
  pub fn mult(&mut self, other: &BigUInt) {
    let _span = trace_span!("mult", lhs = self.len(), rhs = other.len()).entered();
    let mut total = BigUInt::zero();
    for (shift, &digit) in self.significant().iter().rev().enumerate() {
      let mut partial = other.mul_digit(digit);
      partial.shift_left(shift);
      total.add(&partial);
    }
    *self = total;
  }

  /// Replaces `self` with `floor(self / other)`.
  pub fn div(&mut self, other: &BigUInt) -> Result<(), Diag> {
    let (quotient, _) = self.div_rem(other)?;
    *self = quotient;
    Ok(())
  }

  /// Replaces `self` with `self mod other`.
  pub fn rem(&mut self, other: &BigUInt) -> Result<(), Diag> {
    let (_, remainder) = self.div_rem(other)?;
    *self = remainder;
    Ok(())
  }

  /// Long division, returning the quotient and the remainder.
  pub fn div_rem(&self, other: &BigUInt) -> Result<(BigUInt, BigUInt), Diag> {
    if other.is_zero() {
      Err(Diag::DivisionByZero)?
    }
    let _span = trace_span!("div_rem", lhs = self.len(), rhs = other.len()).entered();
    let mut quotient = Vec::with_capacity(self.digits.len());
    let mut remainder = BigUInt::zero();
    for &digit in self.significant() {
      remainder.push_digit(digit);
      for q in Digit::all().rev() {
        let product = other.mul_digit(q);
        if product <= remainder {
          remainder.sub(&product)?;
          quotient.push(q);
          break;
        }
      }
    }
    let mut quotient = BigUInt { digits: quotient };
    quotient.normalize();
    Ok((quotient, remainder))
  }

  /// Raises `self` to the power `exp` by repeated squaring. `0 ^ 0` is 1.
  pub fn pow(&self, mut exp: u32) -> BigUInt {
    let _span = trace_span!("pow", base = self.len(), exp).entered();
    let mut result = BigUInt::one();
    let mut base = self.normalized();
    while exp > 0 {
      if exp & 1 == 1 {
        result.mult(&base);
      }
      exp >>= 1;
      if exp > 0 {
        let square = base.clone();
        base.mult(&square);
      }
    }
    result
  }

  /// Multiplies by a single digit in one pass. The carry may exceed 1 here,
  /// unlike in addition.
  fn mul_digit(&self, digit: Digit) -> BigUInt {
    if digit == Digit::ZERO {
      return BigUInt::zero();
    }
    let mut product = Vec::with_capacity(self.digits.len() + 1);
    let mut carry = 0;
    for d in self.significant().iter().rev() {
      let (low, next) = Digit::split(d.get() * digit.get() + carry);
      product.push(low);
      carry = next;
    }
    if carry != 0 {
      product.push(Digit::low(carry));
    }
    product.reverse();
    let mut product = BigUInt { digits: product };
    product.normalize();
    product
  }

  /// Multiplies by `10 ^ n`.
  fn shift_left(&mut self, n: usize) {
    if !self.is_zero() {
      self.digits.extend(iter::repeat(Digit::ZERO).take(n));
    }
  }

  /// Computes `self * 10 + digit`.
  fn push_digit(&mut self, digit: Digit) {
    if self.is_zero() {
      self.digits = vec![digit];
    } else {
      self.digits.push(digit);
    }
  }

  fn leading_zeros(&self) -> usize {
    self.digits[..self.digits.len() - 1].iter().take_while(|&&d| d == Digit::ZERO).count()
  }

  fn significant(&self) -> &[Digit] {
    &self.digits[self.leading_zeros()..]
  }

  fn normalize(&mut self) {
    let zeros = self.leading_zeros();
    self.digits.drain(..zeros);
  }

  fn normalized(&self) -> BigUInt {
    BigUInt { digits: self.significant().to_vec() }
  }
}

impl Default for BigUInt {
  fn default() -> Self {
    BigUInt::zero()
  }
}

impl PartialEq for BigUInt {
  fn eq(&self, other: &Self) -> bool {
    self.significant() == other.significant()
  }
}

impl Eq for BigUInt {}

impl Hash for BigUInt {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.significant().hash(state);
  }
}

impl Ord for BigUInt {
  fn cmp(&self, other: &Self) -> Ordering {
    let (a, b) = (self.significant(), other.significant());
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
  }
}

impl PartialOrd for BigUInt {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for BigUInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for digit in self.significant() {
      f.write_char(digit.to_char())?;
    }
    Ok(())
  }
}

impl fmt::Debug for BigUInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "BigUInt({self})")
  }
}

impl FromStr for BigUInt {
  type Err = Diag;

  fn from_str(s: &str) -> Result<Self, Diag> {
    BigUInt::from_decimal_string(s)
  }
}

impl From<u64> for BigUInt {
  fn from(mut n: u64) -> BigUInt {
    let mut digits = Vec::new();
    loop {
      digits.push(Digit::low((n % 10) as u8));
      n /= 10;
      if n == 0 {
        break;
      }
    }
    digits.reverse();
    BigUInt { digits }
  }
}

impl From<u32> for BigUInt {
  fn from(n: u32) -> BigUInt {
    (n as u64).into()
  }
}

impl From<usize> for BigUInt {
  fn from(n: usize) -> BigUInt {
    (n as u64).into()
  }
}

impl ops::Add<&BigUInt> for &BigUInt {
  type Output = BigUInt;

  fn add(self, rhs: &BigUInt) -> BigUInt {
    let mut sum = self.clone();
    BigUInt::add(&mut sum, rhs);
    sum
  }
}

impl ops::Mul<&BigUInt> for &BigUInt {
  type Output = BigUInt;

  fn mul(self, rhs: &BigUInt) -> BigUInt {
    let mut product = self.clone();
    BigUInt::mult(&mut product, rhs);
    product
  }
}
