use std::fmt;

/// A single decimal digit, always in `0..=9`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
  pub const ZERO: Digit = Digit(0);
  pub const ONE: Digit = Digit(1);

  pub const fn new(n: u8) -> Option<Digit> {
    if n < 10 { Some(Digit(n)) } else { None }
  }

  pub fn from_char(c: char) -> Option<Digit> {
    c.to_digit(10).map(|d| Digit(d as u8))
  }

  pub const fn get(self) -> u8 {
    self.0
  }

  pub fn to_char(self) -> char {
    char::from(b'0' + self.0)
  }

  /// All digits in ascending order.
  pub fn all() -> impl DoubleEndedIterator<Item = Digit> + Clone {
    (0..10).map(Digit)
  }

  /// The last decimal digit of `n`.
  pub(crate) const fn low(n: u8) -> Digit {
    Digit(n % 10)
  }

  /// Splits `n` into its last decimal digit and the carry into the next
  /// position.
  pub(crate) const fn split(n: u8) -> (Digit, u8) {
    (Digit(n % 10), n / 10)
  }
}

impl fmt::Display for Digit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Write::write_char(f, self.to_char())
  }
}
