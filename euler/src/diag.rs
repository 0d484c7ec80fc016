use std::{
  error::Error,
  fmt::{self, Display},
};

use euler_util::lexer::TokenSet;

use crate::{
  ast::{Ident, Span},
  big_uint::BigUInt,
  lexer::Token,
};

macro_rules! diags {
  ($(
    $name:ident $({ $($field:ident: $ty:ty),* $(,)? })?
      [$($fmt:tt)*]
  )*) => {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Diag {
      $( $name $({ $($field: $ty),* })?, )*
    }

    impl Display for Diag {
      #[allow(unused_variables)]
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
          $( Self::$name $({ $($field),* })? => write!(f, $($fmt)*), )*
        }
      }
    }
  };
}

diags! {
  InvalidDigit { found: char, index: usize }
    ["invalid digit `{found}` at index {index}"]
  EmptyNumber
    ["expected at least one digit"]
  NegativeResult { minuend: BigUInt, subtrahend: BigUInt }
    ["cannot subtract `{subtrahend}` from `{minuend}`; the result would be negative"]
  DivisionByZero
    ["division by zero"]
  ExponentTooLarge { exp: BigUInt }
    ["exponent `{exp}` is too large"]
  LexError { span: Span }
    ["unrecognized input"]
  UnexpectedToken { span: Span, expected: TokenSet<Token>, found: Option<Token> }
    ["expected one of {expected:?}; found {found:?}"]
  UnboundVariable { span: Span, name: Ident }
    ["cannot find variable `{name}`"]
}

impl Diag {
  /// Where in the calculator source the error occurred, if it came from
  /// there.
  pub fn span(&self) -> Option<Span> {
    match self {
      Diag::LexError { span }
      | Diag::UnexpectedToken { span, .. }
      | Diag::UnboundVariable { span, .. } => Some(*span),
      _ => None,
    }
  }
}

impl Error for Diag {}
