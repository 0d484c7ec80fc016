use std::mem::transmute;

use logos::Logos;

use euler_util::lexer::Token as TokenTrait;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[repr(u8)]
pub enum Token {
  #[token("(")]
  OpenParen,
  #[token(")")]
  CloseParen,
  #[token("+")]
  Plus,
  #[token("-")]
  Minus,
  #[token("*")]
  Star,
  #[token("/")]
  Slash,
  #[token("%")]
  Percent,
  #[token("^")]
  Caret,
  #[token("=")]
  Eq,
  #[token(";")]
  Semi,

  #[token("let")]
  Let,

  #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
  Ident,
  #[regex(r"[0-9][0-9_]*")]
  Num,

  #[regex("//[^\n]*", logos::skip)]
  Skip,
}

impl TokenTrait for Token {
  fn into_u8(self) -> u8 {
    self as u8
  }

  unsafe fn from_u8(value: u8) -> Self {
    unsafe { transmute::<u8, Token>(value) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lex(src: &str) -> Vec<Result<Token, ()>> {
    Token::lexer(src).collect()
  }

  #[test]
  fn tokens() {
    use Token::*;
    assert_eq!(
      lex("let x_1 = (1_000 + 2) ^ 3 // comment\n; letter"),
      [Let, Ident, Eq, OpenParen, Num, Plus, Num, CloseParen, Caret, Num, Semi, Ident].map(Ok)
    );
    assert_eq!(lex("4 / 2 % 1 - 0 * 9"), [Num, Slash, Num, Percent, Num, Minus, Num, Star, Num].map(Ok));
    assert_eq!(lex("1 ? 2"), [Ok(Num), Err(()), Ok(Num)]);
  }
}
