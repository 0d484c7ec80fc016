use logos::Lexer;

use crate::lexer::{Token, TokenSet};

#[derive(Debug)]
pub struct ParserState<'src, T: Token> {
  pub lexer: Lexer<'src, T>,
  pub token: Option<T>,
  pub last_token_end: usize,
  pub expected: TokenSet<T>,
}

impl<'src, T: Token> ParserState<'src, T> {
  /// The state starts before the first token; call [`Parser::bump`] once
  /// before parsing.
  pub fn new(src: &'src str) -> Self {
    ParserState { lexer: T::lexer(src), token: None, last_token_end: 0, expected: TokenSet::default() }
  }
}

pub trait Parser<'src> {
  type Token: Token;
  type Error;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token>;

  fn lex_error(&self) -> Self::Error;

  fn unexpected_error(&self) -> Self::Error;

  fn bump(&mut self) -> Result<(), Self::Error> {
    self.state().expected.reset();
    self.state().last_token_end = self.state().lexer.span().end;
    match self.state().lexer.next() {
      None => self.state().token = None,
      Some(Ok(token)) => self.state().token = Some(token),
      Some(Err(_)) => Err(self.lex_error())?,
    }
    Ok(())
  }

  fn check(&mut self, kind: Self::Token) -> bool {
    self.state().expected.add(kind);
    self.state().token == Some(kind)
  }

  fn eat(&mut self, kind: Self::Token) -> Result<bool, Self::Error> {
    let matches = self.check(kind);
    if matches {
      self.bump()?;
    }
    Ok(matches)
  }

  fn expect(&mut self, kind: Self::Token) -> Result<&'src str, Self::Error> {
    if self.check(kind) {
      let token = self.state().lexer.slice();
      self.bump()?;
      Ok(token)
    } else {
      self.unexpected()
    }
  }

  fn unexpected<T>(&self) -> Result<T, Self::Error> {
    Err(self.unexpected_error())
  }

  fn start_span(&mut self) -> usize {
    self.state().lexer.span().start
  }

  fn end_span(&mut self, start: usize) -> (usize, usize) {
    (start, self.state().last_token_end)
  }
}

#[cfg(test)]
mod tests {
  use std::mem::transmute;

  use logos::Logos;

  use super::*;

  #[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
  #[logos(skip r"[ \t]+")]
  #[repr(u8)]
  enum Tok {
    #[token("(")]
    Open,
    #[token(")")]
    Close,
    #[regex("[a-z]+")]
    Word,
  }

  impl Token for Tok {
    fn into_u8(self) -> u8 {
      self as u8
    }

    unsafe fn from_u8(value: u8) -> Self {
      unsafe { transmute::<u8, Tok>(value) }
    }
  }

  #[derive(Debug, PartialEq, Eq)]
  enum Error {
    Lex,
    Unexpected(TokenSet<Tok>, Option<Tok>),
  }

  struct Words<'src>(ParserState<'src, Tok>);

  impl<'src> Parser<'src> for Words<'src> {
    type Token = Tok;
    type Error = Error;

    fn state(&mut self) -> &mut ParserState<'src, Tok> {
      &mut self.0
    }

    fn lex_error(&self) -> Error {
      Error::Lex
    }

    fn unexpected_error(&self) -> Error {
      Error::Unexpected(self.0.expected, self.0.token)
    }
  }

  fn parse(src: &str) -> Result<Vec<&str>, Error> {
    let mut parser = Words(ParserState::new(src));
    parser.bump()?;
    parser.expect(Tok::Open)?;
    let mut words = Vec::new();
    while !parser.eat(Tok::Close)? {
      words.push(parser.expect(Tok::Word)?);
    }
    Ok(words)
  }

  #[test]
  fn parses_words() {
    assert_eq!(parse("(ab cd  e)"), Ok(vec!["ab", "cd", "e"]));
    assert_eq!(parse("()"), Ok(vec![]));
  }

  #[test]
  fn reports_expected_tokens() {
    let Err(Error::Unexpected(expected, found)) = parse("(ab (") else { panic!() };
    assert_eq!(expected.into_iter().collect::<Vec<_>>(), [Tok::Close, Tok::Word]);
    assert_eq!(found, Some(Tok::Open));
    assert_eq!(parse("(ab ?)"), Err(Error::Lex));
  }
}
