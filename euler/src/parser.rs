use std::mem::transmute;

use euler_util::parser::{Parser, ParserState};

use crate::{
  ast::{BinaryOp, Expr, ExprKind, Ident, Span, Stmt},
  big_uint::BigUInt,
  diag::Diag,
  lexer::Token,
};

pub struct EulerParser<'src> {
  state: ParserState<'src, Token>,
}

impl<'src> Parser<'src> for EulerParser<'src> {
  type Token = Token;
  type Error = Diag;

  fn state(&mut self) -> &mut ParserState<'src, Token> {
    &mut self.state
  }

  fn lex_error(&self) -> Diag {
    Diag::LexError { span: self.state.lexer.span().into() }
  }

  fn unexpected_error(&self) -> Diag {
    Diag::UnexpectedToken {
      span: self.state.lexer.span().into(),
      expected: self.state.expected,
      found: self.state.token,
    }
  }
}

type Parse<T = ()> = Result<T, Diag>;

impl<'src> EulerParser<'src> {
  /// Parses a sequence of `;`-separated statements. Empty input yields no
  /// statements.
  pub fn parse(src: &'src str) -> Parse<Vec<Stmt>> {
    let mut parser = EulerParser { state: ParserState::new(src) };
    parser.bump()?;
    let mut stmts = Vec::new();
    while parser.state.token.is_some() {
      stmts.push(parser.parse_stmt()?);
      if !parser.eat(Token::Semi)? {
        break;
      }
    }
    if parser.state.token.is_some() {
      parser.unexpected()?
    }
    Ok(stmts)
  }

  /// Parses a single expression spanning the whole input.
  pub fn parse_expr_only(src: &'src str) -> Parse<Expr> {
    let mut parser = EulerParser { state: ParserState::new(src) };
    parser.bump()?;
    let expr = parser.parse_expr()?;
    if parser.state.token.is_some() {
      parser.unexpected()?
    }
    Ok(expr)
  }

  fn parse_stmt(&mut self) -> Parse<Stmt> {
    if self.eat(Token::Let)? {
      let name = self.parse_ident()?;
      self.expect(Token::Eq)?;
      let value = self.parse_expr()?;
      Ok(Stmt::Let(name, value))
    } else {
      Ok(Stmt::Expr(self.parse_expr()?))
    }
  }

  fn parse_ident(&mut self) -> Parse<Ident> {
    Ok(Ident(self.expect(Token::Ident)?.to_owned()))
  }

  fn parse_expr(&mut self) -> Parse<Expr> {
    self.parse_expr_bp(BP::Min)
  }

  fn parse_expr_bp(&mut self, bp: BP) -> Parse<Expr> {
    let start = self.start_span();
    let mut expr = self.parse_expr_atom()?;
    'main: loop {
      for &(op_bp, token, op) in BINARY_OP_TABLE {
        if bp.permits(op_bp) && self.eat(token)? {
          let rhs = self.parse_expr_bp(if op_bp.right_assoc() { op_bp } else { op_bp.inc() })?;
          let span = self.span(start);
          expr = Expr { span, kind: ExprKind::BinaryOp(op, Box::new(expr), Box::new(rhs)) };
          continue 'main;
        }
      }
      return Ok(expr);
    }
  }

  fn parse_expr_atom(&mut self) -> Parse<Expr> {
    let start = self.start_span();
    let kind = if self.check(Token::Num) {
      let token = self.expect(Token::Num)?;
      ExprKind::Num(Self::parse_num(token)?)
    } else if self.check(Token::Ident) {
      ExprKind::Var(self.parse_ident()?)
    } else if self.eat(Token::OpenParen)? {
      let inner = self.parse_expr()?;
      self.expect(Token::CloseParen)?;
      return Ok(Expr { span: self.span(start), kind: inner.kind });
    } else {
      self.unexpected()?
    };
    Ok(Expr { span: self.span(start), kind })
  }

  fn parse_num(token: &str) -> Parse<BigUInt> {
    let digits = token.chars().filter(|&c| c != '_').collect::<String>();
    BigUInt::from_decimal_string(&digits)
  }

  fn span(&mut self, start: usize) -> Span {
    let (start, end) = self.end_span(start);
    Span { start, end }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
enum BP {
  Min,
  Additive,
  Multiplicative,
  Power,
  Max,
}

impl BP {
  const fn inc(self) -> Self {
    if self as u8 == BP::Max as u8 {
      self
    } else {
      unsafe { transmute::<u8, BP>(self as u8 + 1) }
    }
  }

  fn permits(self, other: Self) -> bool {
    other >= self
  }

  fn right_assoc(self) -> bool {
    self == BP::Power
  }
}

#[rustfmt::skip]
const BINARY_OP_TABLE: &[(BP, Token, BinaryOp)] = &[
  (BP::Additive,       Token::Plus,    BinaryOp::Add),
  (BP::Additive,       Token::Minus,   BinaryOp::Sub),
  (BP::Multiplicative, Token::Star,    BinaryOp::Mul),
  (BP::Multiplicative, Token::Slash,   BinaryOp::Div),
  (BP::Multiplicative, Token::Percent, BinaryOp::Rem),
  (BP::Power,          Token::Caret,   BinaryOp::Pow),
];
