use indexmap::IndexMap;
use tracing::debug;

use crate::{
  ast::{BinaryOp, Expr, ExprKind, Ident, Stmt},
  big_uint::BigUInt,
  diag::Diag,
  parser::EulerParser,
};

/// Variable bindings for the calculator, kept in definition order.
#[derive(Debug, Default, Clone)]
pub struct Env {
  vars: IndexMap<Ident, BigUInt>,
}

impl Env {
  /// Parses and executes `src`, returning the value of each expression
  /// statement in order. Bindings made before an error are kept.
  pub fn run(&mut self, src: &str) -> Result<Vec<BigUInt>, Diag> {
    let stmts = EulerParser::parse(src)?;
    let mut values = Vec::new();
    for stmt in &stmts {
      values.extend(self.exec(stmt)?);
    }
    Ok(values)
  }

  pub fn exec(&mut self, stmt: &Stmt) -> Result<Option<BigUInt>, Diag> {
    match stmt {
      Stmt::Let(name, value) => {
        let value = self.eval(value)?;
        debug!(%name, %value, "bind");
        self.vars.insert(name.clone(), value);
        Ok(None)
      }
      Stmt::Expr(expr) => self.eval(expr).map(Some),
    }
  }

  pub fn eval(&self, expr: &Expr) -> Result<BigUInt, Diag> {
    match &expr.kind {
      ExprKind::Num(n) => Ok(n.clone()),
      ExprKind::Var(name) => self
        .vars
        .get(name)
        .cloned()
        .ok_or_else(|| Diag::UnboundVariable { span: expr.span, name: name.clone() }),
      ExprKind::BinaryOp(op, lhs, rhs) => {
        let mut lhs = self.eval(lhs)?;
        let rhs = self.eval(rhs)?;
        match op {
          BinaryOp::Add => lhs.add(&rhs),
          BinaryOp::Sub => lhs.sub(&rhs)?,
          BinaryOp::Mul => lhs.mult(&rhs),
          BinaryOp::Div => lhs.div(&rhs)?,
          BinaryOp::Rem => lhs.rem(&rhs)?,
          BinaryOp::Pow => {
            let exp = rhs.to_u64().and_then(|exp| u32::try_from(exp).ok());
            lhs = lhs.pow(exp.ok_or(Diag::ExponentTooLarge { exp: rhs })?);
          }
        }
        Ok(lhs)
      }
    }
  }

  pub fn get(&self, name: &str) -> Option<&BigUInt> {
    self.vars.get(&Ident(name.to_owned()))
  }

  pub fn vars(&self) -> impl Iterator<Item = (&Ident, &BigUInt)> {
    self.vars.iter()
  }
}
