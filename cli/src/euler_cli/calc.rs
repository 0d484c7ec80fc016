use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use euler::eval::Env;

#[derive(Debug, Args)]
pub struct CalcArgs {
  /// Statements separated by `;`, e.g. `let a = 2 ^ 64; a % 7`
  expr: String,
}

impl CalcArgs {
  pub fn execute(self) -> Result<()> {
    let values = Env::default().run(&self.expr)?;
    let mut out = io::stdout().lock();
    for value in values {
      writeln!(out, "{value}")?;
    }
    Ok(())
  }
}
