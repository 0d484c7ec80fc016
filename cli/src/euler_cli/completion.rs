use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::EulerCli;

#[derive(Debug, Args)]
pub struct CompletionArgs {
  #[arg(value_enum)]
  shell: Shell,
}

impl CompletionArgs {
  pub fn execute(self) -> Result<()> {
    generate(self.shell, &mut EulerCli::command(), "euler", &mut io::stdout());
    Ok(())
  }
}
