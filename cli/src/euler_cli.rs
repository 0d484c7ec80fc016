mod calc;
mod completion;
mod permute;
mod prime;
mod repl;
mod weave;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use calc::CalcArgs;
pub use completion::CompletionArgs;
pub use permute::PermuteArgs;
pub use prime::PrimeArgs;
pub use repl::ReplArgs;
pub use weave::WeaveArgs;

#[derive(Debug, Parser)]
#[command(name = "euler", version, about = "Euler's CLI", propagate_version = true)]
pub struct EulerCli {
  /// Log filter, in `tracing_subscriber::EnvFilter` syntax
  #[arg(long, env = "EULER_LOG", default_value = "warn", global = true)]
  log: String,
  #[command(subcommand)]
  command: EulerCommand,
}

#[derive(Debug, Subcommand)]
pub enum EulerCommand {
  #[command(about = "Test numbers for primality")]
  Prime(PrimeArgs),
  #[command(about = "Print the next lexicographic permutation of a sequence")]
  Permute(PermuteArgs),
  #[command(about = "Arrange numbers into a triangle of interwoven binary trees")]
  Weave(WeaveArgs),
  #[command(about = "Evaluate an arbitrary-precision arithmetic expression")]
  Calc(CalcArgs),
  #[command(about = "Start an interactive calculator")]
  Repl(ReplArgs),
  #[command(about = "Print shell completions")]
  Completion(CompletionArgs),
}

impl EulerCli {
  pub fn execute() -> Result<()> {
    let EulerCli { log, command } = Self::parse();
    init_logging(&log)?;
    debug!(?command, "executing");
    match command {
      EulerCommand::Prime(args) => args.execute(),
      EulerCommand::Permute(args) => args.execute(),
      EulerCommand::Weave(args) => args.execute(),
      EulerCommand::Calc(args) => args.execute(),
      EulerCommand::Repl(args) => args.execute(),
      EulerCommand::Completion(args) => args.execute(),
    }
  }
}

fn init_logging(filter: &str) -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_new(filter)?)
    .with_writer(io::stderr)
    .without_time()
    .init();
  Ok(())
}
