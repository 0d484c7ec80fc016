use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Args;
use euler::prime::{is_prime, primes};

#[derive(Debug, Args)]
pub struct PrimeArgs {
  /// Print the n-th prime for each argument instead of testing it
  #[arg(long)]
  nth: bool,
  #[arg(required = true)]
  numbers: Vec<u64>,
}

impl PrimeArgs {
  pub fn execute(self) -> Result<()> {
    let PrimeArgs { nth, numbers } = self;
    let mut out = io::stdout().lock();
    for n in numbers {
      if nth {
        let Some(index) = n.checked_sub(1) else { bail!("primes are numbered from 1") };
        match primes().nth(usize::try_from(index)?) {
          Some(prime) => writeln!(out, "prime #{n} is {prime}")?,
          None => bail!("there is no prime #{n}"),
        }
      } else if is_prime(n) {
        writeln!(out, "{n} is prime")?;
      } else {
        writeln!(out, "{n} is not prime")?;
      }
    }
    Ok(())
  }
}
