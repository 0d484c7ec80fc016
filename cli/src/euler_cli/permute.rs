use std::{
  fmt::{self, Display},
  io::{self, Write},
};

use anyhow::Result;
use clap::Args;
use euler::{
  big_uint::BigUInt,
  diag::Diag,
  permute::{next_permutation, permutations},
};

#[derive(Debug, Args)]
pub struct PermuteArgs {
  /// Print the given arrangement and every later one
  #[arg(long)]
  all: bool,
  /// Compared as numbers if they all are, otherwise as strings; printed as given
  #[arg(required = true)]
  items: Vec<String>,
}

impl PermuteArgs {
  pub fn execute(self) -> Result<()> {
    let PermuteArgs { all, items } = self;
    let numbers = items
      .iter()
      .map(|text| -> Result<_, Diag> { Ok(Numeric { value: text.parse()?, text: text.clone() }) })
      .collect::<Result<Vec<_>, _>>();
    match numbers {
      Ok(numbers) => print_permutations(&numbers, all),
      Err(_) => print_permutations(&items, all),
    }
  }
}

/// An item ordered by its numeric value and printed as it was written.
/// Spellings of the same value, like `07` and `7`, are ordered by their text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Numeric {
  value: BigUInt,
  text: String,
}

impl Display for Numeric {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

fn print_permutations<T: Ord + Clone + Display>(items: &[T], all: bool) -> Result<()> {
  let mut out = io::stdout().lock();
  if all {
    for permutation in permutations(items) {
      print_line(&mut out, &permutation)?;
    }
  } else {
    print_line(&mut out, &next_permutation(items))?;
  }
  Ok(())
}

fn print_line<T: Display>(out: &mut impl Write, items: &[T]) -> io::Result<()> {
  let line = items.iter().map(T::to_string).collect::<Vec<_>>().join(" ");
  writeln!(out, "{line}")
}
