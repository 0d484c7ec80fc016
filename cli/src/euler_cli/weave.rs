use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use euler::{
  big_uint::BigUInt,
  weave::{CellId, Weave},
};

#[derive(Debug, Args)]
pub struct WeaveArgs {
  /// Also print the largest sum along a path from the top row to the bottom
  #[arg(long)]
  max_path: bool,
  #[arg(required = true)]
  values: Vec<String>,
}

impl WeaveArgs {
  pub fn execute(self) -> Result<()> {
    let WeaveArgs { max_path, values } = self;
    let values = values
      .iter()
      .map(|value| value.parse::<BigUInt>().with_context(|| format!("invalid value `{value}`")))
      .collect::<Result<Vec<_>>>()?;
    let weave = Weave::new(values);

    let mut out = io::stdout().lock();
    for row in weave.rows() {
      let line = row.iter().map(|cell| cell.value.to_string()).collect::<Vec<_>>().join(" ");
      writeln!(out, "{line}")?;
    }
    writeln!(out, "depth: {}, remainder: {}", weave.depth(), weave.remainder())?;

    if max_path {
      let best = weave.fold_up(|value, left: Option<&BigUInt>, right| match left.max(right) {
        Some(child) => value + child,
        None => value.clone(),
      });
      if let Some(total) = best.get(CellId(0)) {
        writeln!(out, "max path: {total}")?;
      }
    }
    Ok(())
  }
}
