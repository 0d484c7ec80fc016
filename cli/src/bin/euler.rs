use anyhow::Result;
use euler_cli::EulerCli;

fn main() -> Result<()> {
  EulerCli::execute()
}
