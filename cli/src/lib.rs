mod euler_cli;

pub use euler_cli::*;
