use std::io::{self, BufRead, IsTerminal, StdinLock};

use anyhow::Result;
use clap::Args;
use euler::{diag::Diag, eval::Env};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::debug;

const PROMPT: &str = "> ";

#[derive(Debug, Args)]
pub struct ReplArgs {
  /// Echo each input line after the prompt, for transcripts of piped input
  #[arg(long)]
  echo: bool,
}

impl ReplArgs {
  pub fn execute(self) -> Result<()> {
    let mut input = Input::new()?;
    let mut env = Env::default();
    while let Some(line) = input.read_line()? {
      if self.echo {
        println!("{PROMPT}{line}");
      }
      match line.trim() {
        "" => {}
        ":quit" | ":q" => break,
        ":vars" => {
          for (name, value) in env.vars() {
            println!("{name} = {value}");
          }
        }
        _ => match env.run(&line) {
          Ok(values) => {
            for value in values {
              println!("{value}");
            }
          }
          Err(diag) => report(&diag),
        },
      }
    }
    Ok(())
  }
}

/// Prints `diag`, underlining its span in the line above when there is one.
fn report(diag: &Diag) {
  debug!(?diag, "repl error");
  println!("error: {diag}");
  if let Some(span) = diag.span() {
    let indent = " ".repeat(PROMPT.len() + span.start);
    let marker = "^".repeat((span.end - span.start).max(1));
    println!("{indent}{marker}");
  }
}

enum Input {
  Editor(DefaultEditor),
  Piped(StdinLock<'static>),
}

impl Input {
  fn new() -> Result<Self> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
      Ok(Input::Editor(DefaultEditor::new()?))
    } else {
      Ok(Input::Piped(stdin.lock()))
    }
  }

  fn read_line(&mut self) -> Result<Option<String>> {
    match self {
      Input::Editor(editor) => match editor.readline(PROMPT) {
        Ok(line) => {
          if !line.trim().is_empty() {
            editor.add_history_entry(&line)?;
          }
          Ok(Some(line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
      },
      Input::Piped(stdin) => {
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
          return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
      }
    }
  }
}
