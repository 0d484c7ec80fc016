#![allow(unexpected_cfgs)]

use std::{
  env, fs,
  io::{Read, Write},
  path::PathBuf,
  process::{Command, Stdio},
  thread::{self, JoinHandle},
};

use dyntest::{dyntest, DynTester};

#[cfg(not(rust_analyzer))]
dyntest!(tests);

fn tests(t: &mut DynTester) {
  env::set_current_dir("..").unwrap();

  let repl_input = b"let a = 2 ^ 64\na\na + 1\na * a\nlet b = a / 1_000_007; a % 1_000_007\n:vars\nc\n1 - 2\n10 / 0\n(1 + 2\n";

  t.group("prime", |t| {
    test_cli(t, "test", &["prime", "0", "1", "2", "3", "4", "97", "561", "2147483647"]);
    test_cli(t, "nth", &["prime", "--nth", "1", "6", "10001"]);
  });

  t.group("permute", |t| {
    test_cli(t, "next", &["permute", "1", "2", "3"]);
    test_cli(t, "last", &["permute", "3", "2", "1"]);
    test_cli(t, "numeric", &["permute", "9", "10"]);
    test_cli(t, "leading_zeros", &["permute", "01", "002", "3"]);
    test_cli(t, "leading_zeros_all", &["permute", "--all", "02", "10", "1"]);
    test_cli(t, "strings", &["permute", "b", "a", "c"]);
    test_cli(t, "all", &["permute", "--all", "0", "1", "2"]);
  });

  t.group("weave", |t| {
    test_cli(t, "max_path", &["weave", "--max-path", "3", "7", "4", "2", "4", "6", "8", "5", "9", "3"]);
    test_cli(t, "remainder", &["weave", "1", "2", "3", "4"]);
  });

  t.group("calc", |t| {
    test_cli(t, "add", &["calc", "999 + 1"]);
    test_cli(t, "mult", &["calc", "123 * 456; 7 * 6; 98765 * 0"]);
    test_cli(t, "sub", &["calc", "1000 - 1"]);
    test_cli(t, "div", &["calc", "56088 / 456; 56088 % 457"]);
    test_cli(t, "pow", &["calc", "2 ^ 1000"]);
    test_cli(t, "let", &["calc", "let a = 10 ^ 20; a - 1; a / 7; a % 7"]);
  });

  t.group("repl", |t| {
    test_repl(t, "basic", repl_input);
  });

  t.group("fail", |t| {
    test_cli_fail(t, "negative", &["calc", "1 - 2"]);
    test_cli_fail(t, "div_zero", &["calc", "5 / 0"]);
    test_cli_fail(t, "unexpected", &["calc", "1 +"]);
    test_cli_fail(t, "unbound", &["calc", "x * 2"]);
    test_cli_fail(t, "weave_digit", &["weave", "1", "2x"]);
    test_cli_fail(t, "prime_zero", &["prime", "--nth", "0"]);
  });
}

const EULER: &[&str] = &["euler"];

fn test_cli(t: &mut DynTester, name: &'static str, args: &'static [&'static str]) {
  let group = args[0];
  t.test(name, move || {
    let (stdout, stderr) = exec(EULER, args, &[], true);
    assert!(stderr.is_empty());
    test_snapshot(&[group, &format!("{name}.txt")], &stdout);
  });
}

fn test_cli_fail(t: &mut DynTester, name: &'static str, args: &'static [&'static str]) {
  t.test(name, move || {
    let (stdout, stderr) = exec(EULER, args, &[], false);
    assert!(stdout.is_empty());
    test_snapshot(&["fail", &format!("{name}.txt")], &stderr);
  });
}

fn test_repl(t: &mut DynTester, name: &'static str, input: &'static [u8]) {
  t.test(name, move || {
    let (stdout, stderr) = exec(EULER, &["repl", "--echo"], input, true);
    assert!(stderr.is_empty());
    test_snapshot(&["repl", &format!("{name}.txt")], &stdout);
  });
}

fn exec(bin: &[&str], args: &[&str], input: &[u8], success: bool) -> (Vec<u8>, Vec<u8>) {
  let mut child = Command::new(env!("CARGO"))
    .args(["run", "--quiet", "--bin"])
    .args(bin)
    .arg("--")
    .args(args)
    .env_remove("EULER_LOG")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();

  child.stdin.take().unwrap().write_all(input).unwrap();

  let stdout = parallel_read(child.stdout.take().unwrap());
  let stderr = parallel_read(child.stderr.take().unwrap());

  let status = child.wait().unwrap();
  if status.success() != success {
    let err = String::from_utf8(stderr.join().unwrap()).unwrap();
    eprintln!("{err}");
    panic!("{status}");
  }

  (stdout.join().unwrap(), stderr.join().unwrap())
}

fn test_snapshot(components: &[&str], contents: &[u8]) -> PathBuf {
  let path = get_snapshot_path(components);
  let existing = fs::read(&path).ok();
  if existing.is_none_or(|x| x != contents) {
    if should_write_snapshot() {
      println!("updating snapshot {:?}", path);
      fs::write(&path, contents).unwrap();
    } else {
      panic!("invalid snapshot {:?}", path);
    }
  }
  path
}

fn get_snapshot_path(components: &[&str]) -> PathBuf {
  let mut path = PathBuf::from("tests/snaps");
  path.extend(components);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  path
}

fn should_write_snapshot() -> bool {
  std::env::var("SNAP_CHECK").is_err()
}

fn parallel_read(mut read: impl Read + Send + 'static) -> JoinHandle<Vec<u8>> {
  thread::spawn(move || {
    let mut buf = Vec::new();
    read.read_to_end(&mut buf).unwrap();
    buf
  })
}
