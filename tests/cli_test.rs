use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn program(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hackvm-{}-{}.hvm", std::process::id(), name));
    std::fs::write(&path, text).unwrap();
    path
}

fn hackvm(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hackvm"))
        .args(args)
        .env_remove("HACKVM_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_batch_success() {
    let path = program("batch", "34+p\n");
    let out = hackvm(&[path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "7");
}

#[test]
fn test_batch_exit_opcode() {
    let path = program("exit", "1p!2p");
    let out = hackvm(&[path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1");
}

#[test]
fn test_batch_fault() {
    let path = program("fault", "5p01-<9p");
    let out = hackvm(&[path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "5");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ADDRESS OUT OF RANGE"));
    assert!(stderr.contains("opcode: <"));
    assert!(stderr.contains("Program counter: 6"));
    assert_eq!(stderr.matches("ADDRESS OUT OF RANGE").count(), 1);
}

#[test]
fn test_missing_file() {
    let out = hackvm(&["/nonexistent/hackvm/program.hvm"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_interactive_from_pipe() {
    let out = hackvm(&["--quiet"], "3\n4+p\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "\nHackVM>\nHackVM>7\nHackVM>"
    );
}

#[test]
fn test_interactive_banner() {
    let out = hackvm(&[], "");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("Welcome to HackVM"));
}
