mod common;
use common::*;
use hackvm::lang::ErrorCode;
use hackvm::mach::Runtime;
use hackvm::term::{interact, Outcome};
use std::io::Cursor;

fn session(input: &str) -> (Outcome, String) {
    let mut r = Runtime::default();
    let mut out = Vec::new();
    let outcome = interact(&mut r, 5000, Cursor::new(input), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_state_persists_across_lines() {
    let mut r = Runtime::default();
    r.enter("3");
    assert_eq!(exec(&mut r), "");
    r.enter("4+p");
    assert_eq!(exec(&mut r), "7");
}

#[test]
fn test_memory_persists_across_lines() {
    let mut r = Runtime::default();
    r.enter("90>");
    assert_eq!(exec(&mut r), "");
    r.enter("0<0<*p");
    assert_eq!(exec(&mut r), "81");
}

#[test]
fn test_subroutine_defined_before_call() {
    let mut r = Runtime::default();
    r.enter("4g 5$");
    assert_eq!(exec(&mut r), "");
    r.enter("3cp");
    assert_eq!(exec(&mut r), "5");
}

#[test]
fn test_session_prompts() {
    let (outcome, out) = session("3\n4+p\n");
    assert_eq!(outcome, Outcome::EndOfCode);
    assert_eq!(out, "\nHackVM>\nHackVM>7\nHackVM>");
}

#[test]
fn test_session_fault_ends_input() {
    let (outcome, out) = session("1p\n5d d\n2p\n");
    match outcome {
        Outcome::Fault(error) => {
            assert_eq!(error.code(), ErrorCode::StackUnderflow);
            assert_eq!(error.pc(), Some(6));
        }
        outcome => panic!("expected fault, got {:?}", outcome),
    }
    assert_eq!(out, "\nHackVM>1\nHackVM>");
}

#[test]
fn test_session_exit() {
    let (outcome, out) = session("!\n1p\n");
    assert_eq!(outcome, Outcome::Exit);
    assert_eq!(out, "\nHackVM>");
}
