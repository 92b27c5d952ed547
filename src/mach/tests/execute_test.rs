use super::*;
use crate::lang::ErrorCode;

#[test]
fn test_execute_runs_exactly_n_instructions() {
    let mut r = Runtime::load("++++++").unwrap();
    assert_eq!(r.execute(4), Event::Running);
    assert_eq!(r.steps(), 4);
    assert_eq!(cell(&r), 4);
    assert_eq!(r.execute(0), Event::Halted);
    assert_eq!(r.steps(), 6);
}

#[test]
fn test_execute_reports_halt_on_last_cycle() {
    let mut r = Runtime::load("++").unwrap();
    assert_eq!(r.execute(2), Event::Halted);
    assert!(r.is_halted());
}

#[test]
fn test_infinite_loop_keeps_running() {
    let mut r = Runtime::load("+[]").unwrap();
    assert_eq!(r.execute(1000), Event::Running);
    assert_eq!(r.execute(1000), Event::Running);
    assert_eq!(r.steps(), 2000);
}

#[test]
fn test_interrupt_is_resumable() {
    let mut r = Runtime::load("+++").unwrap();
    r.interrupt();
    assert_eq!(r.execute(0), Event::Interrupted);
    assert_eq!(r.steps(), 0);
    assert_eq!(r.execute(0), Event::Halted);
    assert_eq!(cell(&r), 3);
}

#[test]
fn test_step_after_halt_does_nothing() {
    let mut r = Runtime::load("+").unwrap();
    assert!(r.step().unwrap());
    assert!(!r.step().unwrap());
    assert!(!r.step().unwrap());
    assert_eq!(r.steps(), 1);
}

#[test]
fn test_empty_program_halts_immediately() {
    let mut r = Runtime::load("no instructions here").unwrap();
    assert!(r.is_halted());
    assert_eq!(r.execute(10), Event::Halted);
    assert!(r.run().is_ok());
}

#[test]
fn test_enter_keeps_machine_state() {
    let mut r = Runtime::load("+++^").unwrap();
    r.run().unwrap();
    r.enter(">++").unwrap();
    assert_eq!(r.pc(), 0);
    r.run().unwrap();
    assert_eq!(r.memory().read(0, 0), 3);
    assert_eq!(r.memory().read(0, 1), 2);
    assert_eq!(r.register(), 3);
    assert_eq!(r.pointer(), Pointer::new(0, 1));
    assert_eq!(r.steps(), 7);
}

#[test]
fn test_enter_error_keeps_program() {
    let mut r = Runtime::load("+>+").unwrap();
    r.step().unwrap();
    let e = r.enter("[[]").unwrap_err();
    assert!(e.is_load_error());
    assert_eq!(r.program().to_string(), "+>+");
    assert_eq!(r.pc(), 1);
}

#[test]
fn test_reset() {
    let mut r = Runtime::with_config(Program::load("+++^.}").unwrap(), Config::default())
        .with_input(InputTape::from(vec![1]));
    r.run().unwrap();
    r.reset();
    assert_eq!(r.pc(), 0);
    assert_eq!(r.pointer(), Pointer::default());
    assert_eq!(r.register(), 0);
    assert_eq!(r.memory().pages(), 0);
    assert!(r.output().is_empty());
    assert_eq!(r.steps(), 0);
    assert_eq!(r.input().cells(), [1]);
    assert_eq!(r.program().len(), 6);
}

#[test]
fn test_page_limit_faults_on_access_only() {
    let config = Config::new().with_max_pages(2);
    let r = run_with("}}}{{{+", config.clone(), InputTape::new());
    assert_eq!(cell(&r), 1);

    let mut r = Runtime::with_config(Program::load("}+}+").unwrap(), config);
    let e = match r.execute(0) {
        Event::Fault(e) => e,
        other => panic!("expected fault, got {:?}", other),
    };
    assert_eq!(e.code(), ErrorCode::InvalidPage);
    assert_eq!(e.address(), Some(3));
    assert!(!e.is_load_error());
    assert_eq!(r.pc(), 3);
    assert_eq!(r.steps(), 3);
    assert_eq!(r.pointer(), Pointer::new(2, 0));
    assert_eq!(r.memory().pages(), 1);
    assert_eq!(r.memory().read(1, 0), 1);
    assert_eq!(r.execute(0), Event::Fault(e));
}

#[test]
fn test_page_limit_faults_on_read() {
    let mut r = Runtime::with_config(Program::load("{[]").unwrap(), Config::new().with_max_pages(1));
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidPage);
    assert_eq!(e.address(), Some(1));
}

#[test]
fn test_rotate_amount_is_configurable() {
    let r = run_with("+~", Config::new().with_rotate(4), InputTape::new());
    assert_eq!(cell(&r), 0x1000);
    let r = run_with("+~", Config::new().with_rotate(0), InputTape::new());
    assert_eq!(cell(&r), 1);
}

#[test]
fn test_journal_streams_writes() {
    let mut r = Runtime::with_config(
        Program::load("+.+.>+++^.").unwrap(),
        Config::new().with_journal(true),
    );
    assert_eq!(r.execute(2), Event::Running);
    assert_eq!(r.output_mut().drain(), [(0, 1)]);
    assert_eq!(r.execute(0), Event::Halted);
    assert_eq!(r.output_mut().drain(), [(0, 2), (3, 3)]);
    assert_eq!(r.output().iter().collect::<Vec<_>>(), [(0, 2), (3, 3)]);
}

#[test]
fn test_snapshot() {
    let r = run("+++}>++");
    let s = r.snapshot();
    assert_eq!(s.pc, 7);
    assert_eq!(s.pointer, Pointer::new(1, 1));
    assert_eq!(s.cell, 2);
    assert_eq!(s.pages, 2);
    assert_eq!(
        s.to_string(),
        "pc 7/7 page 1 offset 1 register 0 cell 2 pages 2 steps 7"
    );
}

#[test]
fn test_independent_runtimes() {
    let program = Program::load("+++").unwrap();
    let mut a = Runtime::new(program.clone());
    let b = Runtime::new(program);
    a.run().unwrap();
    assert_eq!(cell(&a), 3);
    assert_eq!(cell(&b), 0);
}
