use super::*;
use crate::worklist::{Opcode, TipMask};
use std::thread;

fn commands() -> Vec<WorklistCommand> {
    vec![
        WorklistCommand::comment("start"),
        WorklistCommand::liquid(Opcode::Aspirate, "Plate", 1, 100.0, "Water", TipMask::channel(0)),
        WorklistCommand::liquid(Opcode::Dispense, "Plate", 9, 50.0, "Water", TipMask::channel(0)),
        WorklistCommand::liquid(Opcode::Dispense, "Plate", 17, 50.0, "Water", TipMask::channel(0)),
        WorklistCommand::wash(TipMask::channel(0)),
    ]
}

/// Fails the `fail_at`-th submission (zero-based)
struct FailingExecutor {
    fail_at: usize,
    seen: Vec<WorklistCommand>,
}

impl Executor for FailingExecutor {
    fn execute(&mut self, command: &WorklistCommand) -> Result<Ack, ExecutionFailure> {
        if self.seen.len() == self.fail_at {
            return Err(ExecutionFailure::new("liquid level not detected"));
        }
        self.seen.push(command.clone());
        Ok(Ack::default())
    }
}

/// Requests cancellation after `after` submissions
struct CancellingExecutor {
    after: usize,
    handle: CancelHandle,
    count: usize,
}

impl Executor for CancellingExecutor {
    fn execute(&mut self, _command: &WorklistCommand) -> Result<Ack, ExecutionFailure> {
        self.count += 1;
        if self.count == self.after {
            self.handle.cancel();
        }
        Ok(Ack::default())
    }
}

#[test]
fn test_runs_in_order_and_skips_comments() {
    let commands = commands();
    let mut executor = SimulatedExecutor::new();

    let report = run(&mut executor, &commands, &Cancellation::never()).unwrap();

    assert_eq!(report, ExecutionReport { executed: 4, skipped: 1 });
    assert_eq!(executor.executed(), &commands[1..]);
}

#[test]
fn test_failure_halts_without_retry() {
    let commands = commands();
    let mut executor = FailingExecutor {
        fail_at: 1,
        seen: Vec::new(),
    };

    let err = run(&mut executor, &commands, &Cancellation::never()).unwrap_err();

    match &err {
        ExecutionError::Failed {
            index,
            command,
            source,
        } => {
            assert_eq!(*index, 2);
            assert_eq!(**command, commands[2]);
            assert_eq!(source.message, "liquid level not detected");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.index(), 2);
    assert_eq!(executor.seen, vec![commands[1].clone()]);
}

#[test]
fn test_cancelled_before_start() {
    let (handle, cancellation) = Cancellation::new();
    handle.cancel();
    handle.cancel();

    let mut executor = SimulatedExecutor::new();
    let err = run(&mut executor, &commands(), &cancellation).unwrap_err();

    assert_eq!(err, ExecutionError::Cancelled { index: 0 });
    assert!(executor.executed().is_empty());
    assert!(cancellation.is_cancelled());
}

#[test]
fn test_cancelled_mid_run() {
    let (handle, cancellation) = Cancellation::new();
    let mut executor = CancellingExecutor {
        after: 2,
        handle,
        count: 0,
    };

    let err = run(&mut executor, &commands(), &cancellation).unwrap_err();

    // comment at 0, then submissions at 1 and 2; index 3 is never submitted
    assert_eq!(err, ExecutionError::Cancelled { index: 3 });
    assert_eq!(executor.count, 2);
}

#[test]
fn test_cancel_from_another_thread() {
    let (handle, cancellation) = Cancellation::new();
    assert!(!cancellation.is_cancelled());

    thread::spawn(move || handle.cancel()).join().unwrap();

    assert!(cancellation.is_cancelled());
    assert!(!Cancellation::never().is_cancelled());
}

#[test]
fn test_empty_log() {
    let mut executor = SimulatedExecutor::new();
    let report = run(&mut executor, &[], &Cancellation::never()).unwrap();
    assert_eq!(report, ExecutionReport::default());
}
