use super::*;
use std::cell::RefCell;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(call: &'static str) {
    CALLS.with(|c| c.borrow_mut().push(call));
}

fn calls() -> Vec<&'static str> {
    CALLS.with(|c| c.borrow().clone())
}

fn reset() {
    CALLS.with(|c| c.borrow_mut().clear());
}

fn ok_enter() -> io::Result<()> {
    record("enter");
    Ok(())
}

fn ok_leave() -> io::Result<()> {
    record("leave");
    Ok(())
}

fn failing_enter() -> io::Result<()> {
    record("enter");
    Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
}

fn failing_leave() -> io::Result<()> {
    record("leave");
    Err(io::Error::new(io::ErrorKind::Other, "tty gone"))
}

#[test]
fn session_restores_on_drop() {
    reset();
    {
        let _session = TerminalSession::with_hooks(ok_enter, ok_leave).unwrap();
    }
    assert_eq!(calls(), ["enter", "leave"]);
}

#[test]
fn explicit_restore_happens_once() {
    reset();
    let mut session = TerminalSession::with_hooks(ok_enter, ok_leave).unwrap();
    session.restore().unwrap();
    session.restore().unwrap();
    drop(session);

    assert_eq!(calls(), ["enter", "leave"]);
}

#[test]
fn failed_enter_undoes_partial_setup() {
    reset();
    let result = TerminalSession::with_hooks(failing_enter, ok_leave);
    assert!(result.is_err());
    assert_eq!(calls(), ["enter", "leave"]);
}

#[test]
fn failed_restore_is_not_retried() {
    reset();
    let mut session = TerminalSession::with_hooks(ok_enter, failing_leave).unwrap();

    assert!(session.restore().is_err());
    assert!(session.restore().is_ok());
    drop(session);
    assert_eq!(calls(), ["enter", "leave"]);
}

#[test]
fn latch_reports_each_signal_once() {
    let latch = SignalLatch::default();
    assert_eq!(latch.take(), None);

    latch.pending.store(SIGTERM_RECEIVED, Ordering::SeqCst);
    assert_eq!(latch.take(), Some(TerminationSignal::SigTerm));
    assert_eq!(latch.take(), None);

    latch.pending.store(SIGINT_RECEIVED, Ordering::SeqCst);
    assert_eq!(latch.clone().take(), Some(TerminationSignal::SigInt));
}

#[test]
fn termination_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
