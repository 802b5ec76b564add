//! `log::Log` that records messages per thread so parallel tests don't see
//! each other's lines.

use log::{LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static LINES: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.with(|lines| lines.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INIT: Once = Once::new();

/// Runs `f` and returns its result with the lines it logged on this thread.
pub fn capture<F, R>(f: F) -> (R, Vec<String>)
where
    F: FnOnce() -> R,
{
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("logger already set");
        log::set_max_level(LevelFilter::Trace);
    });
    LINES.with(|lines| lines.borrow_mut().clear());
    let out = f();
    let lines = LINES.with(|lines| lines.borrow_mut().drain(..).collect());
    (out, lines)
}
