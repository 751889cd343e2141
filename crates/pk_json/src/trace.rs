//! Property path of the traversal in progress.
//!
//! Only compiled with the `debug` feature in debug builds. Entry points log
//! the path at which a keeper failed, for example `owner.pets[2].name`.

use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// One step from an object into one of its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Property(&'static str),
    Index(usize),
}

/// Helper struct for managing a stack of [`Segment`]s.
#[derive(Default, Clone)]
pub(crate) struct PathStack {
    stack: Vec<Segment>,
}

impl PathStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, segment: Segment) {
        self.stack.push(segment);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl fmt::Display for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stack.is_empty() {
            return f.write_str("<root>");
        }

        for (i, segment) in self.stack.iter().enumerate() {
            match segment {
                Segment::Property(name) if i == 0 => f.write_str(name)?,
                Segment::Property(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

impl fmt::Debug for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{self}`")
    }
}

/// The path of the traversal in progress, and where it failed.
struct PathTrace {
    current: PathStack,
    failed: Option<PathStack>,
}

impl PathTrace {
    const fn new() -> Self {
        Self {
            current: PathStack::new(),
            failed: None,
        }
    }

    fn enter(&mut self, segment: Segment) {
        // A new top-level traversal forgets the failure of the previous one.
        if self.current.stack.is_empty() {
            self.failed = None;
        }
        self.current.push(segment);
    }

    fn leave(&mut self, failed: bool) {
        // Only the innermost failing scope records the path.
        if failed && self.failed.is_none() {
            self.failed = Some(self.current.clone());
        }
        self.current.pop();
    }

    fn clear(&mut self) {
        self.current.clear();
        self.failed = None;
    }
}

std::thread_local! {
    static PATH_TRACE: RefCell<PathTrace> = const { RefCell::new(PathTrace::new()) };
}

/// Runs `f` with `segment` pushed onto the path.
///
/// The segment is always popped again. When `f` fails, the path at the
/// failure is kept until the next traversal starts, so that the entry point
/// can report where it happened.
pub(crate) fn scoped<T, E>(segment: Segment, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    PATH_TRACE.with_borrow_mut(|trace| trace.enter(segment));
    let result = f();
    PATH_TRACE.with_borrow_mut(|trace| trace.leave(result.is_err()));
    result
}

/// Clears the path before a new traversal.
pub(crate) fn reset() {
    PATH_TRACE.with_borrow_mut(PathTrace::clear);
}

/// Logs `err` together with the path where it happened, then clears it.
pub(crate) fn report(err: &crate::KeeperError) {
    PATH_TRACE.with_borrow_mut(|trace| {
        let path = trace.failed.take().unwrap_or_default();
        log::debug!("keeper failed at {path}: {err}");
        trace.clear();
    });
}
