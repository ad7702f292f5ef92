//! Call tracking for runtime diagnostics.
//!
//! `CallStack` records one frame per active user-function call. It enforces
//! the call depth limit on `push()` and snapshots itself into an
//! [`EvalBacktrace`] when an error leaves a call.

use amy_ir::{QualifiedName, StringInterner};

use crate::errors::{stack_exhausted, BacktraceFrame, EvalBacktrace, EvalError};

/// Frames kept in a captured backtrace; deeper frames are counted, not listed.
pub const MAX_BACKTRACE_FRAMES: usize = 32;

/// A single frame in the live call stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// The function being executed.
    pub function: QualifiedName,
}

/// Live call stack for the interpreter.
///
/// Each user-function call pushes a frame and pops it on return, whether
/// the body succeeded or failed.
///
/// ```text
/// let mut stack = CallStack::new(Some(10_000));
/// stack.push(CallFrame { function })?;
/// // ... evaluate function body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// Create an empty call stack; `None` means unbounded.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed when the limit is reached.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_exhausted(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Snapshot the stack, most recent call first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .take(MAX_BACKTRACE_FRAMES)
            .map(|f| BacktraceFrame {
                name: f.function.display(interner),
            })
            .collect();
        let elided = self.frames.len().saturating_sub(MAX_BACKTRACE_FRAMES);
        EvalBacktrace::new(frames, elided)
    }

    /// Attach a backtrace to `err` unless it already carries one.
    ///
    /// The innermost call that sees the error captures the whole stack, so
    /// outer frames leave the existing backtrace alone.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
