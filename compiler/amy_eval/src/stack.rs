//! Stack growth for deeply recursive evaluation.
//!
//! Amy programs recurse freely, and every recursive call goes through
//! several host frames. The call depth limit in the interpreter bounds how
//! deep a program may go; this module makes sure the host stack can keep
//! up with that limit instead of overflowing first.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Headroom checked before each `eval` step and each nested constructor
    /// argument. It must cover the host frames between two checks, which for a
    /// user call is the `eval_call_expr` to `call_function` chain.
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each fresh segment; a few hundred nested Amy calls fit in one.
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
