//! Stack growth for the recursive parts of the pipeline.
//!
//! Parsing and evaluation both recurse once per level of the syntax tree.
//! Long left-associative chains such as `1 + 1 + ... + 1` produce trees far
//! deeper than the parser's nesting limit, so the recursive entry points grow
//! the stack on demand instead of relying on the thread's initial stack.

/// Minimum stack space to keep available before recursing.
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated each time the red zone is reached.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a freshly allocated stack segment when less than
/// the red zone remains on the current one.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recursion_deeper_than_the_thread_stack() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
        }

        assert_eq!(depth(200_000), 200_000);
    }
}
