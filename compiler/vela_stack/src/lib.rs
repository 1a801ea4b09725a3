//! Stack growth guard for recursive value and type traversals.
//!
//! Copying, refining, projecting and decoding a `Value` all walk the value
//! tree recursively, and the depth of that tree is chosen by the program
//! being evaluated. A list nested a few hundred thousand levels deep must not
//! abort the host process, so every recursive step goes through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate switches to a freshly allocated
//! segment when the remaining stack drops below [`RED_ZONE`]. On `wasm32`
//! the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
pub const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value.payload() {
///         Payload::List(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// `wasm32` manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
