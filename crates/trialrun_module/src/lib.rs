//! Provide the module under test for the `trialrun` suites.
//!
//! This crate is a stand-in collaborator: the suites call into it and compare results with exact equality.
//!
//! ## Notes
//!
//! - **No IO**, no global state.
//! - Arithmetic follows two's-complement wrapping; overflow is not checked or reported.

/// Add two integers.
///
/// ## Parameters
/// - `a`: left operand
/// - `b`: right operand
///
/// ## Returns
/// - (`i32`): `a + b`, wrapping on overflow.
///
/// ## Examples
/// ```rust
/// use trialrun_module::add;
/// assert_eq!(add(1, 2), 3);
/// assert_eq!(add(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
