//! Raise primitives: the only producers of [`Failure`] payloads.
//!
//! [`must`] converts an `Err` into an in-flight failure, [`fail`] raises
//! unconditionally, and [`pass`] guards generic `catch_unwind` sites against
//! accidentally swallowing a structured failure.
//!
//! Raising uses [`std::panic::resume_unwind`] rather than `panic_any`, so the
//! global panic hook does not fire for failures that a boundary later
//! recovers. A failure that never meets a boundary still terminates the
//! thread, which is intentional: a missing boundary should be loud.

use std::any::Any;
use std::panic;

use crate::traits::IntoCause;
use crate::types::{Cause, Failure};

/// Begins unwinding with a fresh [`Failure`] wrapping `cause`.
#[cold]
pub(crate) fn raise(cause: Cause) -> ! {
    panic::resume_unwind(Box::new(Failure::new(cause)))
}

/// Returns the success value, or unwinds with a [`Failure`] wrapping the
/// error.
///
/// On `Ok` this is an identity pass-through with no side effect. Multiple
/// success values are expressed as a tuple, so one generic covers every
/// arity; callers with many values should bundle them into a struct instead.
///
/// Only useful below a recovery boundary ([`catch`](crate::catch) or
/// [`Boundary`](crate::Boundary)); without one the raise terminates the
/// thread.
///
/// # Examples
///
/// ```
/// use ripcord::{catch, must, Caught};
///
/// fn total_weight(weight: &str, qty: &str) -> Caught<f64> {
///     catch(|| must(weight.parse::<f64>()) * must(qty.parse::<u64>()) as f64)
/// }
///
/// assert_eq!(total_weight("2.5", "4").unwrap(), 10.0);
/// assert!(total_weight("2.5", "four").is_err());
/// ```
#[inline]
pub fn must<T, C>(res: Result<T, C>) -> T
where
    C: IntoCause,
{
    match res {
        Ok(value) => value,
        Err(cause) => raise(cause.into_cause()),
    }
}

/// Unconditionally unwinds with a [`Failure`] wrapping `cause`.
///
/// Passing `Option::None` is a programming error and raises the
/// [`NilCause`](crate::NilCause) sentinel instead of a `Failure`, so a
/// transform chain expecting a real cause can never absorb it.
///
/// # Examples
///
/// ```
/// use ripcord::{catch, fail};
///
/// let err = catch(|| -> u32 { fail("no result") }).unwrap_err();
/// assert_eq!(err.to_string(), "no result");
/// ```
#[inline]
pub fn fail<C>(cause: C) -> !
where
    C: IntoCause,
{
    raise(cause.into_cause())
}

/// Re-raises `payload` if it is a [`Failure`], otherwise returns it.
///
/// Use this inside a generic recovery site (one built directly on
/// [`std::panic::catch_unwind`], outside this crate's boundaries) so that a
/// structured failure keeps propagating toward its real boundary instead of
/// being misclassified as a plain panic.
///
/// # Examples
///
/// ```
/// use std::panic;
/// use ripcord::pass;
///
/// let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
/// // Not a Failure: handed back for ordinary handling.
/// let payload = pass(payload);
/// assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
/// ```
#[inline]
pub fn pass(payload: Box<dyn Any + Send>) -> Box<dyn Any + Send> {
    if payload.is::<Failure>() {
        panic::resume_unwind(payload);
    }
    payload
}
