//! Recovery boundaries: the only consumers of [`Failure`] payloads.
//!
//! A boundary runs a closure under [`std::panic::catch_unwind`] and converts
//! an in-flight [`Failure`] back into the conventional `Result` model. Every
//! public operation that raises internally should sit behind exactly one
//! boundary. Anything else unwinding through it (a genuine programming-error
//! panic, a third-party panic) is re-raised untouched.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use smallvec::SmallVec;

use crate::raise::raise;
use crate::types::{Cause, Caught, Failure, Traced};

/// A single recovery step: rewrites a cause, or suppresses the failure
/// entirely by returning `None`.
pub type Transform<'t> = Box<dyn FnOnce(Cause) -> Option<Cause> + 't>;

/// Inline storage for the transform chain; boundaries rarely carry more than
/// two steps.
type TransformVec<'t> = SmallVec<[Transform<'t>; 2]>;

/// A recovery boundary with an ordered chain of transform steps and an
/// optional stack capture.
///
/// Built up in the chained style of the rest of the crate and consumed by
/// [`catch`](Boundary::catch) or [`guard`](Boundary::guard), which arm the
/// boundary for exactly one evaluation at scope exit.
///
/// # Examples
///
/// ```
/// use ripcord::{fail, Boundary, IntoCause, Message};
///
/// let err = Boundary::new()
///     .transform(|cause| Some(Message::new(format!("loading config: {cause}")).into_cause()))
///     .catch(|| -> () { fail("disk offline") })
///     .unwrap_err();
///
/// assert_eq!(err.to_string(), "loading config: disk offline");
/// ```
#[must_use]
#[derive(Default)]
pub struct Boundary<'t> {
    transforms: TransformVec<'t>,
    trace_skip: Option<usize>,
}

impl<'t> Boundary<'t> {
    /// Creates a boundary with no transforms and no stack capture.
    #[inline]
    pub fn new() -> Self {
        Self { transforms: TransformVec::new(), trace_skip: None }
    }

    /// Appends a transform step.
    ///
    /// Steps run in the order they were added, each receiving the previous
    /// step's output. A step returning `None` suppresses the failure: no
    /// error is deposited and the remaining steps never run.
    #[inline]
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Cause) -> Option<Cause> + 't,
    {
        self.transforms.push(Box::new(f));
        self
    }

    /// Attaches a stack capture to any deposited cause.
    ///
    /// When the boundary deposits a cause into the `Err` arm it is wrapped in
    /// a [`Traced`] decorator recording the call frames at interception time.
    /// `skip` drops that many additional frames beyond the boundary's own
    /// internals; the first retained frame is then the boundary's caller.
    #[inline]
    pub fn traced(mut self, skip: usize) -> Self {
        self.trace_skip = Some(skip);
        self
    }

    /// Runs `work` under this boundary and returns its result plus an error
    /// slot.
    ///
    /// - `work` returns normally: `Ok` with its value; no transform runs.
    /// - `work` raises a [`Failure`]: the cause is run through the transform
    ///   chain and deposited as `Err` (wrapped in [`Traced`] if
    ///   [`traced`](Boundary::traced) was configured).
    /// - a transform suppresses the failure: `Ok(T::default())`. A suppressed
    ///   call is therefore indistinguishable from a successful call that
    ///   computed the default value; if that matters, have the transform
    ///   record what it suppressed instead of discarding it.
    /// - anything else unwinds through `work`: re-raised unchanged.
    ///
    /// The `T: Default` bound exists only for the suppressed path, which has
    /// no value left to return.
    pub fn catch<T, F>(self, work: F) -> Caught<T>
    where
        T: Default,
        F: FnOnce() -> T,
    {
        let Self { transforms, trace_skip } = self;
        match panic::catch_unwind(AssertUnwindSafe(work)) {
            Ok(value) => Ok(value),
            Err(payload) => match intercept(transforms, payload) {
                Some(cause) => Err(match trace_skip {
                    Some(skip) => Box::new(Traced::capture(cause, skip)),
                    None => cause,
                }),
                None => Ok(T::default()),
            },
        }
    }

    /// Runs `work` under this boundary with no output slot.
    ///
    /// Transforms still run, but a surviving cause is re-raised as a fresh
    /// [`Failure`]: there is nowhere to deposit it, so propagation continues
    /// one level further up. A suppressed failure resumes normal flow with
    /// `T::default()`. Use this to annotate or filter failures mid-stack
    /// without converting them to a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripcord::{must, Boundary};
    ///
    /// // Swallow the parse failure and fall back to the default.
    /// let port: u16 = Boundary::new()
    ///     .transform(|_| None)
    ///     .guard(|| must("not-a-port".parse::<u16>()));
    /// assert_eq!(port, 0);
    /// ```
    pub fn guard<T, F>(self, work: F) -> T
    where
        T: Default,
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(work)) {
            Ok(value) => value,
            Err(payload) => match intercept(self.transforms, payload) {
                Some(cause) => raise(cause),
                None => T::default(),
            },
        }
    }
}

/// Runs `work` under a fresh, transform-free boundary.
///
/// The expression form of a boundary: usable anywhere a value is expected,
/// not just at a function's return. Since there are no transforms, no
/// suppression can occur and `T` needs no `Default`.
///
/// # Examples
///
/// ```
/// use ripcord::{catch, must};
///
/// let pair = catch(|| (must("42".parse::<i32>()), must("56".parse::<i32>())));
/// assert_eq!(pair.unwrap(), (42, 56));
///
/// let pair = catch(|| (must("42".parse::<i32>()), must("fifty-six".parse::<i32>())));
/// assert!(pair.is_err());
/// ```
pub fn catch<T, F>(work: F) -> Caught<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Failure>() {
            Ok(failure) => Err(failure.into_cause()),
            Err(foreign) => foreign_unwind(foreign),
        },
    }
}

/// Applies the boundary protocol to a raw unwind payload.
///
/// Returns the transformed cause, `None` if a transform suppressed the
/// failure, and never returns at all for a foreign payload.
fn intercept(transforms: TransformVec<'_>, payload: Box<dyn Any + Send>) -> Option<Cause> {
    let failure = match payload.downcast::<Failure>() {
        Ok(failure) => failure,
        Err(foreign) => foreign_unwind(foreign),
    };
    let mut cause = failure.into_cause();
    for transform in transforms {
        match transform(cause) {
            Some(next) => cause = next,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "ripcord", "failure suppressed by boundary transform");
                return None;
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "ripcord", cause = %cause, "failure intercepted at boundary");
    Some(cause)
}

#[cold]
fn foreign_unwind(payload: Box<dyn Any + Send>) -> ! {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "ripcord", "foreign unwind passing through boundary");
    panic::resume_unwind(payload)
}
