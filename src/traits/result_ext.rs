//! Extension trait putting the raise primitives in method position.
//!
//! `result.or_raise()` reads better than `must(result)` at the end of a call
//! chain; both do exactly the same thing.

use crate::raise::must;
use crate::traits::IntoCause;

/// Method-position raise primitives for `Result`.
///
/// # Examples
///
/// ```
/// use ripcord::traits::ResultExt;
/// use ripcord::{catch, Caught};
///
/// fn read_port(raw: &str) -> Caught<u16> {
///     catch(|| raw.trim().parse::<u16>().or_raise())
/// }
///
/// assert_eq!(read_port(" 8080 ").unwrap(), 8080);
/// ```
pub trait ResultExt<T, E> {
    /// Returns the success value, or raises the error as a failure.
    ///
    /// Method form of [`must`](crate::must).
    fn or_raise(self) -> T
    where
        E: IntoCause;

    /// Returns the success value, or maps the error and raises the result.
    ///
    /// The closure only runs on the failure path.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripcord::traits::ResultExt;
    /// use ripcord::{catch, Message};
    ///
    /// let err = catch(|| {
    ///     "x".parse::<u16>()
    ///         .or_raise_with(|e| Message::new(format!("bad port: {e}")))
    /// })
    /// .unwrap_err();
    ///
    /// assert!(err.to_string().starts_with("bad port:"));
    /// ```
    fn or_raise_with<C, F>(self, f: F) -> T
    where
        C: IntoCause,
        F: FnOnce(E) -> C;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn or_raise(self) -> T
    where
        E: IntoCause,
    {
        must(self)
    }

    #[inline]
    fn or_raise_with<C, F>(self, f: F) -> T
    where
        C: IntoCause,
        F: FnOnce(E) -> C,
    {
        must(self.map_err(f))
    }
}
