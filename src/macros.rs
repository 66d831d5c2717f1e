//! Macro shorthand for raising formatted causes.

/// Formats a [`Message`](crate::Message) cause and unconditionally raises it.
///
/// Shorthand for `fail(Message::new(format!(...)))`; the cause is freshly
/// constructed, so the nil-cause guard never applies here.
///
/// # Examples
///
/// ```
/// use ripcord::{catch, failf};
///
/// let err = catch(|| -> u32 { failf!("no result for {:?}", "sym") }).unwrap_err();
/// assert_eq!(err.to_string(), "no result for \"sym\"");
/// ```
#[macro_export]
macro_rules! failf {
    ($($arg:tt)*) => {
        $crate::fail($crate::Message::new(format!($($arg)*)))
    };
}
