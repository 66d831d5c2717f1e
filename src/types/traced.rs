//! Stack-capturing decorator attached by traced boundaries.
//!
//! A [`Boundary`](crate::Boundary) configured with
//! [`traced`](crate::Boundary::traced) wraps any cause it deposits in
//! [`Traced`], which records the call stack at interception time while
//! preserving chain access to the original cause underneath.

use core::fmt;
use std::backtrace::Backtrace;
use std::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Cause;

/// A cause decorated with the call stack captured when a traced boundary
/// intercepted it.
///
/// `Display` delegates to the cause; alternate formatting (`{:#}`) appends
/// the rendered backtrace. [`Error::source`] is the original cause, so
/// `downcast_ref` and `source()`-chain walking see through the decoration.
///
/// Capture always happens (it does not consult `RUST_BACKTRACE`), because a
/// traced boundary is an explicit opt-in.
///
/// # Examples
///
/// ```
/// use ripcord::{failf, Boundary, Traced};
///
/// let err = Boundary::new().traced(0).catch(|| -> () { failf!("boom") }).unwrap_err();
/// let traced = err.downcast_ref::<Traced>().unwrap();
///
/// assert_eq!(traced.to_string(), "boom");
/// assert!(!traced.backtrace().to_string().is_empty());
/// ```
#[derive(Debug)]
pub struct Traced {
    cause: Cause,
    backtrace: Backtrace,
    skip: usize,
}

/// One resolved call frame of a [`Traced`] capture.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled symbol name.
    pub symbol: String,
    /// Source file, when debug info resolves it.
    pub file: Option<String>,
    /// Line within `file`.
    pub line: Option<u32>,
}

impl Traced {
    /// Captures the current stack around `cause`, dropping `skip` caller
    /// frames beyond this crate's own interception machinery.
    pub(crate) fn capture(cause: Cause, skip: usize) -> Self {
        Self { cause, backtrace: Backtrace::force_capture(), skip }
    }

    /// Returns the original, undecorated cause.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + 'static) {
        self.cause.as_ref()
    }

    /// Consumes the decorator, returning the original cause.
    #[inline]
    pub fn into_cause(self) -> Cause {
        self.cause
    }

    /// Returns the raw captured backtrace.
    #[inline]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Returns the retained frames: interception internals trimmed, then the
    /// configured skip applied.
    ///
    /// Frames are parsed out of the rendered backtrace; entries whose symbols
    /// did not resolve are kept verbatim. The trim is by symbol prefix rather
    /// than a fixed frame count because inlining makes the internal frame
    /// depth unstable.
    pub fn frames(&self) -> Vec<Frame> {
        let rendered = self.backtrace.to_string();
        let mut frames: Vec<Frame> = Vec::new();
        for line in rendered.lines() {
            let trimmed = line.trim_start();
            if let Some(location) = trimmed.strip_prefix("at ") {
                if let Some(frame) = frames.last_mut() {
                    if frame.file.is_none() {
                        let (file, line_no) = split_location(location);
                        frame.file = file;
                        frame.line = line_no;
                    }
                }
                continue;
            }
            // Frame lines render as "  12: symbol".
            if let Some((index, symbol)) = trimmed.split_once(": ") {
                if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                    frames.push(Frame { symbol: symbol.to_string(), file: None, line: None });
                }
            }
        }
        let start = frames.iter().position(|frame| !is_internal(&frame.symbol));
        match start {
            Some(start) => frames.into_iter().skip(start + self.skip).collect(),
            None => Vec::new(),
        }
    }
}

/// Splits a rendered `file:line:column` location, tolerating colons in the
/// path itself (Windows drive letters).
fn split_location(location: &str) -> (Option<String>, Option<u32>) {
    let mut parts = location.rsplitn(3, ':');
    let _column = parts.next();
    let line = parts.next().and_then(|l| l.parse().ok());
    let file = parts.next().map(str::to_string);
    (file, line)
}

/// Whether a symbol belongs to the capture/interception machinery rather
/// than caller code.
fn is_internal(symbol: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "std::",
        "core::",
        "alloc::",
        "backtrace",
        "ripcord::",
        "__rust",
        "rust_begin",
    ];
    let symbol = symbol.trim_start_matches('<');
    PREFIXES.iter().any(|prefix| symbol.starts_with(prefix))
}

impl fmt::Display for Traced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)?;
        if f.alternate() {
            write!(f, "\n\nstack backtrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

impl Error for Traced {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}
