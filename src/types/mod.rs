//! Payload, boundary, and trace types.
//!
//! # Examples
//!
//! ```
//! use ripcord::{must, Boundary, Caught};
//!
//! fn read_port(raw: &str) -> Caught<u16> {
//!     Boundary::new().catch(|| must(raw.parse::<u16>()))
//! }
//!
//! assert_eq!(read_port("8080").unwrap(), 8080);
//! assert!(read_port("eighty-eighty").is_err());
//! ```

pub mod boundary;
pub mod failure;
pub mod traced;

pub use boundary::{catch, Boundary, Transform};
pub use failure::{Cause, Failure, Message, NilCause};
pub use traced::{Frame, Traced};

/// Result alias returned by recovery boundaries: the work's value plus an
/// error slot holding the intercepted cause.
pub type Caught<T> = Result<T, Cause>;
