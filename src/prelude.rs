//! Convenience re-exports for the common usage pattern.
//!
//! Import everything with:
//!
//! ```
//! use ripcord::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use ripcord::prelude::*;
//!
//! fn parse_pair(a: &str, b: &str) -> Caught<(i32, i32)> {
//!     catch(|| (must(a.parse::<i32>()), must(b.parse::<i32>())))
//! }
//!
//! assert_eq!(parse_pair("4", "2").unwrap(), (4, 2));
//! assert!(parse_pair("4", "two").is_err());
//! ```

// Macros
pub use crate::failf;

// Raise primitives and the boundary surface
pub use crate::raise::{fail, must, pass};
pub use crate::types::{catch, Boundary, Caught, Cause, Message};

// Traits
pub use crate::traits::{IntoCause, ResultExt};
