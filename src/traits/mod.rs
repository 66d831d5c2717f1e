//! Conversion and extension traits.
//!
//! - [`IntoCause`]: flexible conversion of errors, messages, and optional
//!   causes into the opaque [`Cause`](crate::Cause) a failure carries
//! - [`ResultExt`]: the raise primitives in method position

pub mod into_cause;
pub mod result_ext;

pub use into_cause::IntoCause;
pub use result_ext::ResultExt;
