//! Opt-in, exception-style error propagation built on Rust's native
//! unwinding.
//!
//! Inside a module, call sites signal failure by unwinding the stack with a
//! typed payload ([`must`], [`fail`], [`failf!`]). At the module's public
//! surface, a single recovery boundary ([`catch`], [`Boundary`]) intercepts
//! that payload and converts it back into an ordinary `Result`. Interior
//! code skips the `?`-plumbing through every intermediate signature, and only
//! code that actually crosses a boundary pays any unwinding cost.
//!
//! Everything *not* raised through this crate (a slice-index panic, an
//! `unwrap` in a dependency) passes through every boundary untouched. That
//! selectivity is the core correctness property: a boundary is not a
//! catch-all.
//!
//! # Examples
//!
//! ## Raise inside, recover at the surface
//!
//! ```
//! use ripcord::{catch, must, Caught};
//!
//! // Interior helper: raises instead of returning Result.
//! fn parse_price(raw: &str) -> f64 {
//!     must(raw.trim().parse::<f64>())
//! }
//!
//! // Public surface: one boundary converts back to Result.
//! pub fn order_total(unit_price: &str, qty: &str) -> Caught<f64> {
//!     catch(|| parse_price(unit_price) * must(qty.parse::<u32>()) as f64)
//! }
//!
//! assert_eq!(order_total("1.25", "4").unwrap(), 5.0);
//! assert!(order_total("1.25", "four").is_err());
//! ```
//!
//! ## Transform chains and suppression
//!
//! ```
//! use ripcord::{failf, Boundary, IntoCause, Message};
//!
//! let err = Boundary::new()
//!     .transform(|cause| Some(Message::new(format!("computing weight: {cause}")).into_cause()))
//!     .catch(|| -> f64 { failf!("empty input") })
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "computing weight: empty input");
//!
//! // A transform returning None suppresses the failure; the catch resolves
//! // to the default value.
//! let weight = Boundary::new()
//!     .transform(|_| None)
//!     .catch(|| -> f64 { failf!("empty input") });
//! assert_eq!(weight.unwrap(), 0.0);
//! ```
//!
//! ## Stack traces at the boundary
//!
//! ```
//! use ripcord::{failf, Boundary, Traced};
//!
//! let err = Boundary::new().traced(0).catch(|| -> () { failf!("boom") }).unwrap_err();
//! let traced = err.downcast_ref::<Traced>().unwrap();
//! assert_eq!(traced.to_string(), "boom");
//! ```
//!
//! # Performance
//!
//! The success path through a boundary costs a few nanoseconds; the failure
//! path costs on the order of a full unwind, hundreds of times a plain
//! `Err` return. Keep boundaries off hot error paths; for code where errors
//! are common, conventional `Result` propagation is the right tool. See the
//! `benchmark` bench for the comparison.
//!
//! # Constraints
//!
//! - Requires `panic = "unwind"`; with `panic = "abort"` a raise terminates
//!   the process.
//! - Strictly synchronous and per-call-stack. Never hold a pending raise
//!   across an `await` or any other suspension point.
//! - A failure that never meets a boundary terminates the thread. This is
//!   deliberate: missing boundaries should surface during development, not
//!   silently drop errors.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` on captured [`Frame`] records
//! - `tracing`: boundary interception/suppression events
//! - `full`: both of the above

/// Format-and-raise macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Raise primitives: producers of failure payloads
pub mod raise;
/// Conversion and extension traits
pub mod traits;
/// Payload, boundary, and trace types
pub mod types;

pub use raise::{fail, must, pass};
pub use traits::{IntoCause, ResultExt};
pub use types::{catch, Boundary, Caught, Cause, Failure, Frame, Message, NilCause, Traced, Transform};
