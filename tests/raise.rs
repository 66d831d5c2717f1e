use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use ripcord::{catch, fail, failf, must, pass, Failure, Message, NilCause};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Oops;

impl fmt::Display for Oops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("oops")
    }
}

impl std::error::Error for Oops {}

fn divmod(a: f64, b: f64) -> Result<(f64, f64), Oops> {
    if b == 0.0 {
        return Err(Oops);
    }
    let rem = a % b;
    Ok(((a - rem) / b, rem))
}

#[test]
fn must_returns_success_values_unchanged() {
    catch(|| must(Ok::<_, Oops>(()))).unwrap();
    assert_eq!(catch(|| must("42".parse::<i32>())).unwrap(), 42);

    let (quo, rem) = catch(|| must(divmod(42.0, 56.0))).unwrap();
    assert_eq!((quo, rem), (0.0, 42.0));
}

#[test]
fn must_raises_a_failure_wrapping_the_exact_cause() {
    let payload = panic::catch_unwind(|| -> i32 { must(Err::<i32, _>(Oops)) }).unwrap_err();
    let failure = payload.downcast::<Failure>().unwrap();
    assert!(failure.cause().is::<Oops>());
    assert_eq!(failure.to_string(), "oops");
}

#[test]
fn must_propagates_parse_errors_to_the_boundary() {
    let err = catch(|| must("forty-two".parse::<i32>())).unwrap_err();
    assert!(err.is::<std::num::ParseIntError>());
    assert_eq!(err.to_string(), "invalid digit found in string");
}

#[test]
fn must_propagates_tuple_failures() {
    let err = catch(|| must(divmod(1.0, 0.0))).unwrap_err();
    assert!(err.is::<Oops>());
}

#[test]
fn fail_with_cause_raises_a_failure() {
    let err = catch(|| -> () { fail(Oops) }).unwrap_err();
    assert!(err.is::<Oops>());
}

#[test]
fn fail_with_present_option_unwraps_it() {
    let err = catch(|| -> () { fail(Some(Oops)) }).unwrap_err();
    assert!(err.is::<Oops>());
}

#[test]
fn fail_with_absent_cause_raises_the_sentinel() {
    let payload = panic::catch_unwind(|| -> () { fail(None::<Oops>) }).unwrap_err();
    let sentinel = payload.downcast::<NilCause>().unwrap();
    assert_eq!(*sentinel, NilCause);
}

#[test]
fn sentinel_is_not_intercepted_by_a_boundary() {
    let payload = panic::catch_unwind(|| catch(|| -> () { fail(None::<Oops>) })).unwrap_err();
    assert!(payload.is::<NilCause>());
}

#[test]
fn failf_formats_a_fresh_cause() {
    let err = catch(|| -> u32 { failf!("> 1 result: {:?}", "ACME") }).unwrap_err();
    assert!(err.is::<Message>());
    assert_eq!(err.to_string(), "> 1 result: \"ACME\"");
}

#[test]
fn pass_reraises_failure_payloads() {
    let outcome = panic::catch_unwind(|| {
        let payload = panic::catch_unwind(|| -> () { fail(Oops) }).unwrap_err();
        pass(payload);
        unreachable!("pass must re-raise a failure payload");
    });
    assert!(outcome.unwrap_err().is::<Failure>());
}

#[test]
fn pass_returns_foreign_payloads_unchanged() {
    let payload =
        panic::catch_unwind(|| -> () { panic::resume_unwind(Box::new(42_i32)) }).unwrap_err();
    let payload = pass(payload);
    assert_eq!(payload.downcast_ref::<i32>(), Some(&42));
}

// The TestPass scenario: a generic logging hook sits between the raise and
// the boundary; pass keeps it from swallowing structured failures.
#[test]
fn pass_lets_a_generic_guard_see_only_foreign_panics() {
    use std::cell::RefCell;

    let log = RefCell::new(Vec::new());

    // Structured failure: pass re-raises before the logging line runs, and
    // the boundary above still converts it.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        catch(|| -> () {
            let payload = panic::catch_unwind(|| -> () { fail(Oops) }).unwrap_err();
            let payload = pass(payload);
            log.borrow_mut().push(format!("error: {payload:?}"));
        })
    }));
    assert!(outcome.unwrap().is_err());
    assert!(log.borrow().is_empty());

    // Foreign panic: pass hands it over for logging, then unwinding resumes
    // and crosses the boundary untouched.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        catch(|| -> () {
            let payload = panic::catch_unwind(|| -> () {
                panic::resume_unwind(Box::new(42_i32))
            })
            .unwrap_err();
            let payload = pass(payload);
            log.borrow_mut().push(format!("error: {}", payload.downcast_ref::<i32>().unwrap()));
            panic::resume_unwind(payload);
        })
    }));
    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<i32>(), Some(&42));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0], "error: 42");
}
