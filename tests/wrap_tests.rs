//! Wrapping behaviour: rendering, stack reuse, nil propagation and root
//! cause recovery.

mod common;

use std::io;

use common::{init_tracing, MyErr};
use kverrors::{
    cause, key_vals, new, unwrap_all, wrap, wrapf, BoxError, Error, StackTracer, Value, WrapExt,
};

fn pairs(items: &[(&str, Value)]) -> Vec<(String, Value)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_wrap_table() {
    init_tracing();

    struct Example {
        desc: &'static str,
        err: BoxError,
        msg: &'static str,
        kv: Vec<Value>,
        expected_error: &'static str,
        expected_kv: Vec<(String, Value)>,
    }

    let examples = vec![
        Example {
            desc: "wrap a crate error",
            err: Box::new(new!("some msg", "firstKey", "first value")),
            msg: "other msg",
            kv: kverrors::keyvals!["second key", "second value"],
            expected_error: "other msg: some msg",
            expected_kv: pairs(&[
                ("second key", "second value".into()),
                ("firstKey", "first value".into()),
            ]),
        },
        Example {
            desc: "wrap a foreign error",
            err: Box::new(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF")),
            msg: "other msg",
            kv: kverrors::keyvals!["second key", "second value"],
            expected_error: "other msg: EOF",
            expected_kv: pairs(&[("second key", "second value".into())]),
        },
        Example {
            desc: "wrap a wrapped foreign error",
            err: Box::new(Error::wrap(
                io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"),
                "other msg",
                kverrors::keyvals!["other key", "other value"],
            )),
            msg: "another msg",
            kv: kverrors::keyvals!["second key", "second value"],
            expected_error: "another msg: other msg: EOF",
            expected_kv: pairs(&[
                ("second key", "second value".into()),
                ("other key", "other value".into()),
            ]),
        },
    ];

    for example in examples {
        let err = Error::wrap(example.err, example.msg, example.kv);
        assert_eq!(err.to_string(), example.expected_error, "{}", example.desc);
        assert_eq!(key_vals(&err), example.expected_kv, "{}", example.desc);
    }
}

#[test]
fn test_wrap_custom_type() {
    init_tracing();

    let my_err = MyErr::new("something failed");
    let err = Error::wrap(my_err.clone(), "wraper", kverrors::keyvals!["firstKey", "first value"]);
    let origin = err.stack_trace().clone();

    let err2 = kverrors::wrap!(err, "wraper2", "second key", "second value");
    let err3 = kverrors::wrap!(err2, "wraper3", "third key", 343);

    assert_eq!(
        err3.to_string(),
        "wraper3: wraper2: wraper: something failed"
    );
    assert_eq!(
        key_vals(&err3),
        pairs(&[
            ("third key", 343.into()),
            ("second key", "second value".into()),
            ("firstKey", "first value".into()),
        ])
    );

    assert_eq!(cause(&err3).downcast_ref::<MyErr>(), Some(&my_err));
    assert_eq!(StackTracer::stack_trace(&err3), &origin);
}

#[test]
fn test_nested_wraps_render_outermost_first() {
    let mut err = new!("0");
    for depth in 1..=5 {
        err = kverrors::wrapf!(err, "{}", depth);
    }

    assert_eq!(err.to_string(), "5: 4: 3: 2: 1: 0");
}

#[test]
fn test_stack_is_captured_once() {
    let e1 = new!("a");
    let origin = e1.stack_trace().clone();
    let e2 = kverrors::wrap!(e1, "b");
    let e3 = kverrors::wrap!(e2, "c");

    assert_eq!(e3.stack_trace(), &origin);
}

#[test]
fn test_stack_points_at_origin_call_site() {
    fn origin() -> Result<(), Error> {
        Err(new!("origin"))
    }

    fn middle() -> Result<(), Error> {
        origin().wrap("middle", [])
    }

    let err = middle().wrap("top", []).unwrap_err();
    let location = err.stack_trace().location();

    assert_eq!(location.file(), file!());
    assert_eq!(location.line(), line!() - 11);
}

#[test]
fn test_nil_propagation() {
    assert!(wrap(None::<Error>, "m", kverrors::keyvals!["k", "v"]).is_none());
    assert!(wrapf(None::<io::Error>, format_args!("m")).is_none());

    let ok: Result<&str, Error> = Ok("fine");
    assert_eq!(ok.wrap("m", []).ok(), Some("fine"));
}

#[test]
fn test_unwrap_all_is_a_fixed_point() {
    let err = kverrors::wrap!(kverrors::wrap!(MyErr::new("root"), "a"), "b");

    let root = unwrap_all(&err);
    let again = unwrap_all(root);

    assert!(std::ptr::eq(
        root as *const dyn std::error::Error as *const (),
        again as *const dyn std::error::Error as *const ()
    ));
    assert_eq!(root.downcast_ref::<MyErr>(), Some(&MyErr::new("root")));
}

#[test]
fn test_unwrap_all_of_leaf_returns_it() {
    let leaf = new!("leaf", "k", "v");
    let root = unwrap_all(&leaf);

    assert_eq!(
        root.downcast_ref::<Error>().map(Error::message),
        Some("leaf")
    );
}

#[test]
fn test_into_source_recovers_owned_root() {
    let err = Error::wrap(MyErr::new("owned"), "ctx", []);
    let source = err.into_source().expect("wrapping node has a source");

    let recovered = source.downcast::<MyErr>().expect("source is MyErr");
    assert_eq!(*recovered, MyErr::new("owned"));
}
