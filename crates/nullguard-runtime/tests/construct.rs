#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use nullguard_core::policy::{CallTarget, TypeRef};
use nullguard_runtime::{config, Runtime};

fn runtime() -> Runtime {
    let cfg = config::load_from_file("tests/fixtures/annotated.yaml").unwrap();
    Runtime::new(&cfg).unwrap()
}

fn ty(name: &str) -> Option<TypeRef> {
    Some(TypeRef::new(name))
}

#[derive(Debug, PartialEq)]
struct Foo(&'static str);

#[test]
fn selects_by_exact_type() {
    let rt = runtime();
    let foo = TypeRef::new("demo.Foo");
    let ctor = rt.overloads().select(&foo, &[ty("String")]).unwrap();
    assert_eq!(ctor, CallTarget::constructor("demo.Foo", vec![TypeRef::new("String")]));

    let ctor = rt.overloads().select(&foo, &[ty("int"), ty("String")]).unwrap();
    assert_eq!(ctor.params().len(), 2);

    let ctor = rt.overloads().select(&foo, &[]).unwrap();
    assert!(ctor.params().is_empty());
}

#[test]
fn selects_through_declared_supertypes() {
    let rt = runtime();
    let ctor = rt
        .overloads()
        .select(&TypeRef::new("demo.Foo"), &[ty("HashMap")])
        .unwrap();
    assert_eq!(ctor.params(), &[TypeRef::new("Map")]);
}

#[test]
fn absent_argument_takes_first_declared_arity_match() {
    let rt = runtime();
    let ctor = rt.overloads().select(&TypeRef::new("demo.Foo"), &[None]).unwrap();
    assert_eq!(ctor.params(), &[TypeRef::new("String")]);
}

#[test]
fn no_implicit_conversion() {
    let rt = runtime();
    let err = rt
        .overloads()
        .select(&TypeRef::new("demo.Foo"), &[ty("Integer"), ty("String")])
        .expect_err("int does not take Integer");
    assert_eq!(err.code().as_str(), "NO_MATCHING_CONSTRUCTOR");
}

#[test]
fn boxed_argument_needs_a_declared_edge() {
    let cfg = config::load_from_str(
        r#"
version: 1
hierarchy:
  Integer: [int]
types:
  - name: demo.Foo
    constructors:
      - params: [int, String]
"#,
    )
    .unwrap();
    let rt = Runtime::new(&cfg).unwrap();
    let ctor = rt
        .overloads()
        .select(&TypeRef::new("demo.Foo"), &[ty("Integer"), ty("String")])
        .unwrap();
    assert_eq!(ctor.params(), &[TypeRef::new("int"), TypeRef::new("String")]);
}

#[test]
fn unknown_type() {
    let rt = runtime();
    let err = rt.overloads().select(&TypeRef::new("demo.Nope"), &[]).expect_err("unknown");
    assert_eq!(err.code().as_str(), "UNKNOWN_TARGET");
}

#[test]
fn hierarchy_is_transitive() {
    let cfg = config::load_from_str(
        r#"
version: 1
hierarchy:
  A: [B]
  B: [C]
  C: [A]
types:
  - name: X
"#,
    )
    .unwrap();
    let rt = Runtime::new(&cfg).unwrap();
    let h = rt.overloads().hierarchy();
    assert!(h.is_assignable(&TypeRef::new("C"), &TypeRef::new("A")));
    assert!(!h.is_assignable(&TypeRef::new("D"), &TypeRef::new("A")));
    assert!(h.is_assignable(&TypeRef::object(), &TypeRef::new("D")));
    assert!(!h.is_assignable(&TypeRef::new("geo.Object"), &TypeRef::new("D")));
}

#[test]
fn only_successful_selections_are_cached() {
    let rt = runtime();
    let foo = TypeRef::new("demo.Foo");
    for i in 0..50 {
        let _ = rt.overloads().select(&foo, &[ty(&format!("gen.T{i}"))]);
        let _ = rt.overloads().select(&TypeRef::new(format!("gen.T{i}")), &[]);
    }
    assert_eq!(rt.overloads().cached_selections(), 0);

    rt.overloads().select(&foo, &[ty("String")]).unwrap();
    rt.overloads().select(&foo, &[ty("String")]).unwrap();
    assert_eq!(rt.overloads().cached_selections(), 1);
}

#[test]
fn exact_signature_picks_declared_constructor() {
    let rt = runtime();
    let ctor = TypeRef::new("demo.Ctor");
    let found = rt.overloads().exact(&ctor, &[TypeRef::new("Float")]).unwrap();
    assert_eq!(found, CallTarget::constructor("demo.Ctor", vec![TypeRef::new("Float")]));

    let err = rt
        .overloads()
        .exact(&ctor, &[TypeRef::new("Long")])
        .expect_err("undeclared signature");
    assert_eq!(err.code().as_str(), "NO_MATCHING_CONSTRUCTOR");

    let err = rt
        .overloads()
        .exact(&TypeRef::new("demo.Nope"), &[])
        .expect_err("unknown type");
    assert_eq!(err.code().as_str(), "UNKNOWN_TARGET");
}

#[test]
fn construct_with_reaches_later_constructor_of_same_arity() {
    let rt = runtime();
    let ctor = TypeRef::new("demo.Ctor");

    // First-match selection lands on Ctor(String), whose rule rejects.
    let err = rt
        .construct(&ctor, &[None], || 0_u8)
        .err()
        .expect("String constructor rejects");
    assert!(err.to_string().starts_with("Wow!"));

    let guarded = rt
        .construct_with(&ctor, &[TypeRef::new("Float")], &[None::<f32>], || 1_u8)
        .unwrap();
    assert_eq!(guarded.into_inner(), 1);

    let err = rt
        .construct_with(&ctor, &[TypeRef::new("Double")], &[None::<f64>], || 2_u8)
        .err()
        .expect("Double rule rejects");
    assert_eq!(err.code().as_str(), "RULE_ABSENCE");
    assert!(err.to_string().starts_with("Yay!"));

    let err = rt
        .construct_with(&ctor, &[TypeRef::new("Long")], &[Some(3_i64)], || 3_u8)
        .err()
        .expect("undeclared signature");
    assert_eq!(err.code().as_str(), "NO_MATCHING_CONSTRUCTOR");
}

#[test]
fn construct_runs_factory_and_wraps() {
    let rt = runtime();
    let guarded = rt
        .construct(&TypeRef::new("demo.Foo"), &[ty("String")], || Foo("made"))
        .unwrap();
    assert_eq!(guarded.get(), &Foo("made"));

    let target = CallTarget::method("demo.Foo", "rename", vec![TypeRef::new("String")]);
    let absent: Option<&str> = None;
    let err = guarded
        .call(&target, &[&absent], |f| f.0)
        .expect_err("must reject");
    assert_eq!(err.code().as_str(), "GENERIC_ABSENCE");

    let present = Some("x");
    assert_eq!(guarded.call(&target, &[&present], |f| f.0).unwrap(), "made");
}

#[test]
fn call_mut_is_checked_before_mutation() {
    let rt = runtime();
    let mut guarded = rt
        .construct(&TypeRef::new("demo.Foo"), &[ty("String")], || Foo("old"))
        .unwrap();
    let target = CallTarget::method("demo.Foo", "rename", vec![TypeRef::new("String")]);

    let absent: Option<&str> = None;
    let err = guarded
        .call_mut(&target, &[&absent], |f| f.0 = "never")
        .expect_err("must reject");
    assert_eq!(err.code().as_str(), "GENERIC_ABSENCE");
    assert_eq!(guarded.get(), &Foo("old"));

    let present = Some("new");
    guarded.call_mut(&target, &[&present], |f| f.0 = "new").unwrap();
    assert_eq!(guarded.get(), &Foo("new"));
}

#[test]
fn construct_rejects_absent_argument_before_factory() {
    let rt = runtime();
    let mut built = false;
    let err = rt
        .construct(&TypeRef::new("demo.Foo"), &[None], || {
            built = true;
            Foo("never")
        })
        .err()
        .expect("must reject");
    assert!(!built);
    assert_eq!(
        err.to_string(),
        "Parameter<String> is not nullable\n\tat demo.Foo.Foo(Foo.rs:12)"
    );
}

#[test]
fn construct_with_exempt_constructor() {
    let rt = runtime();
    let guarded = rt
        .construct(&TypeRef::new("demo.SelfExempt"), &[None], || 5_u8)
        .unwrap();
    assert_eq!(guarded.into_inner(), 5);
}
