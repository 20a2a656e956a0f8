//! End-to-end checks of the bootstrap-descriptor builders.

use nomdesc::bootstrap::{of_callsite_bootstrap, of_constant_bootstrap};
use nomdesc::catalog::catalog;
use nomdesc::desc::{ClassDesc, Kind};

fn object() -> ClassDesc {
    catalog().cd_object.clone()
}

#[test]
fn callsite_bootstrap_carries_the_indy_prefix() {
    let owner = ClassDesc::of("com.example.Bootstraps").expect("Valid class name");
    let handle = of_callsite_bootstrap(owner.clone(), "make", object(), [])
        .expect("Valid bootstrap signature");

    assert_eq!(handle.kind, Kind::InvokeStatic);
    assert_eq!(handle.owner, owner);
    assert_eq!(handle.name, "make");
    assert_eq!(
        handle.method_type.parameter_types,
        catalog().indy_bootstrap_args
    );
    assert_eq!(handle.method_type.return_type, object());
    assert_eq!(
        handle.method_type.descriptor(),
        "(Ljava/lang/invoke/MethodHandles$Lookup;Ljava/lang/String;\
         Ljava/lang/invoke/MethodType;)Ljava/lang/Object;"
    );
}

#[test]
fn constant_bootstrap_carries_the_condy_prefix() {
    let owner = ClassDesc::of("java.lang.invoke.ConstantBootstraps").expect("Valid class name");
    let handle = of_constant_bootstrap(owner, "nullConstant", object(), [])
        .expect("Valid bootstrap signature");

    assert_eq!(
        handle.method_type.parameter_types,
        catalog().condy_bootstrap_args
    );
    assert_eq!(
        handle.method_type.descriptor(),
        "(Ljava/lang/invoke/MethodHandles$Lookup;Ljava/lang/String;\
         Ljava/lang/Class;)Ljava/lang/Object;"
    );
}

#[test]
fn explicit_parameters_come_after_the_prefix() {
    let owner = ClassDesc::of("com.example.Bootstraps").expect("Valid class name");
    let string = catalog().cd_string.clone();
    let int = catalog().cd_int.clone();
    let handle = of_callsite_bootstrap(owner, "describe", object(), [string.clone(), int.clone()])
        .expect("Valid bootstrap signature");

    let params = &handle.method_type.parameter_types;
    assert_eq!(params.len(), 5);
    assert_eq!(params[..3], catalog().indy_bootstrap_args);
    assert_eq!(params[3], string);
    assert_eq!(params[4], int);
}

#[test]
fn builders_are_idempotent() {
    let owner = ClassDesc::of("com.example.Bootstraps").expect("Valid class name");
    let first = of_constant_bootstrap(owner.clone(), "make", object(), [object()])
        .expect("Valid bootstrap signature");
    let second = of_constant_bootstrap(owner, "make", object(), [object()])
        .expect("Valid bootstrap signature");
    assert_eq!(first, second);
}

#[test]
fn malformed_names_are_rejected_by_both_builders() {
    let owner = ClassDesc::of("com.example.Bootstraps").expect("Valid class name");
    for name in ["with.dot", "with;semi", "with[bracket", "with/slash", ""] {
        assert!(
            of_callsite_bootstrap(owner.clone(), name, object(), []).is_err(),
            "{name:?} should be rejected by the call-site builder"
        );
        assert!(
            of_constant_bootstrap(owner.clone(), name, object(), []).is_err(),
            "{name:?} should be rejected by the constant builder"
        );
    }
}
