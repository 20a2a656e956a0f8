use proptest::prelude::*;

use crate::desc::{ClassDesc, PrimitiveType};

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident = prop::string::string_regex(r"[a-zA-Z][a-zA-Z0-9\$_]*")
        .expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..=8).prop_map(|segments| segments.join("/"))
}

pub(crate) fn arb_member_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z\$_][a-zA-Z0-9\$_]*").expect("The regex is invalid")
}

pub(crate) fn arb_value_primitive() -> impl Strategy<Value = PrimitiveType> {
    any::<PrimitiveType>().prop_filter("`void` is not a value type", |it| {
        *it != PrimitiveType::Void
    })
}

pub(crate) fn arb_non_array_class_desc() -> impl Strategy<Value = ClassDesc> {
    prop_oneof![
        arb_value_primitive().prop_map(ClassDesc::Primitive),
        arb_class_name().prop_map(|binary_name| ClassDesc::Object { binary_name }),
    ]
}

prop_compose! {
    fn arb_array_class_desc()(
        component in arb_non_array_class_desc(),
        dimensions in 1..=4u8,
    ) -> ClassDesc {
        (0..dimensions).fold(component, |acc, _| ClassDesc::Array(Box::new(acc)))
    }
}

pub(crate) fn arb_value_class_desc() -> impl Strategy<Value = ClassDesc> {
    prop_oneof![arb_non_array_class_desc(), arb_array_class_desc()]
}
