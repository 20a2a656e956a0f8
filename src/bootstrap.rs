//! Builders for bootstrap-method descriptors.
//!
//! A bootstrap method is a static method the virtual machine invokes while
//! linking an `invokedynamic` call site or a dynamically-computed constant.
//! The class-file specification fixes its leading parameters: a lookup
//! context, the invocation name, and either the call site's method type
//! (`invokedynamic`) or the constant's expected class (dynamic constants).
//! The builders here take only the *explicit* part of the signature and
//! prepend the implicit prefix, so callers must not re-supply it.
#![doc = crate::macros::see_jvm_spec!(4, 7, 23)]

use crate::desc::{ClassDesc, DirectMethodHandleDesc, InvalidDescriptor, Kind, MethodTypeDesc};

const LOOKUP: &str = "java/lang/invoke/MethodHandles$Lookup";
const STRING: &str = "java/lang/String";
const METHOD_TYPE: &str = "java/lang/invoke/MethodType";
const CLASS: &str = "java/lang/Class";

fn object(binary_name: &str) -> ClassDesc {
    ClassDesc::Object {
        binary_name: binary_name.to_owned(),
    }
}

/// The implicit leading parameter types of an `invokedynamic` bootstrap
/// method: `(Lookup, String, MethodType)`.
//
// Built from raw literals rather than the catalog, so that the builders stay
// callable while the catalog itself is under construction.
pub(crate) fn indy_bootstrap_args() -> [ClassDesc; 3] {
    [object(LOOKUP), object(STRING), object(METHOD_TYPE)]
}

/// The implicit leading parameter types of a dynamic-constant bootstrap
/// method: `(Lookup, String, Class)`.
pub(crate) fn condy_bootstrap_args() -> [ClassDesc; 3] {
    [object(LOOKUP), object(STRING), object(CLASS)]
}

/// Returns a descriptor for a bootstrap method of an `invokedynamic` call
/// site: a static method on `owner` whose leading parameter types are
/// `Lookup`, `String`, and `MethodType`, followed by `parameter_types`.
///
/// The returned descriptor's nominal signature includes the implicit leading
/// parameters; callers must not supply them in `parameter_types`.
/// # Errors
/// - [`InvalidDescriptor::MemberName`] if `name` is not a valid unqualified
///   name.
/// - [`InvalidDescriptor::VoidType`] if any of `parameter_types` is `void`.
pub fn of_callsite_bootstrap(
    owner: ClassDesc,
    name: &str,
    return_type: ClassDesc,
    parameter_types: impl IntoIterator<Item = ClassDesc>,
) -> Result<DirectMethodHandleDesc, InvalidDescriptor> {
    of_bootstrap(owner, name, return_type, parameter_types, indy_bootstrap_args())
}

/// Returns a descriptor for a bootstrap method of a dynamically-computed
/// constant: a static method on `owner` whose leading parameter types are
/// `Lookup`, `String`, and `Class`, followed by `parameter_types`.
///
/// The returned descriptor's nominal signature includes the implicit leading
/// parameters; callers must not supply them in `parameter_types`.
/// # Errors
/// - [`InvalidDescriptor::MemberName`] if `name` is not a valid unqualified
///   name.
/// - [`InvalidDescriptor::VoidType`] if any of `parameter_types` is `void`.
pub fn of_constant_bootstrap(
    owner: ClassDesc,
    name: &str,
    return_type: ClassDesc,
    parameter_types: impl IntoIterator<Item = ClassDesc>,
) -> Result<DirectMethodHandleDesc, InvalidDescriptor> {
    of_bootstrap(owner, name, return_type, parameter_types, condy_bootstrap_args())
}

fn of_bootstrap(
    owner: ClassDesc,
    name: &str,
    return_type: ClassDesc,
    parameter_types: impl IntoIterator<Item = ClassDesc>,
    implicit_prefix: [ClassDesc; 3],
) -> Result<DirectMethodHandleDesc, InvalidDescriptor> {
    let method_type = MethodTypeDesc::of(return_type, parameter_types)?
        .insert_parameter_types(0, implicit_prefix)?;
    DirectMethodHandleDesc::of_method(Kind::InvokeStatic, owner, name, method_type)
}
