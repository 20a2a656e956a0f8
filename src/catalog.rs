//! The catalog of canonical, pre-built descriptor singletons.
//!
//! The catalog holds one canonical descriptor value for each foundational
//! platform type, for the descriptor types' own meta-descriptors, for the
//! primitive types, and for the standard bootstrap method handles. Consumers
//! take these instead of re-deriving equivalent values, which keeps
//! descriptors for the same entity referentially and semantically canonical
//! throughout the process.
//!
//! All entries are built exactly once, on first access, by [`Catalog::build`]
//! running a single hand-ordered construction sequence: primitive descriptors
//! first, then class descriptors, then the implicit bootstrap parameter
//! tables, then method-handle descriptors, then dynamic-constant descriptors.
//! Within that sequence a binding may only refer to bindings above it, so an
//! entry can never be read before its dependencies exist. After construction
//! every entry is immutable and freely shared across threads.

use std::sync::LazyLock;

use crate::bootstrap::{self, of_constant_bootstrap};
use crate::desc::{
    ClassDesc, DEFAULT_NAME, DirectMethodHandleDesc, DynamicConstantDesc, Kind, MethodTypeDesc,
    PrimitiveType,
};

/// Returns the process-wide catalog of canonical descriptor singletons.
///
/// The first call builds the catalog; every call returns the same instance,
/// so entries are referentially stable for the lifetime of the process.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// The canonical descriptor singletons. Obtained via [`catalog`].
#[derive(Debug)]
#[non_exhaustive]
pub struct Catalog {
    /// [`ClassDesc`] for the primitive type `int`.
    pub cd_int: ClassDesc,
    /// [`ClassDesc`] for the primitive type `long`.
    pub cd_long: ClassDesc,
    /// [`ClassDesc`] for the primitive type `float`.
    pub cd_float: ClassDesc,
    /// [`ClassDesc`] for the primitive type `double`.
    pub cd_double: ClassDesc,
    /// [`ClassDesc`] for the primitive type `short`.
    pub cd_short: ClassDesc,
    /// [`ClassDesc`] for the primitive type `byte`.
    pub cd_byte: ClassDesc,
    /// [`ClassDesc`] for the primitive type `char`.
    pub cd_char: ClassDesc,
    /// [`ClassDesc`] for the primitive type `boolean`.
    pub cd_boolean: ClassDesc,
    /// [`ClassDesc`] for the `void` descriptor.
    pub cd_void: ClassDesc,

    /// [`ClassDesc`] for `java.lang.Object`.
    pub cd_object: ClassDesc,
    /// [`ClassDesc`] for `java.lang.String`.
    pub cd_string: ClassDesc,
    /// [`ClassDesc`] for `java.lang.Class`.
    pub cd_class: ClassDesc,
    /// [`ClassDesc`] for `java.lang.Number`.
    pub cd_number: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Integer`.
    pub cd_boxed_int: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Long`.
    pub cd_boxed_long: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Float`.
    pub cd_boxed_float: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Double`.
    pub cd_boxed_double: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Short`.
    pub cd_boxed_short: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Byte`.
    pub cd_boxed_byte: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Character`.
    pub cd_boxed_char: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Boolean`.
    pub cd_boxed_boolean: ClassDesc,
    /// [`ClassDesc`] for the box class `java.lang.Void`.
    pub cd_boxed_void: ClassDesc,
    /// [`ClassDesc`] for `java.lang.Throwable`.
    pub cd_throwable: ClassDesc,
    /// [`ClassDesc`] for `java.lang.Exception`.
    pub cd_exception: ClassDesc,
    /// [`ClassDesc`] for `java.lang.Enum`.
    pub cd_enum: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.VarHandle`.
    pub cd_var_handle: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.MethodHandles`.
    pub cd_method_handles: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.MethodHandles.Lookup`.
    pub cd_method_handles_lookup: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.MethodHandle`.
    pub cd_method_handle: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.MethodType`.
    pub cd_method_type: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.CallSite`.
    pub cd_call_site: ClassDesc,
    /// [`ClassDesc`] for `java.util.Collection`.
    pub cd_collection: ClassDesc,
    /// [`ClassDesc`] for `java.util.List`.
    pub cd_list: ClassDesc,
    /// [`ClassDesc`] for `java.util.Set`.
    pub cd_set: ClassDesc,
    /// [`ClassDesc`] for `java.util.Map`.
    pub cd_map: ClassDesc,

    /// [`ClassDesc`] for `java.lang.constant.ConstantDesc`.
    pub cd_constant_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.ClassDesc`.
    pub cd_class_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.Enum.EnumDesc`.
    pub cd_enum_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.MethodTypeDesc`.
    pub cd_method_type_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.MethodHandleDesc`.
    pub cd_method_handle_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.DirectMethodHandleDesc`.
    pub cd_direct_method_handle_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.VarHandle.VarHandleDesc`.
    pub cd_var_handle_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.DirectMethodHandleDesc.Kind`.
    pub cd_method_handle_desc_kind: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.DynamicConstantDesc`.
    pub cd_dynamic_constant_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.constant.DynamicCallSiteDesc`.
    pub cd_dynamic_call_site_desc: ClassDesc,
    /// [`ClassDesc`] for `java.lang.invoke.ConstantBootstraps`.
    pub cd_constant_bootstraps: ClassDesc,

    /// The implicit leading parameter types of an `invokedynamic` bootstrap
    /// method: `(Lookup, String, MethodType)`.
    pub indy_bootstrap_args: [ClassDesc; 3],
    /// The implicit leading parameter types of a dynamic-constant bootstrap
    /// method: `(Lookup, String, Class)`.
    pub condy_bootstrap_args: [ClassDesc; 3],

    /// Bootstrap for a primitive class constant:
    /// `ConstantBootstraps.primitiveClass`.
    pub bsm_primitive_class: DirectMethodHandleDesc,
    /// Bootstrap for an enum constant: `ConstantBootstraps.enumConstant`.
    pub bsm_enum_constant: DirectMethodHandleDesc,
    /// Bootstrap for the `null` constant: `ConstantBootstraps.nullConstant`.
    pub bsm_null_constant: DirectMethodHandleDesc,
    /// Bootstrap for an instance-field `VarHandle`:
    /// `ConstantBootstraps.fieldVarHandle`.
    pub bsm_var_handle_field: DirectMethodHandleDesc,
    /// Bootstrap for a static-field `VarHandle`:
    /// `ConstantBootstraps.staticFieldVarHandle`.
    pub bsm_var_handle_static_field: DirectMethodHandleDesc,
    /// Bootstrap for an array `VarHandle`:
    /// `ConstantBootstraps.arrayVarHandle`.
    pub bsm_var_handle_array: DirectMethodHandleDesc,
    /// Bootstrap computing a constant by invoking a method handle:
    /// `ConstantBootstraps.invoke`.
    pub bsm_invoke: DirectMethodHandleDesc,

    /// Bootstrap resolving a `ClassDesc` from its descriptor string.
    pub bsm_class_desc: DirectMethodHandleDesc,
    /// Bootstrap resolving a `MethodTypeDesc` from its descriptor string.
    pub bsm_method_type_desc: DirectMethodHandleDesc,
    /// Bootstrap resolving a `DirectMethodHandleDesc` from its parts.
    pub bsm_method_handle_desc: DirectMethodHandleDesc,
    /// Bootstrap resolving an `EnumDesc` from its class and constant name.
    pub bsm_enum_desc: DirectMethodHandleDesc,
    /// Bootstrap resolving a `DynamicConstantDesc` from its parts.
    pub bsm_dynamic_constant_desc: DirectMethodHandleDesc,

    /// Helper handle for the `MethodTypeDesc.ofDescriptor` factory.
    pub mhr_method_type_desc_factory: DirectMethodHandleDesc,
    /// Helper handle for the `ClassDesc.ofDescriptor` factory.
    pub mhr_class_desc_factory: DirectMethodHandleDesc,
    /// Helper handle for the `MethodHandleDesc.of` factory.
    pub mhr_method_handle_desc_factory: DirectMethodHandleDesc,
    /// Helper handle for `MethodHandle.asType`.
    pub mhr_method_handle_as_type: DirectMethodHandleDesc,
    /// Helper handle for `MethodHandleDesc.asType`.
    pub mhr_method_handle_desc_as_type: DirectMethodHandleDesc,
    /// Helper handle for the `DynamicConstantDesc.of` factory.
    pub mhr_dynamic_constant_desc_factory: DirectMethodHandleDesc,
    /// Helper handle for `DynamicConstantDesc.withArgs`.
    pub mhr_dynamic_constant_desc_with_args: DirectMethodHandleDesc,
    /// Helper handle for the `EnumDesc.of` factory.
    pub mhr_enum_desc_factory: DirectMethodHandleDesc,
    /// Helper handle for the `VarHandleDesc.ofField` factory.
    pub mhr_var_handle_desc_of_field: DirectMethodHandleDesc,
    /// Helper handle for the `VarHandleDesc.ofStaticField` factory.
    pub mhr_var_handle_desc_of_static: DirectMethodHandleDesc,
    /// Helper handle for the `VarHandleDesc.ofArray` factory.
    pub mhr_var_handle_desc_of_array: DirectMethodHandleDesc,

    /// Descriptor for the constant `null`, bootstrapped by
    /// [`Catalog::bsm_null_constant`] with the default invocation name.
    pub null: DynamicConstantDesc,
}

impl Catalog {
    /// Builds every entry in one ordered pass.
    ///
    /// The order of the bindings below is load-bearing: each one may refer
    /// only to bindings above it, mirroring the dependency order primitives →
    /// classes → method types → method handles → dynamic constants.
    #[allow(clippy::too_many_lines)]
    fn build() -> Self {
        let cd_int = ClassDesc::Primitive(PrimitiveType::Int);
        let cd_long = ClassDesc::Primitive(PrimitiveType::Long);
        let cd_float = ClassDesc::Primitive(PrimitiveType::Float);
        let cd_double = ClassDesc::Primitive(PrimitiveType::Double);
        let cd_short = ClassDesc::Primitive(PrimitiveType::Short);
        let cd_byte = ClassDesc::Primitive(PrimitiveType::Byte);
        let cd_char = ClassDesc::Primitive(PrimitiveType::Char);
        let cd_boolean = ClassDesc::Primitive(PrimitiveType::Boolean);
        let cd_void = ClassDesc::Primitive(PrimitiveType::Void);

        let cd_object = class("java/lang/Object");
        let cd_string = class("java/lang/String");
        let cd_class = class("java/lang/Class");
        let cd_number = class("java/lang/Number");
        let cd_boxed_int = class("java/lang/Integer");
        let cd_boxed_long = class("java/lang/Long");
        let cd_boxed_float = class("java/lang/Float");
        let cd_boxed_double = class("java/lang/Double");
        let cd_boxed_short = class("java/lang/Short");
        let cd_boxed_byte = class("java/lang/Byte");
        let cd_boxed_char = class("java/lang/Character");
        let cd_boxed_boolean = class("java/lang/Boolean");
        let cd_boxed_void = class("java/lang/Void");
        let cd_throwable = class("java/lang/Throwable");
        let cd_exception = class("java/lang/Exception");
        let cd_enum = class("java/lang/Enum");
        let cd_var_handle = class("java/lang/invoke/VarHandle");
        let cd_method_handles = class("java/lang/invoke/MethodHandles");
        let cd_method_handles_lookup = inner(&cd_method_handles, "Lookup");
        let cd_method_handle = class("java/lang/invoke/MethodHandle");
        let cd_method_type = class("java/lang/invoke/MethodType");
        let cd_call_site = class("java/lang/invoke/CallSite");
        let cd_collection = class("java/util/Collection");
        let cd_list = class("java/util/List");
        let cd_set = class("java/util/Set");
        let cd_map = class("java/util/Map");

        let cd_constant_desc = class("java/lang/constant/ConstantDesc");
        let cd_class_desc = class("java/lang/constant/ClassDesc");
        let cd_enum_desc = inner(&cd_enum, "EnumDesc");
        let cd_method_type_desc = class("java/lang/constant/MethodTypeDesc");
        let cd_method_handle_desc = class("java/lang/constant/MethodHandleDesc");
        let cd_direct_method_handle_desc = class("java/lang/constant/DirectMethodHandleDesc");
        let cd_var_handle_desc = inner(&cd_var_handle, "VarHandleDesc");
        let cd_method_handle_desc_kind = inner(&cd_direct_method_handle_desc, "Kind");
        let cd_dynamic_constant_desc = class("java/lang/constant/DynamicConstantDesc");
        let cd_dynamic_call_site_desc = class("java/lang/constant/DynamicCallSiteDesc");
        let cd_constant_bootstraps = class("java/lang/invoke/ConstantBootstraps");

        let indy_bootstrap_args = bootstrap::indy_bootstrap_args();
        let condy_bootstrap_args = bootstrap::condy_bootstrap_args();

        let bsm_primitive_class =
            condy_bsm(&cd_constant_bootstraps, "primitiveClass", &cd_class, &[]);
        let bsm_enum_constant =
            condy_bsm(&cd_constant_bootstraps, "enumConstant", &cd_enum, &[]);
        let bsm_null_constant =
            condy_bsm(&cd_constant_bootstraps, "nullConstant", &cd_object, &[]);
        let bsm_var_handle_field = condy_bsm(
            &cd_constant_bootstraps,
            "fieldVarHandle",
            &cd_var_handle,
            &[cd_class.clone(), cd_class.clone()],
        );
        let bsm_var_handle_static_field = condy_bsm(
            &cd_constant_bootstraps,
            "staticFieldVarHandle",
            &cd_var_handle,
            &[cd_class.clone(), cd_class.clone()],
        );
        let bsm_var_handle_array = condy_bsm(
            &cd_constant_bootstraps,
            "arrayVarHandle",
            &cd_var_handle,
            &[cd_class.clone()],
        );
        let bsm_invoke = condy_bsm(
            &cd_constant_bootstraps,
            "invoke",
            &cd_object,
            &[cd_method_handle.clone(), cd_object.array_type()],
        );

        let bsm_class_desc = condy_bsm(
            &cd_class_desc,
            "constantBootstrap",
            &cd_class_desc,
            &[cd_string.clone()],
        );
        let bsm_method_type_desc = condy_bsm(
            &cd_method_type_desc,
            "constantBootstrap",
            &cd_method_type_desc,
            &[cd_string.clone()],
        );
        let bsm_method_handle_desc = condy_bsm(
            &cd_direct_method_handle_desc,
            "constantBootstrap",
            &cd_direct_method_handle_desc,
            &[
                cd_string.clone(),
                cd_string.clone(),
                cd_string.clone(),
                cd_string.clone(),
            ],
        );
        let bsm_enum_desc = condy_bsm(
            &cd_enum_desc,
            "constantBootstrap",
            &cd_enum_desc,
            &[cd_string.clone(), cd_string.clone()],
        );
        let bsm_dynamic_constant_desc = condy_bsm(
            &cd_dynamic_constant_desc,
            "constantBootstrap",
            &cd_dynamic_constant_desc,
            &[
                cd_string.clone(),
                cd_string.clone(),
                cd_string.clone(),
                cd_string.clone(),
                cd_string.clone(),
                cd_constant_desc.array_type(),
            ],
        );

        let mhr_method_type_desc_factory = static_method(
            &cd_method_type_desc,
            "ofDescriptor",
            method_type(&cd_method_type_desc, &[cd_string.clone()]),
        );
        let mhr_class_desc_factory = static_method(
            &cd_class_desc,
            "ofDescriptor",
            method_type(&cd_class_desc, &[cd_string.clone()]),
        );
        let mhr_method_handle_desc_factory = static_method(
            &cd_method_handle_desc,
            "of",
            method_type(
                &cd_method_handle_desc,
                &[
                    cd_method_handle_desc_kind.clone(),
                    cd_class_desc.clone(),
                    cd_string.clone(),
                    cd_method_type_desc.clone(),
                ],
            ),
        );
        let mhr_method_handle_as_type = virtual_method(
            &cd_method_handle,
            "asType",
            method_type(&cd_method_handle, &[cd_method_type.clone()]),
        );
        let mhr_method_handle_desc_as_type = virtual_method(
            &cd_method_handle_desc,
            "asType",
            method_type(&cd_method_handle_desc, &[cd_method_type_desc.clone()]),
        );
        let mhr_dynamic_constant_desc_factory = static_method(
            &cd_dynamic_constant_desc,
            "of",
            method_type(
                &cd_dynamic_constant_desc,
                &[
                    cd_method_handle_desc.clone(),
                    cd_string.clone(),
                    cd_class_desc.clone(),
                ],
            ),
        );
        let mhr_dynamic_constant_desc_with_args = virtual_method(
            &cd_dynamic_constant_desc,
            "withArgs",
            method_type(&cd_dynamic_constant_desc, &[cd_constant_desc.array_type()]),
        );
        let mhr_enum_desc_factory = static_method(
            &cd_enum_desc,
            "of",
            method_type(&cd_enum_desc, &[cd_class_desc.clone(), cd_string.clone()]),
        );
        let mhr_var_handle_desc_of_field = static_method(
            &cd_var_handle_desc,
            "ofField",
            method_type(
                &cd_var_handle_desc,
                &[cd_class_desc.clone(), cd_string.clone(), cd_class_desc.clone()],
            ),
        );
        let mhr_var_handle_desc_of_static = static_method(
            &cd_var_handle_desc,
            "ofStaticField",
            method_type(
                &cd_var_handle_desc,
                &[cd_class_desc.clone(), cd_string.clone(), cd_class_desc.clone()],
            ),
        );
        let mhr_var_handle_desc_of_array = static_method(
            &cd_var_handle_desc,
            "ofArray",
            method_type(&cd_var_handle_desc, &[cd_class_desc.clone()]),
        );

        let null = DynamicConstantDesc::of_named(
            bsm_null_constant.clone(),
            DEFAULT_NAME,
            cd_object.clone(),
        )
        .expect("The catalog's null-constant entry is well formed");

        Self {
            cd_int,
            cd_long,
            cd_float,
            cd_double,
            cd_short,
            cd_byte,
            cd_char,
            cd_boolean,
            cd_void,
            cd_object,
            cd_string,
            cd_class,
            cd_number,
            cd_boxed_int,
            cd_boxed_long,
            cd_boxed_float,
            cd_boxed_double,
            cd_boxed_short,
            cd_boxed_byte,
            cd_boxed_char,
            cd_boxed_boolean,
            cd_boxed_void,
            cd_throwable,
            cd_exception,
            cd_enum,
            cd_var_handle,
            cd_method_handles,
            cd_method_handles_lookup,
            cd_method_handle,
            cd_method_type,
            cd_call_site,
            cd_collection,
            cd_list,
            cd_set,
            cd_map,
            cd_constant_desc,
            cd_class_desc,
            cd_enum_desc,
            cd_method_type_desc,
            cd_method_handle_desc,
            cd_direct_method_handle_desc,
            cd_var_handle_desc,
            cd_method_handle_desc_kind,
            cd_dynamic_constant_desc,
            cd_dynamic_call_site_desc,
            cd_constant_bootstraps,
            indy_bootstrap_args,
            condy_bootstrap_args,
            bsm_primitive_class,
            bsm_enum_constant,
            bsm_null_constant,
            bsm_var_handle_field,
            bsm_var_handle_static_field,
            bsm_var_handle_array,
            bsm_invoke,
            bsm_class_desc,
            bsm_method_type_desc,
            bsm_method_handle_desc,
            bsm_enum_desc,
            bsm_dynamic_constant_desc,
            mhr_method_type_desc_factory,
            mhr_class_desc_factory,
            mhr_method_handle_desc_factory,
            mhr_method_handle_as_type,
            mhr_method_handle_desc_as_type,
            mhr_dynamic_constant_desc_factory,
            mhr_dynamic_constant_desc_with_args,
            mhr_enum_desc_factory,
            mhr_var_handle_desc_of_field,
            mhr_var_handle_desc_of_static,
            mhr_var_handle_desc_of_array,
            null,
        }
    }
}

fn class(binary_name: &str) -> ClassDesc {
    ClassDesc::Object {
        binary_name: binary_name.to_owned(),
    }
}

fn inner(outer: &ClassDesc, simple_name: &str) -> ClassDesc {
    outer
        .inner(simple_name)
        .expect("The catalog's nested-class names are well formed")
}

fn method_type(return_type: &ClassDesc, parameter_types: &[ClassDesc]) -> MethodTypeDesc {
    MethodTypeDesc {
        parameter_types: parameter_types.to_vec(),
        return_type: return_type.clone(),
    }
}

fn condy_bsm(
    owner: &ClassDesc,
    name: &str,
    return_type: &ClassDesc,
    parameter_types: &[ClassDesc],
) -> DirectMethodHandleDesc {
    of_constant_bootstrap(
        owner.clone(),
        name,
        return_type.clone(),
        parameter_types.iter().cloned(),
    )
    .expect("The catalog's bootstrap signatures are well formed")
}

fn static_method(
    owner: &ClassDesc,
    name: &str,
    method_type: MethodTypeDesc,
) -> DirectMethodHandleDesc {
    DirectMethodHandleDesc::of_method(Kind::InvokeStatic, owner.clone(), name, method_type)
        .expect("The catalog's member names are well formed")
}

fn virtual_method(
    owner: &ClassDesc,
    name: &str,
    method_type: MethodTypeDesc,
) -> DirectMethodHandleDesc {
    DirectMethodHandleDesc::of_method(Kind::InvokeVirtual, owner.clone(), name, method_type)
        .expect("The catalog's member names are well formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_referentially_stable() {
        assert!(std::ptr::eq(catalog(), catalog()));
        assert!(std::ptr::eq(&catalog().cd_object, &catalog().cd_object));
    }

    #[test]
    fn primitive_entries() {
        assert_eq!(catalog().cd_int.descriptor(), "I");
        assert_eq!(catalog().cd_boolean.descriptor(), "Z");
        assert_eq!(catalog().cd_void.descriptor(), "V");
        assert!(catalog().cd_void.is_void());
    }

    #[test]
    fn class_entries() {
        let catalog = catalog();
        assert_eq!(catalog.cd_object.descriptor(), "Ljava/lang/Object;");
        assert_eq!(
            catalog.cd_method_handles_lookup.descriptor(),
            "Ljava/lang/invoke/MethodHandles$Lookup;"
        );
        assert_eq!(
            catalog.cd_enum_desc.descriptor(),
            "Ljava/lang/Enum$EnumDesc;"
        );
        assert_eq!(
            catalog.cd_method_handle_desc_kind.descriptor(),
            "Ljava/lang/constant/DirectMethodHandleDesc$Kind;"
        );
    }

    #[test]
    fn implicit_prefix_tables_match_the_builders() {
        let catalog = catalog();
        assert_eq!(
            catalog.indy_bootstrap_args,
            [
                catalog.cd_method_handles_lookup.clone(),
                catalog.cd_string.clone(),
                catalog.cd_method_type.clone(),
            ]
        );
        assert_eq!(
            catalog.condy_bootstrap_args,
            [
                catalog.cd_method_handles_lookup.clone(),
                catalog.cd_string.clone(),
                catalog.cd_class.clone(),
            ]
        );
    }

    #[test]
    fn null_constant_entry() {
        let null = &catalog().null;
        assert_eq!(null.constant_name, DEFAULT_NAME);
        assert_eq!(null.constant_type, catalog().cd_object);
        assert_eq!(null.bootstrap_method, catalog().bsm_null_constant);
        assert!(null.bootstrap_args.is_empty());
    }

    #[test]
    fn bsm_invoke_signature() {
        let bsm = &catalog().bsm_invoke;
        assert_eq!(
            bsm.method_type.descriptor(),
            "(Ljava/lang/invoke/MethodHandles$Lookup;Ljava/lang/String;Ljava/lang/Class;\
             Ljava/lang/invoke/MethodHandle;[Ljava/lang/Object;)Ljava/lang/Object;"
        );
    }
}
