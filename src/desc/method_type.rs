//! Descriptors for method types.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::{ClassDesc, InvalidDescriptor};

/// A nominal descriptor for a method type.
/// Consists of the parameter types and the return type.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct MethodTypeDesc {
    /// The types of the parameters. Never contains the `void` descriptor.
    pub parameter_types: Vec<ClassDesc>,
    /// The return type, possibly the `void` descriptor.
    pub return_type: ClassDesc,
}

impl MethodTypeDesc {
    /// Creates a method type descriptor from a return type and parameter
    /// types.
    /// # Errors
    /// [`InvalidDescriptor::VoidType`] if any parameter type is `void`.
    pub fn of(
        return_type: ClassDesc,
        parameter_types: impl IntoIterator<Item = ClassDesc>,
    ) -> Result<Self, InvalidDescriptor> {
        let parameter_types: Vec<_> = parameter_types.into_iter().collect();
        if parameter_types.iter().any(ClassDesc::is_void) {
            return Err(InvalidDescriptor::VoidType);
        }
        Ok(Self {
            parameter_types,
            return_type,
        })
    }

    /// Returns a method type descriptor with the given types inserted at
    /// `position` in the parameter list, shifting later parameters to the
    /// right.
    /// # Errors
    /// - [`InvalidDescriptor::ParameterPosition`] if `position` is greater
    ///   than the current number of parameters.
    /// - [`InvalidDescriptor::VoidType`] if any inserted type is `void`.
    pub fn insert_parameter_types(
        &self,
        position: usize,
        parameter_types: impl IntoIterator<Item = ClassDesc>,
    ) -> Result<Self, InvalidDescriptor> {
        let arity = self.parameter_types.len();
        if position > arity {
            return Err(InvalidDescriptor::ParameterPosition { position, arity });
        }
        let inserted: Vec<_> = parameter_types.into_iter().collect();
        if inserted.iter().any(ClassDesc::is_void) {
            return Err(InvalidDescriptor::VoidType);
        }
        let mut parameter_types = self.parameter_types.clone();
        parameter_types.splice(position..position, inserted);
        Ok(Self {
            parameter_types,
            return_type: self.return_type.clone(),
        })
    }

    /// Returns a method type descriptor with the same parameters and the
    /// given return type.
    #[must_use]
    pub fn change_return_type(&self, return_type: ClassDesc) -> Self {
        Self {
            parameter_types: self.parameter_types.clone(),
            return_type,
        }
    }

    /// Returns the method descriptor string (e.g., `(ILjava/lang/String;)V`).
    #[must_use]
    pub fn descriptor(&self) -> String {
        self.to_string()
    }
}

impl Display for MethodTypeDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}){}",
            self.parameter_types.iter().map(ClassDesc::descriptor).join(""),
            self.return_type.descriptor()
        )
    }
}

impl FromStr for MethodTypeDesc {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let syntax_error = || InvalidDescriptor::Syntax(descriptor.to_owned());
        let mut chars = descriptor.chars();
        if chars.next() != Some('(') {
            return Err(syntax_error());
        }
        let mut parameter_types = Vec::new();
        let return_type = loop {
            match chars.next() {
                Some(')') => break chars.as_str().parse().map_err(|_| syntax_error())?,
                Some(prefix) => {
                    let param = ClassDesc::parse_single(prefix, &mut chars)
                        .map_err(|_| syntax_error())?;
                    parameter_types.push(param);
                }
                None => return Err(syntax_error()),
            }
        };
        Self::of(return_type, parameter_types)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::desc::PrimitiveType;
    use crate::tests::arb_value_class_desc;

    const MAX_PARAMS: usize = 10;

    fn arb_return_type() -> impl Strategy<Value = ClassDesc> {
        prop_oneof![
            Just(ClassDesc::Primitive(PrimitiveType::Void)),
            arb_value_class_desc(),
        ]
    }

    proptest! {
        #[test]
        fn method_type_from_str(
            params in prop::collection::vec(arb_value_class_desc(), 0..MAX_PARAMS),
            ret in arb_return_type(),
        ) {
            let descriptor = format!(
                "({}){}",
                params.iter().map(ClassDesc::descriptor).join(""),
                ret.descriptor()
            );
            let parsed: MethodTypeDesc =
                descriptor.parse().expect("Failed to parse method descriptor");
            prop_assert_eq!(&parsed.return_type, &ret);
            prop_assert_eq!(&parsed.parameter_types, &params);
            prop_assert_eq!(parsed.descriptor(), descriptor);
        }

        #[test]
        fn too_many_return_types(
            params in prop::collection::vec(arb_value_class_desc(), 0..MAX_PARAMS),
            rets in prop::collection::vec(arb_return_type(), 2..5),
        ) {
            let descriptor = format!(
                "({}){}",
                params.iter().map(ClassDesc::descriptor).join(""),
                rets.iter().map(ClassDesc::descriptor).join(""),
            );
            prop_assert!(descriptor.parse::<MethodTypeDesc>().is_err());
        }
    }

    #[test]
    fn empty_descriptor() {
        assert!("".parse::<MethodTypeDesc>().is_err());
    }

    #[test]
    fn incomplete_return_type() {
        assert!("()Ljava/lang".parse::<MethodTypeDesc>().is_err());
    }

    #[test]
    fn missing_return_type() {
        assert!("(I)".parse::<MethodTypeDesc>().is_err());
    }

    #[test]
    fn missing_semicolon() {
        assert!("(I[Ljava/lang/StringJ)V".parse::<MethodTypeDesc>().is_err());
    }

    #[test]
    fn void_parameter_is_rejected() {
        assert!("(V)V".parse::<MethodTypeDesc>().is_err());
        let void = ClassDesc::Primitive(PrimitiveType::Void);
        assert_eq!(
            MethodTypeDesc::of(void.clone(), [void]),
            Err(InvalidDescriptor::VoidType)
        );
    }

    #[test]
    fn insert_parameter_types_at_front() {
        let method_type: MethodTypeDesc = "(I)V".parse().expect("Valid descriptor");
        let string = ClassDesc::of("java.lang.String").expect("Valid class name");
        let object = ClassDesc::of("java.lang.Object").expect("Valid class name");
        let extended = method_type
            .insert_parameter_types(0, [string.clone(), object.clone()])
            .expect("Insertion in range");
        assert_eq!(
            extended.parameter_types,
            vec![string, object, ClassDesc::Primitive(PrimitiveType::Int)]
        );
        assert_eq!(extended.return_type, method_type.return_type);
    }

    #[test]
    fn insert_parameter_types_in_middle() {
        let method_type: MethodTypeDesc = "(IJ)V".parse().expect("Valid descriptor");
        let extended = method_type
            .insert_parameter_types(1, [ClassDesc::Primitive(PrimitiveType::Double)])
            .expect("Insertion in range");
        assert_eq!(extended.descriptor(), "(IDJ)V");
    }

    #[test]
    fn insert_parameter_types_out_of_bounds() {
        let method_type: MethodTypeDesc = "(I)V".parse().expect("Valid descriptor");
        assert_eq!(
            method_type.insert_parameter_types(2, []),
            Err(InvalidDescriptor::ParameterPosition {
                position: 2,
                arity: 1
            })
        );
    }

    #[test]
    fn insert_void_parameter_is_rejected() {
        let method_type: MethodTypeDesc = "()V".parse().expect("Valid descriptor");
        assert_eq!(
            method_type.insert_parameter_types(0, [ClassDesc::Primitive(PrimitiveType::Void)]),
            Err(InvalidDescriptor::VoidType)
        );
    }

    #[test]
    fn change_return_type() {
        let method_type: MethodTypeDesc = "(I)V".parse().expect("Valid descriptor");
        let changed =
            method_type.change_return_type(ClassDesc::Primitive(PrimitiveType::Long));
        assert_eq!(changed.descriptor(), "(I)J");
    }
}
