//! Declared resolver arguments and their out-of-band metadata.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

use crate::{
    schema::meta::{DeprecationStatus, LazyTypeRef, TypeRef},
    value::InputValue,
};

/// Out-of-band metadata attached to a declared argument.
///
/// Carries everything a declaration can say about an argument besides
/// its type: a description, an explicit wire-format name, a deprecation
/// reason and schema directives. None of it affects how values are
/// coerced, except the name override consulted by the naming policy.
#[derive(Clone, Debug, Default)]
pub struct ArgumentAnnotation {
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub name: Option<ArcStr>,
    #[doc(hidden)]
    pub deprecation_reason: Option<ArcStr>,
    #[doc(hidden)]
    pub directives: Vec<ArcStr>,
}

impl ArgumentAnnotation {
    /// Creates an empty annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the argument's `description`.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit wire-format `name`, bypassing the naming
    /// policy.
    ///
    /// Overwrites any previously set name.
    #[must_use]
    pub fn name(mut self, name: impl Into<ArcStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the argument as deprecated with the given `reason`.
    #[must_use]
    pub fn deprecation_reason(mut self, reason: impl Into<ArcStr>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Appends a schema `directive` name.
    #[must_use]
    pub fn directive(mut self, directive: impl Into<ArcStr>) -> Self {
        self.directives.push(directive.into());
        self
    }
}

/// A single out-of-band tag carried by a [`TypeAnnotation`].
#[derive(Clone, Debug)]
pub enum AnnotationTag {
    /// Argument metadata: description, rename, deprecation, directives.
    Argument(ArgumentAnnotation),
    /// A lazy forward reference standing in for the underlying type.
    Lazy(LazyTypeRef),
}

/// A declaration-time type annotation: the underlying type plus any
/// out-of-band tags attached to it.
#[derive(Clone, Debug)]
pub struct TypeAnnotation {
    underlying: TypeRef,
    tags: Vec<AnnotationTag>,
}

impl TypeAnnotation {
    /// An annotation of the bare `underlying` type, with no tags.
    pub fn new(underlying: TypeRef) -> Self {
        Self {
            underlying,
            tags: Vec::new(),
        }
    }

    /// Attaches `tag` to this annotation.
    #[must_use]
    pub fn tag(mut self, tag: AnnotationTag) -> Self {
        self.tags.push(tag);
        self
    }
}

impl From<TypeRef> for TypeAnnotation {
    fn from(underlying: TypeRef) -> Self {
        Self::new(underlying)
    }
}

/// Schema-build-time error: two argument-metadata tags on one declared
/// parameter.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Annotation for argument `{argument_name}` cannot have multiple argument metadata tags")]
pub struct MultipleArgumentMetadataError {
    /// The declared (internal) name of the offending argument.
    #[error(not(source))]
    pub argument_name: ArcStr,
}

/// A declared resolver argument.
///
/// Pairs the argument's internal name and type with the metadata its
/// declaration carried. Built once at schema-construction time and
/// immutable afterwards; the binder walks a slice of these per call.
#[derive(Clone, Debug)]
pub struct ArgumentMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub graphql_name: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: TypeRef,
    #[doc(hidden)]
    pub default: InputValue,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
    #[doc(hidden)]
    pub directives: Vec<ArcStr>,
}

impl ArgumentMeta {
    /// Builds a new [`ArgumentMeta`] of the given `arg_type` with the
    /// given internal `name` and no metadata.
    ///
    /// The default starts out as [`InputValue::Unset`]: "no default was
    /// declared" and "no value was supplied" share one representation.
    pub fn new(name: impl Into<ArcStr>, arg_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            graphql_name: None,
            arg_type,
            default: InputValue::Unset,
            description: None,
            deprecation_status: DeprecationStatus::Current,
            directives: Vec::new(),
        }
    }

    /// Builds an [`ArgumentMeta`] from an annotated declaration,
    /// unwrapping the annotation's tags.
    ///
    /// At most one [`AnnotationTag::Argument`] may be attached; a
    /// second one fails with [`MultipleArgumentMetadataError`] here, at
    /// schema-build time, never during a call. A lazy
    /// forward-reference tag replaces the underlying type with its
    /// indirection node immediately.
    pub fn from_annotation(
        name: impl Into<ArcStr>,
        annotation: impl Into<TypeAnnotation>,
    ) -> Result<Self, MultipleArgumentMetadataError> {
        let annotation = annotation.into();
        let mut argument = Self::new(name, annotation.underlying);
        let mut metadata_seen = false;

        for tag in annotation.tags {
            match tag {
                AnnotationTag::Argument(metadata) => {
                    if metadata_seen {
                        return Err(MultipleArgumentMetadataError {
                            argument_name: argument.name,
                        });
                    }
                    metadata_seen = true;

                    argument.description = metadata.description;
                    argument.graphql_name = metadata.name;
                    argument.deprecation_status = match metadata.deprecation_reason {
                        Some(reason) => DeprecationStatus::Deprecated(Some(reason)),
                        None => DeprecationStatus::Current,
                    };
                    argument.directives = metadata.directives;
                }
                AnnotationTag::Lazy(reference) => {
                    argument.arg_type = TypeRef::Lazy(reference);
                }
            }
        }

        Ok(argument)
    }

    /// Sets the default value of this [`ArgumentMeta`].
    ///
    /// Overwrites any previously set default.
    #[must_use]
    pub fn default_value(mut self, value: InputValue) -> Self {
        self.default = value;
        self
    }

    /// Sets the `description` of this [`ArgumentMeta`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether a default value was declared for this argument.
    pub fn has_default(&self) -> bool {
        !self.default.is_unset()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graphql_input_value,
        schema::meta::{TypeCell, TypeRef},
        value::InputValue,
    };

    use super::{AnnotationTag, ArgumentAnnotation, ArgumentMeta, TypeAnnotation};

    #[test]
    fn default_is_unset_when_not_declared() {
        let argument = ArgumentMeta::new("count", TypeRef::scalar("Int"));

        assert!(!argument.has_default());
        assert_eq!(argument.default, InputValue::Unset);
        assert!(argument.graphql_name.is_none());

        let argument = argument.default_value(graphql_input_value!(10));
        assert!(argument.has_default());
    }

    #[test]
    fn annotation_metadata_is_applied() {
        let annotation = TypeAnnotation::new(TypeRef::scalar("String")).tag(
            AnnotationTag::Argument(
                ArgumentAnnotation::new()
                    .description("who to greet")
                    .name("whom")
                    .deprecation_reason("use `names`")
                    .directive("sensitive"),
            ),
        );

        let argument =
            ArgumentMeta::from_annotation("name", annotation).expect("a single metadata tag");

        assert_eq!(argument.description.as_deref(), Some("who to greet"));
        assert_eq!(argument.graphql_name.as_deref(), Some("whom"));
        assert_eq!(
            argument.deprecation_status.reason(),
            Some("use `names`"),
        );
        assert_eq!(argument.directives, ["sensitive"]);
    }

    #[test]
    fn two_metadata_tags_fail_at_build_time() {
        let annotation = TypeAnnotation::new(TypeRef::scalar("String"))
            .tag(AnnotationTag::Argument(
                ArgumentAnnotation::new().description("first"),
            ))
            .tag(AnnotationTag::Argument(
                ArgumentAnnotation::new().description("second"),
            ));

        let err = ArgumentMeta::from_annotation("name", annotation)
            .expect_err("two metadata tags on one parameter");

        assert_eq!(err.argument_name, "name");
        assert_eq!(
            err.to_string(),
            "Annotation for argument `name` cannot have multiple argument metadata tags",
        );
    }

    #[test]
    fn lazy_tag_replaces_the_underlying_type() {
        let cell = TypeCell::new();
        cell.fill(TypeRef::scalar("Int"));

        let lazy = match cell.type_ref() {
            TypeRef::Lazy(reference) => reference,
            other => panic!("expected a lazy node, got {other}"),
        };

        let annotation =
            TypeAnnotation::new(TypeRef::scalar("Unresolved")).tag(AnnotationTag::Lazy(lazy));
        let argument =
            ArgumentMeta::from_annotation("count", annotation).expect("a single lazy tag");

        let resolved = match &argument.arg_type {
            TypeRef::Lazy(reference) => reference.resolve().expect("filled cell"),
            other => panic!("expected the lazy node to replace the type, got {other}"),
        };
        assert_eq!(resolved.name(), Some("Int"));
    }

    #[test]
    fn bare_type_annotation_from_type_ref() {
        let argument = ArgumentMeta::from_annotation("flag", TypeRef::scalar("Boolean"))
            .expect("no tags at all");
        assert_eq!(argument.name, "flag");
        assert!(matches!(argument.arg_type, TypeRef::Scalar(_)));
    }
}
