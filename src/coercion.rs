//! Type-directed conversion of wire values into schema-typed values.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use indexmap::IndexMap;

use crate::{
    arguments::ArgumentMeta,
    naming::NamingPolicy,
    schema::{meta::TypeRef, model::ScalarRegistry},
    value::InputValue,
};

/// Error raised while coercing a wire value.
///
/// Both kinds point at the schema, not at the user: an unsupported type
/// is a construction defect, and a shape mismatch means the upstream
/// validation this engine assumes did not run. Coercion is pure, so the
/// same inputs always fail the same way; no partial result survives a
/// failure.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum CoercionError {
    /// The type graph contains a node no coercion rule matches.
    #[display("type `{type_name}` has no coercion rule")]
    UnsupportedType {
        /// Rendering of the offending type node.
        #[error(not(source))]
        type_name: String,
    },
    /// The wire value's shape does not match the declared type.
    #[display("expected {expected}, found `{found}`")]
    TypeMismatch {
        /// What the declared type called for.
        expected: &'static str,
        /// Rendering of the offending value.
        found: String,
    },
}

impl CoercionError {
    pub(crate) fn unsupported(type_ref: &TypeRef) -> Self {
        Self::UnsupportedType {
            type_name: type_ref.to_string(),
        }
    }

    pub(crate) fn mismatch(expected: &'static str, found: &InputValue) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.to_string(),
        }
    }
}

/// Converts a single wire `value` into the shape declared by
/// `arg_type`.
///
/// The conversion is recursive and type-directed, with the dispatch
/// order fixed:
///
/// 1. `null` returns `null` immediately, whatever the type — an
///    explicit null short-circuits all wrapping.
/// 2. [`InputValue::Unset`] propagates unchanged.
/// 3. An [`TypeRef::Optional`] wrapper is a pass-through once the two
///    cases above are handled.
/// 4. A [`TypeRef::List`] maps element-wise, preserving order and
///    length; any element failing fails the whole list.
/// 5. A registered [`TypeRef::Scalar`] passes the value through
///    unchanged — parsing is the registry's concern, not this layer's.
/// 6. A [`TypeRef::Enum`] passes through unchanged likewise.
/// 7. A [`TypeRef::Lazy`] node is resolved — only now, so circular
///    references are never forced eagerly — and dispatch restarts on
///    the resolved type.
/// 8. A [`TypeRef::InputObject`] maps declared fields from their
///    wire-format names (per the naming policy) to their internal
///    names, recursing per field; fields absent from the value are
///    omitted from the output entirely, letting the target's own
///    defaults apply.
///
/// Anything else — an unregistered scalar identity, an unresolvable
/// lazy reference — is a schema-construction bug and fails with
/// [`CoercionError::UnsupportedType`].
///
/// The value tree is never mutated; output is freshly allocated.
pub fn coerce_argument(
    value: &InputValue,
    arg_type: &TypeRef,
    registry: &ScalarRegistry,
    naming: &dyn NamingPolicy,
) -> Result<InputValue, CoercionError> {
    if value.is_null() {
        return Ok(InputValue::Null);
    }
    if value.is_unset() {
        return Ok(InputValue::Unset);
    }

    match arg_type {
        TypeRef::Optional(inner) => coerce_argument(value, inner, registry, naming),
        TypeRef::List(element) => {
            let items = value
                .to_list_value()
                .ok_or_else(|| CoercionError::mismatch("a list", value))?;
            let coerced = items
                .into_iter()
                .map(|item| coerce_argument(item, element, registry, naming))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(InputValue::List(coerced))
        }
        TypeRef::Scalar(name) => {
            if registry.contains(name) {
                Ok(value.clone())
            } else {
                Err(CoercionError::unsupported(arg_type))
            }
        }
        TypeRef::Enum(_) => Ok(value.clone()),
        TypeRef::Lazy(reference) => {
            let resolved = reference
                .resolve()
                .ok_or_else(|| CoercionError::unsupported(arg_type))?;
            coerce_argument(value, &resolved, registry, naming)
        }
        TypeRef::InputObject(meta) => {
            let object = value
                .to_object_value()
                .ok_or_else(|| CoercionError::mismatch("an input object", value))?;
            let mut coerced = IndexMap::new();
            for field in &meta.fields {
                let wire_name = naming.field_name(field);
                if let Some(field_value) = object.get(wire_name.as_str()) {
                    coerced.insert(
                        field.name.to_string(),
                        coerce_argument(field_value, &field.field_type, registry, naming)?,
                    );
                }
            }
            Ok(InputValue::Object(coerced))
        }
    }
}

/// A whole call's coerced arguments, keyed by internal argument name.
///
/// Produced by [`bind_arguments`]; the resolver is invoked with these
/// as keyword-style arguments, and keys absent here let the resolver's
/// own defaults apply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundArguments {
    args: IndexMap<ArcStr, InputValue>,
}

impl BoundArguments {
    /// Accesses the coerced value bound to the argument `name`.
    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.args.get(name)
    }

    /// Was a value bound for the argument `name`?
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Were no arguments bound at all?
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterates over the bound `(name, value)` pairs in declaration
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, ArcStr, InputValue> {
        self.args.iter()
    }

    /// Unwraps the underlying mapping.
    pub fn into_inner(self) -> IndexMap<ArcStr, InputValue> {
        self.args
    }
}

/// Coerces a whole call's wire arguments against its declared argument
/// list.
///
/// Walks `arguments` in declaration order: each argument's wire-format
/// name is computed by the naming policy, and if `wire_args` carries
/// that key the value is coerced against the argument's type and bound
/// under the argument's *internal* name. Absent arguments are omitted
/// — never bound to `null` or [`InputValue::Unset`] — and wire keys
/// matching no declared argument are ignored.
///
/// An empty `arguments` slice yields an empty binding without looking
/// at `wire_args` at all.
pub fn bind_arguments(
    wire_args: &IndexMap<String, InputValue>,
    arguments: &[ArgumentMeta],
    registry: &ScalarRegistry,
    naming: &dyn NamingPolicy,
) -> Result<BoundArguments, CoercionError> {
    if arguments.is_empty() {
        return Ok(BoundArguments::default());
    }

    let mut bound = IndexMap::new();

    for argument in arguments {
        let wire_name = naming.argument_name(argument);
        if let Some(value) = wire_args.get(&wire_name) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                argument = %argument.name,
                wire_name = %wire_name,
                "coercing argument"
            );
            bound.insert(
                argument.name.clone(),
                coerce_argument(value, &argument.arg_type, registry, naming)?,
            );
        }
    }

    Ok(BoundArguments { args: bound })
}
