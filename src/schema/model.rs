//! Registry of the scalar types known to a schema.

use std::fmt;

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use fnv::FnvHashMap;

use crate::{
    coercion::CoercionError,
    value::{InputValue, ScalarValue},
};

/// Shortcut for a scalar's input-value shape-checking function.
pub type InputValueParseFn = fn(&InputValue) -> Result<(), CoercionError>;

/// Scalar type metadata.
pub struct ScalarMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub specified_by_url: Option<ArcStr>,
    pub(crate) try_parse_fn: InputValueParseFn,
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type with the specified `name` and
    /// shape-checking function.
    pub fn new(name: impl Into<ArcStr>, try_parse_fn: InputValueParseFn) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            try_parse_fn,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the [specification URL][0] for this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set URL.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    #[must_use]
    pub fn specified_by_url(mut self, url: impl Into<ArcStr>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    /// Runs this scalar's shape check against `value`.
    ///
    /// Invoked by the execution layer when validating literals; the
    /// coercion engine itself only tests registry membership.
    pub fn try_parse(&self, value: &InputValue) -> Result<(), CoercionError> {
        (self.try_parse_fn)(value)
    }
}

impl fmt::Debug for ScalarMeta {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ScalarMeta")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Schema-build-time error: the same scalar name registered twice.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Scalar `{scalar_name}` has already been registered")]
pub struct ScalarAlreadyRegisteredError {
    /// Name of the scalar the second registration collided on.
    #[error(not(source))]
    pub scalar_name: ArcStr,
}

/// The set of scalar types a schema knows about.
///
/// Built once at schema-construction time and read-only afterwards.
/// During coercion the registry answers a single question — "is this
/// type identity a registered scalar" — while the per-scalar shape
/// checks are left to the execution layer.
#[derive(Debug, Default)]
pub struct ScalarRegistry {
    scalars: FnvHashMap<ArcStr, ScalarMeta>,
}

impl ScalarRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the [built-in scalars][0] `Int`,
    /// `Float`, `String`, `Boolean` and `ID` pre-registered.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec-Scalars
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for meta in [
            ScalarMeta::new("Int", parse_int),
            ScalarMeta::new("Float", parse_float),
            ScalarMeta::new("String", parse_string),
            ScalarMeta::new("Boolean", parse_boolean),
            ScalarMeta::new("ID", parse_id),
        ] {
            registry.scalars.insert(meta.name.clone(), meta);
        }
        registry
    }

    /// Registers `scalar`, rejecting duplicate names.
    pub fn register(&mut self, scalar: ScalarMeta) -> Result<(), ScalarAlreadyRegisteredError> {
        if self.scalars.contains_key(&scalar.name) {
            return Err(ScalarAlreadyRegisteredError {
                scalar_name: scalar.name,
            });
        }
        self.scalars.insert(scalar.name.clone(), scalar);
        Ok(())
    }

    /// Is `name` a registered scalar?
    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Accesses a registered scalar's metadata by name.
    pub fn get(&self, name: &str) -> Option<&ScalarMeta> {
        self.scalars.get(name)
    }

    /// Number of registered scalars.
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

fn parse_int(value: &InputValue) -> Result<(), CoercionError> {
    match value {
        InputValue::Scalar(ScalarValue::Int(_)) => Ok(()),
        other => Err(CoercionError::mismatch("an `Int` scalar", other)),
    }
}

fn parse_float(value: &InputValue) -> Result<(), CoercionError> {
    match value {
        // Ints widen to floats on the way in.
        InputValue::Scalar(ScalarValue::Float(_) | ScalarValue::Int(_)) => Ok(()),
        other => Err(CoercionError::mismatch("a `Float` scalar", other)),
    }
}

fn parse_string(value: &InputValue) -> Result<(), CoercionError> {
    match value {
        InputValue::Scalar(ScalarValue::String(_)) => Ok(()),
        other => Err(CoercionError::mismatch("a `String` scalar", other)),
    }
}

fn parse_boolean(value: &InputValue) -> Result<(), CoercionError> {
    match value {
        InputValue::Scalar(ScalarValue::Boolean(_)) => Ok(()),
        other => Err(CoercionError::mismatch("a `Boolean` scalar", other)),
    }
}

fn parse_id(value: &InputValue) -> Result<(), CoercionError> {
    match value {
        // IDs are serialized as strings but accept int input too.
        InputValue::Scalar(ScalarValue::String(_) | ScalarValue::Int(_)) => Ok(()),
        other => Err(CoercionError::mismatch("an `ID` scalar", other)),
    }
}
