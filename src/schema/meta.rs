//! Types used to describe the input side of a GraphQL schema.

use std::{
    fmt,
    sync::{Arc, OnceLock},
};

use arcstr::ArcStr;

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/argument is not deprecated.
    Current,
    /// The field/argument is deprecated, with an optional reason.
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the item is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            DeprecationStatus::Current => false,
            DeprecationStatus::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            DeprecationStatus::Current => None,
            DeprecationStatus::Deprecated(rsn) => rsn.as_deref(),
        }
    }
}

/// A lazily resolved reference to another node of the type graph.
///
/// Breaks declaration-order and circular-reference cycles: the referenced
/// type is produced by a closure that runs when coercion actually
/// traverses into the reference with real data, never at declaration
/// time. Repeated resolution is fine — the closure must be pure.
///
/// Resolution yields [`None`] when the target was never supplied (an
/// unfilled [`TypeCell`], for instance), which the coercion engine
/// reports as a schema-construction defect.
#[derive(Clone)]
pub struct LazyTypeRef {
    resolve_fn: Arc<dyn Fn() -> Option<TypeRef> + Send + Sync>,
}

impl LazyTypeRef {
    /// Wraps `f` as a lazily resolved type reference.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Option<TypeRef> + Send + Sync + 'static,
    {
        Self {
            resolve_fn: Arc::new(f),
        }
    }

    /// Resolves the referenced type.
    pub fn resolve(&self) -> Option<TypeRef> {
        (self.resolve_fn)()
    }
}

impl fmt::Debug for LazyTypeRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("LazyTypeRef").finish_non_exhaustive()
    }
}

/// A fill-once slot closing self-referential type graphs.
///
/// Hand out [`TypeCell::type_ref`] while declaring the type, then
/// [`TypeCell::fill`] the cell with the finished type:
///
/// ```rust
/// use bramble::{InputFieldMeta, InputObjectMeta, TypeCell, TypeRef};
///
/// let cell = TypeCell::new();
/// let node = InputObjectMeta::new(
///     "Node",
///     vec![InputFieldMeta::new("parent", TypeRef::optional(cell.type_ref()))],
/// )
/// .into_type_ref();
/// cell.fill(node);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypeCell {
    slot: Arc<OnceLock<TypeRef>>,
}

impl TypeCell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the cell's type. Returns `false` if it was already
    /// filled; the first fill wins.
    pub fn fill(&self, ty: TypeRef) -> bool {
        self.slot.set(ty).is_ok()
    }

    /// A [`TypeRef::Lazy`] node reading this cell on resolution.
    pub fn type_ref(&self) -> TypeRef {
        let slot = Arc::clone(&self.slot);
        TypeRef::Lazy(LazyTypeRef::new(move || slot.get().cloned()))
    }
}

/// A node in a schema's input type graph.
///
/// The closed set of type shapes the coercion engine understands. Type
/// graphs are built once at schema-construction time and shared
/// read-only afterwards; cycles exist only through [`TypeRef::Lazy`]
/// nodes, so traversal is bounded by the depth of the data, not of the
/// graph.
#[derive(Clone, Debug)]
pub enum TypeRef {
    /// A named scalar, checked against the [`ScalarRegistry`] when a
    /// value is coerced.
    ///
    /// [`ScalarRegistry`]: crate::ScalarRegistry
    Scalar(ArcStr),
    /// A named enum; values pass through uncoerced, validation being
    /// the execution layer's concern.
    Enum(ArcStr),
    /// A type whose values may also be `null`.
    Optional(Box<TypeRef>),
    /// A homogeneous list of the wrapped element type.
    List(Box<TypeRef>),
    /// A lazily resolved reference breaking reference cycles.
    Lazy(LazyTypeRef),
    /// A named input object with declared fields.
    InputObject(Arc<InputObjectMeta>),
}

impl TypeRef {
    /// A scalar type reference with the given `name`.
    pub fn scalar(name: impl Into<ArcStr>) -> Self {
        Self::Scalar(name.into())
    }

    /// An enum type reference with the given `name`.
    pub fn enum_type(name: impl Into<ArcStr>) -> Self {
        Self::Enum(name.into())
    }

    /// Wraps `inner` so that `null` becomes a valid value.
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(inner.into())
    }

    /// A list of `element` values.
    pub fn list(element: TypeRef) -> Self {
        Self::List(element.into())
    }

    /// A lazily resolved reference produced by `f` on traversal.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> Option<TypeRef> + Send + Sync + 'static,
    {
        Self::Lazy(LazyTypeRef::new(f))
    }

    /// Accesses the name of the type, if applicable.
    ///
    /// Optional and list wrappers and unresolved lazy references don't
    /// have names.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scalar(name) | Self::Enum(name) => Some(name),
            Self::InputObject(meta) => Some(&meta.name),
            Self::Optional(_) | Self::List(_) | Self::Lazy(_) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_type(t: &TypeRef, f: &mut fmt::Formatter<'_>, non_null: bool) -> fmt::Result {
            let bang = if non_null { "!" } else { "" };
            match t {
                TypeRef::Optional(inner) => write_type(inner, f, false),
                TypeRef::List(element) => write!(f, "[{element}]{bang}"),
                TypeRef::Scalar(name) | TypeRef::Enum(name) => write!(f, "{name}{bang}"),
                TypeRef::InputObject(meta) => write!(f, "{}{bang}", meta.name),
                TypeRef::Lazy(_) => write!(f, "<lazy>{bang}"),
            }
        }
        write_type(self, f, true)
    }
}

/// Input object metadata: a named, ordered list of declared fields.
#[derive(Clone, Debug)]
pub struct InputObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<InputFieldMeta>,
}

impl InputObjectMeta {
    /// Builds a new [`InputObjectMeta`] with the specified `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: Vec<InputFieldMeta>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
        }
    }

    /// Sets the `description` of this [`InputObjectMeta`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Accesses a declared field by its internal name.
    pub fn field_by_name(&self, name: &str) -> Option<&InputFieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wraps this [`InputObjectMeta`] into a [`TypeRef`].
    pub fn into_type_ref(self) -> TypeRef {
        TypeRef::InputObject(Arc::new(self))
    }
}

/// Metadata for a single input object field.
#[derive(Clone, Debug)]
pub struct InputFieldMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub graphql_name: Option<ArcStr>,
    #[doc(hidden)]
    pub field_type: TypeRef,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
}

impl InputFieldMeta {
    /// Builds a new [`InputFieldMeta`] of the given `field_type` with
    /// the given internal `name`.
    pub fn new(name: impl Into<ArcStr>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            graphql_name: None,
            field_type,
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets an explicit wire-format name, bypassing the naming policy.
    ///
    /// Overwrites any previously set name.
    #[must_use]
    pub fn graphql_name(mut self, name: impl Into<ArcStr>) -> Self {
        self.graphql_name = Some(name.into());
        self
    }

    /// Sets the `description` of this [`InputFieldMeta`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets this [`InputFieldMeta`] as deprecated with an optional
    /// `reason`.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DeprecationStatus, InputFieldMeta, InputObjectMeta, TypeCell, TypeRef};

    #[test]
    fn display_uses_graphql_notation() {
        assert_eq!(TypeRef::scalar("Int").to_string(), "Int!");
        assert_eq!(
            TypeRef::optional(TypeRef::scalar("Int")).to_string(),
            "Int",
        );
        assert_eq!(
            TypeRef::list(TypeRef::scalar("Int")).to_string(),
            "[Int!]!",
        );
        assert_eq!(
            TypeRef::optional(TypeRef::list(TypeRef::optional(TypeRef::enum_type("Color"))))
                .to_string(),
            "[Color]",
        );
    }

    #[test]
    fn type_cell_resolves_after_fill() {
        let cell = TypeCell::new();
        let lazy = cell.type_ref();

        let TypeRef::Lazy(ref reference) = lazy else {
            panic!("expected a lazy node");
        };
        assert!(reference.resolve().is_none());

        assert!(cell.fill(TypeRef::scalar("Int")));
        assert!(!cell.fill(TypeRef::scalar("Float")));

        let resolved = reference.resolve().expect("cell was filled");
        assert_eq!(resolved.name(), Some("Int"));
    }

    #[test]
    fn field_lookup_and_builders() {
        let object = InputObjectMeta::new(
            "Point",
            vec![
                InputFieldMeta::new("x", TypeRef::scalar("Int")),
                InputFieldMeta::new("y", TypeRef::scalar("Int"))
                    .description("vertical coordinate")
                    .deprecated(Some("use `x` twice".into())),
            ],
        )
        .description("a 2D point");

        assert!(object.field_by_name("z").is_none());
        let y = object.field_by_name("y").expect("declared field");
        assert!(y.deprecation_status.is_deprecated());
        assert_eq!(y.deprecation_status.reason(), Some("use `x` twice"));
        assert_eq!(
            object.clone().into_type_ref().name(),
            Some("Point"),
        );
        assert_eq!(DeprecationStatus::Current.reason(), None);
    }
}
