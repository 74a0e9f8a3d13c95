use std::fmt;

use derive_more::with_trait::Display;
use indexmap::IndexMap;
use itertools::Itertools as _;

/// A primitive leaf value of the wire format.
///
/// Covers the four value shapes a transport can deliver as a single
/// token. Custom scalars arrive as one of these shapes too and are
/// interpreted by the execution layer, not here.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, Debug, Display, PartialEq)]
pub enum ScalarValue {
    Int(i32),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl ScalarValue {
    /// Views the underlying int value, if present.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Views the underlying float value, if present.
    ///
    /// Ints widen to floats, matching the usual numeric coercion rules
    /// for GraphQL `Float` inputs.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    /// Views the underlying string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Views the underlying boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// A raw, untyped value arriving from query execution.
///
/// This is the input counterpart of a response value: a JSON-like tree
/// of objects, lists and scalars, not yet checked against any schema
/// type. [`crate::coerce_argument`] turns it into its schema-typed
/// shape.
///
/// Next to `null`, the tree distinguishes the [`InputValue::Unset`]
/// sentinel: "no value was supplied at all". The two must never be
/// conflated — a mutation deleting a field on explicit `null` and
/// leaving it alone when the argument is omitted relies on exactly this
/// distinction.
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    /// An explicitly provided `null`.
    Null,
    /// The distinguished "no value was supplied" sentinel.
    ///
    /// Distinct from [`InputValue::Null`] and from a key being absent
    /// in an enclosing object. Coercion propagates it unchanged.
    Unset,
    /// A primitive leaf value.
    Scalar(ScalarValue),
    /// An enum literal, kept as its uncoerced name.
    Enum(String),
    /// An ordered list of values.
    List(Vec<InputValue>),
    /// A mapping from wire-format field names to values, in the order
    /// the transport delivered them.
    Object(IndexMap<String, InputValue>),
}

impl InputValue {
    /// Constructs a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Constructs a scalar value.
    pub fn scalar<T: Into<ScalarValue>>(v: T) -> Self {
        Self::Scalar(v.into())
    }

    /// Constructs an enum value.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Constructs a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Constructs an object value, converting keys into [`String`]s.
    pub fn object<K: Into<String>>(o: IndexMap<K, Self>) -> Self {
        Self::Object(o.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Does the value represent a `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Does the value represent the "no value was supplied" sentinel?
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Views the underlying scalar value, if present.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Views the underlying enum name, if present.
    pub fn as_enum_value(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => Some(e.as_str()),
            _ => None,
        }
    }

    /// Views the underlying int value, if present.
    pub fn as_int_value(&self) -> Option<i32> {
        self.as_scalar().and_then(ScalarValue::as_int)
    }

    /// Views the underlying float value, if present.
    pub fn as_float_value(&self) -> Option<f64> {
        self.as_scalar().and_then(ScalarValue::as_float)
    }

    /// Views the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        self.as_scalar().and_then(ScalarValue::as_str)
    }

    /// Views this value as an object, borrowing keys and values.
    pub fn to_object_value(&self) -> Option<IndexMap<&str, &Self>> {
        match self {
            Self::Object(o) => Some(o.iter().map(|(k, v)| (k.as_str(), v)).collect()),
            _ => None,
        }
    }

    /// Views this value as a list, borrowing its elements.
    pub fn to_list_value(&self) -> Option<Vec<&Self>> {
        match self {
            Self::List(l) => Some(l.iter().collect()),
            _ => None,
        }
    }

    /// Unwraps this value into its object entries, if it is an object.
    pub fn into_object(self) -> Option<IndexMap<String, Self>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Unwraps this value into its list elements, if it is a list.
    pub fn into_list(self) -> Option<Vec<Self>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Unset => write!(f, "unset"),
            Self::Scalar(ScalarValue::String(s)) => write!(f, "\"{s}\""),
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(l) => write!(f, "[{}]", l.iter().format(", ")),
            Self::Object(o) => write!(
                f,
                "{{{}}}",
                o.iter()
                    .format_with(", ", |(k, v), g| g(&format_args!("{k}: {v}"))),
            ),
        }
    }
}

impl<T> From<Option<T>> for InputValue
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl From<i32> for InputValue {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}

impl From<f64> for InputValue {
    fn from(f: f64) -> Self {
        Self::scalar(f)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}
