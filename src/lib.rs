#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Required by the `graphql_input_value!` macro expansion.
#[doc(hidden)]
pub use indexmap;

mod arguments;
mod coercion;
mod integrations;
mod macros;
mod naming;
mod schema;
mod util;
mod value;

pub use crate::util::to_camel_case;

pub use crate::{
    arguments::{
        AnnotationTag, ArgumentAnnotation, ArgumentMeta, MultipleArgumentMetadataError,
        TypeAnnotation,
    },
    coercion::{BoundArguments, CoercionError, bind_arguments, coerce_argument},
    naming::{CamelCaseNaming, NamingPolicy, VerbatimNaming},
    schema::{
        meta::{DeprecationStatus, InputFieldMeta, InputObjectMeta, LazyTypeRef, TypeCell, TypeRef},
        model::{InputValueParseFn, ScalarAlreadyRegisteredError, ScalarMeta, ScalarRegistry},
    },
    value::{InputValue, ScalarValue},
};
