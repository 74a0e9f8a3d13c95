//! Translation of declared identifiers into wire-format names.

use crate::{arguments::ArgumentMeta, schema::meta::InputFieldMeta, util::to_camel_case};

/// Policy translating declared (internal) identifiers into the names
/// they carry on the wire.
///
/// A policy must be a pure, deterministic function of the descriptor it
/// is given: the coercion engine calls it once per argument or field
/// per conversion, at every nesting depth, and relies on it returning
/// the same name every time. Explicit renames on a descriptor always
/// win over the conversion rule.
pub trait NamingPolicy: Send + Sync {
    /// Converts a declared identifier into its wire-format spelling.
    fn convert(&self, name: &str) -> String;

    /// Wire-format name of an argument.
    ///
    /// An explicit rename on the argument takes precedence.
    fn argument_name(&self, argument: &ArgumentMeta) -> String {
        match argument.graphql_name.as_deref() {
            Some(name) => name.into(),
            None => self.convert(&argument.name),
        }
    }

    /// Wire-format name of an input object field.
    ///
    /// An explicit rename on the field takes precedence.
    fn field_name(&self, field: &InputFieldMeta) -> String {
        match field.graphql_name.as_deref() {
            Some(name) => name.into(),
            None => self.convert(&field.name),
        }
    }
}

/// The default naming policy: `snake_case` declarations become
/// `camelCase` wire names.
#[derive(Clone, Copy, Debug, Default)]
pub struct CamelCaseNaming;

impl NamingPolicy for CamelCaseNaming {
    fn convert(&self, name: &str) -> String {
        to_camel_case(name).into_owned()
    }
}

/// A naming policy passing declared names through untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerbatimNaming;

impl NamingPolicy for VerbatimNaming {
    fn convert(&self, name: &str) -> String {
        name.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        arguments::ArgumentMeta,
        schema::meta::{InputFieldMeta, TypeRef},
    };

    use super::{CamelCaseNaming, NamingPolicy as _, VerbatimNaming};

    #[test]
    fn converts_snake_case_arguments() {
        let argument = ArgumentMeta::new("first_name", TypeRef::scalar("String"));

        assert_eq!(CamelCaseNaming.argument_name(&argument), "firstName");
        assert_eq!(VerbatimNaming.argument_name(&argument), "first_name");
    }

    #[test]
    fn explicit_rename_wins() {
        let field = InputFieldMeta::new("first_name", TypeRef::scalar("String"))
            .graphql_name("firstNameOverride");

        assert_eq!(CamelCaseNaming.field_name(&field), "firstNameOverride");
        assert_eq!(VerbatimNaming.field_name(&field), "firstNameOverride");
    }
}
