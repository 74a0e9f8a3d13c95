//! [`graphql_input_value!`] macro implementation.
//!
//! [`graphql_input_value!`]: graphql_input_value

/// Constructs [`InputValue`]s via JSON-like syntax.
///
/// [`InputValue::Enum`] is constructed with a bare `ident`, so to
/// capture an outer variable as an [`InputValue::Scalar`] surround it
/// with parens: `(var)`. The `null` and `unset` keywords construct
/// [`InputValue::Null`] and [`InputValue::Unset`]; `None` is accepted
/// as a synonym for `null`.
///
/// # Example
///
/// ```rust
/// use bramble::{graphql_input_value, InputValue};
///
/// let _: InputValue = graphql_input_value!(null);
/// let _: InputValue = graphql_input_value!(unset);
/// let _: InputValue = graphql_input_value!(1234);
/// let _: InputValue = graphql_input_value!("test");
/// let _: InputValue = graphql_input_value!([1234, "test", true]);
/// let _: InputValue = graphql_input_value!({"key": "value", "foo": 1234});
/// let _: InputValue = graphql_input_value!({"color": RED});
///
/// let captured = 42;
/// let _: InputValue = graphql_input_value!({"key": (captured)});
/// ```
///
/// [`InputValue`]: crate::InputValue
/// [`InputValue::Enum`]: crate::InputValue::Enum
/// [`InputValue::Null`]: crate::InputValue::Null
/// [`InputValue::Scalar`]: crate::InputValue::Scalar
/// [`InputValue::Unset`]: crate::InputValue::Unset
#[macro_export]
macro_rules! graphql_input_value {
    ///////////
    // Array //
    ///////////

    // Done with trailing comma.
    (@@array [$($elems:expr,)*]) => {
        $crate::InputValue::list(vec![
            $( $elems, )*
        ])
    };

    // Done without trailing comma.
    (@@array [$($elems:expr),*]) => {
        $crate::InputValue::list(vec![
            $( $elems, )*
        ])
    };

    // Next element is `null`.
    (@@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!(null)] $($rest)*
        )
    };

    // Next element is `None`.
    (@@array [$($elems:expr,)*] None $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!(None)] $($rest)*
        )
    };

    // Next element is `unset`.
    (@@array [$($elems:expr,)*] unset $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!(unset)] $($rest)*
        )
    };

    // Next element is an array.
    (@@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!([$($array)*])] $($rest)*
        )
    };

    // Next element is a map.
    (@@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!({$($map)*})] $($rest)*
        )
    };

    // Next element is `true`, `false` or enum ident followed by comma.
    (@@array [$($elems:expr,)*] $ident:ident, $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!($ident),] $($rest)*
        )
    };

    // Next element is `true`, `false` or enum ident without trailing comma.
    (@@array [$($elems:expr,)*] $last:ident ) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!($last)]
        )
    };

    // Next element is an expression followed by comma.
    (@@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!($next),] $($rest)*
        )
    };

    // Last element is an expression with no trailing comma.
    (@@array [$($elems:expr,)*] $last:expr) => {
        $crate::graphql_input_value!(
            @@array [$($elems,)* $crate::graphql_input_value!($last)]
        )
    };

    // Comma after the most recent element.
    (@@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::graphql_input_value!(@@array [$($elems,)*] $($rest)*)
    };

    // Unexpected token after most recent element.
    (@@array [$($elems:expr),*] $unexpected:tt $($rest:tt)*) => {
        $crate::graphql_input_value!(@unexpected $unexpected)
    };

    ////////////
    // Object //
    ////////////

    // Done.
    (@@object $object:ident () () ()) => {};

    // Insert the current entry followed by trailing comma.
    (@@object $object:ident [$($key:tt)+] ($value:expr) , $($rest:tt)*) => {
        $object.insert(($($key)+).into(), $value);
        $crate::graphql_input_value!(@@object $object () ($($rest)*) ($($rest)*));
    };

    // Current entry followed by unexpected token.
    (@@object $object:ident [$($key:tt)+] ($value:expr) $unexpected:tt $($rest:tt)*) => {
        $crate::graphql_input_value!(@unexpected $unexpected);
    };

    // Insert the last entry without trailing comma.
    (@@object $object:ident [$($key:tt)+] ($value:expr)) => {
        $object.insert(($($key)+).into(), $value);
    };

    // Next value is `null`.
    (@@object $object:ident ($($key:tt)+) (: null $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!(null)) $($rest)*
        );
    };

    // Next value is `None`.
    (@@object $object:ident ($($key:tt)+) (: None $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!(None)) $($rest)*
        );
    };

    // Next value is `unset`.
    (@@object $object:ident ($($key:tt)+) (: unset $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!(unset)) $($rest)*
        );
    };

    // Next value is an array.
    (@@object $object:ident ($($key:tt)+) (: [$($array:tt)*] $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!([$($array)*])) $($rest)*
        );
    };

    // Next value is a map.
    (@@object $object:ident ($($key:tt)+) (: {$($map:tt)*} $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!({$($map)*})) $($rest)*
        );
    };

    // Next value is `true`, `false` or enum ident followed by comma.
    (@@object $object:ident ($($key:tt)+) (: $ident:ident , $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!($ident)) , $($rest)*
        );
    };

    // Next value is `true`, `false` or enum ident without trailing comma.
    (@@object $object:ident ($($key:tt)+) (: $last:ident ) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!($last))
        );
    };

    // Next value is an expression followed by comma.
    (@@object $object:ident ($($key:tt)+) (: $value:expr , $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!($value)) , $($rest)*
        );
    };

    // Last value is an expression with no trailing comma.
    (@@object $object:ident ($($key:tt)+) (: $value:expr) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            [$($key)+]
            ($crate::graphql_input_value!($value))
        );
    };

    // Missing value for last entry. Trigger a reasonable error message.
    (@@object $object:ident ($($key:tt)+) (:) $copy:tt) => {
        // "unexpected end of macro invocation"
        $crate::graphql_input_value!();
    };

    // Missing colon and value for last entry. Trigger a reasonable error
    // message.
    (@@object $object:ident ($($key:tt)+) () $copy:tt) => {
        // "unexpected end of macro invocation"
        $crate::graphql_input_value!();
    };

    // Misplaced colon. Trigger a reasonable error message.
    (@@object $object:ident () (: $($rest:tt)*) ($colon:tt $($copy:tt)*)) => {
        // Takes no arguments so "no rules expected the token `:`".
        $crate::graphql_input_value!(@unexpected $colon);
    };

    // Found a comma inside a key. Trigger a reasonable error message.
    (@@object $object:ident ($($key:tt)*) (, $($rest:tt)*) ($comma:tt $($copy:tt)*)) => {
        // Takes no arguments so "no rules expected the token `,`".
        $crate::graphql_input_value!(@unexpected $comma);
    };

    // Key is fully parenthesized. This avoids `clippy::double_parens` false
    // positives because the parenthesization may be necessary here.
    (@@object $object:ident () (($key:expr) : $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            ($key)
            (: $($rest)*) (: $($rest)*)
        );
    };

    // Refuse to absorb colon token into key expression.
    (@@object $object:ident ($($key:tt)*) (: $($unexpected:tt)+) $copy:tt) => {
        $crate::graphql_input_value!(@@unexpected $($unexpected)+);
    };

    // Munch a token into the current key.
    (@@object $object:ident ($($key:tt)*) ($tt:tt $($rest:tt)*) $copy:tt) => {
        $crate::graphql_input_value!(
            @@object $object
            ($($key)* $tt)
            ($($rest)*) ($($rest)*)
        );
    };

    ////////////
    // Errors //
    ////////////

    (@@unexpected) => {};

    //////////////
    // Defaults //
    //////////////

    ([ $($arr:tt)* ]$(,)?) => {
        $crate::graphql_input_value!(@@array [] $($arr)*)
    };

    ({}$(,)?) => {
        $crate::InputValue::Object($crate::indexmap::IndexMap::new())
    };

    ({ $($map:tt)+ }$(,)?) => {
        $crate::InputValue::Object({
            let mut object = $crate::indexmap::IndexMap::new();
            $crate::graphql_input_value!(@@object object () ($($map)*) ($($map)*));
            object
        })
    };

    (null$(,)?) => ($crate::InputValue::null());

    (None$(,)?) => ($crate::InputValue::null());

    (unset$(,)?) => ($crate::InputValue::Unset);

    (true$(,)?) => ($crate::InputValue::from(true));

    (false$(,)?) => ($crate::InputValue::from(false));

    ($enum:ident$(,)?) => ($crate::InputValue::enum_value(stringify!($enum)));

    (($e:expr)$(,)?) => ($crate::InputValue::from($e));

    ($e:expr$(,)?) => ($crate::InputValue::from($e));
}

#[cfg(test)]
mod tests {
    use indexmap::{IndexMap, indexmap};

    type V = crate::InputValue;

    #[test]
    fn null() {
        assert_eq!(graphql_input_value!(null), V::Null);
        assert_eq!(graphql_input_value!(None), V::Null);
    }

    #[test]
    fn unset() {
        assert_eq!(graphql_input_value!(unset), V::Unset);
        assert_eq!(
            graphql_input_value!([unset]),
            V::list(vec![V::Unset]),
        );
        assert_eq!(
            graphql_input_value!({ "key": unset }),
            V::object(indexmap! {"key" => V::Unset}),
        );
    }

    #[test]
    fn scalar() {
        let val = 42;
        assert_eq!(graphql_input_value!(1), V::scalar(1));
        assert_eq!(graphql_input_value!("val"), V::scalar("val"));
        assert_eq!(graphql_input_value!(1.34), V::scalar(1.34));
        assert_eq!(graphql_input_value!(false), V::scalar(false));
        assert_eq!(graphql_input_value!(1 + 2), V::scalar(3));
        assert_eq!(graphql_input_value!((val)), V::scalar(42));
    }

    #[test]
    fn r#enum() {
        assert_eq!(graphql_input_value!(ENUM), V::enum_value("ENUM"));
        assert_eq!(graphql_input_value!(lowercase), V::enum_value("lowercase"));
    }

    #[test]
    fn list() {
        let val = 42;

        assert_eq!(graphql_input_value!([]), V::list(vec![]));

        assert_eq!(graphql_input_value!([null]), V::list(vec![V::Null]));

        assert_eq!(graphql_input_value!([1]), V::list(vec![V::scalar(1)]));
        assert_eq!(graphql_input_value!([1 + 2]), V::list(vec![V::scalar(3)]));
        assert_eq!(graphql_input_value!([(val)]), V::list(vec![V::scalar(42)]));

        assert_eq!(
            graphql_input_value!([ENUM]),
            V::list(vec![V::enum_value("ENUM")]),
        );

        assert_eq!(
            graphql_input_value!([1, [2], 3]),
            V::list(vec![
                V::scalar(1),
                V::list(vec![V::scalar(2)]),
                V::scalar(3),
            ]),
        );
        assert_eq!(
            graphql_input_value!([1, [ENUM], (val)]),
            V::list(vec![
                V::scalar(1),
                V::list(vec![V::enum_value("ENUM")]),
                V::scalar(42),
            ]),
        );
    }

    #[test]
    fn object() {
        let val = 42;
        assert_eq!(
            graphql_input_value!({}),
            V::object(IndexMap::<String, _>::new()),
        );

        assert_eq!(
            graphql_input_value!({ "key": null }),
            V::object(indexmap! {"key" => V::Null}),
        );

        assert_eq!(
            graphql_input_value!({"key": 123}),
            V::object(indexmap! {"key" => V::scalar(123)}),
        );
        assert_eq!(
            graphql_input_value!({ "key": (val) }),
            V::object(indexmap! {"key" => V::scalar(42)}),
        );
        assert_eq!(
            graphql_input_value!({ "key": ENUM }),
            V::object(indexmap! {"key" => V::enum_value("ENUM")}),
        );

        assert_eq!(
            graphql_input_value!({
                "inner": {
                    "key1": (val),
                    "key2": "val",
                    "key3": [{
                        "inner": 42,
                    }, {
                        "inner": ENUM,
                    }],
                    "key4": [1, ["val", 1 + 3], null],
                },
            }),
            V::object(indexmap! {
                "inner" => V::object(indexmap! {
                    "key1" => V::scalar(42),
                    "key2" => V::scalar("val"),
                    "key3" => V::list(vec![
                        V::object(indexmap! {
                            "inner" => V::scalar(42),
                        }),
                        V::object(indexmap! {
                            "inner" => V::enum_value("ENUM"),
                        }),
                    ]),
                    "key4" => V::list(vec![
                        V::scalar(1),
                        V::list(vec![
                            V::scalar("val"),
                            V::scalar(4),
                        ]),
                        V::Null,
                    ]),
                }),
            }),
        );
    }

    #[test]
    fn option() {
        let val = Some(42);

        assert_eq!(graphql_input_value!(None), V::Null);
        assert_eq!(graphql_input_value!(Some(42)), V::scalar(42));
        assert_eq!(graphql_input_value!((val)), V::scalar(42));
    }
}
