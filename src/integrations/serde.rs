//! (De)serialization of wire values, for transports speaking JSON.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    de::{self, Deserializer, MapAccess, SeqAccess},
    ser::Serializer,
    Deserialize, Serialize,
};

use crate::value::{InputValue, ScalarValue};

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(i) => ser.serialize_i32(*i),
            Self::Float(f) => ser.serialize_f64(*f),
            Self::String(s) => ser.serialize_str(s),
            Self::Boolean(b) => ser.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarValue {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = ScalarValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a primitive scalar value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                Ok(ScalarValue::Boolean(b))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
                // Numbers with no fractional part arrive as integers
                // whatever their magnitude; widen the ones `Int` can't
                // hold instead of failing.
                Ok(i32::try_from(n)
                    .map(ScalarValue::Int)
                    .unwrap_or(ScalarValue::Float(n as f64)))
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
                Ok(i32::try_from(n)
                    .map(ScalarValue::Int)
                    .unwrap_or(ScalarValue::Float(n as f64)))
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
                Ok(ScalarValue::Float(f))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                self.visit_string(s.into())
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(ScalarValue::String(s))
            }
        }

        de.deserialize_any(Visitor)
    }
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            // JSON has no absent-value literal, so `Unset` degrades to
            // null on the way out; it is never read back (an absent
            // key is its wire representation).
            Self::Null | Self::Unset => ser.serialize_unit(),
            Self::Scalar(s) => s.serialize(ser),
            Self::Enum(e) => ser.serialize_str(e),
            Self::List(l) => ser.collect_seq(l),
            Self::Object(o) => ser.collect_map(o),
        }
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = InputValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a valid input value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                Ok(InputValue::scalar(b))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
                ScalarValue::deserialize(de::value::I64Deserializer::new(n)).map(InputValue::Scalar)
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
                ScalarValue::deserialize(de::value::U64Deserializer::new(n)).map(InputValue::Scalar)
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
                Ok(InputValue::scalar(f))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(InputValue::scalar(s))
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(InputValue::scalar(s))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(InputValue::Null)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(InputValue::Null)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(InputValue::List(elements))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut object = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, InputValue>()? {
                    object.insert(key, value);
                }
                Ok(InputValue::Object(object))
            }
        }

        de.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{graphql_input_value, value::InputValue};

    #[test]
    fn json_deserializes_into_wire_values() {
        let value: InputValue = serde_json::from_value(json!({
            "name": "ada",
            "age": 36,
            "score": 9.5,
            "active": true,
            "tags": ["a", "b"],
            "address": null,
        }))
        .expect("a JSON tree");

        assert_eq!(
            value,
            graphql_input_value!({
                "name": "ada",
                "age": 36,
                "score": 9.5,
                "active": true,
                "tags": ["a", "b"],
                "address": null,
            }),
        );
    }

    #[test]
    fn wire_values_serialize_to_json() {
        let json = serde_json::to_value(graphql_input_value!({
            "name": "ada",
            "tags": [1, 2],
            "address": null,
        }))
        .expect("serializable");

        assert_eq!(
            json,
            json!({"name": "ada", "tags": [1, 2], "address": null}),
        );
    }

    #[test]
    fn unset_serializes_as_null() {
        let json = serde_json::to_value(graphql_input_value!(unset)).expect("serializable");
        assert_eq!(json, serde_json::Value::Null);
    }

    #[test]
    fn enums_serialize_as_their_name() {
        let json = serde_json::to_value(graphql_input_value!(RED)).expect("serializable");
        assert_eq!(json, json!("RED"));
    }

    #[test]
    fn large_integers_widen_to_float() {
        let value: InputValue = serde_json::from_value(json!(10_000_000_000_i64))
            .expect("a JSON number");
        assert_eq!(value.as_float_value(), Some(1e10));
        assert_eq!(value.as_int_value(), None);
    }
}
