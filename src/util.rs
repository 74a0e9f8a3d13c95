use std::borrow::Cow;

/// Converts a `snake_case` identifier into its `camelCase` spelling.
///
/// A leading underscore is stripped, so `_unused`-style parameter names
/// translate the same way their plain counterparts do. Returns the
/// input unallocated when no conversion is needed.
pub fn to_camel_case(s: &str) -> Cow<'_, str> {
    let s = s.strip_prefix('_').unwrap_or(s);

    if !s.contains('_') {
        return Cow::Borrowed(s);
    }

    let mut dest = String::with_capacity(s.len());
    for (i, part) in s.split('_').enumerate() {
        if i == 0 {
            dest.push_str(part);
        } else if let Some(first) = part.chars().next() {
            dest.extend(first.to_uppercase());
            dest.push_str(&part[first.len_utf8()..]);
        }
    }

    Cow::Owned(dest)
}

#[test]
fn test_to_camel_case() {
    assert_eq!(&to_camel_case("test")[..], "test");
    assert_eq!(&to_camel_case("_test")[..], "test");
    assert_eq!(&to_camel_case("first_second")[..], "firstSecond");
    assert_eq!(&to_camel_case("first_")[..], "first");
    assert_eq!(&to_camel_case("a_b_c")[..], "aBC");
    assert_eq!(&to_camel_case("a_bc")[..], "aBc");
    assert_eq!(&to_camel_case("a_b")[..], "aB");
    assert_eq!(&to_camel_case("a")[..], "a");
    assert_eq!(&to_camel_case("")[..], "");
}
