//! Simple-name derivation for qualified type names.
//!
//! [`simple_name`] reduces a fully qualified type name to its innermost
//! unqualified segment. Rust paths from [`std::any::type_name`] are the
//! primary input, but dotted names using `$` as a nested-type separator
//! with numeric anonymous-type suffixes (the convention of JVM-style
//! runtime metadata) are normalised by the same pass, so labels sourced
//! from foreign type names format consistently.

use std::borrow::Cow;

/// Derive the simple (innermost, unqualified) name from a fully qualified
/// type name.
///
/// Generic arguments and trailing closure markers are stripped, anonymous
/// numeric markers after a `$` separator are collapsed so an anonymous
/// instance reports its enclosing type, and the remainder is cut after the
/// last nested-type or namespace separator. Borrows from the input unless
/// the anonymous collapse forces a rewrite. A name without separators is
/// returned whole; the empty string comes back only from degenerate inputs
/// such as a name ending in a namespace separator.
///
/// # Examples
///
/// ```
/// use debrief::simple_name;
///
/// assert_eq!(simple_name("alloc::string::String"), "String");
/// assert_eq!(simple_name("com.example.Outer$Inner"), "Inner");
/// assert_eq!(simple_name("com.example.Outer$1"), "Outer");
/// ```
#[must_use]
pub fn simple_name(qualified: &str) -> Cow<'_, str> {
    let base = strip_generics(qualified);
    let base = base.trim_end_matches("::{{closure}}");
    match collapse_anonymous_indices(base) {
        Cow::Borrowed(name) => Cow::Borrowed(innermost_segment(name)),
        Cow::Owned(name) => Cow::Owned(innermost_segment(&name).to_owned()),
    }
}

// Generic arguments never contribute to the simple name.
fn strip_generics(name: &str) -> &str {
    name.find('<').map_or(name, |start| &name[..start])
}

/// Collapse every `$` followed by decimal digits into a bare `$`, so
/// anonymous markers such as `Outer$1` and `Outer$1Inner` lose their index.
fn collapse_anonymous_indices(name: &str) -> Cow<'_, str> {
    let has_index = name
        .as_bytes()
        .windows(2)
        .any(|pair| matches!(pair, [b'$', digit] if digit.is_ascii_digit()));
    if !has_index {
        return Cow::Borrowed(name);
    }

    let mut collapsed = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(current) = chars.next() {
        collapsed.push(current);
        if current == '$' {
            while chars.next_if(char::is_ascii_digit).is_some() {}
        }
    }
    Cow::Owned(collapsed)
}

/// Cut after the last nested-type separator, falling back to the last
/// namespace separator. Trailing `$` separators are trimmed first so a
/// purely anonymous name resolves to its enclosing type rather than an
/// empty string.
fn innermost_segment(name: &str) -> &str {
    let name = name.trim_end_matches('$');
    if let Some(nested) = name.rfind('$') {
        return &name[nested + 1..];
    }
    name.rfind("::")
        .map(|separator| separator + 2)
        .or_else(|| name.rfind('.').map(|separator| separator + 1))
        .map_or(name, |start| &name[start..])
}
