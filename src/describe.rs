//! Fluent construction of `Label{name=value, ...}` debug strings.
//!
//! A [`Description`] pairs a fixed subject label with an append-only
//! sequence of optional name/value entries. Entries keep insertion order,
//! duplicate names are permitted, and an absent value renders as the
//! literal token `null` unless [`omit_nulls`](Description::omit_nulls) was
//! requested. Rendering never mutates the builder, so a description can be
//! rendered repeatedly and extended between renders for progressively
//! fuller snapshots.
//!
//! # Examples
//!
//! ```
//! use debrief::describe;
//!
//! struct Session {
//!     id: u64,
//! }
//!
//! let session = Session { id: 17 };
//! assert_eq!(describe(&session).field("id", session.id).render(), "Session{id=17}");
//! ```

use std::{any, fmt};

pub mod label;


/// One entry recorded by a [`Description`].
///
/// The value is captured as text when the entry is appended; an entry with
/// an absent value renders as `null`.
#[derive(Clone, Debug)]
struct Entry {
    name: Option<String>,
    value: Option<String>,
}

/// Fluent builder for `Label{name=value, ...}` strings.
///
/// Mutators consume and return the builder so calls chain without copying
/// the underlying state. Rendering goes through [`Display`](fmt::Display)
/// (or the [`render`](Self::render) convenience) and borrows the builder,
/// so it is repeatable and can be interleaved with further appends.
#[derive(Clone, Debug)]
pub struct Description {
    label: String,
    entries: Vec<Entry>,
    omit_nulls: bool,
}

/// Create a [`Description`] labelled with the subject's simple type name.
///
/// The label is derived from [`std::any::type_name`] via
/// [`simple_name`](label::simple_name):
/// module paths, generic arguments, and closure markers are stripped, so a
/// `widgets::button::Button` describes itself as `Button`. If derivation
/// yields nothing, the full qualified name is used verbatim.
///
/// For a literal label use [`Description::labelled`] instead; the subject
/// here contributes only its type, so `describe("Foo")` describes the type
/// `str`, not a subject labelled `Foo`.
///
/// # Examples
///
/// ```
/// use debrief::describe;
///
/// struct Widget;
///
/// assert_eq!(describe(&Widget).render(), "Widget{}");
/// assert_eq!(describe(&Widget).field("x", 1).render(), "Widget{x=1}");
/// ```
#[must_use]
pub fn describe<T: ?Sized>(_subject: &T) -> Description {
    Description::labelled(derived_label(any::type_name::<T>()))
}

fn derived_label(qualified: &str) -> String {
    let simple = label::simple_name(qualified);
    if simple.is_empty() {
        log::debug!("type name yielded no simple name, using it verbatim: qualified={qualified}");
        return qualified.to_owned();
    }
    simple.into_owned()
}

impl Description {
    /// Create a description with an explicit, verbatim label.
    ///
    /// # Examples
    ///
    /// ```
    /// use debrief::Description;
    ///
    /// let line = Description::labelled("MyObject").field("x", 1).render();
    /// assert_eq!(line, "MyObject{x=1}");
    /// ```
    #[must_use]
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
            omit_nulls: false,
        }
    }

    /// Skip absent-valued entries when rendering.
    ///
    /// Idempotent. The flag is consulted only while rendering, so its
    /// position relative to the append calls does not change the output.
    #[must_use]
    pub fn omit_nulls(mut self) -> Self {
        self.omit_nulls = true;
        self
    }

    /// Append a named entry rendered as `name=value`.
    ///
    /// The value's canonical [`Display`](fmt::Display) form is captured at
    /// append time.
    #[must_use]
    pub fn field(self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(Some(name.into()), Some(value.to_string()))
    }

    /// Append a named entry whose value may be absent.
    ///
    /// `None` renders as `name=null`, unless
    /// [`omit_nulls`](Self::omit_nulls) was requested, in which case the
    /// entry is skipped entirely: it contributes no separator and no text.
    #[must_use]
    pub fn field_opt<V: fmt::Display>(self, name: impl Into<String>, value: Option<V>) -> Self {
        let value = value.map(|value| value.to_string());
        self.push(Some(name.into()), value)
    }

    /// Append an unnamed entry rendered as the bare value.
    #[must_use]
    pub fn value(self, value: impl fmt::Display) -> Self {
        self.push(None, Some(value.to_string()))
    }

    /// Append an unnamed entry whose value may be absent.
    #[must_use]
    pub fn value_opt<V: fmt::Display>(self, value: Option<V>) -> Self {
        let value = value.map(|value| value.to_string());
        self.push(None, value)
    }

    /// The fixed subject label this description renders under.
    #[must_use]
    pub fn label(&self) -> &str { &self.label }

    /// Render the description as `Label{name=value, ...}`.
    ///
    /// Rendering neither consumes nor mutates the builder; further entries
    /// can be appended afterwards and a later render reflects them.
    #[must_use]
    pub fn render(&self) -> String { self.to_string() }

    fn push(mut self, name: Option<String>, value: Option<String>) -> Self {
        self.entries.push(Entry { name, value });
        self
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let omit_nulls = self.omit_nulls;
        write!(f, "{}{{", self.label)?;
        let mut separator = "";
        for entry in &self.entries {
            if omit_nulls && entry.value.is_none() {
                continue;
            }
            f.write_str(separator)?;
            separator = ", ";
            if let Some(name) = &entry.name {
                f.write_str(name)?;
                f.write_str("=")?;
            }
            match &entry.value {
                Some(value) => f.write_str(value)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("}")
    }
}
