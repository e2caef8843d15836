#![doc(html_root_url = "https://docs.rs/debrief/latest")]
//! Public API for the `debrief` library.
//!
//! This crate builds `Label{name=value, ...}` debug strings through a
//! fluent, append-only [`Description`] builder, and offers [`coalesce`]
//! for picking the first present of two optional values.
//!
//! A description is created from a value's type name via [`describe`] (or
//! from an explicit label via [`Description::labelled`]), accumulates
//! name/value entries in insertion order, and renders on demand, as often
//! as needed, with further entries allowed between renders.
//!
//! # Examples
//!
//! ```
//! use std::fmt;
//!
//! use debrief::describe;
//!
//! struct Endpoint {
//!     host: String,
//!     port: Option<u16>,
//! }
//!
//! impl fmt::Display for Endpoint {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(
//!             f,
//!             "{}",
//!             describe(self)
//!                 .field("host", &self.host)
//!                 .field_opt("port", self.port)
//!         )
//!     }
//! }
//!
//! let endpoint = Endpoint {
//!     host: "db.internal".into(),
//!     port: None,
//! };
//! assert_eq!(endpoint.to_string(), "Endpoint{host=db.internal, port=null}");
//! ```

pub mod coalesce;
pub mod describe;

pub use coalesce::{CoalesceError, coalesce};
pub use describe::{Description, describe, label::simple_name};
