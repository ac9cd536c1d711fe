//! This module contains the intermediate representation of an HTML form: a [`form::FormGraph`]
//! holding one [`fields::FieldDescriptor`] per retained control, in document order.
//!
//! The graph knows nothing about the output language. Everything is serializeable with `serde`,
//! which gives us the JSON backend for free and keeps templating simple.

pub mod fields;
pub mod form;
pub mod labels;
