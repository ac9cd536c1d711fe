//! Backends serve as the "targets" for the extractor, which itself only produces a
//! [`FormGraph`]. Currently the backends include:
//!
//! - Django: a `forms.Form` subclass with one declaration per extracted field
//! - JSON: the form graph itself, pretty-printed; handy for tooling and debugging
//!

pub mod django;
pub mod python;

use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;
use crate::graph::form::FormGraph;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backends {
    #[default]
    Django,
    Json,
}

/// Renders the graph with the selected backend
pub fn render(graph: &FormGraph, backend: Backends) -> Result<String, ConversionError> {
    match backend {
        Backends::Django => django::render_django(graph),
        Backends::Json => Ok(serde_json::to_string_pretty(graph)?),
    }
}
