use serde::{Deserialize, Serialize};

use crate::backends::Backends;
use crate::graph::fields::DEFAULT_MAX_LENGTH;

/// Class name used when the caller doesn't supply one
pub const DEFAULT_FORM_NAME: &str = "GeneratedForm";

/// Options for a generation run. Any field missing when deserializing falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Used verbatim as the generated class name; not checked for being a valid identifier
    pub form_name: String,
    pub backend: Backends,
    /// `max_length` for text inputs without a usable `maxlength` attribute
    pub default_max_length: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            form_name: DEFAULT_FORM_NAME.to_string(),
            backend: Backends::Django,
            default_max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl GeneratorConfig {
    pub fn with_form_name(form_name: &str) -> Self {
        GeneratorConfig {
            form_name: form_name.to_string(),
            ..Default::default()
        }
    }
}
