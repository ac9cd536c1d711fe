//! Turn static HTML form markup into Django form classes.
//!
//! Given an HTML document (or fragment), this crate finds every named `<input>`, `<textarea>`,
//! and `<select>`, infers a Django field and widget for each, and renders a `forms.Form`
//! subclass:
//!
//! ```
//! let html = r#"<form>
//!   <label for="e">Email</label>
//!   <input id="e" name="email" type="email" required>
//! </form>"#;
//! let source = html2djform::generate(html, "SignupForm").unwrap();
//! assert!(source.contains("class SignupForm(forms.Form):"));
//! assert!(source.contains(r#"email = forms.EmailField(label="Email""#));
//! ```
//!
//! Parsing is delegated to [`scraper`], which accepts partial and malformed markup. Controls
//! without a `name` are skipped, missing attributes fall back to defaults, and unknown input
//! types are treated as plain text; none of these are reported as errors.
//!
//! Notable quirks:
//!
//! - Labels come from a matching `<label for>`, then the `placeholder`, then the field name
//! - Each radio button gets its own declaration carrying the whole group's choices, so a group
//!   of three buttons produces three identical lines
//! - The form name is used verbatim; it is not checked for being a valid Python identifier
//!
//! Current backends (render targets) include:
//!
//! - Django: Python source for a `forms.Form` subclass
//! - JSON: the intermediate [`graph::form::FormGraph`], pretty-printed

pub mod backends;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod graph;

pub use config::{DEFAULT_FORM_NAME, GeneratorConfig};
pub use errors::ConversionError;

use backends::render;
use extractor::Extractor;

/// Generates Django form source for `html`, naming the class `form_name`
pub fn generate(html: &str, form_name: &str) -> Result<String, ConversionError> {
    generate_with(html, &GeneratorConfig::with_form_name(form_name))
}

/// Same as [`generate`], with every option spelled out
pub fn generate_with(html: &str, config: &GeneratorConfig) -> Result<String, ConversionError> {
    let graph = Extractor::new(config).extract(html);
    render(&graph, config.backend)
}
