/// Errors raised while rendering an extracted form. HTML input never produces one of these; the
/// parser is tolerant and missing attributes fall back to defaults.
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("Unable to render form template: {0}")]
    Template(#[from] tera::Error),
    #[error("Unable to serialize form graph: {0}")]
    Serialization(#[from] serde_json::Error),
}
