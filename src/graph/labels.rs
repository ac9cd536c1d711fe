use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static LABELS: Lazy<Selector> = Lazy::new(|| Selector::parse("label[for]").unwrap());

/// Maps an element id to the text of the `<label for="...">` pointing at it
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelIndex {
    labels: HashMap<String, String>,
}

impl LabelIndex {
    pub fn new() -> Self {
        LabelIndex {
            labels: HashMap::new(),
        }
    }

    /// Collects every `<label>` with a non-empty `for` attribute. Later labels overwrite earlier
    /// ones targeting the same id.
    pub fn from_document(document: &Html) -> Self {
        let mut index = LabelIndex::new();
        for label in document.select(&LABELS) {
            if let Some(target) = label.value().attr("for") {
                index.insert(target, label.text().collect::<String>().trim());
            }
        }
        index
    }

    pub fn insert(&mut self, target: &str, text: &str) {
        if target.is_empty() {
            return;
        }
        self.labels.insert(target.to_string(), text.to_string());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }
}
