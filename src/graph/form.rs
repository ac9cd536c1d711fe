use serde::Serialize;

use super::fields::FieldDescriptor;

/// Everything extracted from one HTML document: the class name to emit and the retained
/// controls in document order
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FormGraph {
    pub form_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormGraph {
    pub fn new(form_name: &str) -> Self {
        FormGraph {
            form_name: form_name.to_string(),
            fields: vec![],
        }
    }

    pub fn push_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
