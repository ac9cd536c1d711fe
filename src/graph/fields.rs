use serde::Serialize;

/// Used when a text input carries no usable `maxlength`
pub const DEFAULT_MAX_LENGTH: i64 = 100;

/// One `(value, text)` pair offered by a radio group or a `<select>`. Either side may be missing
/// (e.g., a radio button without a `value` attribute).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: Option<String>,
    pub text: Option<String>,
}

impl Choice {
    pub fn new(value: Option<&str>, text: Option<&str>) -> Self {
        Choice {
            value: value.map(str::to_string),
            text: text.map(str::to_string),
        }
    }
}

/// The semantic category of a control; drives both field and widget selection downstream.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Text { max_length: i64 },
    Email,
    Password,
    Number,
    Checkbox,
    Radio { choices: Vec<Choice> },
    Date,
    Datetime,
    Time,
    File,
    Textarea,
    SelectSingle { choices: Vec<Choice> },
    SelectMultiple { choices: Vec<Choice> },
    FallbackText,
}

impl FieldKind {
    /// Maps an `<input type="...">` value onto a kind, matching the value exactly as written.
    /// Radio buttons need the rest of the document to collect their choices, so the caller
    /// supplies them.
    pub fn from_input_type(
        input_type: &str,
        max_length: impl FnOnce() -> i64,
        radio_choices: impl FnOnce() -> Vec<Choice>,
    ) -> Self {
        match input_type {
            "text" => FieldKind::Text {
                max_length: max_length(),
            },
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            "number" => FieldKind::Number,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio {
                choices: radio_choices(),
            },
            "date" => FieldKind::Date,
            "datetime-local" => FieldKind::Datetime,
            "time" => FieldKind::Time,
            "file" => FieldKind::File,
            _ => FieldKind::FallbackText,
        }
    }

    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            FieldKind::Radio { choices }
            | FieldKind::SelectSingle { choices }
            | FieldKind::SelectMultiple { choices } => Some(choices),
            _ => None,
        }
    }

    pub fn max_length(&self) -> Option<i64> {
        match self {
            FieldKind::Text { max_length } => Some(*max_length),
            _ => None,
        }
    }
}

/// The subset of HTML attributes carried over to the generated widget, kept in a fixed order.
/// A key is only present if the source attribute existed and was non-empty.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl WidgetAttrs {
    pub fn new(class: Option<&str>, id: Option<&str>, placeholder: Option<&str>) -> Self {
        // multiple classes are re-joined with single spaces
        let class = class
            .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|c| !c.is_empty());
        WidgetAttrs {
            class,
            id: non_empty(id),
            placeholder: non_empty(placeholder),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.id.is_none() && self.placeholder.is_none()
    }

    /// Present attributes as `(key, value)` pairs, in `class`, `id`, `placeholder` order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("class", &self.class),
            ("id", &self.id),
            ("placeholder", &self.placeholder),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// A single form control, classified and ready for rendering
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "WidgetAttrs::is_empty")]
    pub widget_attrs: WidgetAttrs,
}

/// Turns a field name into a fallback label: first character upper-cased, the rest lower-cased
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
