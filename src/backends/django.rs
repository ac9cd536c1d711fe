use std::fmt;

use serde::Serialize;
use tera::{Context, Tera};

use super::python::{double_quoted, repr_attrs, repr_bool, repr_choices};
use crate::errors::ConversionError;
use crate::graph::fields::{FieldDescriptor, FieldKind};
use crate::graph::form::FormGraph;

static FORM_TEMPLATE: &str = include_str!("../../templates/django/form.py.tera");

/// What the module template needs: the class name and the already-formatted declarations
#[derive(Serialize)]
struct DjangoModule<'a> {
    form_name: &'a str,
    fields: Vec<String>,
}

/// Renders a complete Python module containing a single `forms.Form` subclass. A graph with no
/// fields gets a `pass` body.
pub fn render_django(graph: &FormGraph) -> Result<String, ConversionError> {
    let mut tera = Tera::default();
    tera.add_raw_template("form.py.tera", FORM_TEMPLATE)?;
    let module = DjangoModule {
        form_name: &graph.form_name,
        fields: graph
            .fields
            .iter()
            .map(|field| Declaration(field).to_string())
            .collect(),
    };
    Ok(tera.render("form.py.tera", &Context::from_serialize(&module)?)?)
}

/// The Django `(field, widget)` class pair for a kind
pub fn field_and_widget(kind: &FieldKind) -> (&'static str, &'static str) {
    match kind {
        FieldKind::Text { .. } | FieldKind::FallbackText => ("CharField", "TextInput"),
        FieldKind::Textarea => ("CharField", "Textarea"),
        FieldKind::Email => ("EmailField", "EmailInput"),
        FieldKind::Password => ("CharField", "PasswordInput"),
        FieldKind::Number => ("IntegerField", "NumberInput"),
        FieldKind::Checkbox => ("BooleanField", "CheckboxInput"),
        FieldKind::Radio { .. } => ("ChoiceField", "RadioSelect"),
        FieldKind::Date => ("DateField", "DateInput"),
        FieldKind::Datetime => ("DateTimeField", "DateTimeInput"),
        FieldKind::Time => ("TimeField", "TimeInput"),
        FieldKind::File => ("FileField", "ClearableFileInput"),
        FieldKind::SelectSingle { .. } => ("ChoiceField", "Select"),
        FieldKind::SelectMultiple { .. } => ("MultipleChoiceField", "SelectMultiple"),
    }
}

/// One `name = forms.XField(...)` line, without indentation
pub struct Declaration<'a>(pub &'a FieldDescriptor);

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.0;
        let (field_class, widget_class) = field_and_widget(&field.kind);

        write!(
            f,
            "{} = forms.{}(label={}",
            field.name,
            field_class,
            double_quoted(&field.label)
        )?;
        if let Some(max_length) = field.kind.max_length() {
            write!(f, ", max_length={max_length}")?;
        }
        if let Some(choices) = field.kind.choices() {
            write!(f, ", choices={}", repr_choices(choices))?;
        }
        write!(f, ", widget=forms.{widget_class}")?;
        if !field.widget_attrs.is_empty() {
            write!(f, "(attrs={})", repr_attrs(&field.widget_attrs))?;
        }
        write!(f, ", required={})", repr_bool(field.required))
    }
}
