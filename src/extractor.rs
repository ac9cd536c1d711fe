//! Walks a parsed HTML document and turns each named `<input>`, `<textarea>`, and `<select>`
//! into a [`FieldDescriptor`].

use log::{debug, warn};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::config::GeneratorConfig;
use crate::graph::fields::{Choice, FieldDescriptor, FieldKind, WidgetAttrs, capitalize, non_empty};
use crate::graph::form::FormGraph;
use crate::graph::labels::LabelIndex;

static CONTROLS: Lazy<Selector> = Lazy::new(|| Selector::parse("input, textarea, select").unwrap());
static INPUTS: Lazy<Selector> = Lazy::new(|| Selector::parse("input").unwrap());
static OPTIONS: Lazy<Selector> = Lazy::new(|| Selector::parse("option").unwrap());

pub struct Extractor {
    form_name: String,
    default_max_length: i64,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl Extractor {
    pub fn new(config: &GeneratorConfig) -> Self {
        Extractor {
            form_name: config.form_name.clone(),
            default_max_length: config.default_max_length,
        }
    }

    /// Parses `html` and extracts every eligible control. Never fails: the parser accepts
    /// partial or malformed markup, and missing attributes fall back to defaults.
    pub fn extract(&self, html: &str) -> FormGraph {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    pub fn extract_document(&self, document: &Html) -> FormGraph {
        let labels = LabelIndex::from_document(document);
        let mut graph = FormGraph::new(&self.form_name);

        for element in document.select(&CONTROLS) {
            match self.describe(document, &labels, element) {
                Some(field) => {
                    debug!("Extracted field {:?} as {:?}", field.name, field.kind);
                    graph.push_field(field)
                }
                None => debug!(
                    "Skipping <{}> without a name attribute",
                    element.value().name()
                ),
            }
        }
        if graph.is_empty() {
            debug!("No named form controls found");
        }
        graph
    }

    fn describe(
        &self,
        document: &Html,
        labels: &LabelIndex,
        element: ElementRef,
    ) -> Option<FieldDescriptor> {
        let el = element.value();
        let name = non_empty(el.attr("name"))?;
        let id = el.attr("id").filter(|id| !id.is_empty());
        let placeholder = el.attr("placeholder").filter(|p| !p.is_empty());

        let label = id
            .and_then(|id| labels.get(id))
            .or(placeholder)
            .map(str::to_string)
            .unwrap_or_else(|| capitalize(&name));

        let kind = match el.name() {
            "textarea" => FieldKind::Textarea,
            "select" => {
                let choices = select_choices(element);
                if el.attr("multiple").is_some() {
                    FieldKind::SelectMultiple { choices }
                } else {
                    FieldKind::SelectSingle { choices }
                }
            }
            _ => FieldKind::from_input_type(
                el.attr("type").unwrap_or("text"),
                || self.max_length(&name, el.attr("maxlength")),
                || radio_choices(document, &name),
            ),
        };

        Some(FieldDescriptor {
            required: el.attr("required").is_some(),
            widget_attrs: WidgetAttrs::new(el.attr("class"), id, placeholder),
            name,
            kind,
            label,
        })
    }

    fn max_length(&self, name: &str, maxlength: Option<&str>) -> i64 {
        match maxlength {
            None => self.default_max_length,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Field {name:?} has a non-integer maxlength {raw:?}; using {}",
                    self.default_max_length
                );
                self.default_max_length
            }),
        }
    }
}

/// Options in document order; the value falls back to the option's text when there is no
/// `value` attribute
fn select_choices(select: ElementRef) -> Vec<Choice> {
    select
        .select(&OPTIONS)
        .map(|option| {
            let text = option.text().collect::<String>();
            let value = option.value().attr("value").unwrap_or(text.as_str());
            Choice::new(Some(value), Some(&text))
        })
        .collect()
}

/// Every radio button in the document sharing `name`, each contributing `(value, value)`.
/// Called once per radio element, so a group of k buttons yields k identical choice lists.
fn radio_choices(document: &Html, name: &str) -> Vec<Choice> {
    document
        .select(&INPUTS)
        .filter(|input| {
            let el = input.value();
            el.attr("type") == Some("radio") && el.attr("name") == Some(name)
        })
        .map(|radio| {
            let value = radio.value().attr("value");
            Choice::new(value, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn extract(html: &str) -> FormGraph {
        Extractor::default().extract(html)
    }

    fn only_field(html: &str) -> FieldDescriptor {
        let graph = extract(html);
        assert_eq!(graph.fields.len(), 1, "expected exactly one field in {html}");
        graph.fields[0].clone()
    }

    #[test]
    fn test_no_controls() {
        let graph = extract("<p>Nothing to see</p>");
        assert!(graph.is_empty());
        assert_eq!(graph.form_name, "GeneratedForm");
    }

    #[rstest]
    #[case::input(r#"<input type="text" id="a" placeholder="x" required>"#)]
    #[case::empty_name(r#"<input type="email" name="">"#)]
    #[case::textarea(r#"<textarea class="big"></textarea>"#)]
    #[case::select(r#"<select><option>One</option></select>"#)]
    fn test_nameless_controls_are_dropped(#[case] html: &str) {
        assert!(extract(html).is_empty())
    }

    #[rstest]
    #[case(r#"<input name="f">"#, FieldKind::Text { max_length: 100 })]
    #[case(r#"<input name="f" type="email">"#, FieldKind::Email)]
    #[case(r#"<input name="f" type="password">"#, FieldKind::Password)]
    #[case(r#"<input name="f" type="number">"#, FieldKind::Number)]
    #[case(r#"<input name="f" type="checkbox">"#, FieldKind::Checkbox)]
    #[case(r#"<input name="f" type="date">"#, FieldKind::Date)]
    #[case(r#"<input name="f" type="datetime-local">"#, FieldKind::Datetime)]
    #[case(r#"<input name="f" type="time">"#, FieldKind::Time)]
    #[case(r#"<input name="f" type="file">"#, FieldKind::File)]
    #[case(r#"<input name="f" type="color">"#, FieldKind::FallbackText)]
    #[case(r#"<input name="f" type="EMAIL">"#, FieldKind::FallbackText)]
    #[case(r#"<textarea name="f" type="email"></textarea>"#, FieldKind::Textarea)]
    fn test_classification(#[case] html: &str, #[case] expected: FieldKind) {
        assert_eq!(only_field(html).kind, expected)
    }

    #[rstest]
    #[case(r#"<input name="nick">"#, 100)]
    #[case(r#"<input name="nick" type="text" maxlength="30">"#, 30)]
    #[case(r#"<input name="nick" maxlength=" 12 ">"#, 12)]
    #[case(r#"<input name="nick" maxlength="lots">"#, 100)]
    #[case(r#"<input name="nick" maxlength="-4">"#, -4)]
    #[case(r#"<input name="nick" maxlength="5000000000">"#, 5_000_000_000)]
    #[case(r#"<input name="nick" maxlength="3.5">"#, 100)]
    fn test_max_length(#[case] html: &str, #[case] expected: i64) {
        assert_eq!(only_field(html).kind.max_length(), Some(expected))
    }

    #[test]
    fn test_configured_default_max_length() {
        let config = GeneratorConfig {
            default_max_length: 255,
            ..Default::default()
        };
        let graph = Extractor::new(&config).extract(r#"<input name="nick">"#);
        assert_eq!(graph.fields[0].kind, FieldKind::Text { max_length: 255 });
    }

    #[rstest]
    #[case::label_beats_placeholder(
        r#"<label for="e">Your email</label><input id="e" name="email" placeholder="you@example.com">"#,
        "Your email"
    )]
    #[case::label_after_control(
        r#"<input id="e" name="email" placeholder="ignored"><label for="e">Later</label>"#,
        "Later"
    )]
    #[case::placeholder_without_label(
        r#"<input id="e" name="email" placeholder="you@example.com">"#,
        "you@example.com"
    )]
    #[case::unmatched_id(r#"<label for="x">Other</label><input id="e" name="email">"#, "Email")]
    #[case::empty_placeholder(r#"<input name="last_name" placeholder="">"#, "Last_name")]
    #[case::capitalized_name(r#"<input name="firstName">"#, "Firstname")]
    fn test_label_precedence(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(only_field(html).label, expected)
    }

    #[test]
    fn test_required_is_presence_based() {
        assert!(only_field(r#"<input name="a" required="false">"#).required);
        assert!(!only_field(r#"<input name="a">"#).required);
    }

    #[test]
    fn test_widget_attrs() {
        let field = only_field(r#"<input name="a" class="x  y" id="a1" placeholder="">"#);
        assert_eq!(field.widget_attrs, WidgetAttrs::new(Some("x y"), Some("a1"), None));
    }

    #[test]
    fn test_select_multiple() {
        let field = only_field(
            r#"<select name="letters" multiple><option value="a">Alpha</option><option value="b">Beta</option></select>"#,
        );
        assert_eq!(
            field.kind,
            FieldKind::SelectMultiple {
                choices: vec![
                    Choice::new(Some("a"), Some("Alpha")),
                    Choice::new(Some("b"), Some("Beta")),
                ]
            }
        );
    }

    #[test]
    fn test_select_option_value_falls_back_to_text() {
        let field = only_field(
            r#"<select name="size"><option>Small</option><option value="">None</option></select>"#,
        );
        assert_eq!(
            field.kind,
            FieldKind::SelectSingle {
                choices: vec![
                    Choice::new(Some("Small"), Some("Small")),
                    Choice::new(Some(""), Some("None")),
                ]
            }
        );
    }

    #[test]
    fn test_radio_group_repeats_per_button() {
        let graph = extract(
            r#"<form>
                <input type="radio" name="color" value="red">
                <input type="radio" name="color" value="green">
                <input type="text" name="nick">
                <input type="radio" name="color" value="blue">
                <input type="radio" name="size" value="xl">
            </form>"#,
        );
        let expected = FieldKind::Radio {
            choices: vec![
                Choice::new(Some("red"), Some("red")),
                Choice::new(Some("green"), Some("green")),
                Choice::new(Some("blue"), Some("blue")),
            ],
        };
        let colors: Vec<_> = graph.fields.iter().filter(|f| f.name == "color").collect();
        assert_eq!(colors.len(), 3);
        assert!(colors.iter().all(|f| f.kind == expected));
        assert_eq!(graph.fields.len(), 5);
        assert_eq!(graph.fields[2].name, "nick");
    }

    #[test]
    fn test_radio_type_is_matched_exactly() {
        let graph = extract(
            r#"<input type="radio" name="tier" value="basic">
            <input type="Radio" name="tier" value="gold">"#,
        );
        assert_eq!(
            graph.fields[0].kind,
            FieldKind::Radio {
                choices: vec![Choice::new(Some("basic"), Some("basic"))]
            }
        );
        assert_eq!(graph.fields[1].kind, FieldKind::FallbackText);
    }

    #[test]
    fn test_radio_without_value() {
        let field = only_field(r#"<input type="radio" name="agree">"#);
        assert_eq!(
            field.kind,
            FieldKind::Radio {
                choices: vec![Choice::new(None, None)]
            }
        );
    }

    #[test]
    fn test_document_order_is_kept() {
        let graph = extract(
            r#"<div><textarea name="bio"></textarea></div>
            <form><select name="a"></select><input name="b" type="number"></form>"#,
        );
        let names: Vec<_> = graph.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["bio", "a", "b"]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let graph = extract(r#"<form><input name="a" type="email"<div><input name="b"</form"#);
        assert!(graph.fields.iter().any(|f| f.name == "a"));
    }
}
