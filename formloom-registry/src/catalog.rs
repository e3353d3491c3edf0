//! The built-in field catalog.
//!
//! Eleven field types: six that collect a value (text, number, textarea,
//! date, select, checkbox) and five structural ones (title, subtitle,
//! paragraph, separator, spacer). Defaults and attribute checks mirror what
//! the property editors expect for each type.

use crate::descriptor::{AttributeProblem, FieldTypeDescriptor, PaletteEntry};
use serde_json::{json, Value};

/// Type tags of the built-in field types.
pub mod kinds {
    pub const TEXT_FIELD: &str = "TextField";
    pub const NUMBER_FIELD: &str = "NumberField";
    pub const TEXT_AREA_FIELD: &str = "TextAreaField";
    pub const DATE_FIELD: &str = "DateField";
    pub const SELECT_FIELD: &str = "SelectField";
    pub const CHECKBOX_FIELD: &str = "CheckboxField";
    pub const TITLE_FIELD: &str = "TitleField";
    pub const SUBTITLE_FIELD: &str = "SubtitleField";
    pub const PARAGRAPH_FIELD: &str = "ParagraphField";
    pub const SEPARATOR_FIELD: &str = "SeparatorField";
    pub const SPACER_FIELD: &str = "SpacerField";
}

/// All built-in descriptors, in palette order.
pub(crate) fn builtin_descriptors() -> Vec<FieldTypeDescriptor> {
    vec![
        text_field(),
        number_field(),
        text_area_field(),
        date_field(),
        select_field(),
        checkbox_field(),
        title_field(),
        subtitle_field(),
        paragraph_field(),
        separator_field(),
        spacer_field(),
    ]
}

fn text_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::input(
        kinds::TEXT_FIELD,
        PaletteEntry::new("Text Field", "text"),
        json!({
            "label": "Text field",
            "helperText": "Helper text",
            "required": false,
            "placeholder": "Value here",
        }),
        check_labeled_input,
    )
}

fn number_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::input(
        kinds::NUMBER_FIELD,
        PaletteEntry::new("Number Field", "ampersand"),
        json!({
            "label": "Number field",
            "helperText": "Helper text",
            "required": false,
            "placeholder": "0",
        }),
        check_labeled_input,
    )
}

fn text_area_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::input(
        kinds::TEXT_AREA_FIELD,
        PaletteEntry::new("TextArea Field", "text"),
        json!({
            "label": "Text area",
            "helperText": "Helper text",
            "required": false,
            "placeholder": "Value here",
            "rows": 3,
        }),
        check_text_area,
    )
}

fn date_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::input(
        kinds::DATE_FIELD,
        PaletteEntry::new("Date Field", "calendar"),
        json!({
            "label": "Date field",
            "helperText": "Pick a date",
            "required": false,
        }),
        check_labeled_input,
    )
}

fn select_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::input(
        kinds::SELECT_FIELD,
        PaletteEntry::new("Select Field", "caret-sort"),
        json!({
            "label": "Select field",
            "helperText": "Helper text",
            "required": false,
            "placeholder": "Select an option",
            "options": ["Option 1", "Option 2", "Option 3"],
        }),
        check_select,
    )
}

fn checkbox_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::input(
        kinds::CHECKBOX_FIELD,
        PaletteEntry::new("Checkbox", "check"),
        json!({
            "label": "Checkbox",
            "helperText": "Helper text",
            "required": false,
        }),
        check_labeled_input,
    )
}

fn title_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::structural(
        kinds::TITLE_FIELD,
        PaletteEntry::new("Title Field", "heading-1"),
        json!({ "title": "Title field" }),
        check_title,
    )
}

fn subtitle_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::structural(
        kinds::SUBTITLE_FIELD,
        PaletteEntry::new("Subtitle Field", "heading-2"),
        json!({ "title": "Subtitle field" }),
        check_title,
    )
}

fn paragraph_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::structural(
        kinds::PARAGRAPH_FIELD,
        PaletteEntry::new("Paragraph Field", "text"),
        json!({ "text": "Paragraph field" }),
        check_paragraph,
    )
}

fn separator_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::structural(
        kinds::SEPARATOR_FIELD,
        PaletteEntry::new("Separator Field", "separator-horizontal"),
        Value::Null,
        no_checks,
    )
}

fn spacer_field() -> FieldTypeDescriptor {
    FieldTypeDescriptor::structural(
        kinds::SPACER_FIELD,
        PaletteEntry::new("Spacer Field", "separator-horizontal"),
        json!({ "height": 20 }),
        check_spacer,
    )
}

// ── Attribute checks ──────────────────────────────────────────────

const MIN_LABEL_LEN: usize = 4;
const MAX_TEXT_LEN: usize = 200;

fn no_checks(_attributes: &Value) -> Vec<AttributeProblem> {
    Vec::new()
}

fn check_labeled_input(attributes: &Value) -> Vec<AttributeProblem> {
    let mut problems = Vec::new();
    check_label(attributes, &mut problems);
    check_short_text(attributes, "/helperText", &mut problems);
    check_short_text(attributes, "/placeholder", &mut problems);
    problems
}

fn check_text_area(attributes: &Value) -> Vec<AttributeProblem> {
    let mut problems = check_labeled_input(attributes);
    match attributes.pointer("/rows").and_then(Value::as_i64) {
        Some(rows) if rows >= 1 => {}
        _ => problems.push(AttributeProblem::new(
            "/rows",
            "rows must be a positive integer",
        )),
    }
    problems
}

fn check_select(attributes: &Value) -> Vec<AttributeProblem> {
    let mut problems = check_labeled_input(attributes);
    match attributes.pointer("/options").and_then(Value::as_array) {
        Some(options) if options.iter().all(Value::is_string) => {}
        _ => problems.push(AttributeProblem::new(
            "/options",
            "options must be a list of strings",
        )),
    }
    problems
}

fn check_title(attributes: &Value) -> Vec<AttributeProblem> {
    let mut problems = Vec::new();
    check_min_len(attributes, "/title", MIN_LABEL_LEN, &mut problems);
    problems
}

fn check_paragraph(attributes: &Value) -> Vec<AttributeProblem> {
    let mut problems = Vec::new();
    check_min_len(attributes, "/text", MIN_LABEL_LEN, &mut problems);
    problems
}

fn check_spacer(attributes: &Value) -> Vec<AttributeProblem> {
    match attributes.pointer("/height").and_then(Value::as_i64) {
        Some(height) if height > 0 => Vec::new(),
        _ => vec![AttributeProblem::new(
            "/height",
            "height must be a positive integer",
        )],
    }
}

fn check_label(attributes: &Value, problems: &mut Vec<AttributeProblem>) {
    check_min_len(attributes, "/label", MIN_LABEL_LEN, problems);
}

fn check_min_len(
    attributes: &Value,
    pointer: &str,
    min: usize,
    problems: &mut Vec<AttributeProblem>,
) {
    match attributes.pointer(pointer).and_then(Value::as_str) {
        Some(text) if text.chars().count() >= min => {}
        _ => problems.push(AttributeProblem::new(
            pointer,
            format!("must be a string of at least {min} characters"),
        )),
    }
}

/// Length cap on free-text attributes; the key is allowed to be absent.
fn check_short_text(attributes: &Value, pointer: &str, problems: &mut Vec<AttributeProblem>) {
    if let Some(text) = attributes.pointer(pointer).and_then(Value::as_str) {
        if text.chars().count() > MAX_TEXT_LEN {
            problems.push(AttributeProblem::new(
                pointer,
                format!("must be at most {MAX_TEXT_LEN} characters"),
            ));
        }
    }
}
