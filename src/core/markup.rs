use crate::domain::model::{FieldNode, FormDocument, OptionDescriptor};

const FORM_CLASS: &str = "converted-form";
const FIELD_CONTAINER: &str = r#"<div class="form-field" style="margin-bottom: 15px;">"#;
const INPUT_STYLE: &str = "display: block; width: 100%; margin-top: 5px;";
const SUBMIT_STYLE: &str = "margin-top: 15px;";

/// Serialize a form to flat, single-line markup.
///
/// Void elements are written as `<input ... />` so that the formatter can
/// track nesting from the markup alone.
pub fn to_markup(form: &FormDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        r#"<form class="{}" action="{}" method="{}" target="{}">"#,
        FORM_CLASS,
        escape_attr(&form.action),
        form.method.as_str(),
        form.target.as_str()
    ));

    for field in &form.fields {
        push_field(&mut out, field);
    }

    out.push_str(&format!(
        r#"<button type="submit" style="{}">{}</button>"#,
        SUBMIT_STYLE,
        escape_text(&form.submit.label)
    ));
    out.push_str("</form>");
    out
}

fn push_field(out: &mut String, field: &FieldNode) {
    out.push_str(FIELD_CONTAINER);

    match field {
        FieldNode::TextInput { label, name } => {
            out.push_str(&format!("<label>{}</label>", escape_text(label)));
            out.push_str(&format!(
                r#"<input type="text" name="{}" style="{}" />"#,
                escape_attr(name),
                INPUT_STYLE
            ));
        }
        FieldNode::TextArea { label, name } => {
            out.push_str(&format!("<label>{}</label>", escape_text(label)));
            out.push_str(&format!(
                r#"<textarea name="{}" style="{}"></textarea>"#,
                escape_attr(name),
                INPUT_STYLE
            ));
        }
        FieldNode::RadioGroup {
            label,
            name,
            options,
        } => push_group(out, label, name, options, "radio"),
        FieldNode::CheckboxGroup {
            label,
            name,
            options,
        } => push_group(out, label, name, options, "checkbox"),
    }

    out.push_str("</div>");
}

// input type 與 label class 同名
fn push_group(
    out: &mut String,
    label: &str,
    name: &str,
    options: &[OptionDescriptor],
    input_type: &str,
) {
    out.push_str(&format!(r#"<p class="label">{}</p>"#, escape_text(label)));

    for option in options {
        out.push_str("<div>");
        out.push_str(&format!(
            r#"<input type="{}" name="{}" value="{}" id="{}" />"#,
            input_type,
            escape_attr(name),
            escape_attr(&option.value),
            escape_attr(&option.dom_id)
        ));
        out.push_str(&format!(
            r#"<label for="{}" class="{}">{}</label>"#,
            escape_attr(&option.dom_id),
            input_type,
            escape_text(&option.display_label)
        ));
        out.push_str("</div>");
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
