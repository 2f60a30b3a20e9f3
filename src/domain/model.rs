use serde::{Deserialize, Serialize};
use std::fmt;

/// 題目類型，未知代碼保留原值並以簡答題呈現；
/// 類型欄位缺漏或不是整數時為 `Unrecognized`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    Paragraph,
    MultipleChoice,
    Checkboxes,
    Other(i64),
    Unrecognized,
}

impl QuestionKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => QuestionKind::ShortText,
            1 => QuestionKind::Paragraph,
            2 => QuestionKind::MultipleChoice,
            4 => QuestionKind::Checkboxes,
            other => QuestionKind::Other(other),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionKind::MultipleChoice | QuestionKind::Checkboxes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
}

/// One decoded question from the form's schema payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub title: String,
    pub kind: QuestionKind,
    pub entry_id: String,
    pub options: Vec<ChoiceOption>,
}

impl QuestionRecord {
    /// 送出時使用的欄位名稱 `entry.<id>`
    pub fn field_name(&self) -> String {
        format!("entry.{}", self.entry_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub value: String,
    pub display_label: String,
    pub dom_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldNode {
    TextInput {
        label: String,
        name: String,
    },
    TextArea {
        label: String,
        name: String,
    },
    RadioGroup {
        label: String,
        name: String,
        options: Vec<OptionDescriptor>,
    },
    CheckboxGroup {
        label: String,
        name: String,
        options: Vec<OptionDescriptor>,
    },
}

impl FieldNode {
    pub fn label(&self) -> &str {
        match self {
            FieldNode::TextInput { label, .. }
            | FieldNode::TextArea { label, .. }
            | FieldNode::RadioGroup { label, .. }
            | FieldNode::CheckboxGroup { label, .. } => label,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldNode::TextInput { name, .. }
            | FieldNode::TextArea { name, .. }
            | FieldNode::RadioGroup { name, .. }
            | FieldNode::CheckboxGroup { name, .. } => name,
        }
    }

    pub fn options(&self) -> &[OptionDescriptor] {
        match self {
            FieldNode::RadioGroup { options, .. } | FieldNode::CheckboxGroup { options, .. } => {
                options
            }
            FieldNode::TextInput { .. } | FieldNode::TextArea { .. } => &[],
        }
    }

    fn short_kind(&self) -> &'static str {
        match self {
            FieldNode::TextInput { .. } => "text",
            FieldNode::TextArea { .. } => "paragraph",
            FieldNode::RadioGroup { .. } => "radio",
            FieldNode::CheckboxGroup { .. } => "checkbox",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmitMethod {
    Post,
}

impl SubmitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowTarget {
    NewTab,
}

impl WindowTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowTarget::NewTab => "_blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitControl {
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: "Submit".to_string(),
        }
    }
}

/// The assembled standalone form. The submit control is held apart from
/// `fields` and is always serialized last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDocument {
    pub action: String,
    pub method: SubmitMethod,
    pub target: WindowTarget,
    pub fields: Vec<FieldNode>,
    pub submit: SubmitControl,
}

impl fmt::Display for FormDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} (target {})",
            self.method.as_str(),
            self.action,
            self.target.as_str()
        )?;
        for (i, field) in self.fields.iter().enumerate() {
            write!(
                f,
                "  {:>2}. [{}] {} -> {}",
                i + 1,
                field.short_kind(),
                field.label(),
                field.name()
            )?;
            match field {
                FieldNode::RadioGroup { options, .. } | FieldNode::CheckboxGroup { options, .. } => {
                    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                    writeln!(f, " [{}]", values.join(" | "))?;
                }
                _ => writeln!(f)?,
            }
        }
        write!(f, "  [submit] {}", self.submit.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    pub preview: FormDocument,
    pub html_source: String,
}

#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output_path: String,
    pub preview: FormDocument,
}
