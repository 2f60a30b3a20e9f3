use crate::domain::model::{FieldNode, OptionDescriptor, QuestionKind, QuestionRecord};

/// 將題目轉成欄位節點。未知題型一律當作簡答題，不會失敗
pub fn render_field(question: &QuestionRecord) -> FieldNode {
    let label = question.title.clone();
    let name = question.field_name();

    match question.kind {
        QuestionKind::ShortText => FieldNode::TextInput { label, name },
        QuestionKind::Paragraph => FieldNode::TextArea { label, name },
        QuestionKind::MultipleChoice => FieldNode::RadioGroup {
            label,
            name,
            options: describe_options(question),
        },
        QuestionKind::Checkboxes => FieldNode::CheckboxGroup {
            label,
            name,
            options: describe_options(question),
        },
        QuestionKind::Other(code) => {
            tracing::debug!(
                "Question {:?} has unsupported type {}, rendering as short text",
                question.title,
                code
            );
            FieldNode::TextInput { label, name }
        }
        QuestionKind::Unrecognized => {
            tracing::debug!(
                "Question {:?} has no usable type code, rendering as short text",
                question.title
            );
            FieldNode::TextInput { label, name }
        }
    }
}

// dom_id = <entry_id>_<index>，用於 label for / input id 對應
fn describe_options(question: &QuestionRecord) -> Vec<OptionDescriptor> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| OptionDescriptor {
            value: option.value.clone(),
            display_label: option.value.clone(),
            dom_id: format!("{}_{}", question.entry_id, index),
        })
        .collect()
}
