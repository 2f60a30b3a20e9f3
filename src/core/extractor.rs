//! Schema extraction from a Google Forms page.
//!
//! The page embeds its questions as `var FB_PUBLIC_LOAD_DATA_ = [...];`.
//! The payload is located with a literal-anchor regex (not a JavaScript
//! parser) and is assumed to be JSON. Questions sit at `[1][1]`; each one is
//! decoded positionally:
//!
//! | index        | meaning                                   |
//! |--------------|-------------------------------------------|
//! | `[1]`        | title                                     |
//! | `[3]`        | type code (non-integer → unrecognized)    |
//! | `[4][0][0]`  | entry id                                  |
//! | `[4][0][1]`  | options (choice types), value at `[0]`    |

use crate::domain::model::{ChoiceOption, QuestionKind, QuestionRecord};
use crate::utils::error::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static SCHEMA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\s+FB_PUBLIC_LOAD_DATA_\s*=([^;]+);").unwrap());

/// 從頁面 HTML 解析出所有題目；遇到第一個格式錯誤的題目即中止
pub fn extract_questions(html: &str) -> Result<Vec<QuestionRecord>> {
    let payload = locate_payload(html)?;
    tracing::debug!("Found schema payload ({} bytes)", payload.len());

    let schema: Value =
        serde_json::from_str(payload).map_err(|e| ConvertError::MalformedSchema {
            reason: format!("payload is not valid JSON: {}", e),
        })?;

    let questions = question_list(&schema)?;
    tracing::debug!("Schema declares {} questions", questions.len());

    questions
        .iter()
        .enumerate()
        .map(|(index, question)| decode_question(index, question))
        .collect()
}

/// 取出 `FB_PUBLIC_LOAD_DATA_ =` 與第一個分號之間的內容
pub fn locate_payload(html: &str) -> Result<&str> {
    SCHEMA_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ConvertError::SchemaNotFound)
}

fn question_list(schema: &Value) -> Result<&Vec<Value>> {
    schema
        .get(1)
        .and_then(|form| form.get(1))
        .and_then(Value::as_array)
        .ok_or_else(|| ConvertError::MalformedSchema {
            reason: "expected a question list at [1][1]".to_string(),
        })
}

fn decode_question(index: usize, question: &Value) -> Result<QuestionRecord> {
    let malformed = |reason: &str| ConvertError::MalformedQuestion {
        index,
        reason: reason.to_string(),
    };

    let fields = question
        .as_array()
        .ok_or_else(|| malformed("question is not an array"))?;

    let title = match fields.get(1) {
        Some(Value::Null) | None => String::new(),
        Some(value) => scalar_text(value).ok_or_else(|| malformed("title is not text"))?,
    };

    // 類型代碼只接受整數；缺漏、null 或字串 "0" 都當作無法辨識，以簡答呈現
    let kind = fields
        .get(3)
        .and_then(Value::as_i64)
        .map_or(QuestionKind::Unrecognized, QuestionKind::from_code);

    let descriptor = fields
        .get(4)
        .and_then(|answers| answers.get(0))
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("missing answer descriptor at [4][0]"))?;

    let entry_id = descriptor
        .first()
        .and_then(scalar_text)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| malformed("missing entry id at [4][0][0]"))?;

    let options = if kind.is_choice() {
        match descriptor.get(1) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(n, item)| {
                    item.get(0)
                        .and_then(scalar_text)
                        .map(|value| ChoiceOption { value })
                        .ok_or_else(|| malformed(&format!("option {} has no value", n)))
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(malformed("options at [4][0][1] is not a list")),
        }
    } else {
        Vec::new()
    };

    Ok(QuestionRecord {
        title,
        kind,
        entry_id,
        options,
    })
}

// entry id 在實際頁面中是數字，測試資料中常見字串；標題同理
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(payload: &str) -> String {
        format!(
            "<html><head><script>var FB_PUBLIC_LOAD_DATA_ = {};\nvar other = 1;</script></head></html>",
            payload
        )
    }

    #[test]
    fn test_missing_assignment_is_schema_not_found() {
        let html = "<html><body><script>var SOMETHING_ELSE = [1,2];</script></body></html>";
        assert!(matches!(
            extract_questions(html),
            Err(ConvertError::SchemaNotFound)
        ));
        assert!(matches!(extract_questions(""), Err(ConvertError::SchemaNotFound)));
    }

    #[test]
    fn test_locate_payload_stops_at_first_semicolon() {
        let html = "x var FB_PUBLIC_LOAD_DATA_ =[null,[1]]; var y = 2;";
        assert_eq!(locate_payload(html).unwrap(), "[null,[1]]");
    }

    #[test]
    fn test_minimal_short_text_question() {
        let html = r#"var FB_PUBLIC_LOAD_DATA_ =[null,[null,[[null,"Name",null,0,[["0",null]]]]]];"#;
        let questions = extract_questions(html).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].title, "Name");
        assert_eq!(questions[0].kind, QuestionKind::ShortText);
        assert_eq!(questions[0].entry_id, "0");
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn test_choice_question_with_numeric_entry_id() {
        let html = page(
            r#"[null,[null,[[111,"Favourite colour",null,2,[[123456,[["Red"],["Blue",null,null]],1]]]]]]"#,
        );
        let questions = extract_questions(&html).unwrap();

        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(questions[0].entry_id, "123456");
        let values: Vec<&str> = questions[0].options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Red", "Blue"]);
    }

    #[test]
    fn test_options_ignored_for_text_types() {
        let html = page(r#"[null,[null,[[1,"Bio",null,1,[["7",[["ignored"]]]]]]]]"#);
        let questions = extract_questions(&html).unwrap();
        assert_eq!(questions[0].kind, QuestionKind::Paragraph);
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn test_choice_question_without_options_is_empty() {
        let html = page(r#"[null,[null,[[1,"Pick",null,4,[["9",null]]]]]]"#);
        let questions = extract_questions(&html).unwrap();
        assert_eq!(questions[0].kind, QuestionKind::Checkboxes);
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn test_unknown_type_code_is_kept() {
        let html = page(r#"[null,[null,[[1,"Scale",null,99,[["5",null]]]]]]"#);
        let questions = extract_questions(&html).unwrap();
        assert_eq!(questions[0].kind, QuestionKind::Other(99));
    }

    #[test]
    fn test_unusable_type_code_falls_back() {
        for payload in [
            r#"[null,[null,[[null,"Name",null,null,[["0",null]]]]]]"#,
            r#"[null,[null,[[null,"Name",null,"0",[["0",null]]]]]]"#,
            r#"[null,[null,[[null,"Name",null,1.5,[["0",null]]]]]]"#,
        ] {
            let questions = extract_questions(&page(payload)).unwrap();
            assert_eq!(questions[0].kind, QuestionKind::Unrecognized, "{}", payload);
            assert_eq!(questions[0].entry_id, "0");
        }
    }

    #[test]
    fn test_missing_type_code_still_needs_entry_id() {
        // 只有三個欄位：沒有 [3] 也沒有 [4]
        let html = page(r#"[null,[null,[[null,"Name",null]]]]"#);
        assert!(matches!(
            extract_questions(&html),
            Err(ConvertError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed_schema() {
        let html = "var FB_PUBLIC_LOAD_DATA_ = [null, [oops]];";
        assert!(matches!(
            extract_questions(html),
            Err(ConvertError::MalformedSchema { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_is_malformed_schema() {
        for payload in ["[]", "[null]", "[null,[null]]", "[null,[null,{}]]", "{\"a\":1}"] {
            let html = page(payload);
            assert!(
                matches!(
                    extract_questions(&html),
                    Err(ConvertError::MalformedSchema { .. })
                ),
                "payload {} should be rejected",
                payload
            );
        }
    }

    #[test]
    fn test_first_malformed_question_aborts_extraction() {
        // 第二題沒有 [4]（例如分頁標記）
        let html = page(
            r#"[null,[null,[[1,"Ok",null,0,[["1",null]]],[2,"Page break",null,8],[3,"Never seen",null,0,[["3",null]]]]]]"#,
        );
        match extract_questions(&html) {
            Err(ConvertError::MalformedQuestion { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected MalformedQuestion, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_entry_id_is_malformed() {
        let html = page(r#"[null,[null,[[1,"T",null,0,[["",null]]]]]]"#);
        assert!(matches!(
            extract_questions(&html),
            Err(ConvertError::MalformedQuestion { index: 0, .. })
        ));

        let html = page(r#"[null,[null,[[1,"T",null,0,[[null,null]]]]]]"#);
        assert!(matches!(
            extract_questions(&html),
            Err(ConvertError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_option_without_value_is_malformed() {
        let html = page(r#"[null,[null,[[1,"T",null,2,[["5",[["A"],[]]]]]]]]"#);
        assert!(matches!(
            extract_questions(&html),
            Err(ConvertError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_null_title_becomes_empty() {
        let html = page(r#"[null,[null,[[1,null,null,0,[["5",null]]]]]]"#);
        let questions = extract_questions(&html).unwrap();
        assert_eq!(questions[0].title, "");
    }

    #[test]
    fn test_numeric_title_becomes_text() {
        let html = page(r#"[null,[null,[[1,42,null,0,[["5",null]]]]]]"#);
        let questions = extract_questions(&html).unwrap();
        assert_eq!(questions[0].title, "42");

        let html = page(r#"[null,[null,[[1,["nested"],null,0,[["5",null]]]]]]"#);
        assert!(matches!(
            extract_questions(&html),
            Err(ConvertError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_question_list() {
        let html = page("[null,[null,[]]]");
        assert!(extract_questions(&html).unwrap().is_empty());
    }
}
