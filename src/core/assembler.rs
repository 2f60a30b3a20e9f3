use crate::domain::model::{FieldNode, FormDocument, SubmitControl, SubmitMethod, WindowTarget};

const VIEW_PATH: &str = "/viewform";
const RESPONSE_PATH: &str = "/formResponse";

/// 把第一個 `/viewform` 換成 `/formResponse`；找不到時原樣返回
pub fn submission_url(source_url: &str) -> String {
    source_url.replacen(VIEW_PATH, RESPONSE_PATH, 1)
}

pub fn assemble_form(source_url: &str, fields: Vec<FieldNode>) -> FormDocument {
    FormDocument {
        action: submission_url(source_url),
        method: SubmitMethod::Post,
        target: WindowTarget::NewTab,
        fields,
        submit: SubmitControl::default(),
    }
}
