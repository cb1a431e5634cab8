/*
 * Responsibility
 * - フォーム (x-www-form-urlencoded) の入力型と宣言的 validation
 * - validator の ValidationErrors を画面表示用の FieldError 一覧へ変換
 */
pub mod posts;
pub mod sessions;

use validator::ValidationErrors;

/// One failed rule on one field, as shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                param: field.to_string(),
                msg: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    // HashMap order is not stable
    out.sort_by(|a, b| a.param.cmp(&b.param));
    out
}
