//! 필드 단위 검증 위반 모델
//!
//! `validator` 크레이트의 [`ValidationErrors`] 트리를 점(`.`)으로 구분된
//! 경로와 메시지의 평탄한 목록으로 변환합니다.

use serde::{Deserialize, Serialize};
use validator::{ValidationErrors, ValidationErrorsKind};

/// 하나의 검증 위반
///
/// `field`는 중첩 구조를 표현하기 위해 `profile.phone`처럼 점으로 구분된 경로입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// `ValidationErrors`를 위반 목록으로 평탄화합니다.
///
/// 결과는 필드 경로 기준으로 안정 정렬되며, 같은 필드 안에서는
/// 규칙이 선언된 순서를 유지합니다.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    flatten_into(errors, None, &mut violations);
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn flatten_into(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", path, error.code));
                    out.push(FieldViolation::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}.{}", path, index);
                    flatten_into(nested, Some(&item_path), out);
                }
            }
        }
    }
}
