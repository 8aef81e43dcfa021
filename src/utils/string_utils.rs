//! 문자열 처리 유틸리티

use serde::Deserialize;

/// 로그에 남길 수 있도록 이메일 주소를 가립니다.
///
/// 앞 세 글자만 남기고 `...`을 붙입니다. 전체 주소는 절대 로그에 남기지 않습니다.
///
/// ```rust,ignore
/// assert_eq!(redact_email("john@example.com"), "joh...");
/// ```
pub fn redact_email(email: &str) -> String {
    let prefix: String = email.chars().take(3).collect();
    format!("{}...", prefix)
}

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde `deserialize_with`용: 공백뿐인 문자열과 `null`을 `None`으로 정리합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email_keeps_short_prefix() {
        assert_eq!(redact_email("john@example.com"), "joh...");
        assert_eq!(redact_email("ab"), "ab...");
        assert_eq!(redact_email(""), "...");
        // 멀티바이트 문자도 글자 단위로 자름
        assert_eq!(redact_email("김철수님@example.com"), "김철수...");
    }

    #[test]
    fn test_redacted_email_never_contains_domain() {
        let redacted = redact_email("someone.private@example.com");
        assert!(!redacted.contains('@'));
        assert!(!redacted.contains("example.com"));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "\t\n  "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드가 없는 경우 - default 사용
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 문자열이 아닌 값은 역직렬화 실패
        assert!(serde_json::from_str::<TestStruct>(r#"{"optional_field": 123}"#).is_err());
    }
}
