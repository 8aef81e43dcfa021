//! # 회원가입 요청 DTO와 검증 게이트
//!
//! `POST /createUser` 요청 본문을 검증된 구조체로 변환합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 필수 | 규칙 |
//! |------|------|------|
//! | `email` | O | 이메일 형식 |
//! | `password` | O | [`PasswordPolicy`] (설정으로 주입) |
//! | `username` | O | 3-30자, 영문/숫자/언더스코어 |
//! | `name` | O | 1-50자 |
//! | `profile.phone` | X | 7-20자, 숫자와 `+ - ( )` 공백 |
//! | `profile.bio` | X | 500자 이하 |
//!
//! 모든 필드는 serde 수준에서 `Option`입니다. 필드가 빠진 요청도 역직렬화에
//! 성공해야 "누락" 위반으로 보고할 수 있기 때문입니다.
//!
//! 이메일 중복 여부는 여기서 검사하지 않습니다. 서비스 계층의 책임입니다.

use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::ProfileDetails;
use crate::domain::models::password_policy::PasswordPolicy;
use crate::domain::models::validation::{collect_violations, FieldViolation};
use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입 요청 본문 (검증 전)
#[derive(Clone, Default, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: Option<String>,

    /// 공백도 비밀번호의 일부이므로 trim 하지 않습니다.
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Username is required"),
        length(min = 3, max = 30, message = "Username must be between 3 and 30 characters")
    )]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Name is required"),
        length(min = 1, max = 50, message = "Name must be between 1 and 50 characters")
    )]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub profile: Option<ProfileRequest>,
}

/// 선택 프로필 정보
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 7, max = 20, message = "Phone number must be between 7 and 20 characters"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

/// 검증 게이트를 통과한 회원가입 정보
///
/// 게이트만 생성할 수 있으며, 서비스 계층에 그대로 전달됩니다.
#[derive(Clone, PartialEq)]
pub struct ValidatedRegistration {
    pub email: String,
    pub password: String,
    pub username: String,
    pub name: String,
    pub profile: Option<ProfileDetails>,
}

// 비밀번호가 로그에 찍히지 않도록 Debug를 직접 구현
impl fmt::Debug for ValidatedRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRegistration")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("profile", &self.profile)
            .finish()
    }
}

/// 회원가입 입력을 검증합니다.
///
/// 첫 번째 위반에서 멈추지 않고 모든 위반을 모아 필드 경로 순으로 반환합니다.
/// 부수 효과가 없는 순수 함수입니다.
///
/// # Errors
///
/// 하나 이상의 규칙을 위반하면 `Vec<FieldViolation>`을 반환합니다 (빈 목록은 반환하지 않음).
///
/// # 예제
///
/// ```rust,ignore
/// let request: RegisterUserRequest = serde_json::from_value(json!({
///     "email": "user@example.com",
///     "password": "SecurePass123",
///     "username": "john_doe",
///     "name": "John Doe"
/// }))?;
///
/// let validated = validate_registration(request, &PasswordPolicy::default())?;
/// ```
pub fn validate_registration(
    input: RegisterUserRequest,
    policy: &PasswordPolicy,
) -> Result<ValidatedRegistration, Vec<FieldViolation>> {
    let mut violations = match input.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_violations(&errors),
    };

    match input.password.as_deref() {
        None | Some("") => {
            violations.push(FieldViolation::new("password", "Password is required"));
        }
        Some(password) => violations.extend(
            policy
                .check(password)
                .into_iter()
                .map(|message| FieldViolation::new("password", message)),
        ),
    }

    if let Some(username) = input.username.as_deref() {
        if !is_valid_username(username) {
            violations.push(FieldViolation::new(
                "username",
                "Username may only contain letters, digits and underscores",
            ));
        }
    }

    if let Some(phone) = input.profile.as_ref().and_then(|p| p.phone.as_deref()) {
        if !is_valid_phone(phone) {
            violations.push(FieldViolation::new(
                "profile.phone",
                "Phone number may only contain digits, spaces and + - ( )",
            ));
        }
    }

    if !violations.is_empty() {
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        return Err(violations);
    }

    // required 규칙을 통과했으므로 모두 Some
    let (Some(email), Some(password), Some(username), Some(name)) =
        (input.email, input.password, input.username, input.name)
    else {
        return Err(violations);
    };

    let profile = input
        .profile
        .map(|p| ProfileDetails {
            phone: p.phone,
            bio: p.bio,
        })
        .filter(|p| p.phone.is_some() || p.bio.is_some());

    Ok(ValidatedRegistration {
        email,
        password,
        username,
        name,
        profile,
    })
}

/// 영문, 숫자, 언더스코어만 허용
fn is_valid_username(username: &str) -> bool {
    username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn request(value: serde_json::Value) -> RegisterUserRequest {
        serde_json::from_value(value).unwrap()
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "email": "user@example.com",
            "password": "SecurePass123",
            "username": "john_doe",
            "name": "John Doe"
        })
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_registration_passes() {
        let validated =
            validate_registration(request(valid_body()), &PasswordPolicy::default()).unwrap();

        assert_eq!(validated.email, "user@example.com");
        assert_eq!(validated.password, "SecurePass123");
        assert_eq!(validated.username, "john_doe");
        assert_eq!(validated.name, "John Doe");
        assert!(validated.profile.is_none());
    }

    #[test]
    fn test_empty_body_reports_every_required_field() {
        let violations =
            validate_registration(request(json!({})), &PasswordPolicy::default()).unwrap_err();

        assert_eq!(fields(&violations), vec!["email", "name", "password", "username"]);
        assert!(violations.iter().any(|v| v.message == "Email is required"));
        assert!(violations.iter().any(|v| v.message == "Password is required"));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(""))]
    #[case(json!("   "))]
    fn test_blank_email_is_missing(#[case] email: serde_json::Value) {
        let mut body = valid_body();
        body["email"] = email;

        let violations =
            validate_registration(request(body), &PasswordPolicy::default()).unwrap_err();

        assert_eq!(violations, vec![FieldViolation::new("email", "Email is required")]);
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("@example.com")]
    #[case("user@")]
    fn test_malformed_email_is_rejected(#[case] email: &str) {
        let mut body = valid_body();
        body["email"] = json!(email);

        let violations =
            validate_registration(request(body), &PasswordPolicy::default()).unwrap_err();

        assert_eq!(
            violations,
            vec![FieldViolation::new("email", "Email must be a valid email address")]
        );
    }

    #[test]
    fn test_weak_password_lists_each_rule_and_other_fields() {
        let body = json!({
            "email": "not-an-email",
            "password": "abc",
            "username": "john doe",
            "name": "John Doe"
        });

        let violations =
            validate_registration(request(body), &PasswordPolicy::default()).unwrap_err();

        assert_eq!(
            fields(&violations),
            vec!["email", "password", "password", "password", "username"]
        );
    }

    #[test]
    fn test_empty_password_is_missing() {
        let mut body = valid_body();
        body["password"] = json!("");

        let violations =
            validate_registration(request(body), &PasswordPolicy::default()).unwrap_err();

        assert_eq!(violations, vec![FieldViolation::new("password", "Password is required")]);
    }

    #[test]
    fn test_password_policy_comes_from_configuration() {
        let mut body = valid_body();
        body["password"] = json!("simple");

        let relaxed = PasswordPolicy {
            min_length: 6,
            require_uppercase: false,
            require_digit: false,
            ..PasswordPolicy::default()
        };

        assert!(validate_registration(request(body.clone()), &relaxed).is_ok());
        assert!(validate_registration(request(body), &PasswordPolicy::default()).is_err());
    }

    #[test]
    fn test_nested_profile_uses_dotted_paths() {
        let mut body = valid_body();
        body["profile"] = json!({ "phone": "call-me", "bio": "x".repeat(501) });

        let violations =
            validate_registration(request(body), &PasswordPolicy::default()).unwrap_err();

        assert_eq!(fields(&violations), vec!["profile.bio", "profile.phone"]);
    }

    #[test]
    fn test_valid_profile_is_carried_over() {
        let mut body = valid_body();
        body["profile"] = json!({ "phone": "+82 10-1234-5678", "bio": "  hello  " });

        let validated =
            validate_registration(request(body), &PasswordPolicy::default()).unwrap();

        assert_eq!(
            validated.profile,
            Some(ProfileDetails {
                phone: Some("+82 10-1234-5678".to_string()),
                bio: Some("hello".to_string()),
            })
        );
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let validated =
            validate_registration(request(valid_body()), &PasswordPolicy::default()).unwrap();

        let debug = format!("{:?}", validated);
        assert!(!debug.contains("SecurePass123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
