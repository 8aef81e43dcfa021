//! 인증 및 비밀번호 정책 설정

use std::env;
use crate::domain::models::password_policy::PasswordPolicy;

/// JWT 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }
}

/// 비밀번호 정책 설정
///
/// # Environment Variables
///
/// * `PASSWORD_MIN_LENGTH` - 최소 길이 (기본값: 8)
/// * `PASSWORD_MAX_LENGTH` - 최대 길이 (기본값: 128)
/// * `PASSWORD_REQUIRE_UPPERCASE` - 대문자 필수 (기본값: true)
/// * `PASSWORD_REQUIRE_LOWERCASE` - 소문자 필수 (기본값: true)
/// * `PASSWORD_REQUIRE_DIGIT` - 숫자 필수 (기본값: true)
/// * `PASSWORD_REQUIRE_SPECIAL` - 특수문자 필수 (기본값: false)
pub struct PasswordPolicyConfig;

impl PasswordPolicyConfig {
    pub fn load() -> PasswordPolicy {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 정책을 구성합니다. 해석할 수 없는 값은 기본값으로 대체됩니다.
    pub fn from_lookup<F>(lookup: F) -> PasswordPolicy
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PasswordPolicy::default();

        let usize_var = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };
        let bool_var = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(default)
        };

        let min_length = usize_var("PASSWORD_MIN_LENGTH", defaults.min_length).max(1);
        let max_length = usize_var("PASSWORD_MAX_LENGTH", defaults.max_length).max(min_length);

        PasswordPolicy {
            min_length,
            max_length,
            require_uppercase: bool_var("PASSWORD_REQUIRE_UPPERCASE", defaults.require_uppercase),
            require_lowercase: bool_var("PASSWORD_REQUIRE_LOWERCASE", defaults.require_lowercase),
            require_digit: bool_var("PASSWORD_REQUIRE_DIGIT", defaults.require_digit),
            require_special: bool_var("PASSWORD_REQUIRE_SPECIAL", defaults.require_special),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn policy_from(pairs: &[(&str, &str)]) -> PasswordPolicy {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PasswordPolicyConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(policy_from(&[]), PasswordPolicy::default());
    }

    #[test]
    fn test_reads_overrides() {
        let policy = policy_from(&[
            ("PASSWORD_MIN_LENGTH", "12"),
            ("PASSWORD_REQUIRE_UPPERCASE", "false"),
            ("PASSWORD_REQUIRE_SPECIAL", "yes"),
        ]);

        assert_eq!(policy.min_length, 12);
        assert!(!policy.require_uppercase);
        assert!(policy.require_special);
        assert!(policy.require_digit);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let policy = policy_from(&[
            ("PASSWORD_MIN_LENGTH", "abc"),
            ("PASSWORD_REQUIRE_DIGIT", "maybe"),
        ]);

        assert_eq!(policy.min_length, 8);
        assert!(policy.require_digit);
    }

    #[test]
    fn test_max_length_never_below_min_length() {
        let policy = policy_from(&[("PASSWORD_MIN_LENGTH", "20"), ("PASSWORD_MAX_LENGTH", "10")]);
        assert_eq!(policy.max_length, 20);
    }
}
