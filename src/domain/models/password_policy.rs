//! 비밀번호 정책 모델
//!
//! 정책 값은 실행 시 설정에서 주입됩니다 ([`crate::config::PasswordPolicyConfig`]).
//! 검사 함수는 부수 효과가 없으며, 위반한 규칙마다 하나의 메시지를 반환합니다.

use serde::{Deserialize, Serialize};

/// bcrypt가 실제로 사용하는 입력 길이 (바이트)
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// 비밀번호 최소 요구사항
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// 최소 길이 (문자 수)
    pub min_length: usize,
    /// 최대 길이 (문자 수)
    pub max_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    /// 영문/숫자가 아닌 문자 필수 여부
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: false,
        }
    }
}

impl PasswordPolicy {
    /// 정책 위반 메시지 목록을 반환합니다. 빈 목록이면 통과입니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let policy = PasswordPolicy::default();
    /// assert!(policy.check("MyPassword123").is_empty());
    /// assert_eq!(policy.check("short").len(), 3); // 길이, 대문자, 숫자
    /// ```
    pub fn check(&self, password: &str) -> Vec<String> {
        let mut problems = Vec::new();
        let length = password.chars().count();

        if length < self.min_length {
            problems.push(format!(
                "Password must be at least {} characters long",
                self.min_length
            ));
        }
        if length > self.max_length {
            problems.push(format!(
                "Password must be at most {} characters long",
                self.max_length
            ));
        }
        // 글자 수와 별개로, bcrypt가 잘라내는 길이는 허용하지 않음
        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            problems.push(format!(
                "Password must be at most {} bytes long",
                BCRYPT_MAX_PASSWORD_BYTES
            ));
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            problems.push("Password must contain at least one uppercase letter".to_string());
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
            problems.push("Password must contain at least one lowercase letter".to_string());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            problems.push("Password must contain at least one digit".to_string());
        }
        if self.require_special && password.chars().all(|c| c.is_alphanumeric()) {
            problems.push("Password must contain at least one special character".to_string());
        }

        problems
    }
}
