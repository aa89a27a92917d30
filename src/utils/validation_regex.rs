//! # 입력 형식 검증
//!
//! 정규식 기반 형식 검사 함수들입니다. 정규식은 최초 사용 시 한 번만 컴파일됩니다.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w!#$%&'*+/=?`{|}~^-]+(?:\.[\w!#$%&'*+/=?`{|}~^-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,6}$")
        .expect("email regex must compile")
});

/// 이메일 형식 검사
///
/// `local@domain.tld` 형태이며 최상위 도메인이 2~6자의 영문자인 경우만 허용합니다.
///
/// ```rust,ignore
/// assert!(is_regex_email("alice@example.com"));
/// assert!(!is_regex_email("alice@"));
/// ```
pub fn is_regex_email(target: &str) -> bool {
    EMAIL_REGEX.is_match(target)
}
