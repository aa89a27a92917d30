//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`validation_regex`] - 이메일 등 형식 검증 정규식
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation_regex::is_regex_email;
//!
//! if !is_regex_email(&request.email) {
//!     return Err(AppError::Status(POST_USERS_INVALID_EMAIL));
//! }
//! ```

pub mod validation_regex;
