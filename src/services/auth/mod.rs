//! 인증 서비스 모듈
//!
//! JWT 액세스 토큰의 발급, 검증, 무효화를 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//! - 로그아웃/탈퇴 토큰 블랙리스트
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let access_token = state.tokens.issue_access_token(member_id)?;
//! let identity = state.tokens.resolve_identity(auth_header).await?;
//! ```

pub mod token_service;

pub use token_service::*;
