//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 기동 시점에 [`AppState`](crate::core::state::AppState)에서 한 번 조립되며,
//! 저장소는 trait 객체로 주입됩니다.
//!
//! # Features
//!
//! - 회원 생명주기 관리 (가입, 조회, 수정, 탈퇴)
//! - JWT 토큰 기반 인증과 로그아웃 토큰 무효화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{members::MemberService, auth::TokenService};
//!
//! let members: &MemberService = &state.members;
//! let tokens: &TokenService = &state.tokens;
//! ```

pub mod members;
pub mod auth;
