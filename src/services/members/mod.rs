//! 회원 관리 서비스 모듈
//!
//! 회원 가입, 로그인/로그아웃, 조회, 닉네임 및 프로필 이미지 변경, 탈퇴를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MemberService;
//!
//! let created = state.members.create_member(request).await?;
//! let login = state.members.login(PostLoginReq { email, password }).await?;
//! ```

pub mod member_service;

pub use member_service::*;
