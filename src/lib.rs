//! 회원 서비스 백엔드
//!
//! Rust 기반의 회원 관리 REST API 서비스입니다.
//! 이메일/비밀번호 가입과 로그인, JWT 액세스 토큰 인증, 닉네임과 프로필 이미지 관리,
//! 회원 탈퇴를 제공하며 모든 응답을 `{ isSuccess, code, message, result }` 봉투로 감쌉니다.
//!
//! # Features
//!
//! - **회원 관리**: 가입, 목록/닉네임 조회, 닉네임 변경, 탈퇴
//! - **JWT 인증**: HS256 액세스 토큰, 로그아웃 시 Redis 블랙리스트
//! - **프로필 이미지**: multipart 업로드, 교체, 삭제
//! - **명시적 조립**: 저장소 trait 객체를 `AppState`에서 한 번 조립
//! - **MongoDB**: 회원 데이터 영구 저장
//! - **Redis**: 무효화된 토큰 보관
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 입력 검증, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (+ 로컬 이미지 디렉터리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use member_service_backend::core::state::{AppPorts, AppState};
//!
//! let state = AppState::new(ports);
//! let created = state.members.create_member(request).await?;
//! let login = state.members.login(credentials).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
mod test_support;
