//! # Domain Models Module
//!
//! 영속성이 없는 도메인 값 객체들입니다.
//!
//! - [`auth`] - 요청 경계에서 해석된 호출자 신원과 인증 모드
//! - [`token`] - JWT 클레임
//! - [`profile`] - 업로드된 프로필 이미지

pub mod auth;
pub mod token;
pub mod profile;
