//! # Domain Layer Module
//!
//! 회원 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (Member)
//! ├── dto       - HTTP 요청/응답 객체
//! └── models    - 값 객체 (인증 신원, 토큰 클레임, 업로드 이미지)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
