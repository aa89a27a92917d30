//! # Domain Entities
//!
//! 영속성을 가지는 도메인 객체들입니다.

pub mod members;
