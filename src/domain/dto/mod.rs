//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다. 필드는 camelCase로 직렬화됩니다.

pub mod members;

pub use members::*;
