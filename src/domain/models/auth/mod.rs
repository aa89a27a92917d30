//! 요청 인증 모델

pub mod auth_mode;
pub mod authenticated_member;

pub use auth_mode::AuthMode;
pub use authenticated_member::{AuthenticatedMember, OptionalMember};
