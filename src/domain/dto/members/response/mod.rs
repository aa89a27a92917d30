//! 회원 API 응답 DTO

pub mod member_response;

pub use member_response::{GetMemberRes, PostLoginRes, PostMemberRes};
