//! 회원 API 요청 DTO

pub mod create_member;
pub mod login_member;
pub mod patch_member;

pub use create_member::PostMemberReq;
pub use login_member::PostLoginReq;
pub use patch_member::{GetMembersQuery, PatchMemberReq, UpdateNickNameQuery};
