//! 회원 데이터 액세스 계층
//!
//! [`MemberRepository`] trait과 그 구현체들을 제공합니다.
//!
//! - [`MongoMemberRepository`](member_repo::MongoMemberRepository) - MongoDB `members` 컬렉션
//! - [`InMemoryMemberRepository`](memory_member_repo::InMemoryMemberRepository) - 프로세스 메모리

pub mod member_repo;
pub mod memory_member_repo;

pub use member_repo::MongoMemberRepository;
pub use memory_member_repo::InMemoryMemberRepository;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::members::Member;

/// 회원 저장소 포트
///
/// 모든 변경 메서드는 대상 레코드가 존재해 실제로 반영되었는지를 `bool`로 반환합니다.
/// 존재하지 않는 회원에 대한 변경은 에러가 아니라 `Ok(false)`입니다.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 다음 회원 ID를 발급합니다. 발급된 ID는 재사용되지 않습니다.
    async fn next_id(&self) -> AppResult<i64>;

    /// 회원을 저장하고 ID가 채워진 회원을 반환합니다.
    ///
    /// ID가 비어 있으면 [`next_id`](Self::next_id)로 발급합니다.
    /// 이메일이 이미 존재하면 `POST_USERS_EXISTS_EMAIL`로 실패합니다.
    async fn insert(&self, member: Member) -> AppResult<Member>;

    async fn find_by_id(&self, member_id: i64) -> AppResult<Option<Member>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// 전체 회원 (ID 오름차순)
    async fn find_all(&self) -> AppResult<Vec<Member>>;

    /// 닉네임이 정확히 일치하는 회원 (ID 오름차순)
    async fn find_by_nick_name(&self, nick_name: &str) -> AppResult<Vec<Member>>;

    async fn update_nick_name(&self, member_id: i64, nick_name: &str) -> AppResult<bool>;

    /// 저장된 액세스 토큰 교체. `None`이면 필드를 제거합니다.
    async fn update_access_token(&self, member_id: i64, access_token: Option<&str>) -> AppResult<bool>;

    /// 프로필 이미지 참조 교체. `None`이면 필드를 제거합니다.
    async fn update_profile_image(&self, member_id: i64, profile_image: Option<&str>) -> AppResult<bool>;

    async fn delete(&self, member_id: i64) -> AppResult<bool>;
}
