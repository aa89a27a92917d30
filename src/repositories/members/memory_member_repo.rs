//! 메모리 기반 회원 리포지토리
//!
//! MongoDB 없이 서비스와 핸들러를 검증할 때 사용합니다.
//! 동작은 MongoDB 구현과 같습니다: 순차 ID, 이메일 유일성, ID 오름차순 조회.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::{
    core::errors::{AppError, AppResult},
    core::status::BaseResponseStatus,
    domain::entities::members::Member,
};
use super::MemberRepository;

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<BTreeMap<i64, Member>>,
    sequence: AtomicI64,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, BTreeMap<i64, Member>>> {
        self.members
            .lock()
            .map_err(|_| AppError::InternalError("member store lock poisoned".to_string()))
    }

    fn modify<F>(&self, member_id: i64, apply: F) -> AppResult<bool>
    where
        F: FnOnce(&mut Member),
    {
        let mut members = self.lock()?;
        match members.get_mut(&member_id) {
            Some(member) => {
                apply(member);
                member.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn next_id(&self) -> AppResult<i64> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn insert(&self, mut member: Member) -> AppResult<Member> {
        if member.id.is_none() {
            member.id = Some(self.next_id().await?);
        }

        let mut members = self.lock()?;
        if members.values().any(|existing| existing.email == member.email) {
            return Err(AppError::Status(BaseResponseStatus::POST_USERS_EXISTS_EMAIL));
        }

        members.insert(member.member_id()?, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, member_id: i64) -> AppResult<Option<Member>> {
        Ok(self.lock()?.get(&member_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        Ok(self.lock()?.values().find(|m| m.email == email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Member>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn find_by_nick_name(&self, nick_name: &str) -> AppResult<Vec<Member>> {
        Ok(self.lock()?
            .values()
            .filter(|m| m.nick_name == nick_name)
            .cloned()
            .collect())
    }

    async fn update_nick_name(&self, member_id: i64, nick_name: &str) -> AppResult<bool> {
        self.modify(member_id, |m| m.nick_name = nick_name.to_string())
    }

    async fn update_access_token(&self, member_id: i64, access_token: Option<&str>) -> AppResult<bool> {
        self.modify(member_id, |m| m.access_token = access_token.map(str::to_string))
    }

    async fn update_profile_image(&self, member_id: i64, profile_image: Option<&str>) -> AppResult<bool> {
        self.modify(member_id, |m| m.profile_image = profile_image.map(str::to_string))
    }

    async fn delete(&self, member_id: i64) -> AppResult<bool> {
        Ok(self.lock()?.remove(&member_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(email: &str, nick_name: &str) -> Member {
        Member::new(email.to_string(), nick_name.to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryMemberRepository::new();

        let first = repo.insert(member("a@example.com", "a")).await.unwrap();
        let second = repo.insert(member("b@example.com", "b")).await.unwrap();

        assert_eq!(first.member_id().unwrap(), 1);
        assert_eq!(second.member_id().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(member("a@example.com", "a")).await.unwrap();

        let result = repo.insert(member("a@example.com", "other")).await;
        assert!(matches!(
            result,
            Err(AppError::Status(BaseResponseStatus::POST_USERS_EXISTS_EMAIL))
        ));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_nick_name_filter_is_exact_match() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(member("a@example.com", "alice")).await.unwrap();
        repo.insert(member("b@example.com", "alice2")).await.unwrap();
        repo.insert(member("c@example.com", "alice")).await.unwrap();

        let found = repo.find_by_nick_name("alice").await.unwrap();
        let ids: Vec<i64> = found
            .iter()
            .map(Member::member_id)
            .collect::<Result<Vec<i64>, _>>()
            .unwrap();
        assert_eq!(ids, vec![1, 3]);
    }

    #[actix_web::test]
    async fn test_updates_on_missing_member_return_false() {
        let repo = InMemoryMemberRepository::new();

        assert!(!repo.update_nick_name(99, "ghost").await.unwrap());
        assert!(!repo.update_access_token(99, Some("t")).await.unwrap());
        assert!(!repo.delete(99).await.unwrap());
    }

    #[actix_web::test]
    async fn test_clearing_optional_fields() {
        let repo = InMemoryMemberRepository::new();
        let saved = repo.insert(member("a@example.com", "a")).await.unwrap();
        let id = saved.member_id().unwrap();

        repo.update_profile_image(id, Some("http://img/1.png")).await.unwrap();
        repo.update_profile_image(id, None).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(found.profile_image.is_none());
    }
}
