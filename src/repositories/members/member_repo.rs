//! # MongoDB 회원 리포지토리
//!
//! `members` 컬렉션에 회원 문서를 저장합니다.
//!
//! ## 컬렉션 구성
//!
//! - **members**: `_id`는 순차 정수(i64), `email` 유니크 인덱스, `nick_name` 인덱스
//! - **counters**: `{ _id: "member_id", seq }` 형태의 ID 시퀀스 문서
//!
//! ID 발급은 `counters` 문서에 대한 `$inc` + upsert 단일 연산이므로
//! 동시 가입 요청에서도 같은 ID가 두 번 발급되지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    core::status::BaseResponseStatus,
    db::Database,
    domain::entities::members::Member,
};
use super::MemberRepository;

const MEMBER_COLLECTION: &str = "members";
const COUNTER_COLLECTION: &str = "counters";
const MEMBER_SEQUENCE: &str = "member_id";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB 기반 회원 저장소
///
/// ```rust,ignore
/// let repo = MongoMemberRepository::new(Arc::new(Database::new().await?));
/// repo.create_indexes().await?;
///
/// let saved = repo.insert(Member::new(email, nick_name, password_hash)).await?;
/// println!("새 회원 ID: {}", saved.member_id()?);
/// ```
pub struct MongoMemberRepository {
    db: Arc<Database>,
}

impl MongoMemberRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn members(&self) -> Collection<Member> {
        self.db.collection::<Member>(MEMBER_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.collection::<Document>(COUNTER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 가입 방지 및 로그인 조회
    /// 2. **닉네임 인덱스** - 닉네임 필터 조회
    ///
    /// 이미 중복 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let nick_name_index = IndexModel::builder()
            .keys(doc! { "nick_name": 1 })
            .options(IndexOptions::builder()
                .name("nick_name_asc".to_string())
                .build())
            .build();

        self.members()
            .create_indexes([email_index, nick_name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 부분 업데이트 공통 경로. 매칭된 문서가 있으면 `true`.
    async fn update_fields(&self, member_id: i64, update: Document) -> AppResult<bool> {
        let result = self.members()
            .update_one(doc! { "_id": member_id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// 선택 필드 갱신 문서. 값이 없으면 `$unset`으로 필드를 제거합니다.
    fn optional_field_update(field: &str, value: Option<&str>) -> Document {
        match value {
            Some(value) => doc! {
                "$set": { field: value, "updated_at": DateTime::now() }
            },
            None => doc! {
                "$unset": { field: "" },
                "$set": { "updated_at": DateTime::now() }
            },
        }
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters()
            .find_one_and_update(
                doc! { "_id": MEMBER_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("회원 ID 시퀀스를 발급하지 못했습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut member: Member) -> AppResult<Member> {
        if member.id.is_none() {
            member.id = Some(self.next_id().await?);
        }

        self.members()
            .insert_one(&member)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::Status(BaseResponseStatus::POST_USERS_EXISTS_EMAIL)
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(member)
    }

    async fn find_by_id(&self, member_id: i64) -> AppResult<Option<Member>> {
        self.members()
            .find_one(doc! { "_id": member_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        self.members()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Member>> {
        let cursor = self.members()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_nick_name(&self, nick_name: &str) -> AppResult<Vec<Member>> {
        let cursor = self.members()
            .find(doc! { "nick_name": nick_name })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_nick_name(&self, member_id: i64, nick_name: &str) -> AppResult<bool> {
        self.update_fields(
            member_id,
            doc! { "$set": { "nick_name": nick_name, "updated_at": DateTime::now() } },
        ).await
    }

    async fn update_access_token(&self, member_id: i64, access_token: Option<&str>) -> AppResult<bool> {
        self.update_fields(member_id, Self::optional_field_update("access_token", access_token))
            .await
    }

    async fn update_profile_image(&self, member_id: i64, profile_image: Option<&str>) -> AppResult<bool> {
        self.update_fields(member_id, Self::optional_field_update("profile_image", profile_image))
            .await
    }

    async fn delete(&self, member_id: i64) -> AppResult<bool> {
        let result = self.members()
            .delete_one(doc! { "_id": member_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
