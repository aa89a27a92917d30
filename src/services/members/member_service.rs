//! # 회원 관리 서비스 구현
//!
//! 회원 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      MemberService                       │
//! │  • 가입 (중복 검사, bcrypt 해싱, ID 발급)                 │
//! │  • 로그인/로그아웃 (토큰 발급, 저장, 무효화)              │
//! │  • 조회 (전체, 닉네임 일치)                               │
//! │  • 닉네임/프로필 이미지 변경                              │
//! │  • 탈퇴 (이미지 제거, 토큰 무효화, 레코드 삭제)           │
//! └──────────────────────────────────────────────────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//!  MemberRepository      TokenService       ProfileImageStore
//! ```
//!
//! 모든 실패는 [`AppError`]로 반환되며, 비즈니스 규칙 위반은
//! `AppError::Status`에 해당 응답 상태를 실어 보냅니다.

use std::sync::Arc;
use bcrypt::{hash, verify};
use crate::{
    core::errors::{AppError, AppResult},
    core::status::BaseResponseStatus,
    domain::dto::members::{
        GetMemberRes, PatchMemberReq, PostLoginReq, PostLoginRes, PostMemberReq, PostMemberRes,
    },
    domain::entities::members::Member,
    domain::models::auth::AuthenticatedMember,
    domain::models::profile::ProfileImageUpload,
    repositories::members::MemberRepository,
    services::auth::TokenService,
    storage::ProfileImageStore,
};

/// 회원 관리 서비스
///
/// 생성 이후에는 불변이므로 `Arc`로 감싸 워커 간에 공유합니다.
pub struct MemberService {
    member_repo: Arc<dyn MemberRepository>,
    tokens: Arc<TokenService>,
    image_store: Arc<dyn ProfileImageStore>,
    bcrypt_cost: u32,
}

impl MemberService {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        tokens: Arc<TokenService>,
        image_store: Arc<dyn ProfileImageStore>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            member_repo,
            tokens,
            image_store,
            bcrypt_cost,
        }
    }

    /// 새 회원 가입
    ///
    /// # 처리 과정
    ///
    /// 1. **중복 확인**: 같은 이메일이 있으면 `POST_USERS_EXISTS_EMAIL`
    /// 2. **비밀번호 해싱**: 실패 시 `PASSWORD_ENCRYPTION_ERROR`
    /// 3. **저장**: 순차 ID 발급 후 저장
    ///
    /// 이메일 형식과 필드 길이는 핸들러에서 이미 검증되었다고 가정합니다.
    pub async fn create_member(&self, request: PostMemberReq) -> AppResult<PostMemberRes> {
        if self.member_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Status(BaseResponseStatus::POST_USERS_EXISTS_EMAIL));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).map_err(|e| {
            log::error!("비밀번호 해싱 실패: {}", e);
            AppError::Status(BaseResponseStatus::PASSWORD_ENCRYPTION_ERROR)
        })?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let member = Member::new(request.email, request.nick_name, password_hash);
        let saved = self.member_repo.insert(member).await?;

        log::info!("회원 가입 완료 - ID: {}", saved.member_id()?);
        PostMemberRes::try_from(saved)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 이메일이 없거나 비밀번호가 틀리면 구분 없이 `FAILED_TO_LOGIN`입니다.
    /// 발급된 토큰은 회원 레코드에 저장되어 로그아웃/탈퇴 시 함께 무효화됩니다.
    pub async fn login(&self, request: PostLoginReq) -> AppResult<PostLoginRes> {
        let member = self.member_repo
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::Status(BaseResponseStatus::FAILED_TO_LOGIN))?;
        let member_id = member.member_id()?;

        let is_valid = verify(&request.password, &member.password_hash).map_err(|e| {
            log::error!("비밀번호 검증 실패: {}", e);
            AppError::Status(BaseResponseStatus::FAILED_TO_LOGIN)
        })?;

        if !is_valid {
            log::warn!("로그인 실패 - 회원 ID: {}", member_id);
            return Err(AppError::Status(BaseResponseStatus::FAILED_TO_LOGIN));
        }

        let access_token = self.tokens.issue_access_token(member_id)?;
        self.member_repo
            .update_access_token(member_id, Some(&access_token))
            .await?;

        log::info!("로그인 성공 - 회원 ID: {}", member_id);
        Ok(PostLoginRes {
            member_id,
            access_token,
        })
    }

    /// 로그아웃
    ///
    /// 요청에 실린 토큰을 남은 수명 동안 무효화하고 회원 레코드의 저장 토큰을 지웁니다.
    /// 저장 토큰이 요청 토큰과 다르면(다른 기기의 로그인) 함께 무효화합니다.
    pub async fn logout(&self, member_id: i64, access_token: &str) -> AppResult<()> {
        let member = self.find_by_member_id_with_validation(member_id).await?;

        let claims = self.tokens.verify_token(access_token)?;
        self.tokens.revoke(access_token, &claims).await?;

        if let Some(stored) = member.access_token.as_deref().filter(|t| *t != access_token) {
            self.tokens.revoke_if_valid(stored).await?;
        }

        self.member_repo.update_access_token(member_id, None).await?;

        log::info!("로그아웃 완료 - 회원 ID: {}", member_id);
        Ok(())
    }

    /// 전체 회원 목록 (ID 오름차순)
    pub async fn get_members(&self) -> AppResult<Vec<GetMemberRes>> {
        let members = self.member_repo.find_all().await?;
        members.into_iter().map(GetMemberRes::try_from).collect()
    }

    /// 닉네임이 정확히 일치하는 회원 목록
    pub async fn get_members_by_nickname(&self, nick_name: &str) -> AppResult<Vec<GetMemberRes>> {
        let members = self.member_repo.find_by_nick_name(nick_name).await?;
        members.into_iter().map(GetMemberRes::try_from).collect()
    }

    /// 회원 조회. 없으면 `NOT_EXIST_MEMBER`.
    pub async fn find_by_member_id_with_validation(&self, member_id: i64) -> AppResult<Member> {
        self.member_repo
            .find_by_id(member_id)
            .await?
            .ok_or(AppError::Status(BaseResponseStatus::NOT_EXIST_MEMBER))
    }

    /// 닉네임 변경
    ///
    /// 회원이 없으면 `NOT_EXIST_MEMBER`, 조회 이후 갱신된 레코드가 없으면
    /// `MODIFY_FAIL_USERNAME`입니다.
    pub async fn modify_member_name(&self, request: PatchMemberReq) -> AppResult<()> {
        self.find_by_member_id_with_validation(request.member_id).await?;

        let updated = self.member_repo
            .update_nick_name(request.member_id, &request.nick_name)
            .await?;

        if !updated {
            return Err(AppError::Status(BaseResponseStatus::MODIFY_FAIL_USERNAME));
        }

        log::info!("닉네임 변경 - 회원 ID: {}", request.member_id);
        Ok(())
    }

    /// 프로필 이미지 변경 또는 삭제
    ///
    /// - `Some(upload)`: 이미지가 아니면 `PROFILE_INVALID_IMAGE`. 새 이미지를 먼저 저장하고
    ///   회원 레코드를 갱신한 뒤 이전 이미지를 제거합니다.
    /// - `None`: 저장된 이미지를 제거하고 참조를 지웁니다.
    pub async fn modify_profile(&self, member_id: i64, upload: Option<ProfileImageUpload>) -> AppResult<()> {
        let member = self.find_by_member_id_with_validation(member_id).await?;

        let new_reference = match upload {
            Some(upload) => {
                if !upload.is_image() {
                    return Err(AppError::Status(BaseResponseStatus::PROFILE_INVALID_IMAGE));
                }
                Some(self.image_store.store(member_id, &upload).await?)
            }
            None => None,
        };

        let updated = self.member_repo
            .update_profile_image(member_id, new_reference.as_deref())
            .await?;

        if !updated {
            // 처리 도중 회원이 삭제됨. 새로 쓴 파일 정리
            if let Some(reference) = &new_reference {
                self.remove_image_quietly(reference).await;
            }
            return Err(AppError::Status(BaseResponseStatus::NOT_EXIST_MEMBER));
        }

        if let Some(old) = member.profile_image.as_deref() {
            self.remove_image_quietly(old).await;
        }

        log::info!("프로필 이미지 {} - 회원 ID: {}",
            if new_reference.is_some() { "변경" } else { "삭제" }, member_id);
        Ok(())
    }

    /// 회원 탈퇴
    ///
    /// 프로필 이미지를 제거하고, 현재 토큰과 저장 토큰을 무효화한 뒤 레코드를 삭제합니다.
    pub async fn delete_member(&self, identity: &AuthenticatedMember) -> AppResult<()> {
        let member = self.find_by_member_id_with_validation(identity.member_id).await?;

        if let Some(image) = member.profile_image.as_deref() {
            self.remove_image_quietly(image).await;
        }

        self.tokens.revoke_if_valid(&identity.access_token).await?;
        if let Some(stored) = member.access_token.as_deref().filter(|t| *t != identity.access_token) {
            self.tokens.revoke_if_valid(stored).await?;
        }

        if !self.member_repo.delete(identity.member_id).await? {
            return Err(AppError::Status(BaseResponseStatus::NOT_EXIST_MEMBER));
        }

        log::info!("회원 탈퇴 완료 - 회원 ID: {}", identity.member_id);
        Ok(())
    }

    /// 이미지 제거 실패는 회원 요청을 실패시키지 않고 로그만 남깁니다.
    async fn remove_image_quietly(&self, reference: &str) {
        if let Err(e) = self.image_store.remove(reference).await {
            log::warn!("프로필 이미지 제거 실패 ({}): {}", reference, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;

    fn signup(email: &str, nick_name: &str) -> PostMemberReq {
        PostMemberReq {
            email: email.to_string(),
            password: "password1!".to_string(),
            nick_name: nick_name.to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> PostLoginReq {
        PostLoginReq {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn png() -> ProfileImageUpload {
        ProfileImageUpload {
            file_name: Some("me.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn assert_status<T: std::fmt::Debug>(result: AppResult<T>, expected: BaseResponseStatus) {
        match result {
            Err(error) => assert_eq!(error.status(), expected),
            Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        }
    }

    #[actix_web::test]
    async fn test_create_member_hashes_password() {
        let ctx = TestContext::new();
        let created = ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.nick_name, "alice");

        let stored = ctx.member_repo.find_by_id(1).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "password1!");
        assert!(verify("password1!", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        let result = ctx.state.members.create_member(signup("a@example.com", "other")).await;
        assert_status(result, BaseResponseStatus::POST_USERS_EXISTS_EMAIL);
    }

    #[actix_web::test]
    async fn test_login_stores_token() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        let login = ctx.state.members.login(credentials("a@example.com", "password1!")).await.unwrap();

        assert_eq!(login.member_id, 1);
        let stored = ctx.member_repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.access_token.as_deref(), Some(login.access_token.as_str()));
    }

    #[actix_web::test]
    async fn test_login_failures_are_indistinguishable() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        assert_status(
            ctx.state.members.login(credentials("a@example.com", "wrong")).await,
            BaseResponseStatus::FAILED_TO_LOGIN,
        );
        assert_status(
            ctx.state.members.login(credentials("nobody@example.com", "password1!")).await,
            BaseResponseStatus::FAILED_TO_LOGIN,
        );
    }

    #[actix_web::test]
    async fn test_logout_revokes_and_clears_token() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();
        let login = ctx.state.members.login(credentials("a@example.com", "password1!")).await.unwrap();

        ctx.state.members.logout(1, &login.access_token).await.unwrap();

        let stored = ctx.member_repo.find_by_id(1).await.unwrap().unwrap();
        assert!(stored.access_token.is_none());
        let header = format!("Bearer {}", login.access_token);
        assert_status(
            ctx.state.tokens.resolve_identity(Some(&header)).await,
            BaseResponseStatus::INVALID_JWT,
        );
    }

    #[actix_web::test]
    async fn test_member_listing_and_filter() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();
        ctx.state.members.create_member(signup("b@example.com", "bob")).await.unwrap();
        ctx.state.members.create_member(signup("c@example.com", "alice")).await.unwrap();

        assert_eq!(ctx.state.members.get_members().await.unwrap().len(), 3);

        let alices = ctx.state.members.get_members_by_nickname("alice").await.unwrap();
        let ids: Vec<i64> = alices.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(ctx.state.members.get_members_by_nickname("ali").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_find_missing_member() {
        let ctx = TestContext::new();
        assert_status(
            ctx.state.members.find_by_member_id_with_validation(42).await,
            BaseResponseStatus::NOT_EXIST_MEMBER,
        );
    }

    #[actix_web::test]
    async fn test_modify_member_name() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        ctx.state.members
            .modify_member_name(PatchMemberReq::new(1, "alicia".to_string()))
            .await
            .unwrap();
        let stored = ctx.member_repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.nick_name, "alicia");

        assert_status(
            ctx.state.members.modify_member_name(PatchMemberReq::new(9, "ghost".to_string())).await,
            BaseResponseStatus::NOT_EXIST_MEMBER,
        );
    }

    #[actix_web::test]
    async fn test_modify_profile_replaces_and_removes_image() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        ctx.state.members.modify_profile(1, Some(png())).await.unwrap();
        let first = ctx.member_repo.find_by_id(1).await.unwrap().unwrap().profile_image.unwrap();
        assert!(ctx.image_path(&first).exists());

        ctx.state.members.modify_profile(1, Some(png())).await.unwrap();
        let second = ctx.member_repo.find_by_id(1).await.unwrap().unwrap().profile_image.unwrap();
        assert_ne!(first, second);
        assert!(!ctx.image_path(&first).exists());

        ctx.state.members.modify_profile(1, None).await.unwrap();
        assert!(ctx.member_repo.find_by_id(1).await.unwrap().unwrap().profile_image.is_none());
        assert!(!ctx.image_path(&second).exists());
    }

    #[actix_web::test]
    async fn test_non_image_upload_is_rejected() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();

        let text = ProfileImageUpload {
            file_name: Some("notes.txt".to_string()),
            content_type: Some("text/plain".to_string()),
            bytes: b"hello".to_vec(),
        };
        assert_status(
            ctx.state.members.modify_profile(1, Some(text)).await,
            BaseResponseStatus::PROFILE_INVALID_IMAGE,
        );
    }

    #[actix_web::test]
    async fn test_delete_member_removes_everything() {
        let ctx = TestContext::new();
        ctx.state.members.create_member(signup("a@example.com", "alice")).await.unwrap();
        let login = ctx.state.members.login(credentials("a@example.com", "password1!")).await.unwrap();
        ctx.state.members.modify_profile(1, Some(png())).await.unwrap();
        let image = ctx.member_repo.find_by_id(1).await.unwrap().unwrap().profile_image.unwrap();

        let identity = AuthenticatedMember {
            member_id: 1,
            access_token: login.access_token.clone(),
        };
        ctx.state.members.delete_member(&identity).await.unwrap();

        assert!(ctx.member_repo.find_by_id(1).await.unwrap().is_none());
        assert!(!ctx.image_path(&image).exists());
        let header = format!("Bearer {}", login.access_token);
        assert_status(
            ctx.state.tokens.resolve_identity(Some(&header)).await,
            BaseResponseStatus::INVALID_JWT,
        );
    }
}
