//! 프로필 이미지 저장소 모듈
//!
//! 서비스 계층은 [`ProfileImageStore`] trait에만 의존하며, 저장된 이미지는
//! 회원 문서에 문자열 참조(공개 URL)로 기록됩니다.
//!
//! ```bash
//! export PROFILE_IMAGE_DIR="./uploads/profile"
//! export PROFILE_IMAGE_BASE_URL="https://cdn.example.com/profile"
//! ```

pub mod local_store;

pub use local_store::LocalProfileImageStore;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::models::profile::ProfileImageUpload;

/// 프로필 이미지 저장소 포트
#[async_trait]
pub trait ProfileImageStore: Send + Sync {
    /// 이미지를 저장하고 회원 문서에 기록할 참조를 반환합니다.
    async fn store(&self, member_id: i64, upload: &ProfileImageUpload) -> AppResult<String>;

    /// 참조가 가리키는 이미지를 제거합니다. 이미 없는 이미지는 성공으로 취급합니다.
    async fn remove(&self, reference: &str) -> AppResult<()>;
}
