//! 테스트 공용 조립 도구
//!
//! 메모리 저장소와 임시 디렉터리 이미지 저장소로 `AppState`를 만듭니다.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use crate::{
    core::state::{AppPorts, AppState},
    repositories::members::InMemoryMemberRepository,
    repositories::tokens::InMemoryTokenRepository,
    storage::LocalProfileImageStore,
};

pub const TEST_IMAGE_BASE_URL: &str = "http://localhost:8080/static/profile";

pub struct TestContext {
    pub state: AppState,
    pub member_repo: Arc<InMemoryMemberRepository>,
    pub image_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let image_dir = tempfile::tempdir().expect("create temp dir");
        let member_repo = Arc::new(InMemoryMemberRepository::new());

        let state = AppState::new(AppPorts {
            member_repo: member_repo.clone(),
            token_repo: Arc::new(InMemoryTokenRepository::new()),
            image_store: Arc::new(LocalProfileImageStore::new(image_dir.path(), TEST_IMAGE_BASE_URL)),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 1,
            // 테스트 속도를 위해 최소 cost
            bcrypt_cost: 4,
        });

        Self {
            state,
            member_repo,
            image_dir,
        }
    }

    /// 저장된 이미지 참조가 가리키는 로컬 파일 경로
    pub fn image_path(&self, reference: &str) -> PathBuf {
        let file_name = reference.rsplit('/').next().unwrap_or_default();
        self.image_dir.path().join(file_name)
    }
}
