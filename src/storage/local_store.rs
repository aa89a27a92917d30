//! # 로컬 디스크 프로필 이미지 저장소
//!
//! 설정된 디렉터리에 `{member_id}_{uuid}.{ext}` 이름으로 파일을 쓰고
//! `{base_url}/{file}` 형태의 공개 URL을 참조로 돌려줍니다.
//! 파일 입출력은 `web::block`으로 블로킹 스레드 풀에서 수행합니다.

use std::io;
use std::path::PathBuf;
use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::profile::ProfileImageUpload;
use super::ProfileImageStore;

pub struct LocalProfileImageStore {
    root: PathBuf,
    base_url: String,
}

impl LocalProfileImageStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// 참조에서 이 저장소가 관리하는 파일명을 꺼냅니다.
    ///
    /// 다른 곳을 가리키는 URL이나 경로 이동이 포함된 이름은 `None`입니다.
    fn file_name_of<'a>(&self, reference: &'a str) -> Option<&'a str> {
        reference
            .strip_prefix(self.base_url.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| {
                !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
            })
    }
}

#[async_trait]
impl ProfileImageStore for LocalProfileImageStore {
    async fn store(&self, member_id: i64, upload: &ProfileImageUpload) -> AppResult<String> {
        let file_name = format!("{}_{}.{}", member_id, Uuid::new_v4().simple(), upload.extension());
        let root = self.root.clone();
        let path = root.join(&file_name);
        let bytes = upload.bytes.clone();

        web::block(move || -> io::Result<()> {
            std::fs::create_dir_all(&root)?;
            std::fs::write(&path, bytes)
        })
        .await
        .map_err(|e| AppError::StorageError(e.to_string()))?
        .map_err(|e| AppError::StorageError(e.to_string()))?;

        log::info!("프로필 이미지 저장 - 회원: {}, 파일: {}", member_id, file_name);
        Ok(format!("{}/{}", self.base_url, file_name))
    }

    async fn remove(&self, reference: &str) -> AppResult<()> {
        let Some(file_name) = self.file_name_of(reference) else {
            log::debug!("관리 대상이 아닌 이미지 참조는 건너뜁니다: {}", reference);
            return Ok(());
        };
        let path = self.root.join(file_name);

        web::block(move || match std::fs::remove_file(&path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        })
        .await
        .map_err(|e| AppError::StorageError(e.to_string()))?
        .map_err(|e| AppError::StorageError(e.to_string()))
    }
}
