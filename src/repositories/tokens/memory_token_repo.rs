//! 메모리 기반 토큰 블랙리스트 (만료 시각 포함)

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use super::TokenRepository;

#[derive(Default)]
pub struct InMemoryTokenRepository {
    entries: Mutex<HashMap<String, Instant>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn blacklist(&self, access_token: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut entries = self.entries
            .lock()
            .map_err(|_| AppError::InternalError("token store lock poisoned".to_string()))?;

        entries.insert(
            access_token.to_string(),
            Instant::now() + Duration::from_secs(ttl_seconds.max(1)),
        );
        Ok(())
    }

    async fn is_blacklisted(&self, access_token: &str) -> AppResult<bool> {
        let mut entries = self.entries
            .lock()
            .map_err(|_| AppError::InternalError("token store lock poisoned".to_string()))?;

        // 만료된 항목은 조회 시점에 정리
        entries.retain(|_, expires_at| *expires_at > Instant::now());
        Ok(entries.contains_key(access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_blacklisted_token_is_reported() {
        let repo = InMemoryTokenRepository::new();
        assert!(!repo.is_blacklisted("token-a").await.unwrap());

        repo.blacklist("token-a", 60).await.unwrap();

        assert!(repo.is_blacklisted("token-a").await.unwrap());
        assert!(!repo.is_blacklisted("token-b").await.unwrap());
    }
}
