use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::caching::redis::RedisClient;
use crate::core::errors::{AppError, AppResult};
use super::TokenRepository;

const BLACKLIST_KEY_PREFIX: &str = "blacklist_token:";

/// Redis 기반 액세스 토큰 블랙리스트
///
/// 토큰 원문 대신 SHA-256 해시를 키로 사용합니다.
///
/// - **키 패턴**: `blacklist_token:{sha256(token)}`
/// - **TTL**: 토큰의 남은 유효 시간
pub struct RedisTokenRepository {
    redis: Arc<RedisClient>,
}

/// 블랙리스트에 기록되는 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistedTokenInfo {
    /// 블랙리스트 추가 시간 (Unix timestamp)
    pub blacklisted_at: i64,
    /// 원래 토큰의 만료 시간 추정치 (Unix timestamp)
    pub expires_at: i64,
}

impl RedisTokenRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

}

/// 토큰을 SHA256 해시(hex)로 변환
fn hash_token(access_token: &str) -> String {
    format!("{:x}", Sha256::digest(access_token.as_bytes()))
}

fn blacklist_key(token_hash: &str) -> String {
    format!("{}{}", BLACKLIST_KEY_PREFIX, token_hash)
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn blacklist(&self, access_token: &str, ttl_seconds: u64) -> AppResult<()> {
        let token_hash = hash_token(access_token);
        let key = blacklist_key(&token_hash);
        let now = Utc::now().timestamp();

        let info = BlacklistedTokenInfo {
            blacklisted_at: now,
            expires_at: now + ttl_seconds as i64,
        };
        let info_json = serde_json::to_string(&info)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.redis
            .setex(&key, ttl_seconds.max(1), &info_json)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!("토큰이 블랙리스트에 추가됨 - 토큰 해시: {}, TTL: {}초", &token_hash[..16], ttl_seconds);
        Ok(())
    }

    async fn is_blacklisted(&self, access_token: &str) -> AppResult<bool> {
        let key = blacklist_key(&hash_token(access_token));
        self.redis
            .exists(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
