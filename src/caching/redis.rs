//! # Redis 클라이언트
//!
//! 토큰 블랙리스트 저장에 사용하는 Redis 클라이언트 래퍼입니다.
//! `ConnectionManager`가 단일 멀티플렉싱 연결을 유지하며
//! 끊어지면 자동으로 재연결합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::env;
use log::info;

/// Redis 클라이언트 래퍼
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new().await?;
/// redis.setex("blacklist_token:abc", 3600, "logout").await?;
/// assert!(redis.exists("blacklist_token:abc").await?);
/// ```
#[derive(Clone)]
pub struct RedisClient {
    connection: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`(기본 `redis://localhost:6379`)로 연결하고 PING으로 확인합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;
        let mut connection = ConnectionManager::new(client).await?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut connection).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { connection })
    }

    /// 만료 시간(초)과 함께 문자열 값을 저장합니다.
    pub async fn setex(&self, key: &str, seconds: u64, value: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.connection.clone();
        conn.set_ex(key, value, seconds).await
    }

    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.connection.clone();
        conn.exists(key).await
    }
}
