//! 액세스 토큰 무효화 리포지토리 모듈
//!
//! 로그아웃 또는 탈퇴로 무효화된 액세스 토큰을 토큰의 남은 수명 동안 보관합니다.
//!
//! # Features
//!
//! - **Access Token Blacklist**: 무효화된 토큰 기록
//! - **TTL 자동 관리**: 토큰이 자연 만료되는 시점에 기록도 함께 사라짐
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{TokenRepository, RedisTokenRepository};
//!
//! let token_repo = RedisTokenRepository::new(redis.clone());
//! token_repo.blacklist("eyJhbGciOiJIUzI1NiIs...", 3600).await?;
//! assert!(token_repo.is_blacklisted("eyJhbGciOiJIUzI1NiIs...").await?);
//! ```

pub mod token_repository;
pub mod memory_token_repo;

pub use token_repository::*;
pub use memory_token_repo::InMemoryTokenRepository;

use async_trait::async_trait;
use crate::core::errors::AppResult;

/// 토큰 블랙리스트 포트
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// 토큰을 `ttl_seconds` 동안 사용할 수 없도록 기록합니다.
    async fn blacklist(&self, access_token: &str, ttl_seconds: u64) -> AppResult<()>;

    async fn is_blacklisted(&self, access_token: &str) -> AppResult<bool>;
}
