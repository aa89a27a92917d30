//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 구현이 아닌 trait 객체(`Arc<dyn MemberRepository>`,
//! `Arc<dyn TokenRepository>`)에 의존합니다. 운영 환경에서는 MongoDB/Redis
//! 구현을, 테스트에서는 메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::members::{MemberRepository, MongoMemberRepository};
//!
//! let member_repo: Arc<dyn MemberRepository> =
//!     Arc::new(MongoMemberRepository::new(database.clone()));
//! let member = member_repo.find_by_email("user@example.com").await?;
//! ```

pub mod members;
pub mod tokens;
