//! # Application Error Handling System
//!
//! 회원 서비스의 통합 에러 타입입니다.
//! 모든 비즈니스 규칙 위반은 응답 상태(`BaseResponseStatus`)를 실은
//! `AppError::Status`로 표현되고, 인프라 계층 실패는 별도 변형으로 표현되지만
//! 최종적으로는 모두 하나의 상태 코드로 환원됩니다.
//!
//! 핸들러는 `Result<_, AppError>`를 반환하며, `ResponseError` 구현이
//! 에러를 응답 봉투로 변환합니다. 어떤 에러도 봉투 밖으로 새어 나가지 않습니다.
//!
//! ## 상태 매핑
//!
//! | AppError | 응답 상태 |
//! |----------|-----------|
//! | `Status(s)` | `s` (그대로) |
//! | `DatabaseError` | `DATABASE_ERROR` |
//! | `RedisError` | `SERVER_ERROR` |
//! | `StorageError` | `PROFILE_UPLOAD_ERROR` |
//! | `InternalError` | `SERVER_ERROR` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//! use crate::core::status::BaseResponseStatus::*;
//!
//! async fn find(&self, id: i64) -> AppResult<Member> {
//!     self.member_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or(AppError::Status(NOT_EXIST_MEMBER))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::config::{ResponseConfig, StatusMode};
use crate::core::response::BaseResponse;
use crate::core::status::BaseResponseStatus;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 비즈니스 규칙 위반 (상태를 그대로 전달)
    #[error("{0}")]
    Status(BaseResponseStatus),

    /// MongoDB 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 연산 실패
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 프로필 이미지 저장소 실패
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러가 응답 봉투에 실을 상태
    pub fn status(&self) -> BaseResponseStatus {
        match self {
            AppError::Status(status) => *status,
            AppError::DatabaseError(_) => BaseResponseStatus::DATABASE_ERROR,
            AppError::RedisError(_) => BaseResponseStatus::SERVER_ERROR,
            AppError::StorageError(_) => BaseResponseStatus::PROFILE_UPLOAD_ERROR,
            AppError::InternalError(_) => BaseResponseStatus::SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// 기본 모드에서는 항상 200, `http` 모드에서는 상태 범주의 HTTP 상태를 사용합니다.
    fn status_code(&self) -> StatusCode {
        match ResponseConfig::status_mode() {
            StatusMode::Envelope => StatusCode::OK,
            StatusMode::Http => self.status().category().http_status(),
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        // 5xx 계열은 내부 원인을 로그로만 남기고 응답에는 상태 메시지만 싣습니다.
        match self {
            AppError::Status(_) => log::debug!("요청 실패: {}", status),
            other => log::error!("내부 오류 {}: {}", status, other),
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(BaseResponse::<()>::from_status(status))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
