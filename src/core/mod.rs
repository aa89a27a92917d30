//! # Core Module
//!
//! 서비스 전반이 공유하는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`status`] - 응답 상태 코드
//! - **BaseResponseStatus**: 코드, 메시지, 성공 여부를 가진 상태 목록
//! - **StatusCategory**: 실패 범주 (입력 오류, 미인증, 미존재, 충돌, 내부 오류)
//!
//! ### [`response`] - 응답 봉투
//! - **BaseResponse**: `{ isSuccess, code, message, result? }`
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 봉투 응답 변환
//!
//! ### [`state`] - 서비스 조립
//! - **AppState**: 핸들러가 공유하는 서비스 묶음
//! - **AppPorts**: 저장소 구현 주입용 파라미터 객체
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//! use crate::core::status::BaseResponseStatus;
//!
//! #[post("/create")]
//! async fn create_member(
//!     state: web::Data<AppState>,
//!     payload: web::Json<PostMemberReq>,
//! ) -> Result<BaseResponse<PostMemberRes>, AppError> {
//!     if !is_regex_email(&payload.email) {
//!         return Err(AppError::Status(BaseResponseStatus::POST_USERS_INVALID_EMAIL));
//!     }
//!     let created = state.members.create_member(payload.into_inner()).await?;
//!     Ok(BaseResponse::success(created))
//! }
//! ```

pub mod errors;
pub mod response;
pub mod state;
pub mod status;

pub use errors::*;
pub use response::*;
pub use state::*;
pub use status::*;
