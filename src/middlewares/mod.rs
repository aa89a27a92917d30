//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증, 블랙리스트 확인
//! - 회원 신원을 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! 강제 모드에서 인증에 실패하면 핸들러를 실행하지 않고
//! `EMPTY_JWT` / `INVALID_JWT` / `INVALID_USER_JWT` 응답 봉투를 반환합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use crate::middlewares::AuthMiddleware;
//!
//! #[delete("/delete", wrap = "AuthMiddleware::required()")]
//! async fn delete_member(
//!     state: web::Data<AppState>,
//!     member: AuthenticatedMember,
//! ) -> Result<BaseResponse<&'static str>, AppError> {
//!     state.members.delete_member(&member).await?;
//!     Ok(BaseResponse::success("회원 탈퇴가 완료되었습니다."))
//! }
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
