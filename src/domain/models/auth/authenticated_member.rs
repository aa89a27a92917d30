use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::core::status::BaseResponseStatus;

/// Bearer 토큰에서 한 번 해석된 호출자 신원
///
/// 인증 미들웨어가 요청 extensions에 넣어두며, 핸들러는 이 값을
/// 서비스 호출에 명시적으로 넘깁니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedMember {
    /// 회원 ID (JWT `sub`)
    pub member_id: i64,

    /// 요청에 실려 온 액세스 토큰 원문
    pub access_token: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어를 거치지 않은 라우트에서 추출하면 `EMPTY_JWT`로 실패합니다.
impl FromRequest for AuthenticatedMember {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedMember>() {
            Some(member) => ready(Ok(member.clone())),
            None => ready(Err(AppError::Status(BaseResponseStatus::EMPTY_JWT))),
        }
    }
}

/// 선택적 인증 회원 추출자
#[derive(Debug, Clone)]
pub struct OptionalMember(pub Option<AuthenticatedMember>);

impl FromRequest for OptionalMember {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let member = req.extensions().get::<AuthenticatedMember>().cloned();
        ready(Ok(OptionalMember(member)))
    }
}
