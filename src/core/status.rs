//! # Response Status Catalogue
//!
//! 모든 API 응답에 실리는 상태 코드와 메시지를 정의합니다.
//! 응답 봉투(`BaseResponse`)는 이 카탈로그의 값만을 `code` / `message`로 사용하며,
//! 클라이언트는 HTTP 상태가 아닌 이 코드로 성공과 실패를 구분합니다.
//!
//! ## 코드 대역
//!
//! | 대역 | 의미 |
//! |------|------|
//! | `1000` | 성공 |
//! | `2000` ~ `2999` | 요청 오류 (입력값, JWT) |
//! | `3000` ~ `3999` | 응답 오류 (로그인 실패, 회원 없음) |
//! | `4000` ~ `4999` | 서버/데이터베이스 오류 |

use actix_web::http::StatusCode;

/// 상태 분류
///
/// 실패 상태를 다섯 가지 범주로 나눕니다. HTTP 상태 매핑 모드에서
/// 실제 HTTP 상태 코드를 결정할 때 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    InvalidInput,
    Unauthenticated,
    NotFound,
    Conflict,
    Internal,
}

impl StatusCategory {
    /// 범주에 대응하는 관용적인 HTTP 상태 코드
    pub fn http_status(&self) -> StatusCode {
        match self {
            StatusCategory::Success => StatusCode::OK,
            StatusCategory::InvalidInput => StatusCode::BAD_REQUEST,
            StatusCategory::Unauthenticated => StatusCode::UNAUTHORIZED,
            StatusCategory::NotFound => StatusCode::NOT_FOUND,
            StatusCategory::Conflict => StatusCode::CONFLICT,
            StatusCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API 응답 상태
///
/// 각 변형은 고정된 코드, 메시지, 성공 여부, 범주를 가집니다.
/// 도메인 에러는 이 값을 그대로 실어 나르며 응답 봉투까지 변형 없이 전달됩니다.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseResponseStatus {
    /// 1000 : 요청 성공
    SUCCESS,

    /// 2000 : Request 오류
    REQUEST_ERROR,
    EMPTY_JWT,
    INVALID_JWT,
    INVALID_USER_JWT,

    // [POST] /create, /log-in
    POST_USERS_INVALID_EMAIL,
    POST_USERS_EXISTS_EMAIL,

    // [PATCH] /update, /update-profile
    PATCH_USERS_EMPTY_NICKNAME,
    PROFILE_INVALID_IMAGE,

    /// 3000 : Response 오류
    FAILED_TO_LOGIN,
    NOT_EXIST_MEMBER,

    /// 4000 : Database, Server 오류
    DATABASE_ERROR,
    SERVER_ERROR,
    PASSWORD_ENCRYPTION_ERROR,
    MODIFY_FAIL_USERNAME,
    PROFILE_UPLOAD_ERROR,
}

impl BaseResponseStatus {
    pub fn code(&self) -> u32 {
        match self {
            Self::SUCCESS => 1000,
            Self::REQUEST_ERROR => 2000,
            Self::EMPTY_JWT => 2001,
            Self::INVALID_JWT => 2002,
            Self::INVALID_USER_JWT => 2003,
            Self::POST_USERS_INVALID_EMAIL => 2016,
            Self::POST_USERS_EXISTS_EMAIL => 2017,
            Self::PATCH_USERS_EMPTY_NICKNAME => 2018,
            Self::PROFILE_INVALID_IMAGE => 2030,
            Self::FAILED_TO_LOGIN => 3014,
            Self::NOT_EXIST_MEMBER => 3016,
            Self::DATABASE_ERROR => 4000,
            Self::SERVER_ERROR => 4001,
            Self::PASSWORD_ENCRYPTION_ERROR => 4011,
            Self::MODIFY_FAIL_USERNAME => 4014,
            Self::PROFILE_UPLOAD_ERROR => 4020,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::SUCCESS => "요청에 성공하였습니다.",
            Self::REQUEST_ERROR => "입력값을 확인해주세요.",
            Self::EMPTY_JWT => "JWT를 입력해주세요.",
            Self::INVALID_JWT => "유효하지 않은 JWT입니다.",
            Self::INVALID_USER_JWT => "권한이 없는 유저의 접근입니다.",
            Self::POST_USERS_INVALID_EMAIL => "이메일 형식을 확인해주세요.",
            Self::POST_USERS_EXISTS_EMAIL => "중복된 이메일입니다.",
            Self::PATCH_USERS_EMPTY_NICKNAME => "닉네임을 입력해주세요.",
            Self::PROFILE_INVALID_IMAGE => "이미지 파일만 업로드할 수 있습니다.",
            Self::FAILED_TO_LOGIN => "없는 아이디거나 비밀번호가 틀렸습니다.",
            Self::NOT_EXIST_MEMBER => "존재하지 않는 회원입니다.",
            Self::DATABASE_ERROR => "데이터베이스 연결에 실패하였습니다.",
            Self::SERVER_ERROR => "서버와의 연결에 실패하였습니다.",
            Self::PASSWORD_ENCRYPTION_ERROR => "비밀번호 암호화에 실패하였습니다.",
            Self::MODIFY_FAIL_USERNAME => "유저네임 수정 실패",
            Self::PROFILE_UPLOAD_ERROR => "프로필 이미지 업로드에 실패하였습니다.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::SUCCESS)
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Self::SUCCESS => StatusCategory::Success,
            Self::REQUEST_ERROR
            | Self::POST_USERS_INVALID_EMAIL
            | Self::PATCH_USERS_EMPTY_NICKNAME
            | Self::PROFILE_INVALID_IMAGE => StatusCategory::InvalidInput,
            Self::EMPTY_JWT
            | Self::INVALID_JWT
            | Self::INVALID_USER_JWT
            | Self::FAILED_TO_LOGIN => StatusCategory::Unauthenticated,
            Self::NOT_EXIST_MEMBER => StatusCategory::NotFound,
            Self::POST_USERS_EXISTS_EMAIL => StatusCategory::Conflict,
            Self::DATABASE_ERROR
            | Self::SERVER_ERROR
            | Self::PASSWORD_ENCRYPTION_ERROR
            | Self::MODIFY_FAIL_USERNAME
            | Self::PROFILE_UPLOAD_ERROR => StatusCategory::Internal,
        }
    }
}

impl std::fmt::Display for BaseResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_invalid_email_code_is_fixed() {
        let status = BaseResponseStatus::POST_USERS_INVALID_EMAIL;
        assert_eq!(status.code(), 2016);
        assert_eq!(status.message(), "이메일 형식을 확인해주세요.");
        assert!(!status.is_success());
    }

    #[rstest]
    #[case(BaseResponseStatus::SUCCESS, StatusCategory::Success, StatusCode::OK)]
    #[case(BaseResponseStatus::POST_USERS_INVALID_EMAIL, StatusCategory::InvalidInput, StatusCode::BAD_REQUEST)]
    #[case(BaseResponseStatus::EMPTY_JWT, StatusCategory::Unauthenticated, StatusCode::UNAUTHORIZED)]
    #[case(BaseResponseStatus::FAILED_TO_LOGIN, StatusCategory::Unauthenticated, StatusCode::UNAUTHORIZED)]
    #[case(BaseResponseStatus::NOT_EXIST_MEMBER, StatusCategory::NotFound, StatusCode::NOT_FOUND)]
    #[case(BaseResponseStatus::POST_USERS_EXISTS_EMAIL, StatusCategory::Conflict, StatusCode::CONFLICT)]
    #[case(BaseResponseStatus::DATABASE_ERROR, StatusCategory::Internal, StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_category_and_http_mapping(
        #[case] status: BaseResponseStatus,
        #[case] category: StatusCategory,
        #[case] http: StatusCode,
    ) {
        assert_eq!(status.category(), category);
        assert_eq!(status.category().http_status(), http);
    }
}
