//! 응답 봉투
//!
//! 모든 회원 API 응답은 `{ isSuccess, code, message, result? }` 형태로 감싸집니다.
//! 성공 시에는 `result`만 의미가 있고, 실패 시에는 `code`/`message`만 의미가 있으며
//! `result`는 JSON에서 생략됩니다.

use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use crate::core::status::BaseResponseStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T> {
    pub is_success: bool,
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> BaseResponse<T> {
    /// 요청에 성공한 경우
    pub fn success(result: T) -> Self {
        let status = BaseResponseStatus::SUCCESS;
        Self {
            is_success: true,
            code: status.code(),
            message: status.message().to_string(),
            result: Some(result),
        }
    }

    /// 요청에 실패한 경우
    pub fn from_status(status: BaseResponseStatus) -> Self {
        Self {
            is_success: status.is_success(),
            code: status.code(),
            message: status.message().to_string(),
            result: None,
        }
    }
}

impl<T: Serialize> Responder for BaseResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_carries_result() {
        let json = serde_json::to_value(BaseResponse::success("회원정보가 수정되었습니다.")).unwrap();
        assert_eq!(json["isSuccess"], true);
        assert_eq!(json["code"], 1000);
        assert_eq!(json["message"], "요청에 성공하였습니다.");
        assert_eq!(json["result"], "회원정보가 수정되었습니다.");
    }

    #[test]
    fn test_failure_envelope_omits_result() {
        let response = BaseResponse::<String>::from_status(BaseResponseStatus::NOT_EXIST_MEMBER);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isSuccess"], false);
        assert_eq!(json["code"], 3016);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_field_order_matches_wire_format() {
        let json = serde_json::to_string(&BaseResponse::success(1)).unwrap();
        assert_eq!(
            json,
            r#"{"isSuccess":true,"code":1000,"message":"요청에 성공하였습니다.","result":1}"#
        );
    }
}
