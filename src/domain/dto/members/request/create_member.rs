use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원 가입 요청 DTO
///
/// 이메일 형식은 핸들러에서 정규식으로 먼저 검사하므로
/// 여기서는 나머지 필드의 길이 제약만 선언합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostMemberReq {
    pub email: String,

    #[validate(length(min = 1, max = 64, message = "비밀번호는 1-64자 사이여야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 20, message = "닉네임은 1-20자 사이여야 합니다"))]
    pub nick_name: String,
}
