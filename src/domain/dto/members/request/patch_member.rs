use serde::Deserialize;
use validator::Validate;

/// 닉네임 변경 요청
///
/// 핸들러가 인증된 회원 ID와 쿼리 파라미터로 직접 조립합니다.
#[derive(Debug, Clone, Validate)]
pub struct PatchMemberReq {
    pub member_id: i64,

    #[validate(length(min = 1, max = 20, message = "닉네임은 1-20자 사이여야 합니다"))]
    pub nick_name: String,
}

impl PatchMemberReq {
    pub fn new(member_id: i64, nick_name: String) -> Self {
        Self { member_id, nick_name }
    }
}

/// `GET /Read?nickName=` 쿼리
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMembersQuery {
    pub nick_name: Option<String>,
}

/// `PATCH /update?nickName=` 쿼리
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNickNameQuery {
    pub nick_name: Option<String>,
}
