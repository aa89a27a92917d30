use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::members::Member;

/// 회원 가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMemberRes {
    pub id: i64,
    pub nick_name: String,
}

impl TryFrom<Member> for PostMemberRes {
    type Error = AppError;

    fn try_from(member: Member) -> AppResult<Self> {
        Ok(Self {
            id: member.member_id()?,
            nick_name: member.nick_name,
        })
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLoginRes {
    pub member_id: i64,
    pub access_token: String,
}

/// 회원 조회 응답 DTO
///
/// 비밀번호 해시와 액세스 토큰은 노출하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMemberRes {
    pub id: i64,
    pub nick_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl TryFrom<Member> for GetMemberRes {
    type Error = AppError;

    fn try_from(member: Member) -> AppResult<Self> {
        let id = member.member_id()?;
        let Member {
            email,
            nick_name,
            profile_image,
            ..
        } = member;

        Ok(Self {
            id,
            nick_name,
            email,
            profile_image,
        })
    }
}
