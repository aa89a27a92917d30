//! Member Entity Implementation
//!
//! 회원 엔티티의 핵심 구현체입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

/// 회원 엔티티
///
/// `members` 컬렉션에 저장되는 문서입니다. 식별자는 `counters` 컬렉션에서
/// 발급받은 순차 정수이며, 저장 전에는 `None`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 회원 이메일 (unique)
    pub email: String,
    /// 닉네임
    pub nick_name: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 마지막으로 발급된 액세스 토큰 (로그아웃 시 제거)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Member {
    /// 새 회원 생성 (저장 전)
    pub fn new(email: String, nick_name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nick_name,
            password_hash,
            access_token: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 회원의 ID
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 아직 저장되지 않아 ID가 없는 회원
    pub fn member_id(&self) -> AppResult<i64> {
        self.id.ok_or_else(|| {
            AppError::InternalError(format!("ID가 발급되지 않은 회원입니다: {}", self.email))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_has_no_token_or_image() {
        let member = Member::new(
            "alice@example.com".to_string(),
            "alice".to_string(),
            "hash".to_string(),
        );

        assert!(member.id.is_none());
        assert!(member.access_token.is_none());
        assert!(member.profile_image.is_none());
        assert!(matches!(member.member_id(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_saved_member_id() {
        let mut member = Member::new("a@b.com".to_string(), "a".to_string(), "h".to_string());
        member.id = Some(3);
        assert_eq!(member.member_id().unwrap(), 3);
    }

    #[test]
    fn test_unsaved_id_is_not_serialized() {
        let member = Member::new("a@b.com".to_string(), "a".to_string(), "h".to_string());
        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("access_token").is_none());
    }
}
