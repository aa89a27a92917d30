//! JWT 액세스 토큰 클레임

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 회원 ID (문자열)
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰도 서로 구별됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl TokenClaims {
    /// `sub`를 회원 ID로 해석합니다.
    pub fn member_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
