//! JWT 토큰 관리 서비스 구현
//!
//! 회원 액세스 토큰의 발급, 검증, 무효화를 담당합니다.
//! 서명은 HMAC-SHA256(HS256)이며, 무효화된 토큰은 [`TokenRepository`]의
//! 블랙리스트에 남은 수명 동안 기록됩니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::{
    core::errors::{AppError, AppResult},
    core::status::BaseResponseStatus,
    domain::models::auth::AuthenticatedMember,
    domain::models::token::TokenClaims,
    repositories::tokens::TokenRepository,
};

/// JWT 토큰 관리 서비스
///
/// ```rust,ignore
/// let tokens = TokenService::new(token_repo, JwtConfig::secret(), JwtConfig::expiration_hours());
///
/// let access_token = tokens.issue_access_token(42)?;
/// let identity = tokens.resolve_identity(Some(&format!("Bearer {}", access_token))).await?;
/// assert_eq!(identity.member_id, 42);
/// ```
pub struct TokenService {
    token_repo: Arc<dyn TokenRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(token_repo: Arc<dyn TokenRepository>, secret: String, expiration_hours: i64) -> Self {
        // 블랙리스트 TTL이 `exp`까지이므로 만료 유예를 두지 않습니다.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            token_repo,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiration_hours,
        }
    }

    /// 회원을 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue_access_token(&self, member_id: i64) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: member_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// JWT 서명과 만료 시간 검증
    ///
    /// 만료(유예 없음), 서명 불일치, 형식 오류 모두 `INVALID_JWT`입니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                AppError::Status(BaseResponseStatus::INVALID_JWT)
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `EMPTY_JWT` - 헤더가 없거나 비어 있음
    /// * `INVALID_JWT` - Bearer 형식이 아니거나 토큰이 비어 있음
    pub fn extract_bearer_token<'a>(&self, auth_header: Option<&'a str>) -> AppResult<&'a str> {
        let header = auth_header
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(AppError::Status(BaseResponseStatus::EMPTY_JWT))?;

        match header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::Status(BaseResponseStatus::INVALID_JWT)),
        }
    }

    /// Authorization 헤더로부터 요청한 회원을 확인합니다.
    ///
    /// 블랙리스트에 오른 토큰은 서명이 유효해도 `INVALID_JWT`로 거부되며,
    /// `sub`가 회원 ID로 해석되지 않으면 `INVALID_USER_JWT`입니다.
    pub async fn resolve_identity(&self, auth_header: Option<&str>) -> AppResult<AuthenticatedMember> {
        let token = self.extract_bearer_token(auth_header)?;
        let claims = self.verify_token(token)?;

        if self.token_repo.is_blacklisted(token).await? {
            log::warn!("무효화된 토큰으로 접근 시도 - jti: {}", claims.jti);
            return Err(AppError::Status(BaseResponseStatus::INVALID_JWT));
        }

        let member_id = claims
            .member_id()
            .ok_or(AppError::Status(BaseResponseStatus::INVALID_USER_JWT))?;

        Ok(AuthenticatedMember {
            member_id,
            access_token: token.to_string(),
        })
    }

    /// 토큰을 남은 수명 동안 무효화합니다.
    pub async fn revoke(&self, token: &str, claims: &TokenClaims) -> AppResult<()> {
        let remaining = claims.exp - Utc::now().timestamp();
        let ttl_seconds = remaining.max(1) as u64;

        self.token_repo.blacklist(token, ttl_seconds).await
    }

    /// 토큰이 아직 유효할 때만 무효화합니다. 이미 만료되었거나 손상된 토큰은 무시합니다.
    pub async fn revoke_if_valid(&self, token: &str) -> AppResult<()> {
        match self.verify_token(token) {
            Ok(claims) => self.revoke(token, &claims).await,
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tokens::InMemoryTokenRepository;

    const SECRET: &str = "test-secret";

    fn service() -> TokenService {
        TokenService::new(Arc::new(InMemoryTokenRepository::new()), SECRET.to_string(), 24)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn test_issued_token_carries_member_id() {
        let tokens = service();
        let token = tokens.issue_access_token(42).unwrap();

        let claims = tokens.verify_token(&token).unwrap();
        assert_eq!(claims.member_id(), Some(42));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tokens_issued_together_are_distinct() {
        let tokens = service();
        assert_ne!(
            tokens.issue_access_token(1).unwrap(),
            tokens.issue_access_token(1).unwrap()
        );
    }

    #[test]
    fn test_token_signed_with_other_secret_is_invalid() {
        let other = TokenService::new(Arc::new(InMemoryTokenRepository::new()), "other".to_string(), 24);
        let token = other.issue_access_token(1).unwrap();

        let result = service().verify_token(&token);
        assert!(matches!(result, Err(AppError::Status(BaseResponseStatus::INVALID_JWT))));
    }

    fn token_expiring_at(exp: i64) -> String {
        let claims = TokenClaims {
            sub: "1".to_string(),
            iat: exp - 3600,
            exp,
            jti: Uuid::new_v4().to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        ).unwrap()
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let token = token_expiring_at(Utc::now().timestamp() - 3600);

        let result = service().verify_token(&token);
        assert!(matches!(result, Err(AppError::Status(BaseResponseStatus::INVALID_JWT))));
    }

    #[actix_web::test]
    async fn test_token_past_exp_gets_no_grace_period() {
        let tokens = service();
        let token = token_expiring_at(Utc::now().timestamp() - 5);

        assert!(matches!(
            tokens.verify_token(&token),
            Err(AppError::Status(BaseResponseStatus::INVALID_JWT))
        ));
        assert!(matches!(
            tokens.resolve_identity(Some(&bearer(&token))).await,
            Err(AppError::Status(BaseResponseStatus::INVALID_JWT))
        ));
        // 만료 직후 토큰은 블랙리스트에 오르지 않아도 다시 통과하지 않음
        tokens.revoke_if_valid(&token).await.unwrap();
        assert!(tokens.resolve_identity(Some(&bearer(&token))).await.is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service();

        assert_eq!(tokens.extract_bearer_token(Some("Bearer abc")).unwrap(), "abc");
        assert!(matches!(
            tokens.extract_bearer_token(None),
            Err(AppError::Status(BaseResponseStatus::EMPTY_JWT))
        ));
        assert!(matches!(
            tokens.extract_bearer_token(Some("  ")),
            Err(AppError::Status(BaseResponseStatus::EMPTY_JWT))
        ));
        assert!(matches!(
            tokens.extract_bearer_token(Some("Basic abc")),
            Err(AppError::Status(BaseResponseStatus::INVALID_JWT))
        ));
        assert!(matches!(
            tokens.extract_bearer_token(Some("Bearer ")),
            Err(AppError::Status(BaseResponseStatus::INVALID_JWT))
        ));
    }

    #[actix_web::test]
    async fn test_resolve_identity() {
        let tokens = service();
        let token = tokens.issue_access_token(7).unwrap();

        let identity = tokens.resolve_identity(Some(&bearer(&token))).await.unwrap();
        assert_eq!(identity.member_id, 7);
        assert_eq!(identity.access_token, token);
    }

    #[actix_web::test]
    async fn test_revoked_token_is_rejected() {
        let tokens = service();
        let token = tokens.issue_access_token(7).unwrap();
        let claims = tokens.verify_token(&token).unwrap();

        tokens.revoke(&token, &claims).await.unwrap();

        let result = tokens.resolve_identity(Some(&bearer(&token))).await;
        assert!(matches!(result, Err(AppError::Status(BaseResponseStatus::INVALID_JWT))));
    }

    #[actix_web::test]
    async fn test_non_numeric_subject_is_invalid_user() {
        let claims = TokenClaims {
            sub: "not-a-number".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
            jti: "x".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        ).unwrap();

        let result = service().resolve_identity(Some(&bearer(&token))).await;
        assert!(matches!(result, Err(AppError::Status(BaseResponseStatus::INVALID_USER_JWT))));
    }

    #[actix_web::test]
    async fn test_revoke_if_valid_ignores_garbage() {
        assert!(service().revoke_if_valid("not.a.jwt").await.is_ok());
    }
}
