//! # 애플리케이션 상태
//!
//! 핸들러가 `web::Data<AppState>`로 받는 서비스 묶음입니다.
//! 저장소 구현은 [`AppPorts`]로 한 번에 전달되며, 서비스는 여기서 조립된 뒤
//! 변경 없이 모든 워커가 공유합니다.
//!
//! ```rust,ignore
//! let state = AppState::new(AppPorts {
//!     member_repo: Arc::new(MongoMemberRepository::new(database.clone())),
//!     token_repo: Arc::new(RedisTokenRepository::new(redis.clone())),
//!     image_store: Arc::new(LocalProfileImageStore::new(dir, base_url)),
//!     jwt_secret: JwtConfig::secret(),
//!     jwt_expiration_hours: JwtConfig::expiration_hours(),
//!     bcrypt_cost: PasswordConfig::bcrypt_cost(),
//! });
//! let data = web::Data::new(state);
//! ```

use std::sync::Arc;
use crate::{
    repositories::members::MemberRepository,
    repositories::tokens::TokenRepository,
    services::auth::TokenService,
    services::members::MemberService,
    storage::ProfileImageStore,
};

/// 서비스 조립에 필요한 저장소 구현과 설정값
pub struct AppPorts {
    pub member_repo: Arc<dyn MemberRepository>,
    pub token_repo: Arc<dyn TokenRepository>,
    pub image_store: Arc<dyn ProfileImageStore>,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
}

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<MemberService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(ports: AppPorts) -> Self {
        let tokens = Arc::new(TokenService::new(
            ports.token_repo,
            ports.jwt_secret,
            ports.jwt_expiration_hours,
        ));

        let members = Arc::new(MemberService::new(
            ports.member_repo,
            tokens.clone(),
            ports.image_store,
            ports.bcrypt_cost,
        ));

        Self { members, tokens }
    }
}
