//! 캐싱 계층 모듈
//!
//! Redis 연결을 제공합니다. 현재는 로그아웃/탈퇴로 무효화된 액세스 토큰의
//! 블랙리스트를 만료 시간과 함께 보관하는 데 사용됩니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
