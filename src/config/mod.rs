//! # Configuration Module
//!
//! 회원 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 따라
//! `.env.dev` / `.env.prod` / `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호, 프로필 이미지 저장소, 응답 정책
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="member_service_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 프로필 이미지
//! export PROFILE_IMAGE_DIR="./uploads/profile"
//! export PROFILE_IMAGE_BASE_URL="https://cdn.example.com/profile"
//! export PROFILE_IMAGE_MAX_BYTES="5242880"
//!
//! # 기타
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="12"           # 4-15 범위
//! export RESPONSE_STATUS_MODE="envelope"  # envelope | http
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
