//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크 위에서 입력 검증, 서비스 위임, 응답 봉투 변환을 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Storage - 데이터 접근            ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 처리 규칙
//!
//! 1. **입력 검증**: 이메일 형식(`POST_USERS_INVALID_EMAIL`)을 가장 먼저,
//!    그다음 필드 길이(`REQUEST_ERROR`)를 검사합니다.
//! 2. **위임**: 검증된 요청을 서비스에 넘깁니다.
//! 3. **응답**: 성공은 `BaseResponse::success`, 실패는 `AppError`의 상태 그대로.
//!
//! ## 모듈 구성
//!
//! - **`members`**: 회원 가입, 로그인/로그아웃, 조회, 수정, 탈퇴

pub mod members;
