//! 회원 엔티티 모듈
//!
//! MongoDB `members` 컬렉션에 저장되는 [`Member`](member::Member) 문서를 정의합니다.

pub mod member;

pub use member::Member;
