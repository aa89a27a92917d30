/// 인증 미들웨어 동작 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 핸들러 실행 전에 거부
    Required,
    /// 토큰이 있으면 해석하고, 없거나 잘못되어도 요청을 통과
    Optional,
}
