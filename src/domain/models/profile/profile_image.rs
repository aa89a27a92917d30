/// 업로드된 프로필 이미지
///
/// multipart 파트에서 읽어낸 내용을 프레임워크와 무관한 형태로 담습니다.
#[derive(Debug, Clone)]
pub struct ProfileImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ProfileImageUpload {
    /// `image/*` 콘텐츠 타입이면서 내용이 비어 있지 않은지 확인합니다.
    pub fn is_image(&self) -> bool {
        !self.bytes.is_empty()
            && self
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("image/"))
    }

    /// 저장 파일에 붙일 확장자
    ///
    /// 원본 파일명의 확장자를 우선 사용하고, 없으면 콘텐츠 타입의 subtype을 사용합니다.
    pub fn extension(&self) -> String {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| std::path::Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let from_type = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.strip_prefix("image/"))
            .map(|sub| sub.split(['+', ';']).next().unwrap_or(sub).to_ascii_lowercase());

        from_name
            .or(from_type)
            .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "img".to_string())
    }
}
