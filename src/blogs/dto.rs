use serde::Deserialize;

/// Create payload. Server assigns id and timestamps; `views` starts at 0.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Partial update payload; absent fields stay untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults() {
        let payload: CreateBlogRequest =
            serde_json::from_str(r#"{"title":"T","content":"<p>x</p>"}"#).unwrap();
        assert_eq!(payload.title, "T");
        assert!(payload.tags.is_empty());
        assert!(!payload.is_featured);
        assert!(payload.thumbnail.is_none());
    }

    #[test]
    fn create_ignores_server_assigned_fields() {
        // id/views/timestamps in the payload are not part of the DTO.
        let payload: CreateBlogRequest = serde_json::from_str(
            r#"{"title":"T","content":"c","id":99,"views":7,"createdAt":"2020-01-01"}"#,
        )
        .unwrap();
        assert_eq!(payload.title, "T");
    }

    #[test]
    fn update_absent_fields_are_none() {
        let payload: UpdateBlogRequest = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("New"));
        assert!(payload.content.is_none());
        assert!(payload.tags.is_none());
        assert!(payload.is_featured.is_none());
    }

    #[test]
    fn update_accepts_camel_case() {
        let payload: UpdateBlogRequest =
            serde_json::from_str(r#"{"isFeatured":true,"tags":["rust"]}"#).unwrap();
        assert_eq!(payload.is_featured, Some(true));
        assert_eq!(payload.tags.as_deref(), Some(["rust".to_string()].as_slice()));
    }
}
