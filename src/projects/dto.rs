use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub live_url: Option<String>,
    pub git_repo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub live_url: Option<String>,
    pub git_repo: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults() {
        let payload: CreateProjectRequest =
            serde_json::from_str(r#"{"title":"Portfolio","description":"my site"}"#).unwrap();
        assert!(payload.tags.is_empty());
        assert!(payload.tech_stack.is_empty());
        assert!(payload.features.is_empty());
        assert!(!payload.is_featured);
    }

    #[test]
    fn create_accepts_camel_case_fields() {
        let payload: CreateProjectRequest = serde_json::from_str(
            r#"{"title":"P","description":"d","techStack":["rust","axum"],"liveUrl":"https://x.dev"}"#,
        )
        .unwrap();
        assert_eq!(payload.tech_stack.len(), 2);
        assert_eq!(payload.live_url.as_deref(), Some("https://x.dev"));
    }

    #[test]
    fn update_absent_fields_are_none() {
        let payload: UpdateProjectRequest =
            serde_json::from_str(r#"{"gitRepo":"https://github.com/x/y"}"#).unwrap();
        assert_eq!(payload.git_repo.as_deref(), Some("https://github.com/x/y"));
        assert!(payload.title.is_none());
        assert!(payload.tech_stack.is_none());
    }
}
