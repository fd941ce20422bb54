pub const DEFAULT_API_BASE: &str = "/api";
const META_NAME: &str = "taskboard-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("TASKBOARD_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        let trimmed = api_base.trim().trim_end_matches('/');
        Self {
            api_base: trimmed.to_string(),
        }
    }

    /// Reads `<meta name="taskboard-api-base" content="...">` from the host
    /// page, falling back to the build default.
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{META_NAME}\"]");
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|content| !content.trim().is_empty())
            .map(|content| Self::new(&content))
            .unwrap_or_default()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
