
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url,
        None => "http://localhost:3001",  // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url,
        None => "",  // Production: same origin
    }
}

/// Value shipped in the page template before a CMS project is set up.
pub const PLACEHOLDER_PROJECT_ID: &str = "YOUR_SANITY_PROJECT_ID";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2023-10-01";

/// Headless CMS coordinates. Read at compile time so the wasm bundle needs
/// no runtime config fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct CmsConfig {
    pub project_id: Option<String>,
    pub dataset: String,
    pub api_version: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl CmsConfig {
    pub fn from_build_env() -> Self {
        Self {
            project_id: option_env!("SANITY_PROJECT_ID").map(str::to_string),
            dataset: option_env!("SANITY_DATASET").unwrap_or(DEFAULT_DATASET).to_string(),
            api_version: option_env!("SANITY_API_VERSION").unwrap_or(DEFAULT_API_VERSION).to_string(),
        }
    }

    pub fn with_project(project_id: &str) -> Self {
        Self {
            project_id: Some(project_id.to_string()),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        match self.project_id.as_deref() {
            Some(id) => !id.trim().is_empty() && id != PLACEHOLDER_PROJECT_ID,
            None => false,
        }
    }

    /// Full query URL, or `None` while the project id is unset.
    pub fn query_url(&self, query: &str) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        let project_id = self.project_id.as_deref()?;
        Some(format!(
            "https://{}.api.sanity.io/v{}/data/query/{}?query={}",
            project_id,
            self.api_version,
            self.dataset,
            urlencoding::encode(query)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_ids_are_unconfigured() {
        assert!(!CmsConfig::default().is_configured());
        assert!(!CmsConfig::with_project(PLACEHOLDER_PROJECT_ID).is_configured());
        assert!(!CmsConfig::with_project("   ").is_configured());
        assert!(CmsConfig::with_project("abc123").is_configured());
    }

    #[test]
    fn query_url_is_templated_and_encoded() {
        let config = CmsConfig::with_project("abc123");
        let query = r#"*[_type == "event"]{title}"#;
        let url = config.query_url(query).unwrap();

        let base = "https://abc123.api.sanity.io/v2023-10-01/data/query/production?query=";
        assert!(url.starts_with(base));
        let encoded = &url[base.len()..];
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('"'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), query);
    }

    #[test]
    fn query_url_needs_a_project() {
        assert_eq!(CmsConfig::default().query_url("*"), None);
    }
}
