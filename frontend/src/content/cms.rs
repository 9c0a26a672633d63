use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::CmsConfig;
use crate::content::item::{parse_items, Category, ContentItem};
use crate::content::source::{ContentSource, SourceError};

#[derive(Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// Unwraps `{ "result": [...] }`. A missing or null `result` is an empty list.
pub fn parse_envelope(category: Category, body: &str) -> Result<Vec<ContentItem>, SourceError> {
    let envelope: QueryEnvelope =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    match envelope.result {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(value) => parse_items(category, value).map_err(|e| SourceError::Malformed(e.to_string())),
    }
}

/// Headless CMS queried over its HTTP query API.
pub struct CmsSource {
    config: CmsConfig,
}

impl CmsSource {
    pub fn new(config: CmsConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ContentSource for CmsSource {
    fn name(&self) -> &'static str {
        "cms"
    }

    // An empty query result means nothing is published.
    fn empty_is_final(&self) -> bool {
        true
    }

    async fn fetch(&self, category: Category) -> Result<Vec<ContentItem>, SourceError> {
        let url = self
            .config
            .query_url(category.cms_query())
            .ok_or(SourceError::Unconfigured)?;

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        parse_envelope(category, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn envelope_result_is_unwrapped() {
        let body = r#"{"ms":4,"query":"*","result":[{"title":"XR Intern","mode":null,"applyLink":"mailto:x@y"}]}"#;
        let items = parse_envelope(Category::Internships, body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title(), "XR Intern");
    }

    #[test]
    fn missing_or_null_result_is_empty() {
        assert!(parse_envelope(Category::Events, "{}").unwrap().is_empty());
        assert!(parse_envelope(Category::Events, r#"{"result":null}"#).unwrap().is_empty());
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(parse_envelope(Category::Events, "nope"), Err(SourceError::Malformed(_))));
        assert!(matches!(
            parse_envelope(Category::Events, r#"{"result":"oops"}"#),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn empty_result_is_final() {
        assert!(CmsSource::new(CmsConfig::default()).empty_is_final());
    }

    #[test]
    fn unconfigured_project_skips_the_network() {
        let source = CmsSource::new(CmsConfig::default());
        assert!(matches!(
            block_on(source.fetch(Category::Events)),
            Err(SourceError::Unconfigured)
        ));
    }
}
