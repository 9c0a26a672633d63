use async_trait::async_trait;
use gloo_net::http::Request;

use crate::content::item::{parse_items, Category, ContentItem};
use crate::content::source::{ContentSource, SourceError};

/// The site's own `/api/<category>` endpoints.
pub struct ApiSource {
    base_url: String,
}

impl ApiSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, category: Category) -> String {
        format!("{}{}", self.base_url, category.api_path())
    }
}

/// The endpoint answers with a bare JSON array of items.
pub fn parse_api_payload(category: Category, body: &str) -> Result<Vec<ContentItem>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    parse_items(category, value).map_err(|e| SourceError::Malformed(e.to_string()))
}

#[async_trait(?Send)]
impl ContentSource for ApiSource {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn fetch(&self, category: Category) -> Result<Vec<ContentItem>, SourceError> {
        let response = Request::get(&self.url_for(category))
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
        parse_api_payload(category, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_category_path() {
        assert_eq!(ApiSource::new("").url_for(Category::Events), "/api/events");
        assert_eq!(
            ApiSource::new("http://localhost:3001/").url_for(Category::Internships),
            "http://localhost:3001/api/internships"
        );
    }

    #[test]
    fn array_payload_keeps_every_field() {
        let body = r#"[{"title":"Hack Night","date":"2025-03-01","location":"Guntur","summary":"Build","link":"/hack"}]"#;
        let items = parse_api_payload(Category::Events, body).unwrap();
        let ContentItem::Event(event) = &items[0] else { panic!("expected an event") };
        assert_eq!(event.title, "Hack Night");
        assert_eq!(event.date.as_deref(), Some("2025-03-01"));
        assert_eq!(event.location.as_deref(), Some("Guntur"));
        assert_eq!(event.summary.as_deref(), Some("Build"));
        assert_eq!(event.link.as_deref(), Some("/hack"));
    }

    #[test]
    fn empty_answer_defers_to_next_source() {
        assert!(!ApiSource::new("").empty_is_final());
    }

    #[test]
    fn html_error_page_is_malformed() {
        assert!(matches!(
            parse_api_payload(Category::Events, "<html>502</html>"),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn object_payload_is_malformed() {
        assert!(matches!(
            parse_api_payload(Category::Internships, r#"{"items":[]}"#),
            Err(SourceError::Malformed(_))
        ));
    }
}
