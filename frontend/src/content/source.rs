use async_trait::async_trait;
use log::debug;
use thiserror::Error;

use crate::content::fallback;
use crate::content::item::{Category, ContentItem};

/// Why a source could not supply content. The resolver treats every
/// variant the same way: move on to the next source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("source is not configured")]
    Unconfigured,
}

#[async_trait(?Send)]
pub trait ContentSource {
    fn name(&self) -> &'static str;

    /// Whether an empty answer is the real content list rather than a
    /// reason to ask the next source.
    fn empty_is_final(&self) -> bool {
        false
    }

    async fn fetch(&self, category: Category) -> Result<Vec<ContentItem>, SourceError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub source: &'static str,
    pub items: Vec<ContentItem>,
}

impl Resolved {
    pub fn fallback(category: Category) -> Self {
        Self {
            source: StaticSource::NAME,
            items: fallback::sample_items(category),
        }
    }
}

/// Built-in sample content. Never fails.
pub struct StaticSource;

impl StaticSource {
    pub const NAME: &'static str = "static";
}

#[async_trait(?Send)]
impl ContentSource for StaticSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch(&self, category: Category) -> Result<Vec<ContentItem>, SourceError> {
        Ok(fallback::sample_items(category))
    }
}

/// Walks `sources` in order and returns the first usable answer.
///
/// Sources are awaited one at a time. A failing source is skipped, and so
/// is an empty one unless it reports [`ContentSource::empty_is_final`].
/// Returns `None` when the chain is exhausted.
pub async fn resolve_first(sources: &[Box<dyn ContentSource>], category: Category) -> Option<Resolved> {
    for source in sources {
        match source.fetch(category).await {
            Ok(items) if !items.is_empty() || source.empty_is_final() => {
                debug!("{} resolved from {} ({} items)", category.slug(), source.name(), items.len());
                return Some(Resolved { source: source.name(), items });
            }
            Ok(_) => debug!("{} returned no {}, trying next source", source.name(), category.slug()),
            Err(e) => debug!("{} unavailable for {}: {}", source.name(), category.slug(), e),
        }
    }
    None
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::item::Event;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory source that records how often it was asked.
    pub(crate) struct Scripted {
        pub name: &'static str,
        pub answer: fn() -> Result<Vec<ContentItem>, SourceError>,
        pub calls: Rc<Cell<usize>>,
        pub settles_on_empty: bool,
    }

    impl Scripted {
        pub(crate) fn new(name: &'static str, answer: fn() -> Result<Vec<ContentItem>, SourceError>) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            (Self { name, answer, calls: calls.clone(), settles_on_empty: false }, calls)
        }

        /// Treat an empty answer as final, the way the CMS does.
        pub(crate) fn settling(mut self) -> Self {
            self.settles_on_empty = true;
            self
        }
    }

    #[async_trait(?Send)]
    impl ContentSource for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn empty_is_final(&self) -> bool {
            self.settles_on_empty
        }

        async fn fetch(&self, _category: Category) -> Result<Vec<ContentItem>, SourceError> {
            self.calls.set(self.calls.get() + 1);
            (self.answer)()
        }
    }

    pub(crate) fn one_event() -> Result<Vec<ContentItem>, SourceError> {
        Ok(vec![ContentItem::Event(Event {
            title: "Live from the API".to_string(),
            date: Some("2025-01-05".to_string()),
            location: None,
            summary: None,
            link: None,
        })])
    }

    pub(crate) fn empty() -> Result<Vec<ContentItem>, SourceError> {
        Ok(Vec::new())
    }

    pub(crate) fn offline() -> Result<Vec<ContentItem>, SourceError> {
        Err(SourceError::Network("connection refused".to_string()))
    }

    pub(crate) fn unconfigured() -> Result<Vec<ContentItem>, SourceError> {
        Err(SourceError::Unconfigured)
    }

    #[test]
    fn first_success_wins_and_later_sources_are_not_asked() {
        let (api, api_calls) = Scripted::new("api", one_event);
        let (cms, cms_calls) = Scripted::new("cms", one_event);
        let sources: Vec<Box<dyn ContentSource>> = vec![Box::new(api) as Box<dyn ContentSource>, Box::new(cms)];

        let resolved = block_on(resolve_first(&sources, Category::Events)).unwrap();
        assert_eq!(resolved.source, "api");
        assert_eq!(resolved.items, one_event().unwrap());
        assert_eq!(api_calls.get(), 1);
        assert_eq!(cms_calls.get(), 0);
    }

    #[test]
    fn failures_fall_through_in_order() {
        let (api, api_calls) = Scripted::new("api", offline);
        let (cms, cms_calls) = Scripted::new("cms", unconfigured);
        let sources: Vec<Box<dyn ContentSource>> = vec![Box::new(api) as Box<dyn ContentSource>, Box::new(cms), Box::new(StaticSource)];

        let resolved = block_on(resolve_first(&sources, Category::Internships)).unwrap();
        assert_eq!(resolved, Resolved::fallback(Category::Internships));
        assert_eq!((api_calls.get(), cms_calls.get()), (1, 1));
    }

    #[test]
    fn empty_answer_is_not_definitive() {
        let (api, _) = Scripted::new("api", empty);
        let (cms, _) = Scripted::new("cms", one_event);
        let sources: Vec<Box<dyn ContentSource>> = vec![Box::new(api) as Box<dyn ContentSource>, Box::new(cms)];

        let resolved = block_on(resolve_first(&sources, Category::Events)).unwrap();
        assert_eq!(resolved.source, "cms");
    }

    #[test]
    fn empty_answer_from_a_settling_source_stops_the_chain() {
        let (api, _) = Scripted::new("api", offline);
        let (cms, _) = Scripted::new("cms", empty);
        let sources: Vec<Box<dyn ContentSource>> =
            vec![Box::new(api) as Box<dyn ContentSource>, Box::new(cms.settling()), Box::new(StaticSource)];

        let resolved = block_on(resolve_first(&sources, Category::Events)).unwrap();
        assert_eq!(resolved.source, "cms");
        assert!(resolved.items.is_empty());
    }

    #[test]
    fn exhausted_chain_yields_none() {
        let (api, _) = Scripted::new("api", empty);
        let sources: Vec<Box<dyn ContentSource>> = vec![Box::new(api) as Box<dyn ContentSource>];
        assert_eq!(block_on(resolve_first(&sources, Category::Events)), None);
        assert_eq!(block_on(resolve_first(&[], Category::Events)), None);
    }
}
