use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::config::{self, CmsConfig};
use crate::content::api::ApiSource;
use crate::content::cms::CmsSource;
use crate::content::item::Category;
use crate::content::render::{render, Container};
use crate::content::source::{resolve_first, ContentSource, Resolved, StaticSource};

/// API first, then the CMS, then the built-in samples.
pub fn default_chain(backend_url: &str, cms: CmsConfig) -> Vec<Box<dyn ContentSource>> {
    vec![
        Box::new(ApiSource::new(backend_url)) as Box<dyn ContentSource>,
        Box::new(CmsSource::new(cms)),
        Box::new(StaticSource),
    ]
}

/// Resolves `category` through `sources` and renders the outcome into
/// `container`. The container is written exactly once, then `rendered`
/// is told so card effects can bind to the new markup.
pub async fn load_into(
    container: &impl Container,
    category: Category,
    sources: &[Box<dyn ContentSource>],
    rendered: &Callback<Category>,
) -> Resolved {
    let resolved = resolve_first(sources, category)
        .await
        .unwrap_or_else(|| Resolved::fallback(category));
    render(container, category, &resolved.items);
    rendered.emit(category);
    resolved
}

/// Loads one category into its grid element. A page without the grid
/// simply skips the category.
pub async fn load_category(category: Category, sources: &[Box<dyn ContentSource>], rendered: &Callback<Category>) {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(category.container_id()));

    let Some(container) = container else {
        debug!("#{} not on this page, skipping {}", category.container_id(), category.slug());
        return;
    };

    let resolved = load_into(&container, category, sources, rendered).await;
    debug!("rendered {} {} from {}", resolved.items.len(), category.slug(), resolved.source);
}

/// Starts one independent loader per category.
pub fn spawn_loaders(cms: CmsConfig, rendered: Callback<Category>) {
    for category in Category::ALL {
        let sources = default_chain(config::get_backend_url(), cms.clone());
        let rendered = rendered.clone();
        spawn_local(async move {
            load_category(category, &sources, &rendered).await;
        });
    }
}
