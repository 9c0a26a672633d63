use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Every element matching `selector`, in document order. An invalid
/// selector matches nothing.
pub fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn add_class(elements: &[HtmlElement], class: &str) {
    for element in elements {
        let _ = element.class_list().add_1(class);
    }
}
