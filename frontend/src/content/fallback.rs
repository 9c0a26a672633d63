use crate::content::item::{Category, ContentItem, Event, Internship};

fn event(title: &str, date: &str, location: &str, summary: &str) -> ContentItem {
    ContentItem::Event(Event {
        title: title.to_string(),
        date: Some(date.to_string()),
        location: Some(location.to_string()),
        summary: Some(summary.to_string()),
        link: Some("contact.html".to_string()),
    })
}

fn internship(title: &str, mode: &str, summary: &str) -> ContentItem {
    ContentItem::Internship(Internship {
        title: title.to_string(),
        mode: Some(mode.to_string()),
        duration: Some("3 Months".to_string()),
        summary: Some(summary.to_string()),
        apply_link: Some("mailto:hr@bdits.in".to_string()),
    })
}

/// Sample content shown when neither the API nor the CMS has anything.
pub fn sample_items(category: Category) -> Vec<ContentItem> {
    match category {
        Category::Events => vec![
            event(
                "AI for Business Workshop",
                "2024-10-18",
                "Vijayawada",
                "Live session on AI adoption and automation roadmaps.",
            ),
            event(
                "Immersive Learning Demo",
                "2024-11-02",
                "Hybrid",
                "Showcase of XR training labs and interactive simulations.",
            ),
            event(
                "Founder AMA",
                "2024-11-20",
                "Online",
                "Q and A on product strategy, AI ethics, and careers.",
            ),
        ],
        Category::Internships => vec![
            internship(
                "AI Engineering Intern",
                "Hybrid",
                "Work on ML pipelines, prompt systems, and model evaluation.",
            ),
            internship(
                "Full Stack Intern",
                "Onsite",
                "Build web apps using modern UI, APIs, and cloud workflows.",
            ),
            internship(
                "XR Experience Intern",
                "Remote",
                "Prototype immersive learning and interactive storytelling.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_samples_per_category_of_the_right_kind() {
        for category in Category::ALL {
            let items = sample_items(category);
            assert_eq!(items.len(), 3);
            assert!(items.iter().all(|item| item.category() == category));
        }
    }
}
