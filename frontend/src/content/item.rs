use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_LOCATION: &str = "Location TBA";
pub const DEFAULT_EVENT_LINK: &str = "contact.html";
pub const DEFAULT_MODE: &str = "Hybrid";
pub const DEFAULT_DURATION: &str = "3 Months";
pub const DEFAULT_APPLY_LINK: &str = "mailto:hr@bdits.in";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Events,
    Internships,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Events, Category::Internships];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::Internships => "internships",
        }
    }

    pub fn api_path(&self) -> String {
        format!("/api/{}", self.slug())
    }

    /// Id of the grid element the category renders into.
    pub fn container_id(&self) -> &'static str {
        match self {
            Category::Events => "eventsGrid",
            Category::Internships => "internshipsGrid",
        }
    }

    pub fn cms_query(&self) -> &'static str {
        match self {
            Category::Events => {
                r#"*[_type == "event"] | order(date desc)[0..2]{title, date, location, summary, link}"#
            }
            Category::Internships => {
                r#"*[_type == "internship"] | order(_createdAt desc)[0..5]{title, mode, duration, summary, applyLink}"#
            }
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Category::Events => "No events are published yet.",
            Category::Internships => "No internships are published yet.",
        }
    }

    pub fn call_to_action(&self) -> &'static str {
        match self {
            Category::Events => "Learn more",
            Category::Internships => "Apply now",
        }
    }
}

// Optional text fields only need to be present to be shown. Anything
// that is not a string reads as missing instead of failing the list.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub apply_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContentItem {
    Event(Event),
    Internship(Internship),
}

// Empty strings count as missing, same as null or an absent key.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Event {
    pub fn date_or_default(&self) -> &str {
        present(&self.date).unwrap_or("")
    }

    pub fn location_or_default(&self) -> &str {
        present(&self.location).unwrap_or(DEFAULT_LOCATION)
    }

    pub fn summary_or_default(&self) -> &str {
        present(&self.summary).unwrap_or("")
    }

    pub fn link_or_default(&self) -> &str {
        present(&self.link).unwrap_or(DEFAULT_EVENT_LINK)
    }
}

impl Internship {
    pub fn mode_or_default(&self) -> &str {
        present(&self.mode).unwrap_or(DEFAULT_MODE)
    }

    pub fn duration_or_default(&self) -> &str {
        present(&self.duration).unwrap_or(DEFAULT_DURATION)
    }

    pub fn summary_or_default(&self) -> &str {
        present(&self.summary).unwrap_or("")
    }

    pub fn apply_link_or_default(&self) -> &str {
        present(&self.apply_link).unwrap_or(DEFAULT_APPLY_LINK)
    }
}

impl ContentItem {
    pub fn title(&self) -> &str {
        match self {
            ContentItem::Event(event) => &event.title,
            ContentItem::Internship(internship) => &internship.title,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ContentItem::Event(_) => Category::Events,
            ContentItem::Internship(_) => Category::Internships,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("expected an array of {category} items: {source}")]
    Shape {
        category: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("item {index} has no title")]
    MissingTitle { index: usize },
}

/// Decodes a JSON array into items of `category`. Every item must carry a
/// non-blank title; anything else about the payload shape fails the whole list.
pub fn parse_items(category: Category, value: serde_json::Value) -> Result<Vec<ContentItem>, ItemError> {
    let shape_err = |source| ItemError::Shape { category: category.slug(), source };
    let items: Vec<ContentItem> = match category {
        Category::Events => serde_json::from_value::<Vec<Event>>(value)
            .map_err(shape_err)?
            .into_iter()
            .map(ContentItem::Event)
            .collect(),
        Category::Internships => serde_json::from_value::<Vec<Internship>>(value)
            .map_err(shape_err)?
            .into_iter()
            .map(ContentItem::Internship)
            .collect(),
    };

    if let Some(index) = items.iter().position(|item| item.title().trim().is_empty()) {
        return Err(ItemError::MissingTitle { index });
    }
    Ok(items)
}
