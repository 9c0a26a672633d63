use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::content::item::{Category, ContentItem, Event, Internship};

// en-IN short month names.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|stamp| stamp.date())
}

/// `2024-10-18` -> `18 Oct 2024`. Strings that are not dates come back untouched.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_date(value.trim()) {
        Some(date) => format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year()),
        None => value.to_string(),
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn card(title: &str, meta: [&str; 2], summary: &str, href: &str, label: &str) -> String {
    format!(
        r#"<article class="data-card"><h3>{}</h3><div class="data-meta"><span>{}</span><span>{}</span></div><p>{}</p><a class="data-link" href="{}">{}</a></article>"#,
        escape_html(title),
        escape_html(meta[0]),
        escape_html(meta[1]),
        escape_html(summary),
        escape_html(href),
        label
    )
}

fn event_card(event: &Event) -> String {
    card(
        &event.title,
        [format_date(event.date_or_default()).as_str(), event.location_or_default()],
        event.summary_or_default(),
        event.link_or_default(),
        Category::Events.call_to_action(),
    )
}

fn internship_card(internship: &Internship) -> String {
    card(
        &internship.title,
        [internship.mode_or_default(), internship.duration_or_default()],
        internship.summary_or_default(),
        internship.apply_link_or_default(),
        Category::Internships.call_to_action(),
    )
}

pub fn render_markup(category: Category, items: &[ContentItem]) -> String {
    if items.is_empty() {
        return format!(r#"<div class="data-card">{}</div>"#, category.empty_message());
    }
    items
        .iter()
        .map(|item| match item {
            ContentItem::Event(event) => event_card(event),
            ContentItem::Internship(internship) => internship_card(internship),
        })
        .collect()
}

/// Anything that can have its markup replaced wholesale.
pub trait Container {
    fn replace_markup(&self, markup: &str);
}

impl Container for web_sys::Element {
    fn replace_markup(&self, markup: &str) {
        self.set_inner_html(markup);
    }
}

pub fn render(container: &impl Container, category: Category, items: &[ContentItem]) {
    container.replace_markup(&render_markup(category, items));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback::sample_items;

    fn bare_event(title: &str) -> ContentItem {
        ContentItem::Event(Event {
            title: title.to_string(),
            date: None,
            location: None,
            summary: None,
            link: None,
        })
    }

    #[test]
    fn dates_use_short_indian_english_style() {
        assert_eq!(format_date("2024-10-18"), "18 Oct 2024");
        assert_eq!(format_date("2024-09-05"), "5 Sept 2024");
        assert_eq!(format_date("2024-11-02T18:30:00+05:30"), "2 Nov 2024");
        assert_eq!(format_date("2025-01-05T09:00"), "5 Jan 2025");
    }

    #[test]
    fn invalid_dates_pass_through() {
        assert_eq!(format_date("next Friday"), "next Friday");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(
            render_markup(Category::Events, &[]),
            r#"<div class="data-card">No events are published yet.</div>"#
        );
        assert!(render_markup(Category::Internships, &[]).contains("No internships are published yet."));
    }

    #[test]
    fn missing_fields_render_defaults() {
        let markup = render_markup(Category::Events, &[bare_event("Open House")]);
        assert!(markup.contains("<h3>Open House</h3>"));
        assert!(markup.contains("<span></span><span>Location TBA</span>"));
        assert!(markup.contains("<p></p>"));
        assert!(markup.contains(r#"href="contact.html">Learn more</a>"#));
        assert!(!markup.contains("undefined"));

        let internship = ContentItem::Internship(Internship {
            title: "Design Intern".to_string(),
            mode: None,
            duration: None,
            summary: None,
            apply_link: None,
        });
        let markup = render_markup(Category::Internships, &[internship]);
        assert!(markup.contains("<span>Hybrid</span><span>3 Months</span>"));
        assert!(markup.contains(r#"href="mailto:hr@bdits.in">Apply now</a>"#));
    }

    #[test]
    fn one_card_per_item() {
        let markup = render_markup(Category::Internships, &sample_items(Category::Internships));
        assert_eq!(markup.matches(r#"<article class="data-card">"#).count(), 3);
        assert!(markup.contains("<span>Onsite</span><span>3 Months</span>"));
    }

    #[test]
    fn field_values_are_escaped() {
        let markup = render_markup(Category::Events, &[bare_event("<script>alert('x')</script>")]);
        assert!(markup.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn invalid_date_is_shown_verbatim() {
        let item = ContentItem::Event(Event {
            title: "Soon".to_string(),
            date: Some("TBD".to_string()),
            location: Some("Online".to_string()),
            summary: None,
            link: None,
        });
        assert!(render_markup(Category::Events, &[item]).contains("<span>TBD</span><span>Online</span>"));
    }
}
