//! Thumbnail carousel: grouped columns and viewport-based pagination.
//!
//! Entries are laid out in one column per group, in a fixed group order. The
//! carousel scrolls horizontally and reports its position as "page X/Y",
//! where a page is one container width.

use serde::{Deserialize, Serialize};

/// Group a thumbnail belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Default,
    Women,
    Men,
    Ensemble,
}

impl Group {
    /// Column order, left to right.
    pub const ORDER: [Group; 4] = [Group::Default, Group::Women, Group::Men, Group::Ensemble];

    /// Parse a group name as found in the data (`"Default"`, `"Women"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Default" => Some(Group::Default),
            "Women" => Some(Group::Women),
            "Men" => Some(Group::Men),
            "Ensemble" => Some(Group::Ensemble),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Group::Default => "Default",
            Group::Women => "Women",
            Group::Men => "Men",
            Group::Ensemble => "Ensemble",
        }
    }
}

/// One carousel entry, as supplied by the page's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    /// Group name; entries with an unknown group are not shown
    #[serde(rename = "groupe")]
    pub group: String,
    pub thumbnail_image: String,
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub description: String,
}

/// Ids appear both as strings and as bare numbers in page data.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// A cell in a group column.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    /// Text-only cell that selects `target` when clicked
    Placeholder { target: &'a Thumbnail },
    Thumbnail { entry: &'a Thumbnail, index: usize },
}

/// One rendered column.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupColumn<'a> {
    pub group: Group,
    pub cells: Vec<Cell<'a>>,
}

/// Arrange entries into columns.
///
/// Columns follow [`Group::ORDER`]; empty groups are skipped. The default
/// column holds a placeholder followed by its first entry only.
pub fn group_columns(entries: &[Thumbnail]) -> Vec<GroupColumn<'_>> {
    Group::ORDER
        .iter()
        .filter_map(|&group| {
            let members: Vec<&Thumbnail> = entries
                .iter()
                .filter(|e| Group::from_name(&e.group) == Some(group))
                .collect();
            let first = *members.first()?;

            let cells = match group {
                Group::Default => vec![
                    Cell::Placeholder { target: first },
                    Cell::Thumbnail {
                        entry: first,
                        index: 0,
                    },
                ],
                _ => members
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| Cell::Thumbnail { entry, index })
                    .collect(),
            };
            Some(GroupColumn { group, cells })
        })
        .collect()
}

/// Horizontal scroll metrics of the carousel container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Page position of the carousel, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Pagination {
    /// Recount pages for the current container width, then refresh the
    /// current page.
    pub fn recalculate(&mut self, strip: &StripMetrics) {
        let fits = strip.scroll_width <= strip.client_width;
        self.total_pages = if strip.client_width <= 0.0 || fits {
            1
        } else {
            (strip.scroll_width / strip.client_width).ceil() as u32
        };
        self.update_current(strip);
    }

    /// Refresh the current page from the scroll position.
    pub fn update_current(&mut self, strip: &StripMetrics) {
        let page_index = if strip.client_width > 0.0 {
            (strip.scroll_left / strip.client_width).round()
        } else {
            0.0
        };
        let page = (page_index + 1.0).clamp(1.0, self.total_pages as f64);
        self.current_page = page as u32;
    }

    /// Indicator text, e.g. `"2/5"`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.current_page, self.total_pages)
    }
}

/// Events produced by the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// An entry was chosen; the page shows it in the main view
    Selected(Thumbnail),
}

/// Carousel state: entries, pagination and the active entry.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailCarousel {
    entries: Vec<Thumbnail>,
    pagination: Pagination,
    active: Option<String>,
}

impl ThumbnailCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entries. Returns false if there was nothing to show.
    pub fn set_entries(&mut self, entries: Vec<Thumbnail>) -> bool {
        if entries.is_empty() {
            log::warn!("No thumbnail entries to display");
            return false;
        }
        log::info!("Rendering {} thumbnails", entries.len());
        self.entries = entries;
        self.active = None;
        true
    }

    /// Parse entries from the page's JSON data.
    pub fn entries_from_json(json: &str) -> Result<Vec<Thumbnail>, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn entries(&self) -> &[Thumbnail] {
        &self.entries
    }

    pub fn columns(&self) -> Vec<GroupColumn<'_>> {
        group_columns(&self.entries)
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn on_resize(&mut self, strip: &StripMetrics) -> Pagination {
        self.pagination.recalculate(strip);
        self.pagination
    }

    pub fn on_scroll(&mut self, strip: &StripMetrics) -> Pagination {
        self.pagination.update_current(strip);
        self.pagination
    }

    /// Select the entry with `id`, marking it active.
    pub fn select(&mut self, id: &str) -> Option<CarouselEvent> {
        let entry = self.entries.iter().find(|e| e.id == id)?.clone();
        log::debug!("Thumbnail selected: {}", entry.name);
        self.active = Some(entry.id.clone());
        Some(CarouselEvent::Selected(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, group: &str) -> Thumbnail {
        Thumbnail {
            id: id.to_string(),
            name: format!("Name {id}"),
            group: group.to_string(),
            thumbnail_image: format!("img/{id}.jpg"),
            clickable: true,
            description: String::new(),
        }
    }

    fn strip(scroll_left: f64, scroll_width: f64, client_width: f64) -> StripMetrics {
        StripMetrics {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn test_group_order_and_empty_groups() {
        let entries = vec![
            entry("m1", "Men"),
            entry("w1", "Women"),
            entry("x", "Unknown"),
            entry("m2", "Men"),
        ];
        let columns = group_columns(&entries);
        let groups: Vec<Group> = columns.iter().map(|c| c.group).collect();
        assert_eq!(groups, vec![Group::Women, Group::Men]);
        assert_eq!(columns[1].cells.len(), 2);
    }

    #[test]
    fn test_default_column_has_placeholder() {
        let entries = vec![entry("d1", "Default"), entry("d2", "Default")];
        let columns = group_columns(&entries);
        assert_eq!(columns.len(), 1);
        let cells = &columns[0].cells;
        assert_eq!(cells.len(), 2);
        assert!(matches!(cells[0], Cell::Placeholder { target } if target.id == "d1"));
        assert!(matches!(cells[1], Cell::Thumbnail { entry, index: 0 } if entry.id == "d1"));
    }

    #[test]
    fn test_pagination_single_page() {
        let mut p = Pagination::default();
        p.recalculate(&strip(0.0, 800.0, 800.0));
        assert_eq!(p, Pagination { current_page: 1, total_pages: 1 });
        p.recalculate(&strip(0.0, 800.0, 0.0));
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn test_pagination_pages() {
        let mut p = Pagination::default();
        p.recalculate(&strip(0.0, 2100.0, 500.0));
        assert_eq!(p.total_pages, 5);
        assert_eq!(p.label(), "1/5");

        p.update_current(&strip(740.0, 2100.0, 500.0));
        assert_eq!(p.current_page, 2);
        p.update_current(&strip(760.0, 2100.0, 500.0));
        assert_eq!(p.current_page, 3);
        p.update_current(&strip(5000.0, 2100.0, 500.0));
        assert_eq!(p.label(), "5/5");
    }

    #[test]
    fn test_select_marks_active() {
        let mut carousel = ThumbnailCarousel::new();
        assert!(carousel.set_entries(vec![entry("a", "Women"), entry("b", "Men")]));
        assert_eq!(
            carousel.select("b"),
            Some(CarouselEvent::Selected(entry("b", "Men")))
        );
        assert_eq!(carousel.active(), Some("b"));
        assert_eq!(carousel.select("zzz"), None);
        assert_eq!(carousel.active(), Some("b"));
    }

    #[test]
    fn test_empty_entries_rejected() {
        let mut carousel = ThumbnailCarousel::new();
        assert!(!carousel.set_entries(Vec::new()));
    }

    #[test]
    fn test_entries_from_json() {
        let json = r#"[{"id": "7", "nom": "Ana", "groupe": "Women",
                        "thumbnailImage": "a.jpg", "clickable": true,
                        "description": "Solo"}]"#;
        let entries = ThumbnailCarousel::entries_from_json(json).unwrap();
        assert_eq!(entries[0].name, "Ana");
        assert_eq!(entries[0].group, "Women");
        assert!(entries[0].clickable);
    }

    #[test]
    fn test_numeric_ids() {
        let json = r#"[{"id": 12, "nom": "Leo", "groupe": "Men", "thumbnailImage": "l.jpg"}]"#;
        let entries = ThumbnailCarousel::entries_from_json(json).unwrap();
        assert_eq!(entries[0].id, "12");
        assert!(!entries[0].clickable);
    }
}
