use crate::api::models::Event;

pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Empty,
    Failed(String),
    Loaded(Vec<Event>),
}

/// Fetch state of an event list. Each fetch gets a sequence number and only
/// the result of the latest fetch is applied.
#[derive(Debug, Clone)]
pub struct EventList {
    pub status: ListStatus,
    pub scroll: usize,
    seq: u64,
}

impl EventList {
    pub fn new() -> Self {
        Self {
            status: ListStatus::Loading,
            scroll: 0,
            seq: 0,
        }
    }

    /// Enter the loading state and return the sequence number of the new fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.status = ListStatus::Loading;
        self.scroll = 0;
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Apply a fetch result. Returns `false` when the result is stale.
    pub fn apply(&mut self, seq: u64, result: Result<Vec<Event>, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.status = match result {
            Ok(events) if events.is_empty() => ListStatus::Empty,
            Ok(events) => ListStatus::Loaded(events),
            Err(msg) => ListStatus::Failed(msg),
        };
        true
    }

    pub fn events(&self) -> &[Event] {
        match &self.status {
            ListStatus::Loaded(events) => events,
            _ => &[],
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.events().len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

impl Default for EventList {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_free(cost_type: &str) -> bool {
    cost_type.eq_ignore_ascii_case("free")
}

pub fn badge_label(cost_type: &str) -> String {
    cost_type.to_uppercase()
}

/// Embedded image URL for a card: data URLs pass through, anything else is
/// taken as raw base64 JPEG.
pub fn image_data_url(image: &str) -> String {
    if image.starts_with("data:image") {
        image.to_string()
    } else {
        format!("{}{}", JPEG_DATA_URL_PREFIX, image)
    }
}

/// Decoded size in bytes of the base64 payload of a data URL, for display.
pub fn image_payload_bytes(data_url: &str) -> usize {
    let payload = data_url.split_once(',').map(|(_, p)| p).unwrap_or(data_url);
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() / 4) * 3 - padding.min((payload.len() / 4) * 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str) -> Event {
        Event {
            id: title.to_lowercase(),
            title: title.into(),
            cost_type: "Free".into(),
            ..Event::default()
        }
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut list = EventList::new();
        let first = list.begin_fetch();
        let second = list.begin_fetch();
        assert!(!list.apply(first, Ok(vec![event("Old")])));
        assert!(list.is_loading());
        assert!(list.apply(second, Ok(vec![event("New")])));
        assert_eq!(list.events()[0].title, "New");
    }

    #[test]
    fn test_empty_and_failed_states() {
        let mut list = EventList::new();
        let seq = list.begin_fetch();
        list.apply(seq, Ok(vec![]));
        assert_eq!(list.status, ListStatus::Empty);

        let seq = list.begin_fetch();
        list.apply(seq, Err("Failed to fetch events.".into()));
        assert_eq!(list.status, ListStatus::Failed("Failed to fetch events.".into()));
        assert!(list.events().is_empty());
    }

    #[test]
    fn test_scroll_bounds() {
        let mut list = EventList::new();
        let seq = list.begin_fetch();
        list.apply(seq, Ok(vec![event("A"), event("B")]));
        list.scroll_up();
        assert_eq!(list.scroll, 0);
        list.scroll_down();
        list.scroll_down();
        assert_eq!(list.scroll, 1);
    }

    #[test]
    fn test_badges() {
        assert!(is_free("free"));
        assert!(is_free("FREE"));
        assert!(is_free("Free"));
        assert!(!is_free("200 INR"));
        assert!(!is_free("freedom"));
        assert_eq!(badge_label("200 inr"), "200 INR");
    }

    #[test]
    fn test_image_data_url() {
        assert_eq!(
            image_data_url("data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
        assert_eq!(image_data_url("AAAA"), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_image_payload_bytes() {
        assert_eq!(image_payload_bytes("data:image/png;base64,aGk="), 2);
        assert_eq!(image_payload_bytes("AAAA"), 3);
        assert_eq!(image_payload_bytes(""), 0);
    }
}
