/// Value every filter starts at; never forwarded to the server.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    LookingFor,
    Location,
    When,
    Inactive,
    EventType,
    Category,
}

impl FilterKind {
    /// Display and query order.
    pub const ORDER: [FilterKind; 6] = [
        FilterKind::LookingFor,
        FilterKind::Location,
        FilterKind::When,
        FilterKind::Inactive,
        FilterKind::EventType,
        FilterKind::Category,
    ];

    /// Query parameter name.
    pub fn key(self) -> &'static str {
        match self {
            FilterKind::LookingFor => "type",
            FilterKind::Location => "location",
            FilterKind::When => "date",
            FilterKind::Inactive => "inactive",
            FilterKind::EventType => "eventType",
            FilterKind::Category => "category",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::LookingFor => "Looking For",
            FilterKind::Location => "Location",
            FilterKind::When => "When",
            FilterKind::Inactive => "Status",
            FilterKind::EventType => "Event Type",
            FilterKind::Category => "Category",
        }
    }

    /// Selectable `(value, label)` pairs, `all` first.
    pub fn options(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FilterKind::LookingFor => &[(ALL, "Any type"), ("free", "Free"), ("paid", "Paid")],
            FilterKind::Location => &[
                (ALL, "Any location"),
                ("new-york", "New York"),
                ("london", "London"),
                ("paris", "Paris"),
            ],
            FilterKind::When => &[
                (ALL, "Any date"),
                ("today", "Today"),
                ("this-week", "This Week"),
                ("this-month", "This Month"),
            ],
            FilterKind::Inactive => &[
                (ALL, "Any status"),
                ("active", "Active"),
                ("inactive", "Inactive"),
            ],
            FilterKind::EventType => &[
                (ALL, "Any event type"),
                ("conference", "Conference"),
                ("workshop", "Workshop"),
                ("webinar", "Webinar"),
            ],
            FilterKind::Category => &[
                (ALL, "Any category"),
                ("tech", "Tech"),
                ("art", "Art"),
                ("music", "Music"),
            ],
        }
    }

    fn index(self) -> usize {
        match self {
            FilterKind::LookingFor => 0,
            FilterKind::Location => 1,
            FilterKind::When => 2,
            FilterKind::Inactive => 3,
            FilterKind::EventType => 4,
            FilterKind::Category => 5,
        }
    }
}

/// The six independent browse selectors. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    values: [String; 6],
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| ALL.to_string()),
        }
    }
}

impl FilterSet {
    pub fn get(&self, kind: FilterKind) -> &str {
        &self.values[kind.index()]
    }

    /// Returns whether the value changed.
    pub fn set(&mut self, kind: FilterKind, value: &str) -> bool {
        let slot = &mut self.values[kind.index()];
        if slot.as_str() == value {
            return false;
        }
        *slot = value.to_string();
        true
    }

    /// Step to the next (or previous) option, wrapping around.
    pub fn cycle(&mut self, kind: FilterKind, forward: bool) -> bool {
        let options = kind.options();
        let current = options
            .iter()
            .position(|(v, _)| *v == self.get(kind))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else if current == 0 {
            options.len() - 1
        } else {
            current - 1
        };
        self.set(kind, options[next].0)
    }

    pub fn selected_label(&self, kind: FilterKind) -> &'static str {
        kind.options()
            .iter()
            .find(|(v, _)| *v == self.get(kind))
            .map(|(_, l)| *l)
            .unwrap_or("Custom")
    }

    pub fn is_default(&self) -> bool {
        self.values.iter().all(|v| v == ALL)
    }

    /// Query parameters for every non-default selector, in display order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        FilterKind::ORDER
            .iter()
            .filter(|k| self.get(**k) != ALL)
            .map(|k| (k.key(), self.get(*k).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_no_params() {
        let filters = FilterSet::default();
        assert!(filters.is_default());
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn test_only_free_selected() {
        let mut filters = FilterSet::default();
        assert!(filters.set(FilterKind::LookingFor, "free"));
        assert_eq!(filters.query_pairs(), vec![("type", "free".to_string())]);
    }

    #[test]
    fn test_set_same_value_is_not_a_change() {
        let mut filters = FilterSet::default();
        assert!(!filters.set(FilterKind::When, ALL));
        filters.set(FilterKind::When, "today");
        assert!(!filters.set(FilterKind::When, "today"));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut filters = FilterSet::default();
        filters.cycle(FilterKind::LookingFor, false);
        assert_eq!(filters.get(FilterKind::LookingFor), "paid");
        filters.cycle(FilterKind::LookingFor, true);
        assert_eq!(filters.get(FilterKind::LookingFor), ALL);
        filters.cycle(FilterKind::LookingFor, true);
        assert_eq!(filters.selected_label(FilterKind::LookingFor), "Free");
    }

    #[test]
    fn test_all_keys_distinct() {
        let mut keys: Vec<_> = FilterKind::ORDER.iter().map(|k| k.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 6);
    }
}
