//! Administrator create-event form.

use super::image::ImageSelection;
use super::validate::{self, EventDraft, ValidEvent, ValidationError};
use super::{Submission, TextField};
use crate::api::models::DescriptionRequest;
use crate::config::expand_home;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Venue,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    CostType,
    Description,
    Image,
}

impl EventField {
    pub const ORDER: [EventField; 9] = [
        EventField::Title,
        EventField::Venue,
        EventField::StartDate,
        EventField::EndDate,
        EventField::StartTime,
        EventField::EndTime,
        EventField::CostType,
        EventField::Description,
        EventField::Image,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventField::Title => "Event Title",
            EventField::Venue => "Event Venue",
            EventField::StartDate => "Start Date",
            EventField::EndDate => "End Date",
            EventField::StartTime => "Start Time",
            EventField::EndTime => "End Time",
            EventField::CostType => "Event Cost",
            EventField::Description => "Event Description",
            EventField::Image => "Event Image",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EventField::Title => "Enter event title",
            EventField::Venue => "Enter venue address",
            EventField::StartDate | EventField::EndDate => "YYYY-MM-DD",
            EventField::StartTime | EventField::EndTime => "HH:MM",
            EventField::CostType => "e.g. Free / 200 INR",
            EventField::Description => "Type here or press Ctrl+G to generate",
            EventField::Image => "Path to a .jpg/.jpeg/.png up to 5MB, Ctrl+O to attach",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: TextField,
    pub venue: TextField,
    pub start_date: TextField,
    pub end_date: TextField,
    pub start_time: TextField,
    pub end_time: TextField,
    pub cost_type: TextField,
    pub description: TextField,
    pub image_path: TextField,
    pub image: Option<ImageSelection>,
    pub focus: usize,
    /// AI description request outstanding.
    pub generating: bool,
    pub submission: Submission,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> EventField {
        EventField::ORDER[self.focus.min(EventField::ORDER.len() - 1)]
    }

    pub fn field(&self, field: EventField) -> &TextField {
        match field {
            EventField::Title => &self.title,
            EventField::Venue => &self.venue,
            EventField::StartDate => &self.start_date,
            EventField::EndDate => &self.end_date,
            EventField::StartTime => &self.start_time,
            EventField::EndTime => &self.end_time,
            EventField::CostType => &self.cost_type,
            EventField::Description => &self.description,
            EventField::Image => &self.image_path,
        }
    }

    pub fn field_mut(&mut self, field: EventField) -> &mut TextField {
        match field {
            EventField::Title => &mut self.title,
            EventField::Venue => &mut self.venue,
            EventField::StartDate => &mut self.start_date,
            EventField::EndDate => &mut self.end_date,
            EventField::StartTime => &mut self.start_time,
            EventField::EndTime => &mut self.end_time,
            EventField::CostType => &mut self.cost_type,
            EventField::Description => &mut self.description,
            EventField::Image => &mut self.image_path,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % EventField::ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        let len = EventField::ORDER.len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut TextField)) {
        let field = self.focused();
        f(self.field_mut(field));
        // A changed path invalidates the previous selection.
        if field == EventField::Image {
            self.image = None;
        }
    }

    /// Path typed into the image field, if any.
    pub fn image_path(&self) -> Option<PathBuf> {
        let raw = self.image_path.value().trim();
        if raw.is_empty() {
            return None;
        }
        Some(expand_home(raw))
    }

    pub fn select_image(&mut self, selection: ImageSelection) {
        self.image = Some(selection);
        self.submission.error = None;
    }

    /// Drop the selection and show why. An outstanding submit stays outstanding.
    pub fn reject_image(&mut self, message: String) {
        self.image = None;
        self.submission.success = None;
        self.submission.error = Some(message);
    }

    /// The submit control is live only while nothing is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.submission.in_flight && !self.generating
    }

    /// All required inputs present; drives the submit hint only.
    pub fn is_complete(&self) -> bool {
        ![
            &self.title,
            &self.venue,
            &self.start_date,
            &self.end_date,
            &self.start_time,
            &self.end_time,
            &self.cost_type,
        ]
        .iter()
        .any(|f| f.is_empty())
            && self.image.is_some()
    }

    pub fn draft(&self) -> EventDraft<'_> {
        EventDraft {
            title: self.title.value(),
            venue: self.venue.value(),
            start_date: self.start_date.value(),
            end_date: self.end_date.value(),
            start_time: self.start_time.value(),
            end_time: self.end_time.value(),
            cost_type: self.cost_type.value(),
            description: self.description.value(),
            image: self.image.as_ref(),
        }
    }

    pub fn validate(&self) -> Result<ValidEvent, ValidationError> {
        validate::event(&self.draft())
    }

    pub fn description_request(&self) -> DescriptionRequest {
        DescriptionRequest {
            title: self.title.value().trim().to_string(),
            venue: self.venue.value().trim().to_string(),
            start_date: self.start_date.value().to_string(),
            end_date: self.end_date.value().to_string(),
            cost_type: self.cost_type.value().trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        for field in EventField::ORDER {
            self.field_mut(field).clear();
        }
        self.image = None;
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(form: &mut EventForm, field: EventField, value: &str) {
        form.focus = EventField::ORDER.iter().position(|f| *f == field).unwrap();
        form.edit(|f| f.set(value));
    }

    fn png() -> ImageSelection {
        ImageSelection {
            path: PathBuf::from("/tmp/poster.png"),
            size: 2048,
            mime: "image/png".into(),
        }
    }

    fn filled() -> EventForm {
        let mut form = EventForm::new();
        typed(&mut form, EventField::Title, "RustConf");
        typed(&mut form, EventField::Venue, "Hall A");
        typed(&mut form, EventField::StartDate, "2025-01-10");
        typed(&mut form, EventField::EndDate, "2025-01-10");
        typed(&mut form, EventField::StartTime, "09:00");
        typed(&mut form, EventField::EndTime, "10:00");
        typed(&mut form, EventField::CostType, "Free");
        typed(&mut form, EventField::Image, "/tmp/poster.png");
        form.select_image(png());
        form
    }

    #[test]
    fn test_complete_form_validates() {
        let form = filled();
        assert!(form.is_complete());
        let valid = form.validate().unwrap();
        assert_eq!(valid.title, "RustConf");
        assert_eq!(valid.image.mime, "image/png");
    }

    #[test]
    fn test_ordering_error() {
        let mut form = filled();
        typed(&mut form, EventField::StartTime, "10:00");
        typed(&mut form, EventField::EndTime, "09:00");
        assert!(matches!(form.validate(), Err(ValidationError::DateOrder)));
    }

    #[test]
    fn test_editing_path_drops_selection() {
        let mut form = filled();
        typed(&mut form, EventField::Image, "/tmp/other.png");
        assert!(form.image.is_none());
        assert!(matches!(form.validate(), Err(ValidationError::ImageRequired)));
    }

    #[test]
    fn test_can_submit_blocked_while_generating() {
        let mut form = filled();
        assert!(form.can_submit());
        form.generating = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_description_request_is_trimmed() {
        let mut form = filled();
        typed(&mut form, EventField::Title, "  RustConf  ");
        let req = form.description_request();
        assert_eq!(req.title, "RustConf");
        assert_eq!(req.start_date, "2025-01-10");
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        form.clear();
        assert!(form.title.is_empty());
        assert!(form.image.is_none());
        assert!(!form.is_complete());
    }
}
