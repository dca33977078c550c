//! Drag payload carrier and event shape.

/// Media type tag for the project id payload.
pub const MEDIA_TYPE_PLAIN_TEXT: &str = "text/plain";

/// Operations a drag source allows; drives cursor presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
    All,
}

impl DropEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
            Self::All => "all",
        }
    }
}

/// Payload store attached to one drag gesture.
///
/// Entries are keyed by media type and keep the order in which types were
/// first declared, mirroring `DataTransfer.types`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing an existing entry in place.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let format = normalize_format(format);
        let data = data.into();
        match self.entries.iter_mut().find(|(key, _)| *key == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format, data)),
        }
    }

    /// Returns the payload stored under `format`.
    pub fn get_data(&self, format: &str) -> Option<&str> {
        let format = normalize_format(format);
        self.entries
            .iter()
            .find(|(key, _)| *key == format)
            .map(|(_, value)| value.as_str())
    }

    /// Declared media types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn first_type(&self) -> Option<&str> {
        self.types().next()
    }

    pub fn clear_data(&mut self) {
        self.entries.clear();
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }
}

// Media types compare case-insensitively.
fn normalize_format(format: &str) -> String {
    format.trim().to_ascii_lowercase()
}

/// One drag event as seen by a handler.
///
/// `data_transfer` is `None` when the source carried no transfer object at
/// all (for example a file dragged in from outside).
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: Option<DataTransfer>) -> Self {
        Self {
            data_transfer,
            default_prevented: false,
        }
    }

    /// Event with an empty transfer, as produced at drag start.
    pub fn with_empty_transfer() -> Self {
        Self::new(Some(DataTransfer::new()))
    }

    /// Accepts the drop; default behavior rejects it.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Copy of this event's transfer for the next phase of the same gesture.
    pub fn follow_up(&self) -> Self {
        Self::new(self.data_transfer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{DataTransfer, DragEvent, DropEffect, MEDIA_TYPE_PLAIN_TEXT};

    #[test]
    fn set_data_replaces_existing_format_in_place() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(MEDIA_TYPE_PLAIN_TEXT, "one");
        transfer.set_data("text/uri-list", "https://example.invalid");
        transfer.set_data("Text/Plain", "two");

        assert_eq!(transfer.get_data(MEDIA_TYPE_PLAIN_TEXT), Some("two"));
        assert_eq!(
            transfer.types().collect::<Vec<_>>(),
            vec!["text/plain", "text/uri-list"]
        );
    }

    #[test]
    fn clear_data_drops_all_types() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(MEDIA_TYPE_PLAIN_TEXT, "x");
        transfer.clear_data();
        assert_eq!(transfer.first_type(), None);
        assert_eq!(transfer.get_data(MEDIA_TYPE_PLAIN_TEXT), None);
    }

    #[test]
    fn effect_allowed_defaults_to_none() {
        let mut transfer = DataTransfer::new();
        assert_eq!(transfer.effect_allowed(), DropEffect::None);
        transfer.set_effect_allowed(DropEffect::Move);
        assert_eq!(transfer.effect_allowed().as_str(), "move");
    }

    #[test]
    fn follow_up_keeps_payload_but_resets_acceptance() {
        let mut event = DragEvent::with_empty_transfer();
        if let Some(transfer) = event.data_transfer.as_mut() {
            transfer.set_data(MEDIA_TYPE_PLAIN_TEXT, "payload");
        }
        event.prevent_default();

        let next = event.follow_up();
        assert!(!next.default_prevented());
        assert_eq!(
            next.data_transfer
                .as_ref()
                .and_then(|transfer| transfer.get_data(MEDIA_TYPE_PLAIN_TEXT)),
            Some("payload")
        );
    }
}
