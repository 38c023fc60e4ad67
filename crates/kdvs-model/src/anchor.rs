/// One `<a href>` from the schedule page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleAnchor {
    /// Visible text of the link, whitespace-collapsed (e.g., "Apartment 5").
    pub text: String,
    /// Raw `href` attribute as it appears on the page.
    pub href: String,
}

impl ScheduleAnchor {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}
