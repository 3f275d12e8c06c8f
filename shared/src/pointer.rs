use crate::config::CoordinatePreference;

/// Button reported by a press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// From the DOM `button` field (0 = primary).
    pub fn from_dom_button(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }

    /// From the legacy `which` field (1 = left). `0` means no button information.
    pub fn from_legacy_which(which: i16) -> Option<Self> {
        match which {
            0 => None,
            1 => Some(PointerButton::Primary),
            2 => Some(PointerButton::Auxiliary),
            3 => Some(PointerButton::Secondary),
            other => Some(PointerButton::Other(other)),
        }
    }

    pub fn is_primary(self) -> bool {
        self == PointerButton::Primary
    }
}

/// Horizontal position and button of one input event, with field presence preserved.
///
/// Harness-synthesized events often set only `pageX`, so both coordinate fields
/// are optional and [`PointerSample::viewport_x`] decides which one to trust.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub client_x: Option<f64>,
    pub page_x: Option<f64>,
    /// Horizontal page scroll offset at the time of the event.
    pub page_scroll_x: f64,
    /// `None` when the event carries no button indicator; treated as primary.
    pub button: Option<PointerButton>,
}

impl PointerSample {
    pub fn from_client_x(client_x: f64) -> Self {
        Self {
            client_x: Some(client_x),
            ..Self::default()
        }
    }

    pub fn from_page_x(page_x: f64, page_scroll_x: f64) -> Self {
        Self {
            page_x: Some(page_x),
            page_scroll_x,
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn is_primary_press(&self) -> bool {
        self.button.is_none_or(PointerButton::is_primary)
    }

    /// Viewport-relative X. Missing or non-finite fields fall through to the
    /// other field and finally to `0.0`.
    pub fn viewport_x(&self, preference: CoordinatePreference) -> f64 {
        let client = finite(self.client_x);
        let from_page = finite(self.page_x).map(|page_x| page_x - finite_or_zero(self.page_scroll_x));

        let x = match preference {
            CoordinatePreference::ViewportFirst => client.or(from_page),
            CoordinatePreference::PageFirst => from_page.or(client),
        };
        x.unwrap_or(0.0)
    }

    /// X relative to an element whose bounding rect starts at `element_left`.
    pub fn element_x(&self, preference: CoordinatePreference, element_left: f64) -> f64 {
        self.viewport_x(preference) - finite_or_zero(element_left)
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
