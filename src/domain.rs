//! Domain types shared by the widget model, its stores and its hosts.
//!
//! Wire shapes follow what the lookup service returns and what earlier
//! versions of the widget persisted, so existing storage keeps decoding.

use serde::{Deserialize, Deserializer, Serialize};

/// One brand match returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Suggestion {
    /// Brand name. The service sometimes omits it or sends `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub domain: String,
    /// Logo URL
    pub icon: String,
}

impl Suggestion {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            icon: icon.into(),
        }
    }

    /// Name to show in a suggestion row, falling back to the domain
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.domain
        } else {
            &self.name
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Text field state.
///
/// `Open` and `Closed` always hold non-empty text; an empty field is `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "InputWire", into = "InputWire")]
pub enum InputState {
    #[default]
    Idle,
    /// Suggestion panel visible
    Open(String),
    /// Text kept, panel hidden
    Closed(String),
}

impl InputState {
    /// State after a keystroke
    pub fn open(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            InputState::Idle
        } else {
            InputState::Open(text)
        }
    }

    /// State with fixed text and the panel hidden
    pub fn closed(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            InputState::Idle
        } else {
            InputState::Closed(text)
        }
    }

    pub fn text(&self) -> &str {
        match self {
            InputState::Idle => "",
            InputState::Open(text) | InputState::Closed(text) => text,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, InputState::Open(_))
    }

    /// Same text with the panel hidden
    pub fn close(&self) -> Self {
        InputState::closed(self.text())
    }
}

/// Persisted `{ text, active }` form of [`InputState`]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct InputWire {
    #[serde(default)]
    text: String,
    #[serde(default)]
    active: bool,
}

impl From<InputWire> for InputState {
    fn from(wire: InputWire) -> Self {
        if wire.active {
            InputState::open(wire.text)
        } else {
            InputState::closed(wire.text)
        }
    }
}

impl From<InputState> for InputWire {
    fn from(state: InputState) -> Self {
        let active = state.is_active();
        let text = match state {
            InputState::Idle => String::new(),
            InputState::Open(text) | InputState::Closed(text) => text,
        };
        InputWire { text, active }
    }
}

/// Coarse widget phase derived from input and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Empty input, nothing selected
    Idle,
    /// Panel open over a non-empty query
    Typing,
    /// A logo is selected and the panel is hidden
    Selected,
    /// Text fixed after a submission, nothing selected
    Closed,
}

/// Everything the widget mirrors into storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub queries: Vec<Suggestion>,
    pub selected_logo: Option<Suggestion>,
    pub input_value: InputState,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
            && self.selected_logo.is_none()
            && self.input_value == InputState::Idle
    }
}

/// Payload handed to the host when the form is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Resolved submission value
    pub value: String,
    /// Reserved for a click-to-submit path; never set today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Suggestion>,
    /// Suggestions visible at submit time
    pub queries: Vec<Suggestion>,
}
