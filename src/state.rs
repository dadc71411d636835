use crate::commands::{SelectorState, Unit};
use crate::SharedStatus;
use std::sync::{Arc, Mutex};

// Represents the current high-level state of the application UI
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // App is starting, loading config and selector options
    Running,      // Main operational state, showing the selected view
}

// The closed set of panels the view switcher knows about.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum View {
    Home,
    Training,
    About,
}

impl View {
    /// Parses a view name. Anything outside the closed set yields `None`,
    /// which the switcher renders as "all panels hidden".
    pub fn from_name(name: &str) -> Option<View> {
        match name {
            "home" => Some(View::Home),
            "training" => Some(View::Training),
            "about" => Some(View::About),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Training => "training",
            View::About => "about",
        }
    }
}

// Colour bucket for a status line; the UI maps tones onto its palette.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tone {
    Pending, // request underway
    Success, // device confirmed the command
    Warning, // device answered but refused
    Error,   // validation or connectivity failure
    Waiting, // capture prompt, device is listening for a signal
    Saved,   // flash write confirmed
}

// One unit's status display. Worker threads overwrite it, the UI renders it
// every frame.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: String::new(),
            tone: Tone::Pending,
        }
    }
}

impl StatusLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

// The named slots backing one unit: address input, status line and the two
// command selectors. The views draw directly from these bindings.
#[derive(Debug)]
pub struct UnitPanel {
    pub unit: Unit,
    pub address: String,
    pub status: SharedStatus,
    pub temperature: SelectorState,
    pub mode: SelectorState,
}

impl UnitPanel {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            address: String::new(),
            status: Arc::new(Mutex::new(StatusLine::default())),
            temperature: SelectorState::default(),
            mode: SelectorState::default(),
        }
    }
}
