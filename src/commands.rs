use std::fmt;

// Command vocabulary understood by the blaster firmware, plus the state
// behind the temperature/mode dropdowns.

// Temperature commands cover this range, with 24 pre-selected.
pub const MIN_TEMPERATURE: i32 = 16;
pub const MAX_TEMPERATURE: i32 = 30;
pub const DEFAULT_TEMPERATURE: i32 = 24;

// Swing tokens are fixed triggers, not selector options.
pub const SWING_ON: &str = "SW_ON";
pub const SWING_OFF: &str = "SW_OFF";

// A logical target on the panel. Each unit owns an address input and a
// status line; the firmware itself only ever sees the resulting URLs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Sala,   // living-room remote view
    Treino, // signal-training view
}

impl Unit {
    pub fn id(self) -> &'static str {
        match self {
            Unit::Sala => "sala",
            Unit::Treino => "treino",
        }
    }
}

// How the unit shows up in log lines.
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// One dropdown entry: the token sent to the device plus the label shown in
// the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub value: String,
    pub label: String,
}

impl CommandOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// How the option is displayed in dropdowns.
impl fmt::Display for CommandOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Builds the temperature options, one per degree in 16..=30, each with
/// value `"T <n>"` and label `"<n>°C"`.
pub fn temperature_options() -> Vec<CommandOption> {
    (MIN_TEMPERATURE..=MAX_TEMPERATURE)
        .map(|deg| CommandOption::new(format!("T {deg}"), format!("{deg}°C")))
        .collect()
}

/// Operating-mode options. Values are forwarded verbatim like any other
/// selector value.
pub fn mode_options() -> Vec<CommandOption> {
    vec![
        CommandOption::new("MOD1", "Cool"),
        CommandOption::new("MOD2", "Fan"),
        CommandOption::new("MOD3", "Dry"),
        CommandOption::new("MOD4", "Auto"),
    ]
}

// Selector contents plus the current selection. Dropdowns render from this
// every frame.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub options: Vec<CommandOption>,
    pub selected: usize,
}

impl SelectorState {
    // Replaces any previous options, so running a loader twice never leaves
    // duplicate entries behind.
    pub fn load(&mut self, options: Vec<CommandOption>, default_index: usize) {
        self.options = options;
        self.selected = if self.options.is_empty() {
            0
        } else {
            default_index.min(self.options.len() - 1)
        };
    }

    /// Fills the selector with the 16..=30 temperature range, 24 pre-selected.
    pub fn load_temperature_range(&mut self) {
        let default_index = (DEFAULT_TEMPERATURE - MIN_TEMPERATURE) as usize;
        self.load(temperature_options(), default_index);
    }

    /// Fills the selector with the operating modes, first entry pre-selected.
    pub fn load_modes(&mut self) {
        self.load(mode_options(), 0);
    }

    /// Token for the current selection. An unpopulated selector yields an
    /// empty token, which is forwarded like any other value.
    pub fn selected_value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|option| option.value.as_str())
            .unwrap_or("")
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|option| option.label.as_str())
            .unwrap_or("")
    }
}
