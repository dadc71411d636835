// Export modules for testing
pub mod about;
pub mod commands;
pub mod config;
pub mod http_worker;
pub mod state;
pub mod ui;
pub mod util;

// Re-export main struct and types for testing
pub use crate::commands::Unit;
pub use crate::config::ConfigData;
pub use crate::state::{State, View};

// Constants
pub const PROGRAM_TITLE: &str = "IR Blaster Remote Panel";
pub const INITIAL_WIDTH: f32 = 480.0;
pub const INITIAL_HEIGHT: f32 = 400.0;
pub const DRAWER_WIDTH: f32 = 250.0;

// Type aliases for shared state
pub use std::sync::{Arc, Mutex};
pub type SharedStatus = Arc<Mutex<state::StatusLine>>;

// Args struct for command line parsing
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Device address to pre-fill for this session (not stored until edited)
    #[arg(short, long)]
    pub address: Option<String>,

    /// View to open at startup: home, training or about
    #[arg(long)]
    pub view: Option<String>,
}

// Wrapper for ConfigData to match the actual structure
pub use fast_config::Config;

// The main application struct
pub struct RemotePanel {
    // State
    pub state: State,
    pub active_view: Option<View>, // Which panel is visible; None hides all
    pub drawer_open: bool,

    // Unit bindings: address input, status line and command selectors
    pub sala: state::UnitPanel,
    pub treino: state::UnitPanel,

    // Transport shared with the worker threads
    pub transport: Arc<dyn http_worker::Transport>,

    // Configuration
    pub config: Config<ConfigData>,

    // Launch overrides from the command line
    pub address_override: Option<String>,
    pub initial_view: Option<String>,
}
