#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// Declare modules
mod about;
mod commands;
mod config;
mod http_worker;
mod state;
mod ui;
mod util;

use std::process::exit;
// External Crate Imports (only those needed directly in main.rs)
use clap::Parser;
use eframe::{egui, glow};
use fast_config::Config;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// Internal Module Imports
use commands::Unit;
use config::{ConfigData, CONFIG_FILE_NAME}; // Import specific items
use http_worker::{HttpTransport, Transport};
use state::{State, UnitPanel, View};

// Constants
const PROGRAM_TITLE: &str = "IR Blaster Remote Panel";
const INITIAL_WIDTH: f32 = 480.0;
const INITIAL_HEIGHT: f32 = 400.0;
const DRAWER_WIDTH: f32 = 250.0;

// Type aliases for shared state can make signatures cleaner
pub type SharedStatus = Arc<Mutex<state::StatusLine>>;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Device address to pre-fill for this session (not stored until edited)
    #[arg(short, long)]
    address: Option<String>,

    /// View to open at startup: home, training or about
    #[arg(long)]
    view: Option<String>,
}

// The main application struct
pub struct RemotePanel {
    // State
    state: State,
    active_view: Option<View>, // Which panel is visible; None hides all
    drawer_open: bool,

    // Unit bindings: address input, status line and command selectors
    sala: UnitPanel,
    treino: UnitPanel,

    // Transport shared with the worker threads
    transport: Arc<dyn Transport>,

    // Configuration
    config: Config<ConfigData>,

    // Launch overrides from the command line
    address_override: Option<String>,
    initial_view: Option<String>,
}

impl Default for RemotePanel {
    fn default() -> Self {
        // Determine config path safely
        let config_dir = dirs::config_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
        let config_path = format!("{}/{}", config_dir, CONFIG_FILE_NAME);

        // Handle potential config creation error
        let config = match Config::new(&config_path, ConfigData::default()) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error creating config file at {}: {}", config_path, e);
                exit(1)
            }
        };

        Self {
            state: State::Initialising,
            active_view: Some(View::Home),
            drawer_open: false,
            sala: UnitPanel::new(Unit::Sala),
            treino: UnitPanel::new(Unit::Treino),
            transport: Arc::new(HttpTransport::new()),
            config,
            address_override: None,
            initial_view: None,
        }
    }
}

// Implementations specific to App lifecycle and top-level control
impl RemotePanel {
    // Initialization logic called once at the start
    fn init(&mut self) {
        // The home view's selectors are ready before its first paint. The
        // training temperature selector stays empty until the view switch
        // loads it.
        self.sala.temperature.load_temperature_range();
        self.sala.mode.load_modes();
        self.treino.mode.load_modes();

        self.apply_persisted_address();

        if let Some(address) = self.address_override.take() {
            log::info!("Using address override '{}'", address);
            self.sala.address = address.clone();
            self.treino.address = address;
        }
        if let Some(name) = self.initial_view.take() {
            self.show_view(View::from_name(&name));
        }

        self.state = State::Running;
        log::info!("Initialization complete. State set to Running.");
    }

    // Graceful shutdown logic
    fn shutdown_app(&mut self) {
        log::info!("Shutdown requested.");

        // Save configuration
        if let Err(e) = self.config.save() {
            log::error!("Failed to save configuration on exit: {}", e);
        } else {
            log::info!("Configuration saved.");
        }
        log::info!("Shutdown complete.");
    }
}

// Main eframe application loop
impl eframe::App for RemotePanel {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Request repaint ensures worker status updates show up promptly
        ctx.request_repaint_after(Duration::from_millis(50));

        match self.state {
            State::Initialising => {
                // Show a simple "Loading..." message while init runs
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("Initialising...");
                    });
                });
                // Actual init logic runs once after this frame
                self.init();
            }
            State::Running => {
                // Call the UI drawing function from the ui module
                ui::draw_running_state(self, ctx);
            }
        }
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown_app();
    }
}

// Application Entry Point
fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    log::info!("Starting {}", PROGRAM_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE), // Set window title here
        ..Default::default()
    };

    eframe::run_native(
        PROGRAM_TITLE, // Used for window title if not set in viewport
        options,
        Box::new(move |_cc| {
            let mut app = RemotePanel::default();
            app.address_override = args.address;
            app.initial_view = args.view;
            Ok(Box::new(app))
        }),
    )
}
