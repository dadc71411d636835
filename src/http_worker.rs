use crate::commands::Unit;
use crate::state::{StatusLine, Tone};
use crate::util::{command_url, truncate_chars};
use crate::SharedStatus;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

// --- Constants ---
// Routes exposed by the blaster firmware.
pub const SEND_ROUTE: &str = "/enviar";
pub const TRAIN_ROUTE: &str = "/treinar";
pub const SAVE_ROUTE: &str = "/salvar";

// The device decodes one infrared signal at a time; paired sends keep this
// gap between the two commands.
pub const SIGNAL_GAP: Duration = Duration::from_millis(600);

// How much of an error body is surfaced in the status line.
const BODY_PREVIEW_CHARS: usize = 50;

/// What the senders see of an HTTP exchange: the status code plus the body
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to complete a request at all (connection refused, DNS, bad URL,
/// timeout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Blocking GET transport the workers run against. The production client
/// keeps reqwest's own default timeout; the panel adds none of its own.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

// Overwrites a unit's status line. Workers and the UI share the slot
// through a mutex.
fn set_status(slot: &SharedStatus, text: String, tone: Tone) {
    match slot.lock() {
        Ok(mut line) => *line = StatusLine::new(text, tone),
        Err(_) => log::error!("Status mutex poisoned, dropping update: {}", text),
    }
}

/// Sends one command to a unit's send route and records the outcome in its
/// status line. An empty address is a validation failure and never reaches
/// the transport.
pub fn send_command(transport: &dyn Transport, address: &str, command: &str, status: &SharedStatus) {
    if address.trim().is_empty() {
        set_status(
            status,
            "Error: invalid device address.".to_string(),
            Tone::Error,
        );
        return;
    }

    set_status(status, format!("Sending {command}..."), Tone::Pending);
    let url = command_url(address, SEND_ROUTE, Some(command));
    log::info!("GET {}", url);

    match transport.get(&url) {
        Ok(response) if response.is_success() => {
            set_status(status, format!("OK: {command} sent."), Tone::Success);
        }
        Ok(response) => {
            log::warn!("Device refused '{}': HTTP {}", command, response.status);
            set_status(
                status,
                format!(
                    "ERROR ({}): {}...",
                    response.status,
                    truncate_chars(&response.body, BODY_PREVIEW_CHARS)
                ),
                Tone::Warning,
            );
        }
        Err(e) => {
            // Detail goes to the log only; the label stays generic.
            log::error!("Send of '{}' failed: {}", command, e);
            set_status(
                status,
                "NETWORK ERROR: check the address or connection.".to_string(),
                Tone::Error,
            );
        }
    }
}

/// Asks the device to record the next infrared signal it sees under
/// `command`, via the training route. Unlike `send_command` the address is
/// not validated first; a blank address yields an unusable URL that lands
/// in the connection-failure outcome.
pub fn capture_command(
    transport: &dyn Transport,
    address: &str,
    command: &str,
    status: &SharedStatus,
) {
    set_status(
        status,
        format!("Waiting for IR signal for '{command}'... point the remote now!"),
        Tone::Waiting,
    );
    let url = command_url(address, TRAIN_ROUTE, Some(command));
    log::info!("GET {}", url);

    match transport.get(&url) {
        Ok(response) if response.is_success() => {
            set_status(
                status,
                format!("SUCCESS: '{command}' captured!"),
                Tone::Success,
            );
        }
        Ok(response) => {
            // The firmware explains refusals in the body; show it as-is.
            set_status(status, format!("FAILED: {}", response.body), Tone::Error);
        }
        Err(e) => {
            log::error!("Capture of '{}' failed: {}", command, e);
            set_status(
                status,
                "Connection error or timeout (5s).".to_string(),
                Tone::Error,
            );
        }
    }
}

/// Tells the device to persist its captured commands to flash. The response
/// body is ignored; any failure collapses into one generic message.
pub fn save_to_memory(transport: &dyn Transport, address: &str, status: &SharedStatus) {
    set_status(
        status,
        "Saving to device memory...".to_string(),
        Tone::Pending,
    );
    let url = command_url(address, SAVE_ROUTE, None);
    log::info!("GET {}", url);

    match transport.get(&url) {
        Ok(response) if response.is_success() => {
            set_status(
                status,
                "All commands saved to flash!".to_string(),
                Tone::Saved,
            );
        }
        Ok(response) => {
            log::warn!("Save refused: HTTP {}", response.status);
            set_status(status, "Error saving.".to_string(), Tone::Error);
        }
        Err(e) => {
            log::error!("Save failed: {}", e);
            set_status(status, "Error saving.".to_string(), Tone::Error);
        }
    }
}

/// Fire-and-forget single send on its own worker thread.
pub fn spawn_command(
    transport: Arc<dyn Transport>,
    address: String,
    command: String,
    status: SharedStatus,
) {
    thread::spawn(move || {
        send_command(transport.as_ref(), &address, &command, &status);
    });
}

/// Sends `first` right away and `second` after the signal gap, each on its
/// own worker thread. The second send does not depend on the first's
/// outcome.
pub fn spawn_command_pair(
    transport: Arc<dyn Transport>,
    address: String,
    first: String,
    second: String,
    status: SharedStatus,
) {
    spawn_command(transport.clone(), address.clone(), first, status.clone());
    thread::spawn(move || {
        thread::sleep(SIGNAL_GAP);
        send_command(transport.as_ref(), &address, &second, &status);
    });
}

// Send entry points used by the UI handlers. Each snapshots the unit's
// address and hands off to a worker so the frame never blocks on I/O.
impl crate::RemotePanel {
    /// Queues a single command for the unit.
    pub fn send_ir_command(&mut self, unit: Unit, command: &str) {
        let panel = self.unit_panel(unit);
        let address = panel.address.clone();
        let status = panel.status.clone();
        log::debug!("Queueing '{}' for unit '{}'", command, panel.unit);
        spawn_command(self.transport.clone(), address, command.to_string(), status);
    }

    /// Sends the unit's selected temperature, then its selected mode after
    /// the signal gap.
    pub fn send_selected(&mut self, unit: Unit) {
        let (address, temperature, mode, status) = {
            let panel = self.unit_panel(unit);
            (
                panel.address.clone(),
                panel.temperature.selected_value().to_string(),
                panel.mode.selected_value().to_string(),
                panel.status.clone(),
            )
        };
        log::debug!(
            "Queueing '{}' then '{}' for unit '{}'",
            temperature,
            mode,
            unit
        );
        spawn_command_pair(self.transport.clone(), address, temperature, mode, status);
    }

    /// Sends only the unit's selected temperature.
    pub fn send_temperature(&mut self, unit: Unit) {
        let command = self
            .unit_panel(unit)
            .temperature
            .selected_value()
            .to_string();
        self.send_ir_command(unit, &command);
    }

    /// Sends only the unit's selected mode.
    pub fn send_mode(&mut self, unit: Unit) {
        let command = self.unit_panel(unit).mode.selected_value().to_string();
        self.send_ir_command(unit, &command);
    }

    /// Swing on/off always targets the living-room unit.
    pub fn send_swing(&mut self, token: &str) {
        self.send_ir_command(Unit::Sala, token);
    }

    /// Puts the device into capture mode for `command` on a worker thread.
    pub fn capture(&mut self, command: &str) {
        let panel = self.unit_panel(Unit::Treino);
        let address = panel.address.clone();
        let status = panel.status.clone();
        let transport = self.transport.clone();
        let command = command.to_string();
        thread::spawn(move || {
            capture_command(transport.as_ref(), &address, &command, &status);
        });
    }

    /// Captures whatever temperature the training selector shows.
    pub fn capture_temperature(&mut self) {
        let command = self
            .unit_panel(Unit::Treino)
            .temperature
            .selected_value()
            .to_string();
        self.capture(&command);
    }

    /// Captures whatever mode the training selector shows.
    pub fn capture_mode(&mut self) {
        let command = self
            .unit_panel(Unit::Treino)
            .mode
            .selected_value()
            .to_string();
        self.capture(&command);
    }

    /// Asks the device to write captured commands to flash, reporting into
    /// the training status line.
    pub fn save_memory(&mut self) {
        let panel = self.unit_panel(Unit::Treino);
        let address = panel.address.clone();
        let status = panel.status.clone();
        let transport = self.transport.clone();
        thread::spawn(move || {
            save_to_memory(transport.as_ref(), &address, &status);
        });
    }
}
