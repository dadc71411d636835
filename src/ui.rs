use crate::about;
use crate::commands::{SelectorState, Unit, SWING_OFF, SWING_ON};
use crate::state::{Tone, UnitPanel, View};
use crate::{RemotePanel, SharedStatus, DRAWER_WIDTH, INITIAL_WIDTH, PROGRAM_TITLE}; // Import main struct
use eframe::egui::{self, Color32, Context, RichText, Ui};

// Status palette, matching the colours the device's bundled page used.
const PENDING_COLOR: Color32 = Color32::GRAY;
const SUCCESS_COLOR: Color32 = Color32::GREEN;
const WARNING_COLOR: Color32 = Color32::ORANGE;
const ERROR_COLOR: Color32 = Color32::RED;
const WAITING_COLOR: Color32 = Color32::LIGHT_BLUE;
const SAVED_COLOR: Color32 = Color32::from_rgb(160, 32, 240); // Purple

fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Pending => PENDING_COLOR,
        Tone::Success => SUCCESS_COLOR,
        Tone::Warning => WARNING_COLOR,
        Tone::Error => ERROR_COLOR,
        Tone::Waiting => WAITING_COLOR,
        Tone::Saved => SAVED_COLOR,
    }
}

// Keep state-changing handlers associated with RemotePanel
impl RemotePanel {
    // --- Button/Action Handlers (called from the draw functions) ---

    /// The named slots for one unit.
    pub fn unit_panel(&mut self, unit: Unit) -> &mut UnitPanel {
        match unit {
            Unit::Sala => &mut self.sala,
            Unit::Treino => &mut self.treino,
        }
    }

    /// Flips the navigation drawer open or closed.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
        log::debug!(
            "Drawer now {}",
            if self.drawer_open { "open" } else { "closed" }
        );
    }

    /// Shows exactly the requested view and hides the rest; `None` hides
    /// every panel. Entering the training view reloads its temperature
    /// selector so it is populated even if never shown before. Always
    /// closes the drawer.
    pub fn show_view(&mut self, view: Option<View>) {
        if view == Some(View::Training) {
            self.treino.temperature.load_temperature_range();
        }
        self.active_view = view;
        self.drawer_open = false;
        match view {
            Some(v) => log::info!("Switched to view '{}'", v.name()),
            None => log::warn!("Unknown view requested, hiding all panels"),
        }
    }

    /// Copies the persisted device address into both unit address fields.
    /// Leaves the fields alone when nothing was persisted yet.
    pub fn apply_persisted_address(&mut self) {
        let saved = self.config.data.device_address.clone();
        if saved.is_empty() {
            return;
        }
        self.sala.address = saved.clone();
        self.treino.address = saved;
    }

    /// Persists an edited address and mirrors it into the other unit's
    /// field, keeping both inputs and the stored value convergent. Runs on
    /// every keystroke, like the page it replaces.
    pub fn address_edited(&mut self, unit: Unit) {
        let value = self.unit_panel(unit).address.clone();

        let other = match unit {
            Unit::Sala => &mut self.treino,
            Unit::Treino => &mut self.sala,
        };
        if other.address != value {
            other.address = value.clone();
        }

        self.config.data.device_address = value;
        if let Err(e) = self.config.save() {
            log::error!("Failed to persist device address: {}", e);
        }
    }
}

// --- UI Drawing Functions ---

pub fn draw_running_state(app: &mut RemotePanel, ctx: &Context) {
    draw_top_bar(app, ctx);
    draw_drawer(app, ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        // The open drawer dims and blocks the content behind it, standing
        // in for the original page overlay.
        let enabled = !app.drawer_open;
        ui.add_enabled_ui(enabled, |ui| match app.active_view {
            Some(View::Home) => draw_home_view(app, ui),
            Some(View::Training) => draw_training_view(app, ui),
            Some(View::About) => draw_about_screen(app, ui),
            None => {} // Unknown view requested: every panel stays hidden
        });
    });
}

fn draw_top_bar(app: &mut RemotePanel, ctx: &Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("☰").clicked() {
                app.toggle_drawer();
            }
            ui.heading(PROGRAM_TITLE);
        });
    });
}

fn draw_drawer(app: &mut RemotePanel, ctx: &Context) {
    if !app.drawer_open {
        return;
    }
    egui::SidePanel::left("nav_drawer")
        .exact_width(DRAWER_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Menu");
            ui.separator();
            if ui.button("Remote control").clicked() {
                app.show_view(Some(View::Home));
            }
            if ui.button("Training mode").clicked() {
                app.show_view(Some(View::Training));
            }
            if ui.button("About").clicked() {
                app.show_view(Some(View::About));
            }
        });
}

fn draw_home_view(app: &mut RemotePanel, ui: &mut Ui) {
    ui.heading("Living room");
    ui.add_space(4.0);

    draw_address_row(app, ui, Unit::Sala);
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Temperature:");
        selector_combo(ui, "temp_sala", &mut app.sala.temperature);
        ui.label("Mode:");
        selector_combo(ui, "mode_sala", &mut app.sala.mode);
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Send temperature + mode").clicked() {
            app.send_selected(Unit::Sala);
        }
        if ui.button("Send temperature").clicked() {
            app.send_temperature(Unit::Sala);
        }
        if ui.button("Send mode").clicked() {
            app.send_mode(Unit::Sala);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Swing:");
        if ui.button("Oscillate").clicked() {
            app.send_swing(SWING_ON);
        }
        if ui.button("Fixed").clicked() {
            app.send_swing(SWING_OFF);
        }
    });

    ui.add_space(8.0);
    draw_status_line(ui, &app.sala.status);
}

fn draw_training_view(app: &mut RemotePanel, ui: &mut Ui) {
    ui.heading("Signal training");
    ui.label("Capture commands from the original remote into the blaster.");
    ui.add_space(4.0);

    draw_address_row(app, ui, Unit::Treino);
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Temperature:");
        selector_combo(ui, "temp_treino", &mut app.treino.temperature);
        if ui.button("Capture temperature").clicked() {
            app.capture_temperature();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Mode:");
        selector_combo(ui, "mode_treino", &mut app.treino.mode);
        if ui.button("Capture mode").clicked() {
            app.capture_mode();
        }
    });

    ui.add_space(4.0);
    if ui.button("Save to device memory").clicked() {
        app.save_memory();
    }

    ui.add_space(8.0);
    draw_status_line(ui, &app.treino.status);
}

pub fn draw_about_screen(app: &mut RemotePanel, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.show_view(Some(View::Home));
        }
    });
}

// --- UI Helper Widgets ---

// Shared address row; edits propagate to the other view and the config.
fn draw_address_row(app: &mut RemotePanel, ui: &mut Ui, unit: Unit) {
    ui.horizontal(|ui| {
        ui.label("Device address:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.unit_panel(unit).address)
                .hint_text("192.168.0.50"),
        );
        if response.changed() {
            app.address_edited(unit);
        }
    });
}

// Renders a unit's status label in its tone colour. Nothing is shown until
// the first command writes a line.
fn draw_status_line(ui: &mut Ui, status: &SharedStatus) {
    let line = match status.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => {
            log::error!("Status mutex poisoned while drawing");
            poisoned.into_inner().clone() // Show the last value anyway
        }
    };
    if !line.text.is_empty() {
        ui.label(RichText::new(line.text).color(tone_color(line.tone)));
    }
}

/// Creates a ComboBox over a selector's options, writing the chosen index
/// back into the selector.
fn selector_combo(ui: &mut Ui, id_salt: impl std::hash::Hash, selector: &mut SelectorState) {
    let mut clicked = None;
    egui::ComboBox::from_id_salt(id_salt)
        .width(90.0) // Adjust width as needed
        .selected_text(selector.selected_label().to_string())
        .show_ui(ui, |ui| {
            for (idx, option) in selector.options.iter().enumerate() {
                if ui
                    .selectable_label(idx == selector.selected, format!("{}", option))
                    .clicked()
                {
                    clicked = Some(idx);
                }
            }
        });
    if let Some(idx) = clicked {
        selector.selected = idx;
    }
}
