use ir_remote_panel::commands::{
    mode_options, temperature_options, CommandOption, SelectorState, Unit, DEFAULT_TEMPERATURE,
    MAX_TEMPERATURE, MIN_TEMPERATURE, SWING_OFF, SWING_ON,
};
use ir_remote_panel::config::ConfigData;
use ir_remote_panel::http_worker::{TransportResponse, SAVE_ROUTE, SEND_ROUTE, TRAIN_ROUTE};
use ir_remote_panel::state::{State, StatusLine, Tone, UnitPanel, View};
use ir_remote_panel::util::{command_url, truncate_chars};

#[test]
fn test_config_data_default() {
    // Test that the default ConfigData is created correctly
    let config = ConfigData::default();

    // No address is stored until the user types one
    assert_eq!(config.device_address, "");
}

#[test]
fn test_temperature_options() {
    // Test that the temperature range covers every degree once
    let options = temperature_options();

    assert_eq!(options.len(), 15);
    assert_eq!(options[0].value, "T 16");
    assert_eq!(options[0].label, "16°C");
    assert_eq!(options[14].value, "T 30");
    assert_eq!(options[14].label, "30°C");

    // Consecutive degrees, no gaps or duplicates
    for (i, option) in options.iter().enumerate() {
        let degree = MIN_TEMPERATURE + i as i32;
        assert_eq!(option.value, format!("T {}", degree));
        assert_eq!(option.label, format!("{}°C", degree));
    }
    assert_eq!(
        options.len() as i32,
        MAX_TEMPERATURE - MIN_TEMPERATURE + 1
    );
}

#[test]
fn test_mode_options() {
    // Test that the mode list keeps its wire tokens
    let options = mode_options();

    assert_eq!(options.len(), 4);
    assert_eq!(options[0].value, "MOD1");
    assert_eq!(options[0].label, "Cool");
    assert_eq!(options[3].value, "MOD4");
    assert_eq!(options[3].label, "Auto");
}

#[test]
fn test_selector_temperature_default_selection() {
    // Test that loading the temperature range pre-selects 24
    let mut selector = SelectorState::default();
    selector.load_temperature_range();

    assert_eq!(selector.selected_value(), format!("T {}", DEFAULT_TEMPERATURE));
    assert_eq!(selector.selected_label(), format!("{}°C", DEFAULT_TEMPERATURE));
}

#[test]
fn test_selector_reload_is_idempotent() {
    // Loading twice must not duplicate options or move the selection
    let mut selector = SelectorState::default();
    selector.load_temperature_range();
    selector.load_temperature_range();

    assert_eq!(selector.options.len(), 15);
    assert_eq!(selector.selected_value(), "T 24");

    let mut modes = SelectorState::default();
    modes.load_modes();
    modes.load_modes();
    assert_eq!(modes.options.len(), 4);
    assert_eq!(modes.selected_value(), "MOD1");
}

#[test]
fn test_empty_selector_yields_empty_token() {
    // An unpopulated selector forwards an empty command token
    let selector = SelectorState::default();

    assert_eq!(selector.selected_value(), "");
    assert_eq!(selector.selected_label(), "");
}

#[test]
fn test_unit_display() {
    // Test the Display implementation for Unit
    assert_eq!(format!("{}", Unit::Sala), "sala");
    assert_eq!(format!("{}", Unit::Treino), "treino");
    assert_eq!(Unit::Sala.id(), "sala");
    assert_eq!(Unit::Treino.id(), "treino");
}

#[test]
fn test_command_option_display() {
    // The label is what dropdowns show; the value stays hidden
    let option = CommandOption::new("T 24", "24°C");
    assert_eq!(format!("{}", option), "24°C");
}

#[test]
fn test_view_from_name() {
    // Known names resolve, anything else falls through to None
    assert_eq!(View::from_name("home"), Some(View::Home));
    assert_eq!(View::from_name("training"), Some(View::Training));
    assert_eq!(View::from_name("about"), Some(View::About));
    assert_eq!(View::from_name("settings"), None);
    assert_eq!(View::from_name(""), None);
    assert_eq!(View::from_name("Home"), None); // names are case sensitive

    // name() round-trips through from_name()
    for view in [View::Home, View::Training, View::About] {
        assert_eq!(View::from_name(view.name()), Some(view));
    }
}

#[test]
fn test_state_enum() {
    // Test that the State enum has the expected variants
    let initialising = State::Initialising;
    let running = State::Running;

    assert_ne!(initialising, running);
    assert_eq!(initialising, State::Initialising);
    assert_eq!(running, State::Running);
}

#[test]
fn test_swing_tokens() {
    // Swing commands are fixed tokens, not selector driven
    assert_eq!(SWING_ON, "SW_ON");
    assert_eq!(SWING_OFF, "SW_OFF");
}

#[test]
fn test_command_url_encodes_spaces() {
    // Spaces in command tokens become %20, never '+'
    assert_eq!(
        command_url("192.168.0.50", SEND_ROUTE, Some("T 24")),
        "http://192.168.0.50/enviar?cmd=T%2024"
    );
    assert_eq!(
        command_url("192.168.0.50", TRAIN_ROUTE, Some("MOD1")),
        "http://192.168.0.50/treinar?cmd=MOD1"
    );
}

#[test]
fn test_command_url_without_parameter() {
    // The save route takes no query string
    assert_eq!(
        command_url("10.0.0.7", SAVE_ROUTE, None),
        "http://10.0.0.7/salvar"
    );
}

#[test]
fn test_command_url_keeps_address_verbatim() {
    // The address is not validated here; garbage just builds a garbage URL
    assert_eq!(
        command_url("not an address", SEND_ROUTE, Some("SW_ON")),
        "http://not an address/enviar?cmd=SW_ON"
    );
    assert_eq!(
        command_url("192.168.0.50:8080", SEND_ROUTE, Some("SW_ON")),
        "http://192.168.0.50:8080/enviar?cmd=SW_ON"
    );
}

#[test]
fn test_truncate_chars() {
    // Short strings come back whole
    assert_eq!(truncate_chars("short", 50), "short");
    assert_eq!(truncate_chars("", 50), "");

    // Long strings are cut at the limit
    let long = "x".repeat(80);
    assert_eq!(truncate_chars(&long, 50).len(), 50);

    // Exactly at the limit is untouched
    let exact = "y".repeat(50);
    assert_eq!(truncate_chars(&exact, 50), exact);

    // Multibyte content is cut between characters, not inside one
    let accented = "ãé".repeat(30);
    let cut = truncate_chars(&accented, 50);
    assert_eq!(cut.chars().count(), 50);
}

#[test]
fn test_transport_response_success_range() {
    // 2xx counts as success, everything else does not
    let ok = TransportResponse {
        status: 200,
        body: String::new(),
    };
    let created = TransportResponse {
        status: 201,
        body: String::new(),
    };
    let redirect = TransportResponse {
        status: 301,
        body: String::new(),
    };
    let missing = TransportResponse {
        status: 404,
        body: String::new(),
    };
    let broken = TransportResponse {
        status: 500,
        body: String::new(),
    };

    assert!(ok.is_success());
    assert!(created.is_success());
    assert!(!redirect.is_success());
    assert!(!missing.is_success());
    assert!(!broken.is_success());
}

#[test]
fn test_status_line_default() {
    // A fresh status line renders as nothing
    let line = StatusLine::default();
    assert_eq!(line.text, "");
    assert_eq!(line.tone, Tone::Pending);
}

#[test]
fn test_unit_panel_new() {
    // A new unit panel starts blank: no address, no status, empty selectors
    let panel = UnitPanel::new(Unit::Treino);

    assert_eq!(panel.unit, Unit::Treino);
    assert_eq!(panel.address, "");
    assert_eq!(panel.status.lock().unwrap().text, "");
    assert!(panel.temperature.options.is_empty());
    assert!(panel.mode.options.is_empty());
}
