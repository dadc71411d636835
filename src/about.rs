pub fn about() -> Vec<String> {
    vec![
        "Desktop panel for an ESP32-based infrared blaster, replacing the \
        air-conditioner remotes over the local network.".to_string(),
        "\n".to_string(),
        "Commands go out as plain HTTP requests against the device's /enviar, \
        /treinar and /salvar routes.".to_string(),
        "Training mode records signals from the original remote; saving \
        writes them into the device's flash memory.".to_string(),
        "The device address entered on any view is kept in sync with the \
        other views and stored for the next session.".to_string(),
    ]
}
