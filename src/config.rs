use serde::{Deserialize, Serialize};

// Name of the settings file under the user's config directory.
pub const CONFIG_FILE_NAME: &str = "ir_panel.json";

// Configuration data saved to JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    // Last device address the user typed; restored into both address
    // fields at startup.
    #[serde(default)] // Ensure field exists even if missing in JSON
    pub device_address: String,
}

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            device_address: String::new(), // No address until the user enters one
        }
    }
}
