//! reads the shell config embedded in the host page

use shared::ShellConfig;
use tracing::{debug, warn};

/// id of the `<script type="application/json">` element carrying the config
pub const CONFIG_ELEMENT_ID: &str = "shell-config";

/// config from the host page, or defaults when absent or malformed
pub fn load_config() -> ShellConfig {
    let Some(json) = embedded_config() else {
        debug!("no embedded shell config, using defaults");
        return ShellConfig::default();
    };

    ShellConfig::from_json(&json).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring embedded shell config");
        ShellConfig::default()
    })
}

fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
