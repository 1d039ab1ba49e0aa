//! CLI-specific configuration for the terminal UI.
use std::env;

use client_frontend_core::FrontendConfig;

/// Terminal client configuration.
///
/// Wraps the cross-frontend settings with layout options that only make
/// sense in a terminal.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub frontend: FrontendConfig,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 7)
    /// - everything read by [`FrontendConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            frontend: FrontendConfig::from_env(),
            ui: UiConfig::default(),
        };

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 7,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
