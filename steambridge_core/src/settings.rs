// Startup settings.
//
// Three values, read once at extension load from the host's project
// settings. The paths and defaults here are the single source of truth —
// the gdext crate registers and reads exactly these.

use serde::{Deserialize, Serialize};

/// Project-setting path for the numeric application id.
pub const SETTING_APP_ID: &str = "steam/initialization/app_id";
/// Project-setting path for the auto-initialize flag.
pub const SETTING_INITIALIZE_ON_STARTUP: &str = "steam/initialization/initialize_on_startup";
/// Project-setting path for the embed-callbacks flag.
pub const SETTING_EMBED_CALLBACKS: &str = "steam/initialization/embed_callbacks";

/// The three startup settings, with the registered defaults.
///
/// `app_id == 0` is valid and means "let the SDK discover the app id"
/// (from `steam_appid.txt` or the launching client), mirroring the
/// wrapped SDK's own default-argument behavior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgeSettings {
    pub app_id: u32,
    pub initialize_on_startup: bool,
    pub embed_callbacks: bool,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            app_id: 0,
            initialize_on_startup: false,
            embed_callbacks: false,
        }
    }
}

impl BridgeSettings {
    /// Auto-init and embed-callbacks cannot currently be combined: the
    /// scene tree is not available early enough to attach the pump during
    /// auto-initialization. When both are set, embed is ignored and the
    /// caller should warn.
    pub fn embed_conflicts_with_auto_init(&self) -> bool {
        self.initialize_on_startup && self.embed_callbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_registered_project_settings() {
        let s = BridgeSettings::default();
        assert_eq!(s.app_id, 0);
        assert!(!s.initialize_on_startup);
        assert!(!s.embed_callbacks);
    }

    #[test]
    fn embed_conflict_only_when_both_set() {
        let mut s = BridgeSettings::default();
        assert!(!s.embed_conflicts_with_auto_init());
        s.embed_callbacks = true;
        assert!(!s.embed_conflicts_with_auto_init());
        s.initialize_on_startup = true;
        assert!(s.embed_conflicts_with_auto_init());
    }

    #[test]
    fn setting_paths_are_stable() {
        // These strings are persisted in user project files; changing them
        // silently breaks existing projects.
        assert_eq!(SETTING_APP_ID, "steam/initialization/app_id");
        assert_eq!(
            SETTING_INITIALIZE_ON_STARTUP,
            "steam/initialization/initialize_on_startup"
        );
        assert_eq!(SETTING_EMBED_CALLBACKS, "steam/initialization/embed_callbacks");
    }
}
