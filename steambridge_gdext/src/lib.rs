// steambridge_gdext — GDExtension bridge between the Steamworks SDK and Godot.
//
// This crate is a thin wrapper that exposes the `steamworks` crate to Godot 4
// via gdext (godot-rust). It contains no Steam logic of its own — only
// translation between Godot types and SDK types.
//
// Godot calls into this crate through the `Steam` engine singleton to:
// - Initialize and shut down the SDK connection.
// - Call wrapped SDK entry points (apps, friends, lobbies, P2P, cloud files,
//   Workshop, auth, stats, leaderboards, utils, input).
// - Pump SDK callbacks once per frame via `run_callbacks()` and receive the
//   results as Godot signals.
//
// Module overview:
// - `steam.rs`:   The `Steam` Godot object — sole interface between GDScript
//                 and Rust. Owns the SDK client and the per-frame event pump.
// - `events.rs`:  Recurring-callback registration. Translates SDK callback
//                 payloads into `SteamEvent`s for the pump queue.
// - `dict.rs`:    Godot dictionary builders and SDK enum/code mappings.
//
// See also: `steambridge_core` for the engine-free event vocabulary, handle
// cache, ID helpers and result codes.

mod dict;
mod events;
mod steam;

use godot::classes::{Engine, ProjectSettings};
use godot::prelude::*;
use steambridge_core::settings::{
    BridgeSettings, SETTING_APP_ID, SETTING_EMBED_CALLBACKS, SETTING_INITIALIZE_ON_STARTUP,
};

use crate::steam::Steam;

const SINGLETON_NAME: &str = "Steam";

struct SteamBridgeExtension;

#[gdextension]
unsafe impl ExtensionLibrary for SteamBridgeExtension {
    fn on_level_init(level: InitLevel) {
        if level != InitLevel::Scene {
            return;
        }
        register_project_settings();

        let steam = Steam::new_alloc();
        let object = steam.clone().upcast::<Object>();
        Engine::singleton().register_singleton(SINGLETON_NAME, &object);

        // No SDK traffic from the editor process; tools scripts still see
        // the singleton and its API.
        if Engine::singleton().is_editor_hint() {
            return;
        }

        let settings = load_settings();
        if settings.initialize_on_startup {
            if settings.embed_conflicts_with_auto_init() {
                godot_warn!(
                    "Steam: embed_callbacks is ignored when initialize_on_startup is set; \
                     call run_callbacks() from a _process loop instead"
                );
            }
            let mut steam = steam;
            steam.bind_mut().auto_initialize(settings.app_id);
        }
    }

    fn on_level_deinit(level: InitLevel) {
        if level != InitLevel::Scene {
            return;
        }
        let mut engine = Engine::singleton();
        if let Some(singleton) = engine.get_singleton(SINGLETON_NAME) {
            engine.unregister_singleton(SINGLETON_NAME);
            singleton.free();
        }
    }
}

/// Register the three startup settings so they show up in the project
/// settings editor with sensible defaults. Existing values are left alone.
fn register_project_settings() {
    let mut ps = ProjectSettings::singleton();
    let defaults = BridgeSettings::default();
    register_setting(&mut ps, SETTING_APP_ID, &(defaults.app_id as i64).to_variant());
    register_setting(
        &mut ps,
        SETTING_INITIALIZE_ON_STARTUP,
        &defaults.initialize_on_startup.to_variant(),
    );
    register_setting(
        &mut ps,
        SETTING_EMBED_CALLBACKS,
        &defaults.embed_callbacks.to_variant(),
    );
}

fn register_setting(ps: &mut Gd<ProjectSettings>, path: &str, default: &Variant) {
    if !ps.has_setting(path) {
        ps.set_setting(path, default);
    }
    ps.set_initial_value(path, default);
}

/// Read the startup settings once. Missing or mistyped values fall back to
/// the registered defaults.
fn load_settings() -> BridgeSettings {
    let ps = ProjectSettings::singleton();
    let defaults = BridgeSettings::default();
    BridgeSettings {
        app_id: ps
            .get_setting(SETTING_APP_ID)
            .try_to::<i64>()
            .map_or(defaults.app_id, |v| v as u32),
        initialize_on_startup: ps
            .get_setting(SETTING_INITIALIZE_ON_STARTUP)
            .try_to::<bool>()
            .unwrap_or(defaults.initialize_on_startup),
        embed_callbacks: ps
            .get_setting(SETTING_EMBED_CALLBACKS)
            .try_to::<bool>()
            .unwrap_or(defaults.embed_callbacks),
    }
}
