// steambridge_core — engine-free translation logic for the Steam bridge.
//
// This crate holds everything the GDExtension facade needs that does not
// touch Godot or the Steamworks runtime: the vocabulary of asynchronous
// Steam notifications, the per-frame event queue they flow through, Steam
// ID bit-field helpers, the last-used handle cache, the SDK's numeric
// result codes, and the startup settings. Keeping these here means the
// marshaling behavior is unit-testable without an engine or a running
// Steam client.
//
// Module overview:
// - `event.rs`:       `SteamEvent` — one variant per asynchronous Steam
//                     notification the bridge forwards — plus the
//                     `EventQueue`/`EventSink` pair drained once per frame.
// - `ids.rs`:         Steam ID bit-field accessors and account-type
//                     predicates (pure bit manipulation on the 64-bit id).
// - `handles.rs`:     `HandleCache` — "explicit handle or last one used"
//                     resolution for methods with optional handle args.
// - `codes.rs`:       Numeric constants for the SDK enums the bridge
//                     passes through (EResult, init status, auth results).
// - `settings.rs`:    The three startup settings and their project-setting
//                     paths.
//
// See also: `steambridge_gdext` for the `Steam` singleton class that
// drives all of this from the engine side.

pub mod codes;
pub mod event;
pub mod handles;
pub mod ids;
pub mod settings;
