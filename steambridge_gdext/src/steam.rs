// The `Steam` engine singleton — sole interface between GDScript and the
// Steamworks SDK.
//
// Three kinds of members:
// - `#[func]` methods, one per wrapped SDK entry point, grouped by SDK
//   interface. Each translates Godot arguments, performs exactly one SDK
//   call, and translates the return value back. When the SDK is not
//   initialized they warn once per call and return an inert default.
// - `#[signal]` declarations, one per asynchronous SDK notification. All
//   signal emission happens inside `run_callbacks()`, the per-frame pump.
// - `#[constant]` exports of the numeric SDK codes scripts compare against.
//
// Asynchronous flow: SDK closures (registered in `events.rs`, or attached
// per call below) push `SteamEvent`s into the queue; `run_callbacks()`
// first drives the SDK pump (which invokes those closures synchronously on
// this thread), then drains the queue and emits one signal per event.
//
// Leaderboard and auth-ticket values returned by the `steamworks` crate are
// opaque, so scripts see small 1-based slot handles instead; the slots and
// the "0 means most recent" fallback live in `HandleCache`.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use godot::classes::{Engine, SceneTree};
use godot::prelude::*;
use steambridge_core::codes;
use steambridge_core::event::{EventQueue, EventSink, SteamEvent};
use steambridge_core::handles::HandleCache;
use steambridge_core::ids;
use steamworks::networking_types::NetworkingIdentity;
use steamworks::{
    AppIDs, AppId, AuthTicket, CallbackHandle, Client, ClientManager, Leaderboard, LobbyId,
    PublishedFileId, SingleClient, SteamId, UpdateHandle, UpdateWatchHandle,
};

// `dict` here also resolves the deprecated `godot::prelude::dict!` macro
// through the prelude glob in lib.rs; only the module is wanted.
#[allow(deprecated)]
use crate::{dict, events};

/// Godot object registered as the "Steam" engine singleton.
///
/// Call `steam_init()` (or enable the auto-init project setting), then
/// either call `run_callbacks()` from a `_process` loop or initialize with
/// `embed_callbacks` enabled. Asynchronous results arrive as signals.
#[derive(GodotClass)]
#[class(base=Object)]
pub struct Steam {
    base: Base<Object>,
    client: Option<Client>,
    // The thread-bound half of the SDK connection; `run_callbacks` lives
    // on it, and it stays on the engine thread with this object.
    single: Option<SingleClient>,
    callbacks: Vec<CallbackHandle>,
    queue: EventQueue,
    sink: EventSink,
    handles: HandleCache,
    // Slot storage behind the script-facing handles. Shared with call-result
    // closures, which run inside the pump on this same thread.
    leaderboards: Arc<Mutex<Vec<Leaderboard>>>,
    tickets: Vec<Option<AuthTicket>>,
    pending_update: Option<UpdateHandle<ClientManager>>,
    update_watches: Vec<UpdateWatchHandle<ClientManager>>,
    init_status: i64,
    init_verbal: String,
    pump_embedded: bool,
    verbose: bool,
}

#[godot_api]
impl IObject for Steam {
    fn init(base: Base<Object>) -> Self {
        let (queue, sink) = EventQueue::new();
        Self {
            base,
            client: None,
            single: None,
            callbacks: Vec::new(),
            queue,
            sink,
            handles: HandleCache::new(),
            leaderboards: Arc::new(Mutex::new(Vec::new())),
            tickets: Vec::new(),
            pending_update: None,
            update_watches: Vec::new(),
            init_status: codes::INIT_RESULT_FAILED_GENERIC,
            init_verbal: "SDK not initialized".to_string(),
            pump_embedded: false,
            verbose: false,
        }
    }
}

// Internal plumbing, not exposed to scripts.
impl Steam {
    /// Initialize the SDK during extension startup, driven by the project
    /// settings. Called from `lib.rs` only.
    pub fn auto_initialize(&mut self, app_id: u32) {
        godot_print!("Steam: initializing SDK at startup");
        self.initialize(app_id, false);
    }

    fn initialize(&mut self, app_id: u32, embed_callbacks: bool) -> (i64, String) {
        if self.client.is_some() {
            return (codes::INIT_RESULT_OK, "SDK already initialized".to_string());
        }
        // App id 0 defers discovery to the SDK (steam_appid.txt or the
        // launching client), like the wrapped API's own default argument.
        let result = if app_id == 0 {
            Client::init()
        } else {
            Client::init_app(AppId(app_id))
        };
        match result {
            Ok((client, single)) => {
                self.handles
                    .set_current_steam_id(client.user().steam_id().raw());
                self.handles.set_current_app_id(client.utils().app_id().0);
                self.callbacks = events::register_all(&client, &self.sink);
                self.client = Some(client);
                self.single = Some(single);
                if embed_callbacks {
                    self.embed_pump();
                }
                self.init_status = codes::INIT_RESULT_OK;
                self.init_verbal = "Steamworks active".to_string();
                godot_print!(
                    "Steam: SDK initialized (app id {}, steam id {})",
                    self.handles.current_app_id(),
                    self.handles.current_steam_id()
                );
                (self.init_status, self.init_verbal.clone())
            }
            Err(err) => {
                let (status, verbal) = dict::init_error_parts(&err);
                self.init_status = status;
                self.init_verbal = verbal.clone();
                godot_error!("Steam: SDK initialization failed: {verbal}");
                (status, verbal)
            }
        }
    }

    /// Connect the pump to the scene tree so scripts need no `_process`
    /// loop of their own.
    fn embed_pump(&mut self) {
        if self.pump_embedded {
            return;
        }
        let Some(main_loop) = Engine::singleton().get_main_loop() else {
            godot_warn!("Steam: no main loop yet; cannot embed the callback pump");
            return;
        };
        let Ok(mut tree) = main_loop.try_cast::<SceneTree>() else {
            godot_warn!("Steam: main loop is not a SceneTree; cannot embed the callback pump");
            return;
        };
        let callable = Callable::from_object_method(&self.to_gd(), "run_callbacks");
        tree.connect("process_frame", &callable);
        self.pump_embedded = true;
        godot_print!("Steam: callback pump embedded in the scene tree");
    }

    /// The SDK client, cloned (it is reference counted). Warns when the
    /// facade is not initialized so silent no-ops are diagnosable.
    fn client(&self) -> Option<Client> {
        if self.client.is_none() {
            godot_warn!("Steam: SDK not initialized; call steam_init first");
        }
        self.client.clone()
    }

    /// Resolve a script-facing leaderboard handle (0 = most recent) to the
    /// SDK value behind it.
    fn resolve_leaderboard(&self, explicit: i64) -> Option<Leaderboard> {
        let handle = self.handles.resolve_leaderboard(explicit as u64)?;
        let boards = self.leaderboards.lock().ok()?;
        boards.get(handle as usize - 1).cloned()
    }

    fn emit_event(&mut self, event: SteamEvent) {
        match event {
            SteamEvent::OverlayToggled { active } => {
                self.signals().overlay_toggled().emit(active);
            }
            SteamEvent::PersonaStateChange { steam_id, flags } => {
                self.signals()
                    .persona_state_change()
                    .emit(steam_id as i64, flags);
            }
            SteamEvent::JoinRequested {
                lobby_id,
                friend_id,
            } => {
                self.signals()
                    .join_requested()
                    .emit(lobby_id as i64, friend_id as i64);
            }
            SteamEvent::LobbyDataUpdate {
                lobby_id,
                member_id,
                success,
            } => {
                self.signals()
                    .lobby_data_update()
                    .emit(lobby_id as i64, member_id as i64, success);
            }
            SteamEvent::LobbyChatUpdate {
                lobby_id,
                changed_id,
                making_change_id,
                chat_state,
            } => {
                self.signals().lobby_chat_update().emit(
                    lobby_id as i64,
                    changed_id as i64,
                    making_change_id as i64,
                    chat_state,
                );
            }
            SteamEvent::LobbyCreated { result, lobby_id } => {
                self.signals().lobby_created().emit(result, lobby_id as i64);
            }
            SteamEvent::LobbyJoined { lobby_id, response } => {
                self.signals().lobby_joined().emit(lobby_id as i64, response);
            }
            SteamEvent::LobbyMatchList { lobbies } => {
                let list: PackedInt64Array = lobbies.iter().map(|id| *id as i64).collect();
                self.signals().lobby_match_list().emit(&list);
            }
            SteamEvent::P2PSessionRequest { remote_id } => {
                self.signals().p2p_session_request().emit(remote_id as i64);
            }
            SteamEvent::P2PSessionConnectFail {
                remote_id,
                session_error,
            } => {
                self.signals()
                    .p2p_session_connect_fail()
                    .emit(remote_id as i64, session_error);
            }
            SteamEvent::SteamServerConnected => {
                self.signals().steam_server_connected().emit();
            }
            SteamEvent::SteamServerDisconnected { reason } => {
                self.signals().steam_server_disconnected().emit(reason);
            }
            SteamEvent::SteamServerConnectFailed { reason, retrying } => {
                self.signals()
                    .steam_server_connect_failed()
                    .emit(reason, retrying);
            }
            SteamEvent::GetAuthSessionTicketResponse { result } => {
                self.signals().get_auth_session_ticket_response().emit(result);
            }
            SteamEvent::ValidateAuthTicketResponse {
                auth_id,
                response,
                owner_id,
            } => {
                self.signals().validate_auth_ticket_response().emit(
                    auth_id as i64,
                    response,
                    owner_id as i64,
                );
            }
            SteamEvent::UserStatsReceived {
                game_id,
                user_id,
                result,
            } => {
                self.signals()
                    .user_stats_received()
                    .emit(game_id as i64, user_id as i64, result);
            }
            SteamEvent::UserStatsStored { game_id, result } => {
                self.signals().user_stats_stored().emit(game_id as i64, result);
            }
            SteamEvent::UserAchievementStored {
                game_id,
                achievement_name,
                current_progress,
                max_progress,
            } => {
                self.signals().user_achievement_stored().emit(
                    game_id as i64,
                    achievement_name.as_str(),
                    current_progress as i64,
                    max_progress as i64,
                );
            }
            SteamEvent::LeaderboardFindResult { handle, found } => {
                if found {
                    self.handles.set_leaderboard(handle);
                }
                self.signals()
                    .leaderboard_find_result()
                    .emit(handle as i64, found);
            }
            SteamEvent::LeaderboardScoreUploaded {
                success,
                handle,
                score,
                score_changed,
                global_rank_new,
                global_rank_previous,
            } => {
                self.signals().leaderboard_score_uploaded().emit(
                    success,
                    handle as i64,
                    score as i64,
                    score_changed,
                    global_rank_new as i64,
                    global_rank_previous as i64,
                );
            }
            SteamEvent::LeaderboardScoresDownloaded { handle, entries } => {
                let rows: VarArray = entries
                    .iter()
                    .map(|e| dict::leaderboard_entry_to_dict(e).to_variant())
                    .collect();
                self.signals()
                    .leaderboard_scores_downloaded()
                    .emit(handle as i64, &rows);
            }
            SteamEvent::ItemDownloaded {
                app_id,
                published_file_id,
                result,
            } => {
                self.signals().item_downloaded().emit(
                    app_id as i64,
                    published_file_id as i64,
                    result,
                );
            }
            SteamEvent::ItemCreated {
                result,
                published_file_id,
                needs_legal_agreement,
            } => {
                self.signals().item_created().emit(
                    result,
                    published_file_id as i64,
                    needs_legal_agreement,
                );
            }
            SteamEvent::ItemUpdated {
                result,
                needs_legal_agreement,
            } => {
                self.signals().item_updated().emit(result, needs_legal_agreement);
            }
            SteamEvent::ItemSubscribed {
                result,
                published_file_id,
            } => {
                self.signals()
                    .item_subscribed()
                    .emit(result, published_file_id as i64);
            }
            SteamEvent::ItemUnsubscribed {
                result,
                published_file_id,
            } => {
                self.signals()
                    .item_unsubscribed()
                    .emit(result, published_file_id as i64);
            }
            SteamEvent::UgcQueryCompleted { total, results } => {
                let rows: VarArray = results
                    .iter()
                    .map(|item| dict::workshop_item_to_dict(item).to_variant())
                    .collect();
                self.signals()
                    .ugc_query_completed()
                    .emit(total as i64, &rows);
            }
            SteamEvent::FloatingGamepadTextInputDismissed => {
                self.signals().floating_gamepad_text_input_dismissed().emit();
            }
        }
    }
}

#[godot_api]
impl Steam {
    // ------------------------------------------------------------------
    // Signals, one per asynchronous SDK notification.
    // ------------------------------------------------------------------

    #[signal]
    fn overlay_toggled(active: bool);
    #[signal]
    fn persona_state_change(steam_id: i64, flags: i64);
    #[signal]
    fn join_requested(lobby_id: i64, friend_id: i64);
    #[signal]
    fn lobby_data_update(lobby_id: i64, member_id: i64, success: bool);
    #[signal]
    fn lobby_chat_update(lobby_id: i64, changed_id: i64, making_change_id: i64, chat_state: i64);
    #[signal]
    fn lobby_created(result: i64, lobby_id: i64);
    #[signal]
    fn lobby_joined(lobby_id: i64, response: i64);
    #[signal]
    fn lobby_match_list(lobbies: PackedInt64Array);
    #[signal]
    fn p2p_session_request(remote_id: i64);
    #[signal]
    fn p2p_session_connect_fail(remote_id: i64, session_error: i64);
    #[signal]
    fn steam_server_connected();
    #[signal]
    fn steam_server_disconnected(reason: i64);
    #[signal]
    fn steam_server_connect_failed(reason: i64, retrying: bool);
    #[signal]
    fn get_auth_session_ticket_response(result: i64);
    #[signal]
    fn validate_auth_ticket_response(auth_id: i64, response: i64, owner_id: i64);
    #[signal]
    fn user_stats_received(game_id: i64, user_id: i64, result: i64);
    #[signal]
    fn user_stats_stored(game_id: i64, result: i64);
    #[signal]
    fn user_achievement_stored(
        game_id: i64,
        achievement_name: GString,
        current_progress: i64,
        max_progress: i64,
    );
    #[signal]
    fn leaderboard_find_result(handle: i64, found: bool);
    #[signal]
    fn leaderboard_score_uploaded(
        success: bool,
        handle: i64,
        score: i64,
        score_changed: bool,
        global_rank_new: i64,
        global_rank_previous: i64,
    );
    #[signal]
    fn leaderboard_scores_downloaded(handle: i64, entries: VarArray);
    #[signal]
    fn item_downloaded(app_id: i64, published_file_id: i64, result: i64);
    #[signal]
    fn item_created(result: i64, published_file_id: i64, needs_legal_agreement: bool);
    #[signal]
    fn item_updated(result: i64, needs_legal_agreement: bool);
    #[signal]
    fn item_subscribed(result: i64, published_file_id: i64);
    #[signal]
    fn item_unsubscribed(result: i64, published_file_id: i64);
    #[signal]
    fn ugc_query_completed(total: i64, results: VarArray);
    #[signal]
    fn floating_gamepad_text_input_dismissed();

    // ------------------------------------------------------------------
    // Constants scripts compare signal payloads against.
    // ------------------------------------------------------------------

    #[constant]
    const RESULT_OK: i64 = codes::RESULT_OK;
    #[constant]
    const RESULT_FAIL: i64 = codes::RESULT_FAIL;
    #[constant]
    const RESULT_NO_CONNECTION: i64 = codes::RESULT_NO_CONNECTION;
    #[constant]
    const RESULT_ACCESS_DENIED: i64 = codes::RESULT_ACCESS_DENIED;
    #[constant]
    const RESULT_TIMEOUT: i64 = codes::RESULT_TIMEOUT;
    #[constant]
    const RESULT_LIMIT_EXCEEDED: i64 = codes::RESULT_LIMIT_EXCEEDED;
    #[constant]
    const INIT_RESULT_OK: i64 = codes::INIT_RESULT_OK;
    #[constant]
    const INIT_RESULT_FAILED_GENERIC: i64 = codes::INIT_RESULT_FAILED_GENERIC;
    #[constant]
    const INIT_RESULT_NO_STEAM_CLIENT: i64 = codes::INIT_RESULT_NO_STEAM_CLIENT;
    #[constant]
    const INIT_RESULT_VERSION_MISMATCH: i64 = codes::INIT_RESULT_VERSION_MISMATCH;
    #[constant]
    const CHAT_ROOM_ENTER_RESPONSE_SUCCESS: i64 = codes::CHAT_ROOM_ENTER_RESPONSE_SUCCESS;
    #[constant]
    const CHAT_ROOM_ENTER_RESPONSE_ERROR: i64 = codes::CHAT_ROOM_ENTER_RESPONSE_ERROR;
    #[constant]
    const CHAT_MEMBER_STATE_CHANGE_ENTERED: i64 = codes::CHAT_MEMBER_STATE_CHANGE_ENTERED;
    #[constant]
    const CHAT_MEMBER_STATE_CHANGE_LEFT: i64 = codes::CHAT_MEMBER_STATE_CHANGE_LEFT;
    #[constant]
    const CHAT_MEMBER_STATE_CHANGE_DISCONNECTED: i64 = codes::CHAT_MEMBER_STATE_CHANGE_DISCONNECTED;
    #[constant]
    const CHAT_MEMBER_STATE_CHANGE_KICKED: i64 = codes::CHAT_MEMBER_STATE_CHANGE_KICKED;
    #[constant]
    const CHAT_MEMBER_STATE_CHANGE_BANNED: i64 = codes::CHAT_MEMBER_STATE_CHANGE_BANNED;
    #[constant]
    const BEGIN_AUTH_SESSION_RESULT_OK: i64 = codes::BEGIN_AUTH_SESSION_RESULT_OK;
    #[constant]
    const AUTH_SESSION_RESPONSE_OK: i64 = codes::AUTH_SESSION_RESPONSE_OK;
    #[constant]
    const PERSONA_STATE_OFFLINE: i64 = codes::PERSONA_STATE_OFFLINE;
    #[constant]
    const PERSONA_STATE_ONLINE: i64 = codes::PERSONA_STATE_ONLINE;
    #[constant]
    const LOBBY_TYPE_PRIVATE: i64 = codes::LOBBY_TYPE_PRIVATE;
    #[constant]
    const LOBBY_TYPE_FRIENDS_ONLY: i64 = codes::LOBBY_TYPE_FRIENDS_ONLY;
    #[constant]
    const LOBBY_TYPE_PUBLIC: i64 = codes::LOBBY_TYPE_PUBLIC;
    #[constant]
    const LOBBY_TYPE_INVISIBLE: i64 = codes::LOBBY_TYPE_INVISIBLE;
    #[constant]
    const P2P_SEND_UNRELIABLE: i64 = codes::P2P_SEND_UNRELIABLE;
    #[constant]
    const P2P_SEND_UNRELIABLE_NO_DELAY: i64 = codes::P2P_SEND_UNRELIABLE_NO_DELAY;
    #[constant]
    const P2P_SEND_RELIABLE: i64 = codes::P2P_SEND_RELIABLE;
    #[constant]
    const P2P_SEND_RELIABLE_WITH_BUFFERING: i64 = codes::P2P_SEND_RELIABLE_WITH_BUFFERING;
    #[constant]
    const LEADERBOARD_SORT_METHOD_ASCENDING: i64 = codes::LEADERBOARD_SORT_METHOD_ASCENDING;
    #[constant]
    const LEADERBOARD_SORT_METHOD_DESCENDING: i64 = codes::LEADERBOARD_SORT_METHOD_DESCENDING;
    #[constant]
    const LEADERBOARD_DISPLAY_TYPE_NUMERIC: i64 = codes::LEADERBOARD_DISPLAY_TYPE_NUMERIC;
    #[constant]
    const LEADERBOARD_DISPLAY_TYPE_TIME_SECONDS: i64 = codes::LEADERBOARD_DISPLAY_TYPE_TIME_SECONDS;
    #[constant]
    const LEADERBOARD_DISPLAY_TYPE_TIME_MILLISECONDS: i64 =
        codes::LEADERBOARD_DISPLAY_TYPE_TIME_MILLISECONDS;
    #[constant]
    const LEADERBOARD_DATA_REQUEST_GLOBAL: i64 = codes::LEADERBOARD_DATA_REQUEST_GLOBAL;
    #[constant]
    const LEADERBOARD_DATA_REQUEST_GLOBAL_AROUND_USER: i64 =
        codes::LEADERBOARD_DATA_REQUEST_GLOBAL_AROUND_USER;
    #[constant]
    const LEADERBOARD_DATA_REQUEST_FRIENDS: i64 = codes::LEADERBOARD_DATA_REQUEST_FRIENDS;
    #[constant]
    const ITEM_STATE_NONE: i64 = codes::ITEM_STATE_NONE;
    #[constant]
    const ITEM_STATE_SUBSCRIBED: i64 = codes::ITEM_STATE_SUBSCRIBED;
    #[constant]
    const ITEM_STATE_INSTALLED: i64 = codes::ITEM_STATE_INSTALLED;
    #[constant]
    const ITEM_STATE_NEEDS_UPDATE: i64 = codes::ITEM_STATE_NEEDS_UPDATE;
    #[constant]
    const ITEM_STATE_DOWNLOADING: i64 = codes::ITEM_STATE_DOWNLOADING;
    #[constant]
    const ITEM_STATE_DOWNLOAD_PENDING: i64 = codes::ITEM_STATE_DOWNLOAD_PENDING;
    #[constant]
    const PUBLISHED_FILE_VISIBILITY_PUBLIC: i64 = codes::PUBLISHED_FILE_VISIBILITY_PUBLIC;
    #[constant]
    const PUBLISHED_FILE_VISIBILITY_FRIENDS_ONLY: i64 =
        codes::PUBLISHED_FILE_VISIBILITY_FRIENDS_ONLY;
    #[constant]
    const PUBLISHED_FILE_VISIBILITY_PRIVATE: i64 = codes::PUBLISHED_FILE_VISIBILITY_PRIVATE;
    #[constant]
    const PUBLISHED_FILE_VISIBILITY_UNLISTED: i64 = codes::PUBLISHED_FILE_VISIBILITY_UNLISTED;
    #[constant]
    const AVATAR_SMALL: i64 = 1;
    #[constant]
    const AVATAR_MEDIUM: i64 = 2;
    #[constant]
    const AVATAR_LARGE: i64 = 3;

    // ------------------------------------------------------------------
    // Main / lifecycle
    // ------------------------------------------------------------------

    /// Version of this bridge library.
    #[func]
    fn get_bridge_version(&self) -> GString {
        GString::from(env!("CARGO_PKG_VERSION"))
    }

    /// Initialize the SDK. Returns true on success; see `steam_init_ex`
    /// for the detailed status.
    #[func]
    fn steam_init(&mut self, app_id: u32, embed_callbacks: bool) -> bool {
        let (status, _) = self.initialize(app_id, embed_callbacks);
        status == codes::INIT_RESULT_OK
    }

    /// Initialize the SDK and return a dictionary with "status" (one of
    /// the INIT_RESULT constants) and "verbal" (human-readable message).
    #[func]
    fn steam_init_ex(&mut self, app_id: u32, embed_callbacks: bool) -> VarDictionary {
        let (status, verbal) = self.initialize(app_id, embed_callbacks);
        let mut dict = VarDictionary::new();
        dict.set("status", status);
        dict.set("verbal", verbal);
        dict
    }

    /// The status dictionary from the most recent initialization attempt.
    #[func]
    fn get_steam_init_result(&self) -> VarDictionary {
        let mut dict = VarDictionary::new();
        dict.set("status", self.init_status);
        dict.set("verbal", self.init_verbal.as_str());
        dict
    }

    /// Drop the SDK connection. Callback registrations, cached handles and
    /// outstanding tickets are released.
    #[func]
    fn steam_shutdown(&mut self) {
        self.callbacks.clear();
        self.update_watches.clear();
        self.pending_update = None;
        self.tickets.clear();
        if let Ok(mut boards) = self.leaderboards.lock() {
            boards.clear();
        }
        self.handles = HandleCache::new();
        self.client = None;
        self.single = None;
        self.init_status = codes::INIT_RESULT_FAILED_GENERIC;
        self.init_verbal = "SDK not initialized".to_string();
        godot_print!("Steam: SDK shut down");
    }

    #[func]
    fn is_steam_running(&self) -> bool {
        self.client.is_some()
    }

    /// Ask the Steam client to relaunch the game under the given app id if
    /// it was not started through Steam. True means "quit now, a relaunch
    /// is coming".
    #[func]
    fn restart_app_if_necessary(&self, app_id: u32) -> bool {
        steamworks::restart_app_if_necessary(AppId(app_id))
    }

    /// Drive the SDK callback pump and emit one signal per pending event,
    /// oldest first. Call once per frame (or initialize with
    /// `embed_callbacks` and forget about it).
    #[func]
    fn run_callbacks(&mut self) {
        let Some(single) = &self.single else {
            return;
        };
        single.run_callbacks();
        for event in self.queue.drain() {
            if self.verbose {
                if let Ok(json) = event.to_json() {
                    godot_print!("Steam event: {json}");
                }
            }
            self.emit_event(event);
        }
    }

    /// Log every pumped event as JSON. Off by default.
    #[func]
    fn set_verbose_logging(&mut self, enabled: bool) {
        self.verbose = enabled;
    }

    #[func]
    fn get_current_steam_id(&self) -> i64 {
        self.handles.current_steam_id() as i64
    }

    #[func]
    fn set_current_steam_id(&mut self, steam_id: i64) {
        self.handles.set_current_steam_id(steam_id as u64);
    }

    #[func]
    fn get_current_app_id(&self) -> u32 {
        self.handles.current_app_id()
    }

    #[func]
    fn set_current_app_id(&mut self, app_id: u32) {
        self.handles.set_current_app_id(app_id);
    }

    /// Slot handle of the most recently found leaderboard (0 when none).
    #[func]
    fn get_leaderboard_handle(&self) -> i64 {
        self.handles.leaderboard() as i64
    }

    #[func]
    fn set_leaderboard_handle(&mut self, handle: i64) {
        self.handles.set_leaderboard(handle as u64);
    }

    /// How many detail ints `download_leaderboard_entries` requests per
    /// row (0 by default; clamped to the SDK maximum of 64).
    #[func]
    fn get_leaderboard_details_max(&self) -> i64 {
        self.handles.leaderboard_details_max()
    }

    #[func]
    fn set_leaderboard_details_max(&mut self, count: i64) {
        self.handles.set_leaderboard_details_max(count);
    }

    // Steam ID bit-field helpers; pure functions, no SDK needed.

    #[func]
    fn get_steam_id_32(&self, steam_id: i64) -> i64 {
        ids::steam_id_32(steam_id as u64) as i64
    }

    #[func]
    fn is_anon_account(&self, steam_id: i64) -> bool {
        ids::is_anon_account(steam_id as u64)
    }

    #[func]
    fn is_anon_user_account(&self, steam_id: i64) -> bool {
        ids::is_anon_user_account(steam_id as u64)
    }

    #[func]
    fn is_chat_account(&self, steam_id: i64) -> bool {
        ids::is_chat_account(steam_id as u64)
    }

    #[func]
    fn is_clan_account(&self, steam_id: i64) -> bool {
        ids::is_clan_account(steam_id as u64)
    }

    #[func]
    fn is_console_user_account(&self, steam_id: i64) -> bool {
        ids::is_console_user_account(steam_id as u64)
    }

    #[func]
    fn is_individual_account(&self, steam_id: i64) -> bool {
        ids::is_individual_account(steam_id as u64)
    }

    #[func]
    fn is_lobby(&self, steam_id: i64) -> bool {
        ids::is_lobby(steam_id as u64)
    }

    // ------------------------------------------------------------------
    // Apps
    // ------------------------------------------------------------------

    #[func]
    fn get_app_build_id(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.apps().app_build_id() as i64
    }

    #[func]
    fn get_app_install_dir(&self, app_id: u32) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        GString::from(client.apps().app_install_dir(AppId(app_id)).as_str())
    }

    #[func]
    fn get_app_owner(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.apps().app_owner().raw() as i64
    }

    #[func]
    fn get_available_game_languages(&self) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        GString::from(client.apps().available_game_languages().join(",").as_str())
    }

    /// Name of the opted-in beta branch, or empty when on the default
    /// branch.
    #[func]
    fn get_current_beta_name(&self) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        match client.apps().current_beta_name() {
            Some(name) => GString::from(name.as_str()),
            None => GString::new(),
        }
    }

    #[func]
    fn get_current_game_language(&self) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        GString::from(client.apps().current_game_language().as_str())
    }

    #[func]
    fn is_app_installed(&self, app_id: u32) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_app_installed(AppId(app_id))
    }

    #[func]
    fn is_cybercafe(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_cybercafe()
    }

    #[func]
    fn is_dlc_installed(&self, app_id: u32) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_dlc_installed(AppId(app_id))
    }

    #[func]
    fn is_low_violence(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_low_violence()
    }

    #[func]
    fn is_subscribed(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_subscribed()
    }

    #[func]
    fn is_subscribed_app(&self, app_id: u32) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_subscribed_app(AppId(app_id))
    }

    #[func]
    fn is_subscribed_from_free_weekend(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_subscribed_from_free_weekend()
    }

    #[func]
    fn is_vac_banned(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.apps().is_vac_banned()
    }

    // ------------------------------------------------------------------
    // Friends
    // ------------------------------------------------------------------

    /// The local user's persona name.
    #[func]
    fn get_persona_name(&self) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        GString::from(client.friends().name().as_str())
    }

    #[func]
    fn get_friend_persona_name(&self, steam_id: i64) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        let friend = client.friends().get_friend(SteamId::from_raw(steam_id as u64));
        GString::from(friend.name().as_str())
    }

    /// Friend info dictionary: "id", "name", "state" and, when in game,
    /// a nested "game" dictionary.
    #[func]
    fn get_friend_info(&self, steam_id: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let friend = client.friends().get_friend(SteamId::from_raw(steam_id as u64));
        dict::friend_to_dict(&friend)
    }

    /// Friends matching the EFriendFlags bit field, one info dictionary
    /// per friend.
    #[func]
    fn get_friends(&self, flags: i64) -> VarArray {
        let Some(client) = self.client() else {
            return VarArray::new();
        };
        client
            .friends()
            .get_friends(dict::friend_flags_from(flags))
            .iter()
            .map(|friend| dict::friend_to_dict(friend).to_variant())
            .collect()
    }

    /// Regular friend list (the "immediate" flag).
    #[func]
    fn get_user_steam_friends(&self) -> VarArray {
        self.get_friends(i64::from(steamworks::FriendFlags::IMMEDIATE.bits()))
    }

    /// Avatar dictionary with "width", "height" and RGBA "data". Size is
    /// one of the AVATAR_* constants. Empty when not yet cached by the
    /// Steam client.
    #[func]
    fn get_player_avatar(&self, size: i64, steam_id: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let friend = client.friends().get_friend(SteamId::from_raw(steam_id as u64));
        let (avatar, dim) = match size {
            Self::AVATAR_SMALL => (friend.small_avatar(), 32i64),
            Self::AVATAR_LARGE => (friend.large_avatar(), 184),
            _ => (friend.medium_avatar(), 64),
        };
        match avatar {
            Some(data) => {
                let mut dict = VarDictionary::new();
                dict.set("width", dim);
                dict.set("height", dim);
                dict.set("data", PackedByteArray::from(data.as_slice()));
                dict
            }
            None => VarDictionary::new(),
        }
    }

    /// Open the overlay on one of its named dialogs ("friends",
    /// "community", "players", "settings", "officialgamegroup", "stats",
    /// "achievements").
    #[func]
    fn activate_game_overlay(&self, dialog: GString) {
        let Some(client) = self.client() else {
            return;
        };
        client.friends().activate_game_overlay(&dialog.to_string());
    }

    #[func]
    fn activate_game_overlay_to_user(&self, dialog: GString, steam_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .friends()
            .activate_game_overlay_to_user(&dialog.to_string(), SteamId::from_raw(steam_id as u64));
    }

    #[func]
    fn activate_game_overlay_to_web_page(&self, url: GString) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .friends()
            .activate_game_overlay_to_web_page(&url.to_string());
    }

    #[func]
    fn activate_game_overlay_to_store(&self, app_id: u32, store_flag: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .friends()
            .activate_game_overlay_to_store(AppId(app_id), dict::overlay_store_flag_from(store_flag));
    }

    #[func]
    fn activate_game_overlay_invite_dialog(&self, lobby_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .friends()
            .activate_invite_dialog(LobbyId::from_raw(lobby_id as u64));
    }

    /// Set a rich presence key. An empty value clears the key.
    #[func]
    fn set_rich_presence(&self, key: GString, value: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        let key = key.to_string();
        let value = value.to_string();
        let value = if value.is_empty() {
            None
        } else {
            Some(value.as_str())
        };
        client.friends().set_rich_presence(&key, value)
    }

    /// Ask the Steam client to cache name (and optionally avatar) data for
    /// a user. True means a `persona_state_change` signal will follow.
    #[func]
    fn request_user_information(&self, steam_id: i64, name_only: bool) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .friends()
            .request_user_information(SteamId::from_raw(steam_id as u64), name_only)
    }

    // ------------------------------------------------------------------
    // Matchmaking
    // ------------------------------------------------------------------

    /// Create a lobby; the outcome arrives on `lobby_created`.
    #[func]
    fn create_lobby(&self, lobby_type: i64, max_members: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        client.matchmaking().create_lobby(
            dict::lobby_type_from(lobby_type),
            max_members as u32,
            move |result| match result {
                Ok(lobby) => sink.push(SteamEvent::LobbyCreated {
                    result: codes::RESULT_OK,
                    lobby_id: lobby.raw(),
                }),
                Err(err) => sink.push(SteamEvent::LobbyCreated {
                    result: dict::steam_error_code(err),
                    lobby_id: 0,
                }),
            },
        );
    }

    /// Join a lobby; the outcome arrives on `lobby_joined` with an
    /// EChatRoomEnterResponse code.
    #[func]
    fn join_lobby(&self, lobby_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        client
            .matchmaking()
            .join_lobby(LobbyId::from_raw(lobby_id as u64), move |result| {
                match result {
                    Ok(lobby) => sink.push(SteamEvent::LobbyJoined {
                        lobby_id: lobby.raw(),
                        response: codes::CHAT_ROOM_ENTER_RESPONSE_SUCCESS,
                    }),
                    Err(()) => sink.push(SteamEvent::LobbyJoined {
                        lobby_id: lobby_id as u64,
                        response: codes::CHAT_ROOM_ENTER_RESPONSE_ERROR,
                    }),
                }
            });
    }

    #[func]
    fn leave_lobby(&self, lobby_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client.matchmaking().leave_lobby(LobbyId::from_raw(lobby_id as u64));
    }

    /// Request the public lobby list; results arrive on
    /// `lobby_match_list`.
    #[func]
    fn request_lobby_list(&self) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        client.matchmaking().request_lobby_list(move |result| {
            let lobbies = match result {
                Ok(lobbies) => lobbies.iter().map(|id| id.raw()).collect(),
                Err(err) => {
                    godot_warn!("Steam: lobby list request failed: {err}");
                    Vec::new()
                }
            };
            sink.push(SteamEvent::LobbyMatchList { lobbies });
        });
    }

    #[func]
    fn get_lobby_data(&self, lobby_id: i64, key: GString) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        match client
            .matchmaking()
            .lobby_data(LobbyId::from_raw(lobby_id as u64), &key.to_string())
        {
            Some(value) => GString::from(value),
            None => GString::new(),
        }
    }

    #[func]
    fn set_lobby_data(&self, lobby_id: i64, key: GString, value: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.matchmaking().set_lobby_data(
            LobbyId::from_raw(lobby_id as u64),
            &key.to_string(),
            &value.to_string(),
        )
    }

    #[func]
    fn delete_lobby_data(&self, lobby_id: i64, key: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .matchmaking()
            .delete_lobby_data(LobbyId::from_raw(lobby_id as u64), &key.to_string())
    }

    #[func]
    fn get_num_lobby_members(&self, lobby_id: i64) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .matchmaking()
            .lobby_member_count(LobbyId::from_raw(lobby_id as u64)) as i64
    }

    #[func]
    fn get_lobby_members(&self, lobby_id: i64) -> PackedInt64Array {
        let Some(client) = self.client() else {
            return PackedInt64Array::new();
        };
        client
            .matchmaking()
            .lobby_members(LobbyId::from_raw(lobby_id as u64))
            .iter()
            .map(|id| id.raw() as i64)
            .collect()
    }

    #[func]
    fn get_lobby_member_limit(&self, lobby_id: i64) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .matchmaking()
            .lobby_member_limit(LobbyId::from_raw(lobby_id as u64))
            .map_or(0, |limit| limit as i64)
    }

    #[func]
    fn get_lobby_owner(&self, lobby_id: i64) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .matchmaking()
            .lobby_owner(LobbyId::from_raw(lobby_id as u64))
            .raw() as i64
    }

    #[func]
    fn set_lobby_joinable(&self, lobby_id: i64, joinable: bool) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .matchmaking()
            .set_lobby_joinable(LobbyId::from_raw(lobby_id as u64), joinable)
    }

    // ------------------------------------------------------------------
    // Networking (P2P)
    // ------------------------------------------------------------------

    #[func]
    fn send_p2p_packet(&self, remote_id: i64, data: PackedByteArray, send_type: i64) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.networking().send_p2p_packet(
            SteamId::from_raw(remote_id as u64),
            dict::send_type_from(send_type),
            data.as_slice(),
        )
    }

    /// Read one pending packet into a dictionary with "remote_steam_id"
    /// and "data". Empty when nothing is pending.
    #[func]
    fn read_p2p_packet(&self, packet_size: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let mut buffer = vec![0u8; packet_size.max(0) as usize];
        match client.networking().read_p2p_packet(&mut buffer) {
            Some((remote, size)) => {
                buffer.truncate(size);
                let mut dict = VarDictionary::new();
                dict.set("remote_steam_id", remote.raw() as i64);
                dict.set("data", PackedByteArray::from(buffer.as_slice()));
                dict
            }
            None => VarDictionary::new(),
        }
    }

    /// Size of the next pending packet, or 0 when none.
    #[func]
    fn get_available_p2p_packet_size(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .networking()
            .is_p2p_packet_available()
            .map_or(0, |size| size as i64)
    }

    #[func]
    fn accept_p2p_session_with_user(&self, remote_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .networking()
            .accept_p2p_session(SteamId::from_raw(remote_id as u64));
    }

    #[func]
    fn close_p2p_session_with_user(&self, remote_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .networking()
            .close_p2p_session(SteamId::from_raw(remote_id as u64));
    }

    // ------------------------------------------------------------------
    // Remote Storage
    // ------------------------------------------------------------------

    #[func]
    fn file_write(&self, file: GString, data: PackedByteArray) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        let storage = client.remote_storage();
        let handle = storage.file(&file.to_string());
        let mut writer = handle.write();
        writer.write_all(data.as_slice()).is_ok()
    }

    #[func]
    fn file_read(&self, file: GString) -> PackedByteArray {
        let Some(client) = self.client() else {
            return PackedByteArray::new();
        };
        let storage = client.remote_storage();
        let handle = storage.file(&file.to_string());
        if !handle.exists() {
            return PackedByteArray::new();
        }
        let mut reader = handle.read();
        let mut buffer = Vec::new();
        match reader.read_to_end(&mut buffer) {
            Ok(_) => PackedByteArray::from(buffer.as_slice()),
            Err(err) => {
                godot_warn!("Steam: cloud read of {file} failed: {err}");
                PackedByteArray::new()
            }
        }
    }

    #[func]
    fn file_delete(&self, file: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.remote_storage().file(&file.to_string()).delete()
    }

    #[func]
    fn file_exists(&self, file: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.remote_storage().file(&file.to_string()).exists()
    }

    /// Remove a file from cloud sync but keep it locally.
    #[func]
    fn file_forget(&self, file: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.remote_storage().file(&file.to_string()).forget()
    }

    #[func]
    fn file_persisted(&self, file: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .remote_storage()
            .file(&file.to_string())
            .is_persisted()
    }

    #[func]
    fn get_file_timestamp(&self, file: GString) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.remote_storage().file(&file.to_string()).timestamp()
    }

    #[func]
    fn get_file_count(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.remote_storage().files().len() as i64
    }

    /// Dictionary with "name" and "size" for the cloud file at the given
    /// index, empty when out of range.
    #[func]
    fn get_file_name_and_size(&self, index: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let files = client.remote_storage().files();
        match files.get(index.max(0) as usize) {
            Some(info) => {
                let mut dict = VarDictionary::new();
                dict.set("name", info.name.as_str());
                dict.set("size", info.size as i64);
                dict
            }
            None => VarDictionary::new(),
        }
    }

    #[func]
    fn is_cloud_enabled_for_account(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.remote_storage().is_cloud_enabled_for_account()
    }

    #[func]
    fn is_cloud_enabled_for_app(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.remote_storage().is_cloud_enabled_for_app()
    }

    #[func]
    fn set_cloud_enabled_for_app(&self, enabled: bool) {
        let Some(client) = self.client() else {
            return;
        };
        client.remote_storage().set_cloud_enabled_for_app(enabled);
    }

    // ------------------------------------------------------------------
    // UGC (Workshop)
    // ------------------------------------------------------------------

    /// Create a new Workshop item; the new file id arrives on
    /// `item_created`.
    #[func]
    fn create_item(&self, app_id: u32, file_type: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        client.ugc().create_item(
            AppId(app_id),
            dict::file_type_from(file_type),
            move |result| match result {
                Ok((file_id, needs_legal_agreement)) => sink.push(SteamEvent::ItemCreated {
                    result: codes::RESULT_OK,
                    published_file_id: file_id.0,
                    needs_legal_agreement,
                }),
                Err(err) => sink.push(SteamEvent::ItemCreated {
                    result: dict::steam_error_code(err),
                    published_file_id: 0,
                    needs_legal_agreement: false,
                }),
            },
        );
    }

    /// Begin an update for an existing item. Follow with `set_item_*`
    /// calls and finish with `submit_item_update`.
    #[func]
    fn start_item_update(&mut self, app_id: u32, published_file_id: i64) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        if self.pending_update.is_some() {
            godot_warn!("Steam: discarding an unsubmitted item update");
        }
        self.pending_update = Some(
            client
                .ugc()
                .start_item_update(AppId(app_id), PublishedFileId(published_file_id as u64)),
        );
        true
    }

    #[func]
    fn set_item_title(&mut self, title: GString) -> bool {
        match self.pending_update.take() {
            Some(update) => {
                self.pending_update = Some(update.title(&title.to_string()));
                true
            }
            None => {
                godot_warn!("Steam: no item update in progress; call start_item_update first");
                false
            }
        }
    }

    #[func]
    fn set_item_description(&mut self, description: GString) -> bool {
        match self.pending_update.take() {
            Some(update) => {
                self.pending_update = Some(update.description(&description.to_string()));
                true
            }
            None => {
                godot_warn!("Steam: no item update in progress; call start_item_update first");
                false
            }
        }
    }

    /// Absolute path of the folder with the item's content.
    #[func]
    fn set_item_content(&mut self, content_path: GString) -> bool {
        match self.pending_update.take() {
            Some(update) => {
                let path = content_path.to_string();
                self.pending_update = Some(update.content_path(Path::new(&path)));
                true
            }
            None => {
                godot_warn!("Steam: no item update in progress; call start_item_update first");
                false
            }
        }
    }

    /// Absolute path of the preview image file.
    #[func]
    fn set_item_preview(&mut self, preview_path: GString) -> bool {
        match self.pending_update.take() {
            Some(update) => {
                let path = preview_path.to_string();
                self.pending_update = Some(update.preview_path(Path::new(&path)));
                true
            }
            None => {
                godot_warn!("Steam: no item update in progress; call start_item_update first");
                false
            }
        }
    }

    #[func]
    fn set_item_visibility(&mut self, visibility: i64) -> bool {
        match self.pending_update.take() {
            Some(update) => {
                self.pending_update = Some(update.visibility(dict::visibility_from(visibility)));
                true
            }
            None => {
                godot_warn!("Steam: no item update in progress; call start_item_update first");
                false
            }
        }
    }

    /// Upload the pending item update; the outcome arrives on
    /// `item_updated`. Progress is available from
    /// `get_item_update_progress` while the upload runs.
    #[func]
    fn submit_item_update(&mut self, change_note: GString) {
        let Some(update) = self.pending_update.take() else {
            godot_warn!("Steam: no item update in progress; call start_item_update first");
            return;
        };
        let note = change_note.to_string();
        let note = if note.is_empty() {
            None
        } else {
            Some(note.as_str())
        };
        let sink = self.sink.clone();
        let watch = update.submit(note, move |result| match result {
            Ok((_, needs_legal_agreement)) => sink.push(SteamEvent::ItemUpdated {
                result: codes::RESULT_OK,
                needs_legal_agreement,
            }),
            Err(err) => sink.push(SteamEvent::ItemUpdated {
                result: dict::steam_error_code(err),
                needs_legal_agreement: false,
            }),
        });
        self.update_watches.push(watch);
    }

    /// Dictionary with "status", "bytes_processed" and "bytes_total" for
    /// the most recent submitted update.
    #[func]
    fn get_item_update_progress(&self) -> VarDictionary {
        let Some(watch) = self.update_watches.last() else {
            return VarDictionary::new();
        };
        let (status, processed, total) = watch.progress();
        let mut dict = VarDictionary::new();
        dict.set("status", dict::update_status_code(status));
        dict.set("bytes_processed", processed as i64);
        dict.set("bytes_total", total as i64);
        dict
    }

    #[func]
    fn subscribe_item(&self, published_file_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        let file_id = published_file_id as u64;
        client
            .ugc()
            .subscribe_item(PublishedFileId(file_id), move |result| {
                sink.push(SteamEvent::ItemSubscribed {
                    result: dict::result_code(result),
                    published_file_id: file_id,
                });
            });
    }

    #[func]
    fn unsubscribe_item(&self, published_file_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        let file_id = published_file_id as u64;
        client
            .ugc()
            .unsubscribe_item(PublishedFileId(file_id), move |result| {
                sink.push(SteamEvent::ItemUnsubscribed {
                    result: dict::result_code(result),
                    published_file_id: file_id,
                });
            });
    }

    #[func]
    fn get_subscribed_items(&self) -> PackedInt64Array {
        let Some(client) = self.client() else {
            return PackedInt64Array::new();
        };
        client
            .ugc()
            .subscribed_items()
            .iter()
            .map(|id| id.0 as i64)
            .collect()
    }

    /// EItemState bit field for an item (see the ITEM_STATE constants).
    #[func]
    fn get_item_state(&self, published_file_id: i64) -> i64 {
        let Some(client) = self.client() else {
            return codes::ITEM_STATE_NONE;
        };
        client
            .ugc()
            .item_state(PublishedFileId(published_file_id as u64))
            .bits() as i64
    }

    /// Dictionary with "folder", "size_on_disk" and "timestamp" for an
    /// installed item, empty when not installed.
    #[func]
    fn get_item_install_info(&self, published_file_id: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        match client
            .ugc()
            .item_install_info(PublishedFileId(published_file_id as u64))
        {
            Some(info) => {
                let mut dict = VarDictionary::new();
                dict.set("folder", info.folder.as_str());
                dict.set("size_on_disk", info.size_on_disk as i64);
                dict.set("timestamp", info.timestamp as i64);
                dict
            }
            None => VarDictionary::new(),
        }
    }

    /// Dictionary with "bytes_downloaded" and "bytes_total" for an item
    /// being downloaded, empty when no download is active.
    #[func]
    fn get_item_download_info(&self, published_file_id: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        match client
            .ugc()
            .item_download_info(PublishedFileId(published_file_id as u64))
        {
            Some((downloaded, total)) => {
                let mut dict = VarDictionary::new();
                dict.set("bytes_downloaded", downloaded as i64);
                dict.set("bytes_total", total as i64);
                dict
            }
            None => VarDictionary::new(),
        }
    }

    /// Start (or reprioritize) an item download; completion arrives on
    /// `item_downloaded`.
    #[func]
    fn download_item(&self, published_file_id: i64, high_priority: bool) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .ugc()
            .download_item(PublishedFileId(published_file_id as u64), high_priority)
    }

    /// Run a paged query over all Workshop items; rows arrive on
    /// `ugc_query_completed`.
    #[func]
    fn query_all_ugc(
        &self,
        query_type: i64,
        matching_type: i64,
        creator_app_id: u32,
        consumer_app_id: u32,
        page: i64,
    ) {
        let Some(client) = self.client() else {
            return;
        };
        let query = client.ugc().query_all(
            dict::ugc_query_type_from(query_type),
            dict::ugc_type_from(matching_type),
            AppIDs::Both {
                creator: AppId(creator_app_id),
                consumer: AppId(consumer_app_id),
            },
            page.max(1) as u32,
        );
        match query {
            Ok(query) => {
                let sink = self.sink.clone();
                query.fetch(move |result| push_query_results(&sink, result));
            }
            Err(err) => godot_warn!("Steam: failed to create Workshop query: {err:?}"),
        }
    }

    /// Run a paged query over one user's Workshop list; rows arrive on
    /// `ugc_query_completed`.
    #[func]
    fn query_user_ugc(
        &self,
        account_id: i64,
        list_type: i64,
        matching_type: i64,
        sort_order: i64,
        creator_app_id: u32,
        consumer_app_id: u32,
        page: i64,
    ) {
        let Some(client) = self.client() else {
            return;
        };
        let query = client.ugc().query_user(
            steamworks::AccountId::from_raw(account_id as u32),
            dict::user_list_from(list_type),
            dict::ugc_type_from(matching_type),
            dict::user_list_order_from(sort_order),
            AppIDs::Both {
                creator: AppId(creator_app_id),
                consumer: AppId(consumer_app_id),
            },
            page.max(1) as u32,
        );
        match query {
            Ok(query) => {
                let sink = self.sink.clone();
                query.fetch(move |result| push_query_results(&sink, result));
            }
            Err(err) => godot_warn!("Steam: failed to create Workshop query: {err:?}"),
        }
    }

    /// Query specific Workshop items by id; rows arrive on
    /// `ugc_query_completed`.
    #[func]
    fn query_ugc_details(&self, published_file_ids: PackedInt64Array) {
        let Some(client) = self.client() else {
            return;
        };
        let items: Vec<PublishedFileId> = published_file_ids
            .as_slice()
            .iter()
            .map(|id| PublishedFileId(*id as u64))
            .collect();
        match client.ugc().query_items(items) {
            Ok(query) => {
                let sink = self.sink.clone();
                query.fetch(move |result| push_query_results(&sink, result));
            }
            Err(err) => godot_warn!("Steam: failed to create Workshop query: {err:?}"),
        }
    }

    // ------------------------------------------------------------------
    // User
    // ------------------------------------------------------------------

    /// The local user's 64-bit Steam ID.
    #[func]
    fn get_steam_id(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.user().steam_id().raw() as i64
    }

    #[func]
    fn get_player_steam_level(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.user().level() as i64
    }

    /// Issue an auth session ticket for the given remote identity (0 uses
    /// the local user). Returns a dictionary with the slot "handle" and
    /// the ticket "buffer"; the matching
    /// `get_auth_session_ticket_response` signal confirms validity.
    #[func]
    fn get_auth_session_ticket(&mut self, identity_steam_id: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let identity = if identity_steam_id == 0 {
            NetworkingIdentity::new_steam_id(client.user().steam_id())
        } else {
            NetworkingIdentity::new_steam_id(SteamId::from_raw(identity_steam_id as u64))
        };
        let (ticket, buffer) = client.user().authentication_session_ticket(identity);
        self.tickets.push(Some(ticket));
        let handle = self.tickets.len() as u64;
        self.handles.set_auth_ticket(handle);
        let mut dict = VarDictionary::new();
        dict.set("handle", handle as i64);
        dict.set("buffer", PackedByteArray::from(buffer.as_slice()));
        dict
    }

    /// Cancel a ticket from `get_auth_session_ticket` (0 = most recent).
    #[func]
    fn cancel_auth_ticket(&mut self, auth_ticket: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let Some(handle) = self.handles.resolve_auth_ticket(auth_ticket as u64) else {
            godot_warn!("Steam: no auth ticket to cancel");
            return;
        };
        match self
            .tickets
            .get_mut(handle as usize - 1)
            .and_then(Option::take)
        {
            Some(ticket) => client.user().cancel_authentication_ticket(ticket),
            None => godot_warn!("Steam: auth ticket {handle} already canceled"),
        }
    }

    /// Validate a remote user's ticket. Returns an
    /// EBeginAuthSessionResult code; the asynchronous verdict arrives on
    /// `validate_auth_ticket_response`.
    #[func]
    fn begin_auth_session(&self, ticket: PackedByteArray, steam_id: i64) -> i64 {
        let Some(client) = self.client() else {
            return codes::BEGIN_AUTH_SESSION_RESULT_INVALID_TICKET;
        };
        dict::begin_auth_code(
            client
                .user()
                .begin_authentication_session(SteamId::from_raw(steam_id as u64), ticket.as_slice()),
        )
    }

    #[func]
    fn end_auth_session(&self, steam_id: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .user()
            .end_authentication_session(SteamId::from_raw(steam_id as u64));
    }

    // ------------------------------------------------------------------
    // User Stats
    // ------------------------------------------------------------------

    /// Ask the SDK for the local user's stats; `user_stats_received`
    /// fires when they are ready.
    #[func]
    fn request_current_stats(&self) {
        let Some(client) = self.client() else {
            return;
        };
        client.user_stats().request_current_stats();
    }

    /// Dictionary with "ret" (lookup succeeded) and "achieved".
    #[func]
    fn get_achievement(&self, name: GString) -> VarDictionary {
        let mut dict = VarDictionary::new();
        let Some(client) = self.client() else {
            dict.set("ret", false);
            dict.set("achieved", false);
            return dict;
        };
        match client.user_stats().achievement(&name.to_string()).get() {
            Ok(achieved) => {
                dict.set("ret", true);
                dict.set("achieved", achieved);
            }
            Err(()) => {
                dict.set("ret", false);
                dict.set("achieved", false);
            }
        }
        dict
    }

    /// Unlock an achievement. Call `store_stats` to persist.
    #[func]
    fn set_achievement(&self, name: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.user_stats().achievement(&name.to_string()).set().is_ok()
    }

    #[func]
    fn clear_achievement(&self, name: GString) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .user_stats()
            .achievement(&name.to_string())
            .clear()
            .is_ok()
    }

    /// Localized achievement attribute; key is "name", "desc" or
    /// "hidden".
    #[func]
    fn get_achievement_display_attribute(&self, name: GString, key: GString) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        match client
            .user_stats()
            .achievement(&name.to_string())
            .get_achievement_display_attribute(&key.to_string())
        {
            Ok(value) => GString::from(value),
            Err(()) => GString::new(),
        }
    }

    /// Persist stat and achievement changes; `user_stats_stored` and
    /// `user_achievement_stored` follow.
    #[func]
    fn store_stats(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.user_stats().store_stats().is_ok()
    }

    #[func]
    fn reset_all_stats(&self, achievements_included: bool) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .user_stats()
            .reset_all_stats(achievements_included)
            .is_ok()
    }

    #[func]
    fn get_stat_int(&self, name: GString) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .user_stats()
            .get_stat_i32(&name.to_string())
            .map_or(0, i64::from)
    }

    #[func]
    fn set_stat_int(&self, name: GString, value: i64) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .user_stats()
            .set_stat_i32(&name.to_string(), value as i32)
            .is_ok()
    }

    #[func]
    fn get_stat_float(&self, name: GString) -> f32 {
        let Some(client) = self.client() else {
            return 0.0;
        };
        client
            .user_stats()
            .get_stat_f32(&name.to_string())
            .unwrap_or(0.0)
    }

    #[func]
    fn set_stat_float(&self, name: GString, value: f32) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client
            .user_stats()
            .set_stat_f32(&name.to_string(), value)
            .is_ok()
    }

    /// Look up a leaderboard by name; the slot handle arrives on
    /// `leaderboard_find_result`.
    #[func]
    fn find_leaderboard(&self, name: GString) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        let boards = Arc::clone(&self.leaderboards);
        client
            .user_stats()
            .find_leaderboard(&name.to_string(), move |result| {
                push_found_leaderboard(&sink, &boards, result);
            });
    }

    /// Look up a leaderboard by name, creating it with the given sort
    /// method and display type when missing.
    #[func]
    fn find_or_create_leaderboard(&self, name: GString, sort_method: i64, display_type: i64) {
        let Some(client) = self.client() else {
            return;
        };
        let sink = self.sink.clone();
        let boards = Arc::clone(&self.leaderboards);
        client.user_stats().find_or_create_leaderboard(
            &name.to_string(),
            dict::sort_method_from(sort_method),
            dict::display_type_from(display_type),
            move |result| {
                push_found_leaderboard(&sink, &boards, result);
            },
        );
    }

    /// Upload a score to a leaderboard (handle 0 = most recently found);
    /// the outcome arrives on `leaderboard_score_uploaded`.
    #[func]
    fn upload_leaderboard_score(
        &self,
        score: i64,
        keep_best: bool,
        details: PackedInt32Array,
        leaderboard_handle: i64,
    ) {
        let Some(client) = self.client() else {
            return;
        };
        let Some(board) = self.resolve_leaderboard(leaderboard_handle) else {
            godot_warn!("Steam: no leaderboard handle; call find_leaderboard first");
            return;
        };
        let handle = if leaderboard_handle != 0 {
            leaderboard_handle as u64
        } else {
            self.handles.leaderboard()
        };
        let sink = self.sink.clone();
        client.user_stats().upload_leaderboard_score(
            &board,
            dict::upload_method_from(keep_best),
            score as i32,
            details.as_slice(),
            move |result| match result {
                Ok(Some(upload)) => sink.push(SteamEvent::LeaderboardScoreUploaded {
                    success: true,
                    handle,
                    score: upload.score,
                    score_changed: upload.was_changed,
                    global_rank_new: upload.global_rank_new,
                    global_rank_previous: upload.global_rank_previous,
                }),
                Ok(None) => sink.push(SteamEvent::LeaderboardScoreUploaded {
                    success: false,
                    handle,
                    score: 0,
                    score_changed: false,
                    global_rank_new: 0,
                    global_rank_previous: 0,
                }),
                Err(err) => {
                    godot_warn!("Steam: leaderboard upload failed: {err}");
                    sink.push(SteamEvent::LeaderboardScoreUploaded {
                        success: false,
                        handle,
                        score: 0,
                        score_changed: false,
                        global_rank_new: 0,
                        global_rank_previous: 0,
                    });
                }
            },
        );
    }

    /// Download rows [start, end] of a leaderboard (handle 0 = most
    /// recently found); rows arrive on `leaderboard_scores_downloaded`.
    #[func]
    fn download_leaderboard_entries(
        &self,
        start: i64,
        end: i64,
        data_request: i64,
        leaderboard_handle: i64,
    ) {
        let Some(client) = self.client() else {
            return;
        };
        let Some(board) = self.resolve_leaderboard(leaderboard_handle) else {
            godot_warn!("Steam: no leaderboard handle; call find_leaderboard first");
            return;
        };
        let handle = if leaderboard_handle != 0 {
            leaderboard_handle as u64
        } else {
            self.handles.leaderboard()
        };
        let sink = self.sink.clone();
        client.user_stats().download_leaderboard_entries(
            &board,
            dict::data_request_from(data_request),
            start.max(0) as usize,
            end.max(0) as usize,
            self.handles.leaderboard_details_max() as usize,
            move |result| {
                let entries = match result {
                    Ok(entries) => entries
                        .iter()
                        .map(|entry| steambridge_core::event::LeaderboardEntryData {
                            steam_id: entry.user.raw(),
                            global_rank: entry.global_rank,
                            score: entry.score,
                            details: entry.details.clone(),
                        })
                        .collect(),
                    Err(err) => {
                        godot_warn!("Steam: leaderboard download failed: {err}");
                        Vec::new()
                    }
                };
                sink.push(SteamEvent::LeaderboardScoresDownloaded { handle, entries });
            },
        );
    }

    // ------------------------------------------------------------------
    // Utils
    // ------------------------------------------------------------------

    #[func]
    fn get_app_id(&self) -> u32 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.utils().app_id().0
    }

    /// Two-letter country code of the user's IP, per Steam's GeoIP.
    #[func]
    fn get_ip_country(&self) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        GString::from(client.utils().ip_country().as_str())
    }

    #[func]
    fn get_steam_ui_language(&self) -> GString {
        let Some(client) = self.client() else {
            return GString::new();
        };
        GString::from(client.utils().ui_language().as_str())
    }

    /// Steam server time as a unix timestamp.
    #[func]
    fn get_server_real_time(&self) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client.utils().get_server_real_time() as i64
    }

    #[func]
    fn is_steam_running_on_steam_deck(&self) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        client.utils().is_steam_running_on_steam_deck()
    }

    #[func]
    fn set_overlay_notification_position(&self, position: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .utils()
            .set_overlay_notification_position(dict::notification_position_from(position));
    }

    /// Pop the floating keyboard over the given screen rect (Steam Deck
    /// and gamepad UI); dismissal arrives on
    /// `floating_gamepad_text_input_dismissed`.
    #[func]
    fn show_floating_gamepad_text_input(
        &self,
        mode: i64,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> bool {
        let Some(client) = self.client() else {
            return false;
        };
        let sink = self.sink.clone();
        client.utils().show_floating_gamepad_text_input(
            dict::floating_input_mode_from(mode),
            x as i32,
            y as i32,
            width as i32,
            height as i32,
            move || sink.push(SteamEvent::FloatingGamepadTextInputDismissed),
        )
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Initialize the input interface. With `explicitly_call_run_frame`
    /// set, call `run_input_frame` each frame yourself.
    #[func]
    fn input_init(&self, explicitly_call_run_frame: bool) {
        let Some(client) = self.client() else {
            return;
        };
        client.input().init(explicitly_call_run_frame);
    }

    #[func]
    fn input_shutdown(&self) {
        let Some(client) = self.client() else {
            return;
        };
        client.input().shutdown();
    }

    #[func]
    fn run_input_frame(&self) {
        let Some(client) = self.client() else {
            return;
        };
        client.input().run_frame();
    }

    /// Handles of all connected controllers.
    #[func]
    fn get_connected_controllers(&self) -> PackedInt64Array {
        let Some(client) = self.client() else {
            return PackedInt64Array::new();
        };
        client
            .input()
            .get_connected_controllers()
            .iter()
            .map(|handle| *handle as i64)
            .collect()
    }

    #[func]
    fn get_action_set_handle(&self, action_set_name: GString) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .input()
            .get_action_set_handle(&action_set_name.to_string()) as i64
    }

    #[func]
    fn activate_action_set(&self, input_handle: i64, action_set_handle: i64) {
        let Some(client) = self.client() else {
            return;
        };
        client
            .input()
            .activate_action_set_handle(input_handle as u64, action_set_handle as u64);
    }

    #[func]
    fn get_digital_action_handle(&self, action_name: GString) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .input()
            .get_digital_action_handle(&action_name.to_string()) as i64
    }

    #[func]
    fn get_analog_action_handle(&self, action_name: GString) -> i64 {
        let Some(client) = self.client() else {
            return 0;
        };
        client
            .input()
            .get_analog_action_handle(&action_name.to_string()) as i64
    }

    /// Dictionary with "state" and "active" for a digital action.
    #[func]
    fn get_digital_action_data(&self, input_handle: i64, action_handle: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let data = client
            .input()
            .get_digital_action_data(input_handle as u64, action_handle as u64);
        let mut dict = VarDictionary::new();
        dict.set("state", data.bState);
        dict.set("active", data.bActive);
        dict
    }

    /// Dictionary with "x", "y" and "active" for an analog action.
    #[func]
    fn get_analog_action_data(&self, input_handle: i64, action_handle: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let data = client
            .input()
            .get_analog_action_data(input_handle as u64, action_handle as u64);
        let mut dict = VarDictionary::new();
        dict.set("x", data.x);
        dict.set("y", data.y);
        dict.set("active", data.bActive);
        dict
    }

    /// Raw motion state (rotation quaternion, acceleration, angular
    /// velocity) for a controller with motion sensors.
    #[func]
    fn get_motion_data(&self, input_handle: i64) -> VarDictionary {
        let Some(client) = self.client() else {
            return VarDictionary::new();
        };
        let data = client.input().get_motion_data(input_handle as u64);
        let mut dict = VarDictionary::new();
        dict.set("rot_quat_x", data.rotQuatX);
        dict.set("rot_quat_y", data.rotQuatY);
        dict.set("rot_quat_z", data.rotQuatZ);
        dict.set("rot_quat_w", data.rotQuatW);
        dict.set("pos_accel_x", data.posAccelX);
        dict.set("pos_accel_y", data.posAccelY);
        dict.set("pos_accel_z", data.posAccelZ);
        dict.set("rot_vel_x", data.rotVelX);
        dict.set("rot_vel_y", data.rotVelY);
        dict.set("rot_vel_z", data.rotVelZ);
        dict
    }
}

/// Shared tail of the three Workshop query paths.
fn push_query_results(
    sink: &EventSink,
    result: Result<steamworks::QueryResults<'_>, steamworks::SteamError>,
) {
    match result {
        Ok(results) => {
            let rows = dict::collect_query_results(&results);
            sink.push(SteamEvent::UgcQueryCompleted {
                total: results.total_results(),
                results: rows,
            });
        }
        Err(err) => {
            godot_warn!("Steam: Workshop query failed: {err}");
            sink.push(SteamEvent::UgcQueryCompleted {
                total: 0,
                results: Vec::new(),
            });
        }
    }
}

/// Shared tail of the two leaderboard-find paths: stash the opaque value
/// in a slot and report the slot handle.
fn push_found_leaderboard(
    sink: &EventSink,
    boards: &Arc<Mutex<Vec<Leaderboard>>>,
    result: Result<Option<Leaderboard>, steamworks::SteamError>,
) {
    match result {
        Ok(Some(board)) => {
            let handle = match boards.lock() {
                Ok(mut boards) => {
                    boards.push(board);
                    boards.len() as u64
                }
                Err(_) => 0,
            };
            sink.push(SteamEvent::LeaderboardFindResult {
                handle,
                found: handle != 0,
            });
        }
        Ok(None) => sink.push(SteamEvent::LeaderboardFindResult {
            handle: 0,
            found: false,
        }),
        Err(err) => {
            godot_warn!("Steam: leaderboard lookup failed: {err}");
            sink.push(SteamEvent::LeaderboardFindResult {
                handle: 0,
                found: false,
            });
        }
    }
}
