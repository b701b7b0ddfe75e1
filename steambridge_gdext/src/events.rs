// Recurring-callback registration.
//
// The SDK raises two kinds of asynchronous notifications: recurring
// callbacks (registered once, fire whenever) and one-shot call-results
// (attached per call, see `steam.rs`). This module owns the recurring side:
// one registration per callback type the facade forwards, each translating
// the SDK payload into a `SteamEvent` and pushing it into the pump queue.
//
// The returned handles keep the registrations alive; dropping them (on
// shutdown) unregisters everything.

use steambridge_core::event::{EventSink, SteamEvent};
use steamworks::{
    AuthSessionTicketResponse, CallbackHandle, Client, DownloadItemResult,
    GameLobbyJoinRequested, GameOverlayActivated, LobbyChatUpdate, LobbyDataUpdate,
    P2PSessionConnectFail, P2PSessionRequest, PersonaStateChange, SteamServerConnectFailure,
    SteamServersConnected, SteamServersDisconnected, UserAchievementStored, UserStatsReceived,
    UserStatsStored, ValidateAuthTicketResponse,
};

// `use crate::dict` also resolves the deprecated `godot::prelude::dict!`
// macro through the prelude glob in lib.rs; only the module is wanted.
#[allow(deprecated)]
use crate::dict;

/// Register every recurring callback the facade forwards as a signal.
pub fn register_all(client: &Client, sink: &EventSink) -> Vec<CallbackHandle> {
    let mut handles = Vec::new();

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: GameOverlayActivated| {
        s.push(SteamEvent::OverlayToggled { active: cb.active });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: PersonaStateChange| {
        s.push(SteamEvent::PersonaStateChange {
            steam_id: cb.steam_id.raw(),
            flags: cb.flags.bits() as i64,
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: GameLobbyJoinRequested| {
        s.push(SteamEvent::JoinRequested {
            lobby_id: cb.lobby_steam_id.raw(),
            friend_id: cb.friend_steam_id.raw(),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: LobbyDataUpdate| {
        s.push(SteamEvent::LobbyDataUpdate {
            lobby_id: cb.lobby.raw(),
            member_id: cb.member.raw(),
            success: cb.success,
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: LobbyChatUpdate| {
        s.push(SteamEvent::LobbyChatUpdate {
            lobby_id: cb.lobby.raw(),
            changed_id: cb.user_changed.raw(),
            making_change_id: cb.making_change.raw(),
            chat_state: dict::chat_member_change_bits(cb.member_state_change),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: P2PSessionRequest| {
        s.push(SteamEvent::P2PSessionRequest {
            remote_id: cb.remote.raw(),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: P2PSessionConnectFail| {
        s.push(SteamEvent::P2PSessionConnectFail {
            remote_id: cb.remote.raw(),
            session_error: cb.error as i64,
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |_: SteamServersConnected| {
        s.push(SteamEvent::SteamServerConnected);
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: SteamServersDisconnected| {
        s.push(SteamEvent::SteamServerDisconnected {
            reason: dict::steam_error_code(cb.reason),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: SteamServerConnectFailure| {
        s.push(SteamEvent::SteamServerConnectFailed {
            reason: dict::steam_error_code(cb.reason),
            retrying: cb.still_retrying,
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: AuthSessionTicketResponse| {
        s.push(SteamEvent::GetAuthSessionTicketResponse {
            result: dict::result_code(cb.result),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: ValidateAuthTicketResponse| {
        s.push(SteamEvent::ValidateAuthTicketResponse {
            auth_id: cb.steam_id.raw(),
            response: dict::validate_response_code(&cb.response),
            owner_id: cb.owner_steam_id.raw(),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: UserStatsReceived| {
        s.push(SteamEvent::UserStatsReceived {
            game_id: cb.game_id.raw(),
            user_id: cb.steam_id.raw(),
            result: dict::result_code(cb.result),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: UserStatsStored| {
        s.push(SteamEvent::UserStatsStored {
            game_id: cb.game_id.raw(),
            result: dict::result_code(cb.result),
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: UserAchievementStored| {
        s.push(SteamEvent::UserAchievementStored {
            game_id: cb.game_id.raw(),
            achievement_name: cb.achievement_name.clone(),
            current_progress: cb.current_progress,
            max_progress: cb.max_progress,
        });
    }));

    let s = sink.clone();
    handles.push(client.register_callback(move |cb: DownloadItemResult| {
        s.push(SteamEvent::ItemDownloaded {
            app_id: cb.app_id.0,
            published_file_id: cb.published_file_id.0,
            result: match cb.error {
                None => steambridge_core::codes::RESULT_OK,
                Some(err) => dict::steam_error_code(err),
            },
        });
    }));

    handles
}
