// Numeric constants for the SDK enums the bridge passes through.
//
// Error reporting is entirely delegated: SDK result codes cross the
// boundary unchanged, and scripts compare against these constants (the
// facade also exports them as class constants). Values are the SDK's
// documented ones — do not renumber.

// EResult — the SDK's universal result code.
pub const RESULT_OK: i64 = 1;
pub const RESULT_FAIL: i64 = 2;
pub const RESULT_NO_CONNECTION: i64 = 3;
pub const RESULT_INVALID_PASSWORD: i64 = 5;
pub const RESULT_LOGGED_IN_ELSEWHERE: i64 = 6;
pub const RESULT_INVALID_PROTOCOL_VER: i64 = 7;
pub const RESULT_INVALID_PARAM: i64 = 8;
pub const RESULT_FILE_NOT_FOUND: i64 = 9;
pub const RESULT_BUSY: i64 = 10;
pub const RESULT_INVALID_STATE: i64 = 11;
pub const RESULT_INVALID_NAME: i64 = 12;
pub const RESULT_INVALID_EMAIL: i64 = 13;
pub const RESULT_DUPLICATE_NAME: i64 = 14;
pub const RESULT_ACCESS_DENIED: i64 = 15;
pub const RESULT_TIMEOUT: i64 = 16;
pub const RESULT_BANNED: i64 = 17;
pub const RESULT_ACCOUNT_NOT_FOUND: i64 = 18;
pub const RESULT_INVALID_STEAM_ID: i64 = 19;
pub const RESULT_SERVICE_UNAVAILABLE: i64 = 20;
pub const RESULT_NOT_LOGGED_ON: i64 = 21;
pub const RESULT_PENDING: i64 = 22;
pub const RESULT_ENCRYPTION_FAILURE: i64 = 23;
pub const RESULT_INSUFFICIENT_PRIVILEGE: i64 = 24;
pub const RESULT_LIMIT_EXCEEDED: i64 = 25;
pub const RESULT_REVOKED: i64 = 26;
pub const RESULT_EXPIRED: i64 = 27;
pub const RESULT_ALREADY_REDEEMED: i64 = 28;
pub const RESULT_DUPLICATE_REQUEST: i64 = 29;
pub const RESULT_ALREADY_OWNED: i64 = 30;
pub const RESULT_IP_NOT_FOUND: i64 = 31;
pub const RESULT_PERSIST_FAILED: i64 = 32;
pub const RESULT_LOCKING_FAILED: i64 = 33;
pub const RESULT_LOGON_SESSION_REPLACED: i64 = 34;
pub const RESULT_CONNECT_FAILED: i64 = 35;
pub const RESULT_HANDSHAKE_FAILED: i64 = 36;
pub const RESULT_IO_FAILURE: i64 = 37;
pub const RESULT_REMOTE_DISCONNECT: i64 = 38;
pub const RESULT_SHOPPING_CART_NOT_FOUND: i64 = 39;
pub const RESULT_BLOCKED: i64 = 40;
pub const RESULT_IGNORED: i64 = 41;
pub const RESULT_NO_MATCH: i64 = 42;
pub const RESULT_ACCOUNT_DISABLED: i64 = 43;
pub const RESULT_SERVICE_READ_ONLY: i64 = 44;
pub const RESULT_ACCOUNT_NOT_FEATURED: i64 = 45;
pub const RESULT_ADMINISTRATOR_OK: i64 = 46;
pub const RESULT_CONTENT_VERSION: i64 = 47;
pub const RESULT_TRY_ANOTHER_CM: i64 = 48;
pub const RESULT_PASSWORD_REQUIRED_TO_KICK_SESSION: i64 = 49;
pub const RESULT_ALREADY_LOGGED_IN_ELSEWHERE: i64 = 50;
pub const RESULT_SUSPENDED: i64 = 51;
pub const RESULT_CANCELLED: i64 = 52;
pub const RESULT_DATA_CORRUPTION: i64 = 53;
pub const RESULT_DISK_FULL: i64 = 54;
pub const RESULT_REMOTE_CALL_FAILED: i64 = 55;

// Initialization status, as returned in the `steam_init_ex` dictionary.
pub const INIT_RESULT_OK: i64 = 0;
pub const INIT_RESULT_FAILED_GENERIC: i64 = 1;
pub const INIT_RESULT_NO_STEAM_CLIENT: i64 = 2;
pub const INIT_RESULT_VERSION_MISMATCH: i64 = 3;

// EChatRoomEnterResponse — carried by the `lobby_joined` signal.
pub const CHAT_ROOM_ENTER_RESPONSE_SUCCESS: i64 = 1;
pub const CHAT_ROOM_ENTER_RESPONSE_DOESNT_EXIST: i64 = 2;
pub const CHAT_ROOM_ENTER_RESPONSE_NOT_ALLOWED: i64 = 3;
pub const CHAT_ROOM_ENTER_RESPONSE_FULL: i64 = 4;
pub const CHAT_ROOM_ENTER_RESPONSE_ERROR: i64 = 5;
pub const CHAT_ROOM_ENTER_RESPONSE_BANNED: i64 = 6;
pub const CHAT_ROOM_ENTER_RESPONSE_LIMITED: i64 = 7;

// EChatMemberStateChange — bit field in the `lobby_chat_update` signal.
pub const CHAT_MEMBER_STATE_CHANGE_ENTERED: i64 = 0x0001;
pub const CHAT_MEMBER_STATE_CHANGE_LEFT: i64 = 0x0002;
pub const CHAT_MEMBER_STATE_CHANGE_DISCONNECTED: i64 = 0x0004;
pub const CHAT_MEMBER_STATE_CHANGE_KICKED: i64 = 0x0008;
pub const CHAT_MEMBER_STATE_CHANGE_BANNED: i64 = 0x0010;

// EBeginAuthSessionResult — returned by `begin_auth_session`.
pub const BEGIN_AUTH_SESSION_RESULT_OK: i64 = 0;
pub const BEGIN_AUTH_SESSION_RESULT_INVALID_TICKET: i64 = 1;
pub const BEGIN_AUTH_SESSION_RESULT_DUPLICATE_REQUEST: i64 = 2;
pub const BEGIN_AUTH_SESSION_RESULT_INVALID_VERSION: i64 = 3;
pub const BEGIN_AUTH_SESSION_RESULT_GAME_MISMATCH: i64 = 4;
pub const BEGIN_AUTH_SESSION_RESULT_EXPIRED_TICKET: i64 = 5;

// EAuthSessionResponse — carried by `validate_auth_ticket_response`.
pub const AUTH_SESSION_RESPONSE_OK: i64 = 0;
pub const AUTH_SESSION_RESPONSE_USER_NOT_CONNECTED_TO_STEAM: i64 = 1;
pub const AUTH_SESSION_RESPONSE_NO_LICENSE_OR_EXPIRED: i64 = 2;
pub const AUTH_SESSION_RESPONSE_VAC_BANNED: i64 = 3;
pub const AUTH_SESSION_RESPONSE_LOGGED_IN_ELSEWHERE: i64 = 4;
pub const AUTH_SESSION_RESPONSE_VAC_CHECK_TIMED_OUT: i64 = 5;
pub const AUTH_SESSION_RESPONSE_AUTH_TICKET_CANCELED: i64 = 6;
pub const AUTH_SESSION_RESPONSE_AUTH_TICKET_INVALID_ALREADY_USED: i64 = 7;
pub const AUTH_SESSION_RESPONSE_AUTH_TICKET_INVALID: i64 = 8;
pub const AUTH_SESSION_RESPONSE_PUBLISHER_ISSUED_BAN: i64 = 9;

// EPersonaState — returned by friend info queries.
pub const PERSONA_STATE_OFFLINE: i64 = 0;
pub const PERSONA_STATE_ONLINE: i64 = 1;
pub const PERSONA_STATE_BUSY: i64 = 2;
pub const PERSONA_STATE_AWAY: i64 = 3;
pub const PERSONA_STATE_SNOOZE: i64 = 4;
pub const PERSONA_STATE_LOOKING_TO_TRADE: i64 = 5;
pub const PERSONA_STATE_LOOKING_TO_PLAY: i64 = 6;
pub const PERSONA_STATE_INVISIBLE: i64 = 7;

// ELobbyType — argument to `create_lobby` / `set_lobby_type`.
pub const LOBBY_TYPE_PRIVATE: i64 = 0;
pub const LOBBY_TYPE_FRIENDS_ONLY: i64 = 1;
pub const LOBBY_TYPE_PUBLIC: i64 = 2;
pub const LOBBY_TYPE_INVISIBLE: i64 = 3;

// EP2PSend — argument to `send_p2p_packet`.
pub const P2P_SEND_UNRELIABLE: i64 = 0;
pub const P2P_SEND_UNRELIABLE_NO_DELAY: i64 = 1;
pub const P2P_SEND_RELIABLE: i64 = 2;
pub const P2P_SEND_RELIABLE_WITH_BUFFERING: i64 = 3;

// ELeaderboardSortMethod / ELeaderboardDisplayType / upload & request modes.
pub const LEADERBOARD_SORT_METHOD_ASCENDING: i64 = 1;
pub const LEADERBOARD_SORT_METHOD_DESCENDING: i64 = 2;
pub const LEADERBOARD_DISPLAY_TYPE_NUMERIC: i64 = 1;
pub const LEADERBOARD_DISPLAY_TYPE_TIME_SECONDS: i64 = 2;
pub const LEADERBOARD_DISPLAY_TYPE_TIME_MILLISECONDS: i64 = 3;
pub const LEADERBOARD_UPLOAD_SCORE_METHOD_KEEP_BEST: i64 = 1;
pub const LEADERBOARD_UPLOAD_SCORE_METHOD_FORCE_UPDATE: i64 = 2;
pub const LEADERBOARD_DATA_REQUEST_GLOBAL: i64 = 0;
pub const LEADERBOARD_DATA_REQUEST_GLOBAL_AROUND_USER: i64 = 1;
pub const LEADERBOARD_DATA_REQUEST_FRIENDS: i64 = 2;

// EItemState — bit field returned by `get_item_state`.
pub const ITEM_STATE_NONE: i64 = 0;
pub const ITEM_STATE_SUBSCRIBED: i64 = 1;
pub const ITEM_STATE_LEGACY_ITEM: i64 = 2;
pub const ITEM_STATE_INSTALLED: i64 = 4;
pub const ITEM_STATE_NEEDS_UPDATE: i64 = 8;
pub const ITEM_STATE_DOWNLOADING: i64 = 16;
pub const ITEM_STATE_DOWNLOAD_PENDING: i64 = 32;

// ERemoteStoragePublishedFileVisibility — argument to `set_item_visibility`.
pub const PUBLISHED_FILE_VISIBILITY_PUBLIC: i64 = 0;
pub const PUBLISHED_FILE_VISIBILITY_FRIENDS_ONLY: i64 = 1;
pub const PUBLISHED_FILE_VISIBILITY_PRIVATE: i64 = 2;
pub const PUBLISHED_FILE_VISIBILITY_UNLISTED: i64 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    // Spot checks against the SDK's documented numbering. These exist so a
    // careless renumbering (e.g. alphabetizing the constants) fails loudly.
    #[test]
    fn eresult_documented_values() {
        assert_eq!(RESULT_OK, 1);
        assert_eq!(RESULT_FAIL, 2);
        assert_eq!(RESULT_INVALID_PASSWORD, 5); // 4 is unused in the SDK
        assert_eq!(RESULT_FILE_NOT_FOUND, 9);
        assert_eq!(RESULT_NOT_LOGGED_ON, 21);
        assert_eq!(RESULT_REMOTE_CALL_FAILED, 55);
    }

    #[test]
    fn chat_member_state_changes_are_disjoint_bits() {
        let all = [
            CHAT_MEMBER_STATE_CHANGE_ENTERED,
            CHAT_MEMBER_STATE_CHANGE_LEFT,
            CHAT_MEMBER_STATE_CHANGE_DISCONNECTED,
            CHAT_MEMBER_STATE_CHANGE_KICKED,
            CHAT_MEMBER_STATE_CHANGE_BANNED,
        ];
        let mut seen = 0i64;
        for bit in all {
            assert_eq!(bit & seen, 0, "overlapping bit: {bit:#x}");
            seen |= bit;
        }
    }

    #[test]
    fn item_state_bits_match_sdk() {
        assert_eq!(ITEM_STATE_SUBSCRIBED, 1);
        assert_eq!(ITEM_STATE_INSTALLED, 4);
        assert_eq!(ITEM_STATE_DOWNLOAD_PENDING, 32);
    }

    #[test]
    fn init_results_are_contiguous() {
        assert_eq!(INIT_RESULT_OK, 0);
        assert_eq!(INIT_RESULT_VERSION_MISMATCH, 3);
    }
}
