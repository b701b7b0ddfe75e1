// Translation between SDK types and script-facing values.
//
// Two directions live here:
// - SDK enums and error types -> the numeric codes scripts compare against
//   (the constants in `steambridge_core::codes`).
// - Script-facing integers -> the SDK enums the `steamworks` crate expects.
//
// Plus the dictionary builders for multi-field payloads (friends, Workshop
// items, leaderboard rows).
//
// Every SDK-enum match keeps a fallback arm: the wrapped SDK grows codes
// across versions, and an unknown value must degrade to a defined code
// rather than abort the frame.
#![allow(unreachable_patterns)]

use godot::prelude::*;
use steambridge_core::codes;
use steambridge_core::event::{LeaderboardEntryData, WorkshopItemData};
use steamworks::{
    AuthSessionError, AuthSessionValidateError, ChatMemberStateChange, ClientManager, FileType,
    FloatingGamepadTextInputMode, Friend, FriendFlags, FriendGame, FriendState,
    LeaderboardDataRequest, LeaderboardDisplayType, LeaderboardSortMethod, LobbyType,
    NotificationPosition, OverlayToStoreFlag, PublishedFileVisibility, QueryResults, SendType,
    SteamAPIInitError, SteamError, UGCQueryType, UGCType, UpdateStatus, UploadScoreMethod,
    UserList, UserListOrder,
};

/// Map an SDK error onto its documented EResult code.
pub fn steam_error_code(err: SteamError) -> i64 {
    match err {
        SteamError::Generic => codes::RESULT_FAIL,
        SteamError::NoConnection => codes::RESULT_NO_CONNECTION,
        SteamError::InvalidPassword => codes::RESULT_INVALID_PASSWORD,
        SteamError::LoggedInElsewhere => codes::RESULT_LOGGED_IN_ELSEWHERE,
        SteamError::InvalidProtocolVersion => codes::RESULT_INVALID_PROTOCOL_VER,
        SteamError::InvalidParameter => codes::RESULT_INVALID_PARAM,
        SteamError::FileNotFound => codes::RESULT_FILE_NOT_FOUND,
        SteamError::Busy => codes::RESULT_BUSY,
        SteamError::InvalidState => codes::RESULT_INVALID_STATE,
        SteamError::InvalidName => codes::RESULT_INVALID_NAME,
        SteamError::InvalidEmail => codes::RESULT_INVALID_EMAIL,
        SteamError::DuplicateName => codes::RESULT_DUPLICATE_NAME,
        SteamError::AccessDenied => codes::RESULT_ACCESS_DENIED,
        SteamError::Timeout => codes::RESULT_TIMEOUT,
        SteamError::Banned => codes::RESULT_BANNED,
        SteamError::AccountNotFound => codes::RESULT_ACCOUNT_NOT_FOUND,
        SteamError::InvalidSteamID => codes::RESULT_INVALID_STEAM_ID,
        SteamError::ServiceUnavailable => codes::RESULT_SERVICE_UNAVAILABLE,
        SteamError::NotLoggedOn => codes::RESULT_NOT_LOGGED_ON,
        SteamError::Pending => codes::RESULT_PENDING,
        SteamError::EncryptionFailure => codes::RESULT_ENCRYPTION_FAILURE,
        SteamError::InsufficientPrivilege => codes::RESULT_INSUFFICIENT_PRIVILEGE,
        SteamError::LimitExceeded => codes::RESULT_LIMIT_EXCEEDED,
        SteamError::Revoked => codes::RESULT_REVOKED,
        SteamError::Expired => codes::RESULT_EXPIRED,
        SteamError::AlreadyRedeemed => codes::RESULT_ALREADY_REDEEMED,
        SteamError::DuplicateRequest => codes::RESULT_DUPLICATE_REQUEST,
        SteamError::AlreadyOwned => codes::RESULT_ALREADY_OWNED,
        SteamError::IPNotFound => codes::RESULT_IP_NOT_FOUND,
        SteamError::PersistFailed => codes::RESULT_PERSIST_FAILED,
        SteamError::LockingFailed => codes::RESULT_LOCKING_FAILED,
        SteamError::LogonSessionReplaced => codes::RESULT_LOGON_SESSION_REPLACED,
        SteamError::ConnectFailed => codes::RESULT_CONNECT_FAILED,
        SteamError::HandshakeFailed => codes::RESULT_HANDSHAKE_FAILED,
        SteamError::IOFailure => codes::RESULT_IO_FAILURE,
        SteamError::RemoteDisconnect => codes::RESULT_REMOTE_DISCONNECT,
        SteamError::ShoppingCartNotFound => codes::RESULT_SHOPPING_CART_NOT_FOUND,
        SteamError::Blocked => codes::RESULT_BLOCKED,
        SteamError::Ignored => codes::RESULT_IGNORED,
        SteamError::NoMatch => codes::RESULT_NO_MATCH,
        SteamError::AccountDisabled => codes::RESULT_ACCOUNT_DISABLED,
        SteamError::ServiceReadOnly => codes::RESULT_SERVICE_READ_ONLY,
        SteamError::AccountNotFeatured => codes::RESULT_ACCOUNT_NOT_FEATURED,
        SteamError::AdministratorOK => codes::RESULT_ADMINISTRATOR_OK,
        SteamError::ContentVersion => codes::RESULT_CONTENT_VERSION,
        SteamError::TryAnotherCM => codes::RESULT_TRY_ANOTHER_CM,
        SteamError::PasswordRequiredToKickSession => {
            codes::RESULT_PASSWORD_REQUIRED_TO_KICK_SESSION
        }
        SteamError::AlreadyLoggedInElsewhere => codes::RESULT_ALREADY_LOGGED_IN_ELSEWHERE,
        SteamError::Suspended => codes::RESULT_SUSPENDED,
        SteamError::Cancelled => codes::RESULT_CANCELLED,
        SteamError::DataCorruption => codes::RESULT_DATA_CORRUPTION,
        SteamError::DiskFull => codes::RESULT_DISK_FULL,
        SteamError::RemoteCallFailed => codes::RESULT_REMOTE_CALL_FAILED,
        _ => codes::RESULT_FAIL,
    }
}

/// Map a call outcome onto EResult: `Ok` is `RESULT_OK`, errors keep their
/// own code.
pub fn result_code(result: Result<(), SteamError>) -> i64 {
    match result {
        Ok(()) => codes::RESULT_OK,
        Err(err) => steam_error_code(err),
    }
}

/// Split an init error into the numeric status and the human-readable
/// message for the `steam_init_ex` dictionary.
pub fn init_error_parts(err: &SteamAPIInitError) -> (i64, String) {
    match err {
        SteamAPIInitError::FailedGeneric(msg) => (codes::INIT_RESULT_FAILED_GENERIC, msg.clone()),
        SteamAPIInitError::NoSteamClient(msg) => (codes::INIT_RESULT_NO_STEAM_CLIENT, msg.clone()),
        SteamAPIInitError::VersionMismatch(msg) => {
            (codes::INIT_RESULT_VERSION_MISMATCH, msg.clone())
        }
        _ => (codes::INIT_RESULT_FAILED_GENERIC, format!("{err:?}")),
    }
}

/// EAuthSessionResponse code for a ticket-validation outcome.
pub fn validate_response_code(response: &Result<(), AuthSessionValidateError>) -> i64 {
    match response {
        Ok(()) => codes::AUTH_SESSION_RESPONSE_OK,
        Err(AuthSessionValidateError::UserNotConnectedToSteam) => {
            codes::AUTH_SESSION_RESPONSE_USER_NOT_CONNECTED_TO_STEAM
        }
        Err(AuthSessionValidateError::NoLicenseOrExpired) => {
            codes::AUTH_SESSION_RESPONSE_NO_LICENSE_OR_EXPIRED
        }
        Err(AuthSessionValidateError::VACBanned) => codes::AUTH_SESSION_RESPONSE_VAC_BANNED,
        Err(AuthSessionValidateError::LoggedInElseWhere) => {
            codes::AUTH_SESSION_RESPONSE_LOGGED_IN_ELSEWHERE
        }
        Err(AuthSessionValidateError::VACCheckTimedOut) => {
            codes::AUTH_SESSION_RESPONSE_VAC_CHECK_TIMED_OUT
        }
        Err(AuthSessionValidateError::AuthTicketCancelled) => {
            codes::AUTH_SESSION_RESPONSE_AUTH_TICKET_CANCELED
        }
        Err(AuthSessionValidateError::AuthTicketInvalidAlreadyUsed) => {
            codes::AUTH_SESSION_RESPONSE_AUTH_TICKET_INVALID_ALREADY_USED
        }
        Err(AuthSessionValidateError::AuthTicketInvalid) => {
            codes::AUTH_SESSION_RESPONSE_AUTH_TICKET_INVALID
        }
        Err(AuthSessionValidateError::PublisherIssuedBan) => {
            codes::AUTH_SESSION_RESPONSE_PUBLISHER_ISSUED_BAN
        }
        Err(_) => codes::AUTH_SESSION_RESPONSE_AUTH_TICKET_INVALID,
    }
}

/// EBeginAuthSessionResult code for a `begin_auth_session` outcome.
pub fn begin_auth_code(result: Result<(), AuthSessionError>) -> i64 {
    match result {
        Ok(()) => codes::BEGIN_AUTH_SESSION_RESULT_OK,
        Err(AuthSessionError::InvalidTicket) => codes::BEGIN_AUTH_SESSION_RESULT_INVALID_TICKET,
        Err(AuthSessionError::DuplicateRequest) => {
            codes::BEGIN_AUTH_SESSION_RESULT_DUPLICATE_REQUEST
        }
        Err(AuthSessionError::InvalidVersion) => codes::BEGIN_AUTH_SESSION_RESULT_INVALID_VERSION,
        Err(AuthSessionError::GameMismatch) => codes::BEGIN_AUTH_SESSION_RESULT_GAME_MISMATCH,
        Err(AuthSessionError::ExpiredTicket) => codes::BEGIN_AUTH_SESSION_RESULT_EXPIRED_TICKET,
        Err(_) => codes::BEGIN_AUTH_SESSION_RESULT_INVALID_TICKET,
    }
}

/// EChatMemberStateChange bit for a lobby membership change.
pub fn chat_member_change_bits(change: ChatMemberStateChange) -> i64 {
    match change {
        ChatMemberStateChange::Entered => codes::CHAT_MEMBER_STATE_CHANGE_ENTERED,
        ChatMemberStateChange::Left => codes::CHAT_MEMBER_STATE_CHANGE_LEFT,
        ChatMemberStateChange::Disconnected => codes::CHAT_MEMBER_STATE_CHANGE_DISCONNECTED,
        ChatMemberStateChange::Kicked => codes::CHAT_MEMBER_STATE_CHANGE_KICKED,
        ChatMemberStateChange::Banned => codes::CHAT_MEMBER_STATE_CHANGE_BANNED,
        _ => codes::CHAT_MEMBER_STATE_CHANGE_LEFT,
    }
}

/// EPersonaState code for a friend's online state.
pub fn persona_state_code(state: FriendState) -> i64 {
    match state {
        FriendState::Offline => codes::PERSONA_STATE_OFFLINE,
        FriendState::Online => codes::PERSONA_STATE_ONLINE,
        FriendState::Busy => codes::PERSONA_STATE_BUSY,
        FriendState::Away => codes::PERSONA_STATE_AWAY,
        FriendState::Snooze => codes::PERSONA_STATE_SNOOZE,
        FriendState::LookingToTrade => codes::PERSONA_STATE_LOOKING_TO_TRADE,
        FriendState::LookingToPlay => codes::PERSONA_STATE_LOOKING_TO_PLAY,
        _ => codes::PERSONA_STATE_INVISIBLE,
    }
}

pub fn lobby_type_from(value: i64) -> LobbyType {
    match value {
        codes::LOBBY_TYPE_PRIVATE => LobbyType::Private,
        codes::LOBBY_TYPE_FRIENDS_ONLY => LobbyType::FriendsOnly,
        codes::LOBBY_TYPE_INVISIBLE => LobbyType::Invisible,
        _ => LobbyType::Public,
    }
}

pub fn send_type_from(value: i64) -> SendType {
    match value {
        codes::P2P_SEND_UNRELIABLE => SendType::Unreliable,
        codes::P2P_SEND_UNRELIABLE_NO_DELAY => SendType::UnreliableNoDelay,
        codes::P2P_SEND_RELIABLE_WITH_BUFFERING => SendType::ReliableWithBuffering,
        _ => SendType::Reliable,
    }
}

pub fn sort_method_from(value: i64) -> LeaderboardSortMethod {
    match value {
        codes::LEADERBOARD_SORT_METHOD_DESCENDING => LeaderboardSortMethod::Descending,
        _ => LeaderboardSortMethod::Ascending,
    }
}

pub fn display_type_from(value: i64) -> LeaderboardDisplayType {
    match value {
        codes::LEADERBOARD_DISPLAY_TYPE_TIME_SECONDS => LeaderboardDisplayType::TimeSeconds,
        codes::LEADERBOARD_DISPLAY_TYPE_TIME_MILLISECONDS => {
            LeaderboardDisplayType::TimeMilliSeconds
        }
        _ => LeaderboardDisplayType::Numeric,
    }
}

pub fn data_request_from(value: i64) -> LeaderboardDataRequest {
    match value {
        codes::LEADERBOARD_DATA_REQUEST_GLOBAL_AROUND_USER => {
            LeaderboardDataRequest::GlobalAroundUser
        }
        codes::LEADERBOARD_DATA_REQUEST_FRIENDS => LeaderboardDataRequest::Friends,
        _ => LeaderboardDataRequest::Global,
    }
}

pub fn upload_method_from(keep_best: bool) -> UploadScoreMethod {
    if keep_best {
        UploadScoreMethod::KeepBest
    } else {
        UploadScoreMethod::ForceUpdate
    }
}

pub fn visibility_from(value: i64) -> PublishedFileVisibility {
    match value {
        codes::PUBLISHED_FILE_VISIBILITY_PUBLIC => PublishedFileVisibility::Public,
        codes::PUBLISHED_FILE_VISIBILITY_FRIENDS_ONLY => PublishedFileVisibility::FriendsOnly,
        codes::PUBLISHED_FILE_VISIBILITY_UNLISTED => PublishedFileVisibility::Unlisted,
        _ => PublishedFileVisibility::Private,
    }
}

/// EWorkshopFileType from its documented numbering.
pub fn file_type_from(value: i64) -> FileType {
    match value {
        1 => FileType::Microtransaction,
        2 => FileType::Collection,
        3 => FileType::Art,
        4 => FileType::Video,
        5 => FileType::Screenshot,
        6 => FileType::Game,
        7 => FileType::Software,
        8 => FileType::Concept,
        9 => FileType::WebGuide,
        10 => FileType::IntegratedGuide,
        11 => FileType::Merch,
        12 => FileType::ControllerBinding,
        13 => FileType::SteamworksAccessInvite,
        14 => FileType::SteamVideo,
        15 => FileType::GameManagedItem,
        _ => FileType::Community,
    }
}

/// EUGCQuery from its documented numbering.
pub fn ugc_query_type_from(value: i64) -> UGCQueryType {
    match value {
        0 => UGCQueryType::RankedByVote,
        2 => UGCQueryType::AcceptedForGameRankedByAcceptanceDate,
        3 => UGCQueryType::RankedByTrend,
        4 => UGCQueryType::FavoritedByFriendsRankedByPublicationDate,
        5 => UGCQueryType::CreatedByFriendsRankedByPublicationDate,
        6 => UGCQueryType::RankedByNumTimesReported,
        7 => UGCQueryType::CreatedByFollowedUsersRankedByPublicationDate,
        8 => UGCQueryType::NotYetRated,
        9 => UGCQueryType::RankedByTotalVotesAsc,
        10 => UGCQueryType::RankedByVotesUp,
        11 => UGCQueryType::RankedByTextSearch,
        12 => UGCQueryType::RankedByTotalUniqueSubscriptions,
        13 => UGCQueryType::RankedByPlaytimeTrend,
        14 => UGCQueryType::RankedByTotalPlaytime,
        15 => UGCQueryType::RankedByAveragePlaytimeTrend,
        16 => UGCQueryType::RankedByLifetimeAveragePlaytime,
        17 => UGCQueryType::RankedByPlaytimeSessionsTrend,
        18 => UGCQueryType::RankedByLifetimePlaytimeSessions,
        _ => UGCQueryType::RankedByPublicationDate,
    }
}

/// EUGCMatchingUGCType from its documented numbering.
pub fn ugc_type_from(value: i64) -> UGCType {
    match value {
        0 => UGCType::Items,
        1 => UGCType::ItemsMtx,
        2 => UGCType::ItemsReadyToUse,
        3 => UGCType::Collections,
        4 => UGCType::Artwork,
        5 => UGCType::Videos,
        6 => UGCType::Screenshots,
        7 => UGCType::AllGuides,
        8 => UGCType::WebGuides,
        9 => UGCType::IntegratedGuides,
        10 => UGCType::UsableInGame,
        11 => UGCType::ControllerBindings,
        12 => UGCType::GameManagedItems,
        _ => UGCType::All,
    }
}

/// EUserUGCList from its documented numbering. `WillVoteLater` is
/// deprecated upstream but still a valid wire value.
#[allow(deprecated)]
pub fn user_list_from(value: i64) -> UserList {
    match value {
        1 => UserList::VotedOn,
        2 => UserList::VotedUp,
        3 => UserList::VotedDown,
        4 => UserList::WillVoteLater,
        5 => UserList::Favorited,
        6 => UserList::Subscribed,
        7 => UserList::UsedOrPlayed,
        8 => UserList::Followed,
        _ => UserList::Published,
    }
}

/// EUserUGCListSortOrder from its documented numbering.
pub fn user_list_order_from(value: i64) -> UserListOrder {
    match value {
        1 => UserListOrder::CreationOrderAsc,
        2 => UserListOrder::TitleAsc,
        3 => UserListOrder::LastUpdatedDesc,
        4 => UserListOrder::SubscriptionDateDesc,
        5 => UserListOrder::VoteScoreDesc,
        6 => UserListOrder::ForModeration,
        _ => UserListOrder::CreationOrderDesc,
    }
}

pub fn notification_position_from(value: i64) -> NotificationPosition {
    match value {
        0 => NotificationPosition::TopLeft,
        1 => NotificationPosition::TopRight,
        2 => NotificationPosition::BottomLeft,
        _ => NotificationPosition::BottomRight,
    }
}

pub fn floating_input_mode_from(value: i64) -> FloatingGamepadTextInputMode {
    match value {
        1 => FloatingGamepadTextInputMode::MultipleLines,
        2 => FloatingGamepadTextInputMode::Email,
        3 => FloatingGamepadTextInputMode::Numeric,
        _ => FloatingGamepadTextInputMode::SingleLine,
    }
}

pub fn overlay_store_flag_from(value: i64) -> OverlayToStoreFlag {
    match value {
        1 => OverlayToStoreFlag::AddToCart,
        2 => OverlayToStoreFlag::AddToCartAndShow,
        _ => OverlayToStoreFlag::None,
    }
}

/// EFriendFlags bit field, composed bit by bit so unknown bits drop out.
pub fn friend_flags_from(bits: i64) -> FriendFlags {
    let mut flags = FriendFlags::empty();
    if bits & 0x0001 != 0 {
        flags |= FriendFlags::BLOCKED;
    }
    if bits & 0x0002 != 0 {
        flags |= FriendFlags::FRIENDSHIP_REQUESTED;
    }
    if bits & 0x0004 != 0 {
        flags |= FriendFlags::IMMEDIATE;
    }
    if bits & 0x0008 != 0 {
        flags |= FriendFlags::CLAN_MEMBER;
    }
    if bits & 0x0010 != 0 {
        flags |= FriendFlags::ON_GAME_SERVER;
    }
    if bits & 0x0080 != 0 {
        flags |= FriendFlags::REQUESTING_FRIENDSHIP;
    }
    if bits & 0x0100 != 0 {
        flags |= FriendFlags::REQUESTING_INFO;
    }
    if bits & 0x0200 != 0 {
        flags |= FriendFlags::IGNORED;
    }
    if bits & 0x0400 != 0 {
        flags |= FriendFlags::IGNORED_FRIEND;
    }
    if bits & 0x1000 != 0 {
        flags |= FriendFlags::CHAT_MEMBER;
    }
    flags
}

/// EItemUpdateStatus code for an in-flight Workshop upload.
pub fn update_status_code(status: UpdateStatus) -> i64 {
    match status {
        UpdateStatus::Invalid => 0,
        UpdateStatus::PreparingConfig => 1,
        UpdateStatus::PreparingContent => 2,
        UpdateStatus::UploadingContent => 3,
        UpdateStatus::UploadingPreviewFile => 4,
        UpdateStatus::CommittingChanges => 5,
        _ => 0,
    }
}

/// Friend info dictionary: "id", "name", "state", and when the friend is
/// in a game, a nested "game" dictionary.
pub fn friend_to_dict(friend: &Friend<ClientManager>) -> VarDictionary {
    let mut dict = VarDictionary::new();
    dict.set("id", friend.id().raw() as i64);
    dict.set("name", friend.name());
    dict.set("state", persona_state_code(friend.state()));
    if let Some(game) = friend.game_played() {
        dict.set("game", friend_game_to_dict(&game));
    }
    dict
}

fn friend_game_to_dict(game: &FriendGame) -> VarDictionary {
    let mut dict = VarDictionary::new();
    dict.set("game_id", game.game.raw() as i64);
    dict.set("game_address", game.game_address.to_string());
    dict.set("game_port", game.game_port as i64);
    dict.set("query_port", game.query_port as i64);
    dict.set("lobby_id", game.lobby.raw() as i64);
    dict
}

/// Collect a completed Workshop query into plain rows, skipping entries the
/// SDK marked unavailable.
pub fn collect_query_results(results: &QueryResults) -> Vec<WorkshopItemData> {
    results
        .iter()
        .flatten()
        .map(|item| WorkshopItemData {
            published_file_id: item.published_file_id.0,
            title: item.title.clone(),
            description: item.description.clone(),
            owner_steam_id: item.owner.raw(),
            time_created: item.time_created,
            time_updated: item.time_updated,
            banned: item.banned,
            accepted_for_use: item.accepted_for_use,
            tags: item.tags.clone(),
            file_size: item.file_size,
            url: item.url.clone(),
            num_upvotes: item.num_upvotes,
            num_downvotes: item.num_downvotes,
            score: item.score,
            num_children: item.num_children,
        })
        .collect()
}

/// Workshop row dictionary, one key per `WorkshopItemData` field.
pub fn workshop_item_to_dict(item: &WorkshopItemData) -> VarDictionary {
    let mut dict = VarDictionary::new();
    dict.set("published_file_id", item.published_file_id as i64);
    dict.set("title", item.title.as_str());
    dict.set("description", item.description.as_str());
    dict.set("owner_steam_id", item.owner_steam_id as i64);
    dict.set("time_created", item.time_created as i64);
    dict.set("time_updated", item.time_updated as i64);
    dict.set("banned", item.banned);
    dict.set("accepted_for_use", item.accepted_for_use);
    dict.set(
        "tags",
        item.tags.iter().map(GString::from).collect::<PackedStringArray>(),
    );
    dict.set("file_size", item.file_size as i64);
    dict.set("url", item.url.as_str());
    dict.set("num_upvotes", item.num_upvotes as i64);
    dict.set("num_downvotes", item.num_downvotes as i64);
    dict.set("score", item.score);
    dict.set("num_children", item.num_children as i64);
    dict
}

/// Leaderboard row dictionary: "steam_id", "global_rank", "score",
/// "details".
pub fn leaderboard_entry_to_dict(entry: &LeaderboardEntryData) -> VarDictionary {
    let mut dict = VarDictionary::new();
    dict.set("steam_id", entry.steam_id as i64);
    dict.set("global_rank", entry.global_rank);
    dict.set("score", entry.score);
    dict.set("details", PackedInt32Array::from(entry.details.as_slice()));
    dict
}

// The dictionary builders need a live engine binding, so only the pure
// code mappers are covered here; the builders are exercised in-engine.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_errors_map_to_documented_eresult_values() {
        assert_eq!(steam_error_code(SteamError::Generic), 2);
        assert_eq!(steam_error_code(SteamError::NoConnection), 3);
        assert_eq!(steam_error_code(SteamError::InvalidPassword), 5);
        assert_eq!(steam_error_code(SteamError::FileNotFound), 9);
        assert_eq!(steam_error_code(SteamError::AccessDenied), 15);
        assert_eq!(steam_error_code(SteamError::Timeout), 16);
        assert_eq!(steam_error_code(SteamError::LimitExceeded), 25);
        assert_eq!(steam_error_code(SteamError::IOFailure), 37);
        assert_eq!(steam_error_code(SteamError::Cancelled), 52);
        assert_eq!(steam_error_code(SteamError::RemoteCallFailed), 55);
    }

    #[test]
    fn ok_outcome_is_result_ok() {
        assert_eq!(result_code(Ok(())), codes::RESULT_OK);
        assert_eq!(result_code(Err(SteamError::Busy)), codes::RESULT_BUSY);
    }

    #[test]
    fn validate_response_covers_the_full_auth_session_range() {
        use AuthSessionValidateError as E;
        assert_eq!(validate_response_code(&Ok(())), 0);
        assert_eq!(validate_response_code(&Err(E::UserNotConnectedToSteam)), 1);
        assert_eq!(validate_response_code(&Err(E::NoLicenseOrExpired)), 2);
        assert_eq!(validate_response_code(&Err(E::VACBanned)), 3);
        assert_eq!(validate_response_code(&Err(E::LoggedInElseWhere)), 4);
        assert_eq!(validate_response_code(&Err(E::VACCheckTimedOut)), 5);
        assert_eq!(validate_response_code(&Err(E::AuthTicketCancelled)), 6);
        assert_eq!(
            validate_response_code(&Err(E::AuthTicketInvalidAlreadyUsed)),
            7
        );
        assert_eq!(validate_response_code(&Err(E::AuthTicketInvalid)), 8);
        assert_eq!(validate_response_code(&Err(E::PublisherIssuedBan)), 9);
    }

    #[test]
    fn begin_auth_outcomes_map_to_documented_values() {
        use AuthSessionError as E;
        assert_eq!(begin_auth_code(Ok(())), 0);
        assert_eq!(begin_auth_code(Err(E::InvalidTicket)), 1);
        assert_eq!(begin_auth_code(Err(E::DuplicateRequest)), 2);
        assert_eq!(begin_auth_code(Err(E::InvalidVersion)), 3);
        assert_eq!(begin_auth_code(Err(E::GameMismatch)), 4);
        assert_eq!(begin_auth_code(Err(E::ExpiredTicket)), 5);
    }

    #[test]
    fn chat_member_changes_are_distinct_bits() {
        let bits = [
            chat_member_change_bits(ChatMemberStateChange::Entered),
            chat_member_change_bits(ChatMemberStateChange::Left),
            chat_member_change_bits(ChatMemberStateChange::Disconnected),
            chat_member_change_bits(ChatMemberStateChange::Kicked),
            chat_member_change_bits(ChatMemberStateChange::Banned),
        ];
        let mut seen = 0i64;
        for bit in bits {
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
    }

    #[test]
    fn script_ints_select_the_matching_sdk_enums() {
        assert!(matches!(lobby_type_from(0), LobbyType::Private));
        assert!(matches!(lobby_type_from(1), LobbyType::FriendsOnly));
        assert!(matches!(lobby_type_from(2), LobbyType::Public));
        assert!(matches!(send_type_from(0), SendType::Unreliable));
        assert!(matches!(send_type_from(2), SendType::Reliable));
        assert!(matches!(
            data_request_from(2),
            LeaderboardDataRequest::Friends
        ));
        assert!(matches!(visibility_from(0), PublishedFileVisibility::Public));
        assert!(matches!(ugc_type_from(3), UGCType::Collections));
        assert!(matches!(user_list_from(6), UserList::Subscribed));
        assert!(matches!(
            floating_input_mode_from(2),
            FloatingGamepadTextInputMode::Email
        ));
    }

    #[test]
    fn unknown_script_ints_degrade_to_the_documented_default() {
        assert!(matches!(lobby_type_from(99), LobbyType::Public));
        assert!(matches!(ugc_query_type_from(-1), UGCQueryType::RankedByPublicationDate));
        assert!(matches!(user_list_from(42), UserList::Published));
        assert!(matches!(
            notification_position_from(77),
            NotificationPosition::BottomRight
        ));
    }

    #[test]
    fn friend_flag_bits_compose_and_unknown_bits_drop() {
        let flags = friend_flags_from(0x0004 | 0x0008);
        assert!(flags.contains(FriendFlags::IMMEDIATE));
        assert!(flags.contains(FriendFlags::CLAN_MEMBER));
        assert!(!flags.contains(FriendFlags::BLOCKED));
        // 0x0020 has no EFriendFlags meaning; it must not leak through.
        assert_eq!(friend_flags_from(0x0020), FriendFlags::empty());
        assert_eq!(friend_flags_from(0), FriendFlags::empty());
    }

    #[test]
    fn upload_method_tracks_keep_best() {
        assert!(matches!(upload_method_from(true), UploadScoreMethod::KeepBest));
        assert!(matches!(
            upload_method_from(false),
            UploadScoreMethod::ForceUpdate
        ));
    }
}
