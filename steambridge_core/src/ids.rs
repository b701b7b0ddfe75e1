// Steam ID bit-field helpers.
//
// A 64-bit Steam ID packs four fields:
//
//   bits 56..64  universe        (public = 1)
//   bits 52..56  account type    (individual = 1, clan = 7, chat = 8, ...)
//   bits 32..52  instance        (desktop = 1; chat ids carry flag bits)
//   bits  0..32  account id
//
// The facade exposes these as predicates so scripts can classify an id
// without knowing the layout. Pure bit manipulation, no SDK involvement —
// which also makes this the one part of id handling that is directly
// unit-testable.

/// Account type field values.
pub const ACCOUNT_TYPE_INVALID: u8 = 0;
pub const ACCOUNT_TYPE_INDIVIDUAL: u8 = 1;
pub const ACCOUNT_TYPE_MULTISEAT: u8 = 2;
pub const ACCOUNT_TYPE_GAME_SERVER: u8 = 3;
pub const ACCOUNT_TYPE_ANON_GAME_SERVER: u8 = 4;
pub const ACCOUNT_TYPE_PENDING: u8 = 5;
pub const ACCOUNT_TYPE_CONTENT_SERVER: u8 = 6;
pub const ACCOUNT_TYPE_CLAN: u8 = 7;
pub const ACCOUNT_TYPE_CHAT: u8 = 8;
pub const ACCOUNT_TYPE_CONSOLE_USER: u8 = 9;
pub const ACCOUNT_TYPE_ANON_USER: u8 = 10;

/// Instance field flag marking a chat id as a lobby.
pub const INSTANCE_FLAG_LOBBY: u32 = 0x0004_0000;
/// Instance field flag marking a chat id as a clan chat room.
pub const INSTANCE_FLAG_CLAN: u32 = 0x0008_0000;

/// The public universe (the only one retail clients ever see).
pub const UNIVERSE_PUBLIC: u8 = 1;
/// Instance value for a desktop session.
pub const DESKTOP_INSTANCE: u32 = 1;

/// The low 32 bits: the account id ("Steam ID 32").
pub fn steam_id_32(steam_id: u64) -> u32 {
    (steam_id & 0xFFFF_FFFF) as u32
}

/// The universe field (bits 56..64).
pub fn universe(steam_id: u64) -> u8 {
    (steam_id >> 56) as u8
}

/// The account type field (bits 52..56).
pub fn account_type(steam_id: u64) -> u8 {
    ((steam_id >> 52) & 0xF) as u8
}

/// The instance field (bits 32..52).
pub fn account_instance(steam_id: u64) -> u32 {
    ((steam_id >> 32) & 0xF_FFFF) as u32
}

/// Build a public-universe desktop individual id from an account id.
pub fn individual_id(account_id: u32) -> u64 {
    (u64::from(UNIVERSE_PUBLIC) << 56)
        | (u64::from(ACCOUNT_TYPE_INDIVIDUAL) << 52)
        | (u64::from(DESKTOP_INSTANCE) << 32)
        | u64::from(account_id)
}

/// True for anonymous accounts of either kind (game server or user).
pub fn is_anon_account(steam_id: u64) -> bool {
    let t = account_type(steam_id);
    t == ACCOUNT_TYPE_ANON_GAME_SERVER || t == ACCOUNT_TYPE_ANON_USER
}

/// True for anonymous user accounts specifically.
pub fn is_anon_user_account(steam_id: u64) -> bool {
    account_type(steam_id) == ACCOUNT_TYPE_ANON_USER
}

/// True for chat accounts (lobbies and clan chat rooms included).
pub fn is_chat_account(steam_id: u64) -> bool {
    account_type(steam_id) == ACCOUNT_TYPE_CHAT
}

/// True for clan (Steam group) accounts.
pub fn is_clan_account(steam_id: u64) -> bool {
    account_type(steam_id) == ACCOUNT_TYPE_CLAN
}

/// True for console user pseudo-accounts.
pub fn is_console_user_account(steam_id: u64) -> bool {
    account_type(steam_id) == ACCOUNT_TYPE_CONSOLE_USER
}

/// True for individual user accounts. Console users count as individual,
/// matching the SDK's own classification.
pub fn is_individual_account(steam_id: u64) -> bool {
    let t = account_type(steam_id);
    t == ACCOUNT_TYPE_INDIVIDUAL || t == ACCOUNT_TYPE_CONSOLE_USER
}

/// True when the id names a matchmaking lobby: a chat account whose
/// instance field carries the lobby flag.
pub fn is_lobby(steam_id: u64) -> bool {
    is_chat_account(steam_id) && (account_instance(steam_id) & INSTANCE_FLAG_LOBBY) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // A well-formed public individual id: universe 1, type 1, instance 1.
    const INDIVIDUAL: u64 = 0x0110_0001_0000_0000 | 30_058_262;

    #[test]
    fn individual_id_layout() {
        assert_eq!(individual_id(30_058_262), INDIVIDUAL);
    }

    #[test]
    fn account_id_extraction_is_exact() {
        assert_eq!(steam_id_32(INDIVIDUAL), 30_058_262);
        assert_eq!(steam_id_32(individual_id(u32::MAX)), u32::MAX);
    }

    #[test]
    fn field_accessors() {
        assert_eq!(universe(INDIVIDUAL), UNIVERSE_PUBLIC);
        assert_eq!(account_type(INDIVIDUAL), ACCOUNT_TYPE_INDIVIDUAL);
        assert_eq!(account_instance(INDIVIDUAL), DESKTOP_INSTANCE);
    }

    #[test]
    fn individual_predicates() {
        assert!(is_individual_account(INDIVIDUAL));
        assert!(!is_clan_account(INDIVIDUAL));
        assert!(!is_chat_account(INDIVIDUAL));
        assert!(!is_anon_account(INDIVIDUAL));
        assert!(!is_lobby(INDIVIDUAL));
    }

    #[test]
    fn console_user_counts_as_individual() {
        let id = (u64::from(UNIVERSE_PUBLIC) << 56)
            | (u64::from(ACCOUNT_TYPE_CONSOLE_USER) << 52)
            | 42;
        assert!(is_console_user_account(id));
        assert!(is_individual_account(id));
    }

    #[test]
    fn lobby_requires_chat_type_and_lobby_flag() {
        let lobby = (u64::from(UNIVERSE_PUBLIC) << 56)
            | (u64::from(ACCOUNT_TYPE_CHAT) << 52)
            | (u64::from(INSTANCE_FLAG_LOBBY) << 32)
            | 123_456;
        assert!(is_chat_account(lobby));
        assert!(is_lobby(lobby));

        // Clan chat room: chat type, clan flag — not a lobby.
        let clan_chat = (u64::from(UNIVERSE_PUBLIC) << 56)
            | (u64::from(ACCOUNT_TYPE_CHAT) << 52)
            | (u64::from(INSTANCE_FLAG_CLAN) << 32)
            | 123_456;
        assert!(is_chat_account(clan_chat));
        assert!(!is_lobby(clan_chat));
    }

    #[test]
    fn anon_predicates() {
        let anon_user = (u64::from(UNIVERSE_PUBLIC) << 56)
            | (u64::from(ACCOUNT_TYPE_ANON_USER) << 52);
        let anon_server = (u64::from(UNIVERSE_PUBLIC) << 56)
            | (u64::from(ACCOUNT_TYPE_ANON_GAME_SERVER) << 52);
        assert!(is_anon_account(anon_user));
        assert!(is_anon_user_account(anon_user));
        assert!(is_anon_account(anon_server));
        assert!(!is_anon_user_account(anon_server));
    }
}
