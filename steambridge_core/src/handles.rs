// Last-used handle cache.
//
// Several facade methods take an optional handle argument where `0` means
// "the one from my most recent call" — the wrapped SDK's own optional-
// parameter convention. This module owns that resolution. Cached handles
// have no lifecycle of their own: the next producing call overwrites them,
// and nothing checks them for staleness.

use serde::{Deserialize, Serialize};

/// A single cached handle slot. `0` is the "nothing cached" sentinel,
/// matching the SDK's use of `0` as the invalid handle everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
struct LastUsed(u64);

impl LastUsed {
    fn set(&mut self, handle: u64) {
        self.0 = handle;
    }

    /// An explicit non-zero handle wins; `0` falls back to the cached
    /// value; an empty cache resolves to `None`.
    fn resolve(self, explicit: u64) -> Option<u64> {
        if explicit != 0 {
            Some(explicit)
        } else if self.0 != 0 {
            Some(self.0)
        } else {
            None
        }
    }
}

/// The SDK's `k_cLeaderboardDetailsMax`: the most detail ints one
/// leaderboard entry can carry.
pub const LEADERBOARD_DETAILS_MAX: i64 = 64;

/// Cached handles and identity properties mirroring the most recent calls.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HandleCache {
    leaderboard: LastUsed,
    auth_ticket: LastUsed,
    current_steam_id: u64,
    current_app_id: u32,
    leaderboard_details_max: i64,
}

impl HandleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_leaderboard(&mut self, handle: u64) {
        self.leaderboard.set(handle);
    }

    pub fn leaderboard(&self) -> u64 {
        self.leaderboard.0
    }

    /// Resolve an optional leaderboard handle argument.
    pub fn resolve_leaderboard(&self, explicit: u64) -> Option<u64> {
        self.leaderboard.resolve(explicit)
    }

    pub fn set_auth_ticket(&mut self, handle: u64) {
        self.auth_ticket.set(handle);
    }

    /// Resolve an optional auth ticket handle argument.
    pub fn resolve_auth_ticket(&self, explicit: u64) -> Option<u64> {
        self.auth_ticket.resolve(explicit)
    }

    pub fn set_current_steam_id(&mut self, steam_id: u64) {
        self.current_steam_id = steam_id;
    }

    pub fn current_steam_id(&self) -> u64 {
        self.current_steam_id
    }

    pub fn set_current_app_id(&mut self, app_id: u32) {
        self.current_app_id = app_id;
    }

    pub fn current_app_id(&self) -> u32 {
        self.current_app_id
    }

    /// Set how many detail ints leaderboard downloads request per entry,
    /// clamped to the SDK's valid range. Downloads request none until a
    /// script opts in.
    pub fn set_leaderboard_details_max(&mut self, count: i64) {
        self.leaderboard_details_max = count.clamp(0, LEADERBOARD_DETAILS_MAX);
    }

    pub fn leaderboard_details_max(&self) -> i64 {
        self.leaderboard_details_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_resolves_to_none() {
        let cache = HandleCache::new();
        assert_eq!(cache.resolve_leaderboard(0), None);
        assert_eq!(cache.resolve_auth_ticket(0), None);
    }

    #[test]
    fn explicit_handle_wins_over_cached() {
        let mut cache = HandleCache::new();
        cache.set_leaderboard(7);
        assert_eq!(cache.resolve_leaderboard(9), Some(9));
    }

    #[test]
    fn zero_falls_back_to_last_used() {
        let mut cache = HandleCache::new();
        cache.set_leaderboard(7);
        assert_eq!(cache.resolve_leaderboard(0), Some(7));
    }

    #[test]
    fn producing_call_overwrites_previous_handle() {
        let mut cache = HandleCache::new();
        cache.set_leaderboard(7);
        cache.set_leaderboard(8);
        assert_eq!(cache.resolve_leaderboard(0), Some(8));
        assert_eq!(cache.leaderboard(), 8);
    }

    #[test]
    fn slots_are_independent() {
        let mut cache = HandleCache::new();
        cache.set_auth_ticket(3);
        assert_eq!(cache.resolve_leaderboard(0), None);
        assert_eq!(cache.resolve_auth_ticket(0), Some(3));
    }

    #[test]
    fn details_max_is_clamped_to_the_sdk_range() {
        let mut cache = HandleCache::new();
        assert_eq!(cache.leaderboard_details_max(), 0);
        cache.set_leaderboard_details_max(8);
        assert_eq!(cache.leaderboard_details_max(), 8);
        cache.set_leaderboard_details_max(1000);
        assert_eq!(cache.leaderboard_details_max(), LEADERBOARD_DETAILS_MAX);
        cache.set_leaderboard_details_max(-3);
        assert_eq!(cache.leaderboard_details_max(), 0);
    }

    #[test]
    fn identity_properties_round_trip() {
        let mut cache = HandleCache::new();
        cache.set_current_steam_id(76_561_197_990_323_990);
        cache.set_current_app_id(480);
        assert_eq!(cache.current_steam_id(), 76_561_197_990_323_990);
        assert_eq!(cache.current_app_id(), 480);
    }
}
