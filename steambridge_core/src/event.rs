// Asynchronous Steam notifications and the per-frame queue they flow through.
//
// The Steamworks API delivers asynchronous responses two ways: recurring
// callbacks (unsolicited, e.g. an overlay toggle) and one-shot call-results
// (correlated to a prior call, e.g. a lobby creation). The bridge registers
// a closure for every type it forwards; each closure translates the SDK
// payload into a `SteamEvent` and pushes it into an `EventSink`. Once per
// frame the facade drains the matching `EventQueue` and emits exactly one
// Godot signal per event, fields copied verbatim.
//
// The queue is mpsc-backed. Not for cross-thread delivery — everything runs
// on the engine's single logical thread — but because the registration
// closures fire re-entrantly inside the SDK's callback pump, where the
// facade is already mutably borrowed. A channel sender needs no access to
// the facade at all.
//
// All event types derive `Serialize`/`Deserialize` so tests (and debug
// logging) can round-trip them as JSON.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// One downloaded leaderboard row, fields copied verbatim from the SDK.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntryData {
    pub steam_id: u64,
    pub global_rank: i32,
    pub score: i32,
    pub details: Vec<i32>,
}

/// One Workshop query row, fields copied verbatim from the SDK.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkshopItemData {
    pub published_file_id: u64,
    pub title: String,
    pub description: String,
    pub owner_steam_id: u64,
    pub time_created: u32,
    pub time_updated: u32,
    pub banned: bool,
    pub accepted_for_use: bool,
    pub tags: Vec<String>,
    pub file_size: u32,
    pub url: String,
    pub num_upvotes: u32,
    pub num_downvotes: u32,
    pub score: f32,
    pub num_children: u32,
}

/// An asynchronous Steam notification, translated to plain Rust fields.
///
/// One variant per callback or call-result type the bridge registers for.
/// Variant and field names follow the signal names the facade emits, which
/// in turn follow the SDK's own callback naming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SteamEvent {
    // Friends
    OverlayToggled {
        active: bool,
    },
    PersonaStateChange {
        steam_id: u64,
        flags: i64,
    },
    JoinRequested {
        lobby_id: u64,
        friend_id: u64,
    },

    // Matchmaking callbacks
    LobbyDataUpdate {
        lobby_id: u64,
        member_id: u64,
        success: bool,
    },
    LobbyChatUpdate {
        lobby_id: u64,
        changed_id: u64,
        making_change_id: u64,
        chat_state: i64,
    },

    // Matchmaking call-results
    LobbyCreated {
        result: i64,
        lobby_id: u64,
    },
    LobbyJoined {
        lobby_id: u64,
        response: i64,
    },
    LobbyMatchList {
        lobbies: Vec<u64>,
    },

    // Networking
    P2PSessionRequest {
        remote_id: u64,
    },
    P2PSessionConnectFail {
        remote_id: u64,
        session_error: i64,
    },

    // User
    SteamServerConnected,
    SteamServerDisconnected {
        reason: i64,
    },
    SteamServerConnectFailed {
        reason: i64,
        retrying: bool,
    },
    GetAuthSessionTicketResponse {
        result: i64,
    },
    ValidateAuthTicketResponse {
        auth_id: u64,
        response: i64,
        owner_id: u64,
    },

    // User Stats callbacks
    UserStatsReceived {
        game_id: u64,
        user_id: u64,
        result: i64,
    },
    UserStatsStored {
        game_id: u64,
        result: i64,
    },
    UserAchievementStored {
        game_id: u64,
        achievement_name: String,
        current_progress: u32,
        max_progress: u32,
    },

    // User Stats call-results
    LeaderboardFindResult {
        handle: u64,
        found: bool,
    },
    LeaderboardScoreUploaded {
        success: bool,
        handle: u64,
        score: i32,
        score_changed: bool,
        global_rank_new: i32,
        global_rank_previous: i32,
    },
    LeaderboardScoresDownloaded {
        handle: u64,
        entries: Vec<LeaderboardEntryData>,
    },
    // UGC callbacks
    ItemDownloaded {
        app_id: u32,
        published_file_id: u64,
        result: i64,
    },

    // UGC call-results
    ItemCreated {
        result: i64,
        published_file_id: u64,
        needs_legal_agreement: bool,
    },
    ItemUpdated {
        result: i64,
        needs_legal_agreement: bool,
    },
    ItemSubscribed {
        result: i64,
        published_file_id: u64,
    },
    ItemUnsubscribed {
        result: i64,
        published_file_id: u64,
    },
    UgcQueryCompleted {
        total: u32,
        results: Vec<WorkshopItemData>,
    },

    // Utils
    FloatingGamepadTextInputDismissed,
}

impl SteamEvent {
    /// Serialize the event as a JSON string, for logging and debugging.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Producer half of the pump queue. Cloned into every registration closure.
///
/// Pushing never blocks and never fails loudly: if the facade (and with it
/// the receiver) is gone, late SDK callbacks have nowhere to go and are
/// dropped, which matches shutdown semantics.
#[derive(Clone)]
pub struct EventSink {
    tx: Sender<SteamEvent>,
}

impl EventSink {
    pub fn push(&self, event: SteamEvent) {
        let _ = self.tx.send(event);
    }
}

/// Consumer half of the pump queue, owned by the facade and drained once
/// per frame.
pub struct EventQueue {
    rx: Receiver<SteamEvent>,
}

impl EventQueue {
    /// Create a connected queue/sink pair.
    pub fn new() -> (EventQueue, EventSink) {
        let (tx, rx) = mpsc::channel();
        (EventQueue { rx }, EventSink { tx })
    }

    /// Remove and return every pending event, oldest first.
    ///
    /// A second drain without intervening pushes returns an empty vec —
    /// each event is delivered exactly once.
    pub fn drain(&self) -> Vec<SteamEvent> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_fifo_order() {
        let (queue, sink) = EventQueue::new();
        sink.push(SteamEvent::SteamServerConnected);
        sink.push(SteamEvent::UserStatsStored {
            game_id: 480,
            result: 1,
        });
        sink.push(SteamEvent::OverlayToggled { active: true });

        let events = queue.drain();
        assert_eq!(
            events,
            vec![
                SteamEvent::SteamServerConnected,
                SteamEvent::UserStatsStored {
                    game_id: 480,
                    result: 1,
                },
                SteamEvent::OverlayToggled { active: true },
            ]
        );
    }

    #[test]
    fn each_event_is_delivered_exactly_once() {
        let (queue, sink) = EventQueue::new();
        for i in 0..100 {
            sink.push(SteamEvent::LobbyCreated {
                result: 1,
                lobby_id: i,
            });
        }
        assert_eq!(queue.drain().len(), 100);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn cloned_sinks_feed_the_same_queue() {
        let (queue, sink) = EventQueue::new();
        let other = sink.clone();
        sink.push(SteamEvent::SteamServerConnected);
        other.push(SteamEvent::SteamServerDisconnected { reason: 3 });
        assert_eq!(queue.drain().len(), 2);
    }

    #[test]
    fn push_after_queue_dropped_is_silently_ignored() {
        let (queue, sink) = EventQueue::new();
        drop(queue);
        sink.push(SteamEvent::SteamServerConnected);
    }

    #[test]
    fn steam_ids_survive_json_round_trip_exactly() {
        // A realistic 64-bit individual id — would lose precision if
        // anything routed it through an f64.
        let ev = SteamEvent::PersonaStateChange {
            steam_id: 76_561_197_990_323_990,
            flags: 1,
        };
        let json = ev.to_json().unwrap();
        let back: SteamEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn leaderboard_entries_copied_verbatim() {
        let entry = LeaderboardEntryData {
            steam_id: u64::MAX,
            global_rank: 1,
            score: -5,
            details: vec![3, 1, 4, 1, 5],
        };
        let ev = SteamEvent::LeaderboardScoresDownloaded {
            handle: 7,
            entries: vec![entry.clone()],
        };
        let json = ev.to_json().unwrap();
        let back: SteamEvent = serde_json::from_str(&json).unwrap();
        match back {
            SteamEvent::LeaderboardScoresDownloaded { handle, entries } => {
                assert_eq!(handle, 7);
                assert_eq!(entries, vec![entry]);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
