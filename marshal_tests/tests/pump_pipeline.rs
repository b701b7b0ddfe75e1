// End-to-end tests for the event-pump pipeline.
//
// Each test plays the role of the SDK side (pushing events through cloned
// sinks, the way registered callback closures do) and of the facade side
// (pumping once per frame), and verifies the delivery guarantees the
// signals rely on: FIFO order, exactly-once delivery, verbatim fields.

use std::thread;

use marshal_tests::TestPump;
use steambridge_core::event::{LeaderboardEntryData, SteamEvent, WorkshopItemData};
use steambridge_core::handles::HandleCache;
use steambridge_core::{codes, ids};

/// A realistic individual 64-bit Steam ID (universe 1, type individual,
/// desktop instance).
const STEAM_ID: u64 = 76_561_197_990_323_990;

#[test]
fn lobby_flow_arrives_in_order_and_exactly_once() {
    let pump = TestPump::new();
    let sink = pump.sink();

    // A typical create-and-configure frame: creation call-result first,
    // then the data updates the SDK raises for the new lobby.
    let lobby_id = 109_775_241_000_000_001;
    sink.push(SteamEvent::LobbyCreated {
        result: codes::RESULT_OK,
        lobby_id,
    });
    sink.push(SteamEvent::LobbyDataUpdate {
        lobby_id,
        member_id: STEAM_ID,
        success: true,
    });
    sink.push(SteamEvent::LobbyChatUpdate {
        lobby_id,
        changed_id: STEAM_ID,
        making_change_id: STEAM_ID,
        chat_state: codes::CHAT_MEMBER_STATE_CHANGE_ENTERED,
    });

    let frame = pump.pump();
    assert_eq!(frame.len(), 3);
    assert!(matches!(frame[0], SteamEvent::LobbyCreated { .. }));
    assert!(matches!(frame[1], SteamEvent::LobbyDataUpdate { .. }));
    assert!(matches!(frame[2], SteamEvent::LobbyChatUpdate { .. }));

    // Next frame: nothing left.
    assert!(pump.pump().is_empty());
}

#[test]
fn events_pushed_between_frames_arrive_next_frame() {
    let pump = TestPump::new();
    let sink = pump.sink();

    sink.push(SteamEvent::SteamServerConnected);
    assert_eq!(pump.pump().len(), 1);

    sink.push(SteamEvent::SteamServerDisconnected {
        reason: codes::RESULT_NO_CONNECTION,
    });
    sink.push(SteamEvent::SteamServerConnectFailed {
        reason: codes::RESULT_NO_CONNECTION,
        retrying: true,
    });
    let frame = pump.pump();
    assert_eq!(frame.len(), 2);
    assert_eq!(
        frame[0],
        SteamEvent::SteamServerDisconnected {
            reason: codes::RESULT_NO_CONNECTION,
        }
    );
}

#[test]
fn sinks_are_send_and_feed_one_queue() {
    // SDK callbacks are normally pumped on the main thread, but the sink
    // must not care where a push comes from.
    let pump = TestPump::new();
    let handles: Vec<_> = (0u64..4)
        .map(|i| {
            let sink = pump.sink();
            thread::spawn(move || {
                for j in 0u64..25 {
                    sink.push(SteamEvent::P2PSessionRequest {
                        remote_id: i * 100 + j,
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(pump.pump().len(), 100);
    assert!(pump.pump().is_empty());
}

#[test]
fn leaderboard_slot_flow_with_default_handle() {
    // The facade stores opaque leaderboard values in slots and scripts see
    // 1-based slot handles, with 0 meaning "most recently found". Model
    // that flow: find, cache, then resolve an upload with handle 0.
    let pump = TestPump::new();
    let sink = pump.sink();
    let mut cache = HandleCache::new();
    let mut slots: Vec<&str> = Vec::new();

    // find_leaderboard call-result.
    slots.push("HighScores");
    let handle = slots.len() as u64;
    sink.push(SteamEvent::LeaderboardFindResult {
        handle,
        found: true,
    });

    // The pump caches the handle when emitting the find result.
    for event in pump.pump() {
        if let SteamEvent::LeaderboardFindResult { handle, found: true } = event {
            cache.set_leaderboard(handle);
        }
    }

    // An upload passing 0 resolves to the slot just found.
    let resolved = cache.resolve_leaderboard(0).unwrap();
    assert_eq!(slots[resolved as usize - 1], "HighScores");

    // A second find overwrites the default.
    slots.push("SpeedRuns");
    cache.set_leaderboard(slots.len() as u64);
    assert_eq!(cache.resolve_leaderboard(0), Some(2));
    // An explicit handle still wins.
    assert_eq!(cache.resolve_leaderboard(1), Some(1));
}

#[test]
fn leaderboard_rows_cross_the_pipeline_verbatim() {
    let pump = TestPump::new();
    let sink = pump.sink();

    let entries = vec![
        LeaderboardEntryData {
            steam_id: STEAM_ID,
            global_rank: 1,
            score: 9000,
            details: vec![42, -7],
        },
        LeaderboardEntryData {
            steam_id: STEAM_ID + 1,
            global_rank: 2,
            score: 8999,
            details: vec![],
        },
    ];
    sink.push(SteamEvent::LeaderboardScoresDownloaded {
        handle: 1,
        entries: entries.clone(),
    });

    match pump.pump().as_slice() {
        [SteamEvent::LeaderboardScoresDownloaded { handle, entries: got }] => {
            assert_eq!(*handle, 1);
            assert_eq!(*got, entries);
        }
        other => panic!("unexpected frame: {other:?}"),
    }
}

#[test]
fn workshop_burst_survives_json_round_trip() {
    // Serialize a whole pumped frame and bring it back; field-for-field
    // equality catches any lossy number handling in the vocabulary.
    let pump = TestPump::new();
    let sink = pump.sink();

    sink.push(SteamEvent::ItemCreated {
        result: codes::RESULT_OK,
        published_file_id: 3_121_000_777,
        needs_legal_agreement: false,
    });
    sink.push(SteamEvent::UgcQueryCompleted {
        total: 1,
        results: vec![WorkshopItemData {
            published_file_id: 3_121_000_777,
            title: "Sample map".into(),
            description: "A map".into(),
            owner_steam_id: STEAM_ID,
            time_created: 1_700_000_000,
            time_updated: 1_700_100_000,
            banned: false,
            accepted_for_use: true,
            tags: vec!["maps".into(), "co-op".into()],
            file_size: 4096,
            url: String::new(),
            num_upvotes: 10,
            num_downvotes: 1,
            score: 0.9,
            num_children: 0,
        }],
    });

    let frame = pump.pump();
    let json = serde_json::to_string(&frame).unwrap();
    let back: Vec<SteamEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, frame);
}

#[test]
fn lobby_ids_classify_as_lobbies() {
    // A lobby id as the SDK composes it: public universe, chat account
    // type, lobby instance flag, 32-bit account id.
    let lobby_id = (u64::from(ids::UNIVERSE_PUBLIC) << 56)
        | (u64::from(ids::ACCOUNT_TYPE_CHAT) << 52)
        | (u64::from(ids::INSTANCE_FLAG_LOBBY) << 32)
        | 12_345_678;
    assert!(ids::is_lobby(lobby_id));
    assert!(ids::is_chat_account(lobby_id));
    assert!(!ids::is_individual_account(lobby_id));
    assert_eq!(ids::steam_id_32(lobby_id), 12_345_678);

    assert!(ids::is_individual_account(STEAM_ID));
    assert!(!ids::is_lobby(STEAM_ID));
}
