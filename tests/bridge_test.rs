//! Integration tests for the listener bridge
//!
//! These drive platform callbacks through a bridge and check exactly what
//! reaches the native entry points.

use std::sync::Arc;
use std::thread;
use tts_bridge::native::RecordingEntryPoints;
use tts_bridge::symbols::EntryPoint;
use tts_bridge::{
    BackendHandle, Bridge, InitListener, InitStatus, NativeCall, UtteranceId, UtteranceListener,
};

fn stop(handle: i32, id: &str) -> NativeCall {
    NativeCall::Stop {
        handle: BackendHandle::new(handle),
        utterance_id: UtteranceId::from(id),
    }
}

#[test]
fn test_end_to_end_scenario() {
    let recorder = RecordingEntryPoints::new();
    let bridge = Bridge::new(7, &recorder);

    bridge.on_init(InitStatus::new(0)).unwrap();
    assert_eq!(
        recorder.take(),
        vec![NativeCall::Init {
            handle: BackendHandle::new(7),
            status: InitStatus::new(0),
        }]
    );

    bridge.on_start("utt-1").unwrap();
    assert_eq!(
        recorder.take(),
        vec![NativeCall::Start {
            handle: BackendHandle::new(7),
            utterance_id: UtteranceId::from("utt-1"),
        }]
    );

    bridge.on_stop("utt-1", true).unwrap();
    let calls = recorder.take();
    assert_eq!(calls, vec![stop(7, "utt-1")]);
    let json = serde_json::to_value(&calls[0]).unwrap();
    assert!(json.get("interrupted").is_none());

    bridge.on_done("utt-1").unwrap();
    assert_eq!(
        recorder.take(),
        vec![NativeCall::Done {
            handle: BackendHandle::new(7),
            utterance_id: UtteranceId::from("utt-1"),
        }]
    );
}

#[test]
fn test_ids_pass_through_unchanged() {
    let recorder = RecordingEntryPoints::new();
    let bridge = Bridge::new(1, &recorder);

    let ids = [
        "",
        "utt-1",
        "  padded  ",
        "line\nbreak",
        "Hello 世界",
        "Emoji: 🎤",
        "Accents: café naïve",
        "quote\"and\\slash",
    ];

    for id in ids {
        bridge.on_start(id).unwrap();
        bridge.on_stop(id, false).unwrap();
        bridge.on_done(id).unwrap();
        bridge.on_error(id).unwrap();

        let calls = recorder.take();
        assert_eq!(calls.len(), 4, "one call per notification for {:?}", id);
        let entry_points: Vec<EntryPoint> = calls.iter().map(|c| c.entry_point()).collect();
        assert_eq!(
            entry_points,
            vec![
                EntryPoint::Start,
                EntryPoint::StopRelay,
                EntryPoint::Done,
                EntryPoint::Error
            ]
        );
        for call in &calls {
            assert_eq!(call.utterance_id().map(|u| u.as_str()), Some(id));
        }
    }
}

#[test]
fn test_interrupted_flag_is_unobservable() {
    let recorder = RecordingEntryPoints::new();
    let bridge = Bridge::new(2, &recorder);

    bridge.on_stop("same", true).unwrap();
    let interrupted = recorder.take();
    bridge.on_stop("same", false).unwrap();
    let flushed = recorder.take();

    assert_eq!(interrupted, flushed);
    assert_eq!(
        serde_json::to_string(&interrupted).unwrap(),
        serde_json::to_string(&flushed).unwrap()
    );
}

#[test]
fn test_init_status_not_remapped() {
    let recorder = RecordingEntryPoints::new();
    let bridge = Bridge::new(4, &recorder);

    for code in [0, 1, -1, -2, 99] {
        bridge.on_init(InitStatus::new(code)).unwrap();
    }

    let codes: Vec<i32> = recorder
        .calls()
        .into_iter()
        .map(|call| match call {
            NativeCall::Init { status, .. } => status.code(),
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(codes, vec![0, 1, -1, -2, 99]);
}

#[test]
fn test_handles_do_not_cross() {
    let recorder = Arc::new(RecordingEntryPoints::new());
    let first = Bridge::new(10, Arc::clone(&recorder));
    let second = Bridge::new(20, Arc::clone(&recorder));

    first.on_start("shared").unwrap();
    second.on_start("shared").unwrap();
    second.on_stop("shared", true).unwrap();

    let first_calls = recorder.calls_for(BackendHandle::new(10));
    let second_calls = recorder.calls_for(BackendHandle::new(20));
    assert_eq!(first_calls.len(), 1);
    assert_eq!(second_calls.len(), 2);
    assert_eq!(second_calls[1], stop(20, "shared"));
    assert_eq!(recorder.len(), 3);
}

#[test]
fn test_unregistered_bridge_is_silent() {
    let recorder = RecordingEntryPoints::new();
    let bridges: Vec<_> = (0..5i32).map(|id| Bridge::new(id, &recorder)).collect();
    assert_eq!(bridges.len(), 5);
    assert!(recorder.is_empty());
}

#[test]
fn test_start_without_done() {
    let recorder = RecordingEntryPoints::new();
    let bridge = Bridge::new(3, &recorder);

    bridge.on_start("orphan").unwrap();
    drop(bridge);

    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_callbacks_from_many_threads() {
    let recorder = Arc::new(RecordingEntryPoints::new());
    let bridge = Arc::new(Bridge::new(8, Arc::clone(&recorder)));

    let workers: Vec<_> = (0..4)
        .map(|n| {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || {
                for i in 0..25 {
                    let id = format!("t{}-{}", n, i);
                    bridge.on_start(&id).unwrap();
                    bridge.on_done(&id).unwrap();
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    let calls = recorder.calls();
    assert_eq!(calls.len(), 200);
    assert!(calls.iter().all(|c| c.handle() == BackendHandle::new(8)));
}
