use super::*;
use crate::audio::fake::{Call, RecordingBackend};
use crate::error::{QueueError, TransportError};
use crate::queue::QueueStore;
use std::path::PathBuf;

fn queue(names: &[&str]) -> QueueStore {
    let mut q = QueueStore::new("mp3");
    q.load_directory(names.iter().map(|n| PathBuf::from(format!("/music/{n}"))));
    q
}

fn path(name: &str) -> PathBuf {
    PathBuf::from(format!("/music/{name}"))
}

/// Controller with `[a, b, c]` loaded and track `at` playing.
fn playing_abc(at: usize) -> (QueueStore, TransportController, RecordingBackend) {
    let q = queue(&["a.mp3", "b.mp3", "c.mp3"]);
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();
    t.on_replaced(q.len(), &mut b);
    t.play(&q, &mut b, Some(at)).unwrap();
    b.take_calls();
    (q, t, b)
}

#[test]
fn starts_stopped_with_no_position() {
    let t = TransportController::new(false);
    assert_eq!(t.state(), PlaybackState::Stopped);
    assert_eq!(t.current(), None);
    assert!(!t.looped());
}

#[test]
fn play_index_from_stopped_loads_then_plays() {
    let q = queue(&["a.mp3", "b.mp3"]);
    let mut t = TransportController::new(true);
    let mut b = RecordingBackend::new();

    t.play(&q, &mut b, Some(1)).unwrap();

    assert_eq!(t.state(), PlaybackState::Playing);
    assert_eq!(t.current(), Some(1));
    assert_eq!(
        b.calls,
        vec![Call::Load(path("b.mp3")), Call::Play { looped: true }]
    );
}

#[test]
fn play_on_empty_queue_fails() {
    let q = QueueStore::new("mp3");
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();

    assert!(matches!(
        t.play(&q, &mut b, Some(0)),
        Err(TransportError::EmptyQueue)
    ));
    assert_eq!(t.state(), PlaybackState::Stopped);
    assert!(b.calls.is_empty());
}

#[test]
fn play_invalid_index_fails_without_backend_calls() {
    let q = queue(&["a.mp3"]);
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();

    assert!(matches!(
        t.play(&q, &mut b, Some(3)),
        Err(TransportError::Queue(QueueError::OutOfRange { index: 3, len: 1 }))
    ));
    assert!(b.calls.is_empty());
}

#[test]
fn play_without_index_and_without_position_fails() {
    let q = queue(&["a.mp3"]);
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();

    assert!(matches!(
        t.play(&q, &mut b, None),
        Err(TransportError::NothingSelected)
    ));
}

#[test]
fn pause_then_play_resumes_without_reload() {
    let (q, mut t, mut b) = playing_abc(0);

    assert!(t.pause(&mut b));
    assert_eq!(t.state(), PlaybackState::Paused);

    t.play(&q, &mut b, None).unwrap();
    assert_eq!(t.state(), PlaybackState::Playing);
    assert_eq!(t.current(), Some(0));
    assert_eq!(b.calls, vec![Call::Pause, Call::Unpause]);
}

#[test]
fn pause_when_not_playing_is_ignored() {
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();
    assert!(!t.pause(&mut b));
    assert_eq!(t.state(), PlaybackState::Stopped);
    assert!(b.calls.is_empty());
}

#[test]
fn play_without_index_while_playing_restarts_current() {
    let (q, mut t, mut b) = playing_abc(1);
    t.play(&q, &mut b, None).unwrap();
    assert_eq!(
        b.calls,
        vec![Call::Load(path("b.mp3")), Call::Play { looped: false }]
    );
}

#[test]
fn play_index_while_paused_reloads() {
    let (q, mut t, mut b) = playing_abc(0);
    t.pause(&mut b);
    b.take_calls();

    t.play(&q, &mut b, Some(2)).unwrap();
    assert_eq!(t.current(), Some(2));
    assert_eq!(t.state(), PlaybackState::Playing);
    assert_eq!(
        b.calls,
        vec![Call::Load(path("c.mp3")), Call::Play { looped: false }]
    );
}

#[test]
fn next_walks_forward_and_stops_at_the_end() {
    let q = queue(&["a.mp3", "b.mp3", "c.mp3"]);
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();
    t.on_replaced(q.len(), &mut b);
    assert_eq!(t.current(), Some(0));

    assert_eq!(t.next(&q, &mut b).unwrap(), Navigation::Moved(1));
    assert_eq!(q.get(t.current().unwrap()).unwrap().name, "b.mp3");
    assert_eq!(t.next(&q, &mut b).unwrap(), Navigation::Moved(2));
    assert_eq!(q.get(t.current().unwrap()).unwrap().name, "c.mp3");

    b.take_calls();
    assert_eq!(t.next(&q, &mut b).unwrap(), Navigation::Stayed);
    assert_eq!(t.current(), Some(2));
    assert_eq!(t.state(), PlaybackState::Playing);
    assert!(b.calls.is_empty());
}

#[test]
fn prev_at_start_stays_put() {
    let (q, mut t, mut b) = playing_abc(0);
    assert_eq!(t.prev(&q, &mut b).unwrap(), Navigation::Stayed);
    assert_eq!(t.current(), Some(0));
    assert!(b.calls.is_empty());
}

#[test]
fn prev_from_paused_plays_previous() {
    let (q, mut t, mut b) = playing_abc(2);
    t.pause(&mut b);
    b.take_calls();

    assert_eq!(t.prev(&q, &mut b).unwrap(), Navigation::Moved(1));
    assert_eq!(t.state(), PlaybackState::Playing);
    assert_eq!(
        b.calls,
        vec![Call::Load(path("b.mp3")), Call::Play { looped: false }]
    );
}

#[test]
fn navigation_without_position_stays() {
    let q = queue(&["a.mp3"]);
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::new();
    assert_eq!(t.next(&q, &mut b).unwrap(), Navigation::Stayed);
    assert_eq!(t.prev(&q, &mut b).unwrap(), Navigation::Stayed);
}

#[test]
fn failed_load_does_not_advance() {
    let q = queue(&["a.mp3", "b.mp3"]);
    let mut t = TransportController::new(false);
    let mut b = RecordingBackend::failing_on(path("b.mp3"));
    t.on_replaced(q.len(), &mut b);
    t.play(&q, &mut b, Some(0)).unwrap();

    let err = t.next(&q, &mut b).unwrap_err();
    assert!(matches!(err, TransportError::Playback(_)));
    assert_eq!(t.current(), Some(0));
    assert_eq!(t.state(), PlaybackState::Playing);
}

#[test]
fn toggle_loop_twice_restores_flag() {
    let mut t = TransportController::new(false);
    assert!(t.toggle_loop());
    assert!(!t.toggle_loop());
    assert!(!t.looped());
}

#[test]
fn loop_flag_applies_to_later_plays_only() {
    let (q, mut t, mut b) = playing_abc(0);
    t.toggle_loop();
    assert!(b.calls.is_empty());

    t.next(&q, &mut b).unwrap();
    assert_eq!(b.calls.last(), Some(&Call::Play { looped: true }));
}

#[test]
fn removing_current_last_track_falls_back_to_new_last() {
    let (mut q, mut t, mut b) = playing_abc(2);
    let removed = q.remove(2).unwrap();
    t.on_removed(2, q.len(), &mut b);

    assert_eq!(removed.name, "c.mp3");
    assert_eq!(t.current(), Some(1));
    assert_eq!(t.state(), PlaybackState::Playing);
}

#[test]
fn removing_current_track_keeps_index_pointing_at_next() {
    let (mut q, mut t, mut b) = playing_abc(1);
    q.remove(1).unwrap();
    t.on_removed(1, q.len(), &mut b);

    assert_eq!(t.current(), Some(1));
    assert_eq!(q.get(1).unwrap().name, "c.mp3");
}

#[test]
fn removing_earlier_track_keeps_pointing_at_same_track() {
    let (mut q, mut t, mut b) = playing_abc(2);
    q.remove(0).unwrap();
    t.on_removed(0, q.len(), &mut b);

    assert_eq!(t.current(), Some(1));
    assert_eq!(q.get(1).unwrap().name, "c.mp3");
}

#[test]
fn removing_later_track_leaves_position() {
    let (mut q, mut t, mut b) = playing_abc(0);
    q.remove(2).unwrap();
    t.on_removed(2, q.len(), &mut b);
    assert_eq!(t.current(), Some(0));
}

#[test]
fn removing_every_track_stops_playback() {
    let (mut q, mut t, mut b) = playing_abc(0);
    while !q.is_empty() {
        let i = t.current().unwrap_or(0);
        q.remove(i).unwrap();
        t.on_removed(i, q.len(), &mut b);
        if let Some(c) = t.current() {
            assert!(c < q.len());
        }
    }

    assert_eq!(t.current(), None);
    assert_eq!(t.state(), PlaybackState::Stopped);
    assert_eq!(b.calls, vec![Call::Stop]);
}

#[test]
fn on_replaced_stops_and_selects_first() {
    let (_q, mut t, mut b) = playing_abc(2);
    t.on_replaced(4, &mut b);
    assert_eq!(t.state(), PlaybackState::Stopped);
    assert_eq!(t.current(), Some(0));
    assert_eq!(b.calls, vec![Call::Stop]);

    t.on_replaced(0, &mut b);
    assert_eq!(t.current(), None);
}

#[test]
fn on_inserted_shifts_position_when_inserting_before_it() {
    let (_q, mut t, _b) = playing_abc(1);
    t.on_inserted(2);
    assert_eq!(t.current(), Some(1));
    t.on_inserted(1);
    assert_eq!(t.current(), Some(2));
    t.on_inserted(0);
    assert_eq!(t.current(), Some(3));
}

#[test]
fn on_moved_follows_the_referenced_track() {
    let (_q, mut t, _b) = playing_abc(1);

    t.on_moved(1, 1);
    assert_eq!(t.current(), Some(1));

    t.on_moved(1, 2);
    assert_eq!(t.current(), Some(2));

    t.on_moved(0, 2);
    assert_eq!(t.current(), Some(1));

    t.on_moved(2, 0);
    assert_eq!(t.current(), Some(2));
}
