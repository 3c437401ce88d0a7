mod helpers;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use helpers::data::{TEXTBOOK_FRAMES, textbook_references};
use helpers::harness::SimRun;
use pagesim::common::types::Algorithm;
use pagesim::playback::cursor::TraceCursor;
use pagesim::playback::player::Autoplay;

#[test]
fn independent_cursors_over_one_trace() {
    let run = SimRun::new(TEXTBOOK_FRAMES, &textbook_references()).unwrap();
    let trace = run.trace(Algorithm::Fifo);

    let mut a = TraceCursor::new(trace.len());
    let mut b = TraceCursor::new(trace.len());

    a.next();
    a.next();
    b.prev();

    assert_eq!(a.position(), 2);
    assert_eq!(b.position(), 0);

    // Both cursors read the same immutable steps.
    assert_eq!(trace[a.position()].requested, 1);
    assert_eq!(trace[b.position()].requested, 7);
}

#[test]
fn cursor_walks_the_whole_trace_and_back() {
    let run = SimRun::new(TEXTBOOK_FRAMES, &textbook_references()).unwrap();
    let trace = run.trace(Algorithm::Lru);
    let mut cursor = TraceCursor::new(trace.len());

    let mut forward = Vec::new();
    forward.push(trace[cursor.position()].requested);
    while cursor.next() {
        forward.push(trace[cursor.position()].requested);
    }
    assert_eq!(forward, textbook_references());
    assert!(cursor.at_end());

    while cursor.prev() {}
    assert!(cursor.at_start());
}

#[test]
fn autoplay_visits_every_remaining_step() {
    let run = SimRun::new(TEXTBOOK_FRAMES, &textbook_references()).unwrap();
    let trace = run.trace(Algorithm::Optimal).clone();
    let len = trace.len();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut player = Autoplay::spawn(len, 0, Duration::from_millis(1), move |step| {
        sink.lock().unwrap().push(trace[step].requested);
    });
    player.join();

    let expected: Vec<u32> = textbook_references()[1..].to_vec();
    assert_eq!(*seen.lock().unwrap(), expected);
    assert_eq!(player.position(), len - 1);
}

#[test]
fn pausing_playback_leaves_the_trace_untouched() {
    let run = SimRun::new(TEXTBOOK_FRAMES, &textbook_references()).unwrap();
    let before = run.trace(Algorithm::Fifo).clone();

    let mut player = Autoplay::spawn(before.len(), 0, Duration::from_millis(10), |_| {});
    player.stop();
    player.stop();

    let resumed_from = player.position();
    assert!(resumed_from < before.len());
    assert_eq!(run.trace(Algorithm::Fifo), &before);

    // A cursor can pick up exactly where playback stopped.
    let mut cursor = TraceCursor::new(before.len());
    assert!(cursor.jump(resumed_from));
    assert_eq!(cursor.position(), resumed_from);
}
