use std::collections::HashMap;

use crate::common::page::Page;
use crate::debugger::DebugLevel;
use crate::engine::frames::FrameSet;
use crate::engine::trace::{StepRecord, Trace};
use crate::sim_debug;

/// Least-recently-used replacement.
///
/// A logical clock ticks once per processed reference; every resident
/// page remembers the tick of its latest reference. On a full-frames
/// miss the smallest timestamp loses, and a timestamp tie goes to the
/// lowest slot index.
pub(crate) fn simulate<P: Page>(frame_count: usize, references: &[P]) -> Trace<P> {
    let mut frames = FrameSet::new(frame_count);
    let mut last_used: HashMap<P, usize> = HashMap::new();
    let mut clock = 0usize;
    let mut trace = Trace::with_capacity(references.len());

    for page in references {
        clock += 1;

        if frames.contains(page) {
            last_used.insert(page.clone(), clock);
            trace.push(StepRecord {
                requested: page.clone(),
                frames: frames.snapshot(),
                fault: false,
                victim_slot: None,
            });
            continue;
        }

        let victim = match frames.first_empty() {
            Some(slot) => slot,
            None => {
                let slot = least_recent_slot(&frames, &last_used);
                sim_debug!(
                    DebugLevel::Trace,
                    "lru: page {:?} evicts {:?} from slot {} at tick {}",
                    page,
                    frames.get(slot),
                    slot,
                    clock
                );
                slot
            }
        };

        frames.place(victim, page.clone());
        last_used.insert(page.clone(), clock);

        trace.push(StepRecord {
            requested: page.clone(),
            frames: frames.snapshot(),
            fault: true,
            victim_slot: Some(victim),
        });
    }

    trace
}

/// Slot of the resident page with the smallest recency timestamp.
/// Strict `<` while scanning in slot order keeps the lowest slot on
/// ties.
fn least_recent_slot<P: Page>(frames: &FrameSet<P>, last_used: &HashMap<P, usize>) -> usize {
    let mut victim = 0;
    let mut oldest = usize::MAX;

    for (slot, page) in frames.occupants() {
        let stamp = last_used.get(page).copied().unwrap_or(0);
        if stamp < oldest {
            oldest = stamp;
            victim = slot;
        }
    }

    victim
}
