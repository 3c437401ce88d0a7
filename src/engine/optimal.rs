use crate::common::page::Page;
use crate::debugger::DebugLevel;
use crate::engine::frames::FrameSet;
use crate::engine::trace::{StepRecord, Trace};
use crate::sim_debug;

/// Belady's optimal replacement.
///
/// Needs the whole reference sequence up front: on a full-frames miss it
/// evicts the resident page whose next use lies farthest in the future.
/// A page that is never referenced again wins outright, so the scan
/// stops at the first one found (lowest slot, since slots are scanned in
/// order). Among pages that do reoccur, strict `>` keeps the lowest slot
/// on ties. Greedy, but provably fault-minimal for a fixed sequence.
pub(crate) fn simulate<P: Page>(frame_count: usize, references: &[P]) -> Trace<P> {
    let mut frames = FrameSet::new(frame_count);
    let mut trace = Trace::with_capacity(references.len());

    for (position, page) in references.iter().enumerate() {
        if frames.contains(page) {
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
                let slot = farthest_use_slot(&frames, references, position);
                sim_debug!(
                    DebugLevel::Trace,
                    "optimal: page {:?} at position {} evicts {:?} from slot {}",
                    page,
                    position,
                    frames.get(slot),
                    slot
                );
                slot
            }
        };

        frames.place(victim, page.clone());

        trace.push(StepRecord {
            requested: page.clone(),
            frames: frames.snapshot(),
            fault: true,
            victim_slot: Some(victim),
        });
    }

    trace
}

/// Slot of the resident page with the farthest next occurrence strictly
/// after `position`. Returns immediately on a page with no future
/// occurrence at all.
fn farthest_use_slot<P: Page>(frames: &FrameSet<P>, references: &[P], position: usize) -> usize {
    let mut victim = 0;
    let mut farthest: Option<usize> = None;

    for (slot, page) in frames.occupants() {
        let next_use = references[position + 1..]
            .iter()
            .position(|r| r == page)
            .map(|offset| position + 1 + offset);

        match next_use {
            None => return slot,
            Some(at) => {
                if farthest.is_none_or(|f| at > f) {
                    farthest = Some(at);
                    victim = slot;
                }
            }
        }
    }

    victim
}
