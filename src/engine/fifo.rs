use crate::common::page::Page;
use crate::debugger::DebugLevel;
use crate::engine::frames::FrameSet;
use crate::engine::trace::{StepRecord, Trace};
use crate::sim_debug;

/// First-in-first-out replacement.
///
/// A circular pointer is the single source of truth for "next slot to
/// replace". Filling an originally empty slot consumes the pointer's
/// position and advances it, exactly like an eviction, so victims cycle
/// `0, 1, ..., frame_count-1, 0, ...` across faults no matter which
/// pages are involved.
pub(crate) fn simulate<P: Page>(frame_count: usize, references: &[P]) -> Trace<P> {
    let mut frames = FrameSet::new(frame_count);
    let mut pointer = 0usize;
    let mut trace = Trace::with_capacity(references.len());

    for page in references {
        if frames.contains(page) {
            trace.push(StepRecord {
                requested: page.clone(),
                frames: frames.snapshot(),
                fault: false,
                victim_slot: None,
            });
            continue;
        }

        let victim = pointer;
        sim_debug!(
            DebugLevel::Trace,
            "fifo: page {:?} -> slot {} (was {:?})",
            page,
            victim,
            frames.get(victim)
        );

        frames.place(victim, page.clone());
        pointer = (pointer + 1) % frame_count;

        trace.push(StepRecord {
            requested: page.clone(),
            frames: frames.snapshot(),
            fault: true,
            victim_slot: Some(victim),
        });
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_advances_even_on_empty_slot_fills() {
        // 1, 2 fill slots 0 and 1; 3 must then take slot 0 because the
        // pointer wrapped, not because slot 0 was "oldest by eviction".
        let trace = simulate(2, &[1u32, 2, 3]);

        assert_eq!(trace[0].victim_slot, Some(0));
        assert_eq!(trace[1].victim_slot, Some(1));
        assert_eq!(trace[2].victim_slot, Some(0));
        assert_eq!(trace[2].frames, vec![Some(3), Some(2)]);
    }

    #[test]
    fn hit_does_not_move_the_pointer() {
        let trace = simulate(2, &[1u32, 2, 1, 3]);

        assert!(!trace[2].fault);
        // Pointer was left at slot 0 by the first two fills.
        assert_eq!(trace[3].victim_slot, Some(0));
        assert_eq!(trace[3].frames, vec![Some(3), Some(2)]);
    }

    #[test]
    fn reuse_does_not_protect_a_page() {
        // Page 1 is referenced constantly but still gets evicted first:
        // arrival order is all FIFO looks at.
        let trace = simulate(2, &[1u32, 2, 1, 1, 3]);

        assert_eq!(trace[4].victim_slot, Some(0));
        assert_eq!(trace[4].frames, vec![Some(3), Some(2)]);
    }

    #[test]
    fn single_frame_thrashes() {
        let trace = simulate(1, &[1u32, 2, 3]);

        assert_eq!(trace.total_faults(), 3);
        for step in trace.iter() {
            assert_eq!(step.victim_slot, Some(0));
        }
    }
}
