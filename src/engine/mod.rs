pub mod errors;
pub mod fifo;
pub mod frames;
pub mod lru;
pub mod optimal;
pub mod trace;

use crate::common::page::Page;
use crate::common::types::Algorithm;
use crate::engine::errors::{SimError, SimResult};
use crate::engine::trace::Trace;

/// Run one replacement algorithm over a reference sequence.
///
/// Pure: the trace is fully determined by the three arguments, and no
/// state survives between calls. An empty sequence yields an empty
/// trace; a zero frame count is rejected before any work happens.
pub fn simulate<P: Page>(
    algorithm: Algorithm,
    frame_count: usize,
    references: &[P],
) -> SimResult<Trace<P>> {
    if frame_count == 0 {
        return Err(SimError::InvalidFrameCount { frame_count });
    }

    let trace = match algorithm {
        Algorithm::Fifo => fifo::simulate(frame_count, references),
        Algorithm::Lru => lru::simulate(frame_count, references),
        Algorithm::Optimal => optimal::simulate(frame_count, references),
    };

    Ok(trace)
}
