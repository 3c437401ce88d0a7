use anyhow::Result;

use pagesim::api::sim::SimulationSet;
use pagesim::common::types::Algorithm;
use pagesim::engine::trace::Trace;

/// All three algorithms over one input, with the lookups the tests
/// keep reaching for.
#[allow(dead_code)]
pub struct SimRun {
    pub set: SimulationSet<u32>,
}

#[allow(dead_code)]
impl SimRun {
    pub fn new(frame_count: usize, references: &[u32]) -> Result<Self> {
        Ok(Self {
            set: SimulationSet::run(frame_count, references)?,
        })
    }

    pub fn trace(&self, algorithm: Algorithm) -> &Trace<u32> {
        self.set.trace(algorithm)
    }

    #[allow(dead_code)]
    pub fn faults(&self, algorithm: Algorithm) -> usize {
        self.trace(algorithm).total_faults()
    }
}

#[allow(dead_code)]
pub fn random_references(len: usize, max_page: u32) -> Vec<u32> {
    (0..len).map(|_| rand::random::<u32>() % max_page).collect()
}

/// Compare one step against a hand-traced row.
#[allow(dead_code)]
pub fn assert_step(
    trace: &Trace<u32>,
    step: usize,
    requested: u32,
    frames: &[Option<u32>],
    fault: bool,
    victim_slot: Option<usize>,
) {
    let record = &trace[step];
    assert_eq!(record.requested, requested, "step {step}: requested page");
    assert_eq!(record.frames.as_slice(), frames, "step {step}: frames");
    assert_eq!(record.fault, fault, "step {step}: fault flag");
    assert_eq!(record.victim_slot, victim_slot, "step {step}: victim slot");
}
