use crate::api::errors::RunError;
use crate::common::page::Page;
use crate::common::types::Algorithm;
use crate::engine;
use crate::engine::errors::SimResult;
use crate::engine::trace::Trace;
use crate::frontend::input;

/// One run of all three algorithms over the same input: the unit a
/// display steps through side by side. Each trace is computed
/// independently and is immutable from here on.
#[derive(Debug, Clone)]
pub struct SimulationSet<P: Page> {
    pub frame_count: usize,
    pub references: Vec<P>,
    pub fifo: Trace<P>,
    pub lru: Trace<P>,
    pub optimal: Trace<P>,
}

impl<P: Page> SimulationSet<P> {
    pub fn run(frame_count: usize, references: &[P]) -> SimResult<Self> {
        Ok(Self {
            frame_count,
            references: references.to_vec(),
            fifo: engine::simulate(Algorithm::Fifo, frame_count, references)?,
            lru: engine::simulate(Algorithm::Lru, frame_count, references)?,
            optimal: engine::simulate(Algorithm::Optimal, frame_count, references)?,
        })
    }

    pub fn trace(&self, algorithm: Algorithm) -> &Trace<P> {
        match algorithm {
            Algorithm::Fifo => &self.fifo,
            Algorithm::Lru => &self.lru,
            Algorithm::Optimal => &self.optimal,
        }
    }

    /// Steps per trace, which equals the number of input references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Total-fault line for all three algorithms.
    pub fn summary(&self) -> String {
        Algorithm::ALL
            .iter()
            .map(|&a| format!("{}: {} faults", a, self.trace(a).total_faults()))
            .collect::<Vec<_>>()
            .join("  |  ")
    }
}

impl SimulationSet<u32> {
    /// Parse free-text frame count and page request string, then run.
    /// Unparseable page tokens are dropped by the parser; an input with
    /// no usable pages at all is refused here, not in the engine.
    pub fn from_input(frame_text: &str, reference_text: &str) -> Result<Self, RunError> {
        let frame_count = input::parse_frame_count(frame_text)?;
        let references = input::parse_references(reference_text)?;
        Ok(Self::run(frame_count, &references)?)
    }
}

/// Render one step of a trace the way the step display shows it:
/// requested page, frame contents (`-` for an empty slot), hit or
/// fault, and the running fault count.
pub fn render_step<P: Page>(trace: &Trace<P>, step: usize) -> String {
    let record = &trace[step];

    let cells: Vec<String> = record
        .frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => "-".to_string(),
        })
        .collect();

    format!(
        "step {:>3}/{}  page {:>3}  [ {} ]  {}  faults {}/{}",
        step + 1,
        trace.len(),
        record.requested,
        cells.join(" | "),
        if record.fault { "FAULT" } else { "hit  " },
        trace.faults_through(step),
        trace.total_faults()
    )
}
