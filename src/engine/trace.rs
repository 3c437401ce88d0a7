use std::ops::Index;

use crate::common::page::Page;

/// One processed reference: what was asked for, the frame contents
/// *after* the step, whether it missed, and which slot was written.
///
/// `victim_slot` is set on every fault, including the ones that only
/// fill a previously empty slot (it names the filled slot), and is
/// `None` on hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord<P: Page> {
    pub requested: P,
    pub frames: Vec<Option<P>>,
    pub fault: bool,
    pub victim_slot: Option<usize>,
}

/// The full record of one simulation run, one step per input reference,
/// in input order. Immutable once returned from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<P: Page> {
    steps: Vec<StepRecord<P>>,
}

impl<P: Page> Trace<P> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, step: StepRecord<P>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&StepRecord<P>> {
        self.steps.get(step)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<P>> {
        self.steps.iter()
    }

    pub fn total_faults(&self) -> usize {
        self.steps.iter().filter(|s| s.fault).count()
    }

    /// Faults in steps `0..=step`, the running count a display shows
    /// next to the step position. Steps past the end are ignored.
    pub fn faults_through(&self, step: usize) -> usize {
        self.steps
            .iter()
            .take(step + 1)
            .filter(|s| s.fault)
            .count()
    }
}

impl<P: Page> Index<usize> for Trace<P> {
    type Output = StepRecord<P>;

    fn index(&self, step: usize) -> &StepRecord<P> {
        &self.steps[step]
    }
}

impl<'a, P: Page> IntoIterator for &'a Trace<P> {
    type Item = &'a StepRecord<P>;
    type IntoIter = std::slice::Iter<'a, StepRecord<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
