use crate::common::page::Page;

/// The fixed-size set of memory frames an algorithm replaces into.
///
/// Length never changes after construction, and a page occupies at most
/// one slot at any time. Only the algorithms mutate it; everything a
/// consumer sees is a snapshot.
pub struct FrameSet<P: Page> {
    slots: Vec<Option<P>>,
}

impl<P: Page> FrameSet<P> {
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, page: &P) -> bool {
        self.slot_of(page).is_some()
    }

    /// Slot currently holding `page`, if it is resident.
    pub fn slot_of(&self, page: &P) -> Option<usize> {
        self.slots.iter().position(|s| s.as_ref() == Some(page))
    }

    /// Lowest-index slot with no resident page.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    pub fn get(&self, slot: usize) -> Option<&P> {
        self.slots[slot].as_ref()
    }

    /// Overwrite `slot` with `page`. The caller guarantees `page` is not
    /// resident anywhere else.
    pub fn place(&mut self, slot: usize, page: P) {
        self.slots[slot] = Some(page);
    }

    /// Occupied slots in index order.
    pub fn occupants(&self) -> impl Iterator<Item = (usize, &P)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| s.as_ref().map(|page| (slot, page)))
    }

    /// Owned point-in-time copy, detached from later mutation.
    pub fn snapshot(&self) -> Vec<Option<P>> {
        self.slots.clone()
    }
}
