/// The classic OS-textbook reference string the original visualizer
/// ships as its default input.
#[allow(dead_code)]
pub fn textbook_references() -> Vec<u32> {
    vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]
}

#[allow(dead_code)]
pub const TEXTBOOK_FRAMES: usize = 3;

/// Worst case for everything: no page is ever re-referenced.
#[allow(dead_code)]
pub fn thrashing_references() -> Vec<u32> {
    vec![1, 2, 3, 4, 5, 6, 7, 8]
}
