use std::fmt;
use std::hash::Hash;

/// Anything usable as a page identifier: cheap to clone, comparable,
/// hashable, printable. Integers are the canonical case, but nothing in
/// the engine cares what the value actually is.
pub trait Page: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> Page for T {}
