//! Password heuristic checks
//!
//! Each check scores a specific aspect of the trimmed password and is
//! independent of the others.

mod length;
mod repetition;
mod sequence;
mod variety;

pub use length::length_check;
pub use repetition::repetition_check;
pub use sequence::sequence_check;
pub use variety::character_class_check;
