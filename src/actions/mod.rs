//! Signal catalog shared by signal producers and the root reducer.

mod signal;
pub mod types;

pub use signal::Signal;
