mod combiner;
mod observer;

pub use combiner::RatingCombiner;
pub use observer::{NoOpObserver, UpdateObserver};
