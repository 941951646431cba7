pub mod calculator;
pub mod classifier;
pub mod format;
pub mod normalizer;
