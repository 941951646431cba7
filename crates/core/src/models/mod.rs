pub mod deal;
pub mod evaluation;
pub mod inputs;
pub mod result;
pub mod settings;
pub mod verdict;
