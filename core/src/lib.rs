pub mod capability;
pub mod evaluator;
pub mod report;
pub mod session;
