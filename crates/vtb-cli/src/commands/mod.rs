pub mod audit;
pub mod prompt;
