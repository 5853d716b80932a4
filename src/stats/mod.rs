pub mod beta;
pub mod error;
pub mod significance;
