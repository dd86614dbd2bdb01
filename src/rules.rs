pub mod die;
pub mod error;
pub mod hand;
pub mod scoring;
