pub mod integration;
pub mod odds;
pub mod pmf;
pub mod roller;
