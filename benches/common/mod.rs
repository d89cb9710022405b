pub mod koch;
pub mod samples;
