pub mod follow;
pub mod osc;
