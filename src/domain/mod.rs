// Domain layer - Core fleet models, no I/O
pub mod alert;
pub mod chart;
pub mod vehicle;
pub mod weather;
