// Application layer - Use cases and orchestration
pub mod aggregator;
pub mod alert_monitor;
pub mod fleet_service;
pub mod registry;
pub mod simulator;
pub mod weather_service;
