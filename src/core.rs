pub mod calculator;
pub mod charging_mode;
pub mod scenario;
