pub mod position_service;
pub mod rebalance_service;
pub mod savings_service;
