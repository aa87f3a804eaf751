pub mod action;
pub mod portfolio;
pub mod position;
pub mod report;
pub mod settings;
pub mod strategy;
pub mod summary;
