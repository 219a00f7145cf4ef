pub mod account;
pub mod generate;
pub mod history;
pub mod models;
pub mod relay;
pub mod settings;
