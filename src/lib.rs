pub mod client;
pub mod config;
pub mod error;
pub mod install;
pub mod privilege;
pub mod service;
