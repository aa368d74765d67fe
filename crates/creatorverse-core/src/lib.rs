pub mod domain;
pub mod errors;
pub mod forms;
pub mod links;
pub mod ports;
pub mod routes;
pub mod services;
pub mod views;

pub use errors::CoreError;
