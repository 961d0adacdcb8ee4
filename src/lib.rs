pub mod components;
pub mod config;
pub mod error;
#[cfg(feature = "web-interface")]
pub mod shutdown;
#[cfg(feature = "web-interface")]
pub mod startup;
#[cfg(feature = "web-interface")]
pub mod web;
