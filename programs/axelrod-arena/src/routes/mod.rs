//! HTTP route handlers

pub mod index;
pub mod results;
pub mod status;
pub mod strategies;
