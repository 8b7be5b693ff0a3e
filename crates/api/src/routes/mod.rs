//! Route Handlers

pub mod catalog;
pub mod recommendations;
