//! Configuration, data model and persona shared by all handlers

pub mod config;
pub mod models;
pub mod persona;
