//! # Data Transfer Objects

pub mod append_config;
