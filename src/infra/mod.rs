// src/infra/mod.rs

pub mod config;
pub mod errors;
