// src/core/mod.rs

pub mod logger;
mod macros;
pub mod severity;
