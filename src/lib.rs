// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod collect;
pub mod draft;
pub mod file;
pub mod gui;
pub mod model;
pub mod progress;
pub mod report;
pub mod store;
