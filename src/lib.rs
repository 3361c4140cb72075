#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
extern crate libsqlite3_sys;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod utils;
