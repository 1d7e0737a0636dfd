pub mod config;
mod main_lib;

pub use main_lib::{build_adapter, init_tracing, run};
