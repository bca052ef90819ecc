#![allow(clippy::too_many_arguments)]

pub mod bindings;
pub mod config;
pub mod events;
pub mod subscription;

pub use bindings::val_set_driver::*;
pub use ethers::contract::parse_log;
