#[macro_use]
extern crate log;

extern crate mix_common;

pub mod config;
pub mod service;
