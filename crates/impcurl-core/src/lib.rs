pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod exit_code;
pub mod extract;
pub mod params;
pub mod preset;

pub use http;

pub use client::{Client, Exchange, Response};
pub use error::RequestError;
pub use extract::ExtractError;
pub use params::{FlagValue, Flags, Headers};
pub use preset::{Preset, PresetName};
