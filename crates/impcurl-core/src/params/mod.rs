//! Typed request parameters that serialize into curl command-line arguments.
//!
//! Two stores live here: [`Flags`] (`--name [value]`) and [`Headers`]
//! (`-H 'Name: Value'`). Both are plain owned data; a `Client` owns one of
//! each for user settings and a `Preset` owns another pair for its defaults.

mod flags;
mod headers;

pub use flags::{FlagValue, Flags};
pub use headers::Headers;
