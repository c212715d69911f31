//! Configuration generation for karabiner-gen
//!
//! This crate builds a Karabiner-Elements `karabiner.json` document from
//! literal device and profile data and renders it as JSON.

mod combinators;
mod error;
mod generator;
mod layout;
mod merge;
mod model;

pub use combinators::{
    dual_role, from_to, simultaneous_pair, space_fn, swap, SPACE_FN_MODIFIER,
    SPACE_FN_THRESHOLD_MILLISECONDS, SPACE_FN_VARIABLE,
};
pub use error::ConfigError;
pub use generator::{build_document, render_document, write_document};
pub use layout::*;
pub use merge::{DeviceOverrides, IdentifierOverrides, Merge, ProfileOverrides};
pub use model::*;
