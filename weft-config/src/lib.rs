//! Configuration for the weft HTML builder.
//!
//! A `weft.toml` file controls entity encoding and the default attributes
//! merged into generated `<script>`, stylesheet and favicon tags. Every
//! section is optional; [`Config::default`] matches an empty file.
//!
//! ```toml
//! [entities]
//! double_encode = false
//!
//! [defaults.style]
//! media = "screen"
//! rel = "stylesheet"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod validate;

pub use config::{Config, DefaultAttributes, DefaultTag, EntitiesConfig};
pub use error::{Error, Result, SourceContext};
pub use parse::{CONFIG_FILE_NAME, parse_config};
