//! Config file loading and creation.

mod loader;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{
    default_config_path, load_default, load_from_path, parse_config, write_default_config,
};
