//! Terminal settings for Glaze.
//!
//! Settings live in `settings.toml` in the Glaze config directory. Older
//! installs wrote a `key=value` file named `settings.cfg`; it is imported
//! when no TOML file exists yet.
//!
//! [`SettingsStore`] owns the current value as an `Arc<Settings>`. Changes
//! are written to disk first and only then swapped in, so a failed save
//! leaves the in-memory settings untouched.

mod atomic;
mod error;
mod legacy;
mod settings;
mod store;

pub use atomic::atomic_write;
pub use error::{Result, SettingsError};
pub use legacy::parse_legacy;
pub use settings::{Rgba, Settings, Toggle};
pub use store::SettingsStore;
