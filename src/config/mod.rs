//! Configuration system.
//!
//! Configuration is resolved in tiers, first file found wins:
//! 1. **Explicit** - `--config <path>` or `PRODUCTMIND_CONFIG_PATH`
//! 2. **Project** - `./productmind.yaml`
//! 3. **User** - `~/.productmind/config.yaml`
//! 4. **Defaults** - built into the binary
//!
//! Environment variables are applied on top of whichever file was loaded,
//! and CLI flags are applied last by the binary.
//!
//! ## Environment Variables
//! - `PRODUCTMIND_CONFIG_PATH` - Explicit config file
//! - `PRODUCTMIND_HOST` - Dashboard bind address
//! - `PRODUCTMIND_PORT` - Dashboard port
//! - `PRODUCTMIND_DELAY_MS` - Simulated agent latency in milliseconds
//! - `PRODUCTMIND_SEED` - Seed for the agents' random source

mod loader;
mod types;

pub use loader::{ConfigLoader, ConfigTier};
pub use types::*;
