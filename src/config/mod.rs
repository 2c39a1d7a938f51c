//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc with the encoder and the request normalizers
//! ```
//!
//! # Design Decisions
//! - Config is an immutable snapshot; nothing reads process-wide globals
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ApiConfig, FacetConfig, HighlightConfig, ListenerConfig, ObservabilityConfig, PagingConfig,
    ServiceConfig, SuggestConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
