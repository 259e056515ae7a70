//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, host, nickname, and derived value tests
//! - `loading`: Real loading from environment, CLI, and config files
//! - `validation`: Configuration consistency validation tests

mod field_resolution;
mod helpers;
mod precedence;
