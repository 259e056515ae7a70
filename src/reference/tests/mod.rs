//! Unit tests for reference scanning and resolution.
