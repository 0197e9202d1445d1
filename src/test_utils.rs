//! Shared test utilities for taskdeck
//!
//! Common fixtures and helper functions used across test modules.
