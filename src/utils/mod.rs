//! Utility modules: on-disk persistence helpers.

pub mod persistence;
