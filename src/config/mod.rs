//! Configuration module for fintrack
//!
//! Provides path resolution for the on-disk key-value store.

pub mod paths;

pub use paths::DataPaths;
