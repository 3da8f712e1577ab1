//! Command implementations for the intmerge CLI

pub mod merge;
