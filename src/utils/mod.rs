//! Common utilities and helpers

pub mod logging;
