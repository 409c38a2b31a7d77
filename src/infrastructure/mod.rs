//! Infrastructure layer - External service implementations

pub mod logging;
pub mod terminal;
pub mod wikipedia;
