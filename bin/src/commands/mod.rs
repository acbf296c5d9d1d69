//! CLI command implementations.

pub(crate) mod calc;
pub(crate) mod page;
pub(crate) mod words;
