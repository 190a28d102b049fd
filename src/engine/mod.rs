//! Validation engine module.
//!
//! Provides check execution and result aggregation.

pub mod result;
pub mod validator;
