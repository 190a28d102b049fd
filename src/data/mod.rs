//! Static data for calnix-validate.
//!
//! Holds the expected repository layout and policy markers.

pub mod layout;
