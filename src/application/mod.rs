//! Application layer orchestrating an authorization call.
//!
//! This module defines `ExpressAuthorizeRequest`, which validates the typed
//! parameters, assembles the NVP payload and hands it to a `Gateway` port.

pub mod authorize;
