//! Domain types of an Express Checkout authorization: the typed parameters,
//! the values they are built from, the wire payload and the gateway reply.
//!
//! The ports the application layer depends on live in [`ports`].

pub mod callback;
pub mod card;
pub mod credentials;
pub mod item;
pub mod money;
pub mod params;
pub mod payload;
pub mod ports;
pub mod response;
pub mod shipping;
