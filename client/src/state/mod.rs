//! Client-side state.
//!
//! DESIGN
//! ======
//! Session state is an explicit controller handed to whatever needs it,
//! never an ambient global.

pub mod session;
