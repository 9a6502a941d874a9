//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks and directory lookups so route
//! handlers can stay focused on request validation and response shaping.

pub mod password;
pub mod users;
