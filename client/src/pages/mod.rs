//! Page-level flows that sit between the controller and the network.

pub mod login;
