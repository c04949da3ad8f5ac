//! External collaborators behind swappable interfaces.

pub mod auth;
