//! `stockroom-auth` — the simulated user directory behind login/signup.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod directory;
pub mod user;

pub use directory::{MIN_PASSWORD_LEN, UserDirectory};
pub use user::{User, UserProfile};
