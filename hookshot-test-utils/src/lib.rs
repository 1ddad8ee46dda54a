//! Test utilities shared across the hookshot workspace
//!
//! - temporary `.netrc` files ([`NetrcGuard`])
//! - isolated HOME/XDG directories for spawned commands ([`TestHome`])
//!
//! The dead_code lint is disabled for this crate because not every test uses
//! every helper, and usage across dev-dependency boundaries is invisible to
//! the compiler.

#![allow(dead_code)]

pub mod home;
pub mod netrc;

pub use home::TestHome;
pub use netrc::NetrcGuard;
