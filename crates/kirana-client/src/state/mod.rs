//! # Client State Module
//!
//! Mutex-protected owners of the two pieces of client-side truth:
//!
//! - [`session::SessionState`] - who is logged in (or nobody)
//! - [`cart::CartState`] - what is in the cart
//!
//! Both follow the same pattern: a cheap-to-clone handle around
//! `Arc<Mutex<_>>`, accessed through short closures so the lock is never
//! held across an await point.

pub mod cart;
pub mod session;

pub use cart::CartState;
pub use session::{Session, SessionState};
