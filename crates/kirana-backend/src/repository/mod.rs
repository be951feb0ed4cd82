//! # Repository Module
//!
//! Operation groups for the simulated service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern groups related operations behind a clean API.  │
//! │                                                                         │
//! │  StoreController                                                        │
//! │       │                                                                 │
//! │       │  backend.auth().login(email, password)                          │
//! │       ▼                                                                 │
//! │  AuthRepository                                                         │
//! │  ├── signup(name, email, password)                                      │
//! │  ├── login(email, password)                                             │
//! │  └── check_session(token)                                               │
//! │       │                                                                 │
//! │       │  sleep(latency) ─► lock ─► validate ─► mutate                   │
//! │       ▼                                                                 │
//! │  In-memory store                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                         │
//! │  • The client never sees the collections, only the operations           │
//! │  • A real transport can replace any repository without call-site edits  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`auth::AuthRepository`] - Signup, login, session check
//! - [`review::ReviewRepository`] - Per-product review listing and submission
//! - [`order::OrderRepository`] - Order placement and per-user history

pub mod auth;
pub mod order;
pub mod review;
