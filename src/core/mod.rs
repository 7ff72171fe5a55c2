//! # Core Form Logic
//!
//! The contact form's behavior, independent of any UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ContactForm (state)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ContactForm`, `Field`, `Status`
//! - [`validation`]: the two submit-time rules
//! - [`submission`]: the `Submitter` seam and the simulated implementation
//! - [`action`]: `Action`, `Effect`, and `update()`
//! - [`config`]: settings resolution for the binary

pub mod action;
pub mod config;
pub mod state;
pub mod submission;
pub mod validation;
