//! # TUI Components
//!
//! All UI components for the terminal form.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: top line with status and key hints
//! - `Feedback`: error / success lines
//! - `SubmitButton`: label and disabled state come from the form status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local presentation state and emit events:
//! - `TextField`: editing buffer, cursor, scrolling
//! - `ContactFormView`: focus, and routing of key events to its children
//!
//! ## Props-Based Data Flow
//!
//! Components never read the `ContactForm` record behind the caller's back.
//! The event loop calls `sync()` with the record, and components emit events
//! that the loop turns into `core::action::Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status line)
//! ├── contact_form.rs   (Form layout, focus, event routing)
//! ├── feedback.rs       (Error / success lines)
//! ├── submit_button.rs  (Send control)
//! └── text_field/       (Labelled input with cursor and wrapping)
//! ```

pub mod contact_form;
pub mod feedback;
pub mod submit_button;
pub mod text_field;
mod title_bar;

pub use contact_form::{ContactFormView, FormEvent};
pub use title_bar::TitleBar;
