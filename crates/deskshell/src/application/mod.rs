//! Application layer for the deskshell desktop shell.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (the preferences document and its merge rules in `deskshell-core`) and
//! the infrastructure (files, processes, the host window runtime).
//!
//! Code in this layer orchestrates domain objects to fulfil a user goal and
//! depends on the traits in [`ports`] rather than on concrete OS adapters.
//!
//! # Sub-modules
//!
//! - **`config_store`** – The single source of truth for preferences:
//!   create-if-absent, load, merge defaults, typed getters and setters.
//! - **`lifecycle`** – Hooks run on startup and before close; first-run
//!   detection and the window geometry snapshot.
//! - **`events`** – Fire-and-forget event bus towards the host runtime.
//! - **`notify`** – Chooses between an in-window toast and a native
//!   notification.
//! - **`instance`** – Reaction to a second launch of the application.
//! - **`restart`** – Re-executes the application after persisting state.
//! - **`ports`** – Traits for the collaborators the application drives.

pub mod config_store;
pub mod events;
pub mod instance;
pub mod lifecycle;
pub mod notify;
pub mod ports;
pub mod restart;
