//! # Core Application Logic
//!
//! The grid state machine. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • GridState (data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
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
//! - [`grid`]: `Coordinate`, `Digit`, `Cell`, `Direction`
//! - [`state`]: `GridState` — cells, cursor and the inert selection
//! - [`action`]: `Key`, `Action`, `Effect` and the `update()` reducer
//! - [`config`]: config file loading and resolution

pub mod action;
pub mod config;
pub mod grid;
pub mod state;
