//! # TUI Components
//!
//! Every piece of the frame is a stateless, props-based component:
//! - `TitleBar`: fixed header
//! - `GridView`: the 9×9 board with box gaps and the focused cell
//! - `StatusBar`: cursor position, focused value and quit hint
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props (struct fields), not by
//! reaching into global state. Styling arrives the same way, as a borrowed
//! `Theme`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! GridView::new(&state, &theme).lines();
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (header)
//! ├── grid_view.rs    (board)
//! └── status_bar.rs   (footer)
//! ```

mod grid_view;
mod status_bar;
mod title_bar;

pub use grid_view::GridView;
pub use status_bar::StatusBar;
pub use title_bar::{APP_TITLE, TitleBar};
