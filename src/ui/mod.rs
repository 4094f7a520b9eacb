//! UI module for macrokit
//!
//! This module holds the presentational components and the rendering
//! backends they draw through.

pub mod components;
pub mod renderer;

pub use components::{KeyValueRow, LastEditedView};
pub use renderer::{run_inline_preview, AnsiRenderer, HostRenderer, RatatuiRenderer};
