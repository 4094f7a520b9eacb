//! Reusable UI components

pub mod key_value_row;
pub mod last_edited;

// Component exports
pub use key_value_row::KeyValueRow;
pub use last_edited::LastEditedView;
