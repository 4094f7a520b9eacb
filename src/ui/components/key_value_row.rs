use crate::ui::renderer::{HostRenderer, RatatuiRenderer};
use ratatui::text::Line;

/// A `label: value` row with the label emphasized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueRow {
    pub label: String,
    pub value: String,
}

impl KeyValueRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Unstyled text of the row
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    /// Render through a host backend: emphasized `"<label>:"`, then plain `" <value>"`
    pub fn render<R: HostRenderer>(&self, renderer: &R) -> R::Row {
        renderer.plain_row(vec![
            renderer.emphasized(&format!("{}:", self.label)),
            renderer.plain(&format!(" {}", self.value)),
        ])
    }
}

/// Create a ratatui line for a label/value pair
#[must_use]
pub fn create_key_value_line(label: &str, value: &str) -> Line<'static> {
    KeyValueRow::new(label, value).render(&RatatuiRenderer::new())
}
