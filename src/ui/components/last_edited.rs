//! Body of the last-edited page macro

use crate::config::Config;
use crate::constants::DEFAULT_MACRO_LABEL;
use crate::ui::components::key_value_row::KeyValueRow;
use crate::ui::renderer::HostRenderer;
use crate::utils::datetime::format_iso;
use crate::utils::display::DateFormatter;
use anyhow::Result;
use chrono::Utc;

/// Shows when a page was last edited, e.g. `Last edited: Jan 5, 2024, 3:45 PM`
#[derive(Debug, Clone)]
pub struct LastEditedView {
    label: String,
    edited_at: String,
    formatter: DateFormatter,
}

impl LastEditedView {
    /// View stamped with the current time
    pub fn new(formatter: DateFormatter) -> Self {
        Self {
            label: DEFAULT_MACRO_LABEL.to_string(),
            edited_at: format_iso(&Utc::now()),
            formatter,
        }
    }

    /// View using the configured label, locale and time zone
    pub fn from_config(config: &Config) -> Result<Self> {
        let formatter = config.display.formatter()?;
        Ok(Self::new(formatter).with_label(config.macro_row.label.clone()))
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the last-edited timestamp (ISO-8601)
    #[must_use]
    pub fn edited_at(mut self, iso: impl Into<String>) -> Self {
        self.edited_at = iso.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn timestamp(&self) -> &str {
        &self.edited_at
    }

    pub fn row(&self) -> KeyValueRow {
        KeyValueRow::new(self.label.clone(), self.formatter.format_display_date(&self.edited_at))
    }

    pub fn render<R: HostRenderer>(&self, renderer: &R) -> R::Row {
        self.row().render(renderer)
    }
}
