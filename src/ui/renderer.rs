//! Rendering backends for presentational components
//!
//! Components never build terminal output directly. They describe text as
//! emphasized or plain pieces and hand them to a [`HostRenderer`], which owns
//! styling and layout.

use crossterm::style::Stylize;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, TerminalOptions, Viewport,
};

/// Text primitives supplied by the host UI.
pub trait HostRenderer {
    /// A run of text inside a row
    type Inline;
    /// A finished single-line text container
    type Row;

    fn emphasized(&self, text: &str) -> Self::Inline;

    fn plain(&self, text: &str) -> Self::Inline;

    fn plain_row(&self, children: Vec<Self::Inline>) -> Self::Row;
}

/// Renders rows as ratatui [`Line`]s with bold emphasis
#[derive(Debug, Clone, Copy)]
pub struct RatatuiRenderer {
    emphasis: Style,
}

impl RatatuiRenderer {
    pub fn new() -> Self {
        Self {
            emphasis: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Use a custom style for emphasized text
    #[must_use]
    pub fn with_emphasis(mut self, style: Style) -> Self {
        self.emphasis = style;
        self
    }

    /// Draw a row into an area of the frame
    pub fn draw(&self, f: &mut Frame, rect: Rect, row: Line<'static>) {
        f.render_widget(Paragraph::new(row), rect);
    }
}

impl Default for RatatuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRenderer for RatatuiRenderer {
    type Inline = Span<'static>;
    type Row = Line<'static>;

    fn emphasized(&self, text: &str) -> Span<'static> {
        Span::styled(text.to_string(), self.emphasis)
    }

    fn plain(&self, text: &str) -> Span<'static> {
        Span::raw(text.to_string())
    }

    fn plain_row(&self, children: Vec<Span<'static>>) -> Line<'static> {
        Line::from(children)
    }
}

/// Renders rows as strings with ANSI bold emphasis
#[derive(Debug, Clone, Copy)]
pub struct AnsiRenderer {
    styled: bool,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self { styled: true }
    }

    /// Renderer that emits no escape sequences
    pub fn plain_text() -> Self {
        Self { styled: false }
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRenderer for AnsiRenderer {
    type Inline = String;
    type Row = String;

    fn emphasized(&self, text: &str) -> String {
        if self.styled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn plain(&self, text: &str) -> String {
        text.to_string()
    }

    fn plain_row(&self, children: Vec<String>) -> String {
        children.concat()
    }
}

/// Draw a single row inline below the cursor and leave it on screen.
pub fn run_inline_preview(row: Line<'static>) -> anyhow::Result<()> {
    let renderer = RatatuiRenderer::new();
    let mut terminal = ratatui::try_init_with_options(TerminalOptions {
        viewport: Viewport::Inline(1),
    })?;

    let drawn = terminal.draw(|f| {
        let area = f.area();
        renderer.draw(f, area, row.clone());
    });
    ratatui::restore();
    drawn?;

    println!();
    Ok(())
}
