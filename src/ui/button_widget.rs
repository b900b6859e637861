//! Custom Ratatui widget that draws a [`RenderedButton`]: a bordered box with
//! the content centred inside, coloured by its class list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::render::RenderedButton;

use super::{spinner, theme::Theme};

/// Ratatui view of one async button frame.
pub struct AsyncButtonWidget<'a> {
    button: &'a RenderedButton,
    /// Drives the spinner while pending.
    tick: u64,
}

impl<'a> AsyncButtonWidget<'a> {
    pub fn new(button: &'a RenderedButton) -> Self {
        Self { button, tick: 0 }
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Combined patch of every class in the list.
    fn class_patch(&self) -> Style {
        self.button
            .classes()
            .fold(Style::default(), |s, class| s.patch(Theme::class_style(class)))
    }

    /// Base style plus the class patch, greyed out when disabled.
    fn style(&self) -> Style {
        let mut style = Theme::button_style().patch(self.class_patch());
        if self.button.disabled && !self.button.phase.is_pending() {
            style = style.patch(Theme::disabled_style());
        }
        style
    }

    /// Text shown inside the border.
    fn line(&self) -> Line<'a> {
        if self.button.phase.is_pending() {
            Line::from(vec![
                Span::raw(format!("{} ", spinner::frame(self.tick))),
                Span::raw(self.button.content.clone()),
            ])
        } else {
            Line::from(self.button.content.clone())
        }
    }
}

impl<'a> Widget for AsyncButtonWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        let style = self.style();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style().patch(self.class_patch()));
        if let Some(title) = self.button.attributes.get("title") {
            block = block
                .title(format!(" {title} "))
                .title_style(Theme::title_style());
        }

        Paragraph::new(self.line())
            .style(style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
