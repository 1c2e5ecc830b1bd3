//! Comment dialog rendering

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Clear,
};

use super::CommentDialog;
use crate::ui::components;

/// Dialog height including borders
const DIALOG_HEIGHT: u16 = 8;

impl CommentDialog {
    /// Render the dialog centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = popup_area(area);
        let title = Line::from(format!(
            " {}: comment (Ctrl+S run, Esc cancel) ",
            self.action.title()
        ))
        .bold()
        .yellow();
        let block = components::bordered_block(title);
        let inner = block.inner(popup);

        frame.render_widget(Clear, popup);
        frame.render_widget(block, popup);
        frame.render_widget(&self.textarea, inner);
    }
}

fn popup_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
