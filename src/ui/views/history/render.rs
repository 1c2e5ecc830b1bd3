//! History View rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{HistoryRow, HistoryView};
use crate::model::Notification;
use crate::ui::{components, symbols, theme};

impl HistoryView {
    /// Render the history tree with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        let inner_height = area.height.saturating_sub(2) as usize; // borders
        self.cursor.scroll_offset = self.cursor.scroll_for(inner_height);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.cursor.scroll_offset)
            .take(inner_height)
            .map(|(idx, &row)| self.build_row_line(row, idx == self.cursor.selected))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_title(&self) -> Line<'static> {
        let name = self.element().unwrap_or(symbols::empty::NO_FILE);
        Line::from(format!(" History: {} ", name)).bold().cyan().centered()
    }

    /// Build a line for one tree row
    ///
    /// Inner nodes show only their label; leaves also show their description.
    pub fn build_row_line(&self, row: HistoryRow, is_selected: bool) -> Line<'static> {
        let marker = if !self.is_collapsible(row) {
            symbols::tree::LEAF
        } else if self.is_expanded(row) {
            symbols::tree::EXPANDED
        } else {
            symbols::tree::COLLAPSED
        };

        let mut spans = vec![
            Span::raw(symbols::tree::INDENT.repeat(row.depth)),
            Span::styled(
                format!("{} ", marker),
                Style::default().fg(theme::history_view::MARKER),
            ),
        ];

        match row.node.map(|id| &self.tree()[id]) {
            None => {
                spans.push(Span::styled(
                    symbols::empty::CHANGES,
                    Style::default()
                        .fg(theme::history_view::ROOT)
                        .add_modifier(Modifier::BOLD),
                ));
                if self.tree().is_empty() {
                    spans.push(Span::styled(
                        format!(
                            " {} {}",
                            symbols::status::DOWNWARDS_ARROW,
                            symbols::empty::FETCH_HINT
                        ),
                        Style::default().fg(theme::history_view::COMMENT),
                    ));
                }
            }
            Some(node) => {
                spans.push(Span::styled(
                    node.label.clone(),
                    Style::default().fg(theme::history_view::LABEL),
                ));
                if !node.is_collapsible() {
                    spans.push(Span::styled(
                        format!(" {}", node.description()),
                        Style::default().fg(theme::history_view::DESCRIPTION),
                    ));
                }
            }
        }

        let line = Line::from(spans);
        if is_selected {
            line.style(
                Style::default()
                    .fg(theme::selection::FG)
                    .bg(theme::selection::BG)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            line
        }
    }
}
