//! Chat UI rendering components

use super::dialog::render_dialog;
use super::state::ChatState;
use crate::application::client::SessionSnapshot;
use crate::application::composer::Composer;
use crate::config::UiStrings;
use crate::tui::theme;
use crate::types::{EntryKind, Message, Sender};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const TYPING_FRAMES: [&str; 4] = ["●  ", "●● ", "●●●", " ●●"];

/// Columns taken by the input border and the `> ` prefix.
pub const INPUT_CHROME_WIDTH: u16 = 4;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(
        frame: &mut Frame,
        state: &mut ChatState,
        snapshot: &SessionSnapshot,
        strings: &UiStrings,
        endpoint: &str,
    ) {
        let area = frame.area();

        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(snapshot.composer.height + 2),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, snapshot, endpoint);
        Self::render_messages(frame, chunks[1], state, snapshot, strings);
        Self::render_input(frame, chunks[2], &snapshot.composer);
        Self::render_help_bar(frame, chunks[3], snapshot.sending);

        if let Some(dialog) = &state.dialog {
            render_dialog(frame, dialog);
        }
    }

    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        snapshot: &SessionSnapshot,
        endpoint: &str,
    ) {
        let mut spans = vec![
            Span::styled(" 💬 ", theme::title()),
            Span::styled("Chat ", theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(endpoint.to_string(), theme::subtitle()),
        ];
        if snapshot.sending {
            spans.push(Span::styled(" │ menunggu balasan", theme::loading()));
        }
        if let Some(status) = &state.status_message {
            spans.push(Span::styled(format!(" │ {status}"), theme::footer()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_messages(
        frame: &mut Frame,
        area: Rect,
        state: &mut ChatState,
        snapshot: &SessionSnapshot,
        strings: &UiStrings,
    ) {
        let mut lines: Vec<Line> = Vec::new();

        for entry in &snapshot.entries {
            match &entry.kind {
                EntryKind::Welcome => {
                    lines.push(Line::from(Span::styled(
                        strings.welcome_title.clone(),
                        theme::title(),
                    )));
                    lines.push(Line::from(Span::styled(
                        strings.welcome_body.clone(),
                        theme::subtitle(),
                    )));
                }
                EntryKind::Message(message) => push_message(&mut lines, message),
                EntryKind::Typing => {
                    lines.push(Line::from(Span::styled("Asisten", theme::ai_prefix())));
                    lines.push(Line::from(Span::styled(
                        format!("  {}", TYPING_FRAMES[state.loading_frame % TYPING_FRAMES.len()]),
                        theme::loading(),
                    )));
                }
            }
            lines.push(Line::from(""));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Rows after wrapping at the current width, not logical lines
        let rows = para.line_count(area.width);
        let max_scroll = rows
            .saturating_sub(area.height as usize)
            .min(u16::MAX as usize) as u16;
        state.max_scroll = max_scroll;
        if state.scroll_offset > max_scroll {
            state.scroll_offset = max_scroll;
        }

        frame.render_widget(para.scroll((state.scroll_offset, 0)), area);
    }

    fn render_input(frame: &mut Frame, area: Rect, composer: &Composer) {
        let enabled = composer.send_enabled;
        let text_style = if enabled {
            theme::text()
        } else {
            theme::subtitle()
        };

        let lines: Vec<Line> = if composer.is_empty() {
            let placeholder = if enabled {
                "Ketik pesan..."
            } else {
                "Menunggu balasan..."
            };
            vec![Line::from(vec![
                Span::styled("> ", theme::user_prefix()),
                Span::styled(placeholder, theme::subtitle()),
            ])]
        } else {
            let display = if composer.focused {
                with_cursor(&composer.text, composer.cursor_pos)
            } else {
                composer.text.clone()
            };
            display
                .split('\n')
                .enumerate()
                .map(|(index, line)| {
                    let prefix = if index == 0 { "> " } else { "  " };
                    Line::from(vec![
                        Span::styled(prefix, theme::user_prefix()),
                        Span::styled(line.to_string(), text_style),
                    ])
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if enabled {
                theme::border_active()
            } else {
                theme::border()
            })
            .title(" Pesan ");

        // Keep the last wrapped rows, where the cursor usually is, in view
        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        let rows = para
            .line_count(area.width.saturating_sub(2))
            .min(u16::MAX as usize) as u16;
        let visible = area.height.saturating_sub(2);

        let para = para.block(block).scroll((rows.saturating_sub(visible), 0));
        frame.render_widget(para, area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, sending: bool) {
        let send_hint = if sending {
            Span::styled(" Enter", theme::footer())
        } else {
            Span::styled(" Enter", theme::key_hint())
        };
        let help_text = Line::from(vec![
            send_hint,
            Span::styled(": Kirim │ ", theme::footer()),
            Span::styled("Shift+Enter", theme::key_hint()),
            Span::styled(": Baris baru │ ", theme::footer()),
            Span::styled("Ctrl+R", theme::key_destructive()),
            Span::styled(": Reset │ ", theme::footer()),
            Span::styled("PgUp/PgDn", theme::key_hint()),
            Span::styled(": Gulir │ ", theme::footer()),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::styled(": Keluar ", theme::footer()),
        ]);
        frame.render_widget(Paragraph::new(help_text), area);
    }
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &Message) {
    let (label, style) = match message.sender {
        Sender::User => ("Anda", theme::user_prefix()),
        Sender::Bot => ("Asisten", theme::ai_prefix()),
    };
    lines.push(Line::from(vec![
        Span::styled(label, style),
        Span::styled(
            format!(" · {}", message.sent_at.format("%H:%M")),
            theme::footer(),
        ),
    ]));
    for line in message.text.lines() {
        lines.push(Line::from(Span::styled(format!("  {line}"), theme::text())));
    }
}

/// Insert a cursor marker at a character position
fn with_cursor(text: &str, cursor_pos: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if cursor_pos >= chars.len() {
        chars.push('_');
    } else {
        chars.insert(cursor_pos, '|');
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::with_cursor;

    #[test]
    fn cursor_marker_placement() {
        assert_eq!(with_cursor("abc", 3), "abc_");
        assert_eq!(with_cursor("abc", 1), "a|bc");
        assert_eq!(with_cursor("", 0), "_");
    }
}
