//! Widget drawing a live modal element

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use adialog_app::classes;
use adialog_host::{Button, InputControl, InputKind, ModalElement, Node};

use super::overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::controller::Focus;
use crate::theme::{palette, StyleSheet};

const MIN_WIDTH: u16 = 32;
const MAX_WIDTH: u16 = 72;
/// Borders plus one column of padding on each side
const H_CHROME: u16 = 4;
const FOCUS_MARKER: &str = "› ";
const NO_MARKER: &str = "  ";

/// Draws a modal element centered over a dimmed background
pub struct ModalView<'a> {
    modal: &'a ModalElement,
    styles: &'a StyleSheet,
    focus: Option<Focus>,
    hint: Option<&'a str>,
}

impl<'a> ModalView<'a> {
    pub fn new(modal: &'a ModalElement, styles: &'a StyleSheet) -> Self {
        Self {
            modal,
            styles,
            focus: None,
            hint: None,
        }
    }

    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }

    fn class_style(&self, extra: &[&str]) -> Style {
        self.styles.resolve(
            self.modal
                .classes()
                .iter()
                .map(String::as_str)
                .chain(extra.iter().copied()),
        )
    }

    fn body_lines(&self, field_width: usize) -> Vec<Line<'a>> {
        let body_style = self.class_style(&[classes::BODY]);
        let mut lines = Vec::new();
        let mut control_index = 0;

        for node in self.modal.body() {
            match node {
                Node::Text { class, text } => {
                    let style = match class {
                        Some(c) => body_style.patch(self.styles.resolve([c.as_str()])),
                        None => body_style,
                    };
                    lines.extend(text.lines().map(|l| Line::styled(l.to_string(), style)));
                }
                Node::Control(control) => {
                    let focused = self.focus == Some(Focus::Control(control_index));
                    lines.push(control_line(control, focused, field_width, body_style));
                    control_index += 1;
                }
            }
        }
        lines
    }

    fn buttons_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, button) in self.modal.buttons().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(self.button_span(i, button));
        }
        Line::from(spans)
    }

    fn button_span(&self, index: usize, button: &Button) -> Span<'a> {
        let mut style = self.class_style(&[classes::BUTTONS]);
        if let Some(class) = &button.class {
            style = style.patch(self.styles.resolve([class.as_str()]));
        }
        if self.focus == Some(Focus::Button(index)) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(format!("[ {} ]", button.label), style)
    }

    fn preferred_width(&self, area: Rect) -> u16 {
        let title = self.modal.title().width() + 4;
        let text = self
            .modal
            .body()
            .iter()
            .filter_map(|node| match node {
                Node::Text { text, .. } => text.lines().map(UnicodeWidthStr::width).max(),
                Node::Control(c) => Some(c.label().unwrap_or_else(|| c.value()).width() + 6),
            })
            .max()
            .unwrap_or(0);
        let buttons: usize = self
            .modal
            .buttons()
            .iter()
            .map(|b| b.label.width() + 6)
            .sum();

        let content = u16::try_from(title.max(text).max(buttons)).unwrap_or(MAX_WIDTH);
        content
            .saturating_add(H_CHROME)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(area.width)
    }
}

fn control_line<'a>(
    control: &'a InputControl,
    focused: bool,
    field_width: usize,
    base: Style,
) -> Line<'a> {
    let marker = if focused { FOCUS_MARKER } else { NO_MARKER };

    if control.kind().is_checkable() {
        let mark = match (control.kind(), control.is_checked()) {
            (InputKind::Radio, true) => "(•)",
            (InputKind::Radio, false) => "( )",
            (_, true) => "[x]",
            (_, false) => "[ ]",
        };
        let label = control.label().unwrap_or_else(|| control.value());
        let style = if focused {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        return Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{mark} {label}"), style),
        ]);
    }

    let (shown, shown_style) = if control.value().is_empty() {
        let hint = control
            .placeholder()
            .or_else(|| control.kind().format_hint())
            .unwrap_or_default();
        (hint.to_string(), Style::default().fg(palette::TEXT_MUTED))
    } else {
        (control.value().to_string(), Style::default().fg(palette::TEXT_PRIMARY))
    };
    let cursor = if focused { "▏" } else { " " };
    let used = shown.width() + cursor.width();
    let padding = " ".repeat(field_width.saturating_sub(used));

    let well = Style::default().bg(palette::FIELD_BG);
    Line::from(vec![
        Span::styled(marker, base),
        Span::styled(shown, shown_style.patch(well)),
        Span::styled(cursor, well.fg(palette::ACCENT)),
        Span::styled(padding, well),
    ])
}

fn rows_needed(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    lines.iter().fold(0u16, |rows, line| {
        let wrapped = line.width().max(1).div_ceil(width);
        rows.saturating_add(u16::try_from(wrapped).unwrap_or(u16::MAX))
    })
}

impl Widget for ModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let width = self.preferred_width(area);
        let inner_width = width.saturating_sub(H_CHROME);
        let field_width = usize::from(inner_width).saturating_sub(FOCUS_MARKER.width());
        let lines = self.body_lines(field_width);
        let hint_rows = u16::from(self.hint.is_some());
        // border + body + spacer + buttons + hint + border
        let height = rows_needed(&lines, inner_width)
            .saturating_add(4)
            .saturating_add(hint_rows);

        let modal_area = centered_rect(width, height, area);
        clear_area(buf, modal_area);
        render_shadow(buf, modal_area);

        let block = Block::default()
            .title(Line::styled(
                format!(" {} ", self.modal.title()),
                self.class_style(&[classes::TITLE]),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(self.class_style(&[classes::WRAPPER]))
            .style(self.class_style(&[]));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);
        let inner = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let chunks = Layout::vertical([
            Constraint::Min(1),             // Body
            Constraint::Length(1),          // Spacer
            Constraint::Length(1),          // Buttons
            Constraint::Length(hint_rows),  // Validation hint
        ])
        .split(inner);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        Paragraph::new(self.buttons_line())
            .alignment(Alignment::Right)
            .render(chunks[2], buf);

        if let Some(hint) = self.hint {
            Paragraph::new(hint)
                .style(Style::default().fg(palette::STATUS_YELLOW))
                .render(chunks[3], buf);
        }
    }
}
