//! Class-based styles
//!
//! A dialog element carries a list of class names (`async-dialog`,
//! `ad-confirm`, user tokens...). The sheet maps class names to styles and
//! resolves a list by patching each matching rule over the previous one, so
//! later classes win field by field.

use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use adialog_app::classes;
use adialog_app::config::{ClassStyle, StyleSettings};
use adialog_core::prelude::*;

use super::palette;

#[derive(Debug, Clone)]
pub struct StyleSheet {
    rules: BTreeMap<String, Style>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let mut sheet = Self::empty();
        sheet.set(
            classes::ASYNC_DIALOG,
            Style::default().fg(palette::TEXT_PRIMARY).bg(palette::POPUP_BG),
        );
        sheet.set(classes::WRAPPER, Style::default().fg(palette::BORDER));
        sheet.set(
            classes::TITLE,
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        );
        sheet.set(classes::BODY, Style::default().fg(palette::TEXT_PRIMARY));
        sheet.set(
            classes::OK,
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        );
        sheet.set(classes::CANCEL, Style::default().fg(palette::TEXT_SECONDARY));
        sheet
    }
}

impl StyleSheet {
    /// A sheet with no rules at all
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Built-in rules extended with the configured ones
    pub fn from_settings(settings: &StyleSettings) -> Self {
        let mut sheet = Self::default();
        sheet.extend_from(settings);
        sheet
    }

    /// Replace the rule for `class`
    pub fn set(&mut self, class: impl Into<String>, style: Style) {
        self.rules.insert(class.into(), style);
    }

    pub fn get(&self, class: &str) -> Option<Style> {
        self.rules.get(class).copied()
    }

    /// Layer configured class styles over the existing rules
    pub fn extend_from(&mut self, settings: &StyleSettings) {
        for (class, custom) in &settings.classes {
            let base = self.get(class).unwrap_or_default();
            self.set(class.clone(), base.patch(class_style(class, custom)));
        }
    }

    /// Combined style of a class list
    pub fn resolve<'s>(&self, classes: impl IntoIterator<Item = &'s str>) -> Style {
        classes
            .into_iter()
            .filter_map(|class| self.rules.get(class))
            .fold(Style::default(), |acc, rule| acc.patch(*rule))
    }
}

fn class_style(class: &str, custom: &ClassStyle) -> Style {
    let mut style = Style::default();
    if let Some(fg) = custom.fg.as_deref().and_then(|c| parse_color(class, c)) {
        style = style.fg(fg);
    }
    if let Some(bg) = custom.bg.as_deref().and_then(|c| parse_color(class, c)) {
        style = style.bg(bg);
    }
    if custom.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

fn parse_color(class: &str, raw: &str) -> Option<Color> {
    match Color::from_str(raw) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Ignoring unknown color {:?} for class {}", raw, class);
            None
        }
    }
}
