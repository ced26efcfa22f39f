//! Element tree for the select controller.

use crate::element::Element;
use crate::layout::wrap_lines;
use crate::selection::SelectMode;
use crate::text::{display_width, truncate_to_width};
use crate::types::{Border, Color, Edges, Size, Style, Wrap};

use super::{Part, SelectController};

/// Height of the closed control with one content row inside a border.
pub const BODY_HEIGHT: u16 = 3;

/// Cells taken by everything in the body except the value span: border,
/// padding, three gaps, clear button, divider and caret.
const CHROME_WIDTH: u16 = 10;

const PLACEHOLDER: &str = "Select...";

impl SelectController {
    /// Build the element tree for the current value and view state.
    ///
    /// Ids: `<id>` body, `<id>-value`, `<id>-badge-<n>`, `<id>-clear`,
    /// `<id>-divider`, `<id>-caret`, `<id>-options` and `<id>-opt-<n>`.
    pub fn view(&self) -> Element {
        let theme = &self.config.theme;
        let enabled = !self.config.disabled;

        log::trace!(
            "select {}: view open={} selected={}",
            self.id,
            self.is_open(),
            self.value.selected().len()
        );

        let border = if self.focused { theme.focus } else { theme.muted };
        let mut body = Element::row()
            .id(&self.id)
            .width(Size::Fixed(self.config.width))
            .height(Size::Fixed(self.body_height()))
            .padding(Edges::horizontal(1))
            .gap(1)
            .clickable(enabled)
            .style(
                Style::new()
                    .background(theme.background)
                    .foreground(border)
                    .border(Border::Rounded),
            )
            .child(self.value_span())
            .child(
                Element::text("×")
                    .id(self.part_id("clear"))
                    .clickable(enabled)
                    .style(self.text_style(if self.hovered == Some(Part::Clear) {
                        theme.accent
                    } else {
                        theme.muted
                    })),
            )
            .child(
                Element::text("│")
                    .id(self.part_id("divider"))
                    .style(self.text_style(theme.muted)),
            )
            .child(
                Element::text(if self.is_open() { "▲" } else { "▼" })
                    .id(self.part_id("caret"))
                    .style(self.text_style(theme.muted)),
            );

        if self.is_open() {
            body = body.child(self.option_list());
        }
        body
    }

    /// Body height, grown by one row for every extra line of badges.
    pub fn body_height(&self) -> u16 {
        BODY_HEIGHT + self.badge_lines().saturating_sub(1) as u16
    }

    fn value_width(&self) -> u16 {
        self.config.width.saturating_sub(CHROME_WIDTH)
    }

    /// Badge label, cut so the label and its remove mark fit on one line.
    fn badge_label(&self, label: &str) -> String {
        truncate_to_width(label, self.value_width().saturating_sub(2) as usize)
    }

    /// Number of lines the badges wrap onto. Zero outside multiple mode.
    fn badge_lines(&self) -> usize {
        if self.mode() != SelectMode::Multiple {
            return 0;
        }
        let sizes: Vec<u16> = self
            .value
            .selected()
            .iter()
            .map(|option| display_width(&self.badge_label(option.label())) as u16 + 2)
            .collect();
        wrap_lines(&sizes, self.value_width(), 1)
            .last()
            .map_or(0, |line| line + 1)
    }

    fn text_style(&self, fg: Color) -> Style {
        let style = Style::new().foreground(fg);
        if self.config.disabled {
            style.dim()
        } else {
            style
        }
    }

    fn value_span(&self) -> Element {
        let theme = &self.config.theme;
        let span = Element::row()
            .id(self.part_id("value"))
            .width(Size::Fill)
            .gap(1);
        let available = self.value_width() as usize;

        let selected = self.value.selected();
        if selected.is_empty() {
            let placeholder = self.config.placeholder.as_deref().unwrap_or(PLACEHOLDER);
            return span.child(
                Element::text(truncate_to_width(placeholder, available))
                    .style(Style::new().foreground(theme.muted).dim()),
            );
        }

        match self.mode() {
            SelectMode::Single => span.child(
                Element::text(truncate_to_width(selected[0].label(), available))
                    .style(self.text_style(theme.text)),
            ),
            SelectMode::Multiple => span
                .wrap(Wrap::Wrap)
                .height(Size::Fixed(self.badge_lines() as u16))
                .children(selected.iter().enumerate().map(|(n, option)| {
                    let hovered = self.hovered == Some(Part::Badge(n));
                    let (fg, remove_fg) = if hovered {
                        (theme.badge_hover_fg, theme.badge_hover_fg)
                    } else {
                        (theme.text, theme.muted)
                    };
                    let mut badge = Element::row()
                        .id(self.part_id(&format!("badge-{n}")))
                        .clickable(!self.config.disabled)
                        .gap(1)
                        .child(
                            Element::text(self.badge_label(option.label()))
                                .style(self.text_style(fg)),
                        )
                        .child(Element::text("×").style(self.text_style(remove_fg)));
                    if hovered {
                        badge = badge.style(Style::new().background(theme.badge_hover_bg));
                    }
                    badge
                })),
        }
    }

    fn option_list(&self) -> Element {
        let theme = &self.config.theme;
        let rows = self.visible_rows();
        let label_width = self.config.width.saturating_sub(4) as usize;

        let items = self
            .config
            .options
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(rows)
            .map(|(n, option)| {
                let style = if self.hovered == Some(Part::Option(n)) {
                    Style::new()
                        .background(theme.accent)
                        .foreground(theme.accent_text)
                } else if self.is_selected(option) {
                    Style::new().foreground(theme.selected_text).bold()
                } else {
                    Style::new().foreground(theme.text)
                };
                Element::text(truncate_to_width(option.label(), label_width))
                    .id(self.part_id(&format!("opt-{n}")))
                    .width(Size::Fill)
                    .padding(Edges::horizontal(1))
                    .clickable(true)
                    .style(style)
            });

        Element::col()
            .id(self.part_id("options"))
            .absolute(self.body_height(), 0)
            .width(Size::Fill)
            .height(Size::Fixed(rows as u16 + 2))
            .z_index(10)
            .clickable(true)
            .style(
                Style::new()
                    .background(theme.background)
                    .foreground(theme.muted)
                    .border(Border::Single),
            )
            .children(items)
    }
}
