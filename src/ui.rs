use crate::app::App;
use crate::braille;
use crate::form::FormField;
use crate::theme::Theme;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Max scroll for help content (generous to account for text wrapping on small screens)
pub const HELP_CONTENT_LINES: u16 = 30;

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 13;
const LABEL_WIDTH: usize = 13;
const RESULT_LINES: u16 = 3;
const ERROR_COLOR: Color = Color::Rgb(0xd0, 0x3a, 0x3a);

/// Screen regions of the form card, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormLayout {
    pub card: Rect,
    pub name: Rect,
    pub height: Rect,
    pub gender: Rect,
    pub submit: Rect,
    pub theme_toggle: Rect,
    pub result: Rect,
    pub hint: Rect,
}

impl FormLayout {
    /// Lay out the card centered in `area`; button widths follow their labels
    pub fn new(area: Rect, submit_label: &str, toggle_label: &str) -> Self {
        let width = CARD_WIDTH.min(area.width);
        let height = CARD_HEIGHT.min(area.height);
        let card = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };
        let inner = Rect {
            x: card.x + 1,
            y: card.y + 1,
            width: card.width.saturating_sub(2),
            height: card.height.saturating_sub(2),
        };

        let row = |offset: u16, rows: u16| {
            Rect {
                x: inner.x,
                y: inner.y + offset,
                width: inner.width,
                height: rows,
            }
            .intersection(inner)
        };

        let submit_width = Span::raw(submit_label).width() as u16 + 4;
        let toggle_width = Span::raw(toggle_label).width() as u16 + 4;
        let buttons = row(5, 1);
        let submit = Rect {
            x: buttons.x + 2,
            width: submit_width,
            ..buttons
        }
        .intersection(buttons);
        let theme_toggle = Rect {
            x: buttons.x + 2 + submit_width + 3,
            width: toggle_width,
            ..buttons
        }
        .intersection(buttons);

        Self {
            card,
            name: row(1, 1),
            height: row(2, 1),
            gender: row(3, 1),
            submit,
            theme_toggle,
            result: row(7, RESULT_LINES),
            hint: row(10, 1),
        }
    }

    /// Form element under a terminal cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<FormField> {
        let position = Position::new(column, row);
        [
            (self.submit, FormField::Submit),
            (self.theme_toggle, FormField::ThemeToggle),
            (self.name, FormField::Name),
            (self.height, FormField::Height),
            (self.gender, FormField::Gender),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, field)| field)
    }
}

/// Layout for the app's current terminal size and labels
pub fn form_layout(app: &App) -> FormLayout {
    let area = Rect::new(0, 0, app.columns, app.rows);
    FormLayout::new(
        area,
        app.locale.submit_label(),
        app.locale.toggle_label(app.theme),
    )
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    // Theme is read once per frame and passed down by value
    let theme = app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );
    render_canvas(frame, area, app, theme);

    let layout = FormLayout::new(
        area,
        app.locale.submit_label(),
        app.locale.toggle_label(theme),
    );
    render_form(frame, &layout, app, theme);

    if app.show_help {
        render_help_overlay(frame, area, app, theme);
    }
}

fn render_canvas(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let cells = braille::render_to_braille(&app.field, area.width, area.height);
    let style = Style::default().fg(theme.foreground()).bg(theme.background());

    for cell in cells {
        let x = area.x + cell.x;
        let y = area.y + cell.y;

        if x < area.x + area.width && y < area.y + area.height {
            let cell_rect = Rect {
                x,
                y,
                width: 1,
                height: 1,
            };
            let span = Span::styled(cell.char.to_string(), style);
            frame.render_widget(Paragraph::new(Line::from(span)), cell_rect);
        }
    }
}

fn render_form(frame: &mut Frame, layout: &FormLayout, app: &App, theme: Theme) {
    let surface = Style::default().fg(theme.foreground()).bg(theme.surface());
    let focused = Style::default()
        .fg(theme.accent())
        .bg(theme.surface())
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.dim()).bg(theme.surface());
    let locale = app.locale;
    let focus = app.form.focus;

    frame.render_widget(Clear, layout.card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent()).bg(theme.surface()))
        .style(surface)
        .title(locale.title());
    frame.render_widget(block, layout.card);

    let field_line = |label: &str, value: String, field: FormField| {
        let is_focused = focus == field;
        let prefix = if is_focused { "> " } else { "  " };
        let label_style = if is_focused { focused } else { surface };
        Line::from(vec![
            Span::styled(format!("{}{:<width$}", prefix, label, width = LABEL_WIDTH), label_style),
            Span::styled(value, surface),
        ])
    };
    let cursor = |field: FormField| if focus == field { "_" } else { "" };

    frame.render_widget(
        Paragraph::new(field_line(
            locale.name_label(),
            format!("{}{}", app.form.name, cursor(FormField::Name)),
            FormField::Name,
        )),
        layout.name,
    );
    frame.render_widget(
        Paragraph::new(field_line(
            locale.height_label(),
            format!("{}{}", app.form.height, cursor(FormField::Height)),
            FormField::Height,
        )),
        layout.height,
    );
    frame.render_widget(
        Paragraph::new(field_line(
            locale.gender_label(),
            format!("◀ {} ▶", locale.gender_word(app.form.gender)),
            FormField::Gender,
        )),
        layout.gender,
    );

    let button = |label: &str, field: FormField| {
        let style = if focus == field {
            Style::default()
                .fg(theme.surface())
                .bg(theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent()).bg(theme.surface())
        };
        Paragraph::new(Span::styled(format!("[ {} ]", label), style))
    };
    frame.render_widget(button(locale.submit_label(), FormField::Submit), layout.submit);
    frame.render_widget(
        button(locale.toggle_label(theme), FormField::ThemeToggle),
        layout.theme_toggle,
    );

    if let Some(result) = &app.result {
        let style = if result.is_error() {
            Style::default().fg(ERROR_COLOR).bg(theme.surface())
        } else {
            surface
        };
        let paragraph = Paragraph::new(Span::styled(result.text().to_string(), style))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, layout.result);
    }

    let hint = locale.hint(app.field.paused);
    frame.render_widget(Paragraph::new(Span::styled(hint, dim)), layout.hint);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let help_width = 56.min(area.width.saturating_sub(4));
    let help_height = area.height.saturating_sub(4).min(26);
    let help_area = Rect {
        x: area.x + (area.width.saturating_sub(help_width)) / 2,
        y: area.y + (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    // Clear the background
    frame.render_widget(Clear, help_area);

    let heading = Style::default().fg(theme.accent());
    let text = Style::default().fg(theme.foreground());
    let locale = app.locale;
    let (banner, intro) = locale.help_intro();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(banner, heading)),
        Line::from(""),
        Line::from(Span::styled(intro, text)),
        Line::from(""),
    ];
    for (section, lines) in locale.help_sections() {
        content.push(Line::from(Span::styled(section, heading)));
        content.extend(lines.iter().map(|line| Line::from(Span::styled(*line, text))));
        content.push(Line::from(""));
    }

    let content_height = content.len() as u16;
    let visible_height = help_height.saturating_sub(2); // minus borders
    let max_scroll = content_height.saturating_sub(visible_height);
    let is_scrollable = max_scroll > 0;

    // Update title to show scroll hint if scrollable
    let title = locale.help_title(is_scrollable);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.accent()))
        .style(Style::default().bg(theme.surface()))
        .title(title);

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll, 0));

    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_card_is_centered() {
        let layout = FormLayout::new(Rect::new(0, 0, 100, 40), "Calculate", "Dark mode");
        assert_eq!(layout.card, Rect::new(20, 13, 60, 13));
        assert_eq!(layout.name.y, 15);
        assert_eq!(layout.submit.width, "Calculate".len() as u16 + 4);
    }

    #[test]
    fn test_hit_testing() {
        let layout = FormLayout::new(Rect::new(0, 0, 100, 40), "Calculate", "Dark mode");
        assert_eq!(layout.hit(layout.name.x + 3, layout.name.y), Some(FormField::Name));
        assert_eq!(layout.hit(layout.gender.x, layout.gender.y), Some(FormField::Gender));
        assert_eq!(layout.hit(layout.submit.x, layout.submit.y), Some(FormField::Submit));
        assert_eq!(
            layout.hit(layout.theme_toggle.x + 1, layout.theme_toggle.y),
            Some(FormField::ThemeToggle)
        );
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = FormLayout::new(Rect::new(0, 0, 3, 2), "Calculate", "Dark mode");
        assert!(layout.card.width <= 3 && layout.card.height <= 2);
        assert_eq!(layout.hit(1, 1), None);
    }

    #[test]
    fn test_render_shows_form_and_result() {
        let mut app = App::new(80, 24, &AppConfig::default(), Some(9));
        for c in "Alex".chars() {
            app.form.insert_char(c);
        }
        app.form.next_focus();
        for c in "190".chars() {
            app.form.insert_char(c);
        }
        app.submit();
        app.toggle_help();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        app.toggle_help();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Height Percentile"));
        assert!(text.contains("Alex"));
        assert!(text.contains("2.28%"));
        assert!(text.contains("[ Dark mode ]"));
    }

    fn braille_colors(terminal: &Terminal<TestBackend>) -> Vec<Color> {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| {
                cell.symbol()
                    .chars()
                    .next()
                    .is_some_and(|c| ('\u{2800}'..='\u{28FF}').contains(&c))
            })
            .map(|cell| cell.fg)
            .collect()
    }

    #[test]
    fn test_particles_follow_theme_each_frame() {
        let mut app = App::new(160, 48, &AppConfig::default(), Some(5));
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let light = braille_colors(&terminal);
        assert!(!light.is_empty());
        assert!(light.iter().all(|&fg| fg == Theme::Light.foreground()));

        let count = app.field.particles.len();
        app.toggle_theme();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let dark = braille_colors(&terminal);
        assert_eq!(dark.len(), light.len());
        assert!(dark.iter().all(|&fg| fg == Theme::Dark.foreground()));
        assert_eq!(app.field.particles.len(), count);
    }

    #[test]
    fn test_korean_hint_and_help() {
        let mut app = App::new(80, 30, &AppConfig::default(), Some(3));
        app.toggle_locale();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(!text.contains("Esc quit"));
        assert!(text.contains('종'));

        app.toggle_help();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(!text.contains("Help ("));
        assert!(!text.contains("GENERAL:"));
        assert!(text.contains('움'));
    }
}
