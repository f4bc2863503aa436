use crate::braille;
use crate::config::AppConfig;
use crate::form::{FormField, FormState, InputError, Submission};
use crate::locale::Locale;
use crate::particles::{ParticleField, Pointer};
use crate::percentile;
use crate::theme::Theme;

/// Text shown in the result area after a submission
#[derive(Debug, Clone, PartialEq)]
pub enum ResultMessage {
    Ranked(String),
    Invalid(&'static str),
}

impl ResultMessage {
    pub fn text(&self) -> &str {
        match self {
            ResultMessage::Ranked(text) => text,
            ResultMessage::Invalid(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultMessage::Invalid(_))
    }
}

/// Turn a validated (or rejected) submission into the message to display
pub fn evaluate(submission: Result<Submission, InputError>, locale: Locale) -> ResultMessage {
    match submission {
        Ok(submission) => {
            let estimate = percentile::estimate(submission.height_cm, submission.gender);
            log::info!(
                "{:?} height {}cm: z={:.3}, below {:.2}%, top {:.2}%",
                submission.gender,
                submission.height_cm,
                estimate.z_score,
                estimate.percentile_below,
                estimate.top_percentile
            );
            ResultMessage::Ranked(locale.result_message(
                &submission.name,
                submission.height_cm,
                submission.gender,
                &estimate,
            ))
        }
        Err(err) => {
            log::debug!("rejected submission: {}", err);
            ResultMessage::Invalid(locale.validation_message())
        }
    }
}

/// Main application state
pub struct App {
    pub field: ParticleField,
    pub pointer: Pointer,
    pub theme: Theme,
    pub locale: Locale,
    pub form: FormState,
    pub result: Option<ResultMessage>,
    pub show_help: bool,
    pub help_scroll: u16,
    pub columns: u16,
    pub rows: u16,
    cell_width_px: u16,
    cell_height_px: u16,
}

impl App {
    pub fn new(columns: u16, rows: u16, config: &AppConfig, seed: Option<u64>) -> Self {
        let (width, height) =
            braille::canvas_pixels(columns, rows, config.cell_width_px, config.cell_height_px);
        let field = match seed {
            Some(seed) => ParticleField::with_seed(width, height, seed),
            None => ParticleField::new(width, height),
        };
        Self {
            field,
            pointer: Pointer::new(width, height),
            theme: config.theme,
            locale: config.locale,
            form: FormState::default(),
            result: None,
            show_help: false,
            help_scroll: 0,
            columns,
            rows,
            cell_width_px: config.cell_width_px,
            cell_height_px: config.cell_height_px,
        }
    }

    /// Advance the particle field by one frame
    pub fn tick(&mut self) {
        self.field.step(&self.pointer);
    }

    /// Switch between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        log::info!("theme switched to {}", self.theme.name());
    }

    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::En => Locale::Ko,
            Locale::Ko => Locale::En,
        };
    }

    /// Validate the form and replace the result message
    pub fn submit(&mut self) {
        self.result = Some(evaluate(self.form.validate(), self.locale));
    }

    /// Enter on the focused element: buttons activate, everything else submits
    pub fn activate_focused(&mut self) {
        match self.form.focus {
            FormField::ThemeToggle => self.toggle_theme(),
            _ => self.submit(),
        }
    }

    pub fn focus(&mut self, field: FormField) {
        self.form.focus = field;
    }

    /// Mouse moved to a terminal cell
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let (x, y) =
            braille::cell_center_pixels(column, row, self.cell_width_px, self.cell_height_px);
        self.pointer.move_to(x, y);
    }

    /// Terminal resized: new canvas, new pointer radius, fresh particles
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        let (width, height) =
            braille::canvas_pixels(columns, rows, self.cell_width_px, self.cell_height_px);
        self.pointer.resize(width, height);
        self.field.resize(width, height);
        log::debug!(
            "resized to {}x{} cells, {} particles",
            columns,
            rows,
            self.field.particles.len()
        );
    }

    pub fn toggle_pause(&mut self) {
        self.field.toggle_pause();
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_scroll = 0; // Reset scroll when opening
        }
    }

    /// Scroll help content up
    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    /// Scroll help content down
    pub fn scroll_help_down(&mut self, max_scroll: u16) {
        self.help_scroll = (self.help_scroll + 1).min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::percentile::Gender;

    fn app() -> App {
        App::new(160, 40, &AppConfig::default(), Some(42))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.form.insert_char(c);
        }
    }

    #[test]
    fn test_new_app_sizes_field_from_terminal() {
        let app = app();
        assert_eq!(app.field.width, 1280.0);
        assert_eq!(app.field.height, 640.0);
        assert_eq!(app.field.particles.len(), 91);
        assert_eq!(app.pointer.radius, 6.4 * 12.8);
        assert!(app.pointer.position.is_none());
    }

    #[test]
    fn test_submit_ranks_valid_input() {
        let mut app = app();
        type_text(&mut app, "Alex");
        app.form.next_focus();
        type_text(&mut app, "190");
        app.submit();

        let result = app.result.as_ref().unwrap();
        assert!(!result.is_error());
        assert_eq!(result.text(), "Alex, height 190cm ranks in the top 2.28% for male.");
    }

    #[test]
    fn test_submit_with_empty_name_shows_validation() {
        let mut app = app();
        app.focus(FormField::Height);
        type_text(&mut app, "180");
        app.submit();

        assert_eq!(app.result, Some(ResultMessage::Invalid("Please enter valid values.")));
    }

    #[test]
    fn test_submit_with_bad_height_shows_validation() {
        let mut app = app();
        type_text(&mut app, "Alex");
        app.focus(FormField::Height);
        type_text(&mut app, "abc");
        app.submit();

        assert!(app.result.as_ref().unwrap().is_error());
    }

    #[test]
    fn test_new_submission_replaces_previous() {
        let mut app = app();
        type_text(&mut app, "Jo");
        app.focus(FormField::Height);
        type_text(&mut app, "163");
        app.form.toggle_gender();
        app.submit();
        assert_eq!(
            app.result.as_ref().unwrap().text(),
            "Jo, height 163cm ranks in the top 50.00% for female."
        );

        app.form.height.clear();
        app.submit();
        assert!(app.result.as_ref().unwrap().is_error());
    }

    #[test]
    fn test_enter_on_theme_button_toggles_theme() {
        let mut app = app();
        app.focus(FormField::ThemeToggle);
        app.activate_focused();
        assert_eq!(app.theme, Theme::Dark);
        assert!(app.result.is_none());

        app.focus(FormField::Gender);
        app.activate_focused();
        assert!(app.result.is_some());
    }

    #[test]
    fn test_resize_regenerates_particles_and_radius() {
        let mut app = app();
        app.resize(80, 24);
        assert_eq!(app.field.width, 640.0);
        assert_eq!(app.field.height, 384.0);
        assert_eq!(app.field.particles.len(), 27);
        assert_eq!(app.pointer.radius, 3.84 * 6.4);
        assert!(app.field.particles.iter().all(|p| p.x >= 0.0
            && p.x <= 640.0
            && p.y >= 0.0
            && p.y <= 384.0));
    }

    #[test]
    fn test_pointer_maps_to_cell_center() {
        let mut app = app();
        app.pointer_moved(10, 2);
        assert_eq!(app.pointer.position, Some((84.0, 40.0)));
    }

    #[test]
    fn test_korean_locale_messages() {
        let mut app = app();
        app.toggle_locale();
        type_text(&mut app, "지민");
        app.focus(FormField::Height);
        type_text(&mut app, "176");
        app.submit();
        assert_eq!(
            app.result.as_ref().unwrap().text(),
            "지민님, 키 176cm는 남성 기준 상위 50.00%에 속합니다."
        );
    }

    #[test]
    fn test_evaluate_without_app() {
        let message = evaluate(
            Ok(Submission {
                name: "Pat".to_string(),
                height_cm: 176.0,
                gender: Gender::Male,
            }),
            Locale::En,
        );
        assert_eq!(message.text(), "Pat, height 176cm ranks in the top 50.00% for male.");

        let message = evaluate(Err(InputError::EmptyName), Locale::Ko);
        assert_eq!(message, ResultMessage::Invalid("유효한 값을 입력해주세요."));
    }
}
