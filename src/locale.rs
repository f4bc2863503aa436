use crate::percentile::{Gender, PercentileEstimate};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Language of every user-visible string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub fn name(&self) -> &str {
        match self {
            Locale::En => "English",
            Locale::Ko => "한국어",
        }
    }

    /// Label of the theme button, naming the theme it switches to
    pub fn toggle_label(&self, current: Theme) -> &'static str {
        match (self, current) {
            (Locale::En, Theme::Dark) => "Light mode",
            (Locale::En, Theme::Light) => "Dark mode",
            (Locale::Ko, Theme::Dark) => "라이트 모드",
            (Locale::Ko, Theme::Light) => "다크 모드",
        }
    }

    pub fn validation_message(&self) -> &'static str {
        match self {
            Locale::En => "Please enter valid values.",
            Locale::Ko => "유효한 값을 입력해주세요.",
        }
    }

    pub fn gender_word(&self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Locale::En, Gender::Male) => "male",
            (Locale::En, Gender::Female) => "female",
            (Locale::Ko, Gender::Male) => "남성",
            (Locale::Ko, Gender::Female) => "여성",
        }
    }

    /// Sentence reporting where `height_cm` ranks
    pub fn result_message(
        &self,
        name: &str,
        height_cm: f64,
        gender: Gender,
        estimate: &PercentileEstimate,
    ) -> String {
        let gender_word = self.gender_word(gender);
        // "-0" parses fine but should read as 0
        let height_cm = if height_cm == 0.0 { 0.0 } else { height_cm };
        match self {
            Locale::En => format!(
                "{}, height {}cm ranks in the top {:.2}% for {}.",
                name, height_cm, estimate.top_percentile, gender_word
            ),
            Locale::Ko => format!(
                "{}님, 키 {}cm는 {} 기준 상위 {:.2}%에 속합니다.",
                name, height_cm, gender_word, estimate.top_percentile
            ),
        }
    }

    // Form labels

    pub fn title(&self) -> &'static str {
        match self {
            Locale::En => " Height Percentile ",
            Locale::Ko => " 키 백분위 계산기 ",
        }
    }

    pub fn name_label(&self) -> &'static str {
        match self {
            Locale::En => "Name",
            Locale::Ko => "이름",
        }
    }

    pub fn height_label(&self) -> &'static str {
        match self {
            Locale::En => "Height (cm)",
            Locale::Ko => "키 (cm)",
        }
    }

    pub fn gender_label(&self) -> &'static str {
        match self {
            Locale::En => "Gender",
            Locale::Ko => "성별",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Locale::En => "Calculate",
            Locale::Ko => "계산하기",
        }
    }

    /// Key summary under the form
    pub fn hint(&self, paused: bool) -> &'static str {
        match (self, paused) {
            (Locale::En, true) => "paused · Tab move · Enter submit · ^T theme · F1 help",
            (Locale::En, false) => "Tab move · Enter submit · ^T theme · F1 help · Esc quit",
            (Locale::Ko, true) => "일시정지 · Tab 이동 · Enter 계산 · ^T 테마 · F1 도움말",
            (Locale::Ko, false) => "Tab 이동 · Enter 계산 · ^T 테마 · F1 도움말 · Esc 종료",
        }
    }

    // Help overlay

    pub fn help_title(&self, scrollable: bool) -> &'static str {
        match (self, scrollable) {
            (Locale::En, true) => " Help (↑↓ scroll, F1 to close) ",
            (Locale::En, false) => " Help (F1 to close) ",
            (Locale::Ko, true) => " 도움말 (↑↓ 스크롤, F1 닫기) ",
            (Locale::Ko, false) => " 도움말 (F1 닫기) ",
        }
    }

    pub fn help_intro(&self) -> (&'static str, &'static str) {
        match self {
            Locale::En => (
                "HEIGHT PERCENTILE",
                "Enter a name and height; the result shows what share of the population is at least as tall, using a normal model (men 176±7 cm, women 163±6.5 cm).",
            ),
            Locale::Ko => (
                "키 백분위",
                "이름과 키를 입력하면 정규분포 모델(남성 176±7 cm, 여성 163±6.5 cm)로 그 키 이상인 인구 비율을 보여줍니다.",
            ),
        }
    }

    /// Headed groups of key bindings
    pub fn help_sections(&self) -> [(&'static str, &'static [&'static str]); 3] {
        match self {
            Locale::En => [
                (
                    "FORM:",
                    &[
                        "Tab / Shift+Tab - move between fields",
                        "Left/Right/Space - switch gender",
                        "Enter - calculate (or press the focused button)",
                        "Mouse click - focus a field or press a button",
                    ],
                ),
                (
                    "BACKGROUND:",
                    &[
                        "Move the mouse to push particles away",
                        "Ctrl+P - pause/resume particles",
                    ],
                ),
                (
                    "GENERAL:",
                    &[
                        "Ctrl+T - switch theme",
                        "Ctrl+L - switch language",
                        "F1 - help, Esc - close help / quit, Ctrl+C - quit",
                    ],
                ),
            ],
            Locale::Ko => [
                (
                    "입력:",
                    &[
                        "Tab / Shift+Tab - 항목 이동",
                        "←/→/Space - 성별 전환",
                        "Enter - 계산 (또는 선택된 버튼 누르기)",
                        "마우스 클릭 - 항목 선택 또는 버튼 누르기",
                    ],
                ),
                (
                    "배경:",
                    &[
                        "마우스를 움직여 입자 밀어내기",
                        "Ctrl+P - 입자 일시정지/재개",
                    ],
                ),
                (
                    "일반:",
                    &[
                        "Ctrl+T - 테마 전환",
                        "Ctrl+L - 언어 전환",
                        "F1 - 도움말, Esc - 도움말 닫기 / 종료, Ctrl+C - 종료",
                    ],
                ),
            ],
        }
    }
}
