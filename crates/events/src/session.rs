use bayespro_bayes::BayesResult;
use bayespro_report::Theme;

/// State of one dashboard session: the last successful result and the theme.
///
/// The snapshot is a single slot. A new successful calculation replaces it
/// wholesale; failures never touch it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    last_result: Option<BayesResult>,
    theme: Theme,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            last_result: None,
            theme,
        }
    }

    pub fn last_result(&self) -> Option<&BayesResult> {
        self.last_result.as_ref()
    }

    pub fn replace_result(&mut self, result: BayesResult) {
        self.last_result = Some(result);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
