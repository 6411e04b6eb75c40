use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard color theme. Affects styling only, never computed values.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors applied to a chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    pub background: &'static str,
    pub font_color: &'static str,
    pub grid_color: &'static str,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn chart_style(&self) -> ChartStyle {
        match self {
            Theme::Light => ChartStyle {
                background: "white",
                font_color: "black",
                grid_color: "#e5e5e5",
            },
            Theme::Dark => ChartStyle {
                background: "#303030",
                font_color: "white",
                grid_color: "#4a4a4a",
            },
        }
    }

    /// Caption of the toggle button: it offers the *other* theme.
    pub fn toggle_caption(&self) -> &'static str {
        match self {
            Theme::Light => "Modo Oscuro",
            Theme::Dark => "Modo Claro",
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn dark_chart_uses_dark_background() {
        let style = Theme::Dark.chart_style();
        assert_eq!(style.background, "#303030");
        assert_eq!(style.font_color, "white");
        assert_eq!(Theme::Light.chart_style().background, "white");
    }
}
