use std::fmt;
use std::str::FromStr;

#[derive(Default)]
pub struct Config {
    /// Hides the banner printed before every command.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` drops banners and headers, `2` also drops decorations around results.
    pub quiet: u8,
    /// Language used for every user-facing sentence.
    pub locale: Locale,
    /// Emits results as JSON instead of styled text.
    pub json: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts language tags case-insensitively, ignoring any region suffix
    /// (`es`, `ES`, `es-MX`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lang = lower
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        match lang {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" | "español" => Ok(Locale::Es),
            _ => Err(format!("unsupported language: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Es => write!(f, "es"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_from_str() {
        assert_eq!(Locale::from_str("en"), Ok(Locale::En));
        assert_eq!(Locale::from_str("ES"), Ok(Locale::Es));
        assert_eq!(Locale::from_str("es-MX"), Ok(Locale::Es));
        assert_eq!(Locale::from_str("en_US"), Ok(Locale::En));
        assert_eq!(Locale::from_str(" spanish "), Ok(Locale::Es));

        assert!(Locale::from_str("fr").is_err());
        assert!(Locale::from_str("").is_err());
    }

    #[test]
    fn locale_display_round_trips() {
        for locale in [Locale::En, Locale::Es] {
            assert_eq!(Locale::from_str(&locale.to_string()), Ok(locale));
        }
    }
}
