use std::str::FromStr;

/// Language used for display labels, durations and confirmation texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Ok(Locale::Fr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_locales_case_insensitively() {
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("fr-FR".parse::<Locale>().unwrap(), Locale::Fr);
    }

    #[test]
    fn rejects_unknown_locale() {
        assert_eq!(
            "de".parse::<Locale>(),
            Err(UnsupportedLocale("de".to_string()))
        );
    }
}
