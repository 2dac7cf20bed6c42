use regex::Regex;

/// Runs a single pattern probe over `text` and returns its first capture
/// group, trimmed of surrounding whitespace.
///
/// Absence of a match is an expected outcome for a malformed or
/// partially-malformed citation, so this returns `None` rather than an error.
pub(crate) fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_capture() {
        let re = Regex::new(r"(\d{4})\.").unwrap();
        assert_eq!(
            first_capture(&re, "Журнал. 2021. No 3."),
            Some("2021".to_string())
        );
        assert_eq!(first_capture(&re, "Журнал. No 3."), None);
    }

    #[test]
    fn test_first_capture_trims_whitespace() {
        let re = Regex::new(r"//(.+)//").unwrap();
        assert_eq!(
            first_capture(&re, "// Вестник науки //"),
            Some("Вестник науки".to_string())
        );
    }
}
