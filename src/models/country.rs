/// Fixed alias table for common country names. Anything not listed is
/// passed through uppercased and left to the upstream to accept or reject,
/// which keeps two-letter ISO codes working without a second table.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("INDIA", "IN"),
    ("USA", "US"),
    ("AMERICA", "US"),
    ("UK", "GB"),
    ("UNITED KINGDOM", "GB"),
    ("JAPAN", "JP"),
    ("CHINA", "CN"),
    ("RUSSIA", "RU"),
    ("BRAZIL", "BR"),
    ("AUSTRALIA", "AU"),
    ("CANADA", "CA"),
    ("GERMANY", "DE"),
    ("FRANCE", "FR"),
];

#[must_use]
pub fn resolve_code(input: &str) -> String {
    let upper = input.trim().to_uppercase();
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map_or(upper, |(_, code)| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution() {
        assert_eq!(resolve_code("INDIA"), "IN");
        assert_eq!(resolve_code("america"), "US");
        assert_eq!(resolve_code("United Kingdom"), "GB");
    }

    #[test]
    fn test_two_letter_codes_pass_through() {
        assert_eq!(resolve_code("fr"), "FR");
        assert_eq!(resolve_code("JP"), "JP");
    }

    #[test]
    fn test_unknown_input_passes_through_uppercased() {
        assert_eq!(resolve_code("Narnia"), "NARNIA");
        assert_eq!(resolve_code("  br  "), "BR");
    }
}
