use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport {
    pub country_code: String,
    pub male: u64,
    pub female: u64,
}

/// Groups digits in threes for terminal display, e.g. 1234567 -> "1,234,567".
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(735_475_346), "735,475,346");
    }
}
