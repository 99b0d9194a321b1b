/// Provider code tables used while normalizing draws
///
/// The provider's feeds are converted from legacy XML, so codes come in
/// several spellings. Comparisons against these tables are case-insensitive.
#[derive(Debug, Clone)]
pub struct ProviderCodes {
    pub qualifier: &'static [&'static str],
    pub wildcard: &'static [&'static str],
    pub final_round_numbers: &'static [i64],
    pub final_round_codes: &'static [&'static str],
    pub singles_match_type: &'static str,
    pub excluded_groups: &'static [&'static str],
}

impl ProviderCodes {
    pub fn is_qualifier(&self, entry_type: &str) -> bool {
        matches_any(self.qualifier, entry_type)
    }

    pub fn is_wildcard(&self, entry_type: &str) -> bool {
        matches_any(self.wildcard, entry_type)
    }

    pub fn is_singles(&self, match_type: &str) -> bool {
        match_type.trim().eq_ignore_ascii_case(self.singles_match_type)
    }

    pub fn is_excluded_group(&self, group_name: &str) -> bool {
        matches_any(self.excluded_groups, group_name)
    }
}

fn matches_any(codes: &[&str], value: &str) -> bool {
    let value = value.trim();
    codes.iter().any(|code| code.eq_ignore_ascii_case(value))
}

/// Get the code tables for the WTA feed
pub fn get_provider_codes() -> ProviderCodes {
    ProviderCodes {
        qualifier: &["Q"],
        wildcard: &["WC", "WILD", "WILDCARD"],
        final_round_numbers: &[1],
        final_round_codes: &["F"],
        singles_match_type: "S",
        // Team event, no singles bracket of its own
        excluded_groups: &["UNITED CUP"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_variants_are_case_insensitive() {
        let codes = get_provider_codes();
        for code in ["WC", "Wc", "wild", "Wildcard", " WC "] {
            assert!(codes.is_wildcard(code), "{code} should be a wildcard");
        }
        assert!(!codes.is_wildcard("Q"));
    }

    #[test]
    fn test_excluded_group() {
        let codes = get_provider_codes();
        assert!(codes.is_excluded_group("United Cup"));
        assert!(!codes.is_excluded_group("Brisbane International"));
    }
}
