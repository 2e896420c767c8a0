// src/complexity.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rules::{self, ValidationError};

/// Complexity tier of a password, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Complexity {
    Low,
    Medium,
    High,
    Ultra,
}

struct TierRule {
    tier: Complexity,
    minimum_length: usize,
    requires_both_cases: bool,
    requires_special: bool,
}

impl TierRule {
    fn matches(&self, length: usize, has_lower: bool, has_upper: bool, has_special: bool) -> bool {
        length >= self.minimum_length
            && (!self.requires_both_cases || (has_lower && has_upper))
            && (!self.requires_special || has_special)
    }
}

// Evaluated top to bottom; the first (strictest) matching rule wins. The Low
// rule places no requirement beyond the already-validated minimum length, so
// classification is total.
const TIER_RULES: [TierRule; 4] = [
    TierRule {
        tier: Complexity::Ultra,
        minimum_length: 17,
        requires_both_cases: true,
        requires_special: true,
    },
    TierRule {
        tier: Complexity::High,
        minimum_length: 9,
        requires_both_cases: true,
        requires_special: true,
    },
    TierRule {
        tier: Complexity::Medium,
        minimum_length: 6,
        requires_both_cases: true,
        requires_special: false,
    },
    TierRule {
        tier: Complexity::Low,
        minimum_length: rules::MIN_PASSWORD_LEN,
        requires_both_cases: false,
        requires_special: false,
    },
];

/// Classifies a password into a complexity tier.
///
/// A single scan tracks lowercase letters, uppercase letters, and special
/// characters. Digits and whitespace count toward neither case nor special.
pub fn classify(password: &str) -> Result<Complexity, ValidationError> {
    let length = password.chars().count();
    rules::check_length(length)?;

    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_alphabetic() {
            if c.is_lowercase() {
                has_lower = true;
            } else if c.is_uppercase() {
                has_upper = true;
            }
        } else if !c.is_numeric() && !c.is_whitespace() {
            has_special = true;
        }
    }

    let tier = TIER_RULES
        .iter()
        .find(|rule| rule.matches(length, has_lower, has_upper, has_special))
        .map(|rule| rule.tier)
        .unwrap_or(Complexity::Low);

    Ok(tier)
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Low => write!(f, "LOW"),
            Complexity::Medium => write!(f, "MEDIUM"),
            Complexity::High => write!(f, "HIGH"),
            Complexity::Ultra => write!(f, "ULTRA"),
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Complexity::Low),
            "MEDIUM" => Ok(Complexity::Medium),
            "HIGH" => Ok(Complexity::High),
            "ULTRA" => Ok(Complexity::Ultra),
            other => Err(format!("Unknown complexity tier: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(matches!(classify("ab"), Err(ValidationError::InvalidLength(2))));
        let too_long = "a".repeat(33);
        assert!(matches!(classify(&too_long), Err(ValidationError::InvalidLength(33))));
    }

    #[test]
    fn accepts_boundary_lengths() {
        assert_eq!(classify("abc").unwrap(), Complexity::Low);
        let max = "a".repeat(32);
        assert_eq!(classify(&max).unwrap(), Complexity::Low);
    }

    #[test]
    fn single_case_is_low() {
        assert_eq!(classify("abcdefghijk").unwrap(), Complexity::Low);
        assert_eq!(classify("ABCDEFGHIJK").unwrap(), Complexity::Low);
    }

    #[test]
    fn medium_needs_both_cases_and_six_chars() {
        assert_eq!(classify("aBcdef").unwrap(), Complexity::Medium);
        // One character short of the Medium threshold.
        assert_eq!(classify("aBcde").unwrap(), Complexity::Low);
    }

    #[test]
    fn high_needs_special_and_nine_chars() {
        assert_eq!(classify("aB!defghi").unwrap(), Complexity::High);
        // No special character keeps it at Medium regardless of length.
        assert_eq!(classify("aBcdefghi").unwrap(), Complexity::Medium);
        // Eight characters is one short of High.
        assert_eq!(classify("aB!defgh").unwrap(), Complexity::Medium);
    }

    #[test]
    fn ultra_needs_seventeen_chars() {
        assert_eq!(classify("aB!defghijklmnopq").unwrap(), Complexity::Ultra);
        assert_eq!(classify("aB!defghijklmnop").unwrap(), Complexity::High);
    }

    #[test]
    fn digits_and_whitespace_never_count_as_special() {
        assert_eq!(classify("aB1 2345 6789").unwrap(), Complexity::Medium);
        assert_eq!(classify("ab1 2345 6789").unwrap(), Complexity::Low);
    }

    #[test]
    fn classification_is_pure() {
        let tier = classify("aB!defghi").unwrap();
        assert_eq!(classify("aB!defghi").unwrap(), tier);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Complexity::Low < Complexity::Medium);
        assert!(Complexity::Medium < Complexity::High);
        assert!(Complexity::High < Complexity::Ultra);
    }

    #[test]
    fn display_round_trips() {
        for tier in [Complexity::Low, Complexity::Medium, Complexity::High, Complexity::Ultra] {
            assert_eq!(tier.to_string().parse::<Complexity>().unwrap(), tier);
        }
        assert!("SUPER".parse::<Complexity>().is_err());
    }
}
