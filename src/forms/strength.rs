//! Advisory password strength indicator.
//!
//! Two scoring policies exist and each registration screen is bound to one of
//! them. They are not interchangeable: the same password can rate differently
//! under each.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    /// Filled fraction of the meter, in thirds.
    pub fn bars(self) -> usize {
        match self {
            Strength::Weak => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthPolicy {
    /// Admin registration: length tiers, with upper case and a digit required
    /// for the top tier.
    LengthTiered,
    /// User registration: one point per satisfied criterion out of five.
    Scored,
}

impl StrengthPolicy {
    /// Rate a password. Empty passwords have no rating.
    pub fn evaluate(self, password: &str) -> Option<Strength> {
        if password.is_empty() {
            return None;
        }
        Some(match self {
            StrengthPolicy::LengthTiered => length_tiered(password),
            StrengthPolicy::Scored => scored(password),
        })
    }
}

fn length_tiered(password: &str) -> Strength {
    let len = password.chars().count();
    if len >= 10 && has_upper(password) && has_digit(password) {
        Strength::Strong
    } else if len >= 8 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

fn scored(password: &str) -> Strength {
    let points = [
        password.chars().count() >= 8,
        has_upper(password),
        has_lower(password),
        has_digit(password),
        has_special(password),
    ]
    .iter()
    .filter(|ok| **ok)
    .count();

    match points {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        _ => Strength::Strong,
    }
}

pub(crate) fn has_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lower(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside `[A-Za-z0-9]`, underscore included.
pub(crate) fn has_special(s: &str) -> bool {
    s.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_policy() {
        let p = StrengthPolicy::Scored;
        assert_eq!(p.evaluate(""), None);
        assert_eq!(p.evaluate("abc"), Some(Strength::Weak));
        assert_eq!(p.evaluate("abcdefgh"), Some(Strength::Weak));
        assert_eq!(p.evaluate("Abcdefgh"), Some(Strength::Medium));
        assert_eq!(p.evaluate("Abcdefg1"), Some(Strength::Medium));
        assert_eq!(p.evaluate("Abcdef1!"), Some(Strength::Strong));
        assert_eq!(p.evaluate("Abcdef1_"), Some(Strength::Strong));
    }

    #[test]
    fn test_length_tiered_policy() {
        let p = StrengthPolicy::LengthTiered;
        assert_eq!(p.evaluate("abc123"), Some(Strength::Weak));
        assert_eq!(p.evaluate("abcdefgh"), Some(Strength::Medium));
        assert_eq!(p.evaluate("abcdefghij"), Some(Strength::Medium));
        assert_eq!(p.evaluate("Abcdefghi1"), Some(Strength::Strong));
    }

    #[test]
    fn test_policies_disagree() {
        // Special characters count under Scored but not LengthTiered.
        assert_eq!(
            StrengthPolicy::Scored.evaluate("Abcdef1!"),
            Some(Strength::Strong)
        );
        assert_eq!(
            StrengthPolicy::LengthTiered.evaluate("Abcdef1!"),
            Some(Strength::Medium)
        );
    }
}
