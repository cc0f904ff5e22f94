//! Nigerian state reference data.

use serde::{Deserialize, Serialize};

/// A Nigerian state as seeded reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Two-letter state code.
    pub code: String,
    /// Official state name.
    pub name: String,
}

/// The 36 Nigerian states plus the Federal Capital Territory, keyed by code.
pub const NIGERIAN_STATES: &[(&str, &str)] = &[
    ("FC", "Abuja"),
    ("AB", "Abia"),
    ("AD", "Adamawa"),
    ("AK", "Akwa Ibom"),
    ("AN", "Anambra"),
    ("BA", "Bauchi"),
    ("BY", "Bayelsa"),
    ("BE", "Benue"),
    ("BO", "Borno"),
    ("CR", "Cross River"),
    ("DE", "Delta"),
    ("EB", "Ebonyi"),
    ("ED", "Edo"),
    ("EK", "Ekiti"),
    ("EN", "Enugu"),
    ("GO", "Gombe"),
    ("IM", "Imo"),
    ("JI", "Jigawa"),
    ("KD", "Kaduna"),
    ("KN", "Kano"),
    ("KT", "Katsina"),
    ("KE", "Kebbi"),
    ("KO", "Kogi"),
    ("KW", "Kwara"),
    ("LA", "Lagos"),
    ("NA", "Nasarawa"),
    ("NI", "Niger"),
    ("OG", "Ogun"),
    ("ON", "Ondo"),
    ("OS", "Osun"),
    ("OY", "Oyo"),
    ("PL", "Plateau"),
    ("RI", "Rivers"),
    ("SO", "Sokoto"),
    ("TA", "Taraba"),
    ("YO", "Yobe"),
    ("ZA", "Zamfara"),
];

impl State {
    /// Returns the full seed list as owned values.
    #[must_use]
    pub fn seed_list() -> Vec<Self> {
        NIGERIAN_STATES
            .iter()
            .map(|(code, name)| Self {
                code: (*code).to_owned(),
                name: (*name).to_owned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_list_has_thirty_seven_entries() {
        assert_eq!(State::seed_list().len(), 37);
    }

    #[test]
    fn state_codes_are_unique() {
        let codes: HashSet<&str> = NIGERIAN_STATES.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), NIGERIAN_STATES.len());
    }

    #[test]
    fn codes_are_two_uppercase_letters() {
        for (code, _) in NIGERIAN_STATES {
            assert_eq!(code.len(), 2);
            assert!(code.bytes().all(|byte| byte.is_ascii_uppercase()));
        }
    }
}
