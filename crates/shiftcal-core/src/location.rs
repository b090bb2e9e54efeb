//! Location resolution for date headers.
//!
//! A header such as `Moments - firmafest: 12/4` or `Albert Rex: 3/5` names
//! where the following shifts take place. The phrase before the date is run
//! through a small ordered rule table; the first rule that matches decides
//! the location, and a phrase that matches no rule is used verbatim.
//!
//! | order | phrase                          | location          |
//! |-------|---------------------------------|-------------------|
//! | 1     | contains the word `moments`     | Moments           |
//! | 2     | contains the words `albert rex` | Albert Rex        |
//! | 3     | two name-like words (`Jane Doe`)| Moments           |
//! | -     | anything else                   | the phrase itself |
//!
//! Shifts under a plain weekday header have no phrase and use the bar.

use serde::{Deserialize, Serialize};

/// Locations with a configured, fixed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedLocation {
    /// The default business location.
    Bar,
    /// The event venue, also used for private bookings.
    Moments,
    /// The external venue.
    AlbertRex,
}

/// A resolved shift location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// One of the configured locations.
    Fixed(FixedLocation),
    /// A header phrase used as-is.
    Named(String),
}

impl Default for Location {
    fn default() -> Self {
        Self::Fixed(FixedLocation::Bar)
    }
}

impl Location {
    /// Returns the human-readable label for this location.
    pub fn label(&self, labels: &LocationLabels) -> String {
        match self {
            Self::Fixed(fixed) => labels.get(*fixed).to_string(),
            Self::Named(name) => name.clone(),
        }
    }
}

/// Labels for the fixed locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationLabels {
    /// Label for [`FixedLocation::Bar`].
    pub bar: String,
    /// Label for [`FixedLocation::Moments`].
    pub moments: String,
    /// Label for [`FixedLocation::AlbertRex`].
    pub albert_rex: String,
}

impl Default for LocationLabels {
    fn default() -> Self {
        Self {
            bar: "D'Wine Bar, Algade 54, 9000 Aalborg".to_string(),
            moments: "D'Wine Moments, Algade 54, 9000 Aalborg".to_string(),
            albert_rex: "Albert Rex".to_string(),
        }
    }
}

impl LocationLabels {
    /// Returns the label for a fixed location.
    pub fn get(&self, location: FixedLocation) -> &str {
        match location {
            FixedLocation::Bar => &self.bar,
            FixedLocation::Moments => &self.moments,
            FixedLocation::AlbertRex => &self.albert_rex,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PhraseMatch {
    /// The phrase contains these words, in order and adjacent.
    Words(&'static [&'static str]),
    /// The phrase is exactly two name-like words.
    PersonalName,
}

#[derive(Debug, Clone, Copy)]
struct LocationRule {
    matcher: PhraseMatch,
    location: FixedLocation,
}

const LOCATION_RULES: &[LocationRule] = &[
    LocationRule {
        matcher: PhraseMatch::Words(&["moments"]),
        location: FixedLocation::Moments,
    },
    LocationRule {
        matcher: PhraseMatch::Words(&["albert", "rex"]),
        location: FixedLocation::AlbertRex,
    },
    LocationRule {
        matcher: PhraseMatch::PersonalName,
        location: FixedLocation::Moments,
    },
];

impl PhraseMatch {
    fn matches(&self, phrase: &str) -> bool {
        match self {
            Self::Words(needle) => {
                let lower = phrase.to_lowercase();
                let words: Vec<&str> = lower
                    .split(|c: char| !c.is_alphanumeric())
                    .filter(|w| !w.is_empty())
                    .collect();
                words.windows(needle.len()).any(|window| window == *needle)
            }
            Self::PersonalName => {
                let tokens: Vec<&str> = phrase.split_whitespace().collect();
                tokens.len() == 2 && tokens.iter().all(|t| is_name_word(t))
            }
        }
    }
}

fn is_name_word(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphabetic)
        && token.chars().all(|c| c.is_alphabetic() || c == '-' || c == '.')
}

/// Resolves the phrase in front of a date header to a location.
///
/// An empty phrase resolves to the default location.
pub fn resolve_location(phrase: &str) -> Location {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Location::default();
    }
    LOCATION_RULES
        .iter()
        .find(|rule| rule.matcher.matches(phrase))
        .map(|rule| Location::Fixed(rule.location))
        .unwrap_or_else(|| Location::Named(phrase.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moments_keyword_anywhere() {
        assert_eq!(resolve_location("Moments"), Location::Fixed(FixedLocation::Moments));
        assert_eq!(
            resolve_location("Firmafest i MOMENTS, 40 pers"),
            Location::Fixed(FixedLocation::Moments)
        );
        // Substring of another word does not count.
        assert_eq!(
            resolve_location("Momentsfest"),
            Location::Named("Momentsfest".to_string())
        );
    }

    #[test]
    fn albert_rex_before_personal_name_rule() {
        assert_eq!(resolve_location("Albert Rex"), Location::Fixed(FixedLocation::AlbertRex));
        assert_eq!(resolve_location("albert  rex"), Location::Fixed(FixedLocation::AlbertRex));
        assert_eq!(
            resolve_location("Vinsmagning på Albert Rex"),
            Location::Fixed(FixedLocation::AlbertRex)
        );
    }

    #[test]
    fn two_word_names_map_to_moments() {
        assert_eq!(resolve_location("Jane Doe"), Location::Fixed(FixedLocation::Moments));
        assert_eq!(resolve_location("Anne-Marie Ørsted"), Location::Fixed(FixedLocation::Moments));
        assert_eq!(
            resolve_location("Jane 40"),
            Location::Named("Jane 40".to_string())
        );
    }

    #[test]
    fn fallback_is_verbatim() {
        assert_eq!(resolve_location(" Kælderen "), Location::Named("Kælderen".to_string()));
        assert_eq!(
            resolve_location("Julefrokost hos Lis og Bo"),
            Location::Named("Julefrokost hos Lis og Bo".to_string())
        );
        assert_eq!(resolve_location("  "), Location::Fixed(FixedLocation::Bar));
    }

    #[test]
    fn labels() {
        let labels = LocationLabels::default();
        assert_eq!(Location::default().label(&labels), "D'Wine Bar, Algade 54, 9000 Aalborg");
        assert_eq!(
            Location::Fixed(FixedLocation::Moments).label(&labels),
            "D'Wine Moments, Algade 54, 9000 Aalborg"
        );
        assert_eq!(Location::Named("Kælderen".into()).label(&labels), "Kælderen");
    }
}
