//! State abbreviation and judicial division lookups.
//!
//! District court rosters abbreviate courts as e.g. "E.D. Va." or list a
//! state code and a one-letter division; these functions expand the parts
//! back into the words used in full court names.

/// Returned by [`state_name`] for unrecognized abbreviations.
pub const INVALID_ABBREVIATION: &str = "Invalid abbreviation";

/// Two-letter postal abbreviations for the 50 states.
pub const STATE_ABBREVIATIONS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

/// Maps a two-letter state abbreviation to the full state name.
///
/// Case-insensitive. Returns [`INVALID_ABBREVIATION`] for unrecognized
/// abbreviations.
#[must_use]
pub fn state_name(abbr: &str) -> &'static str {
    match abbr.to_uppercase().as_str() {
        "AL" => "Alabama",
        "AK" => "Alaska",
        "AZ" => "Arizona",
        "AR" => "Arkansas",
        "CA" => "California",
        "CO" => "Colorado",
        "CT" => "Connecticut",
        "DE" => "Delaware",
        "FL" => "Florida",
        "GA" => "Georgia",
        "HI" => "Hawaii",
        "ID" => "Idaho",
        "IL" => "Illinois",
        "IN" => "Indiana",
        "IA" => "Iowa",
        "KS" => "Kansas",
        "KY" => "Kentucky",
        "LA" => "Louisiana",
        "ME" => "Maine",
        "MD" => "Maryland",
        "MA" => "Massachusetts",
        "MI" => "Michigan",
        "MN" => "Minnesota",
        "MS" => "Mississippi",
        "MO" => "Missouri",
        "MT" => "Montana",
        "NE" => "Nebraska",
        "NV" => "Nevada",
        "NH" => "New Hampshire",
        "NJ" => "New Jersey",
        "NM" => "New Mexico",
        "NY" => "New York",
        "NC" => "North Carolina",
        "ND" => "North Dakota",
        "OH" => "Ohio",
        "OK" => "Oklahoma",
        "OR" => "Oregon",
        "PA" => "Pennsylvania",
        "RI" => "Rhode Island",
        "SC" => "South Carolina",
        "SD" => "South Dakota",
        "TN" => "Tennessee",
        "TX" => "Texas",
        "UT" => "Utah",
        "VT" => "Vermont",
        "VA" => "Virginia",
        "WA" => "Washington",
        "WV" => "West Virginia",
        "WI" => "Wisconsin",
        "WY" => "Wyoming",
        _ => INVALID_ABBREVIATION,
    }
}

/// Maps a one-letter division code to its direction name (`"E"` →
/// `"Eastern"`).
///
/// Case-insensitive. Returns an empty string for unrecognized codes, so a
/// district without a division composes cleanly.
#[must_use]
pub fn division(code: &str) -> &'static str {
    match code.to_uppercase().as_str() {
        "E" => "Eastern",
        "W" => "Western",
        "N" => "Northern",
        "S" => "Southern",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_count() {
        assert_eq!(STATE_ABBREVIATIONS.len(), 50);
    }

    #[test]
    fn name_coverage() {
        for abbr in STATE_ABBREVIATIONS {
            assert_ne!(
                state_name(abbr),
                INVALID_ABBREVIATION,
                "no name for abbreviation: {abbr}"
            );
        }
    }

    #[test]
    fn case_insensitive_state_name() {
        assert_eq!(state_name("va"), "Virginia");
        assert_eq!(state_name("Va"), "Virginia");
        assert_eq!(state_name("VA"), "Virginia");
    }

    #[test]
    fn unknown_state() {
        assert_eq!(state_name("XX"), "Invalid abbreviation");
        assert_eq!(state_name(""), "Invalid abbreviation");
        assert_eq!(state_name("DC"), "Invalid abbreviation");
    }

    #[test]
    fn divisions() {
        assert_eq!(division("E"), "Eastern");
        assert_eq!(division("w"), "Western");
        assert_eq!(division("N"), "Northern");
        assert_eq!(division("s"), "Southern");
        assert_eq!(division("C"), "");
        assert_eq!(division(""), "");
    }
}
