//! State code to region name resolution.
//!
//! Campaign and politician records carry two-letter postal codes; display and
//! search want the human-readable region name. Lookup is case-insensitive and
//! covers the fifty states, the federal district, and the inhabited
//! territories.

/// Resolves a two-letter state code to its region name.
///
/// Returns `None` for unknown or empty codes. Callers on the presentation path
/// treat `None` as an empty display name rather than an error.
///
/// # Examples
///
/// ```
/// use civiclists::infrastructure::regions::region_name;
///
/// assert_eq!(region_name("CA"), Some("California"));
/// assert_eq!(region_name("ca"), Some("California"));
/// assert_eq!(region_name("ZZ"), None);
/// ```
#[must_use]
pub fn region_name(state_code: &str) -> Option<&'static str> {
    match state_code.trim().to_ascii_uppercase().as_str() {
        "AL" => Some("Alabama"),
        "AK" => Some("Alaska"),
        "AS" => Some("American Samoa"),
        "AZ" => Some("Arizona"),
        "AR" => Some("Arkansas"),
        "CA" => Some("California"),
        "CO" => Some("Colorado"),
        "CT" => Some("Connecticut"),
        "DE" => Some("Delaware"),
        "DC" => Some("District of Columbia"),
        "FL" => Some("Florida"),
        "GA" => Some("Georgia"),
        "GU" => Some("Guam"),
        "HI" => Some("Hawaii"),
        "ID" => Some("Idaho"),
        "IL" => Some("Illinois"),
        "IN" => Some("Indiana"),
        "IA" => Some("Iowa"),
        "KS" => Some("Kansas"),
        "KY" => Some("Kentucky"),
        "LA" => Some("Louisiana"),
        "ME" => Some("Maine"),
        "MD" => Some("Maryland"),
        "MA" => Some("Massachusetts"),
        "MI" => Some("Michigan"),
        "MN" => Some("Minnesota"),
        "MS" => Some("Mississippi"),
        "MO" => Some("Missouri"),
        "MT" => Some("Montana"),
        "NE" => Some("Nebraska"),
        "NV" => Some("Nevada"),
        "NH" => Some("New Hampshire"),
        "NJ" => Some("New Jersey"),
        "NM" => Some("New Mexico"),
        "NY" => Some("New York"),
        "NC" => Some("North Carolina"),
        "ND" => Some("North Dakota"),
        "MP" => Some("Northern Mariana Islands"),
        "OH" => Some("Ohio"),
        "OK" => Some("Oklahoma"),
        "OR" => Some("Oregon"),
        "PA" => Some("Pennsylvania"),
        "PR" => Some("Puerto Rico"),
        "RI" => Some("Rhode Island"),
        "SC" => Some("South Carolina"),
        "SD" => Some("South Dakota"),
        "TN" => Some("Tennessee"),
        "TX" => Some("Texas"),
        "UT" => Some("Utah"),
        "VT" => Some("Vermont"),
        "VI" => Some("Virgin Islands"),
        "VA" => Some("Virginia"),
        "WA" => Some("Washington"),
        "WV" => Some("West Virginia"),
        "WI" => Some("Wisconsin"),
        "WY" => Some("Wyoming"),
        _ => None,
    }
}
