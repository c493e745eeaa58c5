//! Identity submission collected from the verification form

/// Required length of the numeric member identifier
pub const IDENTIFIER_LEN: usize = 9;

/// A name + identifier triple submitted through the verification form
///
/// Built from user input at submission time and validated before use;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySubmission {
    /// Submitted first name
    pub first: String,
    /// Submitted last name
    pub last: String,
    /// Submitted member identifier (expected: exactly 9 digits)
    pub identifier: String,
}

impl IdentitySubmission {
    /// Build a submission from raw form fields, trimming surrounding
    /// whitespace
    #[must_use]
    pub fn new(first: &str, last: &str, identifier: &str) -> Self {
        Self {
            first: first.trim().to_string(),
            last: last.trim().to_string(),
            identifier: identifier.trim().to_string(),
        }
    }

    /// Whether the submission passes shape validation
    ///
    /// Both name fields must be non-empty and purely alphabetic; the
    /// identifier must be exactly [`IDENTIFIER_LEN`] ASCII digits.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let alphabetic = |s: &str| !s.is_empty() && s.chars().all(char::is_alphabetic);
        alphabetic(&self.first)
            && alphabetic(&self.last)
            && self.identifier.len() == IDENTIFIER_LEN
            && self.identifier.chars().all(|c| c.is_ascii_digit())
    }

    /// Display nickname derived from the submitted names
    ///
    /// Title-cased regardless of how the names were typed.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", title_case(&self.first), title_case(&self.last))
    }
}

/// Title-case a single word: first character uppercased, the rest lowered
#[must_use]
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |head| {
        head.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}
