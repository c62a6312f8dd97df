/// One line of user input after classification.
///
/// Exhaustive on purpose: the session loop matches on it without a
/// fallback arm, so a new case cannot be silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The user asked to leave ("q" in any casing).
    Quit,
    /// The line did not parse as a whole number.
    InvalidNumber,
    /// A whole number to check for primality.
    Candidate(i64),
}

/// Outcome of a primality check: the verdict plus the exact line reported
/// back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub is_prime: bool,
    pub message: String,
}
