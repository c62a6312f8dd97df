use crate::domain::model::Command;

/// The fixed reply for input that does not parse as a whole number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a whole number!";

/// Classifies one trimmed input line.
///
/// "q" in any casing is a quit request. Anything that parses as a signed
/// 64-bit base-10 integer is a candidate for the primality check.
/// Everything else, including the empty line, is invalid input.
pub fn interpret(input: &str) -> Command {
    if input.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }

    match input.parse::<i64>() {
        Ok(value) => Command::Candidate(value),
        Err(_) => Command::InvalidNumber,
    }
}
