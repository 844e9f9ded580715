use thiserror::Error;


/// The possible errors of matching a rule against a whole input.
///
/// Unlike with [`Matchable::try_match`](../kombi_core/trait.Matchable.html),
/// where not matching is a normal outcome, these functions are for when the
/// input is expected to be entirely a match of the rule, so anything else is
/// an error.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseError {
    /// The rule did not match at the start position.
    #[error("input does not match")]
    NoMatch,
    /// The rule matched but did not reach the end bound.
    #[error("input matched only up to position {consumed} of {end}")]
    Incomplete {
        /// The position that the match reached
        consumed: usize,
        /// The end bound that was not reached
        end: usize,
    },
    /// The given bounds were invalid.
    #[error("invalid bounds: {0}")]
    Bounds(#[from] kombi_core::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ParseError::NoMatch.to_string(), "input does not match");
        assert_eq!(ParseError::Incomplete { consumed: 2, end: 5 }.to_string(),
                   "input matched only up to position 2 of 5");
        assert_eq!(ParseError::from(kombi_core::Error::PosPastEnd { pos: 3, end: 1 })
                       .to_string(),
                   "invalid bounds: position 3 is past the end bound 1");
    }
}
