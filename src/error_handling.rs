use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid Syntax")]
    invalid_syntax,

    /// Carries the name that was looked up; the message stays fixed.
    #[error("Identifier not found")]
    undefined(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_shell_output() {
        assert_eq!(CalcError::invalid_syntax.to_string(), "Invalid Syntax");
        assert_eq!(CalcError::undefined("y".into()).to_string(), "Identifier not found");
    }
}
