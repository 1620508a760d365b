use thiserror::Error;

/// Error type for the truthtable crate
///
/// Only parsing can fail: tokenizing is total, and evaluation falls back to
/// `false` for unbound variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The token sequence does not form a valid expression
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
}

impl Error {
    /// The reason carried by the error, without the `invalid expression`
    /// prefix.
    #[must_use]
    pub fn reason(&self) -> &str {
        match *self {
            Self::InvalidExpression(ref reason) => reason,
        }
    }

    pub(crate) fn unexpected_token(token: &str) -> Self {
        Self::InvalidExpression(format!("unexpected token: {}", token))
    }

    pub(crate) fn unexpected_end() -> Self {
        Self::InvalidExpression("unexpected end of input".into())
    }

    pub(crate) fn unclosed_paren() -> Self {
        Self::InvalidExpression("expected closing parenthesis".into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::unexpected_token("+").to_string(),
            "invalid expression: unexpected token: +"
        );
        assert_eq!(
            Error::unclosed_paren().to_string(),
            "invalid expression: expected closing parenthesis"
        );
        assert_eq!(Error::unexpected_end().reason(), "unexpected end of input");
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn error_is_send_sync_static() {
        _assert_send_sync_static::<Error>();
    }
}
