use crate::lexer::is_variable;
use crate::util::keyword;

/// Possible tokens to find in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// The `not` keyword
    Not,
    /// `true` or `false`
    Literal(bool),
    /// A binary operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// A variable name
    Variable(&'a str),
    /// Anything else
    Unknown(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw whitespace-delimited token.
    ///
    /// Keywords are matched before variables, so `and` or `True` never end
    /// up as variable names.
    pub fn classify(raw: &'a str) -> Self {
        match raw {
            "(" => Self::LParen,
            ")" => Self::RParen,
            _ => {
                if let Some(token) = keyword(raw) {
                    token
                } else if is_variable(raw) {
                    Self::Variable(raw)
                } else {
                    Self::Unknown(raw)
                }
            }
        }
    }
}

/// Allowed binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `and`, `∧`
    And,
    /// `or`, `∨`
    Or,
    /// `xor`, `⊕`
    Xor,
    /// `imply`, `→`
    Imply,
    /// `eq`, `=`
    Equal,
    /// `neq`, `≠`
    NotEqual,
}

/// The two precedence levels of the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// `=` and `≠`, binding loosest
    Comparison,
    /// `and`, `or`, `xor` and `imply`
    Logical,
}

impl Op {
    /// Get the operator precedence level. Operators with a higher level bind
    /// tighter. All operators are left associative.
    pub fn level(self) -> Level {
        match self {
            Self::And | Self::Or | Self::Xor | Self::Imply => Level::Logical,
            Self::Equal | Self::NotEqual => Level::Comparison,
        }
    }

    /// The symbol used when printing this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "∧",
            Self::Or => "∨",
            Self::Xor => "⊕",
            Self::Imply => "→",
            Self::Equal => "=",
            Self::NotEqual => "≠",
        }
    }
}
