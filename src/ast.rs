use crate::token::Op;
use std::fmt::{self, Display, Formatter};

/// Ast nodes for boolean expressions
///
/// Every inner node owns its children, so a tree is always finite and
/// acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
    /// A variable, to be resolved against an assignment
    Variable(String),
    /// `true` or `false`
    Constant(bool),
    /// not <operand>
    Not(Box<Ast>),
    /// <left> and <right>
    And(Box<Ast>, Box<Ast>),
    /// <left> or <right>
    Or(Box<Ast>, Box<Ast>),
    /// <left> xor <right>
    Xor(Box<Ast>, Box<Ast>),
    /// <left> imply <right>
    Imply(Box<Ast>, Box<Ast>),
    /// <left> = <right>
    Equal(Box<Ast>, Box<Ast>),
    /// <left> ≠ <right>
    NotEqual(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Build the node applying `op` to `left` and `right`
    pub fn binary(op: Op, left: Self, right: Self) -> Self {
        let left = Box::new(left);
        let right = Box::new(right);
        match op {
            Op::And => Self::And(left, right),
            Op::Or => Self::Or(left, right),
            Op::Xor => Self::Xor(left, right),
            Op::Imply => Self::Imply(left, right),
            Op::Equal => Self::Equal(left, right),
            Op::NotEqual => Self::NotEqual(left, right),
        }
    }

    /// Build `not <operand>`
    pub fn negate(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    /// If the node is a binary operation, get `Some((op, left, right))`.
    /// Else, get `None`
    pub fn split(&self) -> Option<(Op, &Self, &Self)> {
        match *self {
            Self::And(ref l, ref r) => Some((Op::And, l, r)),
            Self::Or(ref l, ref r) => Some((Op::Or, l, r)),
            Self::Xor(ref l, ref r) => Some((Op::Xor, l, r)),
            Self::Imply(ref l, ref r) => Some((Op::Imply, l, r)),
            Self::Equal(ref l, ref r) => Some((Op::Equal, l, r)),
            Self::NotEqual(ref l, ref r) => Some((Op::NotEqual, l, r)),
            Self::Variable(_) | Self::Constant(_) | Self::Not(_) => None,
        }
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Variable(ref name) => write!(f, "{}", name),
            Self::Constant(value) => write!(f, "{}", value),
            Self::Not(ref operand) => write!(f, "¬{}", operand),
            _ => match self.split() {
                Some((op, left, right)) => write!(f, "({} {} {})", left, op.symbol(), right),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ast;
    use crate::token::Op;

    fn var(name: &str) -> Ast {
        Ast::Variable(name.into())
    }

    #[test]
    fn display() {
        let ast = Ast::binary(
            Op::Imply,
            Ast::binary(Op::And, var("a"), Ast::negate(var("b"))),
            Ast::Constant(false),
        );
        assert_eq!(ast.to_string(), "((a ∧ ¬b) → false)");

        let ast = Ast::binary(Op::NotEqual, var("p"), Ast::negate(Ast::negate(var("q"))));
        assert_eq!(ast.to_string(), "(p ≠ ¬¬q)");
    }

    #[test]
    fn split() {
        let ast = Ast::binary(Op::Xor, var("a"), var("b"));
        assert_eq!(ast.split(), Some((Op::Xor, &var("a"), &var("b"))));
        assert_eq!(Ast::negate(var("a")).split(), None);
    }
}
