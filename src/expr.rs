use crate::ast::Ast;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::Error;
use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Display, Formatter};

/// Values given to variables for one evaluation. Variables missing from the
/// assignment evaluate to `false`.
pub type Assignment = HashMap<String, bool>;

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if parsing succeeds, or `Err(cause)` if the
/// expression is invalid.
///
/// # Example
///
/// ```
/// # use truthtable::{eval, Assignment};
///
/// assert_eq!(eval("true imply false", &Assignment::new()), Ok(false));
///
/// let mut assignment = Assignment::new();
/// assignment.insert("a".into(), true);
/// assert_eq!(eval("a xor b", &assignment), Ok(true));
/// ```
pub fn eval(input: &str, assignment: &Assignment) -> Result<bool, Error> {
    Expr::parse(input).map(|expr| expr.eval(assignment))
}

/// A parsed boolean expression.
///
/// # Examples
/// ```
/// # use truthtable::{Expr, Assignment};
/// let expr = Expr::parse("p imply q").unwrap();
/// assert_eq!(expr.variables(), vec!["p", "q"]);
///
/// let mut assignment = Assignment::new();
/// assignment.insert("p".into(), true);
/// assert_eq!(expr.eval(&assignment), false);
/// assignment.insert("q".into(), true);
/// assert_eq!(expr.eval(&assignment), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given boolean `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use truthtable::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("a and ( b or not c )").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("a and").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = tokenize(expression);
        Ok(Self::from(parse(&tokens)?))
    }

    /// Evaluate the expression under `assignment`.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        Self::inner_eval(&self.ast, assignment)
    }

    fn inner_eval(ast: &Ast, assignment: &Assignment) -> bool {
        match *ast {
            Ast::Variable(ref name) => assignment.get(name).copied().unwrap_or(false),
            Ast::Constant(value) => value,
            Ast::Not(ref operand) => !Self::inner_eval(operand, assignment),
            Ast::And(ref left, ref right) => {
                Self::inner_eval(left, assignment) & Self::inner_eval(right, assignment)
            }
            Ast::Or(ref left, ref right) => {
                Self::inner_eval(left, assignment) | Self::inner_eval(right, assignment)
            }
            Ast::Xor(ref left, ref right) | Ast::NotEqual(ref left, ref right) => {
                Self::inner_eval(left, assignment) != Self::inner_eval(right, assignment)
            }
            Ast::Imply(ref left, ref right) => {
                !Self::inner_eval(left, assignment) | Self::inner_eval(right, assignment)
            }
            Ast::Equal(ref left, ref right) => {
                Self::inner_eval(left, assignment) == Self::inner_eval(right, assignment)
            }
        }
    }

    /// Get the distinct variable names used in the expression, sorted.
    ///
    /// # Examples
    /// ```
    /// # use truthtable::Expr;
    /// let expr = Expr::parse("true and false").unwrap();
    /// assert!(expr.variables().is_empty());
    ///
    /// let expr = Expr::parse("b or a and not b").unwrap();
    /// assert_eq!(expr.variables(), vec!["a", "b"]);
    /// ```
    pub fn variables(&self) -> Vec<&str> {
        let mut variables = BTreeSet::new();
        Self::inner_variables(&self.ast, &mut variables);
        variables.into_iter().collect()
    }

    fn inner_variables<'a>(ast: &'a Ast, variables: &mut BTreeSet<&'a str>) {
        match *ast {
            Ast::Variable(ref name) => {
                variables.insert(name);
            }
            Ast::Constant(_) => {}
            Ast::Not(ref operand) => Self::inner_variables(operand, variables),
            Ast::And(ref left, ref right)
            | Ast::Or(ref left, ref right)
            | Ast::Xor(ref left, ref right)
            | Ast::Imply(ref left, ref right)
            | Ast::Equal(ref left, ref right)
            | Ast::NotEqual(ref left, ref right) => {
                Self::inner_variables(left, variables);
                Self::inner_variables(right, variables);
            }
        }
    }

    /// The parsed tree
    pub fn ast(&self) -> &Ast {
        &self.ast
    }
}

impl From<Ast> for Expr {
    fn from(ast: Ast) -> Self {
        Self { ast }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ast)
    }
}
