use crate::expr::{Assignment, Expr};
use std::fmt::{self, Display, Formatter};

/// Number of assignments of `variables` variables, or `None` when `2^n`
/// does not fit in a `u64` (64 variables or more).
pub fn row_count(variables: usize) -> Option<u64> {
    u32::try_from(variables)
        .ok()
        .and_then(|n| 1_u64.checked_shl(n))
}

/// Iterator over every assignment of a list of variables.
///
/// The `i`-th assignment gives `variables[j]` the value of bit `j` of `i`,
/// bit 0 being the least significant one. An empty variable list yields a
/// single, empty assignment.
///
/// Indices are `u64`, so at most 63 variables can be enumerated in full.
/// With more, enumeration stops after `u64::MAX` assignments and variables
/// past the 64th stay `false`.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    variables: &'a [&'a str],
    next: u64,
    count: u64,
}

impl<'a> Assignments<'a> {
    /// Enumerate the `2^n` assignments of the `n` given variables
    pub fn new(variables: &'a [&'a str]) -> Self {
        if variables.len() > 63 {
            log::warn!(
                "{} variables cannot be fully enumerated, stopping after {} rows",
                variables.len(),
                u64::MAX
            );
        }
        Self {
            variables,
            next: 0,
            count: row_count(variables.len()).unwrap_or(u64::MAX),
        }
    }

    /// Build the assignment with the given `index`
    pub fn nth_assignment(&self, index: u64) -> Assignment {
        self.variables
            .iter()
            .enumerate()
            .map(|(bit, &name)| ((*name).to_owned(), bit_is_set(index, bit)))
            .collect()
    }
}

fn bit_is_set(index: u64, bit: usize) -> bool {
    u32::try_from(bit)
        .ok()
        .and_then(|bit| index.checked_shr(bit))
        .map_or(false, |shifted| shifted & 1 == 1)
}

impl<'a> Iterator for Assignments<'a> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.next >= self.count {
            return None;
        }
        let assignment = self.nth_assignment(self.next);
        self.next += 1;
        Some(assignment)
    }
}

/// One line of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Input values, in the order of the table variables
    pub inputs: Vec<bool>,
    /// Value of the expression for these inputs
    pub result: bool,
}

/// What a truth table says about its expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// True for every assignment
    Tautology,
    /// False for every assignment
    Contradiction,
    /// Neither
    Contingent,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Tautology => write!(f, "tautology"),
            Self::Contradiction => write!(f, "contradiction"),
            Self::Contingent => write!(f, "contingent"),
        }
    }
}

/// The truth table of an expression.
///
/// Rows are evaluated on demand, one assignment at a time, so printing a
/// table never holds more than one row in memory.
///
/// # Examples
/// ```
/// # use truthtable::{Expr, TruthTable};
/// let expr = Expr::parse("p imply q").unwrap();
/// let table = TruthTable::new(&expr);
/// let results: Vec<bool> = table.rows().map(|row| row.result).collect();
/// assert_eq!(results, vec![true, false, true, true]);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable<'e> {
    expr: &'e Expr,
    variables: Vec<&'e str>,
}

impl<'e> TruthTable<'e> {
    /// Prepare the table of `expr`, over its sorted variables
    pub fn new(expr: &'e Expr) -> Self {
        let variables = expr.variables();
        log::debug!("variables: {:?}", variables);
        Self { expr, variables }
    }

    /// The sorted variable names, one per input column
    pub fn variables(&self) -> &[&'e str] {
        &self.variables
    }

    /// Evaluate the rows lazily, in enumeration order
    pub fn rows(&self) -> Rows<'_, 'e> {
        Rows {
            expr: self.expr,
            variables: &self.variables,
            assignments: Assignments::new(&self.variables),
        }
    }

    /// Check if every row evaluates to `true`
    pub fn is_tautology(&self) -> bool {
        self.rows().all(|row| row.result)
    }

    /// Check if every row evaluates to `false`
    pub fn is_contradiction(&self) -> bool {
        self.rows().all(|row| !row.result)
    }

    /// Classify the expression from its results, stopping as soon as both
    /// a `true` and a `false` row have been seen
    pub fn classify(&self) -> Classification {
        let mut rows = self.rows();
        let first = match rows.next() {
            Some(row) => row.result,
            None => return Classification::Contradiction,
        };
        if rows.any(|row| row.result != first) {
            Classification::Contingent
        } else if first {
            Classification::Tautology
        } else {
            Classification::Contradiction
        }
    }

    /// The header line: uppercased variable names, then `Result`
    pub fn header(&self) -> String {
        self.variables
            .iter()
            .map(|name| name.to_uppercase())
            .chain(std::iter::once("Result".to_owned()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Lazy iterator over the rows of a [`TruthTable`]
#[derive(Debug, Clone)]
pub struct Rows<'t, 'e> {
    expr: &'e Expr,
    variables: &'t [&'e str],
    assignments: Assignments<'t>,
}

impl<'t, 'e> Iterator for Rows<'t, 'e> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let assignment = self.assignments.next()?;
        let inputs = self
            .variables
            .iter()
            .map(|&name| assignment.get(name).copied().unwrap_or(false))
            .collect();
        let result = self.expr.eval(&assignment);
        Some(Row { inputs, result })
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &input in &self.inputs {
            write!(f, "{} | ", u8::from(input))?;
        }
        write!(f, "{}", self.result)
    }
}

impl<'e> Display for TruthTable<'e> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let header = self.header();
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
