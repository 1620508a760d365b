use crate::util::keyword;

#[must_use]
/// Check if `ident` is a valid variable name: one or more ASCII letters,
/// and not a reserved word.
///
/// # Examples
///
/// ```
/// # use truthtable::is_variable;
///
/// assert_eq!(is_variable("abc"), true);
/// assert_eq!(is_variable("Xor"), false);
/// assert_eq!(is_variable("x1"), false);
/// ```
pub fn is_variable(ident: &str) -> bool {
    if ident.is_empty() || !ident.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    return keyword(ident).is_none();
}

/// Split `input` into raw tokens on runs of whitespace.
///
/// This never fails; malformed input is reported by the parser.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a and b" => vec!["a", "and", "b"] ; "simple expression")]
    #[test_case("  ( a\t∧\nb )  " => vec!["(", "a", "∧", "b", ")"] ; "mixed whitespace")]
    #[test_case("(a and b)" => vec!["(a", "and", "b)"] ; "parentheses are not split off")]
    #[test_case("" => Vec::<&str>::new() ; "empty input")]
    #[test_case(" \n\t " => Vec::<&str>::new() ; "only whitespace")]
    fn split(input: &str) -> Vec<&str> {
        tokenize(input)
    }

    #[test]
    fn idents() {
        let variables = ["a", "Z", "abc", "CamelCase", "nota", "andy"];
        for v in &variables {
            assert!(is_variable(v), "{} should be a variable", v);
        }

        let non_variables = [
            "", "a_b", "x1", "é", "not", "NOT", "True", "false", "and", "or", "XOR", "imply",
            "eq", "Neq",
        ];
        for nv in &non_variables {
            assert!(!is_variable(nv), "{} should not be a variable", nv);
        }
    }
}
