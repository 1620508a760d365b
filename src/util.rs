use crate::token::{Op, Token};
use hashbrown::HashMap;

lazy_static! {
    /// Reserved words and operator symbols, keyed by their lowercase spelling.
    /// Variables and parentheses are not in this table.
    pub static ref KEYWORDS: HashMap<&'static str, Token<'static>> = {
        let mut map = HashMap::<&'static str, Token<'static>>::new();
        map.insert("not", Token::Not);
        map.insert("true", Token::Literal(true));
        map.insert("false", Token::Literal(false));
        map.insert("and", Token::Op(Op::And));
        map.insert("∧", Token::Op(Op::And));
        map.insert("or", Token::Op(Op::Or));
        map.insert("∨", Token::Op(Op::Or));
        map.insert("xor", Token::Op(Op::Xor));
        map.insert("⊕", Token::Op(Op::Xor));
        map.insert("imply", Token::Op(Op::Imply));
        map.insert("→", Token::Op(Op::Imply));
        map.insert("eq", Token::Op(Op::Equal));
        map.insert("=", Token::Op(Op::Equal));
        map.insert("neq", Token::Op(Op::NotEqual));
        map.insert("≠", Token::Op(Op::NotEqual));
        map.shrink_to_fit();
        map
    };
}

/// Look `word` up in the keyword table, ignoring ASCII case
pub fn keyword(word: &str) -> Option<Token<'static>> {
    if let Some(&token) = KEYWORDS.get(word) {
        return Some(token);
    }
    KEYWORDS.get(word.to_ascii_lowercase().as_str()).copied()
}
