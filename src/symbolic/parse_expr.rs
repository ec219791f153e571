use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_errors::ParseError;
use crate::symbolic::utils::{
    find_char_positions_outside_brackets, find_pair_to_this_bracket,
    find_pair_to_this_closing_bracket, find_substring_positions_outside_brackets,
    has_balanced_brackets, strip_outer_brackets,
};
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
/// a module turns a String expression into a symbolic expression
///# Example
/// ```rust, ignore
/// use RustedAlgebra::symbolic::symbolic_engine::Expr;
/// let input = "2x^2 + sin(x)(x+1)";
/// let parsed_expression = Expr::parse(input)?;
/// println!(" parsed_expression {}", parsed_expression);
/// ```
//                  search recursion diagram
//                "y^2+sin(x)+log(x)/y-x^2.3"       |
//                |       left            | right   |
//                |_________________________________|
//                |     rightmost + or - splits     |
//                |_________________________________|
//                | y^2+sin(x)+log(x)/y   | x^2.3   |
//                |       |               |         |
//                |______\|/______________|_________|
//                |     rightmost + or - splits     |
//                |_________________________________|
//                | y^2+sin(x)  | log(x)/y|         |
//                |       |     |    |    |         |
//                |______\|/____|___\|/___|_________|
//                |   ...       | rightmost * or /  |
//                |_____________|_________\|/_______|
//                |             | log(x)  |   y     |
//                |_____________|___Ok___\|/___Ok___|
//                  then ^, then functions, then single symbols

/// The fixed symbol table of the parser. The order of the variants is the order in which
/// the table is tried: operators first, then function names with longer spellings ahead of
/// the names they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Symbol {
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Times,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "^")]
    Power,
    #[strum(serialize = "sinc")]
    Sinc,
    #[strum(serialize = "cosec")]
    Cosec,
    #[strum(serialize = "sec")]
    Sec,
    #[strum(serialize = "csc")]
    Csc,
    #[strum(serialize = "cotan")]
    Cotan,
    #[strum(serialize = "cot")]
    Cot,
    #[strum(serialize = "sin")]
    Sin,
    #[strum(serialize = "cos")]
    Cos,
    #[strum(serialize = "tan")]
    Tan,
    #[strum(serialize = "ln")]
    Ln,
    #[strum(serialize = "log")]
    Log,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Symbol::Plus | Symbol::Minus | Symbol::Times | Symbol::Divide | Symbol::Power
        )
    }

    /// function names in table order
    pub fn functions() -> impl Iterator<Item = Symbol> {
        Symbol::iter().filter(|symbol| !symbol.is_operator())
    }

    /// true if the byte starts one of the operator symbols
    pub fn starts_operator(c: u8) -> bool {
        Symbol::iter()
            .filter(|symbol| symbol.is_operator())
            .any(|symbol| symbol.as_str().as_bytes()[0] == c)
    }

    /// Builds the tree of a function applied to its operand. Reciprocal trigonometric
    /// functions and `sinc` have no node of their own and are rewritten here.
    pub fn apply(self, operand: Expr) -> Expr {
        let reciprocal = |expr: Expr| expr.pow(Expr::Number(-1.0));
        match self {
            Symbol::Sin => Expr::sin(operand.boxed()),
            Symbol::Cos => Expr::cos(operand.boxed()),
            Symbol::Tan => Expr::tan(operand.boxed()),
            Symbol::Sec => reciprocal(Expr::cos(operand.boxed())),
            Symbol::Cosec | Symbol::Csc => reciprocal(Expr::sin(operand.boxed())),
            Symbol::Cotan | Symbol::Cot => reciprocal(Expr::tan(operand.boxed())),
            Symbol::Sinc => Expr::sin(operand.clone().boxed()) / operand,
            Symbol::Ln => operand.ln(),
            Symbol::Log => operand.log10(),
            // operators are split before functions are looked at
            Symbol::Plus | Symbol::Minus | Symbol::Times | Symbol::Divide | Symbol::Power => {
                operand
            }
        }
    }
}

static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|(?i:inf(?:inity)?|nan))$")
        .expect("valid number pattern")
});

const ADDITIVE: &[u8] = b"+-";
const MULTIPLICATIVE: &[u8] = b"*/";

/// true if the whole string is a decimal numeric literal, `inf` and `nan` included
pub fn is_number_literal(s: &str) -> bool {
    NUMBER_LITERAL.is_match(s)
}

fn parse_number(s: &str) -> Result<Expr, ParseError> {
    s.parse::<f64>()
        .map(Expr::Number)
        .map_err(|_| ParseError::UnknownSymbol(s.to_string()))
}

// inserts '*' before every position of the sorted list
fn insert_multiplications(input: &str, positions: &[usize]) -> String {
    let mut output = String::with_capacity(input.len() + positions.len());
    let mut last = 0;
    for &pos in positions {
        output.push_str(&input[last..pos]);
        output.push('*');
        last = pos;
    }
    output.push_str(&input[last..]);
    output
}

/// Inserts the implicit multiplications of juxtaposed groups:
/// `2(x)` -> `2*(x)`, `2sin(x)` -> `2*sin(x)`, `(x)(y)` -> `(x)*(y)`, `(x)sin(y)` -> `(x)*sin(y)`.
/// Operator applications such as `x^(2)` and nested openings such as `((x))` are left alone.
pub fn rectify(input: &str) -> String {
    // before a '(' that is not preceded by '('
    let bytes = input.as_bytes();
    let mut before_open = Vec::new();
    for i in (1..bytes.len()).rev() {
        if bytes[i] != b'(' || bytes[i - 1] == b'(' {
            continue;
        }
        // the general logarithm `log[b](a)` carries its base between the name and the operand
        let anchor = if bytes[i - 1] == b']' {
            match find_pair_to_this_closing_bracket(input, i - 1) {
                Some(open) => open,
                None => continue,
            }
        } else {
            i
        };
        if anchor == i && Symbol::starts_operator(bytes[i - 1]) {
            continue;
        }
        let function = Symbol::functions().find(|f| input[..anchor].ends_with(f.as_str()));
        let candidate = match function {
            Some(f) => anchor - f.as_str().len(),
            None if anchor != i => continue,
            None => i,
        };
        if candidate == 0 {
            continue;
        }
        let preceding = bytes[candidate - 1];
        if Symbol::starts_operator(preceding) || preceding == b'(' || preceding == b'[' {
            continue;
        }
        before_open.push(candidate);
    }
    before_open.reverse();
    let first_pass = insert_multiplications(input, &before_open);

    // after a ')' that is not followed by ')'
    let bytes = first_pass.as_bytes();
    let after_close: Vec<usize> = (0..bytes.len().saturating_sub(1))
        .filter(|&i| bytes[i] == b')')
        .filter(|&i| {
            let next = bytes[i + 1];
            next != b')' && next != b']' && !Symbol::starts_operator(next)
        })
        .map(|i| i + 1)
        .collect();
    let rectified = insert_multiplications(&first_pass, &after_close);
    if rectified != input {
        debug!("rectified '{}' into '{}'", input, rectified);
    }
    rectified
}

// a '+' or '-' at the start of the string or right after another operator is a sign
fn is_unary_sign(bytes: &[u8], i: usize) -> bool {
    i == 0 || Symbol::starts_operator(bytes[i - 1]) || bytes[i - 1] == b'('
}

// the sign of a scientific-notation exponent, as in 1e-5; the mantissa must start a literal,
// so in `x2e-5` the sign separates `x2e` from `5`
fn is_exponent_sign(bytes: &[u8], i: usize) -> bool {
    if i < 2
        || !matches!(bytes[i - 1], b'e' | b'E')
        || !bytes[i - 2].is_ascii_digit()
        || !bytes.get(i + 1).is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }
    let mantissa_start = bytes[..i - 1]
        .iter()
        .rposition(|c| !(c.is_ascii_digit() || *c == b'.'))
        .map_or(0, |p| p + 1);
    mantissa_start == 0
        || Symbol::starts_operator(bytes[mantissa_start - 1])
        || bytes[mantissa_start - 1] == b'('
}

// function to find the rightmost occurrence of operators at the same precedence level,
// skipping signs that do not separate two operands
fn find_rightmost_operator_outside_brackets(input: &str, operators: &[u8]) -> Option<(usize, u8)> {
    let bytes = input.as_bytes();
    let mut bracket_depth = 0i64;
    let mut last_op = None;
    for (i, &c) in bytes.iter().enumerate() {
        match c {
            b'(' | b'[' => bracket_depth += 1,
            b')' | b']' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                let is_sign =
                    (c == b'+' || c == b'-') && (is_unary_sign(bytes, i) || is_exponent_sign(bytes, i));
                if !is_sign {
                    last_op = Some((i, c));
                }
            }
            _ => {}
        }
    }
    last_op
}

// -e folds into a leading numeric coefficient: -2 -> Number(-2), -(2x) -> Mul(-2, x)
fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Number(value) => Expr::Number(-value),
        Expr::Mul(lhs, rhs) => match *lhs {
            Expr::Number(value) => Expr::Mul(Expr::Number(-value).boxed(), rhs),
            other => -Expr::Mul(other.boxed(), rhs),
        },
        other => -other,
    }
}

impl Expr {
    /// Parses text into an expression tree with implicit multiplication enabled.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse("(x+1)(x-1)")?;
    /// assert_eq!(expr, Expr::parse("(x+1)*(x-1)")?);
    /// ```
    pub fn parse(input: &str) -> Result<Expr, ParseError> {
        parse_expression_func(input, true)
    }

    /// Parses text into an expression tree.
    ///
    /// # Arguments
    /// * `input` - the expression text, whitespace is ignored
    /// * `rectify` - insert the `*` of juxtaposed groups such as `2(x)` or `(x)(y)` before splitting
    pub fn parse_with(input: &str, rectify: bool) -> Result<Expr, ParseError> {
        parse_expression_func(input, rectify)
    }
}

pub fn parse_expression_func(input: &str, rectify_input: bool) -> Result<Expr, ParseError> {
    if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
        return Err(ParseError::UnknownSymbol(c.to_string()));
    }
    let cleansed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if !has_balanced_brackets(&cleansed) {
        return Err(ParseError::UnbalancedParentheses(input.trim().to_string()));
    }
    let stripped = strip_outer_brackets(&cleansed);
    if stripped.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    if is_number_literal(stripped) {
        return parse_number(stripped);
    }
    if rectify_input {
        parse_cleansed(&rectify(stripped))
    } else {
        parse_cleansed(stripped)
    }
}

fn parse_cleansed(s: &str) -> Result<Expr, ParseError> {
    for level in [ADDITIVE, MULTIPLICATIVE] {
        if let Some((pos, op)) = find_rightmost_operator_outside_brackets(s, level) {
            let (left, right) = (&s[..pos], &s[pos + 1..]);
            debug!("splitting '{}' at '{}': '{}' | '{}'", s, op as char, left, right);
            let lhs = parse_expression_func(left, false)?;
            let rhs = parse_expression_func(right, false)?;
            return Ok(match op {
                b'+' => lhs + rhs,
                b'-' => lhs - rhs,
                b'*' => lhs * rhs,
                _ => lhs / rhs,
            });
        }
    }
    if let Some(rest) = s.strip_prefix('-') {
        return Ok(negate(parse_expression_func(rest, false)?));
    }
    if let Some(rest) = s.strip_prefix('+') {
        return parse_expression_func(rest, false);
    }
    // '^' is right associative: the leftmost top level occurrence splits
    if let Some(pos) = find_char_positions_outside_brackets(s, '^') {
        debug!("splitting '{}' at '^'", s);
        let base = parse_expression_func(&s[..pos], false)?;
        let exponent = parse_expression_func(&s[pos + 1..], false)?;
        return Ok(base.pow(exponent));
    }
    if let Some(expr) = parse_function(s)? {
        return Ok(expr);
    }
    parse_base_case(s)
}

// the first function name of the table found at scope depth zero takes the group right after it
// (or the single next character) as its operand; text around the call multiplies on
fn parse_function(s: &str) -> Result<Option<Expr>, ParseError> {
    let bytes = s.as_bytes();
    for function in Symbol::functions() {
        let name = function.as_str();
        let Some(&pos) = find_substring_positions_outside_brackets(s, name).first() else {
            continue;
        };
        let mut start = pos + name.len();
        let mut base = None;
        if function == Symbol::Log && bytes.get(start) == Some(&b'[') {
            let close = find_pair_to_this_bracket(s, start)
                .ok_or_else(|| ParseError::UnbalancedParentheses(s.to_string()))?;
            base = Some(parse_expression_func(&s[start + 1..close], false)?);
            start = close + 1;
        }
        let end = match bytes.get(start) {
            None => return Err(ParseError::EmptyExpression),
            Some(b'(') => {
                find_pair_to_this_bracket(s, start)
                    .ok_or_else(|| ParseError::UnbalancedParentheses(s.to_string()))?
                    + 1
            }
            Some(_) => start + 1,
        };
        debug!("function '{}' applied to '{}'", name, &s[start..end]);
        let operand = parse_expression_func(&s[start..end], false)?;
        let mut expr = match base {
            Some(base) => Expr::log(base, operand),
            None => function.apply(operand),
        };
        let (prefix, rest) = (&s[..pos], &s[end..]);
        if !prefix.is_empty() {
            expr = parse_expression_func(prefix, false)? * expr;
        }
        if !rest.is_empty() {
            expr = expr * parse_expression_func(rest, false)?;
        }
        return Ok(Some(expr));
    }
    Ok(None)
}

fn parse_base_case(s: &str) -> Result<Expr, ParseError> {
    if is_number_literal(s) {
        return parse_number(s);
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ParseError::EmptyExpression),
        (Some('e'), None) => Ok(Expr::Const('e')),
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(Expr::Var(c)),
        (Some(c), None) => Err(ParseError::UnknownSymbol(c.to_string())),
        _ => {
            // juxtaposition: the last symbol (or trailing group) times everything before it
            let split = if s.ends_with(')') {
                find_pair_to_this_closing_bracket(s, s.len() - 1)
                    .ok_or_else(|| ParseError::UnbalancedParentheses(s.to_string()))?
            } else {
                s.len() - 1
            };
            let bytes = s.as_bytes();
            let ambiguous = s.matches('.').count() > 1
                || bytes
                    .iter()
                    .skip_while(|c| !c.is_ascii_alphabetic())
                    .any(|c| c.is_ascii_digit() || *c == b'.');
            if ambiguous {
                warn!("'{}' is not a number, reading it as a product of its symbols", s);
            } else {
                debug!("reading '{}' as a product of '{}' and '{}'", s, &s[..split], &s[split..]);
            }
            let lhs = parse_expression_func(&s[..split], false)?;
            let rhs = parse_expression_func(&s[split..], false)?;
            Ok(lhs * rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::Var('x')
    }

    fn y() -> Expr {
        Expr::Var('y')
    }

    fn n(value: f64) -> Expr {
        Expr::Number(value)
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(Expr::parse("2.5").unwrap(), n(2.5));
        assert_eq!(Expr::parse("-3").unwrap(), n(-3.0));
        assert_eq!(Expr::parse(".5").unwrap(), n(0.5));
        assert_eq!(Expr::parse("1e-3").unwrap(), n(0.001));
        assert_eq!(Expr::parse(" ( (42) ) ").unwrap(), n(42.0));
    }

    #[test]
    fn test_parse_leaves() {
        assert_eq!(Expr::parse("x").unwrap(), x());
        assert_eq!(Expr::parse("e").unwrap(), Expr::Const('e'));
        assert_eq!(Expr::parse("xy").unwrap(), x() * y());
        assert_eq!(Expr::parse("2x").unwrap(), n(2.0) * x());
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(Expr::parse("a-b-c").unwrap(), (Expr::var('a') - Expr::var('b')) - Expr::var('c'));
        assert_eq!(Expr::parse("a/b/c").unwrap(), (Expr::var('a') / Expr::var('b')) / Expr::var('c'));
        assert_eq!(
            Expr::parse("x^2^3").unwrap(),
            x().pow(n(2.0).pow(n(3.0)))
        );
    }

    #[test]
    fn test_precedence() {
        let parsed = Expr::parse("x + 2*y^2").unwrap();
        assert_eq!(parsed, x() + n(2.0) * y().pow(n(2.0)));
        let parsed = Expr::parse("x*y + 1").unwrap();
        assert_eq!(parsed, x() * y() + n(1.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(Expr::parse("-x").unwrap(), -x());
        assert_eq!(Expr::parse("-2x").unwrap(), n(-2.0) * x());
        assert_eq!(Expr::parse("-x^2").unwrap(), -x().pow(n(2.0)));
        assert_eq!(Expr::parse("x*-y").unwrap(), x() * -y());
        assert_eq!(Expr::parse("x^-1").unwrap(), x().pow(n(-1.0)));
        assert_eq!(Expr::parse("x--1").unwrap(), x() - n(-1.0));
        assert_eq!(Expr::parse("2*1e-5").unwrap(), n(2.0) * n(1e-5));
    }

    #[test]
    fn test_rectify() {
        assert_eq!(rectify("(x+1)(x-1)"), "(x+1)*(x-1)");
        assert_eq!(rectify("2(x)"), "2*(x)");
        assert_eq!(rectify("2sin(x)"), "2*sin(x)");
        assert_eq!(rectify("(x)sin(y)"), "(x)*sin(y)");
        assert_eq!(rectify("cosec(x)"), "cosec(x)");
        assert_eq!(rectify("x^(2)"), "x^(2)");
        assert_eq!(rectify("((x))"), "((x))");
        assert_eq!(rectify("(x)^2"), "(x)^2");
        assert_eq!(rectify("(x)y"), "(x)*y");
        assert_eq!(rectify("3log[2](x)"), "3*log[2](x)");
    }

    #[test]
    fn test_implicit_multiplication() {
        let rectified = Expr::parse("(x+1)(x-1)").unwrap();
        let explicit = Expr::parse("(x+1)*(x-1)").unwrap();
        assert_eq!(rectified, explicit);
        assert_eq!(Expr::parse("2sin(x)").unwrap(), n(2.0) * Expr::sin(x().boxed()));
        // without rectify the prefix is still multiplied on
        assert_eq!(
            Expr::parse_with("2sin(x)", false).unwrap(),
            n(2.0) * Expr::sin(x().boxed())
        );
    }

    #[test]
    fn test_functions() {
        assert_eq!(Expr::parse("sin(x)").unwrap(), Expr::sin(x().boxed()));
        assert_eq!(Expr::parse("sinx").unwrap(), Expr::sin(x().boxed()));
        assert_eq!(Expr::parse("cos(x+y)").unwrap(), Expr::cos((x() + y()).boxed()));
        assert_eq!(
            Expr::parse("sin(x)^2").unwrap(),
            Expr::sin(x().boxed()).pow(n(2.0))
        );
        assert_eq!(
            Expr::parse("sin(cos(x))").unwrap(),
            Expr::sin(Expr::cos(x().boxed()).boxed())
        );
    }

    #[test]
    fn test_desugaring() {
        let inv = |e: Expr| e.pow(n(-1.0));
        assert_eq!(Expr::parse("sec(x)").unwrap(), inv(Expr::cos(x().boxed())));
        assert_eq!(Expr::parse("cosec(x)").unwrap(), inv(Expr::sin(x().boxed())));
        assert_eq!(Expr::parse("csc(x)").unwrap(), inv(Expr::sin(x().boxed())));
        assert_eq!(Expr::parse("cotan(x)").unwrap(), inv(Expr::tan(x().boxed())));
        assert_eq!(Expr::parse("cot(x)").unwrap(), inv(Expr::tan(x().boxed())));
        assert_eq!(
            Expr::parse("sinc(x)").unwrap(),
            Expr::sin(x().boxed()) / x()
        );
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(Expr::parse("ln(x)").unwrap(), x().ln());
        assert_eq!(Expr::parse("log(x)").unwrap(), x().log10());
        assert_eq!(
            Expr::parse("log[2](x)").unwrap(),
            Expr::log(n(2.0), x())
        );
        assert_eq!(
            Expr::parse("3log[2](x)").unwrap(),
            n(3.0) * Expr::log(n(2.0), x())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Expr::parse("(x+1"),
            Err(ParseError::UnbalancedParentheses("(x+1".to_string()))
        );
        assert!(matches!(
            Expr::parse("x+1)"),
            Err(ParseError::UnbalancedParentheses(_))
        ));
        assert_eq!(Expr::parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(Expr::parse("()"), Err(ParseError::EmptyExpression));
        assert_eq!(Expr::parse("x+"), Err(ParseError::EmptyExpression));
        assert_eq!(Expr::parse("sin()"), Err(ParseError::EmptyExpression));
        assert_eq!(
            Expr::parse("x$"),
            Err(ParseError::UnknownSymbol("$".to_string()))
        );
        assert!(matches!(Expr::parse("π"), Err(ParseError::UnknownSymbol(_))));
    }

    #[test]
    fn test_ambiguous_literal_falls_through() {
        // digits after a letter are read as a product of the pieces
        let parsed = Expr::parse("x12").unwrap();
        assert_eq!(parsed, (x() * n(1.0)) * n(2.0));
        // a malformed number ends in a stray '.' that is no symbol at all
        assert_eq!(
            Expr::parse("1.2.3"),
            Err(ParseError::UnknownSymbol(".".to_string()))
        );
    }

    #[test]
    fn test_exponent_sign_belongs_to_a_literal() {
        assert_eq!(Expr::parse("x+1e-5").unwrap(), x() + n(1e-5));
        assert_eq!(Expr::parse("(1.5e-2)*x").unwrap(), n(0.015) * x());
        // the mantissa of `x2e-5` does not start a literal, so `-` is a subtraction
        let parsed = Expr::parse("x2e-5").unwrap();
        assert_eq!(parsed, (x() * n(2.0)) * Expr::euler() - n(5.0));
        assert_eq!(Expr::parse("y2e+1").unwrap(), (y() * n(2.0)) * Expr::euler() + n(1.0));
    }

    #[test]
    fn test_infinite_literals() {
        assert_eq!(Expr::parse("inf").unwrap(), n(f64::INFINITY));
        assert_eq!(Expr::parse("-inf").unwrap(), n(f64::NEG_INFINITY));
        assert_eq!(Expr::parse("Infinity").unwrap(), n(f64::INFINITY));
        assert!(matches!(Expr::parse("NaN").unwrap(), Expr::Number(v) if v.is_nan()));
        assert_eq!(Expr::parse("x*inf").unwrap(), x() * n(f64::INFINITY));
        // other letter runs are still products
        assert_eq!(Expr::parse("in").unwrap(), Expr::Var('i') * Expr::Var('n'));
    }

    #[test]
    fn test_symbol_table_order() {
        let names: Vec<&str> = Symbol::iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "+", "-", "*", "/", "^", "sinc", "cosec", "sec", "csc", "cotan", "cot", "sin",
                "cos", "tan", "ln", "log"
            ]
        );
        assert!(Symbol::starts_operator(b'^'));
        assert!(!Symbol::starts_operator(b's'));
    }
}
