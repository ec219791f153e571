//! Printing of expression trees.
//!
//! Parentheses are placed from the precedence ladder of [`Expr::precedence`]: an operand is
//! wrapped when it binds looser than its parent, or equally loose on the right
//! (`x - (y + z)`, `x + (y + z)`, `x / (yz)`). The parser reads chains from the left, so the
//! printed text always parses back into the same tree. Products of atomic factors are
//! juxtaposed with the constant first (`2x`, `xy`, `2sin(x)`, `2(xy)`).
//!
//! Printing is a pure traversal; the tree is never reordered.

use crate::symbolic::symbolic_engine::{Expr, LogBase};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_with(false))
    }
}

impl Expr {
    /// Converts the tree to text.
    ///
    /// # Arguments
    /// * `parenthesize` - wrap every binary operation in its own parentheses, e.g.
    ///   `((x + 1) * (y - 2))`; juxtaposed products, function calls and leaves are not wrapped
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse("x - (y + z)")?;
    /// assert_eq!(expr.to_string_with(false), "x - (y + z)");
    /// assert_eq!(expr.to_string_with(true), "(x - (y + z))");
    /// ```
    pub fn to_string_with(&self, parenthesize: bool) -> String {
        match self {
            Expr::Number(value) => format!("{}", value),
            Expr::Var(id) | Expr::Const(id) => id.to_string(),
            Expr::Add(lhs, rhs) => self.binary_to_string(lhs, rhs, "+", parenthesize),
            Expr::Sub(lhs, rhs) => self.binary_to_string(lhs, rhs, "-", parenthesize),
            Expr::Div(lhs, rhs) => self.binary_to_string(lhs, rhs, "/", parenthesize),
            Expr::Pow(lhs, rhs) => self.binary_to_string(lhs, rhs, "^", parenthesize),
            Expr::Mul(lhs, rhs) => match compact_product(lhs, rhs, parenthesize) {
                Some(juxtaposed) => juxtaposed,
                None => self.binary_to_string(lhs, rhs, "*", parenthesize),
            },
            Expr::Log(base, arg, kind) => {
                let arg = arg.to_string_with(parenthesize);
                match kind {
                    LogBase::Natural => format!("ln({})", arg),
                    LogBase::Ten => format!("log({})", arg),
                    LogBase::General => {
                        format!("log[{}]({})", base.to_string_with(parenthesize), arg)
                    }
                }
            }
            Expr::Differential(numerator, variable, order) => {
                let numerator = self.operand_to_string(numerator, false, parenthesize);
                let variable = self.operand_to_string(variable, false, parenthesize);
                let body = if *order > 1 {
                    format!("d^{}{}/d{}^{}", order, numerator, variable, order)
                } else {
                    format!("d{}/d{}", numerator, variable)
                };
                if parenthesize { format!("({})", body) } else { body }
            }
            Expr::sin(arg) => format!("sin({})", arg.to_string_with(parenthesize)),
            Expr::cos(arg) => format!("cos({})", arg.to_string_with(parenthesize)),
            Expr::tan(arg) => format!("tan({})", arg.to_string_with(parenthesize)),
        }
    }

    fn binary_to_string(&self, lhs: &Expr, rhs: &Expr, op: &str, parenthesize: bool) -> String {
        // exponents print tight: x^2, (x + 1)^-1
        let separator = if op == "^" {
            op.to_string()
        } else {
            format!(" {} ", op)
        };
        let body = format!(
            "{}{}{}",
            self.operand_to_string(lhs, false, parenthesize),
            separator,
            self.operand_to_string(rhs, true, parenthesize)
        );
        if parenthesize { format!("({})", body) } else { body }
    }

    /// Prints a child of `self`, wrapping it when it binds looser than its parent
    fn operand_to_string(&self, operand: &Expr, is_right: bool, parenthesize: bool) -> String {
        let text = operand.to_string_with(parenthesize);
        if parenthesize && wraps_itself(operand) {
            return text;
        }
        let (own, parent) = (operand.precedence(), self.precedence());
        // equal precedence on the right is wrapped even for `+` and `*`: `x + (y + z)`
        let wrap = own < parent
            || (is_right && own == parent)
            // exponents associate to the right
            || (!is_right && matches!(self, Expr::Pow(..)) && matches!(operand, Expr::Pow(..)))
            // a negative base would read as a negated power
            || (!is_right
                && matches!(self, Expr::Pow(..))
                && matches!(operand, Expr::Number(value) if value.is_sign_negative()));
        if wrap { format!("({})", text) } else { text }
    }
}

/// true if `to_string_with(true)` already puts the node in parentheses
fn wraps_itself(expr: &Expr) -> bool {
    match expr {
        Expr::Add(..) | Expr::Sub(..) | Expr::Div(..) | Expr::Pow(..) | Expr::Differential(..) => {
            true
        }
        Expr::Mul(lhs, rhs) => compact_product(lhs, rhs, true).is_none(),
        _ => false,
    }
}

/// Juxtaposed rendering of a product of two atomic factors, constant factor first.
/// A product in second place keeps its parentheses, `2(xy)`, since `2xy` reads as `(2x)y`.
/// None when the product needs an explicit `*`.
fn compact_product(lhs: &Expr, rhs: &Expr, parenthesize: bool) -> Option<String> {
    if !lhs.is_atomic() || !rhs.is_atomic() {
        return None;
    }
    // `infx` would read as a product of letters
    let non_finite = |e: &Expr| matches!(e, Expr::Number(value) if !value.is_finite());
    if non_finite(lhs) || non_finite(rhs) {
        return None;
    }
    let (first, second) = match (lhs.is_constant(), rhs.is_constant()) {
        (true, true) => return None,
        (false, true) => (rhs, lhs),
        _ => (lhs, rhs),
    };
    let nested = matches!(second, Expr::Mul(..));
    let first = first.to_string_with(parenthesize);
    let second = second.to_string_with(parenthesize);
    if nested {
        return Some(format!("{}({})", first, second));
    }
    // 2 followed by 3x would read as 23x
    if second.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-' || c == '+') {
        return None;
    }
    Some(format!("{}{}", first, second))
}
