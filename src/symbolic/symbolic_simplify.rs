//! # Symbolic Expression Simplification Module
//!
//! This module provides algebraic simplification of symbolic expressions. `simplify` never
//! touches its input: it builds a brand new tree.
//!
//! ## Simplification Strategy
//!
//! Rules are applied bottom-up, children first, in this priority order per node:
//!
//! 1. **Constant Folding**: a node without variables becomes a single `Number`
//! 2. **Identities**: `x + 0 = x`, `x * 1 = x`, `x * 0 = 0`, `x^0 = 1`, `x^1 = x`, `0 / x = 0`,
//!    `x / 1 = x`, `0 - x = -1 * x`
//! 3. **Like Terms**: `x + x = 2x`, `x - x = 0`, `x * x = x^2`, `x / x = 1`
//! 4. **Linear Factoring** (`+`, `-`): `2x + 3x = 5x`, `xy + x = (y + 1)x`
//! 5. **Index Accumulation** (`*`, `/`): `x^2 * x = x^3`, `x^3 / x = x^2`
//!
//! Trigonometric functions only simplify their operand; no identities are applied.
//! A logarithm whose base and argument are the same tree is `1`.
//!
//! ## Examples
//! - `2 + 3` → `5`
//! - `x*x` → `x^2`
//! - `(x + 0) * 1` → `x`

use crate::symbolic::symbolic_engine::Expr;
use log::trace;

/// constructor of a binary node, e.g. `Expr::Add`
type BinaryOp = fn(Box<Expr>, Box<Expr>) -> Expr;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Returns an algebraically reduced copy of the expression.
    ///
    /// The result is stable: simplifying it again gives the same tree.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse("x + x")?;
    /// assert_eq!(expr.simplify().to_string(), "2x");
    /// ```
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Number(_) | Expr::Var(_) | Expr::Const(_) | Expr::Differential(..) => {
                return self.clone();
            }
            _ => {}
        }
        if let Some(folded) = self.fold_constant() {
            return folded;
        }
        let simplified = match self {
            Expr::Add(lhs, rhs) => simplify_add(lhs.simplify(), rhs.simplify()),
            Expr::Sub(lhs, rhs) => simplify_sub(lhs.simplify(), rhs.simplify()),
            Expr::Mul(lhs, rhs) => simplify_mul(lhs.simplify(), rhs.simplify()),
            Expr::Div(lhs, rhs) => simplify_div(lhs.simplify(), rhs.simplify()),
            Expr::Pow(base, exp) => simplify_pow(base.simplify(), exp.simplify()),
            Expr::Log(base, arg, _) => {
                let (base, arg) = (base.simplify(), arg.simplify());
                if base == arg {
                    trace!("log[{}]({}) -> 1", base, arg);
                    Expr::Number(1.0)
                } else {
                    Expr::log(base, arg)
                }
            }
            Expr::sin(arg) => Expr::sin(arg.simplify().boxed()),
            Expr::cos(arg) => Expr::cos(arg.simplify().boxed()),
            Expr::tan(arg) => Expr::tan(arg.simplify().boxed()),
            Expr::Number(_) | Expr::Var(_) | Expr::Const(_) | Expr::Differential(..) => {
                self.clone()
            }
        };
        // children may have collapsed into constants
        simplified.fold_constant().unwrap_or(simplified)
    }

    /// A composite node without variables evaluated to a single number. Leaves are kept
    /// as they are so `e` stays `e`.
    fn fold_constant(&self) -> Option<Expr> {
        match self {
            Expr::Number(_) | Expr::Var(_) | Expr::Const(_) => None,
            _ if self.is_constant() => {
                let value = self.evaluate().ok()?;
                trace!("folding {} into {}", self, value);
                // no negative zero in results
                Some(Expr::Number(if value == 0.0 { 0.0 } else { value }))
            }
            _ => None,
        }
    }
}

fn is_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Number(value) if *value == 1.0)
}

fn simplify_add(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_zero() {
        return rhs;
    }
    if rhs.is_zero() {
        return lhs;
    }
    if lhs == rhs {
        trace!("{} + {} -> 2 * {}", lhs, rhs, lhs);
        return Expr::Mul(Expr::Number(2.0).boxed(), lhs.boxed()).simplify();
    }
    factorise_linear(Expr::Add, lhs, rhs)
}

fn simplify_sub(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_zero() {
        return Expr::Mul(Expr::Number(-1.0).boxed(), rhs.boxed());
    }
    if rhs.is_zero() {
        return lhs;
    }
    if lhs == rhs {
        trace!("{} - {} -> 0", lhs, rhs);
        return Expr::Number(0.0);
    }
    factorise_linear(Expr::Sub, lhs, rhs)
}

fn simplify_mul(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_zero() || rhs.is_zero() {
        return Expr::Number(0.0);
    }
    if is_one(&lhs) {
        return rhs;
    }
    if is_one(&rhs) {
        return lhs;
    }
    if lhs == rhs {
        trace!("{} * {} -> {}^2", lhs, rhs, lhs);
        return Expr::Pow(lhs.boxed(), Expr::Number(2.0).boxed());
    }
    accumulate_indices(Expr::Mul, Expr::Add, lhs, rhs)
}

fn simplify_div(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_zero() {
        return Expr::Number(0.0);
    }
    if is_one(&rhs) {
        return lhs;
    }
    if lhs == rhs {
        trace!("{} / {} -> 1", lhs, rhs);
        return Expr::Number(1.0);
    }
    accumulate_indices(Expr::Div, Expr::Sub, lhs, rhs)
}

fn simplify_pow(base: Expr, exp: Expr) -> Expr {
    if exp.is_zero() {
        return Expr::Number(1.0);
    }
    if base.is_zero() {
        return Expr::Number(0.0);
    }
    if is_one(&base) {
        return Expr::Number(1.0);
    }
    if is_one(&exp) {
        return base;
    }
    Expr::Pow(base.boxed(), exp.boxed())
}

// an operand seen as a product of two factors; anything but a product is `operand * 1`
fn as_factors(expr: &Expr) -> [Expr; 2] {
    match expr {
        Expr::Mul(lhs, rhs) => [lhs.as_ref().clone(), rhs.as_ref().clone()],
        other => [other.clone(), Expr::Number(1.0)],
    }
}

// an operand seen as a power; anything but a power is `operand ^ 1`
fn as_power(expr: &Expr) -> (Expr, Expr) {
    match expr {
        Expr::Pow(base, exp) => (base.as_ref().clone(), exp.as_ref().clone()),
        other => (other.clone(), Expr::Number(1.0)),
    }
}

/// `a*c ± b*c -> (a ± b) * c` for the first factor shared by both operands.
/// `op` is `Expr::Add` or `Expr::Sub` and is kept for the remaining factors.
fn factorise_linear(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    if !matches!(lhs, Expr::Mul(..)) && !matches!(rhs, Expr::Mul(..)) {
        return op(lhs.boxed(), rhs.boxed());
    }
    let left_factors = as_factors(&lhs);
    let right_factors = as_factors(&rhs);
    for i in 0..2 {
        for j in 0..2 {
            if left_factors[i] == right_factors[j] {
                let shared = left_factors[i].clone();
                let rest = op(
                    left_factors[1 - i].clone().boxed(),
                    right_factors[1 - j].clone().boxed(),
                )
                .simplify();
                trace!("factoring {} out of {} and {}", shared, lhs, rhs);
                return Expr::Mul(rest.boxed(), shared.boxed()).simplify();
            }
        }
    }
    op(lhs.boxed(), rhs.boxed())
}

/// `b^m * b^n -> b^(m+n)` and `b^m / b^n -> b^(m-n)` when both operands share the base.
/// `op` is the node being simplified, `combine` joins the indices.
fn accumulate_indices(op: BinaryOp, combine: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    if !matches!(lhs, Expr::Pow(..)) && !matches!(rhs, Expr::Pow(..)) {
        return op(lhs.boxed(), rhs.boxed());
    }
    let (left_base, left_index) = as_power(&lhs);
    let (right_base, right_index) = as_power(&rhs);
    if left_base != right_base {
        return op(lhs.boxed(), rhs.boxed());
    }
    trace!("accumulating indices of {} and {}", lhs, rhs);
    let index = combine(left_index.boxed(), right_index.boxed()).simplify();
    Expr::Pow(left_base.boxed(), index.boxed()).simplify()
}
