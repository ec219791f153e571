//! # Symbolic Engine Module
//!
//! This module holds the expression tree of the engine and the capability contract every
//! node kind implements. Parsing, evaluation, differentiation, simplification and printing
//! live in their own modules and all work on the [`Expr`] defined here.
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! A closed sum type of thirteen node kinds:
//! - **Leaves**: `Number(f64)`, `Var(char)`, `Const(char)` (`'e'` is Euler's number)
//! - **Operators**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - binary arithmetic
//! - **Log**: `Log(base, argument, LogBase)` where `LogBase` is derived from the base once
//! - **Differential**: `Differential(numerator, variable, order)`, a pending `d^n y / dx^n`
//! - **Functions**: `sin`, `cos`, `tan`; `sec`, `csc`, `cot` and `sinc` are desugared by the parser
//!
//! ### `Bindings`
//! Variable values are not stored in the tree. A `Bindings` environment maps variable ids to
//! numbers and is handed to `evaluate_with`, so two trees that differ only in the values of
//! their variables are the same tree.
//!
//! ## Ownership
//! Every operator owns its children through `Box<Expr>`; there is no sharing between trees.
//! `copy_tree` is an explicit deep clone and every algorithm builds a brand new tree.
//!
//! ## Equality
//! `PartialEq` is structural and commutativity-aware: `x + y == y + x`, `x - y != y - x`.

#![allow(non_camel_case_types)]

use std::collections::{BTreeSet, HashMap};
use std::f64::consts::E;
use strum_macros::Display;

/// Core symbolic expression enum representing a mathematical expression as a tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedAlgebra::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var('x');
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Number(2.0)));
/// ```
#[derive(Clone, Debug)]
pub enum Expr {
    /// Numerical constant value
    Number(f64),
    /// Symbolic variable with a single character id
    Var(char),
    /// Named constant; `'e'` always evaluates to Euler's number
    Const(char),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Logarithm of the argument (second child) in the base (first child).
    /// Build it with [`Expr::log`] so the classification matches the base.
    Log(Box<Expr>, Box<Expr>, LogBase),
    /// Unresolved derivative of the numerator with respect to the variable, of the given order
    Differential(Box<Expr>, Box<Expr>, u32),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x)
    tan(Box<Expr>),
}

/// Classification of a logarithm base, computed once from the base subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogBase {
    /// base is Euler's number, printed as `ln`
    #[strum(serialize = "ln")]
    Natural,
    /// base is the literal 10, printed as `log`
    #[strum(serialize = "log")]
    Ten,
    /// any other base, printed as `log[base]`
    #[strum(serialize = "log[_]")]
    General,
}

impl LogBase {
    /// Inspects an (atomic, constant) base. Anything that is not literally `e` or `10` is general.
    pub fn classify(base: &Expr) -> LogBase {
        match base {
            Expr::Const('e') => LogBase::Natural,
            Expr::Number(value) if *value == 10.0 => LogBase::Ten,
            Expr::Number(value) if *value == E => LogBase::Natural,
            _ => LogBase::General,
        }
    }
}

/// Precedence of leaves: they never need parentheses
pub const ATOM_PRECEDENCE: u8 = u8::MAX;

/// Environment of variable values used by evaluation.
///
/// # Examples
/// ```rust, ignore
/// let mut env = Bindings::new();
/// env.substitute('x', 2.0).substitute('y', 3.0);
/// let value = expr.evaluate_with(&env)?;
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<char, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds (or rebinds) a single variable
    pub fn substitute(&mut self, var: char, value: f64) -> &mut Self {
        self.values.insert(var, value);
        self
    }

    /// Binds every variable of the map, keeping other bindings untouched
    pub fn substitute_all(&mut self, values: &HashMap<char, f64>) -> &mut Self {
        self.values
            .extend(values.iter().map(|(var, value)| (*var, *value)));
        self
    }

    pub fn get(&self, var: char) -> Option<f64> {
        self.values.get(&var).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<char, f64>> for Bindings {
    fn from(values: HashMap<char, f64>) -> Self {
        Bindings { values }
    }
}

impl FromIterator<(char, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Bindings {
            values: iter.into_iter().collect(),
        }
    }
}

/// Structural equality. Commutative operators match in either orientation,
/// variables and constants match on their id only.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Expr::Number(a), Expr::Number(b)) => a == b,
            (Expr::Var(a), Expr::Var(b)) => a == b,
            (Expr::Const(a), Expr::Const(b)) => a == b,
            (Expr::Add(l1, r1), Expr::Add(l2, r2)) | (Expr::Mul(l1, r1), Expr::Mul(l2, r2)) => {
                (l1 == l2 && r1 == r2) || (l1 == r2 && r1 == l2)
            }
            (Expr::Sub(l1, r1), Expr::Sub(l2, r2))
            | (Expr::Div(l1, r1), Expr::Div(l2, r2))
            | (Expr::Pow(l1, r1), Expr::Pow(l2, r2))
            | (Expr::Log(l1, r1, _), Expr::Log(l2, r2, _)) => l1 == l2 && r1 == r2,
            (Expr::Differential(n1, v1, o1), Expr::Differential(n2, v2, o2)) => {
                o1 == o2 && n1 == n2 && v1 == v2
            }
            (Expr::sin(a), Expr::sin(b))
            | (Expr::cos(a), Expr::cos(b))
            | (Expr::tan(a), Expr::tan(b)) => a == b,
            _ => false,
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Number(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates a numeric leaf
    pub fn num(value: f64) -> Expr {
        Expr::Number(value)
    }

    /// Creates a variable leaf
    pub fn var(id: char) -> Expr {
        Expr::Var(id)
    }

    /// Euler's number as a named constant
    pub fn euler() -> Expr {
        Expr::Const('e')
    }

    /// Creates a logarithm of `argument` in `base`, classifying the base on the way.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let ln_x = Expr::log(Expr::euler(), Expr::var('x'));
    /// assert_eq!(ln_x.to_string(), "ln(x)");
    /// ```
    pub fn log(base: Expr, argument: Expr) -> Expr {
        let kind = LogBase::classify(&base);
        Expr::Log(base.boxed(), argument.boxed(), kind)
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(self) -> Expr {
        Expr::log(Expr::euler(), self)
    }

    /// Creates base-10 logarithm log(self).
    pub fn log10(self) -> Expr {
        Expr::log(Expr::Number(10.0), self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Creates a pending derivative marker `d^order numerator / d variable^order`
    pub fn differential(numerator: Expr, variable: Expr, order: u32) -> Expr {
        Expr::Differential(numerator.boxed(), variable.boxed(), order)
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Deep clone of the whole tree; the copy shares nothing with the original.
    pub fn copy_tree(&self) -> Expr {
        self.clone()
    }

    /// Structural, commutativity-aware comparison
    pub fn equals(&self, other: &Expr) -> bool {
        self == other
    }

    pub fn not_equals(&self, other: &Expr) -> bool {
        self != other
    }

    //___________________________________CAPABILITIES____________________________________

    /// true if the node contains no variables, i.e. it folds to a single number.
    /// A pending derivative is never constant.
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Const(_) => true,
            Expr::Var(_) | Expr::Differential(..) => false,
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs)
            | Expr::Log(lhs, rhs, _) => lhs.is_constant() && rhs.is_constant(),
            Expr::sin(arg) | Expr::cos(arg) | Expr::tan(arg) => arg.is_constant(),
        }
    }

    /// true if the node prints without its own parentheses inside a product:
    /// leaves, function calls and juxtaposable products such as `xy` or `2x`
    pub fn is_atomic(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Var(_) | Expr::Const(_) => true,
            Expr::sin(_) | Expr::cos(_) | Expr::tan(_) => true,
            Expr::Mul(lhs, rhs) => lhs.is_atomic() && rhs.is_atomic() && !lhs.is_constant(),
            _ => false,
        }
    }

    /// Binding strength used by the printer (higher binds tighter)
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) | Expr::Differential(..) => 2,
            Expr::Pow(..) => 3,
            Expr::sin(_) | Expr::cos(_) | Expr::tan(_) => 4,
            Expr::Log(..) => 10,
            Expr::Number(_) | Expr::Var(_) | Expr::Const(_) => ATOM_PRECEDENCE,
        }
    }

    /// true if swapping the two operands does not change the value
    pub fn is_commutative(&self) -> bool {
        !matches!(
            self,
            Expr::Sub(..) | Expr::Div(..) | Expr::Pow(..) | Expr::Log(..) | Expr::Differential(..)
        )
    }

    /// Checks if expression is exactly the constant zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(val) if *val == 0.0)
    }

    /// Constant subtree whose value is exactly `value`
    pub(crate) fn is_constant_value(&self, value: f64) -> bool {
        self.is_constant() && matches!(self.evaluate(), Ok(v) if v == value)
    }

    /// Constant subtree that evaluates to zero; this is how "does not depend on the
    /// variable" is decided after differentiation
    pub(crate) fn is_constant_zero(&self) -> bool {
        self.is_constant_value(0.0)
    }

    /// Rebuilds the node with `f` applied to every direct child. Leaves are cloned.
    pub(crate) fn map_operands<F>(&self, f: F) -> Expr
    where
        F: Fn(&Expr) -> Expr,
    {
        match self {
            Expr::Number(_) | Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(f(lhs).boxed(), f(rhs).boxed()),
            Expr::Sub(lhs, rhs) => Expr::Sub(f(lhs).boxed(), f(rhs).boxed()),
            Expr::Mul(lhs, rhs) => Expr::Mul(f(lhs).boxed(), f(rhs).boxed()),
            Expr::Div(lhs, rhs) => Expr::Div(f(lhs).boxed(), f(rhs).boxed()),
            Expr::Pow(lhs, rhs) => Expr::Pow(f(lhs).boxed(), f(rhs).boxed()),
            Expr::Log(base, arg, _) => Expr::log(f(base), f(arg)),
            Expr::Differential(num, var, order) => {
                Expr::Differential(f(num).boxed(), f(var).boxed(), *order)
            }
            Expr::sin(arg) => Expr::sin(f(arg).boxed()),
            Expr::cos(arg) => Expr::cos(f(arg).boxed()),
            Expr::tan(arg) => Expr::tan(f(arg).boxed()),
        }
    }

    //___________________________________VARIABLES____________________________________

    /// Returns a new tree where every `Var(var)` leaf is replaced by `Number(value)`.
    ///
    /// # Arguments
    /// * `var` - id of the variable to replace
    /// * `value` - numerical value to put in its place
    pub fn set_variable(&self, var: char, value: f64) -> Expr {
        match self {
            Expr::Var(id) if *id == var => Expr::Number(value),
            _ => self.map_operands(|child| child.set_variable(var, value)),
        }
    }

    /// Same as `set_variable` for every variable of the map
    pub fn set_variable_from_map(&self, var_map: &HashMap<char, f64>) -> Expr {
        match self {
            Expr::Var(id) if var_map.contains_key(id) => Expr::Number(var_map[id]),
            _ => self.map_operands(|child| child.set_variable_from_map(var_map)),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var: char) -> bool {
        match self {
            Expr::Var(id) => *id == var,
            Expr::Number(_) | Expr::Const(_) => false,
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs)
            | Expr::Log(lhs, rhs, _)
            | Expr::Differential(lhs, rhs, _) => {
                lhs.contains_variable(var) || rhs.contains_variable(var)
            }
            Expr::sin(arg) | Expr::cos(arg) | Expr::tan(arg) => arg.contains_variable(var),
        }
    }

    /// Extracts all unique variable ids from the expression, sorted.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse("x^2 + y*z + x")?;
    /// assert_eq!(expr.variables(), vec!['x', 'y', 'z']);
    /// ```
    pub fn variables(&self) -> Vec<char> {
        let mut found = BTreeSet::new();
        self.collect_variables(&mut found);
        found.into_iter().collect()
    }

    fn collect_variables(&self, found: &mut BTreeSet<char>) {
        match self {
            Expr::Var(id) => {
                found.insert(*id);
            }
            Expr::Number(_) | Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs)
            | Expr::Log(lhs, rhs, _)
            | Expr::Differential(lhs, rhs, _) => {
                lhs.collect_variables(found);
                rhs.collect_variables(found);
            }
            Expr::sin(arg) | Expr::cos(arg) | Expr::tan(arg) => arg.collect_variables(found),
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

    #[test]
    fn test_commutative_equality() {
        assert_eq!(x() + y(), y() + x());
        assert_eq!(x() * Expr::Number(2.0), Expr::Number(2.0) * x());
        assert_ne!(x() - y(), y() - x());
        assert_ne!(x() / y(), y() / x());
        assert_ne!(x().pow(y()), y().pow(x()));
        assert_eq!(x() - x(), x() - x());
    }

    #[test]
    fn test_variant_mismatch_is_unequal() {
        assert_ne!(Expr::Var('e'), Expr::Const('e'));
        assert_ne!(x() + y(), x() * y());
        assert_ne!(Expr::sin(x().boxed()), Expr::cos(x().boxed()));
        assert!(Expr::Number(1.0).not_equals(&Expr::Number(2.0)));
    }

    #[test]
    fn test_differential_order_matters() {
        let first = Expr::differential(y(), x(), 1);
        let second = Expr::differential(y(), x(), 2);
        assert_ne!(first, second);
        assert!(first.equals(&first.copy_tree()));
    }

    #[test]
    fn test_log_classification() {
        assert_eq!(LogBase::classify(&Expr::euler()), LogBase::Natural);
        assert_eq!(LogBase::classify(&Expr::Number(10.0)), LogBase::Ten);
        assert_eq!(LogBase::classify(&Expr::Number(2.0)), LogBase::General);
        assert_eq!(LogBase::classify(&x()), LogBase::General);
        match x().ln() {
            Expr::Log(_, _, kind) => assert_eq!(kind, LogBase::Natural),
            other => panic!("expected a log, got {:?}", other),
        }
        assert_eq!(LogBase::Ten.to_string(), "log");
    }

    #[test]
    fn test_is_constant() {
        assert!((Expr::Number(2.0) + Expr::euler()).is_constant());
        assert!(!(Expr::Number(2.0) + x()).is_constant());
        assert!(Expr::sin(Expr::Number(1.0).boxed()).is_constant());
        assert!(!Expr::differential(y(), x(), 1).is_constant());
    }

    #[test]
    fn test_is_atomic() {
        assert!(x().is_atomic());
        assert!(Expr::cos(x().boxed()).is_atomic());
        assert!((x() * y()).is_atomic());
        assert!(!(Expr::Number(2.0) * x()).is_atomic());
        assert!(!(x() + y()).is_atomic());
        assert!(!x().pow(Expr::Number(2.0)).is_atomic());
    }

    #[test]
    fn test_precedence_ladder() {
        assert!((x() + y()).precedence() < (x() * y()).precedence());
        assert!((x() / y()).precedence() < x().pow(y()).precedence());
        assert!(x().pow(y()).precedence() < Expr::tan(x().boxed()).precedence());
        assert_eq!(x().ln().precedence(), 10);
        assert!(!(x() - y()).is_commutative());
        assert!((x() * y()).is_commutative());
    }

    #[test]
    fn test_set_variable() {
        let expr = x() * y() + Expr::sin(x().boxed());
        let substituted = expr.set_variable('x', 2.0);
        let expected = Expr::Number(2.0) * y() + Expr::sin(Expr::Number(2.0).boxed());
        assert_eq!(substituted, expected);
        // the input tree is left untouched
        assert!(expr.contains_variable('x'));
        let map: HashMap<char, f64> = [('x', 1.0), ('y', 2.0)].into_iter().collect();
        assert!(expr.set_variable_from_map(&map).is_constant());
    }

    #[test]
    fn test_variables() {
        let expr = x() * y() + Expr::Var('a').pow(x()) + Expr::euler();
        assert_eq!(expr.variables(), vec!['a', 'x', 'y']);
        assert!(!expr.contains_variable('e'));
    }

    #[test]
    fn test_bindings() {
        let mut env = Bindings::new();
        assert!(env.is_empty());
        env.substitute('x', 1.0).substitute('y', 2.0);
        assert_eq!(env.get('x'), Some(1.0));
        let map: HashMap<char, f64> = [('x', 5.0), ('z', 3.0)].into_iter().collect();
        env.substitute_all(&map);
        assert_eq!(env.get('x'), Some(5.0));
        assert_eq!(env.get('y'), Some(2.0));
        assert_eq!(env.get('z'), Some(3.0));
        let collected: Bindings = [('q', 1.5)].into_iter().collect();
        assert_eq!(collected.get('q'), Some(1.5));
    }

    #[test]
    fn test_neg() {
        let neg_expr = -x();
        let expected = Expr::Mul(Box::new(Expr::Number(-1.0)), Box::new(x()));
        assert_eq!(neg_expr, expected);
    }
}
