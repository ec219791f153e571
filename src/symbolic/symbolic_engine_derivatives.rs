//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with numerical evaluation and analytical
//! differentiation.
//!
//! ## Key Methods
//!
//! ### Evaluation
//! - `evaluate()` - reduce a tree to a number with every variable unbound (zero)
//! - `evaluate_with(&Bindings)` - reduce a tree to a number in an explicit environment
//!
//! ### Differentiation
//! - `differentiate(var)` - derivative with respect to a single variable
//! - `n_th_derivative(var, n)` - higher-order derivatives, simplified after every step
//!
//! ### Numerical Analysis
//! - `compare_num1D()` - validate a derivative against centred finite differences
//!
//! ## Differentiation of foreign variables
//! A variable that is not the differentiation variable is not treated as a constant: its
//! derivative is a pending `Differential` marker, `dy/dx`. Differentiating the marker again
//! raises its order or, for a new variable, applies the chain rule with a fresh marker.
//! Markers have no numeric value and make `evaluate` fail with
//! `EvaluationError::UnresolvedDerivative`.

use crate::symbolic::symbolic_engine::{Bindings, Expr, LogBase};
use crate::symbolic::symbolic_errors::EvaluationError;
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::debug;
use std::f64::consts::E;

impl Expr {
    /// Evaluates the tree with an empty environment: every variable is zero,
    /// `e` is Euler's number.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        self.evaluate_with(&Bindings::new())
    }

    /// Evaluates the tree with the variable values of `bindings`.
    ///
    /// Division by zero and logarithms of non-positive numbers are not errors: they give
    /// IEEE infinities and NaNs.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse("x^2 + y")?;
    /// let env: Bindings = [('x', 3.0), ('y', 1.0)].into_iter().collect();
    /// assert_eq!(expr.evaluate_with(&env)?, 10.0);
    /// ```
    pub fn evaluate_with(&self, bindings: &Bindings) -> Result<f64, EvaluationError> {
        let value = match self {
            Expr::Number(value) => *value,
            Expr::Var(id) => bindings.get(*id).unwrap_or(0.0),
            Expr::Const('e') => E,
            Expr::Const(id) => bindings.get(*id).unwrap_or(0.0),
            Expr::Add(lhs, rhs) => lhs.evaluate_with(bindings)? + rhs.evaluate_with(bindings)?,
            Expr::Sub(lhs, rhs) => lhs.evaluate_with(bindings)? - rhs.evaluate_with(bindings)?,
            Expr::Mul(lhs, rhs) => lhs.evaluate_with(bindings)? * rhs.evaluate_with(bindings)?,
            Expr::Div(lhs, rhs) => lhs.evaluate_with(bindings)? / rhs.evaluate_with(bindings)?,
            Expr::Pow(base, exp) => base
                .evaluate_with(bindings)?
                .powf(exp.evaluate_with(bindings)?),
            Expr::Log(base, arg, kind) => {
                let arg = arg.evaluate_with(bindings)?;
                match kind {
                    LogBase::Natural => arg.ln(),
                    LogBase::Ten => arg.log10(),
                    LogBase::General => arg.ln() / base.evaluate_with(bindings)?.ln(),
                }
            }
            Expr::Differential(..) => {
                return Err(EvaluationError::UnresolvedDerivative(self.to_string()));
            }
            Expr::sin(arg) => arg.evaluate_with(bindings)?.sin(),
            Expr::cos(arg) => arg.evaluate_with(bindings)?.cos(),
            Expr::tan(arg) => arg.evaluate_with(bindings)?.tan(),
        };
        Ok(value)
    }

    /// Analytical derivative with respect to the variable `var`, always a new tree.
    ///
    /// # Arguments
    /// * `var` - id of the differentiation variable
    ///
    /// # Returns
    /// The unsimplified derivative; call `simplify` for a readable form.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse("sin(x)")?;
    /// assert_eq!(expr.differentiate('x').simplify().to_string(), "cos(x)");
    /// ```
    pub fn differentiate(&self, var: char) -> Expr {
        match self {
            Expr::Number(_) | Expr::Const(_) => Expr::Number(0.0),
            Expr::Var(id) => {
                if *id == var {
                    Expr::Number(1.0)
                } else {
                    Expr::Differential(self.clone().boxed(), Box::new(Expr::Var(var)), 1)
                }
            }
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.differentiate(var)),
                Box::new(rhs.differentiate(var)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.differentiate(var)),
                Box::new(rhs.differentiate(var)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.differentiate(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.differentiate(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.differentiate(var)), rhs.clone())),
                    Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.differentiate(var)))),
                )),
                Box::new(Expr::Pow(rhs.clone(), Box::new(Expr::Number(2.0)))),
            ),
            Expr::Pow(base, exp) => {
                let d_base = base.differentiate(var);
                let d_exp = exp.differentiate(var);
                if exp.is_constant() || d_exp.is_constant_zero() {
                    // power rule: n * b' * b^(n-1)
                    Expr::Mul(
                        Box::new(Expr::Mul(exp.clone(), Box::new(d_base))),
                        Box::new(Expr::Pow(
                            base.clone(),
                            Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Number(1.0)))),
                        )),
                    )
                } else if d_base.is_constant_zero() {
                    // exponential rule: ln(b) * x' * b^x
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            Box::new(base.as_ref().clone().ln()),
                            Box::new(d_exp),
                        )),
                        Box::new(self.clone()),
                    )
                } else {
                    // b^x * (x' ln(b) + x b' / b)
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(d_exp),
                                Box::new(base.as_ref().clone().ln()),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(d_base))),
                                base.clone(),
                            )),
                        )),
                    )
                }
            }
            Expr::Log(base, arg, kind) => {
                let d_arg = arg.differentiate(var);
                if *kind == LogBase::Natural {
                    return Expr::Div(Box::new(d_arg), arg.clone());
                }
                let d_base = base.differentiate(var);
                let ln_base = base.as_ref().clone().ln();
                if d_base.is_constant_zero() {
                    Expr::Div(
                        Box::new(d_arg),
                        Box::new(Expr::Mul(arg.clone(), Box::new(ln_base))),
                    )
                } else {
                    // quotient rule on ln(a) / ln(b)
                    Expr::Div(
                        Box::new(Expr::Sub(
                            Box::new(Expr::Mul(
                                Box::new(Expr::Div(Box::new(d_arg), arg.clone())),
                                Box::new(ln_base.clone()),
                            )),
                            Box::new(Expr::Mul(
                                Box::new(arg.as_ref().clone().ln()),
                                Box::new(Expr::Div(Box::new(d_base), base.clone())),
                            )),
                        )),
                        Box::new(Expr::Pow(Box::new(ln_base), Box::new(Expr::Number(2.0)))),
                    )
                }
            }
            Expr::Differential(numerator, variable, order) => {
                let bumped = Expr::Differential(numerator.clone(), variable.clone(), order + 1);
                if variable.differentiate(var).is_constant() {
                    bumped
                } else {
                    // chain term d^(n+1)y/dx^(n+1) * dx/dz
                    Expr::Mul(
                        Box::new(bumped),
                        Box::new(Expr::Differential(variable.clone(), Box::new(Expr::Var(var)), 1)),
                    )
                }
            }
            Expr::sin(arg) => Expr::Mul(
                Box::new(Expr::cos(arg.clone())),
                Box::new(arg.differentiate(var)),
            ),
            Expr::cos(arg) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Number(-1.0)),
                    Box::new(Expr::sin(arg.clone())),
                )),
                Box::new(arg.differentiate(var)),
            ),
            Expr::tan(arg) => Expr::Mul(
                Box::new(Expr::Pow(
                    Box::new(Expr::cos(arg.clone())),
                    Box::new(Expr::Number(-2.0)),
                )),
                Box::new(arg.differentiate(var)),
            ),
        }
    }

    /// n-th derivative with respect to `var`, simplified after every differentiation
    pub fn n_th_derivative(&self, var: char, n: usize) -> Expr {
        let mut expr = self.simplify();
        for i in 0..n {
            expr = expr.differentiate(var).simplify();
            debug!("derivative {} of {}: {}", i + 1, self, expr);
        }
        expr
    }

    /// Compares the analytical derivative with a centred finite difference of the expression
    /// on `num_values` points of `[start, end]`. Every other variable is unbound (zero).
    ///
    /// # Returns
    /// `(norm, norm < max_norm)`; fails if the expression or its derivative holds a pending
    /// `Differential` marker.
    pub fn compare_num1D(
        &self,
        var: char,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), EvaluationError> {
        let derivative = self.differentiate(var).simplify(); // get the analytical derivative
        let domain = linspace(start, end, num_values);
        let mut env = Bindings::new();
        let mut analytical_derivative = Vec::with_capacity(domain.len());
        for &point in &domain {
            env.substitute(var, point);
            analytical_derivative.push(derivative.evaluate_with(&env)?);
            // the function itself must be evaluable for the finite difference
            self.evaluate_with(&env)?;
        }
        let function = |point: f64| {
            let env: Bindings = [(var, point)].into_iter().collect();
            self.evaluate_with(&env).unwrap_or(f64::NAN)
        };
        let step = if num_values > 1 {
            (1.0 / 1e4) * (end - start) / (num_values as f64 - 1.0)
        } else {
            1e-5
        };
        let numerical = numerical_derivative(function, &domain, step);
        let norma_val = norm(&analytical_derivative, &numerical);
        Ok((norma_val, max_norm > norma_val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn x() -> Expr {
        Expr::Var('x')
    }

    fn at(var: char, value: f64) -> Bindings {
        [(var, value)].into_iter().collect()
    }

    #[test]
    fn test_evaluate_arithmetic() {
        let expr = Expr::parse("2+3*4").unwrap();
        assert_relative_eq!(expr.evaluate().unwrap(), 14.0);
        let expr = Expr::parse("2^3^2").unwrap();
        assert_relative_eq!(expr.evaluate().unwrap(), 512.0);
        let expr = Expr::parse("e").unwrap();
        assert_relative_eq!(expr.evaluate().unwrap(), E);
    }

    #[test]
    fn test_evaluate_with_bindings() {
        let expr = Expr::parse("x^2 + y").unwrap();
        let env: Bindings = [('x', 3.0), ('y', 1.0)].into_iter().collect();
        assert_relative_eq!(expr.evaluate_with(&env).unwrap(), 10.0);
        // unbound variables are zero
        assert_relative_eq!(expr.evaluate().unwrap(), 0.0);
    }

    #[test]
    fn test_evaluate_logs() {
        assert_relative_eq!(Expr::parse("ln(e)").unwrap().evaluate().unwrap(), 1.0);
        assert_relative_eq!(Expr::parse("log(1000)").unwrap().evaluate().unwrap(), 3.0, epsilon = 1e-12);
        let log2 = Expr::log(Expr::Number(2.0), Expr::Number(8.0));
        assert_relative_eq!(log2.evaluate().unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_ieee_exceptions() {
        let expr = Expr::parse("1/x").unwrap();
        assert!(expr.evaluate().unwrap().is_infinite());
        let expr = Expr::parse("ln(x)").unwrap();
        assert!(expr.evaluate_with(&at('x', -1.0)).unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_differential_fails() {
        let marker = Expr::Var('y').differentiate('x');
        assert!(matches!(
            marker.evaluate(),
            Err(EvaluationError::UnresolvedDerivative(_))
        ));
        let expr = Expr::parse("x + y").unwrap().differentiate('x');
        assert!(expr.evaluate().is_err());
    }

    #[test]
    fn test_diff_leaves() {
        assert_eq!(Expr::Number(5.0).differentiate('x'), Expr::Number(0.0));
        assert_eq!(Expr::euler().differentiate('x'), Expr::Number(0.0));
        assert_eq!(x().differentiate('x'), Expr::Number(1.0));
        assert_eq!(
            Expr::Var('y').differentiate('x'),
            Expr::differential(Expr::Var('y'), x(), 1)
        );
    }

    #[test]
    fn test_diff_rules_structure() {
        let expr = Expr::parse("x*y").unwrap().differentiate('x');
        assert!(matches!(expr, Expr::Add(..)));
        let expr = Expr::parse("sin(x)").unwrap().differentiate('x');
        assert_eq!(
            expr,
            Expr::Mul(Box::new(Expr::cos(x().boxed())), Box::new(Expr::Number(1.0)))
        );
        let expr = Expr::parse("ln(x)").unwrap().differentiate('x');
        assert_eq!(expr, Expr::Div(Box::new(Expr::Number(1.0)), x().boxed()));
    }

    #[test]
    fn test_diff_differential_orders() {
        let marker = Expr::Var('y').differentiate('x');
        let second = marker.differentiate('x');
        assert_eq!(second, Expr::differential(Expr::Var('y'), x(), 2));
        let mixed = marker.differentiate('z');
        assert_eq!(
            mixed,
            Expr::Mul(
                Box::new(Expr::differential(Expr::Var('y'), x(), 2)),
                Box::new(Expr::differential(x(), Expr::Var('z'), 1)),
            )
        );
    }

    #[test]
    fn test_diff_numerically() {
        let cases = [
            "x^3 - 2x",
            "sin(x)cos(x)",
            "tan(x)",
            "2^x",
            "x^x",
            "ln(x^2+1)",
            "log(x)",
            "log[x+2](x+3)",
            "e^(2x)",
            "(x+1)/(x^2+2)",
            "sec(x)",
            "sinc(x)",
        ];
        for text in cases {
            let expr = Expr::parse(text).unwrap();
            let (norma, ok) = expr.compare_num1D('x', 0.5, 1.5, 20, 1e-4).unwrap();
            assert!(ok, "{}: norm {}", text, norma);
        }
    }

    #[test]
    fn test_n_th_derivative() {
        let expr = Expr::parse("x^3").unwrap();
        let third = expr.n_th_derivative('x', 3);
        assert_eq!(third, Expr::Number(6.0));
        let second = expr.n_th_derivative('x', 2);
        assert_relative_eq!(second.evaluate_with(&at('x', 2.0)).unwrap(), 12.0);
        assert_eq!(expr.n_th_derivative('x', 0), expr);
    }
}
