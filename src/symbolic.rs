#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedAlgebra::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse("2x + sin(x)").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// // rectify inserts the missing multiplications
/// assert_eq!(Expr::parse("(x+1)(x-1)").unwrap(), Expr::parse("(x+1)*(x-1)").unwrap());
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) represents an expression as a tree of `Expr` nodes
/// 2) evaluates it with an explicit environment of variable bindings
/// 3) differentiates it analytically
///# Example#
/// ```
/// use RustedAlgebra::symbolic::symbolic_engine::{Bindings, Expr};
/// let parsed_expression = Expr::parse("x^2 + 3xy").unwrap();
/// // differentiate with respect to x and tidy the result
/// let df_dx = parsed_expression.differentiate('x').simplify();
/// println!("df_dx = {}", df_dx);
/// let mut bindings = Bindings::new();
/// bindings.substitute('x', 3.0).substitute('y', 1.0);
/// assert_eq!(parsed_expression.evaluate_with(&bindings).unwrap(), 18.0);
/// // y depends on x through an unresolved dy/dx marker
/// assert!(df_dx.evaluate_with(&bindings).is_err());
/// // a constant in place of y removes the marker
/// let df_dx = parsed_expression.set_variable('y', 1.0).differentiate('x').simplify();
/// assert_eq!(df_dx.evaluate_with(&bindings).unwrap(), 9.0);
/// ```
/// Example2#
/// ```
/// use RustedAlgebra::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse("ln(x) + x^3").unwrap();
/// // compare numerical and analytical derivatives on a linspace of 100 points in [1, 2].
/// // a norm of the difference is returned, and true if the norm is below max_norm
/// let (norm, res) = f.compare_num1D('x', 1.0, 2.0, 100, 1e-4).unwrap();
/// println!("norm = {}, res = {}", norm, res);
/// assert!(res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
/// algebraic simplification: constant folding, identities, like terms, linear factoring
/// and accumulation of indices
pub mod symbolic_simplify;
/// printing with minimal parentheses
///# Example
/// ```
/// use RustedAlgebra::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse("x - (y + z)").unwrap();
/// assert_eq!(expr.to_string(), "x - (y + z)");
/// assert_eq!(Expr::parse("x*x").unwrap().simplify().to_string(), "x^2");
/// ```
pub mod symbolic_display;
/// errors of parsing, evaluation and configuration
pub mod symbolic_errors;
/// engine settings read from a task document
pub mod engine_config;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
