// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::symbolic::engine_config::EngineConfig;
use crate::symbolic::symbolic_engine::{Bindings, Expr};
use crate::symbolic::symbolic_errors::SymbolicError;
use std::collections::HashMap;

#[allow(dead_code)]
pub fn sym_examples(example: usize) {
    let result = match example {
        0 => parse_and_print(),
        1 => differentiate_and_compare(),
        2 => bindings_and_substitution(),
        3 => simplification(),
        4 => configured_engine(),
        5 => parse_errors(),
        _ => {
            println!("example not found");
            Ok(())
        }
    };
    if let Err(e) = result {
        println!("example {} failed: {}", example, e);
    }
    //_________________________________________________
}

fn parse_and_print() -> Result<(), SymbolicError> {
    // FUNCTION OF MULTIPLE VARIABLES
    //parse expression from string to symbolic expression
    let input = "2x^2 + sin(xy) - ln(x)/(y+1)";
    let parsed_expression = Expr::parse(input)?;
    println!(" parsed_expression {}", parsed_expression);
    // every binary operation in its own brackets
    println!(" fully bracketed {}", parsed_expression.to_string_with(true));
    // implicit multiplication is inserted where a bracket meets a symbol
    let implicit = Expr::parse("(x+1)(x-1)")?;
    println!("(x+1)(x-1) is read as {}", implicit);
    // return vec of all arguments
    let variables = parsed_expression.variables();
    println!("variables {:?}", variables);
    // the tree itself
    println!("tree {:?}", Expr::parse("x - (y + z)")?);
    Ok(())
}

fn differentiate_and_compare() -> Result<(), SymbolicError> {
    //  FUNTION OF 1 VARIABLE
    let input = "x^3*sin(x) + e^(2x)";
    let f = Expr::parse(input)?;
    // differentiate with respect to x, raw and simplified
    let df_dx = f.differentiate('x');
    println!("df_dx = {}", df_dx);
    println!("df_dx simplified = {}", df_dx.simplify());
    // higher derivatives are simplified after every step
    println!("d^3f/dx^3 = {}", f.n_th_derivative('x', 3));
    let start = 0.0;
    let end = 2.0;
    let num_values = 100;
    let max_norm = 1e-6;
    // compare numerical and analtical derivatives for a given linspace defined by start, end values and number of values.
    // a norm of the difference between the two of them is returned, and the answer is true if the norm is below max_norm
    let (norm, res) = f.compare_num1D('x', start, end, num_values, max_norm)?;
    println!("norm = {}, res = {}", norm, res);
    // a variable other than x leaves a marker behind
    let g = Expr::parse("x*y")?;
    println!("d(xy)/dx = {}", g.differentiate('x').simplify());
    Ok(())
}

fn bindings_and_substitution() -> Result<(), SymbolicError> {
    let expr = Expr::parse("x^2 + y*z")?;
    // values live in an environment, not in the tree
    let mut bindings = Bindings::new();
    bindings.substitute('x', 2.0).substitute('y', 3.0);
    println!("{} at x=2, y=3, z unbound: {}", expr, expr.evaluate_with(&bindings)?);
    let more: HashMap<char, f64> = HashMap::from([('z', 0.5)]);
    bindings.substitute_all(&more);
    println!("{} with z=0.5: {}", expr, expr.evaluate_with(&bindings)?);
    // if you want to change a variable into constant:
    let expression_with_const = expr.set_variable('y', 1.0);
    println!("expression_with_const = {}", expression_with_const);
    // the expression can also be built without parsing
    let (x, y) = (Expr::var('x'), Expr::var('y'));
    let built = x.clone().pow(Expr::num(2.0)) + Expr::euler().pow(y) - x.ln();
    println!("built = {}", built);
    // division by zero is not an error
    println!("1/0 = {}", Expr::parse("1/0")?.evaluate()?);
    Ok(())
}

fn simplification() -> Result<(), SymbolicError> {
    for input in [
        "2+3",
        "x+x",
        "x*x",
        "x/x",
        "0/x",
        "(x+0)*1",
        "2x+3x",
        "x*y+x",
        "x^2*x^3",
        "x^3/x",
        "log[x](x)",
        "sin(0)+cos(x)",
    ] {
        let expr = Expr::parse(input)?;
        println!("{} -> {}", input, expr.simplify());
    }
    Ok(())
}

fn configured_engine() -> Result<(), SymbolicError> {
    let document = "
    // engine settings
    engine
    rectify: true
    variable: t
    simplify_results: true
    ";
    let config = EngineConfig::from_document(document)?;
    println!("config {:?}", config);
    let expr = config.parse("t^2 sin(t)")?;
    println!("d/dt {} = {}", expr, config.derivative(&expr));
    Ok(())
}

fn parse_errors() -> Result<(), SymbolicError> {
    for input in ["(x+1", "x+1)", "x + #", "", "x+"] {
        match Expr::parse(input) {
            Ok(expr) => println!("'{}' parsed as {}", input, expr),
            Err(e) => println!("'{}' rejected: {}", input, e),
        }
    }
    // a marker cannot be evaluated
    let marker = Expr::parse("y")?.differentiate('x');
    if let Err(e) = marker.evaluate() {
        println!("{} cannot be evaluated: {}", marker, e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_run() {
        for example in 0..6 {
            sym_examples(example);
        }
        assert!(simplification().is_ok());
        assert!(configured_engine().is_ok());
        assert!(parse_errors().is_ok());
    }
}
