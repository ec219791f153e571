// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
use RustedAlgebra::Examples::symbolic_examples::sym_examples;
use RustedAlgebra::symbolic::engine_config::EngineConfig;
use log::info;

fn main() {
    let config = EngineConfig {
        loglevel: Some("info".to_string()),
        ..EngineConfig::default()
    };
    if let Err(e) = config.init_logger() {
        eprintln!("logger was not installed: {}", e);
    }
    // 0 parsing and printing, 1 derivatives, 2 bindings, 3 simplification, 4 config document, 5 errors
    for example in 0..6 {
        info!("running example {}", example);
        sym_examples(example);
    }
}
