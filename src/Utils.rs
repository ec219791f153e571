/// terminal logger set up
pub mod logger;
/// parser of task documents made of titled sections of key-value pairs
pub mod task_parser;
