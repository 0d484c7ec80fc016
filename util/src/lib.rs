pub mod idx;
pub mod lexer;
pub mod parser;
