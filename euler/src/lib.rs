pub mod ast;
pub mod big_uint;
pub mod diag;
pub mod digit;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod permute;
pub mod prime;
pub mod weave;
