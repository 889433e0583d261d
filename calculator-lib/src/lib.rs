//! Evaluation engine for the arithmetic expressions typed into the calculator.
//!
//! The engine is a pipeline of pure functions: the text is split into tokens,
//! parsed into an expression tree, evaluated and formatted. Use
//! [`interpreter::calculate`] for the whole pipeline.

pub mod interpreter;
