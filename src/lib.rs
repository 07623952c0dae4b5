//! schedopts - rule-driven validation of scheduled-report scheduler options

pub mod codes;
pub mod validator;
