pub mod args;
pub mod session;
pub mod validation;
