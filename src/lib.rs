pub mod app;
pub mod cli;
pub mod config;
pub mod glyph;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod runner;
pub mod source;
pub mod state;

#[cfg(test)]
mod tests;
