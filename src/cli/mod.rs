mod args;
mod commands;
mod config_cmd;
mod form;
mod plan;
mod render;
mod util;

pub use args::Cli;
