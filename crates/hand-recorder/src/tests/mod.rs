mod config;
mod output_handler;
