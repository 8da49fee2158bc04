pub mod config;
pub mod console_interface;
pub mod core;
pub mod export;
pub mod models;

#[cfg(test)]
mod test;
