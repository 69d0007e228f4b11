mod input;
mod runner;
mod sanity;
mod types;

#[cfg(test)]
mod tests;

pub use runner::run_cli;
