#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod run;

fn main() -> anyhow::Result<()> {
    run::run()
}
