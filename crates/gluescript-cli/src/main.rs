use std::io::stdout;
use std::process::exit;

use clap::Parser;
use gluescript::Driver;

use crate::args::GluescriptArgs;

pub mod args;

fn main() {
    env_logger::init();
    let args = GluescriptArgs::parse();
    match run(&args) {
        Ok(()) => exit(0),
        Err(err) => {
            eprintln!("{err:#}");
            exit(1);
        }
    }
}

fn run(args: &GluescriptArgs) -> Result<(), anyhow::Error> {
    let mut driver = Driver::new()?;
    let mut out = stdout().lock();
    driver.run(&args.scripts, &mut out)?;
    Ok(())
}
