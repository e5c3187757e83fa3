mod commands;
mod config;
mod options;

use std::process;

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Demo(demo_options) => commands::demo(demo_options)?,
        Subcommand::Issue(issue_options) => commands::issue(options.global, issue_options)?,
        Subcommand::Verify(verify_options) => commands::verify(options.global, verify_options)?,
    }

    Ok(())
}
