use anyhow::Context;
use bootstrapify_core::{input_prompt_active, InputError};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;

mod bootstrap;
mod cli;

#[cfg(test)]
mod test_cancel_signals;

use cli::Cli;

fn main() {
    // A SIGINT while a prompt is waiting for input is a user
    // cancellation: report it and exit cleanly without touching files.
    // Once the run is past the prompts, behave like any interrupted tool.
    ctrlc::set_handler(|| {
        if input_prompt_active() {
            eprintln!("\nOperation cancelled.");
            process::exit(0);
        }
        process::exit(130);
    })
    .expect("Error setting SIGINT handler");

    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let result = bootstrap::handle_bootstrap(
        cli.project_name,
        cli.github_username,
        cli.output.into(),
        use_color,
    );

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");

            // Empty inputs are validation failures; everything else is
            // an unexpected I/O failure.
            let exit_code = if e.downcast_ref::<InputError>().is_some() {
                1
            } else {
                2
            };

            process::exit(exit_code);
        },
    }
}
