//! Roster CLI - keep a small contact list from the command line
//!
//! This is the command-line interface for Roster. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_add, handle_completions, handle_delete, handle_init, handle_list, handle_regions,
    handle_search, print_quickstart,
};
use crate::errors::{exit_code_for, CliError};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    if let Err(err) = run(&cli) {
        let ui_ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        let hint = err.downcast_ref::<CliError>().and_then(CliError::hint);
        print_error(&ui_ctx, &err.to_string(), hint);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Init(args)) => handle_init(&ctx, args),
        Some(Commands::Add(args)) => handle_add(&ctx, args),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Search(args)) => handle_search(&ctx, args),
        Some(Commands::Delete(args)) => handle_delete(&ctx, args),
        Some(Commands::Regions(args)) => handle_regions(&ctx, args),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => {
            print_quickstart(&ctx);
            Ok(())
        }
    }
}
