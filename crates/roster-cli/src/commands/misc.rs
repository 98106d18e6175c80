use clap::CommandFactory;
use clap_complete::generate;

use roster_core::VERSION;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::ui::theme::{styled, styles};

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "roster", &mut std::io::stdout());
    Ok(())
}

const QUICKSTART: &[(&str, &str)] = &[
    ("roster init", "Write a config file and create the data directory"),
    ("roster add", "Add a person (prompts for missing fields)"),
    ("roster list", "Show everyone"),
    ("roster search <TERM>", "Find people by name, email, phone or place"),
    ("roster delete <ID>", "Remove a person"),
    ("roster regions", "Known states and cities"),
];

pub fn print_quickstart(ctx: &AppContext) {
    let ui_ctx = ctx.ui_context(false, None);
    let title = styled(&format!("Roster v{}", VERSION), styles::bold(), ui_ctx.color);
    println!("{}", title);
    println!();
    println!("Quickstart:");
    for (command, summary) in QUICKSTART {
        println!("  {:<22} {}", command, styled(summary, styles::dim(), ui_ctx.color));
    }
    println!();
    println!("Run `roster --help` for all options.");
}
