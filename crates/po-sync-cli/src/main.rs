use clap::{CommandFactory as _, Parser, Subcommand};
use miette::{IntoDiagnostic as _, Result as MietteResult};
use po_sync_cli::commands::{
    MoArgs, UpdatePosArgs, UpdatePotArgs, run_mo, run_update_pos, run_update_pot,
};
use po_sync_cli::core::CliError;
use po_sync_cli::utils::ui;
use po_sync_toml::PoSyncConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "po-sync")]
#[command(about = "Build gettext catalogs and sync translations between two git clones")]
#[command(version)]
struct Cli {
    /// Path to a po-sync.toml (defaults to ./po-sync.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every tool invocation (overridden by PO_SYNC_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile every <lang>/LC_MESSAGES/<catalog>.po into a .mo file
    Mo(MoArgs),

    /// Regenerate the template in the localization repository and push it if it changed
    UpdatePot(UpdatePotArgs),

    /// Check translation files, copy cleaned copies into the primary repository and push
    UpdatePos(UpdatePosArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    ui::init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return Cli::command().print_help().into_diagnostic();
    };

    let cwd = std::env::current_dir().into_diagnostic()?;
    let config = PoSyncConfig::load(cli.config.as_deref(), &cwd)
        .map_err(|e| miette::Report::new(CliError::from(e)))?;

    let result = match command {
        Commands::Mo(args) => run_mo(args, &config),
        Commands::UpdatePot(args) => run_update_pot(args, &config).map(|_| ()),
        Commands::UpdatePos(args) => run_update_pos(args, &config).map(|_| ()),
    };

    result.map_err(miette::Report::new)
}
