use clap::{Parser, Subcommand};
use dotpage::config;
use dotpage::events::Command;
use dotpage::gui::app::AppModel;
use dotpage::style::Preset;
use dotpage::sys::{client, runtime};
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "dotpage", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pages (overrides the config file)
    #[arg(short = 'n', long)]
    items: Option<usize>,

    /// Style preset: default, minimal or dark (overrides the config file)
    #[arg(short, long)]
    preset: Option<Preset>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Move a running demo to the next page
    Next,
    /// Move a running demo to the previous page
    Prev,
    /// Jump to the first page
    First,
    /// Jump to the last page
    Last,
    /// Jump to a page (zero-based)
    Goto { index: i64 },
    /// Write the default config file if missing and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Next) => client::send_command(Command::Next),
        Some(Commands::Prev) => client::send_command(Command::Previous),
        Some(Commands::First) => client::send_command(Command::First),
        Some(Commands::Last) => client::send_command(Command::Last),
        Some(Commands::Goto { index }) => client::send_command(Command::Goto(index)),
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => {
            run_demo(cli.items, cli.preset);
            Ok(())
        }
    }
}

fn run_demo(items: Option<usize>, preset: Option<Preset>) {
    let mut config = config::load_or_default();
    if let Some(items) = items {
        config.total_items = items;
    }
    if let Some(preset) = preset {
        config.preset = preset;
    }

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.dotpage.demo").with_args(Vec::new());

    app.run::<AppModel>((config, rx));
}
