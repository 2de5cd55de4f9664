use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arpa_library::LibraryConfig;
use arpa_paths::ArpaPaths;
use arpa_shell::Shell;

#[derive(Parser)]
#[command(name = "arpa", about = "Arpa music library shell")]
struct Cli {
    /// Library configuration (TOML). Defaults to the one in the config dir, if any.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a file or directory and list the resulting entries
    Import { path: PathBuf },
    /// Show every tag and the artwork of a single file
    Show { file: PathBuf },
    /// Start playing a file and print the artwork the mini pane would show
    Play { file: PathBuf },
    /// Print the navigation sidebar
    Sidebar,
    /// Write the default library configuration to the config dir
    InitConfig {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arpa=info,arpa_shell=info,arpa_library=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Command::InitConfig { force } = cli.command {
        return init_config(force);
    }

    let config = cli.config.or_else(|| match ArpaPaths::new() {
        Ok(paths) => Some(paths.library_config).filter(|p| p.exists()),
        Err(err) => {
            warn!(%err, "application directories unavailable, using defaults");
            None
        }
    });
    let mut shell = Shell::from_config_file(config.as_deref())?;

    match cli.command {
        Command::Import { path } => {
            shell.import_path(&path)?;
            for entry in shell.collection().iter() {
                println!(
                    "{:>5}  {:<7}  {}  [{}]",
                    entry.id(),
                    format!("{:?}", entry.media_type()).to_lowercase(),
                    entry.location().unwrap_or_default(),
                    shell
                        .art_path(entry.id())
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                );
            }
        }
        Command::Show { file } => {
            shell.import_path(&file)?;
            let Some(entry) = shell.collection().iter().next() else {
                bail!("{} is not an importable media file", file.display());
            };
            for (key, value) in entry.tags() {
                println!("{key:>14}: {value}");
            }
            if let Some(art) = shell.art_path(entry.id()) {
                println!("{:>14}: {}", "art", art.display());
            }
        }
        Command::Play { file } => {
            shell.import_path(&file)?;
            let Some(id) = shell.collection().find_by_location(&file) else {
                bail!("{} is not an importable media file", file.display());
            };
            shell.play(id)?;
            match shell.now_playing_art() {
                Some(art) => println!("{}", art.display()),
                None => println!("(no artwork for this media type)"),
            }
        }
        Command::Sidebar => {
            for (depth, label) in shell.sidebar().walk() {
                println!("{}{}", "  ".repeat(depth), label);
            }
        }
        Command::InitConfig { .. } => unreachable!("handled before loading the shell"),
    }

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let paths = ArpaPaths::new()?;
    if paths.library_config.exists() && !force {
        bail!(
            "{} already exists, use --force to overwrite it",
            paths.library_config.display()
        );
    }

    paths.ensure_structure()?;
    LibraryConfig::default().save(&paths.library_config)?;
    println!("{}", paths.library_config.display());
    Ok(())
}
