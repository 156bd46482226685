use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use nerv_installer::client;
use nerv_installer::config::{self, InstallConfig};
use nerv_installer::error::InstallError;
use nerv_installer::install::Installer;
use nerv_installer::privilege::Privilege;
use nerv_installer::service::Systemctl;

#[derive(Parser)]
#[command(name = "nerv-installer")]
#[command(about = "Install and start the NERV dashboard systemd service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Service name passed to systemctl
    #[arg(long, global = true, default_value = config::SERVICE_NAME)]
    service: String,

    /// Unit file to install
    #[arg(long, global = true, default_value = config::UNIT_FILE)]
    unit_file: PathBuf,

    /// Directory the unit file is copied into
    #[arg(long, global = true, default_value = config::UNIT_DIR)]
    unit_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the unit file into place, then enable and start the service (default)
    Install,
    /// Stop and disable the service and remove its unit file
    Uninstall,
    /// Show service status
    Status,
    /// Restart the service
    Restart,
    /// Show service logs from the journal
    Logs {
        /// Number of lines to show
        #[arg(short = 'n', long, default_value = "20")]
        lines: usize,

        /// Follow log output
        #[arg(short, long)]
        follow: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit code for a failed run. Codes that do not fit in a byte become 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<InstallError>()
        .map(InstallError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

/// No subcommand means install
fn selected_command(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Install)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = InstallConfig {
        service_name: cli.service,
        unit_file: cli.unit_file,
        unit_dir: cli.unit_dir,
    };
    let manager = Systemctl::default();
    let mut stdout = io::stdout();

    match selected_command(cli.command) {
        Commands::Install => {
            Installer::new(config, manager)
                .install(Privilege::current(), &mut stdout)
                .await?;
        }
        Commands::Uninstall => {
            Installer::new(config, manager)
                .uninstall(Privilege::current(), &mut stdout)
                .await?;
        }
        Commands::Status => {
            client::status::run(&manager, &config.service_name).await?;
        }
        Commands::Restart => {
            client::restart::run(&manager, &config.service_name, Privilege::current(), &mut stdout)
                .await?;
        }
        Commands::Logs { lines, follow } => {
            client::logs::run(&config.service_name, lines, follow).await?;
        }
    }

    Ok(())
}
