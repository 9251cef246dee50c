use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use headset_cli::cli::{Cli, Commands};
use headset_cli::commands::{
    OutputOptions, cmd_action, cmd_battery, cmd_config, cmd_devices, cmd_save, select_target,
};
use headset_cli::config::Config;
use headset_core::{Action, ProcessRunner, Troubleshooter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "headset", &mut io::stdout());
        return Ok(());
    }

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load().with_overrides(cli.bridge.clone(), cli.mirror.clone());
    let opts = OutputOptions {
        no_color: cli.no_color || config.no_color || std::env::var_os("NO_COLOR").is_some(),
        quiet: cli.quiet,
    };
    let mut stdout = io::stdout().lock();

    let mut settings = config.tools.clone();
    if let Commands::Logs { lines: Some(n) } = cli.command {
        settings.log_lines = Some(n);
    }
    let mut app = Troubleshooter::new(ProcessRunner::new(), settings);

    match cli.command {
        Commands::Devices => cmd_devices(&mut app, opts, &mut stdout)?,
        Commands::Battery => cmd_battery(&mut app, opts, &mut stdout)?,
        Commands::Reboot { device } => {
            select_target(&mut app, &device)?;
            cmd_action(&mut app, Action::Reboot, opts, &mut stdout)?;
        }
        Commands::Mirror { device } => {
            select_target(&mut app, &device)?;
            cmd_action(&mut app, Action::LaunchMirror, opts, &mut stdout)?;
        }
        Commands::Logs { .. } => cmd_action(&mut app, Action::DisplayLogs, opts, &mut stdout)?,
        Commands::Shell => cmd_action(&mut app, Action::OpenShell, opts, &mut stdout)?,
        Commands::Diag { query, device } => {
            select_target(&mut app, &device)?;
            cmd_action(
                &mut app,
                Action::RunDiagnostic(query.query()),
                opts,
                &mut stdout,
            )?;
        }
        Commands::Wake => cmd_action(&mut app, Action::Wake, opts, &mut stdout)?,
        Commands::Config { action } => {
            return cmd_config(action, &Config::path(), &config, opts.no_color, &mut stdout);
        }
        Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
        #[cfg(feature = "gui")]
        Commands::Gui {
            no_wake,
            no_refresh,
        } => {
            return headset_cli::gui::open(headset_cli::gui::GuiOptions {
                bridge: cli.bridge,
                mirror: cli.mirror,
                no_wake,
                no_refresh,
            });
        }
    }

    if cli.save {
        cmd_save(&mut app, opts, &mut io::stderr())?;
    }

    Ok(())
}
