use std::fs;
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::host::{SessionHost, ValidityRules};
use crate::io::config_io;
use crate::io::session_io;
use crate::model::Config;
use crate::ops::MruController;
use crate::ops::replay::{self, Step};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => match cli.session {
            Some(session) => crate::tui::run(&session, config),
            None => Err("no session file given (try `br --help`)".into()),
        },
        Some(cmd) => match cmd {
            Commands::Render(args) => cmd_render(args, &config, json),
            Commands::Mru(args) => cmd_mru(args, &config, json),
            Commands::Check(args) => cmd_check(args, &config, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(explicit: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(config_io::load_config(explicit, &cwd)?)
}

fn load_host(session: &Path, config: &Config) -> Result<SessionHost, Box<dyn std::error::Error>> {
    let rules = ValidityRules::from_config(&config.ignore)?;
    let session = session_io::read_session(session)?;
    Ok(session.into_host(rules))
}

fn read_steps(args: &ReplayArgs) -> Result<Vec<Step>, Box<dyn std::error::Error>> {
    let script = match (&args.events, &args.events_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e))?,
        (None, None) => return Ok(Vec::new()),
    };
    Ok(replay::parse_script(&script)?)
}

/// Load a session, seed a controller from it, and apply any scripted events.
fn run_session(
    args: &ReplayArgs,
    config: &Config,
) -> Result<(SessionHost, MruController), Box<dyn std::error::Error>> {
    let steps = read_steps(args)?;
    let mut host = load_host(&args.session, config)?;
    let mut controller = MruController::new(config.ui.show_modified);
    controller.initialise(&host);
    replay::replay(&mut controller, &mut host, &steps);
    tracing::debug!(steps = steps.len(), "replayed session events");
    Ok((host, controller))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_render(args: ReplayArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_host, controller) = run_session(&args, config)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&render_json(controller.render()))?
        );
    } else {
        println!("{}", format_render(controller.render()));
    }
    Ok(())
}

fn cmd_mru(args: ReplayArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_host, controller) = run_session(&args, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&mru_json(&controller))?);
    } else {
        println!("{}", format_mru(&controller));
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let host = load_host(&args.session, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&check_json(&host))?);
    } else {
        println!("{}", format_check(&host));
    }
    Ok(())
}
