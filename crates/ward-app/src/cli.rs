use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ward_config::{Conditions, ShortcutContext};

/// ward-keys: inspect and exercise Ward keyboard shortcuts.
#[derive(Parser, Debug)]
#[command(name = "ward-keys", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or an EnvFilter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the shortcuts active for the given contexts and conditions.
    List(Scope),
    /// Validate a config file and report duplicate shortcuts.
    Check {
        /// File to validate.
        path: PathBuf,
    },
    /// Feed a key script through a live session and print the actions fired.
    Replay {
        /// Script with one key per line, plus `sleep <ms>`, `input <key>`,
        /// `command <action>` and `palette`.
        script: PathBuf,

        #[command(flatten)]
        scope: Scope,
    },
}

/// Which shortcuts are in play: contexts, condition flags, sub-context.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Scope {
    /// Contexts to merge, in order (global, encounter, patient, facility).
    /// Defaults to all of them.
    #[arg(short, long = "context", value_delimiter = ',')]
    pub contexts: Vec<ShortcutContext>,

    /// Condition flag, as `name=true`, `name=false`, or just `name`.
    #[arg(long = "set", value_name = "NAME[=BOOL]", value_parser = parse_flag)]
    pub flags: Vec<(String, bool)>,

    /// Active sub-context, e.g. `questionnaire`.
    #[arg(long)]
    pub sub_context: Option<String>,
}

impl Scope {
    pub fn contexts(&self) -> Vec<ShortcutContext> {
        if self.contexts.is_empty() {
            ShortcutContext::ALL.to_vec()
        } else {
            self.contexts.clone()
        }
    }

    pub fn conditions(&self) -> Conditions {
        self.flags.iter().cloned().collect()
    }
}

fn parse_flag(s: &str) -> Result<(String, bool), String> {
    let (name, value) = match s.split_once('=') {
        Some((name, value)) => {
            let value = value
                .trim()
                .parse::<bool>()
                .map_err(|_| format!("expected true or false, got '{}'", value.trim()))?;
            (name.trim(), value)
        }
        None => (s.trim(), true),
    };
    if name.is_empty() {
        return Err("condition name is empty".into());
    }
    Ok((name.to_string(), value))
}

pub fn parse() -> Args {
    Args::parse()
}
