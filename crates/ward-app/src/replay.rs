//! Key script replay through a live shortcut session.
//!
//! Script lines:
//!
//! ```text
//! # comment
//! g               keydown on the page
//! ctrl+k          keydown with modifiers
//! input e         keydown inside a text input
//! sleep 2500      wait, in milliseconds
//! palette         synthetic "open command palette" event
//! command <name>  synthetic named action
//! ```

use std::path::Path;
use std::time::Duration;

use tokio::sync::mpsc;
use ward_common::keymap::{parse_keybind, KeyBind, Modifier};
use ward_common::{Event, EventBus, EventTarget, KeyEvent, Modifiers, WardError};
use ward_config::WardConfig;
use ward_input::{HandlerTable, ShortcutDispatcher, ShortcutSession, ShortcutSet};

use crate::cli::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(KeyEvent),
    Sleep(Duration),
    Palette,
    Command(String),
}

pub fn parse_script(script: &str) -> Result<Vec<Step>, WardError> {
    let mut steps = Vec::new();

    for (i, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = parse_step(line)
            .map_err(|e| WardError::Other(format!("line {}: {e}", i + 1)))?;
        steps.push(step);
    }

    Ok(steps)
}

fn parse_step(line: &str) -> Result<Step, WardError> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "palette" => Ok(Step::Palette),
        "command" if !rest.is_empty() => Ok(Step::Command(rest.to_string())),
        "sleep" => {
            let ms = rest
                .parse::<u64>()
                .map_err(|_| WardError::Other(format!("invalid sleep duration '{rest}'")))?;
            Ok(Step::Sleep(Duration::from_millis(ms)))
        }
        "input" if !rest.is_empty() => {
            Ok(Step::Key(key_event(rest)?.in_target(EventTarget::TextInput)))
        }
        _ => Ok(Step::Key(key_event(line)?)),
    }
}

fn key_event(s: &str) -> Result<KeyEvent, WardError> {
    let kb: KeyBind = parse_keybind(s)?;
    let mut modifiers = Modifiers::NONE;
    for m in &kb.modifiers {
        match m {
            Modifier::Ctrl => modifiers.ctrl = true,
            Modifier::Alt => modifiers.alt = true,
            Modifier::Shift => modifiers.shift = true,
            Modifier::Meta => modifiers.meta = true,
        }
    }
    Ok(KeyEvent::new(kb.key).with_modifiers(modifiers))
}

/// Run `steps` through a session mounted for `scope`. Returns the actions
/// fired, in order.
pub async fn replay(
    config: &WardConfig,
    scope: &Scope,
    steps: &[Step],
) -> Result<Vec<String>, WardError> {
    let set = ShortcutSet::from_table(&config.shortcuts, &scope.contexts());
    let dispatcher = ShortcutDispatcher::new(
        set.clone(),
        &scope.conditions(),
        scope.sub_context.as_deref(),
    )
    .with_timeout(config.dispatch.prefix_timeout());

    let (fired_tx, mut fired_rx) = mpsc::unbounded_channel();
    let mut handlers = HandlerTable::new();
    for shortcut in set.iter() {
        let tx = fired_tx.clone();
        let action = shortcut.action.clone();
        handlers.insert(shortcut.action.clone(), move || {
            let _ = tx.send(action.clone());
        });
    }
    drop(fired_tx);

    let bus = EventBus::new(steps.len().max(64) + 1);
    let session = ShortcutSession::mount(&bus, dispatcher, handlers);

    for step in steps {
        match step {
            Step::Key(event) => {
                bus.publish(Event::KeyDown(event.clone()));
            }
            Step::Sleep(duration) => tokio::time::sleep(*duration).await,
            Step::Palette => {
                bus.publish(Event::OpenCommandPalette);
            }
            Step::Command(action) => {
                bus.publish(Event::Command(action.clone()));
            }
        }
    }

    bus.publish(Event::Shutdown);
    session.join().await;

    let mut fired = Vec::new();
    while let Some(action) = fired_rx.recv().await {
        fired.push(action);
    }
    Ok(fired)
}

/// Read, parse and replay a script file.
pub async fn replay_file(
    config: &WardConfig,
    scope: &Scope,
    path: &Path,
) -> Result<Vec<String>, WardError> {
    let script = std::fs::read_to_string(path)?;
    let steps = parse_script(&script)?;
    tracing::info!(steps = steps.len(), "replaying {}", path.display());
    replay(config, scope, &steps).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_config::condition::CAN_EDIT;
    use ward_config::ShortcutContext;

    fn scope(contexts: &[ShortcutContext], flags: &[(&str, bool)]) -> Scope {
        Scope {
            contexts: contexts.to_vec(),
            flags: flags.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
            sub_context: None,
        }
    }

    #[test]
    fn parses_steps() {
        let steps = parse_script(
            "# navigate\n\
             g\n\
             ctrl+k\n\
             input e\n\
             sleep 250\n\
             palette\n\
             command goto-home\n",
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                Step::Key(KeyEvent::new("g")),
                Step::Key(KeyEvent::new("k").with_ctrl()),
                Step::Key(KeyEvent::new("e").in_target(EventTarget::TextInput)),
                Step::Sleep(Duration::from_millis(250)),
                Step::Palette,
                Step::Command("goto-home".into()),
            ]
        );
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_script("g\nsleep soon\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let err = parse_script("\nhyper+k\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[tokio::test(start_paused = true)]
    async fn replays_keys_through_session() {
        let config = WardConfig::default();
        let scope = scope(
            &[ShortcutContext::Global, ShortcutContext::Patient],
            &[(CAN_EDIT, true)],
        );
        let steps = parse_script("g\np\nctrl+k\ninput e\ne\npalette\ncommand goto-home\n").unwrap();

        let fired = replay(&config, &scope, &steps).await.unwrap();
        assert_eq!(
            fired,
            vec![
                "goto-patients",
                "open-command-palette",
                "edit-patient",
                "open-command-palette",
                "goto-home",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn sleeping_past_timeout_drops_prefix() {
        let config = WardConfig::default();
        let scope = scope(&[ShortcutContext::Global], &[]);
        let steps = parse_script("g\nsleep 2500\np\ng\nsleep 500\nh\n").unwrap();

        let fired = replay(&config, &scope, &steps).await.unwrap();
        assert_eq!(fired, vec!["goto-home"]);
    }
}
