use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::info;

use crate::cli::commands::ReplayArgs;
use crate::cli::output::{StateJson, format_state_text};
use crate::model::{Intent, IntentParseError};
use crate::ops::Store;

/// Error type for the replay command
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not read stdin: {0}")]
    StdinError(#[source] io::Error),
    #[error("line {line}: {source}")]
    ParseError {
        line: usize,
        source: IntentParseError,
    },
    #[error("could not encode json: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse the text form of a script into intents.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Intent>, ReplayError> {
    let mut intents = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let intent = line.parse::<Intent>().map_err(|e| ReplayError::ParseError {
            line: idx + 1,
            source: e,
        })?;
        intents.push(intent);
    }
    Ok(intents)
}

/// Run a script against a fresh store seeded with the starting list
pub fn replay(script: &str) -> Result<Store, ReplayError> {
    let intents = parse_script(script)?;
    let mut store = Store::default();
    let mut changed = 0usize;
    for intent in intents.iter().cloned() {
        if store.dispatch(intent) {
            changed += 1;
        }
    }
    info!(intents = intents.len(), changed, "replay finished");
    Ok(store)
}

pub fn cmd_replay(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let script = match &args.file {
        Some(path) => fs::read_to_string(path).map_err(|e| ReplayError::ReadError {
            path: path.clone(),
            source: e,
        })?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(ReplayError::StdinError)?;
            buf
        }
    };

    let store = replay(&script)?;
    if args.json {
        let json = serde_json::to_string_pretty(&StateJson::new(store.state(), args.visible))
            .map_err(ReplayError::from)?;
        println!("{}", json);
    } else {
        print!("{}", format_state_text(store.state(), args.visible));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filter, Item};
    use pretty_assertions::assert_eq;

    #[test]
    fn script_skips_comments_and_blank_lines() {
        let intents = parse_script("# setup\n\nadd Buy milk\n   \n  # indented comment\ntoggle 3\n").unwrap();
        assert_eq!(
            intents,
            vec![Intent::Add("Buy milk".into()), Intent::Toggle(3)]
        );
    }

    #[test]
    fn parse_error_reports_line_number() {
        let err = parse_script("add ok\n\njump 1\n").unwrap_err();
        assert!(matches!(err, ReplayError::ParseError { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: unknown intent 'jump'");
    }

    #[test]
    fn replay_applies_in_order() {
        let store = replay("add Buy milk\ntoggle 3\nremove 0\nfilter completed\n").unwrap();
        let state = store.state();
        assert_eq!(state.active_filter, Filter::Completed);
        let ids: Vec<u64> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(state.find(3).is_some_and(|i| i.completed));
    }

    #[test]
    fn replay_of_empty_script_is_the_seed() {
        let store = replay("").unwrap();
        assert_eq!(store.state(), &crate::model::AppState::seed());
    }

    #[test]
    fn replay_blank_add_is_ignored() {
        let store = replay("add\nadd    \n").unwrap();
        assert_eq!(store.state().items.len(), 3);
    }

    #[test]
    fn replay_rename_is_verbatim() {
        let store = replay("rename 0   padded \n").unwrap();
        assert_eq!(
            store.state().items[0],
            Item {
                id: 0,
                name: "  padded ".into(),
                completed: false
            }
        );
    }
}
