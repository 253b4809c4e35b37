use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::filter::{Filter, ParseFilterError};
use super::item::ItemId;

/// A discrete user action; one variant per store command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Add(String),
    Remove(ItemId),
    Toggle(ItemId),
    Rename(ItemId, String),
    SetFilter(Filter),
    ClearCompleted,
    /// Set every item's `completed` flag to the given value
    ToggleAll(bool),
}

/// Error type for the text form of intents
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentParseError {
    #[error("empty intent")]
    Empty,
    #[error("unknown intent '{0}'")]
    UnknownVerb(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid item id '{0}'")]
    InvalidId(String),
    #[error("expected true or false, got '{0}'")]
    InvalidBool(String),
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterError),
    #[error("'{0}' takes no argument")]
    UnexpectedArgument(&'static str),
}

impl Intent {
    /// The verb used in the text form
    pub fn verb(&self) -> &'static str {
        match self {
            Intent::Add(_) => "add",
            Intent::Remove(_) => "remove",
            Intent::Toggle(_) => "toggle",
            Intent::Rename(..) => "rename",
            Intent::SetFilter(_) => "filter",
            Intent::ClearCompleted => "clear-completed",
            Intent::ToggleAll(_) => "toggle-all",
        }
    }
}

fn parse_id(s: &str) -> Result<ItemId, IntentParseError> {
    s.trim()
        .parse()
        .map_err(|_| IntentParseError::InvalidId(s.trim().to_string()))
}

fn required<'a>(arg: Option<&'a str>, verb: &'static str) -> Result<&'a str, IntentParseError> {
    match arg {
        Some(a) if !a.trim().is_empty() => Ok(a),
        _ => Err(IntentParseError::MissingArgument(verb)),
    }
}

/// Parses the line-oriented text form: `<verb> [args]`.
///
/// `add` and `rename` keep their text argument as written after the single
/// separating space, blank text included. Trimming happens in the store.
impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return Err(IntentParseError::Empty);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (line.trim_end(), None),
        };

        match verb {
            "add" => Ok(Intent::Add(rest.unwrap_or_default().to_string())),
            "remove" => Ok(Intent::Remove(parse_id(required(rest, "remove")?)?)),
            "toggle" => Ok(Intent::Toggle(parse_id(required(rest, "toggle")?)?)),
            "rename" => {
                let rest = required(rest, "rename")?.trim_start();
                let (id, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, text),
                    None => (rest, ""),
                };
                Ok(Intent::Rename(parse_id(id)?, text.to_string()))
            }
            "filter" => Ok(Intent::SetFilter(required(rest, "filter")?.parse()?)),
            "clear-completed" => match rest {
                Some(r) if !r.trim().is_empty() => {
                    Err(IntentParseError::UnexpectedArgument("clear-completed"))
                }
                _ => Ok(Intent::ClearCompleted),
            },
            "toggle-all" => {
                let arg = required(rest, "toggle-all")?.trim();
                match arg {
                    "true" => Ok(Intent::ToggleAll(true)),
                    "false" => Ok(Intent::ToggleAll(false)),
                    other => Err(IntentParseError::InvalidBool(other.to_string())),
                }
            }
            other => Err(IntentParseError::UnknownVerb(other.to_string())),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Add(text) => write!(f, "add {}", text),
            Intent::Remove(id) | Intent::Toggle(id) => write!(f, "{} {}", self.verb(), id),
            Intent::Rename(id, text) => write!(f, "rename {} {}", id, text),
            Intent::SetFilter(filter) => write!(f, "filter {}", filter.label().to_lowercase()),
            Intent::ClearCompleted => f.write_str("clear-completed"),
            Intent::ToggleAll(value) => write!(f, "toggle-all {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_each_verb() {
        assert_eq!("add Buy milk".parse::<Intent>(), Ok(Intent::Add("Buy milk".into())));
        assert_eq!("remove 3".parse::<Intent>(), Ok(Intent::Remove(3)));
        assert_eq!("toggle 0".parse::<Intent>(), Ok(Intent::Toggle(0)));
        assert_eq!(
            "rename 2 Walk the dog".parse::<Intent>(),
            Ok(Intent::Rename(2, "Walk the dog".into()))
        );
        assert_eq!(
            "filter completed".parse::<Intent>(),
            Ok(Intent::SetFilter(Filter::Completed))
        );
        assert_eq!("clear-completed".parse::<Intent>(), Ok(Intent::ClearCompleted));
        assert_eq!("toggle-all false".parse::<Intent>(), Ok(Intent::ToggleAll(false)));
    }

    #[test]
    fn add_keeps_text_untrimmed() {
        assert_eq!(
            "add   spaced  ".parse::<Intent>(),
            Ok(Intent::Add("  spaced  ".into()))
        );
    }

    #[test]
    fn rename_without_text_renames_to_empty() {
        assert_eq!("rename 4".parse::<Intent>(), Ok(Intent::Rename(4, String::new())));
    }

    #[test]
    fn add_with_blank_text_reaches_the_store() {
        assert_eq!("add    ".parse::<Intent>(), Ok(Intent::Add("   ".into())));
        assert_eq!("add".parse::<Intent>(), Ok(Intent::Add(String::new())));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Intent>(), Err(IntentParseError::Empty));
        assert_eq!(
            "jump 3".parse::<Intent>(),
            Err(IntentParseError::UnknownVerb("jump".into()))
        );
        assert_eq!(
            "toggle x".parse::<Intent>(),
            Err(IntentParseError::InvalidId("x".into()))
        );
        assert_eq!(
            "remove".parse::<Intent>(),
            Err(IntentParseError::MissingArgument("remove"))
        );
        assert_eq!(
            "toggle-all yes".parse::<Intent>(),
            Err(IntentParseError::InvalidBool("yes".into()))
        );
        assert!(matches!(
            "filter done".parse::<Intent>(),
            Err(IntentParseError::InvalidFilter(_))
        ));
        assert_eq!(
            "clear-completed now".parse::<Intent>(),
            Err(IntentParseError::UnexpectedArgument("clear-completed"))
        );
    }

    #[test]
    fn display_matches_text_form() {
        let intents = [
            Intent::Add("Buy milk".into()),
            Intent::Remove(1),
            Intent::Rename(2, "x y".into()),
            Intent::SetFilter(Filter::Active),
            Intent::ClearCompleted,
            Intent::ToggleAll(true),
        ];
        for intent in intents {
            assert_eq!(intent.to_string().parse::<Intent>(), Ok(intent));
        }
    }
}
