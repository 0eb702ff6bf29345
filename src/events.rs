use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Next,
    Previous,
    First,
    Last,
    Goto(i64),
    ConfigReload,
}

/// A line of the control socket protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    Goto(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("goto needs an index")]
    MissingIndex,
    #[error("invalid index '{0}'")]
    InvalidIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        match verb.to_ascii_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "goto" => {
                let arg = words.next().ok_or(CommandError::MissingIndex)?;
                arg.parse()
                    .map(Self::Goto)
                    .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
            }
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
            Self::Goto(i) => write!(f, "goto {i}"),
        }
    }
}

impl From<Command> for AppEvent {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Next => AppEvent::Next,
            Command::Previous => AppEvent::Previous,
            Command::First => AppEvent::First,
            Command::Last => AppEvent::Last,
            Command::Goto(i) => AppEvent::Goto(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cases = vec![
            ("next", Command::Next),
            ("  NEXT  ", Command::Next),
            ("prev", Command::Previous),
            ("previous", Command::Previous),
            ("first", Command::First),
            ("last", Command::Last),
            ("goto 4", Command::Goto(4)),
            ("goto   -1", Command::Goto(-1)),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>().unwrap(), expected, "{line}");
        }
    }

    #[test]
    fn test_command_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("goto".parse::<Command>(), Err(CommandError::MissingIndex));
        assert_eq!(
            "goto three".parse::<Command>(),
            Err(CommandError::InvalidIndex("three".to_string()))
        );
        assert_eq!(
            "show".parse::<Command>(),
            Err(CommandError::Unknown("show".to_string()))
        );
    }

    #[test]
    fn test_display_matches_wire_form() {
        for cmd in [Command::Next, Command::Previous, Command::Goto(7)] {
            assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);
        }
    }
}
