use std::fmt;

use crate::application::errors::RelayError;

/// Slash commands the relay answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Divider,
    RollFor,
}

impl CommandName {
    pub const ALL: [CommandName; 2] = [CommandName::Divider, CommandName::RollFor];

    /// Resolve a normalized `command` parameter.
    ///
    /// Matching is exact: the leading slash is part of the token and no case
    /// folding or trimming is applied.
    pub fn from_token(token: &str) -> Result<Self, RelayError> {
        Self::ALL
            .into_iter()
            .find(|name| name.token() == token)
            .ok_or_else(|| RelayError::UnknownCommand(token.to_string()))
    }

    pub fn token(&self) -> &'static str {
        match self {
            CommandName::Divider => "/divider",
            CommandName::RollFor => "/rollfor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandName::Divider => "Post a divider line to the channel",
            CommandName::RollFor => "Ask the channel to roll for something",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandName::Divider => "/divider",
            CommandName::RollFor => "/rollfor [subject]",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_roundtrips_every_command() {
        for name in CommandName::ALL {
            assert_eq!(CommandName::from_token(name.token()).unwrap(), name);
        }
    }

    #[test]
    fn test_from_token_is_exact() {
        for token in ["divider", "/Divider", " /divider", "/divider ", "/roll"] {
            match CommandName::from_token(token) {
                Err(RelayError::UnknownCommand(t)) => assert_eq!(t, token),
                other => panic!("{:?} should be unknown, got {:?}", token, other),
            }
        }
    }
}
