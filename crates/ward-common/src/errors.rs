use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    #[error("empty key string")]
    Empty,

    #[error("unrecognized modifier: {0}")]
    UnknownModifier(String),

    #[error("key string has no key component: {0}")]
    MissingKey(String),

    #[error("key sequence '{0}' has more than two keys")]
    TooManyTokens(String),

    #[error("prefix sequence '{0}' cannot use modifiers")]
    ModifiedSequence(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    #[error("unexpected token '{token}' at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("expression nested more than {0} levels deep")]
    TooDeep(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum WardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Keymap(#[from] KeymapError),

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
