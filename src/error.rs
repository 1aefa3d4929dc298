use thiserror::Error;

/// Erreurs de la bibliothèque : toutes détectées avant l'écriture de la page.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("unknown name in roster: {0}")]
    UnknownName(String),
    #[error("cannot parse date {token:?}: {reason}")]
    DateParse { token: String, reason: &'static str },
    #[error("invalid value {value:?} for parameter {name}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("malformed calendar grid: {0}")]
    MalformedGrid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalendarError {
    pub(crate) fn date_parse<S: Into<String>>(token: S, reason: &'static str) -> Self {
        Self::DateParse {
            token: token.into(),
            reason,
        }
    }

    pub(crate) fn invalid_parameter<S: Into<String>>(name: &'static str, value: S) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
