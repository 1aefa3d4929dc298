use crate::error::CalendarError;
use crate::exceptions::{parse_date, ExceptionSet, Exceptions};
use crate::model::{Roster, RunContext};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Document de configuration : `holidays` (date → libellé) et `working_days`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExceptionConfig {
    pub holidays: BTreeMap<String, String>,
    pub working_days: Vec<String>,
}

impl ExceptionConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, CalendarError> {
        serde_json::from_str(raw)
            .map_err(|err| CalendarError::Configuration(format!("parsing configuration: {err}")))
    }

    /// Lie chaque date au mois du contexte et construit les deux ensembles.
    pub fn resolve(&self, ctx: &RunContext) -> Result<Exceptions, CalendarError> {
        let mut holidays = ExceptionSet::new();
        for (token, label) in &self.holidays {
            let date = parse_date(token, ctx)?;
            if !holidays.insert(date, label.trim()) {
                debug!(%date, token = token.as_str(), "duplicate holiday ignored");
            }
        }

        let mut working_days = ExceptionSet::new();
        for token in &self.working_days {
            working_days.insert(parse_date(token, ctx)?, "");
        }

        Ok(Exceptions::new(holidays, working_days))
    }
}

/// Une ligne par nom ; fins de ligne et lignes vides ignorées.
pub fn parse_names(raw: &str) -> Result<Roster, CalendarError> {
    Roster::new(
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Roster, CalendarError> {
    let path = path.as_ref();
    let raw = read_to_string(path)?;
    let roster = parse_names(&raw).map_err(|err| match err {
        CalendarError::Configuration(msg) => {
            CalendarError::Configuration(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;
    debug!(path = %path.display(), names = roster.len(), "loaded roster");
    Ok(roster)
}

pub fn load_exceptions<P: AsRef<Path>>(
    path: P,
    ctx: &RunContext,
) -> Result<Exceptions, CalendarError> {
    let path = path.as_ref();
    let raw = read_to_string(path)?;
    let config = ExceptionConfig::from_json_str(&raw).map_err(|err| match err {
        CalendarError::Configuration(msg) => {
            CalendarError::Configuration(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;
    let exceptions = config.resolve(ctx)?;
    debug!(
        path = %path.display(),
        holidays = exceptions.holidays.len(),
        working_days = exceptions.working_days.len(),
        "loaded exceptions"
    );
    Ok(exceptions)
}

fn read_to_string(path: &Path) -> Result<String, CalendarError> {
    fs::read_to_string(path)
        .map_err(|err| CalendarError::Configuration(format!("reading {}: {err}", path.display())))
}
