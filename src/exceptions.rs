use crate::error::CalendarError;
use crate::model::RunContext;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use tracing::debug;

/// Ensemble de dates d'exception, chacune avec un libellé (éventuellement vide).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    entries: BTreeMap<NaiveDate, String>,
}

impl ExceptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère si la date est absente ; la première écriture gagne.
    pub fn insert<S: Into<String>>(&mut self, date: NaiveDate, label: S) -> bool {
        if self.entries.contains_key(&date) {
            return false;
        }
        self.entries.insert(date, label.into());
        true
    }

    /// Fusionne des dates d'override sans jamais écraser une entrée existante.
    ///
    /// Renvoie le nombre de dates effectivement ajoutées.
    pub fn merge_missing<I>(&mut self, dates: I) -> usize
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates
            .into_iter()
            .filter(|date| self.insert(*date, String::new()))
            .count()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn label(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.entries.iter().map(|(d, l)| (*d, l.as_str()))
    }
}

impl FromIterator<(NaiveDate, String)> for ExceptionSet {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, String)>>(iter: T) -> Self {
        let mut set = ExceptionSet::new();
        for (date, label) in iter {
            set.insert(date, label);
        }
        set
    }
}

/// Classement d'une date du calendrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass<'a> {
    Normal,
    Holiday(&'a str),
    SaturdayOff,
}

/// Jours fériés et samedis travaillés d'une exécution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exceptions {
    pub holidays: ExceptionSet,
    pub working_days: ExceptionSet,
}

impl Exceptions {
    pub fn new(holidays: ExceptionSet, working_days: ExceptionSet) -> Self {
        Self {
            holidays,
            working_days,
        }
    }

    /// Férié d'abord, puis samedi non travaillé, sinon jour normal.
    pub fn classify(&self, date: NaiveDate) -> DayClass<'_> {
        if let Some(label) = self.holidays.label(date) {
            return DayClass::Holiday(label);
        }
        if date.weekday() == Weekday::Sat && !self.working_days.contains(date) {
            return DayClass::SaturdayOff;
        }
        DayClass::Normal
    }

    /// Ajoute les overrides de la ligne de commande ; la configuration garde la priorité.
    pub fn merge_overrides(&mut self, days_to_skip: &[NaiveDate], saturdays_to_include: &[NaiveDate]) {
        let skipped = self.holidays.merge_missing(days_to_skip.iter().copied());
        let included = self
            .working_days
            .merge_missing(saturdays_to_include.iter().copied());
        debug!(
            skipped,
            included,
            ignored = days_to_skip.len() + saturdays_to_include.len() - skipped - included,
            "merged run overrides"
        );
    }
}

/// Parse une date `D`, `M.D` ou `Y.M.D` ; les parties absentes viennent du contexte.
pub fn parse_date(token: &str, ctx: &RunContext) -> Result<NaiveDate, CalendarError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::date_parse(token, "empty date"));
    }
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(CalendarError::date_parse(
            token,
            "expected D, M.D or Y.M.D with numeric parts",
        ));
    }

    let number = |raw: &str| -> Result<u32, CalendarError> {
        raw.parse::<u32>()
            .map_err(|_| CalendarError::date_parse(token, "number out of range"))
    };

    let (year, month, day) = match parts.as_slice() {
        [d] => (ctx.year(), ctx.month(), number(d)?),
        [m, d] => (ctx.year(), number(m)?, number(d)?),
        [y, m, d] => {
            let year = i32::try_from(number(y)?)
                .map_err(|_| CalendarError::date_parse(token, "number out of range"))?;
            (year, number(m)?, number(d)?)
        }
        _ => return Err(CalendarError::date_parse(token, "too many components")),
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CalendarError::date_parse(token, "no such calendar date"))
}

/// Parse une liste séparée par des virgules ; les éléments vides sont ignorés.
pub fn parse_date_list(raw: &str, ctx: &RunContext) -> Result<Vec<NaiveDate>, CalendarError> {
    raw.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| parse_date(item, ctx))
        .collect()
}
