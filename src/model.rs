use crate::error::CalendarError;
use crate::locale::Locale;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Liste ordonnée des noms à faire tourner (jamais vide).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Construit un roster ; une liste vide est une erreur de configuration.
    pub fn new<I, S>(names: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CalendarError::Configuration(
                "roster must contain at least one name".to_string(),
            ));
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Nom à l'index donné, ramené modulo la longueur.
    pub fn name_at(&self, index: usize) -> &str {
        &self.names[index % self.names.len()]
    }

    /// Première occurrence d'un nom.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Mois à générer, relatif à la date de référence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthChoice {
    #[default]
    Current,
    Next,
}

impl MonthChoice {
    /// Renvoie (année, mois) du mois cible.
    pub fn resolve(self, today: NaiveDate) -> Result<(i32, u32), CalendarError> {
        let first = today
            .with_day(1)
            .ok_or_else(|| CalendarError::invalid_parameter("today", today.to_string()))?;
        let target = match self {
            MonthChoice::Current => first,
            MonthChoice::Next => first
                .checked_add_months(Months::new(1))
                .ok_or_else(|| CalendarError::invalid_parameter("today", today.to_string()))?,
        };
        Ok((target.year(), target.month()))
    }
}

impl FromStr for MonthChoice {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(MonthChoice::Current),
            "next" => Ok(MonthChoice::Next),
            _ => Err(CalendarError::invalid_parameter("month", s)),
        }
    }
}

/// Statut d'une case annotée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Normal,
    Holiday,
}

impl DayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DayStatus::Normal => "normal",
            DayStatus::Holiday => "holiday",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paramètres immuables d'une exécution : mois cible, locale, titre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    first_day: NaiveDate,
    locale: Locale,
    title: String,
}

impl RunContext {
    /// Valide que (year, month) désigne un mois réel.
    pub fn new<T: Into<String>>(
        year: i32,
        month: u32,
        locale: Locale,
        title: T,
    ) -> Result<Self, CalendarError> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            CalendarError::invalid_parameter("month", format!("{year}-{month:02}"))
        })?;
        Ok(Self {
            first_day,
            locale,
            title: title.into(),
        })
    }

    /// Contexte pour le mois courant ou suivant de `today`.
    pub fn for_choice<T: Into<String>>(
        today: NaiveDate,
        choice: MonthChoice,
        locale: Locale,
        title: T,
    ) -> Result<Self, CalendarError> {
        let (year, month) = choice.resolve(today)?;
        Self::new(year, month, locale, title)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Nombre de jours du mois cible.
    pub fn days_in_month(&self) -> u32 {
        let start = self.first_day;
        start
            .checked_add_months(Months::new(1))
            .map(|end| end.signed_duration_since(start).num_days() as u32)
            .unwrap_or(31)
    }
}
