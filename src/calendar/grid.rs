use crate::model::RunContext;
use chrono::{Datelike, Weekday};

/// Colonnes du calendrier, lundi en premier.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Case du calendrier : bourrage hors mois ou jour réel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    NoDay,
    Day(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub weekday: Weekday,
    pub day: DayCell,
}

/// Ligne du tableau mensuel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridRow {
    /// Ligne à une seule case (libellé du mois).
    Header(String),
    Weekdays(Vec<(Weekday, String)>),
    Week(Vec<GridCell>),
}

/// Grille d'un mois, déjà localisée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<GridRow>,
}

impl CalendarGrid {
    /// Lignes de semaines uniquement.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.rows.iter().filter_map(|row| match row {
            GridRow::Week(cells) => Some(cells.as_slice()),
            _ => None,
        })
    }
}

/// Construit la grille du mois du contexte : en-tête, jours de la semaine, semaines.
pub fn month_grid(ctx: &RunContext) -> CalendarGrid {
    let locale = ctx.locale();
    let first = ctx.first_day();
    let days = ctx.days_in_month();
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut cells: Vec<DayCell> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(DayCell::NoDay).take(lead));
    cells.extend((1..=days).map(DayCell::Day));
    while cells.len() % WEEK.len() != 0 {
        cells.push(DayCell::NoDay);
    }

    let mut rows = Vec::with_capacity(2 + cells.len() / WEEK.len());
    rows.push(GridRow::Header(locale.month_label(ctx.year(), ctx.month())));
    rows.push(GridRow::Weekdays(
        WEEK.iter()
            .map(|wd| (*wd, locale.weekday_abbr(*wd).to_string()))
            .collect(),
    ));
    for chunk in cells.chunks(WEEK.len()) {
        let week = chunk
            .iter()
            .zip(WEEK)
            .map(|(day, weekday)| GridCell { weekday, day: *day })
            .collect();
        rows.push(GridRow::Week(week));
    }

    CalendarGrid {
        year: ctx.year(),
        month: ctx.month(),
        rows,
    }
}
