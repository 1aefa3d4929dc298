use super::grid::{CalendarGrid, DayCell, GridRow};
use crate::error::CalendarError;
use crate::exceptions::{DayClass, Exceptions};
use crate::model::{DayStatus, Roster, RunContext};
use crate::rotation::{Rotation, RosterCursor, MAX_DRAWS_PER_MONTH};
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Jour réel annoté d'un nom ou d'un libellé d'exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedCell {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub day_label: String,
    pub label: String,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotatedSlot {
    NoDay(Weekday),
    Day(AnnotatedCell),
}

impl AnnotatedSlot {
    pub fn weekday(&self) -> Weekday {
        match self {
            AnnotatedSlot::NoDay(wd) => *wd,
            AnnotatedSlot::Day(cell) => cell.weekday,
        }
    }

    pub fn cell(&self) -> Option<&AnnotatedCell> {
        match self {
            AnnotatedSlot::NoDay(_) => None,
            AnnotatedSlot::Day(cell) => Some(cell),
        }
    }
}

/// Grille finale, sans colonne du dimanche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedGrid {
    pub header: String,
    pub weekdays: Vec<(Weekday, String)>,
    pub weeks: Vec<Vec<AnnotatedSlot>>,
    /// Nombre de noms tirés du roster.
    pub names_drawn: usize,
    /// Curseur pour le mois suivant.
    pub cursor: RosterCursor,
    pub last_name: Option<String>,
}

impl AnnotatedGrid {
    /// Jours réels dans l'ordre du calendrier.
    pub fn cells(&self) -> impl Iterator<Item = &AnnotatedCell> {
        self.weeks.iter().flatten().filter_map(AnnotatedSlot::cell)
    }

    pub fn cell(&self, day: u32) -> Option<&AnnotatedCell> {
        self.cells().find(|c| c.date.day() == day)
    }
}

/// Annote la grille : un nom par jour normal, le libellé sinon.
///
/// Le curseur n'avance que pour les jours normaux, dans l'ordre croissant.
pub fn annotate(
    grid: &CalendarGrid,
    roster: &Roster,
    cursor: RosterCursor,
    exceptions: &Exceptions,
    ctx: &RunContext,
) -> Result<AnnotatedGrid, CalendarError> {
    if grid.year != ctx.year() || grid.month != ctx.month() {
        return Err(CalendarError::invalid_parameter(
            "grid",
            format!("{}-{:02}", grid.year, grid.month),
        ));
    }

    let limit = (ctx.days_in_month() as usize).min(MAX_DRAWS_PER_MONTH);
    let mut names = Rotation::new(roster, cursor, limit);
    let mut last_name: Option<&str> = None;
    let mut previous_day = 0u32;
    let mut holidays = 0usize;

    let mut header = String::new();
    let mut weekdays = Vec::new();
    let mut weeks = Vec::new();

    for row in &grid.rows {
        match row {
            GridRow::Header(_) => {
                header = ctx
                    .locale()
                    .titled_header(ctx.title(), ctx.year(), ctx.month());
            }
            GridRow::Weekdays(names_row) => {
                weekdays = names_row
                    .iter()
                    .filter(|(wd, _)| *wd != Weekday::Sun)
                    .cloned()
                    .collect();
            }
            GridRow::Week(cells) => {
                let mut week = Vec::with_capacity(6);
                for cell in cells.iter().filter(|c| c.weekday != Weekday::Sun) {
                    let day = match cell.day {
                        DayCell::NoDay => {
                            week.push(AnnotatedSlot::NoDay(cell.weekday));
                            continue;
                        }
                        DayCell::Day(day) => day,
                    };
                    if day <= previous_day {
                        return Err(CalendarError::MalformedGrid(format!(
                            "day {day} follows day {previous_day}"
                        )));
                    }
                    previous_day = day;

                    let date = NaiveDate::from_ymd_opt(ctx.year(), ctx.month(), day)
                        .ok_or_else(|| {
                            CalendarError::MalformedGrid(format!(
                                "day {day} outside {}-{:02}",
                                ctx.year(),
                                ctx.month()
                            ))
                        })?;

                    let (label, status) = match exceptions.classify(date) {
                        DayClass::Holiday(label) => {
                            holidays += 1;
                            (label.to_string(), DayStatus::Holiday)
                        }
                        DayClass::SaturdayOff => (String::new(), DayStatus::Holiday),
                        DayClass::Normal => {
                            let name = names.next().ok_or_else(|| {
                                CalendarError::MalformedGrid(format!(
                                    "more than {limit} working days"
                                ))
                            })?;
                            last_name = Some(name);
                            (name.to_string(), DayStatus::Normal)
                        }
                    };

                    week.push(AnnotatedSlot::Day(AnnotatedCell {
                        date,
                        weekday: cell.weekday,
                        day_label: day.to_string(),
                        label,
                        status,
                    }));
                }
                // une semaine réduite au seul dimanche disparaît
                if week.iter().any(|slot| slot.cell().is_some()) {
                    weeks.push(week);
                }
            }
        }
    }

    debug!(
        year = ctx.year(),
        month = ctx.month(),
        drawn = names.drawn(),
        holidays,
        "annotated calendar grid"
    );

    Ok(AnnotatedGrid {
        header,
        weekdays,
        weeks,
        names_drawn: names.drawn(),
        cursor: names.cursor(),
        last_name: last_name.map(str::to_string),
    })
}
