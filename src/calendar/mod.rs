mod annotate;
mod grid;

pub use annotate::{annotate, AnnotatedCell, AnnotatedGrid, AnnotatedSlot};
pub use grid::{month_grid, CalendarGrid, DayCell, GridCell, GridRow, WEEK};

use crate::error::CalendarError;
use crate::exceptions::Exceptions;
use crate::model::{Roster, RunContext};
use crate::rotation::RosterCursor;

/// Chaîne complète pour un mois : curseur de départ, grille, annotation.
pub fn build_month(
    roster: &Roster,
    last_name: Option<&str>,
    exceptions: &Exceptions,
    ctx: &RunContext,
) -> Result<AnnotatedGrid, CalendarError> {
    let cursor = RosterCursor::start(roster, last_name)?;
    let grid = month_grid(ctx);
    annotate(&grid, roster, cursor, exceptions, ctx)
}
