#![forbid(unsafe_code)]
//! Fruit calendar — calendrier mensuel imprimable avec un nom du roster par jour ouvré.
//!
//! - Rotation cyclique déterministe, reprise après le dernier nom du mois précédent.
//! - Jours fériés et samedis travaillés par date exacte.
//! - Dimanche jamais affiché ; samedis classés date par date.
//! - Rendu HTML (ou texte) et écriture atomique.

pub mod calendar;
pub mod config;
pub mod error;
pub mod exceptions;
pub mod locale;
pub mod model;
pub mod output;
pub mod render;
pub mod rotation;

pub use calendar::{annotate, build_month, month_grid, AnnotatedCell, AnnotatedGrid, CalendarGrid};
pub use config::{load_exceptions, load_names, parse_names, ExceptionConfig};
pub use error::CalendarError;
pub use exceptions::{parse_date, parse_date_list, DayClass, ExceptionSet, Exceptions};
pub use locale::Locale;
pub use model::{DayStatus, MonthChoice, Roster, RunContext};
pub use output::{FileSink, PageSink, StdoutSink};
pub use render::{HtmlPage, PageFormat, PageRenderer, TextPage};
pub use rotation::{RosterCursor, Rotation};
