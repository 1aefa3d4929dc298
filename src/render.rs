use crate::calendar::{AnnotatedGrid, AnnotatedSlot};
use crate::error::CalendarError;
use crate::model::{DayStatus, RunContext};
use chrono::Weekday;
use std::fmt::Write;
use std::str::FromStr;

/// Permet de customiser le rendu de la page (HTML, texte).
pub trait PageRenderer {
    fn render(&self, grid: &AnnotatedGrid, ctx: &RunContext) -> String;
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 1cm; }
table.month { border-collapse: collapse; width: 100%; table-layout: fixed; }
th.month { font-size: 2em; padding: 0.5em; }
th { padding: 0.3em; border-bottom: 2px solid #333; }
td { border: 1px solid #999; height: 4em; vertical-align: top; padding: 0.3em; }
td .day { font-weight: bold; }
td .name { display: block; margin-top: 0.5em; font-size: 1.2em; }
td.holiday { background: #eee; color: #777; }
td.noday { border: none; }
@media print { body { margin: 0; } }
";

/// Page HTML imprimable complète.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlPage;

impl PageRenderer for HtmlPage {
    fn render(&self, grid: &AnnotatedGrid, ctx: &RunContext) -> String {
        let mut out = String::new();
        let columns = grid.weekdays.len().max(1);
        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html lang=\"{}\">", ctx.locale().code());
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, "<meta charset=\"utf-8\">");
        let _ = writeln!(out, "<title>{}</title>", escape_html(&grid.header));
        let _ = writeln!(out, "<style>\n{STYLE}</style>");
        let _ = writeln!(out, "</head>");
        let _ = writeln!(out, "<body>");
        let _ = writeln!(out, "<table class=\"month\">");
        let _ = writeln!(
            out,
            "<tr><th colspan=\"{columns}\" class=\"month\">{}</th></tr>",
            escape_html(&grid.header)
        );
        out.push_str("<tr>");
        for (weekday, name) in &grid.weekdays {
            let _ = write!(
                out,
                "<th class=\"{}\">{}</th>",
                weekday_class(*weekday),
                escape_html(name)
            );
        }
        out.push_str("</tr>\n");
        for week in &grid.weeks {
            out.push_str("<tr>");
            for slot in week {
                match slot {
                    AnnotatedSlot::NoDay(_) => out.push_str("<td class=\"noday\">&nbsp;</td>"),
                    AnnotatedSlot::Day(cell) => {
                        let _ = write!(
                            out,
                            "<td class=\"{} {}\"><span class=\"day\">{}</span><br><span class=\"name\">{}</span></td>",
                            weekday_class(cell.weekday),
                            cell.status,
                            escape_html(&cell.day_label),
                            escape_html(&cell.label)
                        );
                    }
                }
            }
            out.push_str("</tr>\n");
        }
        let _ = writeln!(out, "</table>");
        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");
        out
    }
}

/// Rendu texte brut : une ligne par jour, `*` devant les jours chômés.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPage;

impl PageRenderer for TextPage {
    fn render(&self, grid: &AnnotatedGrid, ctx: &RunContext) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", grid.header);
        for cell in grid.cells() {
            let marker = match cell.status {
                DayStatus::Normal => "",
                DayStatus::Holiday => "* ",
            };
            let line = format!(
                "{:>2} {:<3} {}{}",
                cell.day_label,
                ctx.locale().weekday_abbr(cell.weekday),
                marker,
                cell.label
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }
}

/// Format de sortie choisi en ligne de commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    #[default]
    Html,
    Text,
}

impl PageFormat {
    pub fn renderer(self) -> &'static dyn PageRenderer {
        match self {
            PageFormat::Html => &HtmlPage,
            PageFormat::Text => &TextPage,
        }
    }
}

impl FromStr for PageFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(PageFormat::Html),
            "text" | "txt" => Ok(PageFormat::Text),
            _ => Err(CalendarError::invalid_parameter("format", s)),
        }
    }
}

fn weekday_class(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
