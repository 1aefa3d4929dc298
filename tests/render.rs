#![forbid(unsafe_code)]
use chrono::NaiveDate;
use fruit_calendar::{
    build_month, render::escape_html, ExceptionSet, Exceptions, HtmlPage, Locale, PageFormat,
    PageRenderer, Roster, RunContext, TextPage,
};

fn february() -> (RunContext, Exceptions) {
    let ctx = RunContext::new(2025, 2, Locale::En, "Fruit").unwrap();
    let mut holidays = ExceptionSet::new();
    holidays.insert(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(), "Valentin");
    let mut working = ExceptionSet::new();
    working.insert(NaiveDate::from_ymd_opt(2025, 2, 22).unwrap(), "");
    (ctx, Exceptions::new(holidays, working))
}

#[test]
fn text_page_lists_every_displayed_day() {
    let (ctx, ex) = february();
    let roster = Roster::new(["Anna", "Béla"]).unwrap();
    let grid = build_month(&roster, None, &ex, &ctx).unwrap();
    assert_eq!(grid.names_drawn, 20);

    insta::assert_snapshot!(TextPage.render(&grid, &ctx), @r"
    Fruit February 2025
     1 Sat *
     3 Mon Anna
     4 Tue Béla
     5 Wed Anna
     6 Thu Béla
     7 Fri Anna
     8 Sat *
    10 Mon Béla
    11 Tue Anna
    12 Wed Béla
    13 Thu Anna
    14 Fri * Valentin
    15 Sat *
    17 Mon Béla
    18 Tue Anna
    19 Wed Béla
    20 Thu Anna
    21 Fri Béla
    22 Sat Anna
    24 Mon Béla
    25 Tue Anna
    26 Wed Béla
    27 Thu Anna
    28 Fri Béla
    ");
}

#[test]
fn html_page_is_a_complete_escaped_document() {
    let (ctx, ex) = february();
    let roster = Roster::new(["<Tom & Jerry>", "Béla"]).unwrap();
    let grid = build_month(&roster, None, &ex, &ctx).unwrap();
    let html = HtmlPage.render(&grid, &ctx);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("<title>Fruit February 2025</title>"));
    assert!(html.contains("<th colspan=\"6\" class=\"month\">Fruit February 2025</th>"));
    assert!(html.contains("<th class=\"mon\">Mon</th>"));
    assert!(!html.contains("class=\"sun\""));
    assert!(html.contains(
        "<td class=\"mon normal\"><span class=\"day\">3</span><br><span class=\"name\">&lt;Tom &amp; Jerry&gt;</span></td>"
    ));
    assert!(html.contains(
        "<td class=\"fri holiday\"><span class=\"day\">14</span><br><span class=\"name\">Valentin</span></td>"
    ));
    assert!(html.contains(
        "<td class=\"sat holiday\"><span class=\"day\">1</span><br><span class=\"name\"></span></td>"
    ));
    assert!(html.contains("<td class=\"noday\">&nbsp;</td>"));
    assert!(!html.contains("<Tom"));
}

#[test]
fn format_selects_renderer() {
    let (ctx, ex) = february();
    let roster = Roster::new(["Anna"]).unwrap();
    let grid = build_month(&roster, None, &ex, &ctx).unwrap();

    let text: PageFormat = "text".parse().unwrap();
    assert!(text.renderer().render(&grid, &ctx).starts_with("Fruit February 2025\n"));
    let html: PageFormat = "HTML".parse().unwrap();
    assert!(html.renderer().render(&grid, &ctx).starts_with("<!DOCTYPE html>"));
    assert!("pdf".parse::<PageFormat>().is_err());
}

#[test]
fn escaping_covers_attribute_characters() {
    assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
}
