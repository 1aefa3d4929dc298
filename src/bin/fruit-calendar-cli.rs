#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use fruit_calendar::{
    calendar::build_month,
    config::{load_exceptions, load_names},
    exceptions::{parse_date_list, Exceptions},
    output::{FileSink, PageSink, StdoutSink},
    CalendarError, Locale, MonthChoice, PageFormat, RunContext,
};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

const DEFAULT_CONFIG: &str = "calendar.json";

/// Génère un calendrier mensuel imprimable avec un nom par jour ouvré
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Fichier des noms, un par ligne
    #[arg(long, default_value = "names.txt")]
    names: PathBuf,

    /// Configuration JSON (`holidays`, `working_days`) ; `calendar.json` si présent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dernier nom utilisé le mois précédent
    #[arg(long = "last-name")]
    last_name: Option<String>,

    /// `current` ou `next`
    #[arg(long, default_value = "current")]
    month: String,

    /// Jours à sauter, "D,M.D,Y.M.D"
    #[arg(long)]
    skip: Option<String>,

    /// Samedis travaillés, "D,M.D,Y.M.D"
    #[arg(long = "include-saturdays")]
    include_saturdays: Option<String>,

    /// Titre du calendrier
    #[arg(long, default_value = "Fruit Calendar")]
    title: String,

    /// Langue : `en` ou `hu`
    #[arg(long, default_value = "en")]
    locale: String,

    /// `html` ou `text`
    #[arg(long, default_value = "html")]
    format: String,

    /// Date de référence YYYY-MM-DD (aujourd'hui par défaut)
    #[arg(long)]
    today: Option<String>,

    /// Fichier de sortie (sortie standard sinon)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let today = match cli.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            CalendarError::InvalidParameter {
                name: "today",
                value: raw.to_string(),
            }
        })?,
        None => Local::now().date_naive(),
    };
    let choice: MonthChoice = cli.month.parse()?;
    let locale: Locale = cli.locale.parse()?;
    let format: PageFormat = cli.format.parse()?;
    let ctx = RunContext::for_choice(today, choice, locale, cli.title.as_str())?;

    let roster = load_names(&cli.names)?;

    let mut exceptions = match cli.config.as_deref() {
        Some(path) => load_exceptions(path, &ctx)?,
        None if Path::new(DEFAULT_CONFIG).exists() => load_exceptions(DEFAULT_CONFIG, &ctx)?,
        None => Exceptions::default(),
    };
    let skip = parse_date_list(cli.skip.as_deref().unwrap_or(""), &ctx)?;
    let include = parse_date_list(cli.include_saturdays.as_deref().unwrap_or(""), &ctx)?;
    exceptions.merge_overrides(&skip, &include);

    let grid = build_month(&roster, cli.last_name.as_deref(), &exceptions, &ctx)?;
    let page = format.renderer().render(&grid, &ctx);

    match cli.out.as_deref() {
        Some(path) => FileSink::new(path)
            .write_page(&page)
            .with_context(|| format!("writing {}", path.display()))?,
        None => StdoutSink.write_page(&page)?,
    }

    eprintln!(
        "{}-{:02}: {} name(s) drawn, last name: {}",
        ctx.year(),
        ctx.month(),
        grid.names_drawn,
        grid.last_name.as_deref().unwrap_or("-")
    );
    Ok(())
}
