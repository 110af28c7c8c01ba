mod app;
mod help;
mod moon;
use crate::app::App;
use crate::moon::Phoon;
use anyhow::Context;
use calgrid::{
    weekday_from_number, CalendarChange, CalendarConfig, CalendarDate, CalendarNavigation,
    MonthAnchor, NavigationSnapshot, ViewMode,
};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime, Weekday,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

static WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sunday),
    ("monday", Weekday::Monday),
    ("tuesday", Weekday::Tuesday),
    ("wednesday", Weekday::Wednesday),
    ("thursday", Weekday::Thursday),
    ("friday", Weekday::Friday),
    ("saturday", Weekday::Saturday),
];

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        config: CalendarConfig,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut config = CalendarConfig::new();
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('w') | Arg::Long("first-weekday") => {
                    config = config.first_weekday(parser.value()?.parse_with(parse_weekday)?);
                }
                Arg::Short('y') | Arg::Long("year-view") => {
                    config = config.view_mode(ViewMode::Year);
                }
                Arg::Long("hide-month-grid") => config = config.hide_month_grid(true),
                Arg::Long("hide-secondary") => config = config.hide_secondary_events(true),
                Arg::Long("anchor") => {
                    config = config.anchor(parser.value()?.parse_with(parse_anchor)?);
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            config,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                mut config,
                log_file,
            } => {
                if let Some(path) = log_file {
                    init_logging(&path)?;
                }
                let now = OffsetDateTime::now_local().context("failed to determine local date")?;
                config = config.utc_offset(now.offset());
                if let Some(date) = date {
                    config = config.selected_date(CalendarDate::from(date));
                }
                let mut calendar = CalendarNavigation::new(CalendarDate::from(now.date()), config);
                calendar.subscribe(|change: CalendarChange, snapshot: &NavigationSnapshot| {
                    info!(
                        ?change,
                        selected = %snapshot.selected_date,
                        version = snapshot.version,
                        "calendar changed"
                    );
                });
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(calendar, Phoon).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: calgrid [<options>] [YYYY-MM-DD]");
                println!();
                println!("Terminal month & year calendar marking NetHack's full & new moons");
                println!();
                println!("Options:");
                println!("  -w, --first-weekday <DAY>");
                println!("                    Start weeks on the given day, as a number from 1");
                println!("                    (Sunday) to 7 (Saturday) or a name [default: 1]");
                println!();
                println!("  -y, --year-view   Start in the year overview");
                println!();
                println!("  --hide-month-grid Show only the title in the month view");
                println!();
                println!("  --hide-secondary  Do not mark new moons");
                println!();
                println!("  --anchor first|last");
                println!("                    Day to select when moving to another month:");
                println!("                    always the first, or the last for past months");
                println!("                    [default: first]");
                println!();
                println!("  --log-file <PATH> Write logs to the given file");
                println!();
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn parse_weekday(s: &str) -> anyhow::Result<Weekday> {
    if let Ok(n) = s.parse::<u8>() {
        return Ok(weekday_from_number(n)?);
    }
    let name = s.to_ascii_lowercase();
    if name.len() >= 2 {
        if let Some(&(_, wd)) = WEEKDAY_NAMES.iter().find(|(full, _)| full.starts_with(&name)) {
            return Ok(wd);
        }
    }
    anyhow::bail!("unknown weekday: {s:?}")
}

fn parse_anchor(s: &str) -> anyhow::Result<MonthAnchor> {
    match s {
        "first" => Ok(MonthAnchor::FirstOfMonth),
        "last" => Ok(MonthAnchor::LastOfMonth),
        _ => anyhow::bail!("expected \"first\" or \"last\", got {s:?}"),
    }
}

// The terminal UI owns stdout, so logs only go anywhere if a file is given.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
