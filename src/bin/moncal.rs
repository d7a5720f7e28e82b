extern crate moncal as lib;

use flexi_logger::{FileSpec, Logger};
use lib::date::CalendarDate;
use lib::month_view::MonthView;
use std::io::{stdout, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "moncal",
    about = "Prints the month calendar of a date, marking the day itself."
)]
pub struct Args {
    #[structopt(
        name = "DATE",
        help = "reference date as YYYY-MM-DD, defaults to today"
    )]
    pub date: Option<CalendarDate>,

    #[structopt(
        short = "s",
        long = "shift",
        help = "number of days to add to the reference date (may be negative)",
        allow_hyphen_values = true,
        default_value = "0"
    )]
    pub shift: i64,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    std::panic::set_hook(Box::new(|info| {
        println!("moncal ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let date = args.date.unwrap_or_else(CalendarDate::today);
    let reference = date.shifted(args.shift)?;

    log::info!("Reference date {}", reference);

    let view = MonthView::new(reference).today_symbol_opt(config.marker());

    let stdout = stdout();
    let mut out = stdout.lock();
    view.render(&mut out)?;
    out.flush()?;

    Ok(())
}
