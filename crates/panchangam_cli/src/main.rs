use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::debug;
use panchangam_base::{
    karana_from_sequence, karana_from_tithi_float, nakshatra_from_longitude, normalize_360,
    tithi_from_elongation, yoga_from_longitudes,
};
use panchangam_ephem::AnalyticEphemeris;
use panchangam_search::{
    DEFAULT_FORECAST_DAYS, DateQuery, FlatPanchang, PanchangConfig, PanchangEngine,
    PanchangSnapshot, find_date, find_date_parallel, forecast,
};
use panchangam_time::parse_civil_date;

#[derive(Parser)]
#[command(name = "panchangam", about = "Hindu panchangam calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for a date (Bangalore, IST)
    Panchang {
        /// Date as YYYY-MM-DD or DD-MM-YYYY
        #[arg(long)]
        date: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Use the single-level layout (implies JSON)
        #[arg(long)]
        flat: bool,
    },
    /// First date of a masa/paksha/tithi combination
    FindDate {
        /// Masa name, e.g. Kartika
        #[arg(long)]
        masa: String,
        /// Paksha name: Shukla or Krishna
        #[arg(long)]
        paksha: String,
        /// Tithi name, e.g. Purnima
        #[arg(long)]
        tithi: String,
        /// Year whose January 1 starts the search (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Evaluate days concurrently
        #[arg(long)]
        parallel: bool,
    },
    /// Tithi, karana, yoga and nakshatra from sidereal longitudes
    Tithi {
        /// Sun sidereal longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
        /// Moon sidereal longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
    },
    /// Karana for a half-tithi sequence number (0-59)
    Karana {
        #[arg(long)]
        index: u32,
    },
    /// Masa (lunar month) with its bracketing new moons
    Masa {
        /// Date as YYYY-MM-DD or DD-MM-YYYY
        #[arg(long)]
        date: String,
    },
    /// Festival and peak-season days ahead
    Forecast {
        /// First day (default: today, UTC)
        #[arg(long)]
        from: Option<String>,
        /// Number of days
        #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS)]
        days: u32,
    },
}

fn init_logging() {
    // RUST_LOG, parsed last, overrides the default level.
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_engine() -> PanchangEngine<AnalyticEphemeris> {
    PanchangEngine::analytic(PanchangConfig::default()).unwrap_or_else(|e| fail(e))
}

fn require_date(input: &str) -> NaiveDate {
    parse_civil_date(input).unwrap_or_else(|e| fail(e))
}

fn print_snapshot(p: &PanchangSnapshot) {
    let a = &p.attributes;
    println!("Date:       {}", p.date);
    println!("Samvatsara: {}", a.samvatsara);
    println!("Ayana:      {}", a.ayana);
    println!("Ritu:       {}", a.ritu);
    println!("Masa:       {}", p.formatted_masa());
    println!("Paksha:     {}", a.paksha);
    println!("Tithi:      {}", a.tithi);
    println!("Nakshatra:  {}", a.nakshatra);
    println!("Yoga:       {}", a.yoga);
    println!("Karana:     {}", a.karana);
    println!("Vasara:     {}", a.vasara);
    println!("Sunrise:    {}", p.sun_cycle.sunrise);
    println!("Sunset:     {}", p.sun_cycle.sunset);
    println!("Moonrise:   {}", p.sun_cycle.moonrise);
    println!("Rahukala:   {}", p.inauspicious.rahu);
    println!("Yamaganda:  {}", p.inauspicious.yama);
    if let Some(festival) = p.festival {
        println!("Festival:   {festival}");
    }
    println!("{}", p.description);
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Panchang { date, json, flat } => {
            let date = require_date(&date);
            let engine = load_engine();
            debug!("panchang for {date}");
            let p = engine.calculate(date).unwrap_or_else(|e| fail(e));
            let out = if flat {
                serde_json::to_string_pretty(&FlatPanchang::from(&p))
            } else if json {
                serde_json::to_string_pretty(&p)
            } else {
                print_snapshot(&p);
                return;
            };
            match out {
                Ok(s) => println!("{s}"),
                Err(e) => fail(e),
            }
        }

        Commands::FindDate {
            masa,
            paksha,
            tithi,
            year,
            parallel,
        } => {
            let mut query = DateQuery::new(masa, paksha, tithi);
            if let Some(y) = year {
                query = query.with_year(y);
            }
            let engine = load_engine();
            let found = if parallel {
                find_date_parallel(&engine, &query)
            } else {
                find_date(&engine, &query)
            };
            match found {
                Ok(Some(date)) => println!("{date}"),
                Ok(None) => println!(
                    "{} {} {} not found in {} days",
                    query.masa,
                    query.paksha,
                    query.tithi,
                    engine.config().search_window_days
                ),
                Err(e) => fail(e),
            }
        }

        Commands::Tithi { sun, moon } => {
            let t = tithi_from_elongation(moon - sun);
            let k = karana_from_tithi_float(t.tithi_float);
            let y = yoga_from_longitudes(sun, moon);
            let n = nakshatra_from_longitude(moon);
            println!(
                "{} {} (tithi {} of 30, {:.4} deg in tithi)",
                t.paksha,
                t.tithi,
                t.tithi_index + 1,
                t.degrees_in_tithi
            );
            println!("  Karana:    {} (sequence {})", k.karana, k.sequence);
            println!("  Yoga:      {}", y.yoga);
            println!("  Nakshatra: {} pada {}", n.nakshatra, n.pada);
            println!("  Elongation: {:.4} deg", normalize_360(moon - sun));
        }

        Commands::Karana { index } => {
            if index >= 60 {
                fail(format!("karana index {index} out of range (0-59)"));
            }
            println!("{}", karana_from_sequence(index));
        }

        Commands::Masa { date } => {
            let date = require_date(&date);
            let engine = load_engine();
            match engine.masa_for_date(date) {
                Ok(info) => {
                    println!("Masa: {}", info.display_name());
                    println!("  Start: {} (Sun in {})", info.start, info.rashi_at_start);
                    println!("  End:   {} (Sun in {})", info.end, info.rashi_at_end);
                }
                Err(e) => fail(e),
            }
        }

        Commands::Forecast { from, days } => {
            let start = match from {
                Some(s) => require_date(&s),
                None => Utc::now().date_naive(),
            };
            let engine = load_engine();
            let f = forecast(&engine, start, days).unwrap_or_else(|e| fail(e));
            for day in &f.days {
                let masa = if day.is_adhika {
                    format!("Adhika {}", day.masa)
                } else {
                    day.masa.to_string()
                };
                let reasons: Vec<String> = day.reasons.iter().map(|r| r.to_string()).collect();
                if reasons.is_empty() {
                    println!("{}  {masa} {}", day.date, day.tithi);
                } else {
                    println!("{}  {masa} {}  [{}]", day.date, day.tithi, reasons.join("; "));
                }
            }
            println!("Outlook: {:?}", f.outlook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn find_date_flags() {
        let cli = Cli::try_parse_from([
            "panchangam", "find-date", "--masa", "Kartika", "--paksha", "Shukla", "--tithi",
            "Purnima", "--year", "2025", "--parallel",
        ])
        .unwrap();
        match cli.command {
            Commands::FindDate { masa, year, parallel, .. } => {
                assert_eq!(masa, "Kartika");
                assert_eq!(year, Some(2025));
                assert!(parallel);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn negative_longitude_accepted() {
        let cli = Cli::try_parse_from(["panchangam", "tithi", "--sun", "-10", "--moon", "170"]).unwrap();
        assert!(matches!(cli.command, Commands::Tithi { sun, .. } if sun == -10.0));
    }

    #[test]
    fn forecast_defaults_to_a_week() {
        let cli = Cli::try_parse_from(["panchangam", "forecast"]).unwrap();
        assert!(matches!(cli.command, Commands::Forecast { from: None, days: 7 }));
    }

    #[test]
    fn panchang_requires_date() {
        assert!(Cli::try_parse_from(["panchangam", "panchang"]).is_err());
    }
}
