use std::fmt::Display;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jyoti_config::EngineConfig;
use jyoti_time::{CivilDateTime, MonthYear};
use jyoti_vedic_base::{
    BirthChart, BirthRecord, CompatibilityScore, DashaLevel, DashaNode, HouseBasis,
    MeanMotionSource, MoonProfile, Nakshatra, PlanetPosition, PlanetSource, Rashi, SadeSatiPhase,
    SadeSatiReport, SpecialPoint, VedicWarning, approximate_transits, approximate_tz_offset,
    ashtakoot_score, bhrigu_bindu, current_dasha, current_dasha_from_longitude, gulika_mandi_points,
    house_from_cusps, nakshatra_birth_balance, nakshatra_from_longitude, rashi_from_longitude,
    resolve_nakshatra, sade_sati_at, vimshottari_timeline, whole_sign_house,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyoti", version, about = "Vedic astrology calculations")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (TOML); defaults to $JYOTI_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign, degree and whole-sign house of a sidereal longitude
    Rashi {
        /// Sidereal longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Sign counted as house 1
        #[arg(long, value_parser = parse_rashi)]
        reference: Option<Rashi>,
    },
    /// Nakshatra from a longitude, or classification of a nakshatra name
    Nakshatra {
        /// Sidereal longitude in degrees
        #[arg(long, allow_hyphen_values = true, conflicts_with = "name")]
        lon: Option<f64>,
        /// Nakshatra name (spelling variants accepted)
        #[arg(long, required_unless_present = "lon")]
        name: Option<String>,
    },
    /// House of a longitude from 12 cusps
    House {
        /// Sidereal longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// 12 comma-separated cusp longitudes, house 1 first
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        cusps: Vec<f64>,
    },
    /// Ashtakoot compatibility of two Moon placements
    Match(MatchArgs),
    /// Vimshottari dasha active now, or the full timeline
    Dasha(DashaArgs),
    /// Approximate (mean-motion) planetary positions
    Transit {
        /// Instant, YYYY-MM-DDTHH:MM[:SS][±HH:MM]; defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Timezone offset in hours; defaults to the config value
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<f64>,
        /// Sign counted as house 1; defaults to the config value
        #[arg(long, value_parser = parse_rashi)]
        reference: Option<Rashi>,
    },
    /// Approximate birth chart from a birth record
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Ascendant sign
        #[arg(long, value_parser = parse_rashi)]
        asc: Rashi,
    },
    /// Sade Sati status and windows for a Moon sign
    SadeSati {
        /// Natal Moon sign
        #[arg(long, value_parser = parse_rashi)]
        moon_sign: Rashi,
        /// Month to evaluate, e.g. "Jun 2027"; defaults to this month
        #[arg(long)]
        at: Option<MonthYear>,
    },
    /// Bhrigu Bindu from Rahu and Moon longitudes
    BhriguBindu {
        #[arg(long, allow_hyphen_values = true)]
        rahu: f64,
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        #[command(flatten)]
        houses: HouseArgs,
    },
    /// Place Gulika and Mandi longitudes
    Gulika {
        #[arg(long, allow_hyphen_values = true)]
        gulika: f64,
        /// Defaults to the Gulika longitude
        #[arg(long, allow_hyphen_values = true)]
        mandi: Option<f64>,
        #[command(flatten)]
        houses: HouseArgs,
    },
}

#[derive(Args)]
struct MatchArgs {
    /// First partner's Moon sign
    #[arg(long, required_unless_present = "moon_a")]
    sign_a: Option<String>,
    /// First partner's Moon nakshatra
    #[arg(long, required_unless_present = "moon_a")]
    nakshatra_a: Option<String>,
    /// First partner's Moon longitude (instead of names)
    #[arg(long, conflicts_with_all = ["sign_a", "nakshatra_a"])]
    moon_a: Option<f64>,
    /// Second partner's Moon sign
    #[arg(long, required_unless_present = "moon_b")]
    sign_b: Option<String>,
    /// Second partner's Moon nakshatra
    #[arg(long, required_unless_present = "moon_b")]
    nakshatra_b: Option<String>,
    /// Second partner's Moon longitude (instead of names)
    #[arg(long, conflicts_with_all = ["sign_b", "nakshatra_b"])]
    moon_b: Option<f64>,
}

#[derive(Args)]
struct DashaArgs {
    /// Moon nakshatra name; birth is taken as the start of its lord's period
    #[arg(long, required_unless_present = "moon", conflicts_with = "moon")]
    nakshatra: Option<String>,
    /// Moon sidereal longitude; applies the birth balance
    #[arg(long)]
    moon: Option<f64>,
    /// Birth instant, YYYY-MM-DDTHH:MM[:SS][±HH:MM]
    #[arg(long)]
    birth: String,
    /// Timezone offset of `birth` when it carries none
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    tz: f64,
    /// Instant to evaluate; defaults to now
    #[arg(long)]
    now: Option<String>,
    /// Print the full 120-year timeline instead (needs --moon)
    #[arg(long, requires = "moon")]
    timeline: bool,
    /// Timeline depth: 1 Mahadasha, 2 Antardasha, 3 Pratyantardasha
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
    depth: u8,
}

#[derive(Args)]
struct BirthArgs {
    /// Local birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Local birth time, HH:MM[:SS]
    #[arg(long)]
    time: String,
    /// Timezone offset in hours east of UTC; estimated from --longitude if omitted
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    latitude: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    longitude: f64,
}

#[derive(Args)]
struct HouseArgs {
    /// Ascendant sign for whole-sign houses
    #[arg(long, value_parser = parse_rashi, default_value = "Aries")]
    asc: Rashi,
    /// 12 comma-separated cusps; overrides --asc
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    cusps: Vec<f64>,
}

impl HouseArgs {
    fn basis(&self) -> HouseBasis<'_> {
        if self.cusps.is_empty() {
            HouseBasis::WholeSign(self.asc)
        } else {
            HouseBasis::Cusps(&self.cusps)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EngineConfig::load_or_default(cli.config.as_deref())
        .unwrap_or_else(|e| fail(format!("Failed to load config: {e}")));
    let out = Output { json: cli.json };

    match cli.command {
        Commands::Rashi { lon, reference } => {
            let reference = reference.unwrap_or_else(|| config.reference_sign());
            let info = rashi_from_longitude(lon);
            let house = whole_sign_house(info.rashi, reference);
            if out.json {
                out.emit(&serde_json::json!({ "rashi": info, "house": house }));
            } else {
                println!(
                    "{} ({}) sign {} - {} ({:.4} deg in sign), house {house} from {}",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.sign,
                    info.dms,
                    info.degree_in_sign,
                    reference
                );
            }
        }

        Commands::Nakshatra { lon, name } => match (lon, name) {
            (Some(lon), _) => {
                let info = nakshatra_from_longitude(lon);
                if out.json {
                    out.emit(&info);
                } else {
                    println!(
                        "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.1}% elapsed)",
                        info.nakshatra.name(),
                        info.nakshatra_index,
                        info.pada,
                        info.degrees_in_nakshatra,
                        info.fraction_elapsed * 100.0
                    );
                }
            }
            (None, Some(name)) => {
                let profile = resolve_nakshatra(&name);
                if out.json {
                    out.emit(&profile);
                } else {
                    match profile.nakshatra {
                        Some(n) => println!("{n}"),
                        None => println!("Unresolved '{name}', using defaults"),
                    }
                    println!("  Gana:       {:?}", profile.gana);
                    match profile.yoni {
                        Some(y) => println!("  Yoni:       {y:?}"),
                        None => println!("  Yoni:       unknown"),
                    }
                    println!("  Nadi:       {:?}", profile.nadi);
                    println!("  Dasha lord: {}", profile.dasha_lord.english_name());
                }
            }
            (None, None) => fail("Give --lon or --name"),
        },

        Commands::House { lon, cusps } => {
            let house = house_from_cusps(lon, &cusps).unwrap_or_else(|e| fail(e));
            if out.json {
                out.emit(&serde_json::json!({ "longitude": lon, "house": house }));
            } else {
                println!("House {house}");
            }
        }

        Commands::Match(args) => {
            let a = moon_profile(args.moon_a, args.sign_a.as_deref(), args.nakshatra_a.as_deref());
            let b = moon_profile(args.moon_b, args.sign_b.as_deref(), args.nakshatra_b.as_deref());
            let score = ashtakoot_score(&a, &b);
            if out.json {
                out.emit(&score);
            } else {
                print_score(&score);
            }
        }

        Commands::Dasha(args) => run_dasha(&args, &config, &out),

        Commands::Transit { at, tz, reference } => {
            let tz = tz.unwrap_or_else(|| config.timezone_offset_hours());
            let reference = reference.unwrap_or_else(|| config.reference_sign());
            let instant = parse_instant(at.as_deref(), tz);
            let transits = approximate_transits(&instant, reference);
            if out.json {
                out.emit(&transits);
            } else {
                println!("Approximate positions at {} (houses from {reference})", transits.instant);
                print_positions(&transits.positions);
            }
        }

        Commands::Chart { birth, asc } => {
            let tz = birth
                .tz
                .unwrap_or_else(|| approximate_tz_offset(birth.longitude));
            let record = BirthRecord {
                date: birth.date,
                time: birth.time,
                latitude: birth.latitude,
                longitude: birth.longitude,
                timezone_offset_hours: tz,
            };
            let source = MeanMotionSource;
            let raw = source
                .fetch_planet_positions(&record)
                .unwrap_or_else(|e| fail(e));
            let chart = BirthChart::from_raw(asc, &raw).unwrap_or_else(|e| fail(e));
            debug!(fidelity = ?source.fidelity(), "chart positions fetched");
            if out.json {
                out.emit(&serde_json::json!({
                    "record": record,
                    "fidelity": source.fidelity(),
                    "chart": chart,
                }));
            } else {
                println!("Ascendant: {asc} (approximate positions, UTC{tz:+})");
                print_positions(&chart.positions);
            }
        }

        Commands::SadeSati { moon_sign, at } => {
            let table = config.saturn_table().unwrap_or_else(|e| fail(e));
            let at = at.unwrap_or_else(|| {
                CivilDateTime::now(config.timezone_offset_hours())
                    .map(|now| MonthYear::from(&now))
                    .unwrap_or_else(|e| fail(e))
            });
            let report = sade_sati_at(&table, moon_sign, at);
            if out.json {
                out.emit(&report);
            } else {
                print_sade_sati(&report, table.version());
            }
        }

        Commands::BhriguBindu { rahu, moon, houses } => {
            let point = SpecialPoint::at(bhrigu_bindu(rahu, moon), houses.basis())
                .unwrap_or_else(|e| fail(e));
            if out.json {
                out.emit(&point);
            } else {
                print_point("Bhrigu Bindu", &point);
            }
        }

        Commands::Gulika {
            gulika,
            mandi,
            houses,
        } => {
            let gm = gulika_mandi_points(gulika, mandi, houses.basis()).unwrap_or_else(|e| fail(e));
            if out.json {
                out.emit(&gm);
            } else {
                print_point("Gulika", &gm.gulika);
                print_point("Mandi", &gm.mandi);
                if gm.mandi_defaulted {
                    println!("  (Mandi not given, using Gulika)");
                }
            }
        }
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{s}"),
            Err(e) => fail(format!("Failed to serialize output: {e}")),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_rashi(s: &str) -> Result<Rashi, String> {
    Rashi::from_name(s).ok_or_else(|| format!("unknown sign '{s}'"))
}

fn moon_profile(lon: Option<f64>, sign: Option<&str>, nakshatra: Option<&str>) -> MoonProfile {
    match lon {
        Some(lon) if lon.is_finite() => MoonProfile::from_longitude(lon),
        Some(lon) => fail(format!("Moon longitude must be finite, got {lon}")),
        None => MoonProfile::from_names(sign.unwrap_or_default(), nakshatra.unwrap_or_default()),
    }
}

fn parse_instant(s: Option<&str>, tz: f64) -> CivilDateTime {
    match s {
        Some(s) => CivilDateTime::parse_iso(s, tz),
        None => CivilDateTime::now(tz),
    }
    .unwrap_or_else(|e| fail(e))
}

fn run_dasha(args: &DashaArgs, config: &EngineConfig, out: &Output) {
    let birth = parse_instant(Some(&args.birth), args.tz);

    if args.timeline {
        let Some(moon) = args.moon else {
            fail("--timeline needs --moon")
        };
        let balance = nakshatra_birth_balance(moon);
        let depth = match args.depth {
            1 => DashaLevel::Mahadasha,
            2 => DashaLevel::Antardasha,
            _ => DashaLevel::Pratyantardasha,
        };
        let timeline = vimshottari_timeline(&balance, depth);
        if out.json {
            out.emit(&serde_json::json!({ "balance": balance, "timeline": timeline }));
        } else {
            println!(
                "Moon in {} ({}), balance {:.3} years of {}",
                balance.nakshatra,
                balance.lord.english_name(),
                balance.balance_years,
                balance.lord.english_name()
            );
            print_timeline(&timeline, &birth, 0);
        }
        return;
    }

    let now = parse_instant(args.now.as_deref(), config.timezone_offset_hours());
    let current = match (&args.nakshatra, args.moon) {
        (_, Some(moon)) => current_dasha_from_longitude(moon, &birth, &now),
        (Some(name), None) => current_dasha(name, &birth, &now),
        (None, None) => fail("Give --nakshatra or --moon"),
    }
    .unwrap_or_else(|e| fail(e));

    if out.json {
        out.emit(&current);
        return;
    }
    print_warnings(&current.warnings);
    println!("Elapsed: {:.3} years", current.elapsed_years);
    for p in [&current.mahadasha, &current.antardasha, &current.pratyantardasha] {
        println!(
            "  {:<16} {:<8} {} .. {}",
            p.level.name(),
            p.graha.english_name(),
            p.start_at(&birth),
            p.end_at(&birth)
        );
    }
    println!(
        "Antardasha ends {} ({:.3} years left)",
        current.antardasha_ends_at, current.antardasha_remaining_years
    );
}

fn print_timeline(nodes: &[DashaNode], birth: &CivilDateTime, indent: usize) {
    for node in nodes {
        let p = &node.period;
        println!(
            "{:indent$}{:<8} {} .. {}",
            "",
            p.graha.english_name(),
            p.start_at(birth),
            p.end_at(birth),
            indent = indent
        );
        print_timeline(&node.children, birth, indent + 2);
    }
}

fn print_positions(positions: &[PlanetPosition]) {
    for p in positions {
        let nak = p.nakshatra.map(Nakshatra::name).unwrap_or("-");
        println!(
            "  {:<8} {:>9.4} deg  {:<11} {:>7.4}  house {:>2}  {:<17}{}",
            p.graha.english_name(),
            p.longitude,
            p.rashi.western_name(),
            p.degree_in_sign,
            p.house,
            nak,
            if p.retrograde { " R" } else { "" }
        );
    }
}

fn print_score(score: &CompatibilityScore) {
    print_warnings(&score.warnings);
    for k in &score.kootas {
        println!(
            "  {:<13} {}/{}  {:?}",
            k.name, k.obtained, k.maximum, k.status
        );
    }
    println!(
        "Total {}/{} ({}%), {:?}{}",
        score.total_obtained,
        score.total_maximum,
        score.percentage,
        score.rating,
        if score.acceptable { "" } else { ", below 18" }
    );
    println!("{}", score.summary());
}

fn print_sade_sati(report: &SadeSatiReport, version: &str) {
    print_warnings(&report.warnings);
    println!(
        "Moon sign {}; Saturn in {} at {} (table {version})",
        report.moon_sign, report.saturn.sign, report.at
    );
    match report.active_phase {
        Some(phase) => println!("In Sade Sati: {phase} phase"),
        None => println!("Not in Sade Sati"),
    }
    for w in &report.phases {
        println!(
            "  {:<4} {:<12} {} .. {}",
            w.phase.label(),
            phase_sign(w.moon_sign, w.phase),
            w.start,
            w.end
        );
    }
    for (label, span) in [
        ("Previous", report.past),
        ("Current", report.current),
        ("Next", report.future),
    ] {
        if let Some(span) = span {
            println!("{label:<9} {} .. {}", span.start, span.end);
        }
    }
}

fn phase_sign(moon: Rashi, phase: SadeSatiPhase) -> &'static str {
    phase.sign_for(moon).western_name()
}

fn print_point(label: &str, p: &SpecialPoint) {
    println!(
        "{label}: {:.4} deg, {} {:.4} deg, house {}",
        p.longitude,
        p.rashi.western_name(),
        p.degree_in_sign,
        p.house
    );
}

fn print_warnings(warnings: &[VedicWarning]) {
    for w in warnings {
        eprintln!("warning: {w}");
    }
}
