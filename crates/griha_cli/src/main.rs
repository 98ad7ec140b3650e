use std::path::PathBuf;

use clap::{Parser, Subcommand};
use griha_houses::{
    Angles, FormulaEngine, Frame, GeoLocation, HouseResult, HousesConfig, ReferenceCusps,
    compute_with_fallback, engine_for, max_abs_delta,
};

#[derive(Parser)]
#[command(name = "griha", about = "Ascendant, MC and house cusps")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four angles and 12 house cusps
    Houses {
        /// UTC instant with offset (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// House system: placidus, koch or equal (default from config, else placidus)
        #[arg(long)]
        system: Option<String>,
        /// Engine: formula or swiss (default from config, else formula)
        #[arg(long)]
        engine: Option<String>,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Reference cusps as JSON, compared against the result
        #[arg(long)]
        reference: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the time scales, sidereal time and RAMC of an instant
    Frame {
        #[arg(long)]
        date: String,
        /// Longitude in degrees, east positive
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lon: f64,
    },
    /// Print ASC, MC, DSC and IC
    Angles {
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Houses {
            date,
            lat,
            lon,
            system,
            engine,
            config,
            reference,
            json,
        } => {
            let mut cfg = match &config {
                Some(path) => HousesConfig::load(path).unwrap_or_else(|e| fail(e)),
                None => HousesConfig::default(),
            };
            if let Some(token) = system {
                cfg.system = token.parse().unwrap_or_else(|e| fail(e));
            }
            if let Some(token) = engine {
                cfg.engine = token.parse().unwrap_or_else(|e| fail(e));
            }
            let reference = reference
                .map(|text| ReferenceCusps::from_json(&text).unwrap_or_else(|e| fail(e)));

            let utc = griha_time::parse_utc(&date).unwrap_or_else(|e| fail(e));
            let location = GeoLocation::new(lat, lon).unwrap_or_else(|e| fail(e));
            let primary = engine_for(&cfg).unwrap_or_else(|e| fail(e));
            let formula = FormulaEngine::new(cfg.solver).unwrap_or_else(|e| fail(e));
            let result =
                compute_with_fallback(primary.as_ref(), &formula, &utc, &location, cfg.system)
                    .unwrap_or_else(|e| fail(e));

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(text) => println!("{text}"),
                    Err(e) => fail(e),
                }
            } else {
                print_houses(&date, lat, lon, &result);
            }

            if let Some(reference) = reference {
                let deltas = reference.compare(&result);
                println!("\n{:>6} {:>10} {:>10} {:>9}", "House", "Computed", "Reference", "Delta");
                println!("{}", "-".repeat(40));
                for d in &deltas {
                    println!(
                        "{:>6} {:>9.4}° {:>9.4}° {:>+8.4}°",
                        d.house, d.computed, d.reference, d.delta_deg
                    );
                }
                if let Some(max) = max_abs_delta(&deltas) {
                    println!("  max |delta|: {max:.4}°");
                }
            }
        }

        Commands::Frame { date, lon } => {
            let utc = griha_time::parse_utc(&date).unwrap_or_else(|e| fail(e));
            let (frame, trace) = Frame::traced_from_utc(&utc, lon).unwrap_or_else(|e| fail(e));
            println!("Frame for {date} at {lon:.4}°E\n");
            println!("  JD (UTC):   {:.6}", trace.jd_utc);
            println!("  Delta T:    {:.3} s", trace.delta_t_s);
            println!("  JD (TT):    {:.6}", trace.jd_tt);
            println!("  T (TT):     {:.10}", trace.centuries_tt);
            println!("  Obliquity:  {:.8}°", frame.obliquity_deg);
            println!("  GMST:       {:.6}°", trace.gmst_deg);
            println!("  Eq. equinox:{:+.3}\"", trace.equation_of_equinoxes_deg * 3600.0);
            println!("  GAST:       {:.6}°", trace.gast_deg);
            println!("  RAMC:       {:.6}°", frame.ramc_deg);
        }

        Commands::Angles { date, lat, lon } => {
            let utc = griha_time::parse_utc(&date).unwrap_or_else(|e| fail(e));
            let location = GeoLocation::new(lat, lon).unwrap_or_else(|e| fail(e));
            let frame =
                Frame::from_utc(&utc, location.longitude_deg).unwrap_or_else(|e| fail(e));
            let a = Angles::from_frame(&frame, location.latitude_deg);
            println!("Angles for {date} at {lat:.4}°N, {lon:.4}°E\n");
            println!("  ASC: {:>9.4}°  ({})", a.ascendant, sign_position(a.ascendant));
            println!("  MC:  {:>9.4}°  ({})", a.mc, sign_position(a.mc));
            println!("  DSC: {:>9.4}°  ({})", a.descendant, sign_position(a.descendant));
            println!("  IC:  {:>9.4}°  ({})", a.ic, sign_position(a.ic));
            println!("  RAMC: {:.6}°  obliquity: {:.8}°", frame.ramc_deg, frame.obliquity_deg);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn print_houses(date: &str, lat: f64, lon: f64, result: &HouseResult) {
    println!(
        "{} houses for {} at {:.4}°N, {:.4}°E\n",
        result.system, date, lat, lon
    );
    println!(
        "  ASC: {:.4}°  MC: {:.4}°  DSC: {:.4}°  IC: {:.4}°\n",
        result.ascendant.longitude,
        result.mc.longitude,
        result.descendant.longitude,
        result.ic.longitude
    );
    println!("{:>6} {:>10}  {:<12} {}", "House", "Cusp", "Position", "Method");
    println!("{}", "-".repeat(44));
    for (cusp, method) in result.houses.iter().zip(result.diagnostics.methods.iter()) {
        println!(
            "{:>6} {:>9.4}°  {:<12} {:?}",
            cusp.number,
            cusp.longitude,
            sign_position(cusp.longitude),
            method
        );
    }
    let d = &result.diagnostics;
    println!(
        "\n  engine: {}  RAMC: {:.6}°  obliquity: {:.8}°",
        d.engine, d.ramc_deg, d.obliquity_deg
    );
    let degraded = d.degraded_houses();
    if !degraded.is_empty() {
        eprintln!("warning: equal-house values used for houses {degraded:?}");
    }
}

/// Sign index and degrees within the sign, e.g. "S07 16°56'".
fn sign_position(lon: f64) -> String {
    let sign = (lon / 30.0).floor() as u32 % 12 + 1;
    let within = lon.rem_euclid(30.0);
    let deg = within.floor();
    let min = ((within - deg) * 60.0).floor();
    format!("S{sign:02} {deg:02}°{min:02}'")
}
