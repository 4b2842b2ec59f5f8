use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lumina_astro::{
    GeoLocation, birth_chart, classify_phase_angle, placement_from_longitude, transit_snapshot,
};
use lumina_core::TableSource;
use lumina_guide::daily_guidance;
use lumina_time::UtcTime;

#[derive(Parser)]
#[command(name = "lumina", about = "Lumina chart and guidance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac placement from an ecliptic longitude
    Zodiac {
        /// Ecliptic longitude in degrees [0, 360)
        lon: f64,
    },
    /// Lunar phase from a phase angle
    Phase {
        /// Phase angle in degrees [0, 360)
        angle: f64,
    },
    /// Natal chart from an ephemeris table
    Chart {
        /// Path to the ephemeris table file
        #[arg(long)]
        table: PathBuf,
        /// Birth instant, e.g. 1990-06-15T12:00:00Z
        #[arg(long)]
        date: String,
        /// Birth latitude in degrees [-90, 90]
        #[arg(long)]
        lat: f64,
        /// Birth longitude in degrees [-180, 180], east positive
        #[arg(long)]
        lon: f64,
    },
    /// Transit snapshot from an ephemeris table
    Transits {
        /// Path to the ephemeris table file
        #[arg(long)]
        table: PathBuf,
        /// Instant, e.g. 2024-03-20T12:00:00Z
        #[arg(long)]
        date: String,
    },
    /// Daily journaling prompts
    Guide {
        /// Path to the ephemeris table file
        #[arg(long)]
        table: PathBuf,
        /// Instant for "today's" sky, e.g. 2024-03-20T12:00:00Z
        #[arg(long)]
        date: String,
        /// Birth instant; enables chart-dependent prompts
        #[arg(long)]
        birth_date: Option<String>,
        /// Birth latitude (required with --birth-date)
        #[arg(long)]
        lat: Option<f64>,
        /// Birth longitude (required with --birth-date)
        #[arg(long)]
        lon: Option<f64>,
    },
}

fn load_table(path: &PathBuf) -> TableSource {
    TableSource::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load ephemeris table: {e}");
        std::process::exit(1);
    })
}

fn parse_instant(s: &str) -> UtcTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Zodiac { lon } => {
            println!("{}", placement_from_longitude(lon));
        }

        Commands::Phase { angle } => {
            println!("{}", classify_phase_angle(angle));
        }

        Commands::Chart {
            table,
            date,
            lat,
            lon,
        } => {
            let source = load_table(&table);
            let instant = parse_instant(&date);
            let location = GeoLocation::new(lat, lon);
            let chart = birth_chart(&source, instant.to_jd_tt(), &location).unwrap_or_else(|e| {
                eprintln!("Chart calculation failed: {e}");
                std::process::exit(1);
            });
            println!("Birth chart for {instant} at ({lat}, {lon}):");
            println!("  Sun      {} (house {})", chart.sun.placement, chart.sun.house);
            println!("  Moon     {} (house {})", chart.moon.placement, chart.moon.house);
            println!("  Rising   {}", chart.rising);
            println!("  Mercury  {} (house {})", chart.mercury.placement, chart.mercury.house);
            println!("  Venus    {} (house {})", chart.venus.placement, chart.venus.house);
            println!("  Mars     {} (house {})", chart.mars.placement, chart.mars.house);
            println!("  Jupiter  {} (house {})", chart.jupiter.placement, chart.jupiter.house);
            println!("  Saturn   {} (house {})", chart.saturn.placement, chart.saturn.house);
            println!("  Uranus   {} (house {})", chart.uranus.placement, chart.uranus.house);
            println!("  Neptune  {} (house {})", chart.neptune.placement, chart.neptune.house);
            println!("  Pluto    {} (house {})", chart.pluto.placement, chart.pluto.house);
        }

        Commands::Transits { table, date } => {
            let source = load_table(&table);
            let instant = parse_instant(&date);
            let snap = transit_snapshot(&source, instant.to_jd_tt()).unwrap_or_else(|e| {
                eprintln!("Transit calculation failed: {e}");
                std::process::exit(1);
            });
            println!("Transits at {instant}:");
            println!("  Sun      {}", snap.sun);
            println!("  Moon     {}", snap.moon);
            println!("  Mercury  {}", snap.mercury);
            println!("  Venus    {}", snap.venus);
            println!("  Mars     {}", snap.mars);
        }

        Commands::Guide {
            table,
            date,
            birth_date,
            lat,
            lon,
        } => {
            let source = load_table(&table);
            let instant = parse_instant(&date);

            let chart = birth_date.map(|birth| {
                let (Some(lat), Some(lon)) = (lat, lon) else {
                    eprintln!("--birth-date requires --lat and --lon");
                    std::process::exit(1);
                };
                let birth_instant = parse_instant(&birth);
                birth_chart(&source, birth_instant.to_jd_tt(), &GeoLocation::new(lat, lon))
                    .unwrap_or_else(|e| {
                        eprintln!("Chart calculation failed: {e}");
                        std::process::exit(1);
                    })
            });

            let prompts =
                daily_guidance(&source, chart.as_ref(), instant.to_jd_tt()).unwrap_or_else(|e| {
                    eprintln!("Guidance failed: {e}");
                    std::process::exit(1);
                });

            for prompt in &prompts {
                println!("{} [{}] {}", prompt.icon, prompt.kind, prompt.title);
                println!("    {}", prompt.content);
            }
        }
    }
}
