use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use wayfinder::navigation;
use wayfinder::LandmarkTable;

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct TableLoadError(PathBuf, #[source] wayfinder::osm::Error);

#[derive(Parser)]
struct Cli {
    /// Load landmarks from an OSM XML file (optionally .gz or .bz2 compressed)
    /// instead of using the built-in campus
    #[arg(long, global = true)]
    landmarks: Option<PathBuf>,

    /// Format of the landmarks file; guessed from its content by default
    #[arg(long, global = true, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Tag with landmark names in the OSM file
    #[arg(long, global = true, default_value = "name")]
    name_tag: String,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Auto,
    Xml,
    XmlGz,
    XmlBz2,
}

impl From<Format> for wayfinder::osm::FileFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Auto => Self::Unknown,
            Format::Xml => Self::Xml,
            Format::XmlGz => Self::XmlGz,
            Format::XmlBz2 => Self::XmlBz2,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List all landmarks
    Landmarks,

    /// List possible destinations from a landmark
    Destinations {
        /// Current location (underscores are accepted in place of spaces)
        from: String,

        /// Only show destinations containing this text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Find the shortest walking route between two landmarks
    Route {
        /// Start location (underscores are accepted in place of spaces)
        from: String,

        /// Destination (underscores are accepted in place of spaces)
        to: String,

        /// Walking speed, in meters per second
        #[arg(long, default_value_t = navigation::DEFAULT_WALKING_SPEED)]
        walking_speed: f64,

        /// Longest direct leg between two landmarks, in meters
        #[arg(long, value_parser = parse_max_leg)]
        max_leg: Option<f64>,

        /// Landmarks not to pass through (can be repeated)
        #[arg(long)]
        avoid: Vec<String>,

        /// Print the route as GeoJSON
        #[arg(long)]
        geojson: bool,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    colog::default_builder()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let table = match cli.landmarks {
        Some(ref path) => load_table(path, cli.format.into(), &cli.name_tag)?,
        None => LandmarkTable::campus(),
    };
    log::info!("loaded {} landmarks", table.len());

    match cli.command {
        Command::Landmarks => {
            for landmark in &table {
                println!("{}\t{}\t{}", landmark.name, landmark.lat, landmark.lon);
            }
        }

        Command::Destinations { from, search } => {
            let from = navigation::resolve_location(&table, &from)?;
            let list = navigation::destinations(&table, from)?;
            for d in navigation::filter_destinations(&list, &search) {
                println!("{}\t~{:.0} m", d.name, d.distance);
            }
        }

        Command::Route {
            from,
            to,
            walking_speed,
            max_leg,
            avoid,
            geojson,
        } => {
            let from = navigation::resolve_location(&table, &from)?;
            let to = navigation::resolve_location(&table, &to)?;
            let avoid = avoid
                .iter()
                .map(|name| navigation::resolve_location(&table, name).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?;

            let options = wayfinder::Options {
                max_leg: max_leg.unwrap_or(f64::INFINITY),
                avoid,
            };
            let itinerary = navigation::plan(&table, from, to, &options, walking_speed)?;

            if geojson {
                println!("{}", serde_json::to_string_pretty(&itinerary.to_geojson())?);
            } else {
                println!("From:     {}", itinerary.route.start());
                println!("To:       {}", itinerary.route.end());
                for stop in itinerary.route.via() {
                    println!("Via:      {}", stop);
                }
                println!("Distance: {:.0} meters", itinerary.route.distance);
                println!("Time:     {:.0} seconds", itinerary.walking_time.as_secs_f64());
            }
        }
    }

    Ok(())
}

fn parse_max_leg(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if v.is_nan() || v < 0.0 {
        Err(format!("must be a non-negative number of meters, got {}", s))
    } else {
        Ok(v)
    }
}

fn load_table<P: AsRef<Path>>(
    path: P,
    file_format: wayfinder::osm::FileFormat,
    name_tag: &str,
) -> Result<LandmarkTable, TableLoadError> {
    let options = wayfinder::osm::Options {
        file_format,
        name_tag,
    };
    match wayfinder::osm::load_from_file(path.as_ref(), &options) {
        Ok(t) => Ok(t),
        Err(e) => Err(TableLoadError(PathBuf::from(path.as_ref()), e)),
    }
}
