use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

use gkdist::config::FileConfig;
use gkdist::{
    Envelope, GeoPoint, SearchArea, ZonePolicy, degrees_to_meters, haversine_distance,
    meters_to_degrees, path_length, project,
};

/// Gauss-Krüger projection and ground distance for WGS84 coordinates
///
/// Examples:
///   # Project a point into its 6-degree zone
///   gkdist project --lon 114.032378 --lat 30.63673
///
///   # Compare planar and great-circle distance
///   gkdist distance --from 114.032378,30.63673 --to 114.04038,30.63235
///
///   # Express a 1 km radius in degrees
///   gkdist degrees 1000
///
///   # Find points within 1 km of a location
///   gkdist search --lon 118.9 --lat 31.23 --radius 1000 --points taxis.json
#[derive(Parser, Debug)]
#[command(name = "gkdist")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches gkdist.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a longitude/latitude into Gauss-Krüger meters
    Project {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
    },
    /// Distance between two points in meters
    Distance {
        /// First point as LON,LAT
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: GeoPoint,
        /// Second point as LON,LAT
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: GeoPoint,
        #[arg(long, default_value = "both")]
        method: Method,
        /// Fail instead of warning when the points are in different zones
        #[arg(long)]
        strict: bool,
    },
    /// Convert meters to degrees of longitude at the equator
    Degrees {
        #[arg(allow_negative_numbers = true)]
        meters: f64,
    },
    /// Convert degrees of longitude at the equator to meters
    Meters {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Find points from a JSON file that lie within a radius
    Search {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Radius in meters (defaults to the configured search radius)
        #[arg(short = 'r', long)]
        radius: Option<f64>,
        /// JSON array of {"lon": .., "lat": ..} objects
        #[arg(long)]
        points: PathBuf,
    },
    /// Haversine length of a polyline from a JSON file
    Path {
        #[arg(long)]
        points: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    Planar,
    Haversine,
    Both,
}

#[derive(Serialize)]
struct DistanceReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    planar_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    haversine_m: Option<f64>,
}

#[derive(Serialize)]
struct PathReport {
    points: usize,
    length_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Envelope>,
}

impl PathReport {
    fn new(points: &[GeoPoint]) -> Self {
        Self {
            points: points.len(),
            length_m: path_length(points),
            bounds: Envelope::from_points(points),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref path) => FileConfig::from_path(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    init_logging(args.verbose, file_config.verbose);
    log::debug!("Configuration: {:?}", file_config);

    let precision = file_config.precision;

    match args.command {
        Command::Project { lon, lat } => {
            let p = project(lon, lat);
            if args.json {
                print_json(&p)?;
            } else {
                println!("x: {:.*}", precision, p.x);
                println!("y: {:.*}", precision, p.y);
                println!("zone: {}", p.zone_number());
            }
        }
        Command::Distance {
            from,
            to,
            method,
            strict,
        } => {
            let policy = if strict {
                ZonePolicy::Strict
            } else {
                file_config.zone_policy
            };

            let planar_m = match method {
                Method::Planar | Method::Both => Some(
                    policy
                        .planar_distance(&from, &to)
                        .context("Planar distance unavailable")?,
                ),
                Method::Haversine => None,
            };
            let haversine_m = match method {
                Method::Haversine | Method::Both => {
                    Some(haversine_distance(from.lon, from.lat, to.lon, to.lat))
                }
                Method::Planar => None,
            };

            let report = DistanceReport {
                planar_m,
                haversine_m,
            };
            if args.json {
                print_json(&report)?;
            } else {
                if let Some(d) = report.planar_m {
                    println!("planar:    {:.*} m", precision, d);
                }
                if let Some(d) = report.haversine_m {
                    println!("haversine: {:.*} m", precision, d);
                }
            }
        }
        Command::Degrees { meters } => {
            let deg = meters_to_degrees(meters);
            if args.json {
                print_json(&deg)?;
            } else {
                println!("{}", format_degrees(meters, deg, precision));
            }
        }
        Command::Meters { degrees } => {
            let m = degrees_to_meters(degrees);
            if args.json {
                print_json(&m)?;
            } else {
                println!("{} deg = {:.*} m", degrees, precision, m);
            }
        }
        Command::Search {
            lon,
            lat,
            radius,
            points,
        } => {
            let radius = radius.unwrap_or(file_config.search_radius);
            let candidates = read_points(&points)?;
            let area = SearchArea::new(GeoPoint::new(lon, lat), radius)
                .context("Invalid search area")?;
            let hits = area.filter(&candidates);

            if args.json {
                print_json(&hits)?;
            } else {
                println!(
                    "{} of {} points within {} m ({} deg)",
                    hits.len(),
                    candidates.len(),
                    radius,
                    area.radius_degrees()
                );
                for hit in &hits {
                    println!(
                        "  #{:<4} ({:.6}, {:.6})  {:.*} m",
                        hit.index, hit.point.lon, hit.point.lat, precision, hit.distance_m
                    );
                }
            }
        }
        Command::Path { points } => {
            let pts = read_points(&points)?;
            let report = PathReport::new(&pts);
            if args.json {
                print_json(&report)?;
            } else {
                println!("{} points, {:.*} m", report.points, precision, report.length_m);
                if let Some(env) = report.bounds {
                    println!(
                        "  lon {:.6} .. {:.6}, lat {:.6} .. {:.6} ({:.6} x {:.6} deg)",
                        env.min_lon,
                        env.max_lon,
                        env.min_lat,
                        env.max_lat,
                        env.width(),
                        env.height()
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, config_verbose: bool) {
    let level = match verbosity {
        0 if config_verbose => "debug",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if verbosity > 0 {
        builder.filter_level(if verbosity == 1 {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Trace
        });
    }
    builder.init();
}

fn format_degrees(meters: f64, degrees: f64, precision: usize) -> String {
    format!("{} m = {:.*} deg", meters, precision, degrees)
}

fn parse_point(s: &str) -> Result<GeoPoint> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected LON,LAT, got {:?}", s))?;
    let lon: f64 = lon.trim().parse().context("Failed to parse longitude")?;
    let lat: f64 = lat.trim().parse().context("Failed to parse latitude")?;
    Ok(GeoPoint::new(lon, lat))
}

fn read_points(path: &Path) -> Result<Vec<GeoPoint>> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read points file: {:?}", path))?;
    serde_json::from_str(&contents).context("Failed to parse points JSON")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let p = parse_point("114.032378,30.63673").unwrap();
        assert_eq!(p, GeoPoint::new(114.032378, 30.63673));

        let p = parse_point("-122.4194, 37.7749").unwrap();
        assert_eq!(p, GeoPoint::new(-122.4194, 37.7749));
    }

    #[test]
    fn test_parse_point_rejects_garbage() {
        assert!(parse_point("114.03").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_read_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        std::fs::write(&path, r#"[{"lon":118.9,"lat":31.23},{"lon":118.91,"lat":31.24}]"#)
            .unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1], GeoPoint::new(118.91, 31.24));
    }

    #[test]
    fn test_format_degrees_uses_precision() {
        let deg = meters_to_degrees(1000.0);
        assert_eq!(format_degrees(1000.0, deg, 4), "1000 m = 0.0090 deg");
        assert_eq!(format_degrees(1000.0, deg, 6), "1000 m = 0.008983 deg");
    }

    #[test]
    fn test_path_report_bounds() {
        let pts = [
            GeoPoint::new(118.9, 31.23),
            GeoPoint::new(118.95, 31.20),
            GeoPoint::new(118.92, 31.26),
        ];
        let report = PathReport::new(&pts);
        assert_eq!(report.points, 3);
        assert!(report.length_m > 0.0);
        let env = report.bounds.unwrap();
        assert_eq!(env.min_lon, 118.9);
        assert_eq!(env.max_lon, 118.95);
        assert_eq!(env.min_lat, 31.20);
        assert_eq!(env.max_lat, 31.26);

        let empty = PathReport::new(&[]);
        assert_eq!(empty.length_m, 0.0);
        assert!(empty.bounds.is_none());
    }

    #[test]
    fn test_args_accept_negative_positionals() {
        let args = Args::try_parse_from(["gkdist", "degrees", "-5"]).unwrap();
        match args.command {
            Command::Degrees { meters } => assert_eq!(meters, -5.0),
            other => panic!("unexpected command {:?}", other),
        }

        let args = Args::try_parse_from(["gkdist", "meters", "-0.5"]).unwrap();
        match args.command {
            Command::Meters { degrees } => assert_eq!(degrees, -0.5),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_parse_distance() {
        let args = Args::try_parse_from([
            "gkdist",
            "distance",
            "--from",
            "114.032378,30.63673",
            "--to",
            "114.04038,30.63235",
            "--method",
            "haversine",
        ])
        .unwrap();
        match args.command {
            Command::Distance { method, strict, .. } => {
                assert_eq!(method, Method::Haversine);
                assert!(!strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
