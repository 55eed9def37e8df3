//! Command-line interface handling for the routing tool.
//!
//! This module provides command-line argument parsing using the `clap`
//! crate. Coordinates, masks and directions are parsed into their routing
//! types here so the rest of the tool only sees validated values.

use clap::{error::ErrorKind, Arg, ArgMatches, Command};
use routing_defs::{Coord, ReplicationId, RoutingDirection, ROUTING_PATH_LEN};
use std::ffi::OsString;
use std::path::PathBuf;

/// The routing calculation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingCommand {
    /// Per-level node counts for a number of cores
    Cost { n_core: u32 },
    /// Level and coordinate of a routing path, L4 first
    Coord { path: [RoutingDirection; ROUTING_PATH_LEN] },
    /// Replication mask covering a set of coordinates
    Rid { coords: Vec<Coord> },
    /// Cores addressed by a base coordinate and mask
    Expand { base: Coord, rid: ReplicationId },
    /// Children iteration order of the configured hardware
    Children,
}

/// Command line arguments parsed from user input.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Optional override for log level
    pub log_level: Option<String>,
    /// Whether to force JSON log output
    pub json_logs: bool,
    /// Whether to print results as JSON
    pub json_output: bool,
    pub command: RoutingCommand,
}

impl CliArgs {
    /// Parses the process arguments, exiting with usage on error.
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses arguments from an explicit iterator (first item is the binary name).
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_command().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let command = match matches.subcommand() {
            Some(("cost", sub)) => RoutingCommand::Cost {
                n_core: *sub
                    .get_one::<u32>("n_core")
                    .ok_or_else(|| missing("N_CORE"))?,
            },
            Some(("coord", sub)) => {
                let path: Vec<RoutingDirection> = sub
                    .get_many::<RoutingDirection>("path")
                    .ok_or_else(|| missing("PATH"))?
                    .copied()
                    .collect();
                let path = <[RoutingDirection; ROUTING_PATH_LEN]>::try_from(path).map_err(|p| {
                    clap::Error::raw(
                        ErrorKind::WrongNumberOfValues,
                        format!("expected {ROUTING_PATH_LEN} directions, got {}\n", p.len()),
                    )
                })?;
                RoutingCommand::Coord { path }
            }
            Some(("rid", sub)) => RoutingCommand::Rid {
                coords: sub
                    .get_many::<Coord>("coords")
                    .ok_or_else(|| missing("COORDS"))?
                    .copied()
                    .collect(),
            },
            Some(("expand", sub)) => RoutingCommand::Expand {
                base: *sub.get_one::<Coord>("base").ok_or_else(|| missing("BASE"))?,
                rid: *sub.get_one::<ReplicationId>("rid").ok_or_else(|| missing("RID"))?,
            },
            Some(("children", _)) => RoutingCommand::Children,
            _ => {
                return Err(clap::Error::raw(
                    ErrorKind::MissingSubcommand,
                    "a routing command is required\n",
                ))
            }
        };

        Ok(Self {
            config_path: matches
                .get_one::<String>("config")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("routing.toml")),
            log_level: matches.get_one::<String>("log-level").cloned(),
            json_logs: matches.get_flag("json-logs"),
            json_output: matches.get_flag("json"),
            command,
        })
    }
}

fn missing(name: &str) -> clap::Error {
    clap::Error::raw(ErrorKind::MissingRequiredArgument, format!("missing {name}\n"))
}

fn build_command() -> Command {
    Command::new("routing")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Routing tree addressing and multicast masks for on-chip interconnects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("routing.toml")
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
                .global(true),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .help("Output logs in JSON format")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("cost")
                .about("Routing nodes required per level for a number of cores")
                .arg(
                    Arg::new("n_core")
                        .value_name("N_CORE")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("coord")
                .about("Level and mesh coordinate of a routing path (L4 first; 00, 01, 10, 11 or *)")
                .arg(
                    Arg::new("path")
                        .value_name("DIR")
                        .required(true)
                        .num_args(ROUTING_PATH_LEN)
                        .value_parser(parse_direction),
                ),
        )
        .subcommand(
            Command::new("rid")
                .about("Replication mask covering the given coordinates (first one is the base)")
                .arg(
                    Arg::new("coords")
                        .value_name("X,Y")
                        .required(true)
                        .num_args(1..)
                        .value_parser(parse_coord),
                ),
        )
        .subcommand(
            Command::new("expand")
                .about("Cores addressed by a base coordinate and a replication mask")
                .arg(
                    Arg::new("base")
                        .value_name("X,Y")
                        .required(true)
                        .value_parser(parse_coord),
                )
                .arg(
                    Arg::new("rid")
                        .value_name("MASK_X,MASK_Y")
                        .required(true)
                        .value_parser(parse_rid),
                ),
        )
        .subcommand(Command::new("children").about("Children iteration order of the configured hardware"))
}

/// Parses a direction written as its quadrant bits `XY`, or `*` / `any`.
pub fn parse_direction(s: &str) -> Result<RoutingDirection, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "00" => Ok(RoutingDirection::X0Y0),
        "01" => Ok(RoutingDirection::X0Y1),
        "10" => Ok(RoutingDirection::X1Y0),
        "11" => Ok(RoutingDirection::X1Y1),
        "*" | "any" => Ok(RoutingDirection::Any),
        other => Err(format!("invalid direction '{other}', expected 00, 01, 10, 11 or *")),
    }
}

/// Parses one integer in decimal, `0b` binary or `0x` hex notation.
fn parse_value(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };

    parsed.map_err(|e| format!("invalid value '{s}': {e}"))
}

fn parse_pair(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    Ok((parse_value(x)?, parse_value(y)?))
}

/// Parses a coordinate written as `X,Y`.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    parse_pair(s).map(|(x, y)| Coord::new(x, y))
}

/// Parses a replication mask written as `MASK_X,MASK_Y`.
pub fn parse_rid(s: &str) -> Result<ReplicationId, String> {
    parse_pair(s).map(|(x, y)| ReplicationId::new(x, y))
}
