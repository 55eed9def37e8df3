//! Main application logic.
//!
//! `Application` merges the configuration file with command-line overrides,
//! builds the routing context once and runs the requested calculation.

use crate::{
    cli::{CliArgs, RoutingCommand},
    config::AppConfig,
    error::ToolError,
};
use routing_defs::{
    compute_routing_cost, derive_replication_mask, expand_multicast_group, Coord, ReplicationId,
    RoutingContext, RoutingCoord, RoutingCost, RoutingDirection, RoutingLevel,
};
use serde::Serialize;
use tracing::{debug, info};

/// Result of one routing command, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Cost {
        n_core: u32,
        cost: RoutingCost,
        containing_level: RoutingLevel,
    },
    Coord {
        path: RoutingCoord,
        level: RoutingLevel,
        coordinate: Option<Coord>,
    },
    Rid {
        base: Coord,
        rid: ReplicationId,
    },
    Expand {
        base: Coord,
        rid: ReplicationId,
        cores: Vec<Coord>,
    },
    Children {
        coord_y_priority: bool,
        order: Vec<RoutingDirection>,
    },
}

impl Report {
    /// Human-readable rendering, one fact per line.
    pub fn to_text(&self) -> String {
        match self {
            Report::Cost { n_core, cost, containing_level } => format!(
                "n_core: {n_core}\ncost: {cost}\ncontaining level: {containing_level}"
            ),
            Report::Coord { path, level, coordinate } => match coordinate {
                Some(coord) => format!("path: {path}\nlevel: {level}\ncoordinate: {coord}"),
                None => format!("path: {path}\nlevel: {level}\ncoordinate: n/a"),
            },
            Report::Rid { base, rid } => format!("base: {base}\nrid: {rid}"),
            Report::Expand { base, rid, cores } => {
                let cores: Vec<String> = cores.iter().map(|c| c.to_string()).collect();
                format!(
                    "base: {base}\nrid: {rid}\ncores ({}): {}",
                    cores.len(),
                    cores.join(" ")
                )
            }
            Report::Children { coord_y_priority, order } => {
                let order: Vec<String> = order.iter().map(|d| d.to_string()).collect();
                format!(
                    "priority: {}\norder: {}",
                    if *coord_y_priority { "Y" } else { "X" },
                    order.join(" ")
                )
            }
        }
    }
}

/// Runs a single routing command against `ctx`.
pub fn execute(ctx: &RoutingContext, command: &RoutingCommand) -> Result<Report, ToolError> {
    debug!("Executing {:?}", command);

    let report = match command {
        RoutingCommand::Cost { n_core } => {
            let cost = compute_routing_cost(ctx, *n_core);
            Report::Cost {
                n_core: *n_core,
                cost,
                containing_level: cost.minimal_containing_level(),
            }
        }
        RoutingCommand::Coord { path } => {
            let path = RoutingCoord::from_path(*path)?;
            let level = path.level();
            let coordinate = if level == RoutingLevel::L0 {
                Some(path.coordinate()?)
            } else {
                None
            };
            Report::Coord { path, level, coordinate }
        }
        RoutingCommand::Rid { coords } => Report::Rid {
            base: coords.first().copied().unwrap_or_default(),
            rid: derive_replication_mask(coords)?,
        },
        RoutingCommand::Expand { base, rid } => {
            let width = ctx.coord_width();
            if rid.x >> width != 0 || rid.y >> width != 0 {
                return Err(ToolError::InvalidArgument(format!(
                    "replication mask {rid} exceeds the {width}-bit coordinate width"
                )));
            }

            let mut cores: Vec<Coord> = expand_multicast_group(ctx, *base, *rid).into_iter().collect();
            cores.sort();
            Report::Expand { base: *base, rid: *rid, cores }
        }
        RoutingCommand::Children => Report::Children {
            coord_y_priority: ctx.hw().coord_y_priority,
            order: ctx.child_directions().to_vec(),
        },
    };

    Ok(report)
}

/// The routing tool with its merged configuration.
pub struct Application {
    config: AppConfig,
    context: RoutingContext,
    args: CliArgs,
}

impl Application {
    /// Loads configuration, applies CLI overrides, validates, and builds
    /// the routing context.
    pub fn new(args: CliArgs) -> Result<Self, ToolError> {
        let mut config = AppConfig::load_from_file(&args.config_path)?;
        Self::apply_overrides(&mut config, &args);
        Self::with_config(config, args)
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(config: AppConfig, args: CliArgs) -> Result<Self, ToolError> {
        config.validate().map_err(ToolError::InvalidConfig)?;
        let context = config.to_routing_context()?;

        info!(
            "✅ Configuration loaded from {} (branching factor {}, {}-bit coordinates)",
            args.config_path.display(),
            context.branching_factor(),
            context.coord_width()
        );

        Ok(Self { config, context, args })
    }

    fn apply_overrides(config: &mut AppConfig, args: &CliArgs) {
        if let Some(log_level) = &args.log_level {
            config.logging.level = log_level.clone();
        }

        if args.json_logs {
            config.logging.json_format = true;
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs the requested command and renders its output.
    pub fn run(&self) -> Result<String, ToolError> {
        let report = execute(&self.context, &self.args.command)?;

        if self.args.json_output {
            Ok(serde_json::to_string_pretty(&report)?)
        } else {
            Ok(report.to_text())
        }
    }
}
