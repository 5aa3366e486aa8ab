//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use retread_domain::model::{ProposalStatus, RoiRequest};
use retread_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retread")]
#[command(version)]
#[command(about = "Tire retreading ROI projections and client proposals")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override for this invocation
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Fleet parameters shared by the calculating commands
#[derive(Args, Debug, Clone)]
pub struct FleetArgs {
    /// Number of vehicles (1-10000)
    #[arg(long, short = 's')]
    pub fleet_size: i64,

    /// Kilometers driven per vehicle per year (1000-1000000)
    #[arg(long, short = 'k')]
    pub annual_km: i64,

    /// Vehicle type (heavy_truck, medium_truck, light_utility, bus)
    #[arg(long, short = 't')]
    pub vehicle_type: String,

    /// Fuel price per liter (0.5-5.0)
    #[arg(long, short = 'p')]
    pub fuel_price: f64,
}

impl FleetArgs {
    pub fn to_request(&self, company_id: Option<String>) -> RoiRequest {
        RoiRequest {
            fleet_size: self.fleet_size,
            annual_kilometers: self.annual_km,
            vehicle_type: self.vehicle_type.clone(),
            fuel_price: self.fuel_price,
            company_id,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project retreading savings for a fleet without storing anything
    Calculate {
        #[command(flatten)]
        fleet: FleetArgs,
    },

    /// Manage client companies
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },

    /// Manage proposals
    Proposal {
        #[command(subcommand)]
        action: ProposalCommands,
    },

    /// Show dashboard and client statistics
    Stats,

    /// Show recent proposal activity
    Activity {
        /// Number of entries. Uses config value if not specified.
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Insert the demo companies and proposals
    Seed,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set currency code shown after amounts
        #[arg(long)]
        set_currency: Option<String>,

        /// Set number of recent activity entries
        #[arg(long)]
        set_activity_limit: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Register a client company
    Add {
        /// Company name
        name: String,

        #[arg(long)]
        email: Option<String>,

        /// Contact person
        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// List companies with their proposal counts
    List {
        /// Filter by name, contact person or email
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a company and its proposals
    Show {
        /// Company id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProposalCommands {
    /// Calculate and store a draft proposal for a company
    Create {
        /// Company id
        #[arg(long, short = 'c')]
        company: String,

        #[command(flatten)]
        fleet: FleetArgs,
    },

    /// List proposals, newest first
    List {
        /// Only proposals for this company id
        #[arg(long, short = 'c')]
        company: Option<String>,
    },

    /// Show a proposal with its calculation history
    Show {
        /// Proposal id
        id: String,
    },

    /// Change the status of a proposal
    Status {
        /// Proposal id
        id: String,

        /// New status (draft, sent, under_review, accepted, rejected)
        status: ProposalStatus,
    },

    /// Replace the fleet parameters of a proposal and recompute it
    Recalculate {
        /// Proposal id
        id: String,

        #[command(flatten)]
        fleet: FleetArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::parse_from([
            "retread", "calculate", "-s", "87", "-k", "120000", "-t", "heavy_truck", "-p", "1.55",
        ]);
        match cli.command {
            Commands::Calculate { fleet } => {
                let request = fleet.to_request(None);
                assert_eq!(request.fleet_size, 87);
                assert_eq!(request.annual_kilometers, 120_000);
                assert_eq!(request.vehicle_type, "heavy_truck");
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::parse_from(["retread", "proposal", "status", "abc", "under_review", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Proposal {
                action: ProposalCommands::Status { id, status },
            } => {
                assert_eq!(id, "abc");
                assert_eq!(status, ProposalStatus::UnderReview);
            }
            _ => panic!("expected proposal status"),
        }
    }

    #[test]
    fn test_fleet_help_matches_validation_ranges() {
        use retread_domain::model::fleet::{ANNUAL_KILOMETERS_RANGE, FLEET_SIZE_RANGE};

        let command = Cli::command();
        let calculate = command.find_subcommand("calculate").unwrap();
        let help_of = |id: &str| {
            calculate
                .get_arguments()
                .find(|a| a.get_id() == id)
                .and_then(|a| a.get_help())
                .map(|h| h.to_string())
                .unwrap()
        };

        let km_range = format!("({}-{})", ANNUAL_KILOMETERS_RANGE.start(), ANNUAL_KILOMETERS_RANGE.end());
        assert!(help_of("annual_km").contains(&km_range));
        let size_range = format!("({}-{})", FLEET_SIZE_RANGE.start(), FLEET_SIZE_RANGE.end());
        assert!(help_of("fleet_size").contains(&size_range));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let result = Cli::try_parse_from(["retread", "proposal", "status", "abc", "lost"]);
        assert!(result.is_err());
    }
}
