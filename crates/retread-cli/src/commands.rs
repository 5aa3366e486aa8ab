//! Command handlers

use crate::cli::{Cli, Commands, CompanyCommands, FleetArgs, ProposalCommands};
use crate::output::{
    output_activity, output_companies, output_company, output_company_detail, output_projection,
    output_proposal, output_proposal_detail, output_proposals, output_stats,
};
use chrono::Utc;
use retread_app::app::{self, query_service};
use retread_app::config::Config;
use retread_app::repository::{open_repositories, Repositories};
use retread_app::sample_data::seed_sample_data;
use retread_domain::model::{FleetProfile, NewCompany, ProposalStatus};
use retread_domain::repository::CompanyRepository;
use retread_types::{Error, OutputFormat, Result, StoreError};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref store_dir) = cli.store_dir {
        config.store_dir = Some(store_dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(format = %output_format, "config loaded");

    match &cli.command {
        Commands::Calculate { fleet } => cmd_calculate(&config, output_format, fleet),

        Commands::Company { action } => {
            let repos = open_repositories(&config)?;
            match action {
                CompanyCommands::Add {
                    name,
                    email,
                    contact,
                    phone,
                    address,
                } => {
                    let new_company = NewCompany {
                        name: name.clone(),
                        email: email.clone(),
                        contact_person: contact.clone(),
                        phone: phone.clone(),
                        address: address.clone(),
                    };
                    cmd_company_add(&repos, output_format, new_company)
                }
                CompanyCommands::List { search } => cmd_company_list(&repos, output_format, search.as_deref()),
                CompanyCommands::Show { id } => cmd_company_show(&repos, output_format, id),
            }
        }

        Commands::Proposal { action } => {
            let repos = open_repositories(&config)?;
            match action {
                ProposalCommands::Create { company, fleet } => {
                    cmd_proposal_create(&repos, &config, output_format, company, fleet)
                }
                ProposalCommands::List { company } => {
                    cmd_proposal_list(&repos, output_format, company.as_deref())
                }
                ProposalCommands::Show { id } => cmd_proposal_show(&repos, &config, output_format, id),
                ProposalCommands::Status { id, status } => {
                    cmd_proposal_status(&repos, &config, output_format, id, *status)
                }
                ProposalCommands::Recalculate { id, fleet } => {
                    cmd_proposal_recalculate(&repos, &config, output_format, id, fleet)
                }
            }
        }

        Commands::Stats => cmd_stats(&config, output_format),

        Commands::Activity { limit } => {
            let limit = limit.unwrap_or(config.recent_activity_limit);
            cmd_activity(&config, output_format, limit)
        }

        Commands::Seed => cmd_seed(&config, output_format),

        Commands::Config {
            show,
            set_output,
            set_store_dir,
            set_currency,
            set_activity_limit,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_store_dir.clone(),
            set_currency.clone(),
            *set_activity_limit,
            *reset,
        ),
    }
}

fn fleet_profile(fleet: &FleetArgs, company_id: Option<String>) -> Result<FleetProfile> {
    Ok(FleetProfile::try_from(&fleet.to_request(company_id))?)
}

fn cmd_calculate(config: &Config, output_format: OutputFormat, fleet: &FleetArgs) -> Result<()> {
    let projection = app::calculate(&fleet.to_request(None))?;
    output_projection(output_format, &projection, &config.currency)
}

// ============================================================================
// Companies
// ============================================================================

fn cmd_company_add(repos: &Repositories, output_format: OutputFormat, new_company: NewCompany) -> Result<()> {
    if new_company.name.trim().is_empty() {
        return Err(Error::InvalidArgument("company name must not be empty".to_string()));
    }
    let company = repos.companies.create(new_company)?;
    if output_format == OutputFormat::Table {
        println!("Company registered: {}", company.id);
    }
    output_company(output_format, &company)
}

fn cmd_company_list(repos: &Repositories, output_format: OutputFormat, search: Option<&str>) -> Result<()> {
    let summaries = query_service::company_summaries(&repos.companies, &repos.proposals, search)?;
    output_companies(output_format, &summaries)
}

fn cmd_company_show(repos: &Repositories, output_format: OutputFormat, id: &str) -> Result<()> {
    let detail = query_service::company_detail(&repos.companies, &repos.proposals, id)?.ok_or_else(|| {
        StoreError::NotFound {
            entity: "Company",
            id: id.to_string(),
        }
    })?;
    output_company_detail(output_format, &detail)
}

// ============================================================================
// Proposals
// ============================================================================

fn cmd_proposal_create(
    repos: &Repositories,
    config: &Config,
    output_format: OutputFormat,
    company_id: &str,
    fleet: &FleetArgs,
) -> Result<()> {
    let fleet = fleet_profile(fleet, Some(company_id.to_string()))?;
    let record = repos.proposal_service().create(company_id, fleet)?;
    output_proposal(output_format, &record.proposal, &config.currency)
}

fn cmd_proposal_list(repos: &Repositories, output_format: OutputFormat, company_id: Option<&str>) -> Result<()> {
    let proposals = query_service::proposals_with_company(&repos.companies, &repos.proposals, company_id)?;
    output_proposals(output_format, &proposals)
}

fn cmd_proposal_show(repos: &Repositories, config: &Config, output_format: OutputFormat, id: &str) -> Result<()> {
    let detail = query_service::proposal_detail(&repos.companies, &repos.proposals, &repos.calculations, id)?
        .ok_or_else(|| StoreError::NotFound {
            entity: "Proposal",
            id: id.to_string(),
        })?;
    output_proposal_detail(output_format, &detail, &config.currency)
}

fn cmd_proposal_status(
    repos: &Repositories,
    config: &Config,
    output_format: OutputFormat,
    id: &str,
    status: ProposalStatus,
) -> Result<()> {
    let proposal = repos.proposal_service().update_status(id, status)?;
    output_proposal(output_format, &proposal, &config.currency)
}

fn cmd_proposal_recalculate(
    repos: &Repositories,
    config: &Config,
    output_format: OutputFormat,
    id: &str,
    fleet: &FleetArgs,
) -> Result<()> {
    let fleet = fleet_profile(fleet, None)?;
    let record = repos.proposal_service().recalculate(id, fleet)?;
    output_proposal(output_format, &record.proposal, &config.currency)
}

// ============================================================================
// Dashboard
// ============================================================================

fn cmd_stats(config: &Config, output_format: OutputFormat) -> Result<()> {
    let repos = open_repositories(config)?;
    let today = Utc::now().date_naive();
    let dashboard = query_service::dashboard(&repos.proposals, today)?;
    let clients = query_service::client_overview(&repos.companies, &repos.proposals, today)?;
    output_stats(output_format, &dashboard, &clients)
}

fn cmd_activity(config: &Config, output_format: OutputFormat, limit: usize) -> Result<()> {
    let repos = open_repositories(config)?;
    let entries = query_service::activity(&repos.companies, &repos.proposals, limit)?;
    output_activity(output_format, &entries)
}

fn cmd_seed(config: &Config, output_format: OutputFormat) -> Result<()> {
    let repos = open_repositories(config)?;
    let summary = seed_sample_data(&repos.companies, &repos.proposals, &repos.calculations)?;

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Sample data seeded");
        println!("  Companies created: {}", summary.companies_created);
        println!("  Proposals created: {}", summary.proposals_created);
        println!("  Already present:   {}", summary.skipped);
    }
    Ok(())
}

// ============================================================================
// Configuration
// ============================================================================

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_store_dir: Option<PathBuf>,
    set_currency: Option<String>,
    set_activity_limit: Option<usize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(currency) = set_currency {
        let currency = currency.trim().to_uppercase();
        if currency.is_empty() {
            return Err(Error::InvalidArgument("currency must not be empty".to_string()));
        }
        config.currency = currency;
        modified = true;
    }

    if let Some(limit) = set_activity_limit {
        if limit == 0 {
            return Err(Error::InvalidArgument("activity limit must be at least 1".to_string()));
        }
        config.recent_activity_limit = limit;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
