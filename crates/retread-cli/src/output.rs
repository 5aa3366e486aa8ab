//! Output formatting module

use retread_app::app::query_service::{CompanyDetail, ProposalDetail, ProposalWithCompany};
use retread_domain::model::{Company, Proposal, RoiProjection};
use retread_domain::service::{ActivityEntry, ClientStats, CompanySummary, DashboardStats};
use retread_types::{OutputFormat, Result};
use serde::Serialize;

/// Group thousands with spaces and append the currency code: `290 829 CAD`
pub fn format_currency(amount: i64, currency: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} {}", sign, grouped, currency)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_projection(output_format: OutputFormat, projection: &RoiProjection, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(projection);
    }

    print!("{}", projection_table(projection, currency));
    Ok(())
}

fn projection_table(projection: &RoiProjection, currency: &str) -> String {
    let mut lines = vec![
        String::new(),
        "ROI Projection".to_string(),
        "==============".to_string(),
        format!("Annual savings:    {}", format_currency(projection.annual_savings, currency)),
        format!("5-year savings:    {}", format_currency(projection.five_year_savings, currency)),
        format!("ROI:               {}", format_percent(projection.roi_percent)),
        format!("Payback period:    {} months", projection.payback_period_months),
        format!("Cost per km:       {:.3} {}", projection.cost_per_km, currency),
        format!("CO2 reduction:     {:.2} t/year", projection.co2_reduction_tonnes),
        String::new(),
        "--- Cumulative Savings ---".to_string(),
    ];
    for (year, amount) in projection.savings_breakdown.iter().enumerate() {
        lines.push(format!("Year {}:            {}", year + 1, format_currency(*amount, currency)));
    }
    let mut table = lines.join("\n");
    table.push('\n');
    table
}

pub fn output_company(output_format: OutputFormat, company: &Company) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(company);
    }

    println!("\nCompany [{}] {}", company.initials(), company.name);
    println!("ID:          {}", company.id);
    if let Some(ref contact) = company.contact_person {
        println!("Contact:     {}", contact);
    }
    if let Some(ref email) = company.email {
        println!("Email:       {}", email);
    }
    if let Some(ref phone) = company.phone {
        println!("Phone:       {}", phone);
    }
    if let Some(ref address) = company.address {
        println!("Address:     {}", address);
    }
    println!("Created:     {}", company.created_at.format("%Y-%m-%d"));
    Ok(())
}

pub fn output_companies(output_format: OutputFormat, summaries: &[CompanySummary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summaries);
    }

    if summaries.is_empty() {
        println!("No companies found.");
        return Ok(());
    }

    println!("{:<36} {:<28} {:<20} {:>9} {:>12}", "ID", "Name", "Contact", "Proposals", "Last");
    println!("{}", "-".repeat(109));
    for summary in summaries {
        let company = &summary.company;
        let last = summary
            .last_proposal_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<36} {:<28} {:<20} {:>9} {:>12}",
            company.id,
            truncate(&company.name, 28),
            truncate(company.contact_person.as_deref().unwrap_or("-"), 20),
            summary.proposal_count,
            last
        );
    }
    println!("\nTotal: {}", summaries.len());
    Ok(())
}

pub fn output_company_detail(output_format: OutputFormat, detail: &CompanyDetail) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(detail);
    }

    output_company(output_format, &detail.company)?;
    println!("\n--- Proposals ({}) ---", detail.proposals.len());
    for proposal in &detail.proposals {
        println!(
            "{}  {:<12} ROI {:>9}  {}",
            proposal.id,
            proposal.status.label(),
            proposal
                .calculated_roi()
                .map(format_percent)
                .unwrap_or_else(|| "-".to_string()),
            proposal.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

fn print_proposal_summary(proposal: &Proposal, currency: &str) {
    let fleet = &proposal.fleet;
    println!("ID:              {}", proposal.id);
    println!("Status:          {}", proposal.status.label());
    println!(
        "Fleet:           {} x {} at {} km/year",
        fleet.fleet_size,
        fleet.vehicle_type.label(),
        fleet.annual_kilometers
    );
    println!("Fuel price:      {:.2} {}/l", fleet.fuel_price, currency);
    match proposal.results {
        Some(ref results) => {
            println!("Annual savings:  {}", format_currency(results.annual_savings, currency));
            println!("5-year savings:  {}", format_currency(results.five_year_savings, currency));
            println!("ROI:             {}", format_percent(results.calculated_roi));
            println!("Payback:         {} months", results.payback_period);
            println!("CO2 reduction:   {:.2} t/year", results.co2_reduction);
        }
        None => println!("Results:         not calculated"),
    }
    println!("Created:         {}", proposal.created_at.format("%Y-%m-%d %H:%M"));
    println!("Updated:         {}", proposal.updated_at.format("%Y-%m-%d %H:%M"));
}

pub fn output_proposal(output_format: OutputFormat, proposal: &Proposal, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(proposal);
    }

    println!("\nProposal");
    println!("========");
    print_proposal_summary(proposal, currency);
    Ok(())
}

pub fn output_proposals(output_format: OutputFormat, proposals: &[ProposalWithCompany]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(proposals);
    }

    if proposals.is_empty() {
        println!("No proposals found.");
        return Ok(());
    }

    println!("{:<36} {:<24} {:<12} {:>6} {:>9} {:>10}", "ID", "Company", "Status", "Fleet", "ROI", "Date");
    println!("{}", "-".repeat(102));
    for entry in proposals {
        let proposal = &entry.proposal;
        let company = entry
            .company
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("(unknown)");
        println!(
            "{:<36} {:<24} {:<12} {:>6} {:>9} {:>10}",
            proposal.id,
            truncate(company, 24),
            proposal.status.label(),
            proposal.fleet.fleet_size,
            proposal
                .calculated_roi()
                .map(format_percent)
                .unwrap_or_else(|| "-".to_string()),
            proposal.created_at.format("%Y-%m-%d")
        );
    }
    println!("\nTotal: {}", proposals.len());
    Ok(())
}

pub fn output_proposal_detail(output_format: OutputFormat, detail: &ProposalDetail, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(detail);
    }

    println!("\nProposal");
    println!("========");
    if let Some(ref company) = detail.company {
        println!("Company:         {}", company.name);
    }
    print_proposal_summary(&detail.proposal, currency);

    println!("\n--- Calculation History ({}) ---", detail.calculations.len());
    for calc in &detail.calculations {
        println!(
            "{}  {:>4} tires/year  ROI {:>9}  {}",
            calc.created_at.format("%Y-%m-%d %H:%M"),
            calc.environmental_impact.tires_retreaded_per_year,
            format_percent(calc.projection.roi_percent),
            format_currency(calc.projection.annual_savings, currency)
        );
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    dashboard: &'a DashboardStats,
    clients: &'a ClientStats,
}

pub fn output_stats(output_format: OutputFormat, dashboard: &DashboardStats, clients: &ClientStats) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&StatsReport { dashboard, clients });
    }

    println!("\nDashboard");
    println!("=========");
    println!("Proposals this month:  {}", dashboard.proposals_this_month);
    println!("Conversion rate:       {}%", dashboard.conversion_rate);
    println!("Average ROI:           {}%", dashboard.average_roi);
    println!("CO2 saved:             {} t", dashboard.co2_saved);

    println!("\nClients");
    println!("=======");
    println!("Total:                 {}", clients.total);
    println!("With proposals:        {}", clients.with_proposals);
    println!("New this month:        {}", clients.new_this_month);
    Ok(())
}

pub fn output_activity(output_format: OutputFormat, entries: &[ActivityEntry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(entries);
    }

    if entries.is_empty() {
        println!("No recent activity.");
        return Ok(());
    }

    println!("Recent Activity");
    println!("===============");
    for entry in entries {
        println!("{}  {}", entry.timestamp.format("%Y-%m-%d %H:%M"), entry.description);
    }
    Ok(())
}
