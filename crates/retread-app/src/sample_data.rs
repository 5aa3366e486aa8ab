//! Demo companies and proposals for a fresh store

use serde::{Deserialize, Serialize};
use tracing::info;

use retread_domain::model::{FleetProfile, NewCompany, ProposalStatus, VehicleType};
use retread_domain::repository::{CalculationRepository, CompanyRepository, ProposalRepository};
use retread_types::Result;

use crate::app::ProposalService;

struct SampleClient {
    company: fn() -> NewCompany,
    fleet_size: u32,
    annual_kilometers: u32,
    vehicle_type: VehicleType,
    fuel_price: f64,
    status: ProposalStatus,
}

fn transport_leclerc() -> NewCompany {
    NewCompany::named("Transport Leclerc")
        .with_email("contact@transport-leclerc.fr")
        .with_contact("Michel Leclerc")
        .with_phone("+33 1 23 45 67 89")
        .with_address("123 Rue de la Logistique, 75001 Paris")
}

fn logistics_plus() -> NewCompany {
    NewCompany::named("Logistics Plus")
        .with_email("info@logistics-plus.fr")
        .with_contact("Sophie Martin")
        .with_phone("+33 1 98 76 54 32")
        .with_address("456 Avenue du Transport, 69000 Lyon")
}

fn fleet_services() -> NewCompany {
    NewCompany::named("Fleet Services SA")
        .with_email("contact@fleet-services.fr")
        .with_contact("Pierre Dubois")
        .with_phone("+33 1 11 22 33 44")
        .with_address("789 Boulevard de la Flotte, 13000 Marseille")
}

const SAMPLE_CLIENTS: [SampleClient; 3] = [
    SampleClient {
        company: transport_leclerc,
        fleet_size: 87,
        annual_kilometers: 120_000,
        vehicle_type: VehicleType::HeavyTruck,
        fuel_price: 1.45,
        status: ProposalStatus::Accepted,
    },
    SampleClient {
        company: logistics_plus,
        fleet_size: 134,
        annual_kilometers: 150_000,
        vehicle_type: VehicleType::HeavyTruck,
        fuel_price: 1.42,
        status: ProposalStatus::UnderReview,
    },
    SampleClient {
        company: fleet_services,
        fleet_size: 42,
        annual_kilometers: 80_000,
        vehicle_type: VehicleType::MediumTruck,
        fuel_price: 1.48,
        status: ProposalStatus::Sent,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub companies_created: usize,
    pub proposals_created: usize,
    /// Sample companies already present by name
    pub skipped: usize,
}

/// Insert the sample clients that are not already present (matched by name)
pub fn seed_sample_data<C, P, K>(companies: &C, proposals: &P, calculations: &K) -> Result<SeedSummary>
where
    C: CompanyRepository,
    P: ProposalRepository,
    K: CalculationRepository,
{
    let existing: Vec<String> = companies.find_all()?.into_iter().map(|c| c.name).collect();
    let service = ProposalService::new(companies, proposals, calculations);
    let mut summary = SeedSummary::default();

    for sample in &SAMPLE_CLIENTS {
        let new_company = (sample.company)();
        if existing.contains(&new_company.name) {
            summary.skipped += 1;
            continue;
        }
        let company = companies.create(new_company)?;
        summary.companies_created += 1;

        let fleet = FleetProfile::new(
            sample.fleet_size,
            sample.annual_kilometers,
            sample.vehicle_type,
            sample.fuel_price,
        )?;
        service.create_with_status(&company.id, fleet, sample.status)?;
        summary.proposals_created += 1;
    }

    info!(
        companies = summary.companies_created,
        proposals = summary.proposals_created,
        skipped = summary.skipped,
        "sample data seeded"
    );
    Ok(summary)
}
