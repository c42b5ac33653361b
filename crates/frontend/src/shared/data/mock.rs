//! Mock records for every list page.
//!
//! Lists clone these on mount and then own their copy; edits never write back
//! here.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contracts::domain::a001_company::aggregate::{Company, CompanyId, CompanyStatus};
use contracts::domain::a002_equipment::aggregate::{
    Equipment, EquipmentCategory, EquipmentCondition, EquipmentId,
};
use contracts::domain::a003_staff::aggregate::{Department, Staff, StaffId};
use contracts::domain::a004_outsourced_worker::aggregate::{
    Availability, OutsourcedWorker, OutsourcedWorkerId,
};
use contracts::domain::a005_event::aggregate::{Event, EventId, EventStatus};
use contracts::domain::a006_package::aggregate::{Package, PackageId, PackageTier};
use contracts::domain::attachments::{Attachment, AttachmentKind};
use contracts::domain::common::EntityMetadata;
use once_cell::sync::Lazy;
use uuid::Uuid;

fn created(y: i32, m: u32, d: u32) -> EntityMetadata {
    let at: DateTime<Utc> = Utc
        .with_ymd_and_hms(y, m, d, 9, 0, 0)
        .single()
        .unwrap_or_default();
    EntityMetadata::created_at(at)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

const COMPANY_NORTHWIND: u128 = 0x0001_0000_0000_0000_0000_0000_0000_0001;
const COMPANY_HELIX: u128 = 0x0001_0000_0000_0000_0000_0000_0000_0002;
const COMPANY_BLUE_HARBOR: u128 = 0x0001_0000_0000_0000_0000_0000_0000_0003;
const COMPANY_ORBITAL: u128 = 0x0001_0000_0000_0000_0000_0000_0000_0004;

static COMPANIES: Lazy<Vec<Company>> = Lazy::new(|| {
    let mut northwind = Company::new_with_id(
        CompanyId::new(Uuid::from_u128(COMPANY_NORTHWIND)),
        "CMP-001",
        "Northwind Traders",
        "Retail",
        "events@northwind.example",
        "+1 555 0100",
        CompanyStatus::Active,
        created(2024, 1, 15),
    );
    northwind.attachments = vec![
        Attachment::stored(
            "cmp-001-contract",
            "service-agreement-2024.pdf",
            AttachmentKind::Pdf,
            "1.24 MB",
            "/files/companies/cmp-001/service-agreement-2024.pdf",
        ),
        Attachment::stored(
            "cmp-001-logo",
            "northwind-logo.png",
            AttachmentKind::Image,
            "0.35 MB",
            "/files/companies/cmp-001/northwind-logo.png",
        ),
    ];

    let mut helix = Company::new_with_id(
        CompanyId::new(Uuid::from_u128(COMPANY_HELIX)),
        "CMP-002",
        "Helix Biotech",
        "Pharmaceuticals",
        "office@helix.example",
        "+1 555 0142",
        CompanyStatus::Active,
        created(2024, 3, 2),
    );
    helix.attachments = vec![Attachment::stored(
        "cmp-002-nda",
        "mutual-nda.docx",
        AttachmentKind::DocumentOther,
        "0.08 MB",
        "/files/companies/cmp-002/mutual-nda.docx",
    )];

    vec![
        northwind,
        helix,
        Company::new_with_id(
            CompanyId::new(Uuid::from_u128(COMPANY_BLUE_HARBOR)),
            "CMP-003",
            "Blue Harbor Logistics",
            "Transport",
            "hello@blueharbor.example",
            "+1 555 0177",
            CompanyStatus::Prospect,
            created(2024, 6, 20),
        ),
        Company::new_with_id(
            CompanyId::new(Uuid::from_u128(COMPANY_ORBITAL)),
            "CMP-004",
            "Orbital Media Group",
            "Media",
            "",
            "+1 555 0190",
            CompanyStatus::Inactive,
            created(2023, 11, 5),
        ),
    ]
});

static EQUIPMENT: Lazy<Vec<Equipment>> = Lazy::new(|| {
    vec![
        Equipment::new_with_id(
            EquipmentId::new(Uuid::from_u128(0x0002_0000_0000_0000_0000_0000_0000_0001)),
            "EQ-001",
            "Line array speaker set",
            EquipmentCategory::Audio,
            "LA-2291-X",
            EquipmentCondition::Available,
            created(2023, 9, 1),
        ),
        Equipment::new_with_id(
            EquipmentId::new(Uuid::from_u128(0x0002_0000_0000_0000_0000_0000_0000_0002)),
            "EQ-002",
            "Moving head spot (x12)",
            EquipmentCategory::Lighting,
            "MH-7781",
            EquipmentCondition::InUse,
            created(2023, 9, 1),
        ),
        Equipment::new_with_id(
            EquipmentId::new(Uuid::from_u128(0x0002_0000_0000_0000_0000_0000_0000_0003)),
            "EQ-003",
            "LED wall 4x3 m",
            EquipmentCategory::Video,
            "LED-4030-A",
            EquipmentCondition::Maintenance,
            created(2024, 2, 11),
        ),
        Equipment::new_with_id(
            EquipmentId::new(Uuid::from_u128(0x0002_0000_0000_0000_0000_0000_0000_0004)),
            "EQ-004",
            "Modular stage deck 8x4",
            EquipmentCategory::Staging,
            "SD-0804",
            EquipmentCondition::Available,
            created(2024, 4, 18),
        ),
        Equipment::new_with_id(
            EquipmentId::new(Uuid::from_u128(0x0002_0000_0000_0000_0000_0000_0000_0005)),
            "EQ-005",
            "Wireless microphone kit",
            EquipmentCategory::Audio,
            "WM-1120",
            EquipmentCondition::InUse,
            created(2024, 5, 3),
        ),
    ]
});

static STAFF: Lazy<Vec<Staff>> = Lazy::new(|| {
    vec![
        Staff::new_with_id(
            StaffId::new(Uuid::from_u128(0x0003_0000_0000_0000_0000_0000_0000_0001)),
            "STF-001",
            "Maria Lopez",
            "Event manager",
            "maria.lopez@console.example",
            "+1 555 0201",
            Department::Operations,
            created(2022, 8, 1),
        ),
        Staff::new_with_id(
            StaffId::new(Uuid::from_u128(0x0003_0000_0000_0000_0000_0000_0000_0002)),
            "STF-002",
            "Daniel Kim",
            "Sound engineer",
            "daniel.kim@console.example",
            "+1 555 0202",
            Department::Technical,
            created(2023, 1, 9),
        ),
        Staff::new_with_id(
            StaffId::new(Uuid::from_u128(0x0003_0000_0000_0000_0000_0000_0000_0003)),
            "STF-003",
            "Priya Shah",
            "Account executive",
            "priya.shah@console.example",
            "+1 555 0203",
            Department::Sales,
            created(2023, 4, 17),
        ),
        Staff::new_with_id(
            StaffId::new(Uuid::from_u128(0x0003_0000_0000_0000_0000_0000_0000_0004)),
            "STF-004",
            "Tom Becker",
            "Office administrator",
            "tom.becker@console.example",
            "",
            Department::Administration,
            created(2021, 10, 25),
        ),
    ]
});

static OUTSOURCED_WORKERS: Lazy<Vec<OutsourcedWorker>> = Lazy::new(|| {
    vec![
        OutsourcedWorker::new_with_id(
            OutsourcedWorkerId::new(Uuid::from_u128(0x0004_0000_0000_0000_0000_0000_0000_0001)),
            "OW-001",
            "Lena Fischer",
            "StageCrew Partners",
            "Rigging",
            320.0,
            Availability::Available,
            created(2024, 1, 30),
        ),
        OutsourcedWorker::new_with_id(
            OutsourcedWorkerId::new(Uuid::from_u128(0x0004_0000_0000_0000_0000_0000_0000_0002)),
            "OW-002",
            "Marco Rossi",
            "StageCrew Partners",
            "Lighting operator",
            280.0,
            Availability::Booked,
            created(2024, 2, 14),
        ),
        OutsourcedWorker::new_with_id(
            OutsourcedWorkerId::new(Uuid::from_u128(0x0004_0000_0000_0000_0000_0000_0000_0003)),
            "OW-003",
            "Aisha Bello",
            "Hospitality Pros",
            "Catering lead",
            250.0,
            Availability::Unavailable,
            created(2024, 7, 8),
        ),
    ]
});

static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    let mut summit = Event::new_with_id(
        EventId::new(Uuid::from_u128(0x0005_0000_0000_0000_0000_0000_0000_0001)),
        "EVT-001",
        "Northwind Annual Summit",
        "Grand Convention Hall",
        date(2025, 3, 12),
        date(2025, 3, 14),
        Some(CompanyId::new(Uuid::from_u128(COMPANY_NORTHWIND))),
        EventStatus::Confirmed,
        created(2024, 10, 2),
    );
    summit.attachments = vec![
        Attachment::stored(
            "evt-001-floorplan",
            "floor-plan.pdf",
            AttachmentKind::Pdf,
            "2.34 MB",
            "/files/events/evt-001/floor-plan.pdf",
        ),
        Attachment::stored(
            "evt-001-stage",
            "stage-render.jpg",
            AttachmentKind::Image,
            "3.00 MB",
            "/files/events/evt-001/stage-render.jpg",
        ),
        Attachment::stored(
            "evt-001-runsheet",
            "run-sheet.xlsx",
            AttachmentKind::DocumentOther,
            "0.12 MB",
            "/files/events/evt-001/run-sheet.xlsx",
        ),
    ];

    let mut launch = Event::new_with_id(
        EventId::new(Uuid::from_u128(0x0005_0000_0000_0000_0000_0000_0000_0002)),
        "EVT-002",
        "Helix Product Launch",
        "Riverside Pavilion",
        date(2025, 5, 20),
        date(2025, 5, 20),
        Some(CompanyId::new(Uuid::from_u128(COMPANY_HELIX))),
        EventStatus::Planned,
        created(2025, 1, 7),
    );
    launch.attachments = vec![Attachment::stored(
        "evt-002-brief",
        "creative-brief.pdf",
        AttachmentKind::Pdf,
        "0.86 MB",
        "/files/events/evt-002/creative-brief.pdf",
    )];

    vec![
        summit,
        launch,
        Event::new_with_id(
            EventId::new(Uuid::from_u128(0x0005_0000_0000_0000_0000_0000_0000_0003)),
            "EVT-003",
            "Winter Gala",
            "Harbor View Ballroom",
            date(2024, 12, 14),
            date(2024, 12, 14),
            None,
            EventStatus::Completed,
            created(2024, 6, 1),
        ),
        Event::new_with_id(
            EventId::new(Uuid::from_u128(0x0005_0000_0000_0000_0000_0000_0000_0004)),
            "EVT-004",
            "Orbital Press Day",
            "Studio 5",
            date(2025, 2, 3),
            date(2025, 2, 4),
            Some(CompanyId::new(Uuid::from_u128(COMPANY_ORBITAL))),
            EventStatus::Cancelled,
            created(2024, 11, 19),
        ),
    ]
});

static PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new_with_id(
            PackageId::new(Uuid::from_u128(0x0006_0000_0000_0000_0000_0000_0000_0001)),
            "PKG-001",
            "Meeting room essentials",
            PackageTier::Basic,
            1200.0,
            &["Projector", "2 wireless microphones", "Technician (4 h)"],
            created(2024, 1, 3),
        ),
        Package::new_with_id(
            PackageId::new(Uuid::from_u128(0x0006_0000_0000_0000_0000_0000_0000_0002)),
            "PKG-002",
            "Conference day",
            PackageTier::Standard,
            4800.0,
            &["Line array", "LED wall", "Stage deck", "2 technicians"],
            created(2024, 1, 3),
        ),
        Package::new_with_id(
            PackageId::new(Uuid::from_u128(0x0006_0000_0000_0000_0000_0000_0000_0003)),
            "PKG-003",
            "Full production",
            PackageTier::Premium,
            15500.0,
            &[
                "Full audio system",
                "Moving head rig",
                "LED wall",
                "Stage with rigging",
                "Crew of 8",
                "Event manager",
            ],
            created(2024, 2, 20),
        ),
    ]
});

pub fn companies() -> Vec<Company> {
    COMPANIES.clone()
}

pub fn equipment() -> Vec<Equipment> {
    EQUIPMENT.clone()
}

pub fn staff() -> Vec<Staff> {
    STAFF.clone()
}

pub fn outsourced_workers() -> Vec<OutsourcedWorker> {
    OUTSOURCED_WORKERS.clone()
}

pub fn events() -> Vec<Event> {
    EVENTS.clone()
}

pub fn packages() -> Vec<Package> {
    PACKAGES.clone()
}

/// Display name of a mock company, for event rows
pub fn company_name(id: &CompanyId) -> Option<String> {
    COMPANIES
        .iter()
        .find(|c| &c.base.id == id)
        .map(|c| c.base.description.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::attachments::HasAttachments;
    use std::collections::HashSet;

    #[test]
    fn test_every_fixture_validates() {
        assert!(companies().iter().all(|c| c.validate().is_ok()));
        assert!(equipment().iter().all(|e| e.validate().is_ok()));
        assert!(staff().iter().all(|s| s.validate().is_ok()));
        assert!(outsourced_workers().iter().all(|w| w.validate().is_ok()));
        assert!(events().iter().all(|e| e.validate().is_ok()));
        assert!(packages().iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn test_attachment_ids_unique_per_parent() {
        for event in events() {
            let ids: HashSet<_> = event.attachments().iter().map(|a| a.id.clone()).collect();
            assert_eq!(ids.len(), event.attachments().len());
        }
        for company in companies() {
            let ids: HashSet<_> = company.attachments().iter().map(|a| a.id.clone()).collect();
            assert_eq!(ids.len(), company.attachments().len());
        }
    }

    #[test]
    fn test_event_companies_resolve() {
        for event in events() {
            if let Some(company_id) = &event.company_id {
                assert!(company_name(company_id).is_some(), "{}", event.base.code);
            }
        }
    }

    #[test]
    fn test_fixtures_include_attachments_and_empty_parents() {
        assert!(events().iter().any(|e| !e.attachments.is_empty()));
        assert!(events().iter().any(|e| e.attachments.is_empty()));
        assert!(companies().iter().any(|c| !c.attachments.is_empty()));
    }
}
