pub mod a001_company;
pub mod a002_equipment;
pub mod a003_staff;
pub mod a004_outsourced_worker;
pub mod a005_event;
pub mod a006_package;
pub mod attachments;
pub mod common;
