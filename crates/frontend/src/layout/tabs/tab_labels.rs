//! Tab labels - single source of truth for tab titles.

use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a002_equipment::aggregate::Equipment;
use contracts::domain::a003_staff::aggregate::Staff;
use contracts::domain::a004_outsourced_worker::aggregate::OutsourcedWorker;
use contracts::domain::a005_event::aggregate::Event;
use contracts::domain::a006_package::aggregate::Package;
use contracts::domain::common::AggregateRoot;

/// Human readable title for a tab key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_company" => Company::list_name(),
        "a002_equipment" => Equipment::list_name(),
        "a003_staff" => Staff::list_name(),
        "a004_outsourced_worker" => OutsourcedWorker::list_name(),
        "a005_event" => Event::list_name(),
        "a006_package" => Package::list_name(),
        _ => "",
    }
}

/// Keys of every list page, in sidebar order
pub fn list_keys() -> Vec<String> {
    vec![
        <Company as AggregateRoot>::full_name(),
        <Equipment as AggregateRoot>::full_name(),
        <Staff as AggregateRoot>::full_name(),
        <OutsourcedWorker as AggregateRoot>::full_name(),
        <Event as AggregateRoot>::full_name(),
        <Package as AggregateRoot>::full_name(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_key_has_a_label() {
        for key in list_keys() {
            assert!(!tab_label_for_key(&key).is_empty(), "no label for {key}");
        }
    }

    #[test]
    fn test_list_keys_are_aggregate_keys() {
        assert_eq!(
            list_keys(),
            vec![
                "a001_company",
                "a002_equipment",
                "a003_staff",
                "a004_outsourced_worker",
                "a005_event",
                "a006_package",
            ]
        );
    }

    #[test]
    fn test_unknown_key_has_no_label() {
        assert_eq!(tab_label_for_key("a999_unknown"), "");
    }
}
