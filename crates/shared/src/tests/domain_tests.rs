use super::*;

#[test]
fn document_name_borrows_unknown_keys() {
    let key = String::from("fitnessCert");
    assert_eq!(document_name(&key), "fitnessCert");
    assert_eq!(document_name("vehicleRC"), "Vehicle RC");
    assert_eq!(document_icon(&key), "document");
    assert_eq!(document_icon("insurance"), "shield-checkmark");
}

#[test]
fn document_keys_round_trip_through_catalogue() {
    for kind in DocumentKind::ALL {
        assert_eq!(DocumentKind::from_key(kind.key()), Some(kind));
    }
    assert_eq!(DocumentKind::from_key("eway_bill"), None);
}

#[test]
fn trip_status_parses_its_wire_names() {
    for status in [
        TripStatus::NotStarted,
        TripStatus::ReachedOrigin,
        TripStatus::InTransit,
        TripStatus::ReachedDestination,
        TripStatus::Completed,
    ] {
        assert_eq!(status.as_str().parse::<TripStatus>(), Ok(status));
    }
    assert!("delayed".parse::<TripStatus>().is_err());
}
