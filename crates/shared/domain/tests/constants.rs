use amia_domain::constants::{DEMO_REQUEST, ENV_PREFIX, QUESTIONS};
use amia_domain::features::FeatureSet;

#[test]
fn constants_match_config_strings() {
    assert_eq!(ENV_PREFIX, "AMIA");
    assert_eq!(DEMO_REQUEST, "demo_request");
    assert_eq!(QUESTIONS, "questions");
}

#[test]
fn feature_names_round_trip_through_from_str() {
    assert_eq!(FeatureSet::from(DEMO_REQUEST), FeatureSet::DEMO_REQUEST);
    assert_eq!(FeatureSet::from("all"), FeatureSet::ALL);
    assert_eq!(FeatureSet::from("unknown"), FeatureSet::empty());
    assert_eq!(FeatureSet::ALL.names(), vec![DEMO_REQUEST, QUESTIONS]);
}

#[test]
fn feature_set_accepts_comma_separated_string() {
    let set: FeatureSet = serde_json::from_str("\"questions, demo_request\"").unwrap();
    assert_eq!(set, FeatureSet::ALL);

    let json = serde_json::to_string(&FeatureSet::QUESTIONS).unwrap();
    assert_eq!(json, "[\"questions\"]");
}
