use ingatlan_scout::search::url_builder::{BASE_URL, URL_SEPARATOR};
use ingatlan_scout::{build_url, Filter};

fn filter_in(locations: &[&str]) -> Filter {
    Filter {
        locations: locations.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn family_house_in_two_cities() {
    let filter = Filter {
        property_type: Some("családi ház".into()),
        size_min: Some(80.0),
        size_max: Some(120.0),
        price_max: Some(50.0),
        ..filter_in(&["Budapest", "Debrecen"])
    };

    let result = build_url(&filter).unwrap();
    let expected = [
        "budapest",
        "debrecen",
        "elado",
        "csaladi-haz",
        "price-1000000-50000000",
        "area-80-120",
    ];
    assert_eq!(result.segments, expected);
    assert_eq!(result.url, format!("{}{}", BASE_URL, expected.join(URL_SEPARATOR)));
    assert_eq!(
        result.url,
        "https://ingatlan.com/lista/budapest+debrecen+elado+csaladi-haz+price-1000000-50000000+area-80-120"
    );
}

#[test]
fn house_expands_to_all_subtypes() {
    let filter = Filter {
        property_type: Some("ház".into()),
        ..filter_in(&["Érd"])
    };
    let segments = build_url(&filter).unwrap().segments;
    assert_eq!(
        &segments[2..],
        [
            "haz",
            "csaladi-haz",
            "ikerhaz",
            "sorhaz",
            "kuria",
            "villa-kastely",
            "hazresz",
            "egyeb-haz"
        ]
    );
}

#[test]
fn unknown_categories_are_dropped() {
    let filter = Filter {
        property_type: Some("bunker".into()),
        condition: Some("romos".into()),
        heating: Some("atomreaktor".into()),
        ..filter_in(&["Szeged", "Pécs"])
    };
    let segments = build_url(&filter).unwrap().segments;
    assert_eq!(segments.len(), filter.locations.len() + 1);
    assert_eq!(segments.last().unwrap(), "elado");
}

#[test]
fn price_conversion() {
    let mut filter = Filter {
        price_min: Some(10.0),
        price_max: Some(50.0),
        ..filter_in(&["Budapest"])
    };
    assert!(build_url(&filter)
        .unwrap()
        .segments
        .contains(&"price-10000000-50000000".to_string()));

    filter.price_min = None;
    assert!(build_url(&filter)
        .unwrap()
        .segments
        .contains(&"price-1000000-50000000".to_string()));
}

#[test]
fn district_location_token() {
    let result = build_url(&filter_in(&["Budapest 13. kerület"])).unwrap();
    assert_eq!(result.segments, ["budapest-13-kerület", "elado"]);
}

#[test]
fn non_empty_locations_always_build() {
    for locations in [
        vec!["Budapest"],
        vec!["Miskolc", "Miskolc"],
        vec!["Balatonfüred", "Budapest 2. kerület", "Tihany"],
    ] {
        let filter = filter_in(&locations);
        let result = build_url(&filter).unwrap();
        assert_eq!(result.segments.len(), locations.len() + 1);
    }
    assert!(build_url(&Filter::default()).is_none());
}

#[test]
fn building_is_idempotent() {
    let filter = Filter {
        property_type: Some("lakás".into()),
        rooms_min: Some(2),
        condition: Some("felújított".into()),
        heating: Some("gáz".into()),
        ..filter_in(&["Győr", "Budapest 11. kerület"])
    };
    assert_eq!(build_url(&filter), build_url(&filter));
}
