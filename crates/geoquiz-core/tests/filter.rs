use geoquiz_core::{CityRecord, Dataset, Filter, FilterCatalog, Region};

fn dataset() -> Dataset {
    Dataset::new(
        "test",
        vec![
            CityRecord::new("Paris", "France", 48.86, 2.35).with_state("Île-de-France"),
            CityRecord::new("Lyon", "France", 45.76, 4.84).with_state("Auvergne-Rhône-Alpes"),
            CityRecord::new("Kraków", "Poland", 50.06, 19.94).with_state("Lesser Poland"),
            CityRecord::new("Łódź", "Poland", 51.76, 19.46).with_state("Łódź"),
            CityRecord::new("Monaco", "Monaco", 43.74, 7.42),
        ],
    )
}

fn regions() -> Vec<Region> {
    vec![
        Region {
            name: "Île-de-France".into(),
            alt_names: vec!["Paris Region".into()],
        },
        Region {
            name: "Lesser Poland".into(),
            alt_names: vec!["Małopolska".into()],
        },
    ]
}

#[test]
fn labels_are_countries_then_states_then_regions_without_repeats() {
    let catalog = FilterCatalog::build(&dataset(), regions());
    assert_eq!(
        catalog.labels(),
        [
            "France",
            "Monaco",
            "Poland",
            "Auvergne-Rhône-Alpes",
            "Lesser Poland",
            "Île-de-France",
            "Łódź",
            "Paris Region",
            "Małopolska",
        ]
    );
}

#[test]
fn options_start_with_the_fixed_entries() {
    let catalog = FilterCatalog::build(&dataset(), Vec::new());
    let options: Vec<_> = catalog.options().take(4).collect();
    assert_eq!(
        options,
        [
            Filter::Any,
            Filter::AllCountries,
            Filter::AllStates,
            Filter::Label("France".into()),
        ]
    );
}

#[test]
fn filters_select_records() {
    let data = dataset();
    let catalog = FilterCatalog::build(&data, regions());
    let names = |filter: Filter| -> Vec<String> {
        catalog
            .apply(&filter, data.cities())
            .into_iter()
            .map(|c| c.name.clone())
            .collect()
    };

    assert_eq!(names(Filter::Any).len(), 5);
    assert_eq!(names(Filter::AllCountries).len(), 5);
    assert_eq!(names(Filter::AllStates).len(), 4);
    assert_eq!(names(Filter::Label("Poland".into())), ["Kraków", "Łódź"]);
    assert_eq!(names(Filter::Label("Lesser Poland".into())), ["Kraków"]);
    // Region alias reaches the region's cities.
    assert_eq!(names(Filter::Label("Paris Region".into())), ["Paris"]);
    assert_eq!(names(Filter::Label("Malopolska".into())), ["Kraków"]);
    assert!(names(Filter::Label("Atlantis".into())).is_empty());
}

#[test]
fn label_search_is_accent_insensitive() {
    let catalog = FilterCatalog::build(&dataset(), regions());
    assert_eq!(catalog.search_labels("lodz"), ["Łódź"]);
    assert_eq!(catalog.search_labels("ILE"), ["Île-de-France"]);
    assert_eq!(catalog.search_labels("pol"), ["Poland", "Lesser Poland", "Małopolska"]);
    assert!(catalog.search_labels("  ").is_empty());
}
