use geoquiz_core::loader::{
    cache, load_bounds, load_cities, load_mode, load_regions, parse_bounds, parse_cities, try_load_bounds,
};
use geoquiz_core::{Bounds, QuizConfig, QuizError};
use std::fs;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    QuizConfig::default_data_dir()
}

/// Private copy of the fixture data so cache files never collide between tests.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("geoquiz-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("cities")).unwrap();
    fs::create_dir_all(dir.join("states")).unwrap();
    for rel in ["map_bounds.json", "cities/world.json", "states/states-world.json"] {
        fs::copy(data_dir().join(rel), dir.join(rel)).unwrap();
    }
    dir
}

#[test]
fn bounds_for_known_modes_in_both_spellings() {
    let path = data_dir().join("map_bounds.json");
    assert_eq!(load_bounds(&path, "world"), Bounds::WORLD);
    assert_eq!(load_bounds(&path, "europe"), Bounds::new(34.5, 71.5, -25.0, 45.0));
    assert_eq!(load_bounds(&path, "usa"), Bounds::new(24.0, 50.0, -125.0, -66.0));
}

#[test]
fn bounds_fall_back_to_world_uniformly() {
    let path = data_dir().join("map_bounds.json");
    assert!(matches!(try_load_bounds(&path, "atlantis"), Err(QuizError::NotFound(_))));
    assert_eq!(load_bounds(&path, "atlantis"), Bounds::WORLD);

    let missing = data_dir().join("no_such_bounds.json");
    assert!(try_load_bounds(&missing, "world").is_err());
    assert_eq!(load_bounds(&missing, "europe"), Bounds::WORLD);

    let dir = scratch_dir("bad-bounds");
    let broken = dir.join("map_bounds.json");
    fs::write(&broken, "{ not json").unwrap();
    assert_eq!(load_bounds(&broken, "europe"), Bounds::WORLD);
}

#[test]
fn cities_fixture_loads_and_drops_rows_without_coordinates() {
    let dir = scratch_dir("cities");
    let dataset = load_cities(dir.join("cities/world.json"), "world").unwrap();

    assert_eq!(dataset.mode(), "world");
    assert_eq!(dataset.len(), 18);
    assert!(dataset.resolve("Atlantis").is_none());

    let st_etienne = dataset.resolve("saint etienne").unwrap();
    assert_eq!(st_etienne.population, Some(173_089));

    let vatican = dataset.resolve("vatican city").unwrap();
    assert_eq!(vatican.population, None);
}

#[test]
fn dataset_totals_from_fixture() {
    let dir = scratch_dir("totals");
    let dataset = load_cities(dir.join("cities/world.json"), "world").unwrap();
    let totals = dataset.totals();

    assert_eq!(totals.cities, 18);
    assert_eq!(totals.countries, 12);
    assert_eq!(totals.capitals, 12);
    assert_eq!(totals.territories, 15);
    assert_eq!(totals.bracket_totals, [5, 8, 8, 12, 14, 16]);
    assert_eq!(totals.visible_brackets().count(), 6);
}

#[test]
fn second_load_uses_a_fresh_cache() {
    let dir = scratch_dir("cache");
    let source = dir.join("cities/world.json");
    let cache_path = cache::cache_path_for(&source);

    let first = load_cities(&source, "world").unwrap();
    assert!(cache_path.exists());
    assert!(cache::is_cache_fresh(&source, &cache_path));

    let cached = cache::read_cache(&cache_path).unwrap();
    assert_eq!(cached.as_slice(), first.cities());

    let second = load_cities(&source, "world").unwrap();
    assert_eq!(second.cities(), first.cities());
}

#[test]
fn missing_cache_is_never_fresh() {
    let dir = scratch_dir("stale");
    let source = dir.join("cities/world.json");
    assert!(!cache::is_cache_fresh(&source, &dir.join("nope.bin")));
}

#[test]
fn regions_are_optional() {
    let regions = load_regions(data_dir().join("states/states-world.json"));
    assert_eq!(regions.len(), 4);
    assert_eq!(regions[0].alt_names, ["Ile de France", "Paris Region"]);
    assert!(regions[3].alt_names.is_empty());

    assert!(load_regions(data_dir().join("states/states-nowhere.json")).is_empty());
}

#[test]
fn load_mode_for_world() {
    let dir = scratch_dir("mode");
    let loaded = load_mode(&QuizConfig::new(&dir, "world"));
    assert_eq!(loaded.bounds, Bounds::WORLD);
    assert_eq!(loaded.dataset.len(), 18);
    assert_eq!(loaded.regions.len(), 4);
}

#[test]
fn unavailable_dataset_degrades_to_empty() {
    let dir = scratch_dir("degraded");
    let loaded = load_mode(&QuizConfig::new(&dir, "europe"));

    // Bounds exist for europe, cities do not.
    assert_eq!(loaded.bounds, Bounds::new(34.5, 71.5, -25.0, 45.0));
    assert!(loaded.dataset.is_empty());
    assert!(loaded.regions.is_empty());
}

#[test]
fn invalid_mode_names_load_nothing() {
    let config = QuizConfig::new(data_dir(), "../cities/world");
    assert!(!config.has_valid_mode());

    let loaded = load_mode(&config);
    assert!(loaded.dataset.is_empty());
    assert_eq!(loaded.bounds, Bounds::WORLD);
}

#[test]
fn config_paths() {
    let config = QuizConfig::new("/data", "europe");
    assert_eq!(config.bounds_path(), PathBuf::from("/data/map_bounds.json"));
    assert_eq!(config.cities_path(), PathBuf::from("/data/cities/europe.json"));
    assert_eq!(config.regions_path(), PathBuf::from("/data/states/states-europe.json"));
    assert_eq!(QuizConfig::default().mode, "world");
}

#[test]
fn in_memory_json_parses_like_files() {
    let dataset = parse_cities(
        r#"[
            {"name": "Quito", "country": "Ecuador", "latitude": -0.18, "longitude": -78.47,
             "population": 2011388, "nationalCapital": true},
            {"name": "Nowhere", "country": "Ecuador"}
        ]"#,
        "andes",
    )
    .unwrap();
    assert_eq!(dataset.mode(), "andes");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.totals().capitals, 1);

    let bounds = parse_bounds(r#"{"andes": {"latMin": -56, "latMax": 12, "lngMin": -82, "lngMax": -60}}"#, "andes").unwrap();
    assert_eq!(bounds, Bounds::new(-56.0, 12.0, -82.0, -60.0));
    assert!(matches!(parse_bounds("{}", "andes"), Err(QuizError::NotFound(_))));
    assert!(matches!(parse_cities("{", "andes"), Err(QuizError::Json(_))));
}

#[test]
fn one_malformed_row_only_costs_that_row() {
    let dataset = parse_cities(
        r#"[
            {"name": "Oslo", "country": "Norway", "latitude": 59.91, "longitude": 10.75, "population": 709037},
            {"name": "Bergen", "country": "Norway", "latitude": 60.39, "longitude": 5.32, "population": "285000"},
            {"name": null, "country": "Norway", "latitude": 63.43, "longitude": 10.39},
            {"name": "Tromsø", "country": "Norway", "latitude": 69.65, "longitude": 18.96, "population": 77544}
        ]"#,
        "nordic",
    )
    .unwrap();

    let names: Vec<&str> = dataset.cities().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Oslo", "Tromsø"]);
    assert!(dataset.resolve("bergen").is_none());
    assert_eq!(dataset.resolve("tromso").map(|c| c.population), Some(Some(77_544)));
}

#[test]
fn malformed_rows_in_a_file_still_load_the_rest() {
    let dir = std::env::temp_dir().join(format!("geoquiz-badrows-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mixed.json");
    fs::write(
        &path,
        r#"[{"name": "Lima", "country": "Peru", "latitude": -12.05, "longitude": -77.04},
            {"name": "Cusco", "country": "Peru", "latitude": "south", "longitude": -71.97}]"#,
    )
    .unwrap();

    let dataset = load_cities(&path, "mixed").unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.cities()[0].name, "Lima");
}
