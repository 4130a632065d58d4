//! Configuration parsing tests

use std::fs;

use vacmap::config::CardConfig;
use vacmap::{Outline, Point, RoomId};

#[test]
fn parses_a_full_card_config() {
    let yaml = r#"
title: Upstairs
calibration:
  min: [0, 0]
  max: [51200, 51200]
modes:
  - name: Clean rooms
    max_selections: 3
    predefined_selections:
      - id: 16
        outline: [[100, 100], [400, 100], [400, 300]]
        label:
          text: Living room
      - id: kitchen
        outline: vacuum.robo.attributes.kitchen_outline
        icon:
          glyph: "K"
  - name: Quick clean
    run_immediately: true
"#;

    let config: CardConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.title, "Upstairs");
    assert_eq!(config.calibration.max, Point(51200.0, 51200.0));
    assert_eq!(config.modes.len(), 2);

    let mode = &config.modes[0];
    assert_eq!(mode.max_selections, 3);
    assert!(!mode.run_immediately);
    assert_eq!(mode.predefined_selections.len(), 2);

    let living = &mode.predefined_selections[0];
    assert_eq!(living.id, RoomId::Num(16));
    assert_eq!(
        living.outline,
        Outline::Literal(vec![
            Point(100.0, 100.0),
            Point(400.0, 100.0),
            Point(400.0, 300.0)
        ])
    );
    assert_eq!(living.label.as_ref().unwrap().text, "Living room");

    let kitchen = &mode.predefined_selections[1];
    assert_eq!(kitchen.id, RoomId::Str("kitchen".to_string()));
    assert!(matches!(
        &kitchen.outline,
        Outline::Reference(r) if r == "vacuum.robo.attributes.kitchen_outline"
    ));
    assert_eq!(kitchen.icon.as_ref().unwrap().glyph, "K");

    // Unset limit means effectively unbounded
    assert_eq!(config.modes[1].max_selections, 999);
    assert!(config.modes[1].run_immediately);
    assert!(config.modes[1].predefined_selections.is_empty());
}

#[test]
fn from_dir_prefers_the_dotted_location() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".vacmap")).unwrap();
    fs::write(
        dir.path().join(".vacmap/config.yaml"),
        "title: dotted\n",
    )
    .unwrap();
    fs::write(dir.path().join("vacmap.yaml"), "title: local\n").unwrap();

    let config = CardConfig::from_dir(dir.path()).unwrap();
    assert_eq!(config.title, "dotted");
}

#[test]
fn from_dir_reads_the_local_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("vacmap.yaml"),
        "title: local\nmodes:\n  - name: only\n",
    )
    .unwrap();

    let config = CardConfig::from_dir(dir.path()).unwrap();
    assert_eq!(config.title, "local");
    assert_eq!(config.modes.len(), 1);
    assert_eq!(config.modes[0].name, "only");
}

#[test]
fn missing_config_still_yields_a_usable_panel() {
    let dir = tempfile::tempdir().unwrap();
    assert!(CardConfig::from_dir(dir.path()).is_ok());
}

#[test]
fn the_demo_plan_has_selectable_rooms() {
    let config = CardConfig::with_defaults();

    assert!(!config.modes.is_empty());
    assert!(config
        .modes
        .iter()
        .all(|m| !m.predefined_selections.is_empty()));
}

#[test]
fn malformed_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vacmap.yaml"), "modes: [unclosed\n").unwrap();

    assert!(CardConfig::from_dir(dir.path()).is_err());
}

#[test]
fn default_config_round_trips_through_yaml() {
    let config = CardConfig::with_defaults();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let reparsed: CardConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(reparsed.title, config.title);
    assert_eq!(reparsed.modes.len(), config.modes.len());
    for (a, b) in reparsed.modes.iter().zip(&config.modes) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.max_selections, b.max_selections);
        assert_eq!(a.predefined_selections.len(), b.predefined_selections.len());
    }
}
