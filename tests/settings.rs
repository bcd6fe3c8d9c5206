use multi_slider::settings::{DemoSettings, HandleSettings, SliderSettings};
use multi_slider::{Orientation, Rgba};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = DemoSettings::load(path.to_str().unwrap()).unwrap();

    assert_eq!(settings, DemoSettings::default());
    assert_eq!(settings.sliders.len(), 2);
}

#[test]
fn save_then_load_keeps_sliders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let mut settings = DemoSettings::default();
    settings.color_seed = Some(42);
    settings.sliders.push(SliderSettings {
        orientation: Orientation::Horizontal,
        minimum: -50,
        maximum: 50,
        border: 4,
        handles: vec![HandleSettings {
            value: -10,
            color: Some(Rgba::rgb(1, 2, 3)),
        }],
        ..SliderSettings::default()
    });
    settings.save(path).unwrap();

    let loaded = DemoSettings::load(path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn partial_json_uses_defaults_for_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
            "debug_logging": true,
            "sliders": [ { "orientation": "horizontal", "handles": [ { "value": 12 } ] } ]
        }"#,
    )
    .unwrap();

    let settings = DemoSettings::load(path.to_str().unwrap()).unwrap();

    assert!(settings.debug_logging);
    assert_eq!(settings.sliders.len(), 1);
    let slider = &settings.sliders[0];
    assert_eq!(slider.orientation, Orientation::Horizontal);
    assert_eq!((slider.minimum, slider.maximum), (0, 100));
    assert!(slider.enabled);
    assert_eq!(slider.border, 2);
    assert_eq!(slider.handles[0].color, None);
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(DemoSettings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn seeded_settings_build_identical_palettes() {
    let settings = DemoSettings {
        color_seed: Some(9),
        ..DemoSettings::default()
    };

    let first = settings.build_sliders();
    let second = settings.build_sliders();

    for (a, b) in first.iter().zip(second.iter()) {
        let a: Vec<_> = a.handles().map(|h| h.color()).collect();
        let b: Vec<_> = b.handles().map(|h| h.color()).collect();
        assert_eq!(a, b);
    }
}
