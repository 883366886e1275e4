use lessons::{render_enumerations, render_generics, LessonConfig, LessonError};

#[test]
fn enumerations_default_output() {
    let lines = render_enumerations(&LessonConfig::default());
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[9], "Today is Saturday.");
    assert_eq!(lines[10], "Body is 2500$");
    assert_eq!(
        &lines[11..],
        &[
            "Signal is: RED, action is : STOP",
            "Signal is: ORANGE, action is : WAIT",
            "Signal is: GREEN, action is : GO",
        ]
    );
}

#[test]
fn enumerations_open_inputs_fall_back() {
    let config = LessonConfig {
        day: "FUNDAY".into(),
        part: 99,
        ..LessonConfig::default()
    };
    let lines = render_enumerations(&config);
    assert_eq!(lines[9], "There is something wrong. Please, try again.");
    assert_eq!(lines[10], "It's a New Spare Part");
}

#[test]
fn enumerations_output_is_repeatable() {
    let config = LessonConfig::default();
    assert_eq!(render_enumerations(&config), render_enumerations(&config));
}

#[test]
fn generics_default_output() {
    let lines = render_generics(&LessonConfig::default()).unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("USED THE DOWN-CAST"));
    assert!(lines[0].ends_with("\nBody"));
    assert!(lines[1].contains("USED THE GENERICS"));
    assert!(lines[1].ends_with("\nExhaust system"));
}

#[test]
fn generics_bad_cast_is_reported() {
    let config = LessonConfig {
        untyped_pick: 5,
        ..LessonConfig::default()
    };
    let err = render_generics(&config).unwrap_err();
    assert!(matches!(err, LessonError::TypeMismatch { index: 5, .. }));
}
