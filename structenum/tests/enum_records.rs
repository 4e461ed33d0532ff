//! End-to-end tests for enums built from derived records.
#![allow(non_snake_case)]

use serde::{Deserialize, Serialize};
use structenum::{lowercase, uppercase, Casing, Enum, EnumError, EnumOption, EnumRecord};

#[derive(Debug, Clone, Default, PartialEq, EnumRecord, Serialize, Deserialize)]
struct MealPreferences {
    Veg: String,
    NonVeg: String,
}

#[derive(Debug, Clone, Default, PartialEq, EnumRecord)]
struct Statuses {
    Pending: i32,
    Active: i32,
    Closed: i32,
}

#[derive(Debug, Default, EnumRecord)]
struct Ratios {
    Unknown: f64,
    Half: f64,
}

#[derive(Debug, Default, EnumRecord)]
struct Flags {
    Enabled: bool,
    Visible: bool,
}

// ============================================================================
// Text records
// ============================================================================

#[test]
fn test_picks_up_values_from_field_names() {
    let meal = Enum::new(MealPreferences::default());

    assert_eq!(meal.list_values().len(), 2);
    assert_eq!(meal.Veg, "Veg");
    assert_eq!(meal.NonVeg, "NonVeg");
    assert_eq!(meal.list_values(), ["Veg", "NonVeg"]);
}

#[test]
fn test_lowercase_option() {
    let meal = Enum::with_options(MealPreferences::default(), [lowercase()]);
    assert_eq!(meal.Veg, "veg");
    assert_eq!(meal.NonVeg, "nonveg");
}

#[test]
fn test_uppercase_option() {
    let meal = Enum::with_options(MealPreferences::default(), [uppercase()]);
    assert_eq!(meal.Veg, "VEG");
    assert_eq!(meal.NonVeg, "NONVEG");
}

#[test]
fn test_last_casing_option_wins() {
    let meal = Enum::builder(MealPreferences::default())
        .lowercase()
        .uppercase()
        .build();
    assert_eq!(meal.list_values(), ["VEG", "NONVEG"]);

    let meal = Enum::with_options(MealPreferences::default(), [uppercase(), lowercase()]);
    assert_eq!(meal.list_values(), ["veg", "nonveg"]);
}

#[test]
fn test_custom_option() {
    let identity = EnumOption::new("identity", |opts| {
        opts.set_casing(Casing::Identity);
    });
    let meal = Enum::with_options(MealPreferences::default(), [lowercase(), identity]);
    assert_eq!(meal.list_values(), ["Veg", "NonVeg"]);
}

#[test]
fn test_explicit_values_win_over_casing() {
    let record = MealPreferences {
        Veg: "Vegetarian".into(),
        NonVeg: "Non-Vegetarian".into(),
    };
    for meal in [
        Enum::new(record.clone()),
        Enum::with_options(record.clone(), [lowercase()]),
        Enum::with_options(record.clone(), [uppercase()]),
    ] {
        assert_eq!(meal.Veg, "Vegetarian");
        assert_eq!(meal.NonVeg, "Non-Vegetarian");
    }
}

#[test]
fn test_partially_filled_record() {
    let meal = Enum::with_options(
        MealPreferences {
            Veg: "Vegetarian".into(),
            ..Default::default()
        },
        [lowercase()],
    );
    assert_eq!(meal.list_values(), ["Vegetarian", "nonveg"]);
}

#[test]
fn test_membership() {
    let meal = Enum::new(MealPreferences::default());
    assert!(meal.is_valid(&meal.Veg));
    assert!(meal.is_valid(meal.NonVeg.as_str()));
    assert!(!meal.is_valid("Vegan"));

    for value in meal.list_values() {
        assert!(meal.is_valid(value));
    }
}

#[test]
fn test_validate() {
    let meal = Enum::new(MealPreferences::default());
    assert!(meal.validate(&meal.Veg).is_ok());
    assert!(meal.validate(&meal.NonVeg).is_ok());

    let err = meal.validate("Vegan").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for type MealPreference: Vegan. Valid values include: [Veg NonVeg]"
    );
    assert_eq!(
        err,
        EnumError::InvalidValue {
            type_name: "MealPreference".into(),
            value: "Vegan".into(),
            valid: vec!["Veg".into(), "NonVeg".into()],
        }
    );
}

#[test]
fn test_queries_are_idempotent() {
    let meal = Enum::new(MealPreferences::default());
    let first = meal.list_values().to_vec();
    let second = meal.list_values().to_vec();
    assert_eq!(first, second);
    assert_eq!(meal.is_valid("Veg"), meal.is_valid("Veg"));
    assert_eq!(meal.is_valid("Vegan"), meal.is_valid("Vegan"));
}

#[test]
fn test_descriptor() {
    let meal = Enum::new(MealPreferences::default());
    assert_eq!(meal.descriptor().name(), "MealPreferences");
    assert_eq!(meal.descriptor().display_name(), "MealPreference");
    assert!(meal.descriptor().path().ends_with("MealPreferences"));
}

// ============================================================================
// Non-text records
// ============================================================================

#[test]
fn test_numeric_fields_stay_zero() {
    let status = Enum::with_options(Statuses::default(), [uppercase()]);
    assert_eq!(status.list_values(), [0, 0, 0]);
    assert_eq!(status.Pending, 0);
    assert_eq!(status.Active, 0);
    assert_eq!(status.Closed, 0);
}

#[test]
fn test_numeric_custom_values() {
    let status = Enum::new(Statuses {
        Pending: 1,
        Active: 2,
        Closed: 3,
    });
    assert_eq!(status.list_values(), [1, 2, 3]);
    assert!(status.is_valid(&2));
    assert!(!status.is_valid(&4));

    let err = status.validate(&4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for type Statuse: 4. Valid values include: [1 2 3]"
    );
}

#[test]
fn test_every_float_member_is_valid() {
    let ratios = Enum::new(Ratios {
        Unknown: f64::NAN,
        Half: 0.5,
    });
    for value in ratios.list_values() {
        assert!(ratios.is_valid(value), "{value} listed but not valid");
        assert!(ratios.validate(value).is_ok());
    }
    assert!(ratios.is_valid(&f64::NAN));
    assert!(!ratios.is_valid(&0.25));

    let err = ratios.validate(&0.25).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for type Ratio: 0.25. Valid values include: [NaN 0.5]"
    );
}

#[test]
fn test_bool_fields_stay_false() {
    let flags = Enum::with_options(Flags::default(), [lowercase()]);
    assert_eq!(flags.list_values(), [false, false]);
    assert!(!flags.is_valid(&true));
}

#[test]
fn test_duplicates_are_allowed() {
    let status = Enum::new(Statuses {
        Pending: 1,
        Active: 1,
        Closed: 2,
    });
    assert_eq!(status.len(), 3);
    assert!(status.is_valid(&1));
}

// ============================================================================
// Derive attributes and shapes
// ============================================================================

#[derive(Debug, Default, EnumRecord)]
struct Sizes {
    small: String,
    #[enum_record(rename = "ExtraLarge")]
    extra_large: String,
    r#type: String,
}

#[test]
fn test_snake_case_fields_and_rename() {
    let sizes = Enum::new(Sizes::default());
    assert_eq!(sizes.names(), ["small", "ExtraLarge", "type"]);
    assert_eq!(sizes.list_values(), ["small", "ExtraLarge", "type"]);

    let sizes = Enum::with_options(Sizes::default(), [uppercase()]);
    assert_eq!(sizes.extra_large, "EXTRALARGE");
    assert_eq!(sizes.r#type, "TYPE");
}

#[derive(Debug, Default, EnumRecord)]
struct Codes<T> {
    low: T,
    high: T,
}

#[test]
fn test_generic_record() {
    let codes = Enum::new(Codes::<u16> { low: 10, high: 0 });
    assert_eq!(codes.list_values(), [10, 0]);

    let labels = Enum::new(Codes::<String>::default());
    assert_eq!(labels.list_values(), ["low", "high"]);
}

#[test]
fn test_field_order_preserved() {
    #[derive(Default, EnumRecord)]
    struct Letters {
        Zeta: String,
        Alpha: String,
        Mu: String,
    }

    let letters = Enum::new(Letters::default());
    assert_eq!(letters.list_values(), ["Zeta", "Alpha", "Mu"]);
    let pairs: Vec<_> = letters.iter().map(|(n, v)| (n, v.as_str())).collect();
    assert_eq!(pairs, vec![("Zeta", "Zeta"), ("Alpha", "Alpha"), ("Mu", "Mu")]);
}

// ============================================================================
// Serialization boundary
// ============================================================================

#[test]
fn test_record_json_round_trip() {
    let meal = Enum::new(MealPreferences::default());
    let json = serde_json::to_string(&meal).unwrap();
    assert_eq!(json, r#"{"Veg":"Veg","NonVeg":"NonVeg"}"#);

    let record: MealPreferences = serde_json::from_str(&json).unwrap();
    assert_eq!(&record, meal.record());
}

#[test]
fn test_enum_deserializes_and_resolves() {
    let meal: Enum<MealPreferences> =
        serde_json::from_str(r#"{"Veg":"Vegetarian","NonVeg":""}"#).unwrap();
    assert_eq!(meal.list_values(), ["Vegetarian", "NonVeg"]);
    assert!(meal.validate("Vegetarian").is_ok());
}

#[test]
fn test_enum_is_shareable_across_threads() {
    let meal = std::sync::Arc::new(Enum::new(MealPreferences::default()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let meal = std::sync::Arc::clone(&meal);
            std::thread::spawn(move || meal.is_valid("Veg"))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
