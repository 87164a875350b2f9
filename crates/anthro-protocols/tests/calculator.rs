use anthro_core::models::gender::Gender;
use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::result::{BmiCategory, BodyFatOutcome, WhrRisk};
use anthro_core::models::site::SkinfoldSite;
use anthro_protocols::calculator::compute;
use anthro_protocols::registry::resolve_required_fields;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

/// A set with every required site of `protocol` set to `sum / n`.
fn with_sum(protocol: ProtocolId, gender: Gender, sum: f64) -> MeasurementSet {
    let sites = resolve_required_fields(protocol, gender);
    let mut set = MeasurementSet {
        weight: Some(80.0),
        height: Some(1.80),
        ..Default::default()
    };
    for site in sites {
        set.skinfolds.set(*site, Some(sum / sites.len() as f64));
    }
    set
}

#[test]
fn bmi_from_weight_and_height() {
    let set = MeasurementSet {
        weight: Some(80.0),
        height: Some(1.80),
        ..Default::default()
    };
    let result = compute(&set, 30, Gender::Male, ProtocolId::JacksonPollock7);
    assert!(close(result.bmi, 24.7), "BMI = {}", result.bmi);
    assert_eq!(result.bmi_category, Some(BmiCategory::Normal));
}

#[test]
fn bmi_is_zero_without_height() {
    let set = MeasurementSet {
        weight: Some(80.0),
        ..Default::default()
    };
    let result = compute(&set, 30, Gender::Male, ProtocolId::JacksonPollock7);
    assert_eq!(result.bmi, 0.0);
    assert_eq!(result.bmi_category, None);
}

#[test]
fn zero_height_does_not_divide_by_zero() {
    let set = MeasurementSet {
        weight: Some(80.0),
        height: Some(0.0),
        ..Default::default()
    };
    let result = compute(&set, 30, Gender::Male, ProtocolId::JacksonPollock7);
    assert_eq!(result.bmi, 0.0);
}

#[test]
fn waist_hip_ratio_two_decimals() {
    let mut set = MeasurementSet::default();
    set.circumferences.waist = Some(85.0);
    set.circumferences.hip = Some(100.0);
    let result = compute(&set, 30, Gender::Female, ProtocolId::JacksonPollock7);
    assert!(close(result.waist_hip_ratio, 0.85));
    assert_eq!(result.whr_risk, Some(WhrRisk::Normal));

    set.circumferences.hip = None;
    let result = compute(&set, 30, Gender::Female, ProtocolId::JacksonPollock7);
    assert_eq!(result.waist_hip_ratio, 0.0);
    assert_eq!(result.whr_risk, None);
}

#[test]
fn seven_site_male_reference_case() {
    let set = with_sum(ProtocolId::JacksonPollock7, Gender::Male, 100.0);
    let result = compute(&set, 30, Gender::Male, ProtocolId::JacksonPollock7);

    // BD = 1.112 - 0.043499 + 0.0055 - 0.0086478 = 1.0653532
    assert!(close(result.body_density, 1.0654), "BD = {}", result.body_density);
    // 495 / 1.0653532 - 450 = 14.63
    assert!(close(result.body_fat_pct, 14.6), "BF% = {}", result.body_fat_pct);
    assert!(close(result.fat_mass_kg, 11.7));
    assert!(close(result.lean_mass_kg, 68.3));
    assert!(close(result.skinfold_sum_mm, 100.0));
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::Computed);
}

#[test]
fn seven_site_needs_a_positive_age() {
    let set = with_sum(ProtocolId::JacksonPollock7, Gender::Male, 100.0);
    let result = compute(&set, 0, Gender::Male, ProtocolId::JacksonPollock7);
    assert_eq!(result.body_fat_pct, 0.0);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::MissingInputs);
}

#[test]
fn three_site_computes_at_age_zero() {
    // BD = 1.10938 - 0.0008267*60 + 0.0000016*3600 = 1.065538 -> 14.55
    let set = with_sum(ProtocolId::JacksonPollock3, Gender::Male, 60.0);
    let result = compute(&set, 0, Gender::Male, ProtocolId::JacksonPollock3);
    assert!(close(result.body_fat_pct, 14.6), "BF% = {}", result.body_fat_pct);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::Computed);
}

#[test]
fn durnin_womersley_at_age_zero_uses_youngest_band() {
    // Female under 20: BD = 1.1549 - 0.0678*log10(40) = 1.04628 -> 23.10
    let set = with_sum(ProtocolId::DurninWomersley, Gender::Female, 40.0);
    let result = compute(&set, 0, Gender::Female, ProtocolId::DurninWomersley);
    assert!(close(result.body_fat_pct, 23.1), "BF% = {}", result.body_fat_pct);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::Computed);
}

#[test]
fn seven_site_with_one_site_missing_stays_zero() {
    let mut set = with_sum(ProtocolId::JacksonPollock7, Gender::Female, 140.0);
    set.skinfolds.set(SkinfoldSite::Axillary, None);
    let result = compute(&set, 40, Gender::Female, ProtocolId::JacksonPollock7);
    assert_eq!(result.body_fat_pct, 0.0);
    assert_eq!(result.fat_mass_kg, 0.0);
    assert_eq!(result.lean_mass_kg, 0.0);
    assert_eq!(result.skinfold_sum_mm, 0.0);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::MissingInputs);
}

#[test]
fn all_zero_skinfolds_stay_zero() {
    let set = with_sum(ProtocolId::JacksonPollock7, Gender::Male, 0.0);
    let result = compute(&set, 30, Gender::Male, ProtocolId::JacksonPollock7);
    assert_eq!(result.body_fat_pct, 0.0);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::MissingInputs);
}

#[test]
fn three_site_sex_specific() {
    let female = with_sum(ProtocolId::JacksonPollock3, Gender::Female, 60.0);
    let result = compute(&female, 25, Gender::Female, ProtocolId::JacksonPollock3);
    assert!(close(result.body_fat_pct, 23.8), "BF% = {}", result.body_fat_pct);

    let male = with_sum(ProtocolId::JacksonPollock3, Gender::Male, 60.0);
    let result = compute(&male, 25, Gender::Male, ProtocolId::JacksonPollock3);
    assert!(close(result.body_fat_pct, 17.4), "BF% = {}", result.body_fat_pct);
}

#[test]
fn three_site_uses_the_sites_of_the_given_sex() {
    // Male sites filled, computed as female: triceps/suprailiac are absent.
    let set = with_sum(ProtocolId::JacksonPollock3, Gender::Male, 60.0);
    let result = compute(&set, 25, Gender::Female, ProtocolId::JacksonPollock3);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::MissingInputs);
}

#[test]
fn guedes_log_equations() {
    let male = with_sum(ProtocolId::Guedes, Gender::Male, 45.0);
    let result = compute(&male, 30, Gender::Male, ProtocolId::Guedes);
    assert!(close(result.body_fat_pct, 16.8), "BF% = {}", result.body_fat_pct);

    let female = with_sum(ProtocolId::Guedes, Gender::Female, 45.0);
    let result = compute(&female, 30, Gender::Female, ProtocolId::Guedes);
    assert!(close(result.body_fat_pct, 21.5), "BF% = {}", result.body_fat_pct);
}

#[test]
fn guedes_does_not_need_age() {
    let set = with_sum(ProtocolId::Guedes, Gender::Male, 45.0);
    let result = compute(&set, 0, Gender::Male, ProtocolId::Guedes);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::Computed);
}

#[test]
fn durnin_womersley_age_bands() {
    let male = with_sum(ProtocolId::DurninWomersley, Gender::Male, 40.0);
    let result = compute(&male, 35, Gender::Male, ProtocolId::DurninWomersley);
    assert!(close(result.body_fat_pct, 19.2), "BF% = {}", result.body_fat_pct);

    let female = with_sum(ProtocolId::DurninWomersley, Gender::Female, 40.0);
    let result = compute(&female, 25, Gender::Female, ProtocolId::DurninWomersley);
    assert!(close(result.body_fat_pct, 23.7), "BF% = {}", result.body_fat_pct);

    // Band boundaries change the result.
    let at_29 = compute(&male, 29, Gender::Male, ProtocolId::DurninWomersley);
    let at_30 = compute(&male, 30, Gender::Male, ProtocolId::DurninWomersley);
    assert_ne!(at_29.body_fat_pct, at_30.body_fat_pct);
}

#[test]
fn faulkner_is_linear_without_density() {
    let set = with_sum(ProtocolId::Faulkner, Gender::Female, 40.0);
    let result = compute(&set, 30, Gender::Female, ProtocolId::Faulkner);
    assert!(close(result.body_fat_pct, 11.9), "BF% = {}", result.body_fat_pct);
    assert_eq!(result.body_density, 0.0);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::Computed);
}

#[test]
fn isak_reports_the_sum_only() {
    let set = with_sum(ProtocolId::Isak, Gender::Male, 90.0);
    let result = compute(&set, 30, Gender::Male, ProtocolId::Isak);
    assert!(close(result.skinfold_sum_mm, 90.0));
    assert_eq!(result.body_fat_pct, 0.0);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::NotApplicable);
}

#[test]
fn negative_percentage_is_clamped() {
    // log10(1) = 0, so BD = 1.17136 and Siri gives a negative value.
    let set = with_sum(ProtocolId::Guedes, Gender::Male, 1.0);
    let result = compute(&set, 30, Gender::Male, ProtocolId::Guedes);
    assert_eq!(result.body_fat_pct, 0.0);
    assert_eq!(result.fat_mass_kg, 0.0);
    assert_eq!(result.body_fat_outcome, BodyFatOutcome::OutOfRange);
}

#[test]
fn no_weight_means_no_masses() {
    let mut set = with_sum(ProtocolId::Faulkner, Gender::Male, 40.0);
    set.weight = None;
    let result = compute(&set, 30, Gender::Male, ProtocolId::Faulkner);
    assert!(result.body_fat_pct > 0.0);
    assert_eq!(result.fat_mass_kg, 0.0);
    assert_eq!(result.lean_mass_kg, 0.0);
}

#[test]
fn empty_set_degrades_to_zeros() {
    let result = compute(&MeasurementSet::default(), 0, Gender::Female, ProtocolId::default());
    assert_eq!(result.bmi, 0.0);
    assert_eq!(result.waist_hip_ratio, 0.0);
    assert_eq!(result.body_fat_pct, 0.0);
    assert_eq!(result.fat_mass_kg, 0.0);
    assert_eq!(result.lean_mass_kg, 0.0);
}
