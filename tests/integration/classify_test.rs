use moodfetch::core::mood::{
    CRITICAL_THRESHOLD, FAIR_THRESHOLD, GOOD_THRESHOLD, POOR_THRESHOLD,
};
use moodfetch::core::severity_score;
use moodfetch::{classify, MetricsReading, Mood};

fn reading(cpu: f32, memory: f32, disk: f32) -> MetricsReading {
    MetricsReading::from_percentages(cpu, memory, disk, 0)
}

#[test]
fn test_every_reading_has_one_of_five_moods() {
    let steps = [0.0, 12.5, 29.0, 30.0, 49.5, 50.0, 69.0, 70.0, 84.9, 85.0, 100.0];

    for &cpu in &steps {
        for &memory in &steps {
            for &disk in &steps {
                let r = reading(cpu, memory, disk);
                let score = severity_score(&r);
                assert!((0.0..=100.0).contains(&score));

                let mood = classify(r).mood;
                assert!(Mood::ALL.contains(&mood));
                assert_eq!(mood, Mood::from_score(score));
            }
        }
    }
}

#[test]
fn test_thresholds_are_ordered() {
    assert!(GOOD_THRESHOLD < FAIR_THRESHOLD);
    assert!(FAIR_THRESHOLD < POOR_THRESHOLD);
    assert!(POOR_THRESHOLD < CRITICAL_THRESHOLD);
}

#[test]
fn test_exact_threshold_scores_take_worse_band() {
    assert_eq!(Mood::from_score(GOOD_THRESHOLD), Mood::Good);
    assert_eq!(Mood::from_score(FAIR_THRESHOLD), Mood::Fair);
    assert_eq!(Mood::from_score(POOR_THRESHOLD), Mood::Poor);
    assert_eq!(Mood::from_score(CRITICAL_THRESHOLD), Mood::Critical);
}

#[test]
fn test_reference_readings() {
    assert_eq!(classify(reading(35.0, 42.0, 65.0)).mood, Mood::Good);
    assert_eq!(classify(reading(95.0, 90.0, 98.0)).mood, Mood::Critical);
}

#[test]
fn test_memory_and_disk_monotonic() {
    let mut previous = Mood::Excellent;
    for p in 0..=100 {
        let mood = classify(reading(20.0, p as f32, 20.0)).mood;
        assert!(mood >= previous);
        previous = mood;
    }

    let mut previous = Mood::Excellent;
    for p in 0..=100 {
        let mood = classify(reading(20.0, 20.0, p as f32)).mood;
        assert!(mood >= previous);
        previous = mood;
    }
}
