use moodfetch::commands::{run, EXIT_FAILURE, EXIT_SUCCESS};
use moodfetch::error::{MoodfetchError, Result};
use moodfetch::ui::DisplayMode;
use moodfetch::{MetricsReading, MetricsSource, Mood};

/// Source that always returns the same reading
struct FixedSource(MetricsReading);

impl MetricsSource for FixedSource {
    fn collect(&mut self) -> Result<MetricsReading> {
        Ok(self.0.clone())
    }
}

/// Source that behaves like an unreachable OS metrics backend
struct UnavailableSource;

impl MetricsSource for UnavailableSource {
    fn collect(&mut self) -> Result<MetricsReading> {
        Err(MoodfetchError::collection("metrics backend unavailable"))
    }
}

/// Source that hands back a malformed reading, validated like the real one
struct MalformedSource;

impl MetricsSource for MalformedSource {
    fn collect(&mut self) -> Result<MetricsReading> {
        let reading = MetricsReading::from_percentages(-5.0, 40.0, 40.0, 60);
        reading.validate()?;
        Ok(reading)
    }
}

fn run_with(source: &mut dyn MetricsSource, mode: DisplayMode) -> (i32, String, String) {
    colored::control::set_override(false);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(mode, source, &mut out, &mut err);

    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_verbose_lists_all_percentages() {
    let mut source = FixedSource(MetricsReading::from_percentages(35.0, 42.0, 65.0, 7200));
    let (code, out, err) = run_with(&mut source, DisplayMode::Verbose);

    assert_eq!(code, EXIT_SUCCESS);
    assert!(err.is_empty());
    assert!(out.contains("Status: GOOD"));
    assert!(out.contains("CPU Usage: 35.0%"));
    assert!(out.contains("Memory Usage: 42.0%"));
    assert!(out.contains("Disk Usage: 65.0%"));
    assert!(out.contains("Uptime: 2h 0m"));
}

#[test]
fn test_default_mode_output() {
    let mut source = FixedSource(MetricsReading::from_percentages(95.0, 90.0, 98.0, 0));
    let (code, out, _) = run_with(&mut source, DisplayMode::Default);

    assert_eq!(code, EXIT_SUCCESS);
    assert!(out.contains("SYSTEM MOOD DIAGNOSTIC"));
    assert!(out.contains(&format!("Status: CRITICAL {}", Mood::Critical.emoji())));
    assert!(out.contains(Mood::Critical.ascii_art()));
    assert!(out.contains("Analyzed at: "));
    assert!(!out.contains("CPU Usage"));
}

#[test]
fn test_minimal_mode_output() {
    let mut source = FixedSource(MetricsReading::from_percentages(5.0, 10.0, 20.0, 0));
    let (code, out, _) = run_with(&mut source, DisplayMode::Minimal);

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(out, format!("EXCELLENT {}\n", Mood::Excellent.emoji()));
}

#[test]
fn test_unavailable_source_exits_with_failure() {
    let (code, out, err) = run_with(&mut UnavailableSource, DisplayMode::Default);

    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty(), "no mood should be printed: {}", out);
    assert!(err.contains(" - moodfetch - ERROR - System performance analysis failed: "));
    assert!(err.contains("metrics backend unavailable"));
    assert_eq!(err.lines().count(), 1);
}

#[test]
fn test_malformed_reading_is_collection_failure() {
    let (code, out, err) = run_with(&mut MalformedSource, DisplayMode::Verbose);

    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(err.contains("System performance analysis failed: "));
    assert!(err.contains("CPU usage out of range"));
}
