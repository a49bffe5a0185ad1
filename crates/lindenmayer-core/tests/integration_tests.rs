//! Integration tests for lindenmayer-core through the public API.

use lindenmayer_core::{LSystem, LSystemError, Rule, SystemDescription};

// ============================================================================
// Fixtures
// ============================================================================

fn bracketed_plant() -> LSystem {
    LSystem::new("F").with_rules([Rule::new("F", "FF[FFA]")])
}

fn two_rule_plant() -> LSystem {
    LSystem::new("F").with_rules([Rule::new("F", "FF[A]"), Rule::new("A", "FB")])
}

// ============================================================================
// Generation advance
// ============================================================================

#[test]
fn test_end_to_end_generations() {
    let mut system = bracketed_plant();

    system.increment();
    assert_eq!(system.sentence(), "FF[FFA]");

    system.increment();
    assert_eq!(system.sentence(), "FF[FFA]FF[FFA][FF[FFA]FF[FFA]A]");
}

#[test]
fn test_iterate_matches_repeated_increment() {
    let mut iterated = bracketed_plant();
    iterated.iterate(2);

    let mut stepped = bracketed_plant();
    stepped.increment();
    stepped.increment();

    assert_eq!(iterated.sentence(), stepped.sentence());
    assert_eq!(iterated.sentence(), "FF[FFA]FF[FFA][FF[FFA]FF[FFA]A]");
}

#[test]
fn test_multi_rule_scenario() {
    let mut system = two_rule_plant();
    system.iterate(3);
    assert_eq!(system.sentence(), "FF[A]FF[A][FB]FF[A]FF[A][FB][FF[A]B]");
}

#[test]
fn test_iteration_composes() {
    for (n, m) in [(0, 0), (0, 3), (2, 0), (1, 2), (2, 2)] {
        let mut split = two_rule_plant();
        split.iterate(n);
        split.iterate(m);

        let mut whole = two_rule_plant();
        whole.iterate(n + m);

        assert_eq!(split.sentence(), whole.sentence(), "n={n} m={m}");
        assert_eq!(split.generation(), whole.generation());
    }
}

#[test]
fn test_no_rules_leaves_sentence_unchanged() {
    let mut system = LSystem::new("X[+F]-F");
    system.increment();
    system.iterate(10);
    assert_eq!(system.sentence(), "X[+F]-F");
}

// ============================================================================
// Matching policy
// ============================================================================

#[test]
fn test_priority_follows_registration_order() {
    let short_first = LSystem::new("AB").with_rules([Rule::new("A", "1"), Rule::new("AB", "2")]);
    assert_eq!(short_first.successor("AB"), "1B");

    let long_first = LSystem::new("AB").with_rules([Rule::new("AB", "2"), Rule::new("A", "1")]);
    assert_eq!(long_first.successor("AB"), "2");
}

#[test]
fn test_successor_not_rescanned() {
    let mut system = LSystem::new("A").with_rules([Rule::new("A", "AA")]);
    system.increment();
    assert_eq!(system.sentence(), "AA");
}

#[test]
fn test_successor_lookahead_is_stateless() {
    let system = LSystem::new("F").with_rules([Rule::new("F", "FFAFF")]);

    let first = system.successor("FF");
    let second = system.successor("FF");

    assert_eq!(first, "FFAFFFFAFF");
    assert_eq!(first, second);
    assert_eq!(system.sentence(), "F");
}

// ============================================================================
// Rule management
// ============================================================================

#[test]
fn test_replace_rules_scenario() {
    let mut system = two_rule_plant();
    system.iterate(1);
    assert_eq!(system.sentence(), "FF[A]");

    system.replace_rules([Rule::new("F", "G")]);
    assert_eq!(system.current_rules(), &[Rule::new("F", "G")]);

    system.iterate(1);
    // A is untouched: its rule was discarded.
    assert_eq!(system.sentence(), "GG[A]");
}

#[test]
fn test_rules_from_pairs() {
    let mut system = LSystem::new("F");
    system
        .add_rules_from_pairs(&["F", "FF[A]", "A", "FB"])
        .unwrap();

    assert_eq!(
        system.current_rules(),
        &[Rule::new("F", "FF[A]"), Rule::new("A", "FB")]
    );

    system.iterate(3);
    assert_eq!(system.sentence(), "FF[A]FF[A][FB]FF[A]FF[A][FB][FF[A]B]");
}

#[test]
fn test_rules_from_pairs_rejects_odd_count() {
    let mut system = two_rule_plant();
    let before = system.current_rules().to_vec();

    let result = system.add_rules_from_pairs(&["F", "FF", "A"]);

    assert!(matches!(
        result,
        Err(LSystemError::InvalidArgumentCount { count: 3 })
    ));
    assert_eq!(system.current_rules(), before.as_slice());
    assert_eq!(system.sentence(), "F");
}

// ============================================================================
// Descriptions
// ============================================================================

#[test]
fn test_description_file_roundtrip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("systems").join("plant.json");

    let description = SystemDescription::new("F")
        .with_name("plant")
        .with_rule(Rule::new("F", "FF[A]"))
        .with_rule(Rule::new("A", "FB"))
        .with_generations(3);
    description.save(&path)?;

    let loaded = SystemDescription::load(&path)?;
    assert_eq!(loaded, description);
    assert_eq!(
        loaded.expand().sentence(),
        "FF[A]FF[A][FB]FF[A]FF[A][FB][FF[A]B]"
    );

    Ok(())
}

#[test]
fn test_description_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SystemDescription::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LSystemError::Io(_)));
}
