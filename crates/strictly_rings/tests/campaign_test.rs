//! Tests for level packs and campaign progression.

use std::io::Write;
use strictly_rings::{
    Campaign, CampaignStatus, ConfigurationErrorKind, GameConfig, PegId, Progress, SelectOutcome,
};

const PACK: &str = r#"
capacity = 2

[[levels]]
peg_count = 2
pegs = [["red"], ["red"]]

[[levels]]
peg_count = 3
pegs = [["blue", "mystery"], ["red", "blue"], []]
mystery = [{ peg = 0, ring = 1, color = "red" }]
"#;

fn write_pack(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write pack");
    file
}

#[test]
fn test_load_pack_from_file() {
    let file = write_pack(PACK);
    let config = GameConfig::from_file(file.path()).expect("valid pack");
    assert_eq!(*config.capacity(), 2);
    assert_eq!(config.levels().len(), 2);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err.kind(), ConfigurationErrorKind::Read(_)));
}

#[test]
fn test_play_through_pack() {
    let file = write_pack(PACK);
    let config = GameConfig::from_file(file.path()).unwrap();
    let mut campaign = Campaign::new(config).unwrap();
    assert_eq!(campaign.start().unwrap(), CampaignStatus::Loaded(0));

    campaign.select_peg(PegId(1)).unwrap();
    let outcome = campaign.select_peg(PegId(0)).unwrap();
    assert!(matches!(outcome, SelectOutcome::Moved { won: true, .. }));
    assert!(campaign.progress().completed().contains(&0));

    assert_eq!(campaign.advance().unwrap(), CampaignStatus::Loaded(1));
    assert!(!campaign.is_level_won());

    // Level 2: [blue, ?red] [red, blue] []
    let moves = [(0, 2), (1, 0), (2, 1)];
    let mut last = None;
    for (from, to) in moves {
        campaign.select_peg(PegId(from)).unwrap();
        last = Some(campaign.select_peg(PegId(to)).unwrap());
    }
    assert!(matches!(last, Some(SelectOutcome::Moved { won: true, .. })));
    assert_eq!(campaign.progress().completed().len(), 2);
    assert_eq!(campaign.advance().unwrap(), CampaignStatus::Finished);
}

#[test]
fn test_restart_level_restores_layout() {
    let file = write_pack(PACK);
    let mut campaign = Campaign::resume(
        GameConfig::from_file(file.path()).unwrap(),
        Progress::new(1, Default::default()),
    )
    .unwrap();
    campaign.start().unwrap();
    let initial = campaign.session().board().clone();

    campaign.select_peg(PegId(0)).unwrap();
    campaign.select_peg(PegId(2)).unwrap();
    assert_ne!(campaign.session().board(), &initial);

    campaign.restart_level().unwrap();
    assert_eq!(campaign.session().board(), &initial);
}

#[test]
fn test_progress_round_trips_through_json() {
    let file = write_pack(PACK);
    let mut campaign = Campaign::new(GameConfig::from_file(file.path()).unwrap()).unwrap();
    campaign.start().unwrap();
    campaign.select_peg(PegId(0)).unwrap();
    campaign.select_peg(PegId(1)).unwrap();

    let saved = serde_json::to_string(&campaign.progress()).unwrap();
    let restored: Progress = serde_json::from_str(&saved).unwrap();
    assert_eq!(restored, campaign.progress());
    assert_eq!(*restored.level_index(), 0);
}

#[test]
fn test_bundled_pack_is_valid_and_first_level_solvable() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../levels/default.toml");
    let config = GameConfig::from_file(path).expect("bundled pack loads");
    assert_eq!(config.levels().len(), 3);
    for level in config.levels() {
        assert_eq!(level.total_ring_count(), level.total_distinct_colors() * 4);
    }

    let mut campaign = Campaign::new(config).unwrap();
    campaign.start().unwrap();
    let picks = [(0, 2), (1, 3), (0, 3), (1, 2), (0, 2), (1, 3), (0, 3), (1, 2)];
    for (from, to) in picks {
        campaign.select_peg(PegId(from)).unwrap();
        campaign.select_peg(PegId(to)).unwrap();
    }
    assert!(campaign.is_level_won());
}
