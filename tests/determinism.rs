use peerconnect::{rank, Engine, MatchWeights, PeerConnectConfig, Profile, ProfileId, TagSet};

fn tagged(id: u64, skills: &[&str], interests: &[&str]) -> Profile {
    Profile::with_tags(
        id,
        TagSet::from_strs(skills.iter().copied()),
        TagSet::from_strs(interests.iter().copied()),
    )
}

#[test]
fn repeated_recommendations_are_identical() {
    let mut config = PeerConnectConfig::default();
    config.store.seed_demo = true;
    let engine = Engine::from_config(&config).expect("engine");

    let first = engine.recommend(ProfileId(1)).expect("first run");
    for _ in 0..10 {
        assert_eq!(engine.recommend(ProfileId(1)).expect("rerun"), first);
    }
}

#[test]
fn equal_scores_keep_candidate_order() {
    let subject = tagged(1, &["rust"], &["go"]);
    let candidates = [
        tagged(5, &[], &["rust"]),
        tagged(2, &["go"], &[]),
        tagged(9, &[], &["rust"]),
    ];

    let ids: Vec<u64> = rank(&subject, &candidates, &MatchWeights::default())
        .into_iter()
        .map(|r| r.profile.id.0)
        .collect();
    assert_eq!(ids, [5, 2, 9]);
}

#[test]
fn duplicate_tags_collapse_before_scoring() {
    let subject = tagged(1, &["python", "python", "python"], &[]);
    let candidate = tagged(2, &[], &["python", "python"]);

    let recs = rank(&subject, &[candidate], &MatchWeights::default());
    assert_eq!(recs[0].score, 2);
    assert_eq!(recs[0].overlap.cross(), 1);
}

#[test]
fn tag_matching_is_case_sensitive() {
    let subject = tagged(1, &["Python"], &[]);
    let candidate = tagged(2, &[], &["python"]);
    assert!(rank(&subject, &[candidate], &MatchWeights::default()).is_empty());
}
