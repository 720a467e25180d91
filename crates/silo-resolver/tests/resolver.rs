use silo_resolver::{ArtifactResolver, Naming, ResolveError, Version};
use silo_store::MemoryStore;

fn release_bucket() -> MemoryStore {
    MemoryStore::new()
        .with_key("rel/[db,1.2.0]linux.tgz")
        .with_key("rel/[db,1.2.0]windows.tgz")
        .with_key("rel/[db,2.0.0]linux.tgz")
        .with_key("rel/[cache,3.1.4]linux.tgz")
        .with_key("rel/unrelated-readme.txt")
}

fn resolver(store: MemoryStore) -> ArtifactResolver<MemoryStore> {
    ArtifactResolver::new(store, Naming::new("rel"))
}

#[tokio::test]
async fn versions_are_distinct_and_first_seen_ordered() {
    let store = release_bucket()
        // duplicate version in another variant must not repeat
        .with_key("rel/[db,1.2.0]darwin.tgz");
    let versions = resolver(store).list_versions("db").await.unwrap();
    assert_eq!(
        versions,
        vec![Version::new("1.2.0"), Version::new("2.0.0")]
    );
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let err = resolver(release_bucket())
        .list_versions("queue")
        .await
        .unwrap_err();
    match err {
        ResolveError::NoVersionsForSlug { slug } => assert_eq!(slug, "queue"),
        other => panic!("expected NoVersionsForSlug, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_bucket_fails_both_queries() {
    let err = resolver(MemoryStore::new())
        .list_versions("db")
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::EmptyBucket));

    let err = resolver(MemoryStore::new())
        .resolve("db", "1.2.0", "*")
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::EmptyBucket));
}

#[tokio::test]
async fn glob_disambiguates_platform_variants() {
    let artifact = resolver(release_bucket())
        .resolve("db", "1.2.0", "*linux*")
        .await
        .unwrap();
    assert_eq!(artifact.key(), "rel/[db,1.2.0]linux.tgz");
}

#[tokio::test]
async fn missing_version_fails_before_glob_matching() {
    // The glob is invalid, but zero prefix candidates must win.
    let err = resolver(release_bucket())
        .resolve("db", "9.9.9", "[")
        .await
        .unwrap_err();
    match err {
        ResolveError::NoPrefixMatch { slug, version } => {
            assert_eq!(slug, "db");
            assert_eq!(version, "9.9.9");
        }
        other => panic!("expected NoPrefixMatch, got {other:?}"),
    }
}

#[tokio::test]
async fn prefix_match_message_points_at_upstream_persistence() {
    let err = resolver(release_bucket())
        .resolve("db", "9.9.9", "*")
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("[db,9.9.9]"));
    assert!(message.contains("persisted"));
}

#[tokio::test]
async fn unmatched_glob_is_not_found() {
    let err = resolver(release_bucket())
        .resolve("db", "1.2.0", "*.zip")
        .await
        .unwrap_err();
    match err {
        ResolveError::GlobMatchesNone { glob } => assert_eq!(glob, "*.zip"),
        other => panic!("expected GlobMatchesNone, got {other:?}"),
    }
}

#[tokio::test]
async fn ambiguous_glob_enumerates_every_match() {
    let err = resolver(release_bucket())
        .resolve("db", "1.2.0", "*.tgz")
        .await
        .unwrap_err();
    match &err {
        ResolveError::GlobAmbiguous { glob, matches } => {
            assert_eq!(glob, "*.tgz");
            assert_eq!(
                matches,
                &vec![
                    "rel/[db,1.2.0]linux.tgz".to_string(),
                    "rel/[db,1.2.0]windows.tgz".to_string(),
                ]
            );
        }
        other => panic!("expected GlobAmbiguous, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("rel/[db,1.2.0]linux.tgz"));
    assert!(message.contains("rel/[db,1.2.0]windows.tgz"));
}

#[tokio::test]
async fn invalid_glob_is_reported_when_candidates_exist() {
    let err = resolver(release_bucket())
        .resolve("db", "1.2.0", "[")
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::BadGlob { .. }));
}

#[tokio::test]
async fn question_mark_and_class_globs_match_base_names() {
    let store = MemoryStore::new()
        .with_key("rel/[db,1.2.0]build-1.tgz")
        .with_key("rel/[db,1.2.0]build-2.zip");
    let artifact = resolver(store)
        .resolve("db", "1.2.0", "?db,1.2.0?build-[0-9].tgz")
        .await
        .unwrap();
    assert_eq!(artifact.key(), "rel/[db,1.2.0]build-1.tgz");
}

#[tokio::test]
async fn works_without_a_path_prefix() {
    let store = MemoryStore::new()
        .with_key("[db,1.2.0]linux.tgz")
        .with_key("[db,2.0.0]linux.tgz");
    let resolver = ArtifactResolver::new(store, Naming::new(""));
    let versions = resolver.list_versions("db").await.unwrap();
    assert_eq!(versions.len(), 2);
    let artifact = resolver.resolve("db", "2.0.0", "*linux*").await.unwrap();
    assert_eq!(artifact.key(), "[db,2.0.0]linux.tgz");
}
