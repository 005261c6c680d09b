use card_sheet::*;
use std::path::Path;

async fn touch(dir: &Path, name: &str, bytes: &[u8]) {
    tokio::fs::write(dir.join(name), bytes).await.unwrap();
}

#[tokio::test]
async fn test_only_jpeg_files_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.jpg", b"a").await;
    touch(dir.path(), "b.JPEG", b"b").await;
    touch(dir.path(), "c.png", b"c").await;
    touch(dir.path(), "notes.txt", b"d").await;
    tokio::fs::create_dir(dir.path().join("nested.jpg"))
        .await
        .unwrap();

    let cards = load_card_images(dir.path()).await.unwrap();
    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["a.jpg", "b.JPEG"]);
}

#[tokio::test]
async fn test_cards_sorted_by_file_name() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "zeta.jpg", b"z").await;
    touch(dir.path(), "alpha.jpg", b"a").await;
    touch(dir.path(), "2_mid.jpg", b"m").await;

    let cards = load_card_images(dir.path()).await.unwrap();
    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["2_mid.jpg", "alpha.jpg", "zeta.jpg"]);
}

#[tokio::test]
async fn test_repeat_count_and_bytes() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "3_goblin.jpg", b"goblin").await;
    touch(dir.path(), "elf.jpg", b"elf").await;

    let cards = load_card_images(dir.path()).await.unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0], CardImage::new("3_goblin.jpg", b"goblin".to_vec(), 3));
    assert_eq!(cards[1], CardImage::new("elf.jpg", b"elf".to_vec(), 1));
}

#[tokio::test]
async fn test_zero_repeat_count_skipped() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "0_token.jpg", b"t").await;
    touch(dir.path(), "1_card.jpg", b"c").await;

    let cards = load_card_images(dir.path()).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "1_card.jpg");
}

#[tokio::test]
async fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let cards = load_card_images(dir.path()).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn test_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let result = load_card_images(&missing).await;
    match result {
        Err(CardSheetError::SourceRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected SourceRead error, got {:?}", other),
    }
}
