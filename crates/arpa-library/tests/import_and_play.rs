use std::{
    fs,
    path::Path,
    sync::{Arc, Mutex},
};

use arpa_core::{EntryCollection, EntryState, MediaType, StateGlyph, tags};
use arpa_library::{Importer, LibraryConfigBuilder, LibraryError, Player};
use tempfile::tempdir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[test]
fn imported_album_resolves_cover_and_plays() {
    let tmp = tempdir().unwrap();
    let album = tmp.path().join("Artist").join("Album");
    touch(&album.join("01 Intro.mp3"));
    touch(&album.join("02 Song.mp3"));
    touch(&album.join("folder.jpg"));
    touch(&tmp.path().join("Loose").join("clip.mp4"));

    let config = LibraryConfigBuilder::default()
        .missing_artwork("/nonexistent/missing.svg")
        .build()
        .unwrap();
    let fallback = config.fallback_artwork();

    let mut collection = EntryCollection::new();
    let summary = Importer::new(config)
        .spawn(tmp.path())
        .unwrap()
        .drain_into(&mut collection);

    assert_eq!(summary.added, 3);
    assert_eq!(summary.duplicates, 0);

    let intro = collection.find_by_location(album.join("01 Intro.mp3")).unwrap();
    let clip = collection
        .find_by_location(tmp.path().join("Loose").join("clip.mp4"))
        .unwrap();

    let entry = collection.get(intro).unwrap();
    assert_eq!(entry.media_type(), MediaType::Song);
    assert_eq!(entry.tag_str(tags::TITLE), Some("01 Intro"));
    assert_eq!(entry.art_path_or(&fallback), album.join("folder.jpg"));

    let entry = collection.get(clip).unwrap();
    assert_eq!(entry.media_type(), MediaType::Video);
    assert_eq!(entry.art_path_or(&fallback), fallback);

    let glyphs = Arc::new(Mutex::new(Vec::new()));
    {
        let glyphs = glyphs.clone();
        collection
            .get_mut(intro)
            .unwrap()
            .subscribe(move |state| glyphs.lock().unwrap().push(state.glyph()));
    }

    let mut player = Player::new();
    player.play(&mut collection, intro).unwrap();
    player.pause(&mut collection).unwrap();
    player.play(&mut collection, clip).unwrap();

    assert_eq!(
        *glyphs.lock().unwrap(),
        vec![Some(StateGlyph::Play), Some(StateGlyph::Pause), None]
    );
    assert_eq!(collection.get(clip).unwrap().state(), EntryState::Playing);
}

#[test]
fn reimport_reports_duplicates() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("a.flac"));
    touch(&tmp.path().join("b.flac"));

    let importer = Importer::new(Default::default());
    let mut collection = EntryCollection::new();

    let first = importer.spawn(tmp.path()).unwrap().drain_into(&mut collection);
    let second = importer.spawn(tmp.path()).unwrap().drain_into(&mut collection);

    assert_eq!(first.added, 2);
    assert_eq!(second.added, 0);
    assert_eq!(second.duplicates, 2);
    assert_eq!(collection.len(), 2);
}

#[test]
fn deleted_file_shows_error_glyph() {
    let tmp = tempdir().unwrap();
    let song = tmp.path().join("gone.mp3");
    touch(&song);

    let mut collection = EntryCollection::new();
    Importer::new(Default::default())
        .spawn(tmp.path())
        .unwrap()
        .drain_into(&mut collection);

    fs::remove_file(&song).unwrap();
    let id = collection.find_by_location(&song).unwrap();

    let err = Player::new().play(&mut collection, id).unwrap_err();
    assert!(matches!(err, LibraryError::Missing(_)));
    assert_eq!(
        collection.get(id).unwrap().state_glyph(),
        Some(StateGlyph::Error)
    );
}
