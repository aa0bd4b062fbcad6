//! Song annotation tests.
//!
//! Runs whole songs through parse, transform and HTML synthesis and checks
//! the rendered markup.

use proptest::prelude::*;
use songprint::export::synthesize_html;
use songprint::ir::{NodeId, Role};
use songprint::{Song, parse_song, transform_song};

fn render(source: &str) -> String {
    Song::from_source("song.txt", source).markup()
}

// ============================================================================
// Paragraph roles
// ============================================================================

#[test]
fn test_chorus_labels() {
    for label in ["Chorus:", "chorus", "REFR:", "Refräng", "  Chorus:  "] {
        let html = render(&format!("Verse one\n\n{label}\nSing along\n"));
        assert!(
            html.contains(r#"<p class="chorus">Sing along</p>"#),
            "label {label:?} gave {html}"
        );
        assert!(!html.to_lowercase().contains("chorus:"));
    }
}

#[test]
fn test_comment_label() {
    let html = render("Comment:\nPlay it slow\n");
    assert!(html.contains(r#"<p class="comment">Play it slow</p>"#));
}

#[test]
fn test_verse_text_is_preserved() {
    let html = render("Choruses are fun\nsing them loud\n");
    assert!(html.contains("<p class=\"verse\">Choruses are fun<br/>\nsing them loud</p>"));
}

#[test]
fn test_label_only_paragraph_is_empty_chorus() {
    let html = render("Verse\n\nChorus:\n");
    assert!(html.contains(r#"<p class="verse">Verse</p>"#));
    assert!(html.contains(r#"<p class="chorus"></p>"#));
}

// ============================================================================
// Chords
// ============================================================================

#[test]
fn test_extended_chord_flags_paragraph() {
    let html = render("Oh [Am7]darling\n");
    assert_eq!(html.matches("<span class=\"chord\">").count(), 1);
    assert!(html.contains(r#"<p class="verse with-chords">Oh <span class="chord">Am7</span>darling</p>"#));
}

#[test]
fn test_invalid_chord_stays_literal() {
    let html = render("Sing [H]loud [x2]\n");
    assert!(!html.contains("class=\"chord\""));
    assert!(html.contains("Sing [H]loud [x2]"));
    assert!(html.contains(r#"<p class="verse">"#));
}

#[test]
fn test_chords_in_chorus() {
    let html = render("Chorus:\n[G]Hey [D/F#]ho\n");
    assert!(html.contains(r#"<p class="chorus with-chords"><span class="chord">G</span>Hey [D/F#]ho</p>"#));
}

#[test]
fn test_chord_on_label_line_is_kept() {
    let html = render("Verse\n\n[G]Chorus:\nla la\n");
    assert!(html.contains(r#"<p class="chorus with-chords"><span class="chord">G</span>la la</p>"#));
}

#[test]
fn test_chord_before_parenthesis() {
    let html = render("I [G](oh) sing\n");
    assert!(html.contains(r#"<p class="verse with-chords">I <span class="chord">G</span>(oh) sing</p>"#));
    assert!(!html.contains("<a "));
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_only_artist_gives_single_entry() {
    let html = render("artist: Tove Lo\n\nLyrics\n");
    assert!(html.contains("<ul class=\"song-meta\">\n  <li>Artist: Tove Lo</li>\n</ul>\n"));
    assert!(!html.contains("song-title"));
}

#[test]
fn test_header_order() {
    let html = render("Year: 2013\nAuthor: Tove Lo\nArtist: Tove Lo\nTitle: Habits\n\nI eat my dinner\n");
    let title = html.find("<h1 class=\"song-title\">Habits</h1>").unwrap();
    let artist = html.find("<li>Artist: Tove Lo</li>").unwrap();
    let author = html.find("<li>Author: Tove Lo</li>").unwrap();
    let year = html.find("<li>Year: 2013</li>").unwrap();
    let body = html.find("I eat my dinner").unwrap();
    assert!(title < artist && artist < author && author < year && year < body);
}

#[test]
fn test_malformed_year_is_dropped() {
    let html = render("title: Song\nyear: long ago\n\nLyrics\n");
    assert!(!html.contains("Year"));
    assert!(!html.contains("song-meta"));
}

#[test]
fn test_year_is_shown_as_written() {
    let html = render("title: Old Song\nyear: 0042\n\nLyrics\n");
    assert!(html.contains("<li>Year: 0042</li>"));
}

#[test]
fn test_single_line_opening_stanza_is_front_matter() {
    let html = render("Comment: capo 2\n\nI [C]sing\n");
    assert!(!html.contains("capo 2"));
    assert!(!html.contains("class=\"comment\""));
    assert!(html.contains(r#"<p class="verse with-chords">I <span class="chord">C</span>sing</p>"#));
}

#[test]
fn test_transform_runs_once() {
    let mut song = parse_song("title: Habits\nartist: Tove Lo\n\nLyrics\n");
    transform_song(&mut song.document, &song.meta);
    transform_song(&mut song.document, &song.meta);

    let headings = song
        .document
        .children(NodeId::ROOT)
        .filter(|&id| song.document.role(id) == Some(Role::Heading(1)))
        .count();
    assert_eq!(headings, 1);
    assert_eq!(synthesize_html(&song.document).matches("song-meta").count(), 1);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_unlabelled_paragraph_is_verse(
        lines in prop::collection::vec("[a-z][a-z ]{0,20}[a-z]", 1..4)
    ) {
        prop_assume!(!["chorus", "refr", "comment"].contains(&lines[0].trim()));

        let mut song = parse_song(&lines.join("\n"));
        transform_song(&mut song.document, &song.meta);

        let para = song.document.children(NodeId::ROOT).next().unwrap();
        prop_assert!(song.document.semantics.has_class(para, songprint::StyleClass::Verse));
        let expected: String = lines.concat();
        prop_assert_eq!(song.document.text_content(para), expected);
    }
}
