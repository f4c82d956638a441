use hostel_compare_core::segmentation::{segment, AnalysisSegmenter};
use hostel_compare_core::types::{AnalysisPoint, PointId};

fn point(id: &str, title: &str, content: &str) -> AnalysisPoint {
    AnalysisPoint::new(PointId::new(id), title, content)
}

#[test]
fn empty_and_whitespace_only_text_yield_nothing() {
    assert!(segment("").is_empty());
    assert!(segment("   \n  ").is_empty());
    assert!(segment("\n\n\t\n").is_empty());
}

#[test]
fn single_sentence_becomes_overview() {
    assert_eq!(
        segment("Just a sentence."),
        vec![point("overview", "Overview", "Just a sentence.")]
    );
}

#[test]
fn unstructured_lines_merge_into_one_overview() {
    assert_eq!(
        segment("Intro line.\nAnother intro line."),
        vec![point("overview", "Overview", "Intro line.\nAnother intro line.")]
    );
}

#[test]
fn leading_blank_lines_are_ignored() {
    assert_eq!(
        segment("\n\n   \nIntro.\n\nMore."),
        vec![point("overview", "Overview", "Intro.\nMore.")]
    );
}

#[test]
fn bold_headings_become_numbered_points() {
    let points = segment(
        "1. **Location**: Central and walkable.\n2. **Price**: Slightly higher than average.",
    );
    assert_eq!(
        points,
        vec![
            point("1", "Location", "Central and walkable."),
            point("2", "Price", "Slightly higher than average."),
        ]
    );
}

#[test]
fn continuation_lines_join_the_open_point() {
    let points = segment("1. Location: Central.\nMore detail on same line group.\n2. Price: High.");
    assert_eq!(
        points,
        vec![
            point("1", "Location", "Central.\nMore detail on same line group."),
            point("2", "Price", "High."),
        ]
    );
}

#[test]
fn overview_precedes_numbered_points() {
    let points = segment("Overview text.\n1. **Safety**: Well lit streets.");
    assert_eq!(
        points,
        vec![
            point("overview", "Overview", "Overview text."),
            point("1", "Safety", "Well lit streets."),
        ]
    );
}

#[test]
fn prose_after_a_heading_never_creates_a_second_overview() {
    let points = segment("Intro.\n1. Price: Low.\nClosing remark.\n\nSigned, the assistant.");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], point("overview", "Overview", "Intro."));
    assert_eq!(
        points[1],
        point("1", "Price", "Low.\nClosing remark.\n\nSigned, the assistant.")
    );
}

#[test]
fn bold_form_wins_over_plain_form() {
    // The plain form alone would keep the markers in the title.
    let points = segment("1. **Rating**: 9.1 vs 8.4");
    assert_eq!(points, vec![point("1", "Rating", "9.1 vs 8.4")]);
}

#[test]
fn heading_closes_previous_point_even_when_empty() {
    let points = segment("1. Price:\n2. Rating: Good.");
    assert_eq!(points, vec![point("1", "Price", ""), point("2", "Rating", "Good.")]);
}

#[test]
fn nested_numbered_line_in_a_body_closes_the_point() {
    let points = segment("1. **Facilities**: Both have:\n3. **Wifi**: free\n- Kitchen");
    assert_eq!(
        points,
        vec![
            point("1", "Facilities", "Both have:"),
            point("3", "Wifi", "free\n- Kitchen"),
        ]
    );
}

#[test]
fn bullets_are_never_headings() {
    let points = segment("- Price: cheap\n* Rating: high");
    assert_eq!(
        points,
        vec![point("overview", "Overview", "- Price: cheap\n* Rating: high")]
    );
}

#[test]
fn numbered_line_without_colon_is_prose() {
    let points = segment("1. No colon here\n2. Still none");
    assert_eq!(
        points,
        vec![point("overview", "Overview", "1. No colon here\n2. Still none")]
    );
}

#[test]
fn numerals_keep_their_spelling_and_may_repeat() {
    let points = segment("01. A: x\n1. B: y\n1. C: z");
    let ids: Vec<&str> = points.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["01", "1", "1"]);
}

#[test]
fn crlf_input_segments_like_lf_input() {
    assert_eq!(
        segment("Intro.\r\n1. **Price**: Low.\r\nStill low.\r\n"),
        segment("Intro.\n1. **Price**: Low.\nStill low.\n")
    );
}

#[test]
fn content_never_starts_or_ends_with_a_separator() {
    let text = "\n1. Price:\n\n\nCheap.\n\n2. Rating: 9\n\n\n";
    for p in segment(text) {
        assert!(!p.content.starts_with('\n'), "{:?}", p);
        assert!(!p.content.ends_with('\n'), "{:?}", p);
    }
}

#[test]
fn default_segmenter_matches_free_function() {
    let text = "Intro\n1. **A**: a\nmore\n2. B: b";
    assert_eq!(AnalysisSegmenter::default().segment(text), segment(text));
}
