//! End-to-end checks of the link pipeline and answer cleanup.

use srclink_core::answer::{strip_filenames_before_links, strip_sources_block};
use srclink_core::links::{
    canonical_links, dedupe_by_base, extract_links, normalize_url, resolve_sources,
    DisplayOptions, SourceOrigin,
};

#[test]
fn markdown_link_counted_once_across_passes() {
    let text = "Read [the notice](https://x.test/a). Mirror: https://x.test/a";
    let links = extract_links(text);
    assert_eq!(
        links.iter().filter(|l| l.as_str() == "https://x.test/a").count(),
        1
    );
}

#[test]
fn base_dedupe_is_order_preserving_subset() {
    let input = extract_links(
        "https://b.test/x?1 https://a.test/y https://b.test/x?2 https://c.test https://a.test/y?z",
    );
    let out = dedupe_by_base(&input);
    assert!(out.len() <= input.len());
    assert_eq!(
        out,
        vec!["https://b.test/x?1", "https://a.test/y", "https://c.test"]
    );
}

#[test]
fn normalization_examples() {
    assert_eq!(normalize_url("example.com/page."), "https://example.com/page");
    assert_eq!(
        normalize_url("https://x.test/report/download"),
        "https://x.test/report/download/source.pdf"
    );
    let with_param = normalize_url("https://x.test/file?download=");
    assert!(with_param.ends_with("download=source.pdf"));
}

#[test]
fn normalization_idempotent() {
    for url in [
        "https://example.com/page",
        "https://x.test/file?download=source.pdf",
        "https://x.test/report/download/source.pdf",
        "http://x.test/a/b?c=d",
    ] {
        assert_eq!(normalize_url(url), url);
    }
}

#[test]
fn cleaner_examples() {
    assert_eq!(
        strip_sources_block("Answer text\nSources: http://a"),
        "Answer text"
    );
    assert_eq!(
        strip_filenames_before_links("report.pdf, https://x.test/doc"),
        ", https://x.test/doc"
    );
}

#[test]
fn realistic_model_answer() {
    let raw = "The MSc chemistry practical exam is on 12 March in Lab 3 \
               (see exam_notice.pdf, https://uni.test/notices/881/download).\n\n\
               Sources: https://uni.test/notices/881/download, \
               [Timetable](https://www.uni.test/timetable?sem=2)\u{200B} \
               https://www.uni.test/timetable?sem=3";
    assert_eq!(
        canonical_links(raw),
        vec![
            "https://www.uni.test/timetable?sem=2",
            "https://uni.test/notices/881/download/source.pdf",
        ]
    );

    let sources = resolve_sources(raw, &[], &DisplayOptions::default());
    assert!(sources.iter().all(|s| s.origin == SourceOrigin::Extracted));
    assert_eq!(sources[0].label, "uni.test/timetable");
    assert_eq!(sources[1].label, "uni.test/notices/881/download/so…");
}

#[test]
fn no_links_means_no_sources() {
    assert!(canonical_links("").is_empty());
    assert!(canonical_links("I don't know based on the available notices.").is_empty());
}
