//! End-to-end: saved release pages through extraction, rendering and row removal.

use rellist_core::config::RellistConfig;
use rellist_core::document::{Document, HtmlDocument};
use rellist_core::job::run_job;

const STATS_PAGE: &str = include_str!("fixtures/stats_release.html");
const RAW_DATA_PAGE: &str = include_str!("fixtures/raw_data_release.html");

#[test]
fn stats2_preset_lists_each_category() {
    let cfg = RellistConfig::default();
    let settings = cfg.job_settings();
    let preset = cfg.preset("stats2").unwrap();
    let mut doc = HtmlDocument::parse(STATS_PAGE);

    let listings: Vec<String> = preset
        .jobs
        .iter()
        .map(|job| run_job(&mut doc, job, &settings).unwrap().listing)
        .collect();

    assert_eq!(
        listings[0],
        "CsvFile(\"all2/rrc00--as_stats2.csv\", \"/example/route_verification/releases/download/data-2/rrc00--as_stats2.csv\"), \
         CsvFile(\"all2/route-views2--as_stats2.csv\", \"/example/route_verification/releases/download/data-2/route-views2--as_stats2.csv\")"
    );
    assert_eq!(listings[1].matches("CsvFile(").count(), 1);
    assert!(listings[1].contains("all2/rrc00--as_pair_stats2.csv"));
    assert_eq!(listings[2].matches("CsvFile(").count(), 1);
    assert!(listings[3].contains("all2/rrc00--route_first_hop_stats2.csv"));

    // stats2 never removes rows.
    assert_eq!(doc.anchors().len(), 6);
}

#[test]
fn ribs_preset_uses_labels_and_removes_rows() {
    let cfg = RellistConfig::default();
    let settings = cfg.job_settings();
    let job = &cfg.preset("ribs").unwrap().jobs[0];
    let mut doc = HtmlDocument::parse(RAW_DATA_PAGE);

    let outcome = run_job(&mut doc, job, &settings).unwrap();
    assert_eq!(outcome.matched, 2);
    assert_eq!(outcome.removed, 2);

    let mut lines = outcome.listing.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ribs = [CsvFile(\"../data/ribs/pacwave.lax--rib.20230623.0000.bz2\", \
         \"https://github.com/example/route_verification/releases/download/raw-data/pacwave.lax--rib.20230623.0000.bz2\"), \
         CsvFile(\"../data/ribs/route-views.amsix--rib.20230623.0000.bz2\", \
         \"https://github.com/example/route_verification/releases/download/raw-data/route-views.amsix--rib.20230623.0000.bz2\")]"
    );
    assert!(lines.next().unwrap().starts_with("\"\"\"From <"));
    assert!(lines.next().is_none());

    let rewritten = doc.to_html();
    assert!(!rewritten.contains("0000.bz2"));
    assert!(rewritten.contains("irrs.tar.zst"));
    assert!(rewritten.contains("20230701.as-rel.bz2"));

    // Re-running against the rewritten page finds nothing left to list.
    let mut again = HtmlDocument::parse(&rewritten);
    let second = run_job(&mut again, job, &settings).unwrap();
    assert_eq!(second.matched, 0);
    assert!(second.listing.starts_with("ribs = []"));
}

#[test]
fn page_without_matches_renders_empty() {
    let cfg = RellistConfig::default();
    let settings = cfg.job_settings();
    let job = &cfg.preset("stats2").unwrap().jobs[0];
    let mut doc = HtmlDocument::parse(RAW_DATA_PAGE);
    let outcome = run_job(&mut doc, job, &settings).unwrap();
    assert_eq!(outcome.listing, "");
    assert_eq!(outcome.matched, 0);
}

#[test]
fn newline_in_href_stays_inside_one_line() {
    let page = "<ul><li><div><a href=\"/r/a\nb--as_stats2.csv\">a</a></div></li></ul>";
    let cfg = RellistConfig::default();
    let settings = cfg.job_settings();
    let job = &cfg.preset("stats2").unwrap().jobs[0];
    let mut doc = HtmlDocument::parse(page);

    let outcome = run_job(&mut doc, job, &settings).unwrap();
    assert_eq!(outcome.matched, 1);
    assert!(!outcome.listing.contains('\n'));
    assert_eq!(
        outcome.listing,
        r#"CsvFile("all2/a\nb--as_stats2.csv", "/r/a\nb--as_stats2.csv")"#
    );
}
