//! Integration tests: batches with mixed outcomes keep going and tally correctly.

mod common;

use common::image_server::{self, Route};
use imgfetch_core::batch::{run_batch, BatchObserver, NoopObserver};
use imgfetch_core::{FetchError, FetchOutcome, Fetcher};
use tempfile::tempdir;

#[test]
fn connection_error_in_the_middle_does_not_stop_the_batch() {
    let server = image_server::start(vec![
        ("/one.jpg", Route::ok("image/jpeg", b"\xff\xd8one")),
        ("/three.png", Route::ok("image/png", b"\x89PNGthree")),
    ]);
    let dir = tempdir().unwrap();
    let urls = vec![
        server.url("/one.jpg"),
        image_server::closed_port_url("/two.jpg"),
        server.url("/three.png"),
    ];

    let report = run_batch(&Fetcher::default(), &urls, dir.path(), &mut NoopObserver);

    assert_eq!(report.total(), 3);
    assert_eq!(report.successes, 2);
    assert_eq!(report.failures(), 1);
    assert!(report.outcomes[0].1.is_success());
    assert!(matches!(
        report.outcomes[1].1,
        FetchOutcome::Failed(FetchError::Connection { .. })
    ));
    assert!(report.outcomes[2].1.is_success());
    assert_eq!(server.hits("/three.png"), 1);
    assert!(dir.path().join("one.jpg").exists());
    assert!(dir.path().join("three.png").exists());
    assert_eq!(report.summary_line(), "Summary: 2/3 images successfully fetched");
}

#[test]
fn mixed_failures_and_duplicates_are_tallied_in_order() {
    let server = image_server::start(vec![
        ("/cat.png", Route::ok("image/png", b"\x89PNGcat")),
        ("/page", Route::ok("text/html", b"<html/>")),
        ("/boom.jpg", Route::status(500)),
    ]);
    let dir = tempdir().unwrap();
    let urls = vec![
        server.url("/cat.png"),
        server.url("/page"),
        server.url("/boom.jpg"),
        server.url("/cat.png"),
    ];

    struct Order(Vec<usize>);
    impl BatchObserver for Order {
        fn on_finish(&mut self, index: usize, _total: usize, _url: &str, _o: &FetchOutcome) {
            self.0.push(index);
        }
    }
    let mut order = Order(Vec::new());

    let report = run_batch(&Fetcher::default(), &urls, dir.path(), &mut order);

    assert_eq!(order.0, vec![1, 2, 3, 4]);
    assert_eq!(report.successes, 2);
    assert!(matches!(report.outcomes[0].1, FetchOutcome::Saved { .. }));
    assert!(matches!(
        report.outcomes[1].1,
        FetchOutcome::Failed(FetchError::InvalidContentType { .. })
    ));
    assert_eq!(report.outcomes[2].1.error().and_then(FetchError::status), Some(500));
    assert!(matches!(report.outcomes[3].1, FetchOutcome::Duplicate { .. }));
}
