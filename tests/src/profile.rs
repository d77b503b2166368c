use std::collections::VecDeque;

use async_trait::async_trait;
use bodyscale_common::config::Locale;
use bodyscale_common::error::{CapabilityError, CapabilityResult};
use bodyscale_core::capability::{BarcodeSource, Camera, PhotoUri, UrlOpener};
use bodyscale_core::session::{Notice, ProfileSession, is_url};

/// Grants access after the user refused a given number of times.
struct StubbornUserCamera {
    refusals: usize,
}

#[async_trait]
impl Camera for StubbornUserCamera {
    async fn request_permission(&mut self) -> bool {
        if self.refusals == 0 {
            return true;
        }
        self.refusals -= 1;
        false
    }

    async fn capture(&mut self) -> CapabilityResult<PhotoUri> {
        Err(CapabilityError::Capture("lens covered".into()))
    }
}

struct Frames(VecDeque<&'static str>);

#[async_trait]
impl BarcodeSource for Frames {
    async fn next_detection(&mut self) -> Option<String> {
        self.0.pop_front().map(String::from)
    }
}

struct BrokenOpener;

#[async_trait]
impl UrlOpener for BrokenOpener {
    async fn open(&mut self, url: &str) -> CapabilityResult<()> {
        Err(CapabilityError::Unopenable(url.into()))
    }
}

#[tokio::test]
async fn permission_granted_on_second_request() {
    let mut session = ProfileSession::new();
    let mut camera = StubbornUserCamera { refusals: 1 };

    assert!(!session.ensure_permission(&mut camera).await);
    assert!(session.ensure_permission(&mut camera).await);
    assert_eq!(session.permission(), Some(true));
}

#[tokio::test]
async fn failed_capture_keeps_previous_state() {
    let mut session = ProfileSession::new();
    let mut camera = StubbornUserCamera { refusals: 0 };
    session.ensure_permission(&mut camera).await;

    let err = session.take_photo(&mut camera).await.unwrap_err();
    assert_eq!(err.to_string(), "capture failed: lens covered");
    assert_eq!(session.photo(), None);
}

#[tokio::test]
async fn rescanning_replaces_the_payload() {
    let mut session = ProfileSession::new();
    let mut camera = StubbornUserCamera { refusals: 0 };
    session.ensure_permission(&mut camera).await;

    let mut frames = Frames(VecDeque::from(["https://one.example", "mailto:two@example.org"]));

    session.scan(&mut frames).await.unwrap();
    assert_eq!(session.link(), Some("https://one.example"));

    let notice = session.scan(&mut frames).await.unwrap();
    assert_eq!(notice, Some(Notice::QrDetected("mailto:two@example.org".into())));
    assert_eq!(session.link(), None);
    assert_eq!(
        notice.unwrap().message(Locale::Es),
        "Contenido: mailto:two@example.org"
    );
}

#[tokio::test]
async fn unopenable_link_is_reported_once() {
    let mut session = ProfileSession::new();
    session.start_scan();
    session.on_detect("http://unreachable.example".into());

    let notice = session.open_link(&mut BrokenOpener).await;
    assert_eq!(notice, Some(Notice::LinkFailed));
    // State is untouched, the user may try again
    assert_eq!(session.qr_data(), Some("http://unreachable.example"));
}

#[test]
fn url_detection_is_prefix_based() {
    assert!(is_url("http://a"));
    assert!(is_url("https://a"));
    assert!(!is_url("HTTP://a"));
    assert!(!is_url("ftp://a"));
    assert!(!is_url(" https://a"));
}
