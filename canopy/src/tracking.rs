//! Link click notification.
//!
//! Navigation and tracking are independent: [`activate`] settles the
//! navigation first and only then hands the link id to a [`ClickSink`], whose
//! `notify` must return without waiting on the network.

use crate::page::LinkButton;

#[cfg(feature = "client")]
pub use tracker::ClickTracker;

pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Interface for dispatching click notifications.
pub trait ClickSink {
    /// Queue a notification for `link_id`. Never blocks, never fails.
    fn notify(&self, link_id: &str);
}

/// Where activating a link takes the visitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl Navigation {
    pub fn new_context(href: &str) -> Self {
        Self {
            href: href.to_owned(),
            target: NEW_CONTEXT_TARGET,
            rel: NEW_CONTEXT_REL,
        }
    }
}

pub fn activate(button: &LinkButton, sink: &dyn ClickSink) -> Navigation {
    let navigation = button.navigation();
    sink.notify(&button.id);
    navigation
}

#[cfg(feature = "client")]
mod tracker {
    use std::sync::Arc;

    use tokio::sync::mpsc;
    use tracing::{debug, warn};

    use super::ClickSink;
    use crate::api::Backend;

    /// Server-side sink: a bounded queue drained by a detached worker.
    ///
    /// Every tracking request runs in its own task, so a request that hangs
    /// only holds up itself. When the queue is full the click is dropped.
    #[derive(Clone)]
    pub struct ClickTracker {
        tx: mpsc::Sender<String>,
    }

    impl ClickTracker {
        /// Starts the worker on the current tokio runtime.
        pub fn spawn(backend: Arc<dyn Backend>, capacity: usize) -> Self {
            let (tx, mut rx) = mpsc::channel::<String>(capacity.max(1));

            tokio::spawn(async move {
                while let Some(link_id) = rx.recv().await {
                    let backend = backend.clone();
                    tokio::spawn(async move {
                        match backend.track_click(&link_id).await {
                            Ok(()) => debug!("Tracked click on link {link_id}"),
                            Err(err) => warn!("Click tracking for link {link_id} failed: {err}"),
                        }
                    });
                }
                debug!("Click tracker stopped");
            });

            Self { tx }
        }
    }

    impl ClickSink for ClickTracker {
        fn notify(&self, link_id: &str) {
            if let Err(err) = self.tx.try_send(link_id.to_owned()) {
                warn!("Dropping click on link {link_id}: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl ClickSink for Recorder {
        fn notify(&self, link_id: &str) {
            self.0.borrow_mut().push(link_id.to_owned());
        }
    }

    fn button() -> LinkButton {
        LinkButton {
            id: "link-7".into(),
            title: "Shop".into(),
            href: "https://shop.example".into(),
            class: "rounded-lg".into(),
        }
    }

    #[test]
    fn activation_navigates_to_new_context_and_notifies() {
        let recorder = Recorder::default();
        let navigation = activate(&button(), &recorder);

        assert_eq!(navigation.href, "https://shop.example");
        assert_eq!(navigation.target, "_blank");
        assert_eq!(navigation.rel, "noopener noreferrer");
        assert_eq!(recorder.0.borrow().as_slice(), ["link-7"]);
    }

    #[cfg(feature = "client")]
    mod tracker {
        use std::{
            sync::Arc,
            time::{Duration, Instant},
        };

        use async_trait::async_trait;
        use tokio::sync::mpsc;

        use super::button;
        use crate::{
            api::{ApiError, Backend},
            auth::{Credentials, Registration, Session},
            plans::Plan,
            profile::Profile,
            tracking::{activate, ClickSink, ClickTracker},
        };

        enum Tracking {
            Hang(mpsc::UnboundedSender<String>),
            Fail,
            Report(mpsc::UnboundedSender<String>),
        }

        struct FakeBackend(Tracking);

        #[async_trait]
        impl Backend for FakeBackend {
            async fn fetch_profile(&self, _handle: &str) -> Result<Profile, ApiError> {
                Err(ApiError::NotFound { message: None })
            }

            async fn track_click(&self, link_id: &str) -> Result<(), ApiError> {
                match &self.0 {
                    Tracking::Hang(started) => {
                        started.send(link_id.to_owned()).ok();
                        std::future::pending().await
                    }
                    Tracking::Fail => Err(ApiError::Transport("connection refused".into())),
                    Tracking::Report(tx) => {
                        tx.send(link_id.to_owned()).ok();
                        Ok(())
                    }
                }
            }

            async fn login(&self, _credentials: &Credentials) -> Result<Session, ApiError> {
                unimplemented!()
            }

            async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
                unimplemented!()
            }

            async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
                unimplemented!()
            }
        }

        #[tokio::test]
        async fn clicks_reach_the_backend() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let tracker = ClickTracker::spawn(Arc::new(FakeBackend(Tracking::Report(tx))), 8);

            tracker.notify("a");
            tracker.notify("b");

            let mut seen = vec![
                rx.recv().await.expect("first click"),
                rx.recv().await.expect("second click"),
            ];
            seen.sort();
            assert_eq!(seen, ["a", "b"]);
        }

        #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
        async fn hanging_tracking_never_delays_navigation() {
            let (started_tx, mut started) = mpsc::unbounded_channel();
            let tracker = ClickTracker::spawn(Arc::new(FakeBackend(Tracking::Hang(started_tx))), 1);

            tracker.notify("first");
            assert_eq!(started.recv().await.as_deref(), Some("first"));

            let begun = Instant::now();
            for _ in 0..100 {
                let navigation = activate(&button(), &tracker);
                assert_eq!(navigation.href, "https://shop.example");
            }
            assert!(begun.elapsed() < Duration::from_secs(1));

            // The first request is still stuck, yet later clicks get their own request
            let next = tokio::time::timeout(Duration::from_secs(5), started.recv())
                .await
                .expect("a later click was dispatched");
            assert_eq!(next.as_deref(), Some("link-7"));
        }

        #[tokio::test]
        async fn failing_tracking_is_swallowed() {
            let tracker = ClickTracker::spawn(Arc::new(FakeBackend(Tracking::Fail)), 4);

            let navigation = activate(&button(), &tracker);
            tokio::time::sleep(Duration::from_millis(20)).await;

            assert_eq!(navigation.target, "_blank");
            tracker.notify("again");
        }
    }
}
