// tests/support/helpers.rs
use std::sync::Arc;

use folio_core::application::dto::PageLimits;
use folio_core::application::events::EventDispatcher;
use folio_core::application::services::ApplicationServices;
use folio_core::domain::events::EventKind;
use folio_core::domain::repository::Repository;
use folio_core::domain::revision::Revision;
use folio_core::infrastructure::Repositories;
use folio_core::infrastructure::repositories::MemoryStore;
use folio_core::infrastructure::time::FixedClock;
use folio_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{RecordingHandler, fixed_now};

/// Services over a fresh in-memory store with a recording subscriber on
/// every event kind.
pub struct TestHarness {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
    pub repositories: Repositories,
    pub recorder: Arc<RecordingHandler>,
    pub services: ApplicationServices,
}

pub fn harness() -> TestHarness {
    harness_with(|repositories| repositories)
}

/// Like [`harness`], letting the caller wrap the repositories first.
pub fn harness_with(wrap: impl FnOnce(Repositories) -> Repositories) -> TestHarness {
    let clock = Arc::new(FixedClock::new(fixed_now()));
    let store = Arc::new(MemoryStore::new(clock.clone()));
    let repositories = wrap(Repositories::in_memory(Arc::clone(&store)));

    let recorder = Arc::new(RecordingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe_all(&EventKind::ALL, recorder.clone());

    let services = ApplicationServices::new(
        Arc::clone(&repositories.posts),
        Arc::clone(&repositories.revisions),
        Arc::new(dispatcher),
        clock.clone(),
        Arc::new(DefaultSlugGenerator),
        PageLimits::default(),
    );

    TestHarness {
        store,
        clock,
        repositories,
        recorder,
        services,
    }
}

impl TestHarness {
    pub fn revisions(&self) -> Arc<dyn Repository<Revision>> {
        Arc::clone(&self.repositories.revisions)
    }
}
