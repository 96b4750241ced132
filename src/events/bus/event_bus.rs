// events/bus/event_bus.rs
//
// Synchronous, typed event dispatch.
//
// RULES:
// 1. Handlers run on the emitting thread, in subscription order
// 2. A panicking handler is logged and skipped; the rest still run
// 3. Recording emissions is opt-in (`with_log`), so a long session
//    does not accumulate history nobody reads

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError, RwLock};

use log::{debug, error};

use crate::events::types::DomainEvent;

type Handler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// One recorded emission
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

/// Fixture lifecycle events fan out from here to whoever subscribed.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<HashMap<TypeId, Vec<Handler>>>,
    history: Option<Mutex<Vec<EventLogEntry>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus that also records every emission, readable via `get_event_log`
    pub fn with_log() -> Self {
        Self {
            handlers: RwLock::default(),
            history: Some(Mutex::default()),
        }
    }

    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: Handler = Box::new(move |event: &dyn Any| match event.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => error!("Handler for {} got a foreign event", std::any::type_name::<E>()),
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(erased);
    }

    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let subscribed = handlers.get(&TypeId::of::<E>()).map(Vec::as_slice).unwrap_or_default();

        debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            subscribed.len()
        );

        if let Some(history) = &self.history {
            history
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventLogEntry {
                    event_type: event.event_type().to_string(),
                    event_id: event.event_id().to_string(),
                    occurred_at: event.occurred_at().to_rfc3339(),
                    handler_count: subscribed.len(),
                });
        }

        for (idx, handler) in subscribed.iter().enumerate() {
            if let Err(panic) = catch_unwind(AssertUnwindSafe(|| handler(&event as &dyn Any))) {
                error!("Handler {} for {} panicked: {:?}", idx, event.event_type(), panic);
            }
        }
    }

    /// Recorded emissions, oldest first; always empty unless built with `with_log`
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.history
            .as_ref()
            .map(|history| history.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryCatalog, Fixture, Participant};
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixture() -> Fixture {
        let catalog = CountryCatalog::builtin();
        Fixture::start(
            Participant::parse("Spain", &catalog).unwrap(),
            Participant::parse("France", &catalog).unwrap(),
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);

        bus.subscribe::<FixtureStarted, _>(move |event| {
            assert_eq!(event.home, "Spain");
            seen.fetch_add(1, Ordering::SeqCst);
        });
        bus.emit(FixtureStarted::new(&fixture()));
        bus.emit(ScoreUpdated::new(&fixture()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(Mutex::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<ScoreUpdated, _>(move |_| seq.lock().unwrap().push(n));
        }
        bus.emit(ScoreUpdated::new(&fixture()));

        assert_eq!(*sequence.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_plain_bus_records_nothing() {
        let bus = EventBus::new();
        for _ in 0..10 {
            bus.emit(ScoreUpdated::new(&fixture()));
        }
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_logging_bus_records_emissions() {
        let bus = EventBus::with_log();
        bus.subscribe::<FixtureFinished, _>(|_| {});

        bus.emit(FixtureStarted::new(&fixture()));
        bus.emit(FixtureFinished::new(&fixture()));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "FixtureStarted");
        assert_eq!(log[0].handler_count, 0);
        assert_eq!(log[1].event_type, "FixtureFinished");
        assert_eq!(log[1].handler_count, 1);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<FixtureFinished, _>(|_| panic!("Intentional panic"));
        let seen = Arc::clone(&counter);
        bus.subscribe::<FixtureFinished, _>(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(FixtureFinished::new(&fixture()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
