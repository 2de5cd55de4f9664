use std::fmt;

use crate::media::EntryState;

/// Callback de cambio de estado
pub type StateCallback = Box<dyn FnMut(EntryState) + Send + 'static>;

/// Identifica una suscripción para poder darla de baja.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Lista de observadores del estado de una entrada.
///
/// `emit` invoca a todos los suscriptores de forma síncrona y en el orden
/// en que se registraron. No hay deduplicación: cada emisión llega a todos.
#[derive(Default)]
pub struct StateObservers {
    next_id: u64,
    slots: Vec<(SubscriptionId, StateCallback)>,
}

impl StateObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(EntryState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(callback)));
        id
    }

    /// Devuelve `false` si la suscripción ya no existía.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot, _)| *slot != id);
        self.slots.len() != before
    }

    pub fn emit(&mut self, state: EntryState) {
        for (_, callback) in self.slots.iter_mut() {
            callback(state);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for StateObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateObservers")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn emits_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = StateObservers::new();

        for name in ["a", "b", "c"] {
            let log = log.clone();
            observers.subscribe(move |state| log.lock().unwrap().push((name, state)));
        }

        observers.emit(EntryState::Paused);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("a", EntryState::Paused),
                ("b", EntryState::Paused),
                ("c", EntryState::Paused),
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Arc::new(Mutex::new(0));
        let mut observers = StateObservers::new();

        let id = {
            let hits = hits.clone();
            observers.subscribe(move |_| *hits.lock().unwrap() += 1)
        };

        observers.emit(EntryState::Playing);
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.emit(EntryState::Playing);

        assert_eq!(*hits.lock().unwrap(), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut observers = StateObservers::new();
        let a = observers.subscribe(|_| {});
        observers.unsubscribe(a);
        let b = observers.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(observers.len(), 1);
    }
}
