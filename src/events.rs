//! Named-subscriber event bus.
//!
//! Wires a query source (a text box, a line reader) to the components that
//! render results. Delivery is synchronous, on the caller's thread, in
//! subscription order.

use log::trace;

type Handler<T> = Box<dyn FnMut(&T)>;

/// Publish/subscribe hub for values of type `T`.
pub struct PubSub<T> {
    listeners: Vec<(String, Handler<T>)>,
}

impl<T> PubSub<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register `handler` under `name`. An existing subscriber with the same
    /// name is replaced in place.
    pub fn subscribe<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: FnMut(&T) + 'static,
    {
        let name = name.into();
        let handler: Handler<T> = Box::new(handler);
        match self.listeners.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = handler,
            None => self.listeners.push((name, handler)),
        }
        self
    }

    /// Remove the subscriber called `name`, if any.
    pub fn unsubscribe(&mut self, name: &str) -> &mut Self {
        self.listeners.retain(|(existing, _)| existing != name);
        self
    }

    /// Deliver `data` to every subscriber.
    pub fn notify(&mut self, data: &T) -> &mut Self {
        for (name, handler) in self.listeners.iter_mut() {
            trace!("notify {name}");
            handler(data);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for PubSub<T> {
    fn default() -> Self {
        Self::new()
    }
}
