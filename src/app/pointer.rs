//! Pointer-down fan-out for outside-click dismissal.
//!
//! The app root owns a [`PointerListeners`] hub and provides it through
//! context. In the browser the hub is fed by a single `pointerdown` listener
//! on the document. Widgets subscribe for as long as they are mounted and
//! get a [`ListenerGuard`]; dropping the guard removes the subscription.
//!
//! "Outside" is decided by subtree identity, not geometry. A widget's root
//! element marks its [`PointerScope`] from its own `onpointerdown` handler.
//! The document listener runs later in the same bubble, so a dispatch that
//! finds the mark unset came from outside the widget.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Pointer position in client (viewport) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

type Listener = Rc<RefCell<dyn FnMut(ClientPoint)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Registry {
    fn is_registered(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// App-scoped pointer-down hub
#[derive(Clone, Default)]
pub struct PointerListeners {
    registry: Rc<RefCell<Registry>>,
}

impl PointerListeners {
    /// Register a listener; it stays registered until the guard is dropped.
    pub fn subscribe(&self, listener: impl FnMut(ClientPoint) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .entries
            .push((id, Rc::new(RefCell::new(listener)) as Listener));
        tracing::trace!("Pointer listener {} registered", id);

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer-down to every registered listener.
    ///
    /// Listeners may subscribe or drop guards while being called. A listener
    /// whose guard is dropped mid-dispatch is not called afterwards.
    pub fn dispatch(&self, point: ClientPoint) {
        let snapshot: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in snapshot {
            if !self.registry.borrow().is_registered(id) {
                continue;
            }
            // Re-entrant dispatch from inside a listener skips that listener
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(point);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// Registration handle; dropping it deregisters the listener
#[must_use = "dropping the guard immediately deregisters the listener"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
            tracing::trace!("Pointer listener {} removed", self.id);
        }
    }
}

/// RAII guard for the document-level `pointerdown` listener
#[cfg(target_arch = "wasm32")]
struct DocumentListenerGuard {
    document: web_sys::Document,
    // Owned here so the closure lives exactly as long as the registration
    closure: Closure<dyn FnMut(web_sys::PointerEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl DocumentListenerGuard {
    fn attach(listeners: PointerListeners) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            listeners.dispatch(ClientPoint::new(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            ));
        }) as Box<dyn FnMut(_)>);

        // Bubble phase: the app's own handlers for this event have already run
        if let Err(e) = document
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach pointerdown listener: {:?}", e);
            return None;
        }
        Some(Self { document, closure })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DocumentListenerGuard {
    fn drop(&mut self) {
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback("pointerdown", self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to detach pointerdown listener: {:?}", e);
        }
    }
}

/// Initialize the pointer hub provider - call once at app root
pub fn use_pointer_provider() -> PointerListeners {
    let listeners = use_context_provider(PointerListeners::default);

    // Client-side only: feed the hub from the document
    #[cfg(target_arch = "wasm32")]
    {
        let hub = listeners.clone();
        let _guard: Rc<Option<DocumentListenerGuard>> =
            use_hook(move || Rc::new(DocumentListenerGuard::attach(hub)));
    }

    listeners
}

/// Per-widget "pointer went down inside me" mark
#[derive(Clone, Copy, PartialEq)]
pub struct PointerScope {
    inside: CopyValue<bool>,
}

impl PointerScope {
    /// Call from the widget root's `onpointerdown`
    pub fn mark_inside(&self) {
        let mut inside = self.inside;
        inside.set(true);
    }

    /// Read and clear the mark
    fn take_inside(&self) -> bool {
        let mut inside = self.inside;
        let was_inside = *inside.read();
        inside.set(false);
        was_inside
    }
}

/// Call `on_outside` for every pointer-down that does not pass through the
/// returned scope, for as long as the calling component is mounted.
///
/// Without a hub in context (e.g. a bare render) nothing is registered.
pub fn use_outside_click(mut on_outside: impl FnMut() + 'static) -> PointerScope {
    let scope = use_hook(|| PointerScope {
        inside: CopyValue::new(false),
    });

    let guard: Rc<RefCell<Option<ListenerGuard>>> = use_hook(move || {
        let guard = match try_consume_context::<PointerListeners>() {
            Some(listeners) => Some(listeners.subscribe(move |point| {
                if !scope.take_inside() {
                    tracing::trace!("Pointer-down outside widget at ({}, {})", point.x, point.y);
                    on_outside();
                }
            })),
            None => {
                tracing::debug!("No pointer hub in context; outside clicks are not tracked");
                None
            }
        };
        Rc::new(RefCell::new(guard))
    });

    use_drop(move || {
        guard.borrow_mut().take();
    });

    scope
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let hub = PointerListeners::default();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let _a = hub.subscribe(move |_| counter.set(counter.get() + 1));
        let counter = hits.clone();
        let _b = hub.subscribe(move |_| counter.set(counter.get() + 1));

        hub.dispatch(ClientPoint::new(1.0, 1.0));
        assert_eq!(hits.get(), 2);
        assert_eq!(hub.listener_count(), 2);
    }

    #[test]
    fn test_dropped_guard_stops_delivery() {
        let hub = PointerListeners::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let guard = hub.subscribe(move |_| counter.set(counter.get() + 1));

        hub.dispatch(ClientPoint::default());
        drop(guard);
        hub.dispatch(ClientPoint::default());

        assert_eq!(hits.get(), 1);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_guard_dropped_during_dispatch() {
        let hub = PointerListeners::default();
        let second_hits = Rc::new(Cell::new(0));
        let second_guard: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));

        // First listener removes the second one before it runs
        let slot = second_guard.clone();
        let _first = hub.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let counter = second_hits.clone();
        *second_guard.borrow_mut() = Some(hub.subscribe(move |_| counter.set(counter.get() + 1)));

        hub.dispatch(ClientPoint::default());
        assert_eq!(second_hits.get(), 0);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_guard_outliving_hub() {
        let hub = PointerListeners::default();
        let guard = hub.subscribe(|_| {});
        drop(hub);
        drop(guard);
    }
}
