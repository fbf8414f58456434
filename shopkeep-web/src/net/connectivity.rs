//! Connectivity observable.
//!
//! One boolean, seeded from `navigator.onLine`, flipped only by the browser
//! `online`/`offline` events. The observable core is a plain struct so the
//! subscription semantics are testable off the browser; the provider
//! component binds the two DOM events and hands the service down through
//! context, so gates receive it explicitly instead of reaching for a global.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Subscriber registry plus the online flag.
#[derive(Default)]
pub struct ConnectivityState {
    online: bool,
    next_id: usize,
    subscribers: Vec<(usize, Callback<bool>)>,
}

impl ConnectivityState {
    pub fn new(online: bool) -> Self {
        Self {
            online,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Register a subscriber and replay the current value to it.
    pub fn subscribe(&mut self, callback: Callback<bool>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        callback.emit(self.online);
        self.subscribers.push((id, callback));
        id
    }

    pub fn unsubscribe(&mut self, id: usize) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Flip the flag and notify subscribers. No-op when the value is
    /// unchanged, so event storms do not fan out.
    pub fn set_online(&mut self, online: bool) {
        if self.online == online {
            return;
        }
        self.online = online;
        for (_, callback) in &self.subscribers {
            callback.emit(online);
        }
    }
}

/// Shared handle over [`ConnectivityState`], cheap to clone into closures.
#[derive(Clone, Default)]
pub struct ConnectivityService {
    state: Rc<RefCell<ConnectivityState>>,
}

impl PartialEq for ConnectivityService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ConnectivityService {
    pub fn new(online: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(ConnectivityState::new(online))),
        }
    }

    pub fn is_online(&self) -> bool {
        self.state.borrow().is_online()
    }

    pub fn set_online(&self, online: bool) {
        self.state.borrow_mut().set_online(online);
    }

    /// Subscribe with an RAII guard; dropping the guard unsubscribes.
    #[must_use]
    pub fn subscribe(&self, callback: Callback<bool>) -> Subscription {
        let id = self.state.borrow_mut().subscribe(callback);
        Subscription {
            service: self.clone(),
            id,
        }
    }
}

/// Keeps a connectivity subscription alive for matching component lifetime.
pub struct Subscription {
    service: ConnectivityService,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.service.state.borrow_mut().unsubscribe(self.id);
    }
}

fn browser_is_online() -> bool {
    web_sys::window().is_some_and(|window| window.navigator().on_line())
}

fn bind_browser_events(service: &ConnectivityService) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let online_service = service.clone();
    let on_online = Closure::<dyn Fn()>::new(move || online_service.set_online(true));
    let offline_service = service.clone();
    let on_offline = Closure::<dyn Fn()>::new(move || offline_service.set_online(false));

    let _ = window
        .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref());

    // Listeners live for the life of the page.
    on_online.forget();
    on_offline.forget();
}

#[derive(Properties, PartialEq)]
pub struct ConnectivityProviderProps {
    pub children: Children,
    /// Override for tests; the default binds to the real browser events.
    #[prop_or_default]
    pub service: Option<ConnectivityService>,
}

/// Provides the [`ConnectivityService`] through context. Mounted once at the
/// application root, before any gate can mount.
#[function_component(ConnectivityProvider)]
pub fn connectivity_provider(props: &ConnectivityProviderProps) -> Html {
    let injected = props.service.clone();
    let service = use_memo((), move |()| match injected {
        Some(service) => service,
        None => {
            let service = ConnectivityService::new(browser_is_online());
            bind_browser_events(&service);
            service
        }
    });

    html! {
        <ContextProvider<ConnectivityService> context={(*service).clone()}>
            {props.children.clone()}
        </ContextProvider<ConnectivityService>>
    }
}

/// Current online flag, re-rendering the caller on every flip.
#[hook]
pub fn use_online() -> bool {
    let service = use_context::<ConnectivityService>()
        .expect("ConnectivityProvider must wrap any component using use_online");
    let online = use_state(|| service.is_online());

    {
        let online = online.clone();
        use_effect_with(service, move |service| {
            let subscription =
                service.subscribe(Callback::from(move |value| online.set(value)));
            move || drop(subscription)
        });
    }

    *online
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribe_replays_the_current_value() {
        let seen = Rc::new(Cell::new(None));
        let mut state = ConnectivityState::new(true);

        let seen_handle = seen.clone();
        state.subscribe(Callback::from(move |value| seen_handle.set(Some(value))));
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn set_online_notifies_only_on_change() {
        let count = Rc::new(Cell::new(0));
        let mut state = ConnectivityState::new(true);

        let count_handle = count.clone();
        state.subscribe(Callback::from(move |_| {
            count_handle.set(count_handle.get() + 1);
        }));
        assert_eq!(count.get(), 1, "replay on subscribe");

        state.set_online(true);
        assert_eq!(count.get(), 1, "no notification without a flip");

        state.set_online(false);
        assert_eq!(count.get(), 2);
        assert!(!state.is_online());

        state.set_online(true);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let count = Rc::new(Cell::new(0));
        let service = ConnectivityService::new(true);

        let count_handle = count.clone();
        let subscription = service.subscribe(Callback::from(move |_| {
            count_handle.set(count_handle.get() + 1);
        }));
        assert_eq!(count.get(), 1);

        drop(subscription);
        service.set_online(false);
        assert_eq!(count.get(), 1, "unsubscribed callback must stay silent");
    }

    #[test]
    fn independent_subscribers_all_see_flips() {
        let first = Rc::new(Cell::new(true));
        let second = Rc::new(Cell::new(true));
        let service = ConnectivityService::new(true);

        let first_handle = first.clone();
        let _first_sub = service.subscribe(Callback::from(move |value| first_handle.set(value)));
        let second_handle = second.clone();
        let _second_sub = service.subscribe(Callback::from(move |value| second_handle.set(value)));

        service.set_online(false);
        assert!(!first.get());
        assert!(!second.get());
    }
}
