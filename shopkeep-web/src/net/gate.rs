//! Offline gating for outward-facing features.

use yew::prelude::*;

use crate::components::toast::use_toaster;
use crate::net::connectivity::use_online;

/// The closed set of gateable features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Marketing,
    Social,
    Sync,
}

impl FeatureKind {
    pub fn label(self) -> &'static str {
        match self {
            FeatureKind::Marketing => "Messaging",
            FeatureKind::Social => "Social",
            FeatureKind::Sync => "Sync",
        }
    }

    /// Static per-kind message shown when the feature is blocked offline.
    pub fn blocked_message(self) -> &'static str {
        match self {
            FeatureKind::Marketing => "Messaging is unavailable while offline",
            FeatureKind::Social => "Social features are unavailable while offline",
            FeatureKind::Sync => "Sync is unavailable while offline",
        }
    }
}

/// What the gate renders for a given connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Children,
    Placeholder,
}

/// Pure render decision: offline swaps the children out for a placeholder.
pub fn resolve_gate_view(online: bool) -> GateView {
    if online {
        GateView::Children
    } else {
        GateView::Placeholder
    }
}

/// Pure notification decision: a toast is raised whenever the gate lands in
/// the offline state, never while online.
pub fn should_notify(online: bool) -> bool {
    resolve_gate_view(online) == GateView::Placeholder
}

#[derive(Properties, PartialEq)]
pub struct NetworkGateProps {
    pub kind: FeatureKind,
    pub children: Children,
}

/// Renders children transparently while online. While offline the children
/// are not mounted at all: the gate swaps in a disabled placeholder naming
/// the blocked feature, and raises a toast on mounting offline and on each
/// transition to offline. There is no debouncing: a gate that re-mounts
/// while offline toasts again. Nothing is replayed when the connection
/// returns.
#[function_component(NetworkGate)]
pub fn network_gate(props: &NetworkGateProps) -> Html {
    let online = use_online();
    let toaster = use_toaster();
    let kind = props.kind;

    use_effect_with(online, move |&online| {
        if should_notify(online) {
            toaster.error(kind.blocked_message());
        }
        || ()
    });

    match resolve_gate_view(online) {
        GateView::Children => html! { <>{props.children.clone()}</> },
        GateView::Placeholder => html! {
            <div class="alert alert-warning" role="status" aria-disabled="true">
                <span class="font-semibold">{kind.label()}</span>
                <span>{kind.blocked_message()}</span>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_gate_shows_the_placeholder_instead_of_children() {
        assert_eq!(resolve_gate_view(false), GateView::Placeholder);
        assert_eq!(resolve_gate_view(true), GateView::Children);
    }

    #[test]
    fn only_the_offline_state_raises_a_toast() {
        assert!(should_notify(false));
        assert!(!should_notify(true));
    }

    #[test]
    fn every_kind_has_a_distinct_blocked_message() {
        let kinds = [FeatureKind::Marketing, FeatureKind::Social, FeatureKind::Sync];
        for kind in kinds {
            assert!(kind.blocked_message().contains("offline"));
        }
        assert_ne!(
            FeatureKind::Marketing.blocked_message(),
            FeatureKind::Sync.blocked_message()
        );
        assert_ne!(
            FeatureKind::Social.blocked_message(),
            FeatureKind::Sync.blocked_message()
        );
    }
}
