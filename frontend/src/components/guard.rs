use crate::{components::layout::LoadingSpinner, state::auth::use_auth};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateView {
    Checking,
    Landing,
    Dashboard,
}

fn gate_view(is_authenticated: bool, is_loading: bool) -> GateView {
    if is_loading {
        GateView::Checking
    } else if is_authenticated {
        GateView::Dashboard
    } else {
        GateView::Landing
    }
}

/// Shows `children` to a signed-in user and `landing` to everyone else. The
/// spinner covers the initial session check.
#[component]
pub fn AuthGate(#[prop(into)] landing: ViewFn, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let view_kind = create_memo(move |_| {
        let state = auth.get();
        gate_view(state.is_authenticated, state.loading)
    });

    move || match view_kind.get() {
        GateView::Checking => view! { <LoadingSpinner /> }.into_view(),
        GateView::Landing => landing.run(),
        GateView::Dashboard => children().into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::{gate_view, GateView};

    #[test]
    fn gate_waits_for_session_check() {
        assert_eq!(gate_view(false, true), GateView::Checking);
        assert_eq!(gate_view(true, true), GateView::Checking);
    }

    #[test]
    fn gate_picks_view_from_session() {
        assert_eq!(gate_view(true, false), GateView::Dashboard);
        assert_eq!(gate_view(false, false), GateView::Landing);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::AuthGate;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::session_user;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            user: is_authenticated.then(session_user),
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
    }

    fn render_gate() -> impl IntoView {
        view! {
            <AuthGate landing=|| view! { <div>"landing-view"</div> }>
                {|| view! { <div>"dashboard-view"</div> }}
            </AuthGate>
        }
    }

    #[test]
    fn authenticated_user_sees_dashboard() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            render_gate()
        });
        assert!(html.contains("dashboard-view"));
        assert!(!html.contains("landing-view"));
    }

    #[test]
    fn failed_session_check_shows_landing_only() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            render_gate()
        });
        assert!(html.contains("landing-view"));
        assert!(!html.contains("dashboard-view"));
    }

    #[test]
    fn pending_check_shows_spinner() {
        let html = render_to_string(move || {
            provide_auth_state(false, true);
            render_gate()
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("landing-view"));
        assert!(!html.contains("dashboard-view"));
    }
}
