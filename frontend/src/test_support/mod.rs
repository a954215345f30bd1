#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::SessionUser;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn session_user() -> SessionUser {
        SessionUser {
            id: Some(1),
            name: Some("Ada Lovelace".into()),
            email: "ada@example.com".into(),
            profile_pic: Some("https://example.com/ada.png".into()),
        }
    }

    pub fn provide_auth(
        user: Option<SessionUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
