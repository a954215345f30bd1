use crate::{
    api::{ApiClient, ApiError, SessionUser},
    utils::navigation,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        check_session(&api_client, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

async fn check_auth_status(api_client: &ApiClient) -> Result<SessionUser, ApiError> {
    api_client.get_current_user().await
}

/// Any failure, transport or status, counts as signed out.
pub async fn check_session(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match check_auth_status(api_client).await {
        Ok(user) => {
            log::info!("session active for {}", user.email);
            set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            });
        }
        Err(err) => {
            log::warn!("auth check failed: {}", err);
            set_auth_state.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            });
        }
    }
}

pub fn login(api_client: ApiClient) {
    spawn_local(async move {
        navigation::navigate(&api_client.login_url().await);
    });
}

pub fn logout(api_client: ApiClient) {
    spawn_local(async move {
        navigation::navigate(&api_client.logout_url().await);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }
}
