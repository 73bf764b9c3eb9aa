//! App Root Component
//!
//! Routing, global providers, and the role-based route gates. Pages render
//! full-screen layouts of their own, so the shell here is just the router
//! plus the toast overlay.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{AdminPage, LandingPage, LoginPage, MapPage, RegisterPage};
use crate::state::global::provide_global_state;
use crate::state::session::{provide_session_state, Session, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Session first: the route gates below read it on the first render
    provide_session_state();
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! {
                    <AnonymousOnly>
                        <LandingPage />
                    </AnonymousOnly>
                } />
                <Route path="/login" view=|| view! {
                    <AnonymousOnly>
                        <LoginPage />
                    </AnonymousOnly>
                } />
                <Route path="/register" view=|| view! {
                    <AnonymousOnly>
                        <RegisterPage />
                    </AnonymousOnly>
                } />
                <Route path="/map" view=|| view! {
                    <RequireUser>
                        <MapPage />
                    </RequireUser>
                } />
                <Route path="/admin" view=|| view! {
                    <RequireAdmin>
                        <AdminPage />
                    </RequireAdmin>
                } />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

// Route policy, kept as plain functions so the gate rules are testable
// without a mounted router.

/// Anonymous-only screens (landing, login, register): signed-in users go
/// straight to the map
fn anonymous_only_redirect(session: Option<&Session>) -> Option<&'static str> {
    session.is_some().then_some("/map")
}

/// Authenticated screens: anonymous visitors go to the login page
fn require_user_redirect(session: Option<&Session>) -> Option<&'static str> {
    session.is_none().then_some("/login")
}

/// Admin screens: non-admins are sent back to the map, anonymous to login
fn require_admin_redirect(session: Option<&Session>) -> Option<&'static str> {
    match session {
        Some(s) if s.user.is_admin() => None,
        Some(_) => Some("/map"),
        None => Some("/login"),
    }
}

#[component]
fn AnonymousOnly(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    move || match anonymous_only_redirect(session.current().as_ref()) {
        Some(path) => view! { <Redirect path=path /> }.into_view(),
        None => children().into_view(),
    }
}

#[component]
fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    move || match require_user_redirect(session.current().as_ref()) {
        Some(path) => view! { <Redirect path=path /> }.into_view(),
        None => children().into_view(),
    }
}

#[component]
fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    move || match require_admin_redirect(session.current().as_ref()) {
        Some(path) => view! { <Redirect path=path /> }.into_view(),
        None => children().into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::User;

    fn session(role: &str) -> Session {
        Session {
            user: User {
                id: 1,
                username: "ash".to_string(),
                role: role.to_string(),
            },
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_anonymous_screens_redirect_signed_in_users_to_map() {
        // Applies to the landing page as well as login/register
        assert_eq!(anonymous_only_redirect(Some(&session("user"))), Some("/map"));
        assert_eq!(anonymous_only_redirect(Some(&session("admin"))), Some("/map"));
        assert_eq!(anonymous_only_redirect(None), None);
    }

    #[test]
    fn test_map_requires_a_session() {
        assert_eq!(require_user_redirect(None), Some("/login"));
        assert_eq!(require_user_redirect(Some(&session("user"))), None);
        assert_eq!(require_user_redirect(Some(&session("admin"))), None);
    }

    #[test]
    fn test_admin_requires_the_admin_role() {
        assert_eq!(require_admin_redirect(Some(&session("admin"))), None);
        assert_eq!(require_admin_redirect(Some(&session("user"))), Some("/map"));
        assert_eq!(require_admin_redirect(None), Some("/login"));
    }
}
