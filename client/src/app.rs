//! Root application component with routing and the session provider.

use std::sync::Arc;

use eventdesk::ProviderDeps;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{AdminLayout, ProtectedRoute};
use crate::net::api::{BrowserAuthApi, browser_config};
use crate::pages::{admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, home::HomePage};
use crate::state::session::{RoleSession, Sessions, SignalPhase};
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the application's one session provider, still pending.
fn build_sessions() -> Sessions {
    let deps = ProviderDeps {
        storage: Arc::new(LocalStorage),
        api: Arc::new(BrowserAuthApi::new(&browser_config())),
        navigator: Arc::new(BrowserNavigator),
    };
    Sessions::new(deps, SignalPhase::new(), SignalPhase::new())
}

/// Root application component.
///
/// Owns the only `Sessions` instance and passes role handles down to pages.
/// Stored sessions are read once, in the browser, after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sessions = build_sessions();
    let init = sessions.clone();
    Effect::new(move || init.initialize());

    let admin = sessions.admin().clone();
    let user = sessions.user().clone();
    let admin_login = admin.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/eventdesk.css"/>
        <Title text="EventDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <HomePage user=user.clone()/> }/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=move || {
                        let page_admin = admin_login.clone();
                        view! {
                            <AdminLayout admin=admin_login.clone()>
                                <AdminLoginPage admin=page_admin.clone()/>
                            </AdminLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=move || {
                        let page_admin = admin.clone();
                        view! {
                            <AdminLayout admin=admin.clone()>
                                <GuardedDashboard admin=page_admin.clone()/>
                            </AdminLayout>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Dashboard behind the per-page admin guard.
#[component]
fn GuardedDashboard(admin: RoleSession) -> impl IntoView {
    let page_admin = admin.clone();
    view! {
        <ProtectedRoute admin=admin>
            <AdminDashboardPage admin=page_admin.clone()/>
        </ProtectedRoute>
    }
}
