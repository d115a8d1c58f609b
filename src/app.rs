//! Root application component with routing, context providers and the
//! startup effects that restore the persisted theme, language and session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_header::AppHeader;
use crate::components::kawaii::FloatingDecorations;
use crate::pages::{
    admin_flashcards::AdminFlashcardsPage, admin_group_items::AdminGroupItemsPage,
    admin_groups::AdminGroupsPage, dashboard::DashboardPage, login::LoginPage, study::StudyPage,
};
use crate::state::auth::AuthState;
use crate::state::language;
use crate::state::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pl">
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

/// Root application component.
///
/// Provides the shared stores as contexts, keeps the document-level theme
/// class in sync, and kicks off the startup session + language sync.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(theme::load_theme());
    let language = RwSignal::new(language::load_language());
    let auth = RwSignal::new(AuthState::probing());

    provide_context(theme);
    provide_context(language);
    provide_context(auth);

    // Mirror the active theme onto the document root class.
    Effect::new(move || {
        crate::util::theme_dom::apply(theme.get().theme);
    });

    // Resolve the stored token into a user, then pull the server-side
    // language selection for the signed-in account.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::state::auth::restore_session(auth).await;
            if auth.get_untracked().user.is_some() {
                language::fetch_language(language).await;
            }
        });
    }

    let title = move || language.get().active.app_title().to_owned();

    view! {
        <Stylesheet id="leptos" href="/pkg/fiszki-client.css"/>
        <Title text=title/>

        <Router>
            <FloatingDecorations/>
            <AppHeader/>
            <main class="app-main">
                <Routes fallback=|| "Nie znaleziono strony.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("study") view=StudyPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("flashcards"))
                        view=AdminFlashcardsPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("groups"))
                        view=AdminGroupsPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("groups"), ParamSegment("id"))
                        view=AdminGroupItemsPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
