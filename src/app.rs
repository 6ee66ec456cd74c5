mod about;
mod cursor;
mod dom;
mod glitch;
mod homepage;
mod hooks;
mod particles;
mod peekers;
mod resume;
mod swipe;
mod tilt;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use serde::{Deserialize, Serialize};

use crate::interaction::{cursor::CursorSlot, InteractionConfig};
use about::About;
use homepage::FunLanding;
use resume::Professional;

/// Local storage key for [`SitePrefs`].
pub const PREFS_KEY: &str = "site_prefs";
pub const FAVICON: &str = "/favicon.ico";

/// Per-browser choices that survive reloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitePrefs {
    pub gate_dismissed: bool,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-fx.css" />
                <MetaTags />
            </head>
            <body class="bg-black font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(InteractionConfig::default());
    // one follow cursor per page
    provide_context(CursorSlot::new());

    view! {
        <Title formatter=|title| format!("Shreenidhi - {title}") />
        <Router>
            <main class="flex flex-col min-h-screen w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=FunLanding />
                    <Route path=path!("/pro/professional") view=Professional />
                    <Route path=path!("/pro/about") view=About />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME");
    view! {
        <footer class="w-full py-4 text-center text-xs text-white/50 bg-black">
            <div class="flex justify-center gap-6 mb-2">
                <a href=resume::GITHUB target="_blank" rel="noopener noreferrer" class="hover:text-white">
                    "GitHub"
                </a>
                <a href=resume::LINKEDIN target="_blank" rel="noopener noreferrer" class="hover:text-white">
                    "LinkedIn"
                </a>
            </div>
            <span>"built " {built}</span>
        </footer>
    }
}
