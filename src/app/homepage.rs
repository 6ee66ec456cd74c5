use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::cursor::FollowCursor;
use super::dom::rng;
use super::glitch::GlitchTitle;
use super::hooks::use_is_coarse;
use super::particles::ParticleField;
use super::peekers::{Peekers, PEEK_FALLBACK};
use super::resume::RESUME_PDF;
use super::swipe::{SwipeGate, SwipeNav};
use super::tilt::{Eye, MagneticLink, TiltCard};
use crate::interaction::{cursor::CursorVariant, pick};

#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg_class: &'static str,
    pub tint_class: &'static str,
    pub button_class: &'static str,
}

pub static THEMES: [Theme; 4] = [
    Theme {
        name: "sunset",
        bg_class: "bg-gradient-to-br from-rose-500 via-fuchsia-600 to-indigo-700",
        tint_class: "bg-white/10",
        button_class: "bg-black text-white hover:bg-gray-800",
    },
    Theme {
        name: "ocean",
        bg_class: "bg-gradient-to-br from-sky-500 via-cyan-500 to-teal-600",
        tint_class: "bg-white/10",
        button_class: "bg-black text-white hover:bg-gray-800",
    },
    Theme {
        name: "midnight",
        bg_class: "bg-gradient-to-br from-slate-900 via-purple-900 to-slate-800",
        tint_class: "bg-white/10",
        button_class: "bg-white text-black hover:opacity-90",
    },
    Theme {
        name: "mango",
        bg_class: "bg-gradient-to-br from-amber-400 via-orange-500 to-pink-600",
        tint_class: "bg-black/10",
        button_class: "bg-black text-white hover:bg-gray-800",
    },
];

pub const HEADLINES: [&str; 5] = ["CONNECT", "SAY HI", "PING ME", "LET'S TALK", "YO!"];

const HERO_IMAGES: [&str; 5] = [
    "/image/dev1.svg",
    "/image/dev2.svg",
    "/image/dev3.svg",
    "/image/dev4.svg",
    "/image/dev5.svg",
];

const PEEK_IMAGES: [&str; 3] = ["/image/peek1.png", "/image/peek2.png", PEEK_FALLBACK];

/// The playful landing. Server render uses the first theme and headline; the
/// client re-rolls everything once hydrated so each visit looks different.
#[component]
pub fn FunLanding() -> impl IntoView {
    let is_coarse = use_is_coarse();
    let gate_visible = RwSignal::new(true);
    let (theme, set_theme) = signal(&THEMES[0]);
    let (headline, set_headline) = signal(HEADLINES[0].to_string());
    let (hero, set_hero) = signal(None::<&'static str>);
    let (cursor, set_cursor) = signal(None::<CursorVariant>);

    Effect::new(move |_| {
        let mut r = rng();
        set_theme.set(pick(&THEMES, r()));
        set_headline.set(pick(&HEADLINES, r()).to_string());
        set_hero.set(Some(*pick(&HERO_IMAGES, r())));
        log::debug!("landing theme {}", theme.get_untracked().name);
    });

    Effect::new(move |_| {
        let variant = (!is_coarse.get()).then(|| CursorVariant::roll(&mut rng()));
        set_cursor.set(variant);
    });

    view! {
        <Title text="Hire Me" />
        <SwipeGate visible=gate_visible />
        <SwipeNav gate_visible />
        <ParticleField />
        <Peekers images=PEEK_IMAGES.iter().map(|s| s.to_string()).collect() />
        {move || cursor.get().map(|variant| view! { <FollowCursor variant /> })}
        <div
            id="fun-root"
            class=move || {
                format!("min-h-screen {} relative overflow-hidden text-white fun-root", theme.get().bg_class)
            }
        >
            <div id="landing-start" />
            <div class="pointer-events-none absolute inset-0 opacity-[0.10] fun-grid" />
            <div class=move || format!("absolute inset-0 {}", theme.get().tint_class) />
            <div
                id="landing"
                class="relative z-10 flex min-h-screen flex-col items-center justify-center px-6"
            >
                <GlitchTitle text=headline />
                <TiltCard class="mt-8 w-full max-w-3xl rounded-3xl border border-white/15 bg-white/10 p-4 backdrop-blur-xl shadow-2xl">
                    <div class="relative aspect-[3/2] w-full overflow-hidden rounded-2xl border border-white/10">
                        {move || {
                            hero.get()
                                .map(|src| {
                                    view! {
                                        <img src=src alt="Dev visual" class="h-full w-full object-cover" />
                                    }
                                })
                        }}
                        <div class="pointer-events-none absolute left-3 top-3 rounded-full bg-black/50 px-3 py-1 text-[10px] sm:text-xs">
                            "random: true"
                        </div>
                        <div class="pointer-events-none absolute right-3 bottom-3 rounded-full bg-black/50 px-3 py-1 text-[10px] sm:text-xs">
                            "theme: " {move || theme.get().name}
                        </div>
                    </div>
                    <p class="mt-5 text-center text-base sm:text-lg text-white/90">
                        "I build backends that are fast, secure, and low-drama. If you need clean APIs, solid auth, and smooth deployments, we'll get along."
                    </p>
                    <div class="mt-6 flex flex-col items-center justify-center gap-3 sm:flex-row">
                        <MagneticLink
                            href=RESUME_PDF
                            download=true
                            class=Signal::derive(move || {
                                format!(
                                    "rounded-xl px-5 py-3 {} transition-all duration-200 active:scale-[0.98]",
                                    theme.get().button_class,
                                )
                            })
                        >
                            "Download Resume"
                        </MagneticLink>
                        <A
                            href="/pro/professional"
                            attr:data-cursor="link"
                            attr:class="rounded-xl border border-white/25 bg-white/10 px-5 py-3 backdrop-blur hover:bg-white/20 transition-all"
                        >
                            "See Work"
                        </A>
                    </div>
                </TiltCard>
                <div class="mt-10">
                    <Eye />
                </div>
                <p class="mt-8 text-sm text-white/80">"Tip: Reload, the vibe changes each time."</p>
            </div>
        </div>
    }
}
