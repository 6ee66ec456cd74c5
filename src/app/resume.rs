use leptos::{ev, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use super::cursor::FollowCursor;
use super::dom::dom_err;
use super::hooks::use_is_coarse;
use super::swipe::BackSwipe;
use crate::interaction::{cursor::CursorVariant, InteractionError};

pub const RESUME_PDF: &str = "/image/resume.pdf";
pub const LOGO: &str = "/image/12.png";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/shreenidhi-mc-vernekar-29a050259/";
pub const GITHUB: &str = "https://github.com/shreeshindi";

const SKILLS: &[&str] = &[
    "Java",
    "Spring Boot",
    "Spring Security",
    "REST APIs",
    "JPA/Hibernate",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Docker",
    "CI/CD",
    "FastAPI",
    "Microservices",
];

pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub stack: &'static str,
    pub points: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        title: "Senior Software Engineer, Flycatch Tech",
        period: "Aug 2024 - Present",
        stack: "Java • Spring Boot • MySQL • Docker",
        points: &[
            "Delivered backend for AwayTogether & a pluggable Authentication Core.",
            "Built internal tools (jukebox, activity scheduler) to improve guest engagement.",
            "Migrated services to a Strapi-backed CMS for consistent API contracts.",
        ],
    },
    Role {
        title: "Software Engineer, Hanriver, Kolkata",
        period: "May 2023 - Jul 2024",
        stack: "Java • Spring Boot • Docker • PostgreSQL",
        points: &[
            "Led SmartFarm (vertical farm ERP) and SmartRoot (IoT farm management) backends.",
            "Implemented SSO with Spring Security across multiple apps.",
            "Improved API response times ~20% via tuning & caching.",
        ],
    },
    Role {
        title: "Backend Developer, Kingston Info Solution Services",
        period: "Apr 2020 - Apr 2023",
        stack: "Java • Spring Boot • Hibernate • MySQL",
        points: &[
            "Built and maintained MFS Bulk Payment for secure, high-volume transactions.",
            "Added structured logging with AOP + Log4J for faster RCA.",
            "Query optimization and caching cut bulk processing time by ~15%.",
        ],
    },
];

pub struct Project {
    pub name: &'static str,
    pub desc: &'static str,
    pub stack: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "AwayTogether (Flycatch Tech)",
        desc: "Hotel management platform with Spring Boot + MySQL + Docker.",
        stack: &["Spring Boot", "MySQL", "Docker"],
    },
    Project {
        name: "Authentication Core (Flycatch Tech)",
        desc: "Pluggable auth module (JWT/Session) reusable across Spring apps.",
        stack: &["Java", "Spring Security", "JWT/Session"],
    },
    Project {
        name: "SmartFarm (Hanriver)",
        desc: "Task routing & scheduling for vertical farms; reliability-first design.",
        stack: &["Spring Boot", "PostgreSQL", "Docker"],
    },
    Project {
        name: "SmartRoot (Hanriver)",
        desc: "IoT-enabled farm management with real-time insights.",
        stack: &["Java", "Spring Boot", "Containers"],
    },
    Project {
        name: "MFS Bulk Payment",
        desc: "High-performance, secure bulk payment processing.",
        stack: &["Spring Boot", "Hibernate", "MySQL"],
    },
];

#[component]
pub fn Professional() -> impl IntoView {
    let is_coarse = use_is_coarse();

    view! {
        <Title text="Professional" />
        <Meta
            name="description"
            content="Senior Software Engineer (Backend). Java + Spring Boot. Clean, secure, production-ready APIs."
        />
        <Spotlight />
        <Show when=move || !is_coarse.get()>
            <FollowCursor variant=CursorVariant::Server />
        </Show>
        <BackSwipe />
        <div class="relative min-h-screen overflow-hidden text-white pro-root">
            <ProBackdrop />
            <ProHeader />
            <section class="mx-auto w-full max-w-7xl px-6 pb-10 pt-2 md:pt-8">
                <div class="relative overflow-hidden rounded-3xl border border-white/10 bg-white/5 p-6 backdrop-blur-xl">
                    <div class="inline-flex items-center gap-2 rounded-full border border-white/15 bg-white/10 px-3 py-1 text-sm">
                        <span class="inline-block h-2 w-2 animate-pulse rounded-full bg-emerald-400" />
                        "Open to Senior Backend roles"
                    </div>
                    <h1 class="mt-4 text-4xl font-bold leading-tight md:text-6xl">
                        "Building "
                        <span class="bg-gradient-to-r from-sky-300 to-fuchsia-300 bg-clip-text text-transparent">
                            "secure, fast"
                        </span> " backends"
                    </h1>
                    <p class="mt-4 max-w-prose text-white/85">
                        "Results-driven backend engineer with 5+ years in Java & Spring Boot. I deliver clean REST APIs, strong auth, observability, and deployments that don't break on Monday."
                    </p>
                    <ContactLinks />
                    <div class="mt-6 flex flex-wrap gap-2">
                        {SKILLS.iter().map(|s| view! { <Chip text=*s /> }).collect_view()}
                    </div>
                </div>
            </section>
            <section class="mx-auto w-full max-w-7xl px-6 py-8">
                <h2 class="text-2xl font-bold">"Experience"</h2>
                <div class="mt-6 space-y-6">
                    {ROLES.iter().map(|role| view! { <RoleCard role /> }).collect_view()}
                </div>
            </section>
            <section class="mx-auto w-full max-w-7xl px-6 pb-10">
                <h2 class="text-2xl font-bold">"Projects"</h2>
                <div class="mt-6 grid gap-6 md:grid-cols-3">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}

fn set_pointer_vars(x: &str, y: &str) -> Result<(), InteractionError> {
    let root = document()
        .document_element()
        .ok_or(InteractionError::MissingElement("html"))?;
    let style = root
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or(InteractionError::MissingElement("html"))?
        .style();
    style.set_property("--mx", x).map_err(dom_err)?;
    style.set_property("--my", y).map_err(dom_err)
}

/// Publishes the mouse position as `--mx`/`--my` for the glare overlay.
#[component]
pub fn Spotlight() -> impl IntoView {
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let (x, y) = (format!("{}px", ev.client_x()), format!("{}px", ev.client_y()));
        if let Err(e) = set_pointer_vars(&x, &y) {
            log::debug!("spotlight skipped: {e}");
        }
    });

    view! {
        <div
            aria-hidden="true"
            class="pointer-events-none fixed inset-0 z-0"
            style="background: radial-gradient(600px 600px at var(--mx, 50%) var(--my, 50%), rgba(255,255,255,0.18), transparent 45%); mix-blend-mode: screen"
        />
    }
}

#[component]
pub fn ProBackdrop() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 -z-20">
            <div class="absolute -top-28 -left-28 h-[28rem] w-[28rem] rounded-full opacity-40 blur-3xl animate-[blob_18s_ease-in-out_infinite] bg-[radial-gradient(closest-side,_#60a5fa,_transparent)]" />
            <div class="absolute -bottom-40 -right-36 h-[32rem] w-[32rem] rounded-full opacity-40 blur-3xl animate-[blob_22s_ease-in-out_infinite] bg-[radial-gradient(closest-side,_#a855f7,_transparent)]" />
            <div class="absolute inset-0 pro-grid" />
            <div class="absolute inset-0 bg-gradient-to-b from-black via-slate-900/70 to-black/85" />
        </div>
    }
}

#[component]
pub fn ProHeader() -> impl IntoView {
    view! {
        <header class="mx-auto flex w-full max-w-7xl items-center justify-between px-6 py-5">
            <A href="/pro/professional" attr:class="flex items-center gap-3">
                <img src=LOGO alt="Logo" width="40" height="40" />
                <span class="text-xl font-semibold tracking-wide">"Shreenidhi"</span>
            </A>
            <nav class="hidden gap-6 md:flex">
                <A href="/pro/professional" attr:class="hover:opacity-80">
                    "Home"
                </A>
                <A href="/pro/about" attr:class="hover:opacity-80">
                    "About"
                </A>
                <A href="/#landing-start" attr:class="hover:opacity-80">
                    "Fun"
                </A>
            </nav>
        </header>
    }
}

#[component]
pub fn ContactLinks() -> impl IntoView {
    view! {
        <div class="mt-6 flex flex-wrap gap-3">
            <a
                href=RESUME_PDF
                download
                class="inline-flex items-center gap-2 rounded-xl bg-white px-4 py-2 text-black hover:opacity-90"
            >
                "Download Resume"
            </a>
            <a
                href=LINKEDIN
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 rounded-xl border border-white/20 bg-white/10 px-4 py-2 hover:bg-white/20"
            >
                "LinkedIn"
            </a>
            <a
                href=GITHUB
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 rounded-xl border border-white/20 bg-white/10 px-4 py-2 hover:bg-white/20"
            >
                "GitHub"
            </a>
        </div>
    }
}

#[component]
pub fn Chip(text: &'static str) -> impl IntoView {
    view! {
        <span class="rounded-full border border-white/15 bg-white/5 px-3 py-1 text-sm text-white/80">
            {text}
        </span>
    }
}

#[component]
pub fn RoleCard(role: &'static Role) -> impl IntoView {
    view! {
        <div class="relative rounded-2xl border border-white/10 bg-white/5 p-5 backdrop-blur-xl">
            <div class="flex flex-col justify-between gap-3 md:flex-row md:items-center">
                <div>
                    <h3 class="text-lg font-semibold">{role.title}</h3>
                    <p class="text-white/70">{role.period}</p>
                </div>
                <div class="text-white/80">{role.stack}</div>
            </div>
            <ul class="mt-4 list-disc space-y-2 pl-5 text-white/80">
                {role.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-white/10 bg-white/5 p-5 backdrop-blur-xl">
            <h3 class="text-lg font-semibold">{project.name}</h3>
            <p class="mt-2 text-white/80">{project.desc}</p>
            <div class="mt-3 flex flex-wrap gap-2">
                {project.stack.iter().map(|t| view! { <Chip text=*t /> }).collect_view()}
            </div>
        </div>
    }
}
