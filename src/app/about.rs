use leptos::prelude::*;
use leptos_meta::Title;

use super::resume::{Chip, ContactLinks, ProBackdrop, ProHeader, RoleCard, Spotlight, ROLES};
use super::swipe::BackSwipe;

const FOCUS: &[&str] = &[
    "Java",
    "Spring Boot",
    "Spring Security",
    "REST APIs",
    "JPA/Hibernate",
    "PostgreSQL",
    "Docker",
    "CI/CD",
    "Caching",
    "Resilience",
];

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Languages", &["Java", "Python"]),
    (
        "Frameworks & Tech",
        &[
            "Spring Boot, Spring MVC, Spring Security, JPA/Hibernate",
            "Servlets, RESTful APIs",
            "FastAPI",
        ],
    ),
    (
        "Databases & Tools",
        &["PostgreSQL, MySQL, MongoDB", "Maven, Gradle, Docker, Git"],
    ),
];

const EDUCATION: &[(&str, &str)] = &[
    (
        "B.E. in Computer Science",
        "Visvesvaraya Technological University, 2020",
    ),
    ("Diploma in Computer Science", "PES University, 2016"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="About" />
        <Spotlight />
        <BackSwipe />
        <div class="relative min-h-screen overflow-hidden text-white pro-root">
            <ProBackdrop />
            <ProHeader />
            <section class="mx-auto w-full max-w-7xl px-6 pb-8 pt-2 md:pt-8">
                <div class="relative overflow-hidden rounded-3xl border border-white/10 bg-white/5 p-6 backdrop-blur-xl">
                    <h1 class="text-4xl font-bold leading-tight md:text-5xl">"About Me"</h1>
                    <p class="mt-4 max-w-prose text-white/85">
                        "I'm " <span class="font-semibold text-white">"Shreenidhi M C"</span>
                        ", a backend engineer focused on Java and Spring Boot. I care about clean API design, security that's actually enforced, and apps that don't fall over on a Monday morning."
                    </p>
                    <div class="mt-6 flex flex-wrap gap-2">
                        {FOCUS.iter().map(|s| view! { <Chip text=*s /> }).collect_view()}
                    </div>
                    <ContactLinks />
                </div>
            </section>
            <section class="mx-auto w-full max-w-7xl px-6 py-6">
                <div class="grid gap-6 md:grid-cols-3">
                    {SKILL_GROUPS
                        .iter()
                        .map(|(title, items)| {
                            view! {
                                <div class="rounded-2xl border border-white/10 bg-white/5 p-5 backdrop-blur-xl">
                                    <h2 class="text-xl font-semibold">{*title}</h2>
                                    <ul class="mt-3 list-disc space-y-1 pl-5 text-white/80">
                                        {items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="mx-auto w-full max-w-7xl px-6 py-6">
                <div class="rounded-2xl border border-white/10 bg-white/5 p-5 backdrop-blur-xl">
                    <h2 class="text-2xl font-bold">"Education"</h2>
                    <div class="mt-4 grid gap-5 md:grid-cols-2">
                        {EDUCATION
                            .iter()
                            .map(|(degree, school)| {
                                view! {
                                    <div class="rounded-xl border border-white/10 bg-white/5 p-4">
                                        <h3 class="text-lg font-semibold">{*degree}</h3>
                                        <p class="text-white/80">{*school}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
            <section class="mx-auto w-full max-w-7xl px-6 py-6">
                <h2 class="text-2xl font-bold">"Work Experience"</h2>
                <div class="mt-6 space-y-6">
                    {ROLES.iter().skip(1).map(|role| view! { <RoleCard role /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
