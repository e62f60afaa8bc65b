//! The one-page Forge Structural site: hero, services, projects, process,
//! about, areas, FAQ and contact, wired to the reveal, counter, parallax
//! and accordion behaviors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config;
use crate::counters;
use crate::reveal::{self, RevealLedger};
use crate::sections;
use crate::visual;

struct Service {
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Residential Structural Design",
        blurb: "Beam sizing, foundation design and framing plans for custom homes, \
                additions and load-bearing renovations.",
        icon: "⌂",
    },
    Service {
        title: "Commercial & Industrial",
        blurb: "Steel and concrete design for warehouses, retail fit-outs and light \
                industrial buildings, from schematic through permit.",
        icon: "▣",
    },
    Service {
        title: "Structural Assessments",
        blurb: "On-site condition reviews with a sealed report: cracked foundations, \
                sagging floors, fire damage and pre-purchase inspections.",
        icon: "✓",
    },
    Service {
        title: "Renovations & Additions",
        blurb: "Wall removals, second-storey additions and basement underpinning, \
                engineered to current Ontario Building Code.",
        icon: "↗",
    },
];

const DELIVERABLES: [&str; 3] = [
    "Sealed, permit-ready drawings",
    "Site visit and field review reports",
    "Direct line to your project engineer",
];

const PROJECTS: [(&str, &str, &str); 3] = [
    (
        "Lakeside Custom Home",
        "Muskoka",
        "Full structural design for a 4,800 sq ft home on rock shoreline, including \
         steel transfer beams over a glazed great room.",
    ),
    (
        "Warehouse Retrofit",
        "Hamilton",
        "Mezzanine addition and crane runway assessment for a 1970s steel-frame \
         warehouse, delivered without halting operations.",
    ),
    (
        "Heritage Masonry Restoration",
        "Kingston",
        "Stabilization of a limestone facade with helical ties and a new interior \
         steel frame, coordinated with heritage planners.",
    ),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "Their drawings went through permit review on the first pass. Our framer \
         said they were the clearest he'd worked from in years.",
        "M. Okafor, General Contractor, Barrie",
    ),
    (
        "They found a workable fix for our foundation that two other firms said \
         needed full replacement. Saved us six figures.",
        "S. Tremblay, Homeowner, Ottawa",
    ),
];

const PROCESS: [(&str, &str); 4] = [
    ("Consultation", "A short call to scope the work, flag risks early and give you a fixed quote."),
    ("Site Review", "An engineer measures and documents the existing structure where it matters."),
    ("Engineering", "Analysis, member sizing and sealed drawings your builder can price and permit."),
    ("Permit Support", "We answer plan-review comments and revise until the permit is issued."),
];

const VALUES: [(&str, &str); 3] = [
    ("Precision first", "Every load path checked twice before a drawing leaves the office."),
    ("Builder friendly", "Details drawn the way crews actually build, not just the way code reads."),
    ("Straight answers", "If a cheaper detail works, you hear about it before we draw the expensive one."),
];

const CREDENTIALS: [&str; 3] = [
    "Licensed Professional Engineers (PEO)",
    "Certificate of Authorization holder",
    "Fully insured, WSIB compliant",
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Projects Engineered"),
    ("15+", "Years in Practice"),
    ("98%", "First-Review Approvals"),
    ("24h", "Typical Response"),
];

const AREAS: [(&str, &str); 4] = [
    ("Greater Toronto", "Toronto, Mississauga, Vaughan, Markham, Oshawa"),
    ("Hamilton & Niagara", "Hamilton, Burlington, St. Catharines, Niagara Falls"),
    ("Eastern Ontario", "Ottawa, Kingston, Belleville, Cornwall"),
    ("Central & North", "Barrie, Orillia, Muskoka, North Bay"),
];

const TRUST: [&str; 3] = [
    "Licensed P.Eng. review on every file",
    "Fixed-fee quotes before work starts",
    "Drawings accepted in every Ontario municipality",
];

const FAQS: [(&str, &str); 4] = [
    (
        "Do I need an engineer to remove a wall?",
        "If the wall carries load, yes: Ontario building departments require sealed \
         drawings for the new beam and its supports. We confirm whether a wall is \
         load-bearing during the site review, before you commit to anything.",
    ),
    (
        "How long do sealed drawings take?",
        "Most residential packages are delivered within two to three weeks of the \
         site visit. Larger commercial work is scheduled up front with milestones, \
         and we flag anything that could affect your permit date early.",
    ),
    (
        "What does a structural assessment cost?",
        "Assessments are quoted as a fixed fee based on the size and access of the \
         structure, and the fee is credited toward design work if the project goes \
         ahead with us.",
    ),
    (
        "Can you work from my architect's plans?",
        "Yes. We regularly complete the structural portion of architect-led permit \
         sets and coordinate member sizes and depths directly with the design team.",
    ),
];

// Reveal keys count up through the cards in document order, so the stagger
// wave ripples across each grid the way the elements appear on the page.
const TRUST_BASE: usize = 0;
const SERVICE_BASE: usize = 3;
const DELIVERABLE_BASE: usize = 7;
const PROJECT_BASE: usize = 10;
const TESTIMONIAL_BASE: usize = 13;
const PROCESS_BASE: usize = 15;
const VALUE_BASE: usize = 19;
const CREDENTIAL_BASE: usize = 22;
const AREA_BASE: usize = 25;
const FAQ_BASE: usize = 29;

/// Exclusive accordion: clicking the open item closes it, clicking any
/// other item moves the single open slot there.
fn faq_toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// A leave event only clears the highlight its own card holds; a stale
/// leave arriving after the pointer has entered another card is ignored.
fn unhighlight(current: Option<usize>, left: usize) -> Option<usize> {
    if current == Some(left) {
        None
    } else {
        current
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let revealed = use_state(RevealLedger::default);
    let highlighted = use_state(|| None::<usize>);
    let open_faq = use_state(|| None::<usize>);

    // Observers live for the life of the page; dropping the handles on
    // unmount disconnects them.
    {
        let on_reveal = revealed.setter();
        use_effect_with_deps(
            move |_| {
                let handles = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| (reveal::mount(&document, on_reveal), counters::mount(&document)));
                move || drop(handles)
            },
            (),
        );
    }

    // Hero glow drifts at a fraction of the scroll speed.
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    if let Some(glow) = window_clone
                        .document()
                        .and_then(|d| d.query_selector(".hero-glow").ok().flatten())
                    {
                        if let Ok(glow) = glow.dyn_into::<web_sys::HtmlElement>() {
                            let _ = glow.style().set_property(
                                "transform",
                                &format!(
                                    "translateX(-50%) translateY({}px)",
                                    scroll_y * config::PARALLAX_FACTOR
                                ),
                            );
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                Box::new(move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (),
    );

    let card = {
        let revealed = revealed.clone();
        move |index: usize, base: Classes| -> (Classes, String, String) {
            let key = format!("c{index}");
            let mut class = base;
            class.push(visual::FADE_IN);
            if revealed.is_revealed(&key) {
                class.push(visual::VISIBLE);
            }
            let delay = format!("transition-delay: {}ms", reveal::stagger_delay_ms(index));
            (class, key, delay)
        }
    };

    let header = {
        let revealed = revealed.clone();
        move |index: usize, base: Classes| -> (Classes, String) {
            let key = format!("h{index}");
            let mut class = base;
            class.push(visual::FADE_IN);
            if revealed.is_revealed(&key) {
                class.push(visual::VISIBLE);
            }
            (class, key)
        }
    };

    let goto = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            sections::scroll_to_section(id);
        })
    };

    let hover_card = {
        let highlighted = highlighted.clone();
        move |index: usize| {
            let highlighted = highlighted.clone();
            Callback::from(move |_: MouseEvent| highlighted.set(Some(index)))
        }
    };

    let unhover_card = {
        let highlighted = highlighted.clone();
        move |index: usize| {
            let highlighted = highlighted.clone();
            Callback::from(move |_: MouseEvent| {
                highlighted.set(unhighlight(*highlighted, index));
            })
        }
    };

    let on_faq_click = {
        let open_faq = open_faq.clone();
        move |index: usize| {
            let open_faq = open_faq.clone();
            Callback::from(move |_: MouseEvent| open_faq.set(faq_toggle(*open_faq, index)))
        }
    };

    let (services_header, services_header_key) = header(0, classes!("section-header"));
    let (projects_header, projects_header_key) = header(1, classes!("section-header"));
    let (process_header, process_header_key) = header(2, classes!("section-header"));
    let (about_content, about_content_key) = header(3, classes!("about-content"));
    let (areas_header, areas_header_key) = header(4, classes!("section-header"));
    let (faq_header, faq_header_key) = header(5, classes!("section-header"));
    let (contact_header, contact_header_key) = header(6, classes!("section-header"));
    let (contact_info, contact_info_key) = header(7, classes!("contact-info"));
    let (cta_content, cta_content_key) = header(8, classes!("cta-content"));

    html! {
        <main class="home">
            <section id="home" class="hero">
                <div class="hero-glow"></div>
                <div class="hero-inner">
                    <p class="hero-kicker">{"Structural engineering, Ontario-wide"}</p>
                    <h1>{"Structures designed to carry more than load"}</h1>
                    <p class="hero-subtitle">
                        {"Forge Structural delivers sealed, permit-ready structural design for \
                          homes, businesses and the people who build them."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="button-primary" onclick={goto("contact")}>
                            {"Start your project"}
                        </a>
                        <a href="#projects" class="button-ghost" onclick={goto("projects")}>
                            {"See our work"}
                        </a>
                    </div>
                    <div class="trust-bar">
                        { for TRUST.iter().enumerate().map(|(i, line)| {
                            let (class, key, delay) = card(TRUST_BASE + i, classes!("trust-item"));
                            html! {
                                <div class={class} data-reveal-key={key} style={delay}>
                                    <span class="trust-mark">{"✓"}</span>
                                    <span>{*line}</span>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class={services_header} data-reveal-key={services_header_key}>
                    <h2>{"What we engineer"}</h2>
                    <p>{"Four practice areas, one standard of rigor."}</p>
                </div>
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let base = classes!(
                            "service-card",
                            (*highlighted == Some(i)).then(|| visual::HIGHLIGHTED)
                        );
                        let (class, key, delay) = card(SERVICE_BASE + i, base);
                        html! {
                            <div
                                class={class}
                                data-reveal-key={key}
                                style={delay}
                                onmouseenter={hover_card(i)}
                                onmouseleave={unhover_card(i)}
                            >
                                <span class="service-icon">{service.icon}</span>
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                            </div>
                        }
                    }) }
                </div>
                <div class="deliverables">
                    { for DELIVERABLES.iter().enumerate().map(|(i, item)| {
                        let (class, key, delay) = card(DELIVERABLE_BASE + i, classes!("deliverable-item"));
                        html! {
                            <div class={class} data-reveal-key={key} style={delay}>
                                <span class="deliverable-mark">{"•"}</span>
                                <span>{*item}</span>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section id="projects" class="projects">
                <div class={projects_header} data-reveal-key={projects_header_key}>
                    <h2>{"Recent work"}</h2>
                    <p>{"A sample of what has left the office lately."}</p>
                </div>
                <div class="card-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, &(title, location, blurb))| {
                        let (class, key, delay) = card(PROJECT_BASE + i, classes!("project-card"));
                        html! {
                            <article class={class} data-reveal-key={key} style={delay}>
                                <span class="project-location">{location}</span>
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </article>
                        }
                    }) }
                </div>
                <div class="testimonial-row">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, &(quote, who))| {
                        let (class, key, delay) = card(TESTIMONIAL_BASE + i, classes!("testimonial-card"));
                        html! {
                            <blockquote class={class} data-reveal-key={key} style={delay}>
                                <p>{quote}</p>
                                <footer>{who}</footer>
                            </blockquote>
                        }
                    }) }
                </div>
            </section>

            <section id="process" class="process">
                <div class={process_header} data-reveal-key={process_header_key}>
                    <h2>{"How a project runs"}</h2>
                    <p>{"The same four steps, whether it's one beam or a whole building."}</p>
                </div>
                <div class="process-grid">
                    { for PROCESS.iter().enumerate().map(|(i, &(step, detail))| {
                        let (class, key, delay) = card(PROCESS_BASE + i, classes!("process-step"));
                        html! {
                            <div class={class} data-reveal-key={key} style={delay}>
                                <span class="step-number">{format!("{:02}", i + 1)}</span>
                                <h3>{step}</h3>
                                <p>{detail}</p>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section id="about" class="about">
                <div class={about_content} data-reveal-key={about_content_key}>
                    <h2>{"A small firm that sweats the details"}</h2>
                    <p>
                        {"Forge Structural was founded on a simple observation: most structural \
                          problems on site trace back to drawings that were never thought through. \
                          We keep our project load small enough that a licensed engineer, not a \
                          template, makes every call."}
                    </p>
                </div>
                <div class="value-grid">
                    { for VALUES.iter().enumerate().map(|(i, &(value, detail))| {
                        let (class, key, delay) = card(VALUE_BASE + i, classes!("value-item"));
                        html! {
                            <div class={class} data-reveal-key={key} style={delay}>
                                <h3>{value}</h3>
                                <p>{detail}</p>
                            </div>
                        }
                    }) }
                </div>
                <div class="credential-row">
                    { for CREDENTIALS.iter().enumerate().map(|(i, line)| {
                        let (class, key, delay) = card(CREDENTIAL_BASE + i, classes!("credential"));
                        html! {
                            <div class={class} data-reveal-key={key} style={delay}>{*line}</div>
                        }
                    }) }
                </div>
                <div class="stats-band">
                    { for STATS.iter().map(|&(value, label)| html! {
                        <div class="stat">
                            <span class="stat-number">{value}</span>
                            <span class="stat-label">{label}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id="areas" class="areas">
                <div class={areas_header} data-reveal-key={areas_header_key}>
                    <h2>{"Where we work"}</h2>
                    <p>{"Site visits across Ontario, drawings accepted everywhere in it."}</p>
                </div>
                <div class="area-grid">
                    { for AREAS.iter().enumerate().map(|(i, &(region, cities))| {
                        let (class, key, delay) = card(AREA_BASE + i, classes!("area-region"));
                        html! {
                            <div class={class} data-reveal-key={key} style={delay}>
                                <h3>{region}</h3>
                                <p>{cities}</p>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section id="faq" class="faq">
                <div class={faq_header} data-reveal-key={faq_header_key}>
                    <h2>{"Common questions"}</h2>
                    <p>{"The things clients ask before picking up the phone."}</p>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, &(question, answer))| {
                        let base = classes!("faq-item", (*open_faq == Some(i)).then(|| "open"));
                        let (class, key, delay) = card(FAQ_BASE + i, base);
                        html! {
                            <div class={class} data-reveal-key={key} style={delay}>
                                <button class="faq-question" onclick={on_faq_click(i)}>
                                    <span>{question}</span>
                                    <span class="faq-icon">
                                        { if *open_faq == Some(i) { "−" } else { "+" } }
                                    </span>
                                </button>
                                <div class="faq-answer"><p>{answer}</p></div>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <div class={contact_header} data-reveal-key={contact_header_key}>
                    <h2>{"Tell us what you're building"}</h2>
                    <p>{"A response from an engineer, usually within one business day."}</p>
                </div>
                <div class="contact-layout">
                    <div class={contact_info} data-reveal-key={contact_info_key}>
                        <h3>{"Forge Structural Inc."}</h3>
                        <p>{"41 Steelcase Road West, Unit 12"}<br/>{"Markham, ON L3R 2M2"}</p>
                        <p><a href="tel:+19055550137">{"(905) 555-0137"}</a></p>
                        <p><a href="mailto:projects@forgestructural.ca">{"projects@forgestructural.ca"}</a></p>
                        <p class="office-hours">{"Monday to Friday, 8:00 to 17:00"}</p>
                    </div>
                    <ContactForm />
                </div>
                <div class={cta_content} data-reveal-key={cta_content_key}>
                    <h2>{"Already have drawings that need a seal?"}</h2>
                    <p>{"Send them over and we'll tell you the fastest route to permit."}</p>
                    <a href="#contact" class="button-primary" onclick={goto("contact")}>
                        {"Get a fixed quote"}
                    </a>
                </div>
            </section>

            <footer class="site-footer">
                <span>{"© 2026 Forge Structural Inc."}</span>
                <span>{"Licensed Professional Engineers, Ontario"}</span>
            </footer>

            <style>
                {r#"
                .home section {
                    padding: 6rem 1.5rem;
                    max-width: 1120px;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .section-header h2 {
                    font-size: 2rem;
                    line-height: 1.2;
                    margin-bottom: 0.75rem;
                }

                .section-header p {
                    color: var(--color-text-muted);
                }

                /* Hero */

                .hero {
                    position: relative;
                    min-height: 92vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding-top: 8rem;
                }

                .hero-glow {
                    position: absolute;
                    top: -180px;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 720px;
                    height: 520px;
                    background: radial-gradient(closest-side, var(--color-accent-soft), transparent);
                    filter: blur(40px);
                    pointer-events: none;
                }

                .hero-inner {
                    position: relative;
                    max-width: 760px;
                }

                .hero-kicker {
                    color: var(--color-accent);
                    font-weight: 600;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                    margin-bottom: 1rem;
                }

                .hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.6rem);
                    line-height: 1.1;
                    margin-bottom: 1.25rem;
                }

                .hero-subtitle {
                    font-size: 1.15rem;
                    color: var(--color-text-muted);
                    max-width: 560px;
                    margin-bottom: 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 3.5rem;
                }

                .button-primary,
                .button-ghost {
                    display: inline-block;
                    padding: 0.85rem 1.6rem;
                    border-radius: 8px;
                    font-weight: 600;
                    transition: filter 0.2s ease, border-color 0.2s ease;
                }

                .button-primary {
                    background: var(--color-accent);
                    color: #1c1300;
                }

                .button-primary:hover {
                    filter: brightness(1.1);
                }

                .button-ghost {
                    border: 1px solid var(--color-border);
                }

                .button-ghost:hover {
                    border-color: var(--color-accent);
                }

                .trust-bar {
                    display: flex;
                    gap: 2rem;
                    flex-wrap: wrap;
                }

                .trust-item {
                    display: flex;
                    gap: 0.5rem;
                    align-items: baseline;
                    color: var(--color-text-muted);
                    font-size: 0.9rem;
                }

                .trust-mark {
                    color: var(--color-accent);
                }

                /* Cards */

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.25rem;
                }

                .service-card,
                .project-card,
                .value-item,
                .area-region {
                    background: var(--color-surface);
                    border: 1px solid var(--color-border);
                    border-radius: 12px;
                    padding: 1.75rem;
                }

                .service-card {
                    transition: border-color 0.25s ease, transform 0.25s ease;
                }

                .service-card h3,
                .project-card h3 {
                    margin: 0.75rem 0 0.5rem;
                }

                .service-card p,
                .project-card p,
                .value-item p,
                .area-region p,
                .process-step p {
                    color: var(--color-text-muted);
                    font-size: 0.95rem;
                }

                .service-icon {
                    font-size: 1.5rem;
                    color: var(--color-accent);
                }

                .deliverables {
                    display: flex;
                    gap: 2rem;
                    flex-wrap: wrap;
                    justify-content: center;
                    margin-top: 2.5rem;
                }

                .deliverable-item {
                    display: flex;
                    gap: 0.5rem;
                    align-items: baseline;
                    color: var(--color-text-muted);
                    font-size: 0.9rem;
                }

                .deliverable-mark {
                    color: var(--color-accent);
                }

                .project-location {
                    color: var(--color-accent);
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                }

                .testimonial-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.25rem;
                    margin-top: 2.5rem;
                }

                .testimonial-card {
                    margin: 0;
                    background: var(--color-surface);
                    border-left: 3px solid var(--color-accent);
                    border-radius: 0 12px 12px 0;
                    padding: 1.5rem 1.75rem;
                    font-style: italic;
                    color: var(--color-text-muted);
                }

                .testimonial-card footer {
                    margin-top: 1rem;
                    font-style: normal;
                    font-size: 0.85rem;
                    color: var(--color-text);
                }

                /* Process */

                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                }

                .process-step {
                    border-top: 2px solid var(--color-border);
                    padding-top: 1.25rem;
                }

                .step-number {
                    color: var(--color-accent);
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                }

                .process-step h3 {
                    margin: 0.5rem 0;
                }

                /* About */

                .about-content {
                    max-width: 680px;
                    margin: 0 auto 3rem;
                    text-align: center;
                }

                .about-content h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .about-content p {
                    color: var(--color-text-muted);
                }

                .value-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.25rem;
                }

                .credential-row {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                    margin-top: 2.5rem;
                }

                .credential {
                    border: 1px solid var(--color-border);
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.85rem;
                    color: var(--color-text-muted);
                }

                .stats-band {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 1.25rem;
                    margin-top: 3.5rem;
                    border-top: 1px solid var(--color-border);
                    padding-top: 2.5rem;
                    text-align: center;
                }

                .stat-number {
                    display: block;
                    font-size: 2.4rem;
                    font-weight: 700;
                    color: var(--color-accent);
                    font-variant-numeric: tabular-nums;
                }

                .stat-label {
                    color: var(--color-text-muted);
                    font-size: 0.9rem;
                }

                /* Areas */

                .area-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.25rem;
                }

                .area-region h3 {
                    margin-bottom: 0.5rem;
                }

                /* FAQ */

                .faq-list {
                    max-width: 760px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .faq-item {
                    background: var(--color-surface);
                    border: 1px solid var(--color-border);
                    border-radius: 10px;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    color: var(--color-text);
                    text-align: left;
                    padding: 1.1rem 1.4rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .faq-icon {
                    color: var(--color-accent);
                    font-size: 1.2rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 320px;
                }

                .faq-answer p {
                    padding: 0 1.4rem 1.25rem;
                    color: var(--color-text-muted);
                    font-size: 0.95rem;
                }

                /* Contact */

                .contact-layout {
                    display: grid;
                    grid-template-columns: minmax(240px, 1fr) minmax(320px, 1.6fr);
                    gap: 2rem;
                    align-items: start;
                }

                .contact-info h3 {
                    margin-bottom: 1rem;
                }

                .contact-info p {
                    color: var(--color-text-muted);
                    margin-bottom: 0.75rem;
                }

                .contact-info a:hover {
                    color: var(--color-accent);
                }

                .office-hours {
                    font-size: 0.85rem;
                }

                .cta-content {
                    margin-top: 5rem;
                    text-align: center;
                    background: var(--color-surface);
                    border: 1px solid var(--color-border);
                    border-radius: 16px;
                    padding: 3rem 2rem;
                }

                .cta-content h2 {
                    margin-bottom: 0.75rem;
                }

                .cta-content p {
                    color: var(--color-text-muted);
                    margin-bottom: 1.75rem;
                }

                /* Reveal */

                .fade-in {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .fade-in.visible {
                    opacity: 1;
                    transform: none;
                }

                /* Footer */

                .site-footer {
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    max-width: 1120px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 3rem;
                    border-top: 1px solid var(--color-border);
                    color: var(--color-text-muted);
                    font-size: 0.85rem;
                }

                @media (max-width: 820px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }

                    .home section {
                        padding: 4rem 1.25rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_item_opens_it_and_closes_the_rest() {
        assert_eq!(faq_toggle(None, 2), Some(2));
        assert_eq!(faq_toggle(Some(0), 2), Some(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it_without_reopening() {
        assert_eq!(faq_toggle(Some(2), 2), None);
    }

    #[test]
    fn leaving_the_highlighted_card_clears_it() {
        assert_eq!(unhighlight(Some(1), 1), None);
    }

    #[test]
    fn a_stale_leave_keeps_the_newer_highlight() {
        assert_eq!(unhighlight(Some(2), 1), Some(2));
        assert_eq!(unhighlight(None, 3), None);
    }

    #[test]
    fn reveal_bases_follow_document_order() {
        assert_eq!(SERVICE_BASE, TRUST_BASE + TRUST.len());
        assert_eq!(DELIVERABLE_BASE, SERVICE_BASE + SERVICES.len());
        assert_eq!(PROJECT_BASE, DELIVERABLE_BASE + DELIVERABLES.len());
        assert_eq!(TESTIMONIAL_BASE, PROJECT_BASE + PROJECTS.len());
        assert_eq!(PROCESS_BASE, TESTIMONIAL_BASE + TESTIMONIALS.len());
        assert_eq!(VALUE_BASE, PROCESS_BASE + PROCESS.len());
        assert_eq!(CREDENTIAL_BASE, VALUE_BASE + VALUES.len());
        assert_eq!(AREA_BASE, CREDENTIAL_BASE + CREDENTIALS.len());
        assert_eq!(FAQ_BASE, AREA_BASE + AREAS.len());
    }
}
