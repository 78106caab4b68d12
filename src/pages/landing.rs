use web_sys::{HtmlImageElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::animated_stats::AnimatedStats;
use crate::components::cookie_banner::CookieBanner;
use crate::components::faq::FaqSection;
use crate::components::kinetic_text::KineticText;
use crate::components::phone_mockup::PhoneMockup;
use crate::components::symptom_chart::SymptomChart;
use crate::components::waitlist_form::WaitlistForm;
use crate::config;
use crate::hooks::scroll_animation::use_scroll_animation_default;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#insights", "Insights"),
    ("#faq", "FAQ"),
    ("#resources", "Resources"),
];

const SUPPORTERS: [(&str, &str); 4] = [
    ("/supporters/crohns.png", "Crohn's & Colitis Foundation"),
    ("/supporters/mcmaster.png", "McMaster University"),
    ("/supporters/omsa.png", "OMSA"),
    ("/supporters/partner4.png", "Partner"),
];

const PLACEHOLDER_LOGO: &str = "/placeholder-logo.png";

const FEATURES: [(&str, &str); 3] = [
    (
        "Built by Specialists",
        "Co-designed with practicing gastroenterologists so guidance is clinically grounded, yet simple and actionable.",
    ),
    (
        "Track & Detect",
        "Log pain, stools, tiredness, fatigue and receive clear signals when trends suggest a possible flare.",
    ),
    (
        "Food that Fits You",
        "Explore patterns (low-FODMAP, Mediterranean, SCD) and see which meals correlate with better days for you.",
    ),
];

const INSIGHTS: [(&str, &str, u32); 3] = [
    (
        "Trend Analysis",
        "Track patterns and correlations between symptoms and diet in real-time for better health management.",
        400,
    ),
    (
        "Real-Time Monitoring",
        "Get instant feedback on your dietary choices and their potential impact on your IBD symptoms.",
        600,
    ),
    (
        "Data-Driven Insights",
        "Make informed decisions backed by personalized analytics and historical tracking data.",
        800,
    ),
];

pub struct TeamMember {
    pub photo: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

// Founders, clinician advisors, operations and engineering, interns.
pub const TEAM_ROWS: [&[TeamMember]; 4] = [
    &[
        TeamMember { photo: "/team/aryan.jpg", name: "Aryan Shah (BSc)", role: "Co-founder" },
        TeamMember { photo: "/team/alexandra.jpg", name: "Alexandra Gleave (MD)", role: "Co-founder" },
    ],
    &[
        TeamMember { photo: "/team/neeraj.jpg", name: "Neeraj Narula (MD)", role: "Clinician Advisor" },
        TeamMember { photo: "/team/remo.jpg", name: "Remo Panaccione (MD)", role: "Clinician Advisor" },
        TeamMember { photo: "/team/maitreyi.jpg", name: "Maitreyi Raman (MD)", role: "Clinician Advisor" },
    ],
    &[
        TeamMember { photo: "/team/prangad.jpg", name: "Prangad Gupta", role: "Clinical Validation and Operations" },
        TeamMember { photo: "/team/jasmine.jpg", name: "Jasmine Zangeneh", role: "Senior Engineer" },
        TeamMember { photo: "/team/justin.jpg", name: "Justine Mangaliman", role: "Full Stack Developer" },
    ],
    &[
        TeamMember { photo: "/team/Liam.JPG", name: "Liam Sarjeant", role: "Front End Developer" },
        TeamMember { photo: "/team/aarav.jpg", name: "Aarav Mazumder", role: "Junior Technical Intern" },
    ],
];

const FOOTER_COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Product", ["Features", "Pricing", "Download"]),
    ("Company", ["About", "Blog", "Careers"]),
    ("Legal", ["Privacy", "Terms", "Security"]),
];

const SOCIAL_LINKS: [&str; 4] = ["Facebook", "Twitter", "Instagram", "LinkedIn"];

fn reveal(is_visible: bool) -> Classes {
    classes!("reveal", is_visible.then(|| "revealed"))
}

/// Swaps a missing supporter logo for the placeholder, once.
fn logo_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if !img.src().ends_with(PLACEHOLDER_LOGO) {
            img.set_src(PLACEHOLDER_LOGO);
        }
    })
}

#[derive(Properties, PartialEq)]
struct WaitlistButtonProps {
    on_open: Callback<()>,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    stacked: bool,
}

/// "Join Waitlist" button used in the header, hero and call-to-action blocks.
#[function_component(WaitlistButton)]
fn waitlist_button(props: &WaitlistButtonProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <button class={classes!("waitlist-button", props.class.clone())} {onclick}>
            if props.stacked {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
                <span class="stacked-label">
                    <span class="eyebrow">{"Coming January 2026"}</span>
                    <span class="title">{"Join Waitlist"}</span>
                </span>
            } else {
                <span>{"Join the Waitlist"}</span>
                <span class="arrow">{"→"}</span>
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_join: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let join_from_menu = {
        let menu_open = menu_open.clone();
        let on_join = props.on_join.clone();
        Callback::from(move |_| {
            menu_open.set(false);
            on_join.emit(());
        })
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <a href="#" class="header-logo">
                    <img src="/image001.png" alt="MyIBDCompass Logo" />
                </a>
                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link">{*label}</a>
                    }) }
                </nav>
                <div class="header-actions">
                    <WaitlistButton on_open={props.on_join.clone()} class="desktop-only glass-button" stacked=true />
                    <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            if *menu_open {
                <nav class="mobile-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="mobile-nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <WaitlistButton on_open={join_from_menu} class="mobile-join" stacked=true />
                </nav>
            }
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let waitlist_open = use_state(|| false);
    let (hero_ref, hero_visible) = use_scroll_animation_default();
    let (features_ref, features_visible) = use_scroll_animation_default();
    let (insights_ref, insights_visible) = use_scroll_animation_default();
    let (cta_ref, cta_visible) = use_scroll_animation_default();

    let open_waitlist = {
        let waitlist_open = waitlist_open.clone();
        Callback::from(move |_| waitlist_open.set(true))
    };
    let close_waitlist = {
        let waitlist_open = waitlist_open.clone();
        Callback::from(move |_| waitlist_open.set(false))
    };

    let availability_note = html! {
        <p class={classes!("availability-note", reveal(hero_visible))}>
            <span class="pulse-dot"></span>
            <span>{"Coming to App Store & Google Play in January 2026"}</span>
        </p>
    };

    html! {
        <div class="landing-page">
            <Header on_join={open_waitlist.clone()} />

            <section ref={hero_ref} class="hero-section">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h1 class={classes!(if hero_visible { "animate-slide-up" } else { "hidden-until-reveal" })}>
                            <div><KineticText text="Manage IBD" /></div>
                            <div>
                                <KineticText text="with " delay={0.5} />
                                <KineticText text="clarity." delay={0.75} class="accent-text" />
                            </div>
                        </h1>
                        <p class={classes!("hero-lead", reveal(hero_visible))}>
                            {"Built by gastroenterologists for patients. Track daily symptoms, identify flares early, and find food patterns that align with your body."}
                        </p>
                        <div class={classes!("hero-cta", "desktop-only", reveal(hero_visible))}>
                            <WaitlistButton on_open={open_waitlist.clone()} class="primary-cta" />
                        </div>
                        <div class="desktop-only">{availability_note.clone()}</div>
                    </div>
                    <div class="hero-visual">
                        <div class={classes!("hero-cta", "mobile-only", reveal(hero_visible))}>
                            <WaitlistButton on_open={open_waitlist.clone()} class="primary-cta" />
                        </div>
                        <div class="mobile-only">{availability_note}</div>
                        <PhoneMockup />
                    </div>
                </div>
            </section>

            <section class="supporters-section">
                <h3>{"Supported by"}</h3>
                <div class="supporters-row">
                    { for SUPPORTERS.iter().map(|(src, alt)| html! {
                        <img key={*src} src={*src} alt={*alt} class="supporter-logo" onerror={logo_fallback()} />
                    }) }
                </div>
            </section>

            <AnimatedStats />

            <section id="features" ref={features_ref} class="features-section">
                <div class="features-grid">
                    <div>
                        <h2 class={classes!("section-title", reveal(features_visible))}>
                            <span class="highlight">{"Connected Care, Between Visits"}</span>
                        </h2>
                        <p class={classes!("section-lead", reveal(features_visible))}>
                            {"With your consent, you're registered to your clinician's roster so they can securely review your symptom trends and diet notes between clinic appointments. This helps focus visits on decisions, not recall."}
                        </p>
                    </div>
                    <div class="feature-cards">
                        { for FEATURES.iter().enumerate().map(|(i, (title, body))| html! {
                            <div
                                key={*title}
                                class={classes!("feature-card", reveal(features_visible))}
                                style={format!("transition-delay: {}ms;", 200 + i * 100)}
                            >
                                <span class="feature-title">{*title}</span>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="research-section">
                <h2 class="section-title">{"Research Backed"}</h2>
                <div class="review-card">
                    <div class="review-accent"></div>
                    <h3>{"Our Review"}</h3>
                    <h4>{"Using Diet to Treat Inflammatory Bowel Disease: A Systematic Review"}</h4>
                    <div class="review-journal">{"Published in the American Journal of Gastroenterology"}</div>
                    <div class="review-authors">
                        {"By "}
                        <span>{"Alexandra Gleave, Aryan Shah, Umair Tahir, Jedid-Jah Blom, Ethan Dong, Ayush Patel, John K Marshall, Neeraj Narula"}</span>
                    </div>
                    <a
                        class="review-link"
                        href="https://pubmed.ncbi.nlm.nih.gov/39056556/"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span>{"Read the Full Protocol Review"}</span>
                        <span class="arrow">{"→"}</span>
                    </a>
                </div>
            </section>

            <section id="insights" ref={insights_ref} class="insights-section">
                <div class="insights-grid">
                    <div class={classes!("insights-chart", reveal(insights_visible))}>
                        <SymptomChart />
                    </div>
                    <div>
                        <h2 class={classes!("section-title", reveal(insights_visible))}>
                            {"Data at your "}<span class="accent-text">{"fingertips"}</span>
                        </h2>
                        <p class={classes!("section-lead", reveal(insights_visible))}>
                            {"Real-time insights for faster decisions"}
                        </p>
                        { for INSIGHTS.iter().map(|(title, description, delay)| html! {
                            <div
                                key={*title}
                                class={classes!("insight-card", reveal(insights_visible))}
                                style={format!("transition-delay: {}ms;", delay)}
                            >
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="trials-section">
                <h2 class="section-title"><span class="highlight">{"Join clinical trials"}</span></h2>
                <p class="section-lead">{"Pilot the MyIBDCompass app to help improve care for others with IBD"}</p>
                <WaitlistButton on_open={open_waitlist.clone()} class="primary-cta" />
            </section>

            <FaqSection />

            <section id="resources" class="team-section">
                <h2 class="section-title"><span class="highlight">{"Meet the Team"}</span></h2>
                { for TEAM_ROWS.iter().enumerate().map(|(row, members)| html! {
                    <div key={row} class="team-row">
                        { for members.iter().map(|member| html! {
                            <div key={member.name} class="team-member">
                                <img src={member.photo} alt={member.name} width="112" height="112" />
                                <div class="team-name">{member.name}</div>
                                <div class="team-role">{member.role}</div>
                            </div>
                        }) }
                    </div>
                }) }
            </section>

            <section ref={cta_ref} class="final-cta-section">
                <div class={classes!("final-cta-card", if cta_visible { "scaled-in" } else { "scaled-out" })}>
                    <h2 class={reveal(cta_visible)}>{"Ready to take control of your IBD journey?"}</h2>
                    <p class={reveal(cta_visible)}>{"Join our waitlist for early access"}</p>
                    <div class={reveal(cta_visible)}>
                        <WaitlistButton on_open={open_waitlist} class="glass-button" stacked=true />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <img src="/image001.png" alt="MyIBDCompass Logo" class="footer-logo" />
                        <p>{"Your trusted companion for managing IBD through nutrition."}</p>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                        <div key={*heading}>
                            <h3>{*heading}</h3>
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 MyIBDCompass. All rights reserved."}</p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|name| html! {
                            <a key={*name} href="#" aria-label={*name}>{*name}</a>
                        }) }
                    </div>
                </div>
            </footer>

            <WaitlistForm is_open={*waitlist_open} on_close={close_waitlist} />
            <CookieBanner />
            <div class="version-tag">{config::SITE_VERSION}</div>

            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    height: 4rem;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo img {
                    max-height: 40px;
                    width: auto;
                    transition: transform 0.5s ease-in-out;
                }
                .header-logo:hover img {
                    transform: scale(1.1) rotate(3deg);
                }
                .desktop-nav {
                    display: none;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: rgba(17, 24, 39, 0.8);
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #111827;
                }
                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem 1rem;
                    background: rgba(255, 255, 255, 0.8);
                }
                .mobile-nav-link {
                    font-size: 0.875rem;
                    color: #6b7280;
                    text-decoration: none;
                }
                .waitlist-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    border: none;
                    transition: transform 0.2s;
                }
                .waitlist-button:hover {
                    transform: scale(1.05);
                }
                .waitlist-button .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .stacked-label {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    line-height: 1;
                }
                .stacked-label .eyebrow {
                    font-size: 10px;
                    opacity: 0.7;
                }
                .stacked-label .title {
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .primary-cta,
                .mobile-join {
                    background: var(--accent);
                    color: #fff;
                }
                .glass-button {
                    background: rgba(255, 255, 255, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(8px);
                }
                .hero-section {
                    padding: 2rem 1rem 4rem;
                }
                .hero-grid,
                .features-grid,
                .insights-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy h1 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    line-height: 1.15;
                    margin-bottom: 1rem;
                }
                .hero-lead {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 28rem;
                }
                .hero-cta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin: 1.5rem 0 1rem;
                }
                .availability-note {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #22c55e;
                    animation: pulse 2s infinite;
                }
                .supporters-section {
                    padding: 2rem 1rem;
                    text-align: center;
                }
                .supporters-section h3 {
                    font-weight: 600;
                    color: #6b7280;
                    margin-bottom: 1rem;
                }
                .supporters-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                }
                .supporter-logo {
                    height: 3rem;
                    width: auto;
                    object-fit: contain;
                }
                .features-section,
                .insights-section,
                .trials-section,
                .team-section,
                .research-section,
                .final-cta-section {
                    position: relative;
                    padding: 5rem 1rem;
                }
                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .section-lead {
                    text-align: center;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                .feature-cards {
                    display: grid;
                    gap: 1.5rem;
                }
                .feature-card,
                .insight-card {
                    border-radius: 1rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                }
                .feature-title,
                .insight-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .review-card {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    overflow: hidden;
                }
                .review-accent {
                    position: absolute;
                    left: 0;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    background: var(--accent);
                }
                .review-journal,
                .review-authors {
                    color: #6b7280;
                    font-size: 0.875rem;
                    margin-top: 0.5rem;
                }
                .review-link {
                    display: inline-flex;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    color: var(--accent);
                    font-weight: 600;
                    text-decoration: none;
                }
                .trials-section {
                    text-align: center;
                }
                .team-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2.5rem;
                    margin-bottom: 2.5rem;
                }
                .team-member {
                    text-align: center;
                    width: 10rem;
                }
                .team-member img {
                    width: 7rem;
                    height: 7rem;
                    border-radius: 9999px;
                    object-fit: cover;
                }
                .team-name {
                    font-weight: 600;
                    margin-top: 0.75rem;
                }
                .team-role {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .final-cta-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    border-radius: 1.5rem;
                    padding: 4rem 2rem;
                    background: linear-gradient(135deg, rgba(var(--accent-rgb), 0.12), rgba(var(--accent-rgb), 0.02));
                    transition: transform 1s, opacity 1s;
                }
                .js-reveal .final-cta-card.scaled-out {
                    transform: scale(0.95);
                    opacity: 0;
                }
                .js-reveal .final-cta-card.scaled-in {
                    transform: scale(1);
                    opacity: 1;
                }
                .site-footer {
                    border-top: 1px solid #e5e7eb;
                    padding: 3rem 1rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                }
                .footer-logo {
                    height: 50px;
                    width: auto;
                }
                .site-footer h3 {
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                }
                .site-footer a {
                    color: #6b7280;
                    text-decoration: none;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 3rem auto 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .social-links {
                    display: flex;
                    gap: 1rem;
                }
                .version-tag {
                    position: fixed;
                    bottom: 0.5rem;
                    right: 1rem;
                    font-size: 8px;
                    color: #d1d5db;
                    pointer-events: none;
                    opacity: 0.4;
                }
                .mobile-only {
                    display: block;
                }
                .desktop-only {
                    display: none;
                }
                @media (min-width: 768px) {
                    .desktop-nav {
                        display: flex;
                    }
                    .section-title {
                        font-size: 2.25rem;
                    }
                    .footer-grid {
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                    }
                    .footer-bottom {
                        flex-direction: row;
                    }
                }
                @media (min-width: 1024px) {
                    .hero-grid,
                    .features-grid,
                    .insights-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .hero-copy h1 {
                        font-size: 4.5rem;
                    }
                    .mobile-only,
                    .burger-menu,
                    .mobile-nav {
                        display: none;
                    }
                    .desktop-only {
                        display: block;
                    }
                    .header-actions .desktop-only {
                        display: inline-flex;
                    }
                }
                "#}
            </style>
        </div>
    }
}
