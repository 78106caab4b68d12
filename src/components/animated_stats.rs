use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation_default;

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub value: AttrValue,
    pub label: AttrValue,
    /// Entrance delay in milliseconds.
    pub delay: u32,
}

/// A single stat card. Each card watches its own visibility so a row that is
/// only partly on screen still reveals card by card.
#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let (card_ref, is_visible) = use_scroll_animation_default();

    html! {
        <div
            ref={card_ref}
            class={classes!("stat-item", "reveal", is_visible.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            <div class="stat-card">
                <div
                    class={classes!("stat-value", is_visible.then(|| "scaled-in"))}
                    style={format!("transition-delay: {}ms;", props.delay + 200)}
                >
                    {props.value.clone()}
                </div>
                <div class="stat-label">{props.label.clone()}</div>
            </div>
        </div>
    }
}

const HIDDEN_EPIDEMIC: [(&str, &str); 4] = [
    ("~1 in 150", "People live with IBD in North America"),
    (">50%", "Report food as a trigger or relief"),
    (">30%", "Experience annual symptom flares"),
    (">25%", "Increase in prevalence over the last decade"),
];

#[function_component(AnimatedStats)]
pub fn animated_stats() -> Html {
    let (section_ref, is_visible) = use_scroll_animation_default();

    html! {
        <section ref={section_ref} class="stats-section">
            <h2 class={classes!("section-title", "reveal", is_visible.then(|| "revealed"))}>
                <span class="highlight">{"The Hidden Epidemic"}</span>
            </h2>
            <div class="stats-grid">
                { for HIDDEN_EPIDEMIC.iter().enumerate().map(|(i, (value, label))| html! {
                    <StatItem
                        key={i}
                        value={*value}
                        label={*label}
                        delay={100 + i as u32 * 100}
                    />
                }) }
            </div>
            <p class={classes!("stats-note", "reveal", is_visible.then(|| "revealed"))}>
                {"myIBD Compass highlights nutrition's role without hype, clarity over complexity, so patients and clinicians can talk the same language."}
            </p>
            <style>
                {r#"
                .stats-section {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 1rem;
                    background: rgba(243, 244, 246, 0.3);
                }
                .stats-grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                @media (min-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .stat-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    border: 1px solid #e5e7eb;
                    background: rgba(255, 255, 255, 0.5);
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05);
                    transition: transform 0.5s, box-shadow 0.5s;
                }
                .stat-card:hover {
                    transform: scale(1.02);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 900;
                    margin-bottom: 0.75rem;
                    transform: scale(0.5);
                    transition: transform 0.7s;
                }
                .stat-value.scaled-in {
                    transform: scale(1);
                }
                .stat-label {
                    color: #6b7280;
                    font-weight: 500;
                }
                .stats-note {
                    max-width: 48rem;
                    margin: 3rem auto 0;
                    text-align: center;
                    color: #4b5563;
                }
                "#}
            </style>
        </section>
    }
}
