use yew::prelude::*;

use crate::hooks::responsive_transform::use_responsive_transform;

#[function_component(PhoneMockup)]
pub fn phone_mockup() -> Html {
    let transform = use_responsive_transform();

    html! {
        <div class="phone-mockup">
            <div class="phone-mockup-frame" style={format!("transform: {};", transform)}>
                <img
                    src="/app-screens/HeroDesigne.png"
                    alt="MyIBD Compass app interface showing wellness score, symptom tracking, and meal planning"
                />
                <div class="phone-mockup-glow" aria-hidden="true"></div>
            </div>
            <style>
                {r#"
                .phone-mockup {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 500px;
                }
                .phone-mockup-frame {
                    position: relative;
                    width: 100vw;
                    transition: transform 0.5s ease-out;
                }
                .phone-mockup-frame img {
                    width: 100%;
                    height: auto;
                    filter: drop-shadow(0 20px 25px rgba(0, 0, 0, 0.15));
                }
                .phone-mockup-glow {
                    position: absolute;
                    inset: -1rem;
                    z-index: -1;
                    filter: blur(40px);
                    background: linear-gradient(to top right, rgba(168, 85, 247, 0.2), transparent, rgba(249, 115, 22, 0.2));
                }
                @media (min-width: 640px) {
                    .phone-mockup-frame { width: 400px; }
                }
                @media (min-width: 768px) {
                    .phone-mockup { min-height: 600px; }
                    .phone-mockup-frame { width: 500px; }
                }
                @media (min-width: 1024px) {
                    .phone-mockup-frame { width: 600px; }
                }
                "#}
            </style>
        </div>
    }
}
