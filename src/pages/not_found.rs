use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to MyIBDCompass"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }
                .not-found-link {
                    color: var(--accent);
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
