use yew::prelude::*;

use crate::sections::call_to_action::CallToAction;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <div class="home__spacer"></div>
            <CallToAction />
            <div class="home__spacer"></div>
            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    background: #000000;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .home__spacer {
                    height: 60vh;
                }
                "#}
            </style>
        </main>
    }
}
