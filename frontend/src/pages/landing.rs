use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::{
    award::Award, footer::Footer, hero::Hero, indicator::SectionIndicator, insights::Insights,
    lexology::Lexology, user_badge::UserBadge,
};
use crate::config::{AppConfig, ScrollConfig};
use crate::content::{SectionId, INSIGHTS, SECTIONS};
use crate::identity::{self, Session};
use crate::scroll::hook::{use_full_page_scroll, FullPageScroll};

fn render_section(section: SectionId, scroll: &FullPageScroll) -> Html {
    match section {
        SectionId::Hero => html! { <Hero key={section.key()} /> },
        SectionId::Insights => html! {
            <Insights key={section.key()} items={&INSIGHTS[..]} on_move={scroll.on_move()} />
        },
        SectionId::Lexology => html! { <Lexology key={section.key()} /> },
        SectionId::Award => html! { <Award key={section.key()} /> },
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll = use_full_page_scroll(ScrollConfig::for_sections(SECTIONS.len()));
    let session = use_state(|| None::<Session>);

    // The track is moved with transforms, so the window itself stays at the top.
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                session.set(Some(identity::bootstrap(&AppConfig::from_window())));
                || ()
            },
            (),
        );
    }

    let track_style = format!("transform: translateY(-{}vh);", scroll.current_index * 100);

    html! {
        <div class="fullpage-root">
            <style>
                {r#"
                    body {
                        margin: 0;
                    }
                    .fullpage-root {
                        height: 100vh;
                        overflow: hidden;
                        font-family: Inter, sans-serif;
                    }
                    .fullpage-track {
                        width: 100%;
                        transition: transform 0.7s ease-in-out;
                    }
                    .fp-section {
                        box-sizing: border-box;
                        width: 100vw;
                        height: 100vh;
                        overflow: hidden;
                    }
                "#}
            </style>
            <div class="fullpage-track" style={track_style}>
                { for SECTIONS.iter().map(|section| render_section(*section, &scroll)) }
            </div>
            {
                if scroll.is_last() {
                    html! { <Footer /> }
                } else {
                    html! {}
                }
            }
            <SectionIndicator
                sections={&SECTIONS[..]}
                current={scroll.current_index}
                on_select={scroll.on_select()}
            />
            {
                if let Some(session) = &*session {
                    html! { <UserBadge user_id={session.user_id.clone()} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
