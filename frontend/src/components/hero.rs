use yew::prelude::*;

use crate::content::{placeholder_image, FIRM_NAME};

const LANGUAGES: [&str; 4] = ["KO", "EN", "JP", "CN"];

#[function_component(Hero)]
pub fn hero() -> Html {
    let background = placeholder_image(1920, 1080, "0d0c0c", "ffffff", "KOREAN TRADITIONAL ROOF");

    html! {
        <section class="fp-section hero" style={format!("background-image: url({});", background)}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        color: #fff;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: #000;
                        opacity: 0.4;
                    }
                    .hero-header {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 2.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero-header .languages span {
                        margin-left: 0.75rem;
                        opacity: 0.7;
                    }
                    .hero-header .languages span.active {
                        font-weight: 700;
                        opacity: 1;
                    }
                    .hero-logo {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 2.25rem;
                        font-weight: 300;
                        letter-spacing: 0.1em;
                        margin: 0;
                    }
                    .hero-utility span {
                        margin-left: 1.5rem;
                    }
                    .hero-main {
                        position: relative;
                        z-index: 1;
                        flex-grow: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 300;
                        letter-spacing: 0.05em;
                        margin-bottom: 2.5rem;
                    }
                    .hero-search {
                        display: flex;
                        align-items: center;
                        width: 100%;
                        max-width: 32rem;
                        padding: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.5);
                        border-radius: 8px;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .hero-search input {
                        flex-grow: 1;
                        background: transparent;
                        border: none;
                        color: #fff;
                        font-size: 1.125rem;
                        outline: none;
                    }
                    .hero-search input::placeholder {
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .hero-bottom {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding-bottom: 1.5rem;
                        font-size: 0.75rem;
                        opacity: 0.7;
                    }
                    @media (max-width: 768px) {
                        .hero-header { padding: 1.25rem 1rem; }
                        .hero-utility { display: none; }
                        .hero-logo { font-size: 1.5rem; }
                        .hero-title { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <div class="hero-overlay"></div>
            <header class="hero-header">
                <div class="languages">
                    <span class="menu-icon">{"☰"}</span>
                    {
                        LANGUAGES.iter().enumerate().map(|(i, lang)| {
                            html! { <span class={classes!((i == 0).then(|| "active"))}>{*lang}</span> }
                        }).collect::<Html>()
                    }
                </div>
                <h1 class="hero-logo">{FIRM_NAME}</h1>
                <div class="hero-utility">
                    <span>{"지식재산권"}</span>
                    <span>{"인재채용"}</span>
                    <span>{"⌕"}</span>
                </div>
            </header>
            <div class="hero-main">
                <h2 class="hero-title">{FIRM_NAME}</h2>
                <div class="hero-search">
                    <input type="text" placeholder="Search Law Firm" />
                    <span>{"⌕"}</span>
                </div>
            </div>
            <div class="hero-bottom">{"SCROLL"}</div>
        </section>
    }
}
