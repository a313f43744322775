use chrono::Datelike;
use yew::prelude::*;

use crate::content::ACCENT_RED;

const FOOTER_LINKS: [&str; 4] = ["사무소위치", "연락처", "법적고지", "웹접근성"];

pub fn copyright_line(year: i32) -> String {
    format!("© 2019-{} Park & Choi. All Rights Reserved.", year)
}

/// Contact bar and legal links, shown once the last section is reached.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let icon_style = format!("color: {};", ACCENT_RED);

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    @keyframes footerUp {
                        from { transform: translateY(100%); }
                        to { transform: translateY(0); }
                    }
                    .site-footer {
                        position: fixed;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 40;
                        background: #fff;
                        animation: footerUp 0.7s ease-in-out;
                    }
                    .contact-bar {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        padding: 2rem 0;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .contact-bar div {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 3rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #27272a;
                        cursor: pointer;
                    }
                    .contact-bar div:first-child {
                        border-right: 1px solid #d1d5db;
                    }
                    .footer-main {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem 2.5rem;
                        background: #27272a;
                        color: #fff;
                        font-size: 0.75rem;
                    }
                    .footer-main a {
                        margin-right: 1rem;
                        color: inherit;
                        text-decoration: none;
                    }
                    .footer-main a:hover {
                        color: #9ca3af;
                    }
                    .footer-main a.strong {
                        font-weight: 700;
                    }
                    .footer-main .muted {
                        color: #9ca3af;
                    }
                    @media (max-width: 768px) {
                        .contact-bar, .footer-main { flex-direction: column; }
                        .contact-bar div:first-child { border-right: none; }
                    }
                "#}
            </style>
            <div class="contact-bar">
                <div><span style={icon_style.clone()}>{"⚲"}</span>{"사무소 위치"}</div>
                <div><span style={icon_style}>{"☎"}</span>{"연락처"}</div>
            </div>
            <div class="footer-main">
                <div>
                    { for FOOTER_LINKS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                    <a href="#" class="strong">{"개인정보처리방침"}</a>
                    <span class="muted">{"광고책임변호사 : 홍길동"}</span>
                </div>
                <p class="muted">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}
