use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserBadgeProps {
    pub user_id: AttrValue,
}

#[function_component(UserBadge)]
pub fn user_badge(props: &UserBadgeProps) -> Html {
    html! {
        <div style="position: fixed; bottom: 0; left: 0; z-index: 50; padding: 0.25rem; font-size: 10px; color: #fff; background: #000; opacity: 0.5;">
            {format!("User ID: {}", props.user_id)}
        </div>
    }
}
