use shared::{Notification, NotificationKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notification: Notification,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let kind_class = match props.notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };

    html! {
        <div class={classes!("form-message", kind_class)} role="status">
            <strong>{&props.notification.title}</strong>
            <span>{&props.notification.message}</span>
        </div>
    }
}
