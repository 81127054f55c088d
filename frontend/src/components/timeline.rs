use shared::TimelineEntry;
use yew::prelude::*;

use super::timeline_card::TimelineCard;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub entries: Vec<TimelineEntry>,
    pub loading: bool,
}

/// Cards in the order they are given.
#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <section class="timeline">
            {if props.loading && props.entries.is_empty() {
                html! { <div class="loading">{"Loading timeline..."}</div> }
            } else if props.entries.is_empty() {
                html! { <div class="empty">{"Nothing on your timeline yet."}</div> }
            } else {
                html! {
                    <>
                        {for props.entries.iter().map(|entry| {
                            html! { <TimelineCard entry={entry.clone()} /> }
                        })}
                    </>
                }
            }}
        </section>
    }
}
