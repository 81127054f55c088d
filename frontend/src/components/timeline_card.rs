use shared::TimelineEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelineCardProps {
    pub entry: TimelineEntry,
}

#[function_component(TimelineCard)]
pub fn timeline_card(props: &TimelineCardProps) -> Html {
    let entry = &props.entry;

    html! {
        <article class={entry.kind.css_class()}>
            <header class="timeline-card-header">
                <h3 class="timeline-card-title">{&entry.title}</h3>
                <p class="timeline-card-description">{&entry.description}</p>
            </header>
            <footer class="timeline-card-footer">
                <div class="timeline-card-amount">
                    <span class="icon">{"🪙"}</span>
                    <p>{entry.formatted_amount()}</p>
                </div>
                <div class="timeline-card-date">
                    <span class="icon">{"📅"}</span>
                    <p>{entry.formatted_date()}</p>
                </div>
            </footer>
        </article>
    }
}
