mod components;
mod hooks;
mod services;

use log::LevelFilter;
use yew::prelude::*;

use components::forms::funding_form::FundingFormModal;
use components::forms::income_form::IncomeFormModal;
use components::header::Header;
use components::timeline::Timeline;
use hooks::use_income::use_income;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let income = use_income(&api_client);

    // Each modal is mounted only while open, so closing it tears down its state.
    let income_open = use_state(|| false);
    let funding_open = use_state(|| false);

    let open_income = {
        let income_open = income_open.clone();
        Callback::from(move |_: ()| income_open.set(true))
    };
    let close_income = {
        let income_open = income_open.clone();
        Callback::from(move |_: ()| income_open.set(false))
    };
    let open_funding = {
        let funding_open = funding_open.clone();
        Callback::from(move |_: ()| funding_open.set(true))
    };
    let close_funding = {
        let funding_open = funding_open.clone();
        Callback::from(move |_: ()| funding_open.set(false))
    };

    html! {
        <>
            <Header on_add_income={open_income} on_add_funding={open_funding} />
            <main class="container">
                <Timeline entries={income.entries.clone()} loading={income.loading} />
            </main>

            {if *income_open {
                html! {
                    <IncomeFormModal
                        api_client={(*api_client).clone()}
                        on_created={income.actions.append_record.clone()}
                        on_close={close_income}
                    />
                }
            } else { html! {} }}

            {if *funding_open {
                html! { <FundingFormModal on_close={close_funding} /> }
            } else { html! {} }}
        </>
    }
}

fn main() {
    services::logging::init(LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
