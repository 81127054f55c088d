use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_add_income: Callback<()>,
    pub on_add_funding: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_add_income = {
        let on_add_income = props.on_add_income.clone();
        Callback::from(move |_: MouseEvent| on_add_income.emit(()))
    };

    let on_add_funding = {
        let on_add_funding = props.on_add_funding.clone();
        Callback::from(move |_: MouseEvent| on_add_funding.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Income Tracker"}</h1>
                <div class="header-actions">
                    <button class="btn btn-outline" onclick={on_add_income}>
                        {"💲 Add income"}
                    </button>
                    <button class="btn btn-outline" onclick={on_add_funding}>
                        {"% Add funding"}
                    </button>
                </div>
            </div>
        </header>
    }
}
