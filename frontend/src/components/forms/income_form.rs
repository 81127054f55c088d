use shared::{IncomeField, IncomeRecord, IncomeType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::form_field::FormField;
use crate::components::notification_banner::NotificationBanner;
use crate::hooks::use_income_form::{use_income_form, UseIncomeFormResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct IncomeFormModalProps {
    pub api_client: ApiClient,
    /// Receives the record the server created
    pub on_created: Callback<IncomeRecord>,
    pub on_close: Callback<()>,
}

#[function_component(IncomeFormModal)]
pub fn income_form_modal(props: &IncomeFormModalProps) -> Html {
    let UseIncomeFormResult { state, actions } = use_income_form(
        &props.api_client,
        props.on_created.clone(),
        props.on_close.clone(),
    );

    let input_change = |field: IncomeField| {
        let on_field_change = actions.on_field_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_income_type_change = {
        let on_field_change = actions.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((IncomeField::IncomeType, select.value()));
        })
    };

    let on_submit = {
        let on_submit = actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_autofill = {
        let on_autofill = actions.on_autofill.clone();
        Callback::from(move |_: MouseEvent| on_autofill.emit(()))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let form = &state.form;
    let error_of = |field: IncomeField| form.error(field).map(|e| e.to_string());
    let selected_type = form.value(IncomeField::IncomeType);

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal income-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Income"}</h3>
                    <p class="modal-description">
                        {"This action will add an income to your timeline."}
                    </p>
                </div>

                {if let Some(notification) = state.notification.clone() {
                    html! { <NotificationBanner {notification} /> }
                } else { html! {} }}

                <form id="income-form" class="modal-form" onsubmit={on_submit}>
                    <FormField
                        id={IncomeField::Amount.id()}
                        label={IncomeField::Amount.label()}
                        description={Some(AttrValue::from("The amount of money you received."))}
                        error={error_of(IncomeField::Amount)}
                    >
                        <input
                            id={IncomeField::Amount.id()}
                            type="number"
                            step="0.01"
                            min="0"
                            value={form.amount.clone()}
                            onchange={input_change(IncomeField::Amount)}
                        />
                    </FormField>

                    <FormField
                        id={IncomeField::FundAmount.id()}
                        label={IncomeField::FundAmount.label()}
                        description={Some(AttrValue::from("The amount of money you want to use for your fund."))}
                        error={error_of(IncomeField::FundAmount)}
                    >
                        <div class="input-with-action">
                            <input
                                id={IncomeField::FundAmount.id()}
                                type="number"
                                step="0.01"
                                min="0"
                                value={form.fund_amount.clone()}
                                onchange={input_change(IncomeField::FundAmount)}
                            />
                            <button
                                type="button"
                                class="btn btn-outline autofill-btn"
                                title="Calculate the fund amount based on the amount. It will be 10% of the amount."
                                onclick={on_autofill}
                            >
                                {"%"}
                            </button>
                        </div>
                    </FormField>

                    <FormField
                        id={IncomeField::IncomeType.id()}
                        label={IncomeField::IncomeType.label()}
                        error={error_of(IncomeField::IncomeType)}
                    >
                        <select id={IncomeField::IncomeType.id()} onchange={on_income_type_change}>
                            <option value="" disabled=true selected={selected_type.is_empty()}>
                                {"Select an income type"}
                            </option>
                            {for IncomeType::ALL.iter().map(|income_type| {
                                html! {
                                    <option
                                        value={income_type.key()}
                                        selected={selected_type == income_type.key()}
                                    >
                                        {income_type.key()}
                                    </option>
                                }
                            })}
                        </select>
                    </FormField>

                    <FormField
                        id={IncomeField::TransactionDate.id()}
                        label={IncomeField::TransactionDate.label()}
                        description={Some(AttrValue::from("Transaction date."))}
                        error={error_of(IncomeField::TransactionDate)}
                    >
                        <input
                            id={IncomeField::TransactionDate.id()}
                            type="date"
                            value={form.transaction_date.clone()}
                            onchange={input_change(IncomeField::TransactionDate)}
                        />
                    </FormField>

                    <FormField
                        id={IncomeField::Source.id()}
                        label={IncomeField::Source.label()}
                        description={Some(AttrValue::from("The source of the transaction."))}
                        error={error_of(IncomeField::Source)}
                    >
                        <input
                            id={IncomeField::Source.id()}
                            type="text"
                            value={form.source.clone()}
                            onchange={input_change(IncomeField::Source)}
                        />
                    </FormField>

                    <FormField
                        id={IncomeField::Description.id()}
                        label={IncomeField::Description.label()}
                        description={Some(AttrValue::from("Description of the transaction."))}
                        error={error_of(IncomeField::Description)}
                    >
                        <input
                            id={IncomeField::Description.id()}
                            type="text"
                            value={form.description.clone()}
                            onchange={input_change(IncomeField::Description)}
                        />
                    </FormField>
                </form>

                <div class="modal-footer">
                    <button
                        type="submit"
                        form="income-form"
                        class="btn btn-primary"
                        disabled={state.submitting}
                    >
                        {if state.submitting { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
