use shared::{FundingField, FundingForm, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::form_field::FormField;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct FundingFormModalProps {
    pub on_close: Callback<()>,
}

/// Funding modal. There is no funding endpoint, so a valid submission is only
/// written to the log.
#[function_component(FundingFormModal)]
pub fn funding_form_modal(props: &FundingFormModalProps) -> Html {
    let form = use_state(FundingForm::new);

    let input_change = |field: FundingField| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(field, input.value());
            form.set(next);
        })
    };

    let on_transaction_type_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(FundingField::TransactionType, select.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut current = (*form).clone();
            if let Some(record) = current.prepare_submission() {
                match serde_json::to_string(&record) {
                    Ok(json) => Logger::info_with_component("funding-form", &json),
                    Err(e) => Logger::error_with_component(
                        "funding-form",
                        &format!("Failed to serialize funding: {}", e),
                    ),
                }
            }
            form.set(current);
        })
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

    let error_of = |field: FundingField| form.error(field).map(|e| e.to_string());
    let selected_type = form.value(FundingField::TransactionType).to_string();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal funding-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Funding"}</h3>
                    <p class="modal-description">
                        {"This action will add a funding to your timeline."}
                    </p>
                </div>

                <form id="funding-form" class="modal-form" onsubmit={on_submit}>
                    <FormField
                        id={FundingField::Amount.id()}
                        label={FundingField::Amount.label()}
                        description={Some(AttrValue::from("The amount of money you want to use from your fund."))}
                        error={error_of(FundingField::Amount)}
                    >
                        <input
                            id={FundingField::Amount.id()}
                            type="number"
                            min="1"
                            value={form.amount.clone()}
                            onchange={input_change(FundingField::Amount)}
                        />
                    </FormField>

                    <FormField
                        id={FundingField::TransactionType.id()}
                        label={FundingField::TransactionType.label()}
                        error={error_of(FundingField::TransactionType)}
                    >
                        <select id={FundingField::TransactionType.id()} onchange={on_transaction_type_change}>
                            <option value="" disabled=true selected={selected_type.is_empty()}>
                                {"Select a transaction type"}
                            </option>
                            {for TransactionType::ALL.iter().map(|transaction_type| {
                                html! {
                                    <option
                                        value={transaction_type.key()}
                                        selected={selected_type == transaction_type.key()}
                                    >
                                        {transaction_type.key()}
                                    </option>
                                }
                            })}
                        </select>
                    </FormField>

                    <FormField
                        id={FundingField::TransactionDate.id()}
                        label={FundingField::TransactionDate.label()}
                        description={Some(AttrValue::from("Transaction date."))}
                        error={error_of(FundingField::TransactionDate)}
                    >
                        <input
                            id={FundingField::TransactionDate.id()}
                            type="date"
                            value={form.transaction_date.clone()}
                            onchange={input_change(FundingField::TransactionDate)}
                        />
                    </FormField>

                    <FormField
                        id={FundingField::Beneficiary.id()}
                        label={FundingField::Beneficiary.label()}
                        description={Some(AttrValue::from("Who receives the money."))}
                        error={error_of(FundingField::Beneficiary)}
                    >
                        <input
                            id={FundingField::Beneficiary.id()}
                            type="text"
                            value={form.beneficiary.clone()}
                            onchange={input_change(FundingField::Beneficiary)}
                        />
                    </FormField>

                    <FormField
                        id={FundingField::Description.id()}
                        label={FundingField::Description.label()}
                        description={Some(AttrValue::from("Description of the transaction."))}
                        error={error_of(FundingField::Description)}
                    >
                        <input
                            id={FundingField::Description.id()}
                            type="text"
                            value={form.description.clone()}
                            onchange={input_change(FundingField::Description)}
                        />
                    </FormField>
                </form>

                <div class="modal-footer">
                    <button type="submit" form="funding-form" class="btn btn-primary">
                        {"Save"}
                    </button>
                </div>
            </div>
        </div>
    }
}
