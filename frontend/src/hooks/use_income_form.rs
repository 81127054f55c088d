use std::cell::RefCell;

use gloo::timers::callback::Timeout;
use shared::{
    settle_income_submission, IncomeField, IncomeForm, IncomeRecord, Notification,
    SubmissionEffect, SubmissionError, SubmissionSlot,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct IncomeFormState {
    pub form: IncomeForm,
    pub submitting: bool,
    pub notification: Option<Notification>,
}

#[derive(Clone)]
pub struct UseIncomeFormActions {
    pub on_field_change: Callback<(IncomeField, String)>,
    pub on_autofill: Callback<()>,
    pub on_submit: Callback<()>,
}

pub struct UseIncomeFormResult {
    pub state: IncomeFormState,
    pub actions: UseIncomeFormActions,
}

/// Where the effects of a settled create call are delivered.
#[derive(Clone)]
pub struct SubmissionHandlers {
    pub on_created: Callback<IncomeRecord>,
    pub on_notify: Callback<Notification>,
    pub on_close: Callback<()>,
}

/// Run the effects of a finished create call in order and free the slot.
///
/// Returns the pending close timer when the outcome scheduled one. Dropping the
/// timer cancels the close.
pub fn finish_submission(
    outcome: Result<Option<IncomeRecord>, SubmissionError>,
    slot: &RefCell<SubmissionSlot>,
    handlers: &SubmissionHandlers,
) -> Option<Timeout> {
    let mut close_timer = None;

    for effect in settle_income_submission(outcome) {
        match effect {
            SubmissionEffect::AppendRecord(record) => handlers.on_created.emit(record),
            SubmissionEffect::Notify(notification) => handlers.on_notify.emit(notification),
            SubmissionEffect::CloseAfter(delay) => {
                let on_close = handlers.on_close.clone();
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                close_timer = Some(Timeout::new(millis, move || on_close.emit(())));
            }
        }
    }

    slot.borrow_mut().release();
    close_timer
}

/// Form state and submission flow for one income modal instance.
///
/// The close timer lives in hook state, so unmounting the modal drops it and
/// the pending close never fires on a later instance.
#[hook]
pub fn use_income_form(
    api_client: &ApiClient,
    on_created: Callback<IncomeRecord>,
    on_close: Callback<()>,
) -> UseIncomeFormResult {
    let form = use_state(IncomeForm::new);
    let notification = use_state(|| None::<Notification>);
    let slot = use_mut_ref(SubmissionSlot::default);
    let close_timer = use_mut_ref(|| None::<Timeout>);
    // The slot is not state, so re-render by hand when it changes
    let rerender = use_force_update();

    let on_field_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (IncomeField, String)| {
            let mut next = (*form).clone();
            next.edit(field, value);
            form.set(next);
        })
    };

    let on_autofill = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            if next.autofill_fund_amount() {
                form.set(next);
            } else {
                Logger::debug_with_component(
                    "income-form",
                    "Autofill skipped, amount is not a positive number",
                );
            }
        })
    };

    let on_submit = {
        let api_client = api_client.clone();
        let form = form.clone();
        let notification = notification.clone();
        let slot = slot.clone();
        let close_timer = close_timer.clone();
        let rerender = rerender.clone();

        Callback::from(move |_: ()| {
            let mut current = (*form).clone();
            let request = current.prepare_submission();
            let invalid_fields = current.errors().len();
            form.set(current);

            let Some(request) = request else {
                Logger::debug_with_component(
                    "income-form",
                    &format!("Submission blocked, {} invalid fields", invalid_fields),
                );
                return;
            };

            if !slot.borrow_mut().try_acquire() {
                Logger::warn_with_component("income-form", "Submission already in flight");
                return;
            }

            notification.set(None);
            rerender.force_update();

            let api_client = api_client.clone();
            let slot = slot.clone();
            let close_timer = close_timer.clone();
            let rerender = rerender.clone();
            let handlers = SubmissionHandlers {
                on_created: on_created.clone(),
                on_notify: {
                    let notification = notification.clone();
                    Callback::from(move |message: Notification| notification.set(Some(message)))
                },
                on_close: on_close.clone(),
            };

            spawn_local(async move {
                let outcome = api_client
                    .create_income(&request)
                    .await
                    .map_err(|e| SubmissionError::Request(e.to_string()));

                if let Some(timer) = finish_submission(outcome, &slot, &handlers) {
                    *close_timer.borrow_mut() = Some(timer);
                }
                rerender.force_update();
            });
        })
    };

    let submitting = slot.borrow().is_busy();

    UseIncomeFormResult {
        state: IncomeFormState {
            form: (*form).clone(),
            submitting,
            notification: (*notification).clone(),
        },
        actions: UseIncomeFormActions {
            on_field_change,
            on_autofill,
            on_submit,
        },
    }
}
