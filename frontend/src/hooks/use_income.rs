use std::rc::Rc;

use shared::{IncomeCache, IncomeRecord, TimelineEntry};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub enum IncomeAction {
    /// Result of `GET /income`
    Hydrate(Vec<IncomeRecord>),
    /// Record returned by a successful create
    Append(IncomeRecord),
}

/// Owner of the income cache. Every change goes through [`IncomeAction`].
#[derive(Clone, Default, PartialEq)]
pub struct IncomeStore {
    cache: IncomeCache,
}

impl IncomeStore {
    pub fn cache(&self) -> &IncomeCache {
        &self.cache
    }
}

impl Reducible for IncomeStore {
    type Action = IncomeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cache = self.cache.clone();
        match action {
            IncomeAction::Hydrate(records) => cache.hydrate(records),
            IncomeAction::Append(record) => cache.append_record(record),
        }
        Rc::new(Self { cache })
    }
}

pub struct UseIncomeResult {
    pub entries: Vec<TimelineEntry>,
    pub loading: bool,
    pub actions: UseIncomeActions,
}

#[derive(Clone)]
pub struct UseIncomeActions {
    pub append_record: Callback<IncomeRecord>,
}

#[hook]
pub fn use_income(api_client: &ApiClient) -> UseIncomeResult {
    let store = use_reducer(IncomeStore::default);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let loading = loading.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_income().await {
                    Ok(records) => {
                        Logger::debug_with_component(
                            "use-income",
                            &format!("Fetched {} income records", records.len()),
                        );
                        dispatcher.dispatch(IncomeAction::Hydrate(records));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use-income",
                            &format!("Failed to fetch income: {}", e),
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    let append_record = {
        let dispatcher = store.dispatcher();
        use_callback((), move |record: IncomeRecord, _| {
            dispatcher.dispatch(IncomeAction::Append(record));
        })
    };

    // Initial load
    {
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseIncomeResult {
        entries: store.cache().timeline(),
        loading: *loading,
        actions: UseIncomeActions { append_record },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::IncomeType;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn record(id: &str) -> IncomeRecord {
        IncomeRecord {
            id: id.to_string(),
            amount: "10".to_string(),
            fund_amount: "1".to_string(),
            income_type: IncomeType::Cash,
            source: id.to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: None,
        }
    }

    #[wasm_bindgen_test]
    fn test_reducer_appends_after_hydrate() {
        let store = Rc::new(IncomeStore::default());
        let store = store.reduce(IncomeAction::Hydrate(vec![record("a")]));
        let store = store.reduce(IncomeAction::Append(record("b")));

        let ids: Vec<&str> = store
            .cache()
            .records()
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
