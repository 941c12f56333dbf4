//! Company and date range form

use chrono::{NaiveDate, TimeDelta, Utc};
use leptos::{ev::SubmitEvent, html, prelude::*};
use stock_client::{use_stock_client, DateRange};
use stock_state::use_app_state;

#[derive(Debug, Clone)]
pub struct StockFormConfig {
    /// Initial contents of the companies field
    pub companies: String,
    /// Default length of the date range, ending today
    pub lookback_days: i64,
}

impl Default for StockFormConfig {
    fn default() -> Self {
        Self {
            companies: "AAPL,MSFT,GOOG".to_string(),
            lookback_days: 365,
        }
    }
}

/// Default `(start, end)` date inputs
pub fn default_range(today: NaiveDate, lookback_days: i64) -> DateRange {
    let start = today - TimeDelta::days(lookback_days.max(0));
    DateRange::new(
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// Button text. The button stays enabled while a request is pending so a
/// hung request never locks the form.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Submit" }
}

#[component]
pub fn StockForm(#[prop(optional)] config: Option<StockFormConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let defaults = default_range(Utc::now().date_naive(), config.lookback_days);

    let client = use_stock_client();
    let loading = use_app_state().loading;

    let form_ref = NodeRef::<html::Form>::new();
    let start_ref = NodeRef::<html::Input>::new();
    let end_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            tracing::warn!("Stock form submitted before it was mounted");
            return;
        };
        let start = start_ref.get().map(|i| i.value()).unwrap_or_default();
        let end = end_ref.get().map(|i| i.value()).unwrap_or_default();
        client.submit(&form, DateRange::new(start, end));
    };

    view! {
        <form id="stock-form" class="stock-form" node_ref=form_ref on:submit=on_submit>
            <label for="companies">"Companies"</label>
            <input
                type="text"
                id="companies"
                name="companies"
                placeholder="AAPL,MSFT"
                value=config.companies
            />
            // dates are appended to the body by the client, so no `name`
            <label for="start-date">"Start"</label>
            <input type="date" id="start-date" node_ref=start_ref value=defaults.start />
            <label for="end-date">"End"</label>
            <input type="date" id="end-date" node_ref=end_ref value=defaults.end />
            <button type="submit">{move || submit_label(loading.get())}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = default_range(today, 30);
        assert_eq!(range.start, "2024-01-31");
        assert_eq!(range.end, "2024-03-01");
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false), "Submit");
        assert_eq!(submit_label(true), "Loading...");
    }

    #[test]
    fn test_negative_lookback_collapses_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = default_range(today, -5);
        assert_eq!(range.start, range.end);
    }
}
