//! Form submission client

use crate::{decode_body, ClientConfig, FetchError, RequestSequencer};
use gloo_net::http::Request;
use leptos::prelude::{expect_context, provide_context};
use stock_core::StockResponse;
use stock_state::AppState;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};

/// Dates appended to the submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

// ============================================================================
// STOCK CLIENT
// ============================================================================

/// Posts the stock form and applies responses to app state
#[derive(Clone)]
pub struct StockClient {
    config: ClientConfig,
    state: AppState,
    seq: RequestSequencer,
}

impl StockClient {
    pub fn new(state: AppState) -> Self {
        Self::with_config(state, ClientConfig::default())
    }

    pub fn with_config(state: AppState, config: ClientConfig) -> Self {
        Self {
            config,
            state,
            seq: RequestSequencer::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit `form` plus the date range. The request runs in the background;
    /// its outcome lands in app state.
    pub fn submit(&self, form: &HtmlFormElement, range: DateRange) {
        let body = match build_form_data(form, &range) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Stock form submission failed: {}", e);
                self.state.set_error(e.to_string());
                return;
            }
        };

        let ticket = self.seq.next();
        let client = self.clone();
        tracing::info!(
            "Requesting stock data {} to {} (request {})",
            range.start,
            range.end,
            ticket
        );
        self.state.set_loading(true);

        spawn_local(async move {
            let result = client.fetch(body).await;
            client.finish(ticket, result);
        });
    }

    /// POST the form data and decode the body
    pub async fn fetch(&self, body: FormData) -> Result<StockResponse, FetchError> {
        let resp = Request::post(&self.config.endpoint)
            .body(body)?
            .send()
            .await?;

        if !resp.ok() {
            return Err(FetchError::Status {
                status: resp.status(),
                text: resp.status_text(),
            });
        }

        let text = resp.text().await?;
        decode_body(&text)
    }

    fn finish(&self, ticket: u64, result: Result<StockResponse, FetchError>) {
        let done = self.seq.complete(ticket, self.config.drop_stale_responses);
        if done.clear_loading {
            self.state.set_loading(false);
        }
        if !done.apply {
            tracing::info!("Dropping response for superseded request {}", ticket);
            return;
        }

        match result {
            Ok(response) => {
                self.state.apply_response(response);
            }
            Err(e) => {
                // previous chart and table stay on screen
                tracing::error!("Stock data request {} failed: {}", ticket, e);
                self.state.set_error(e.to_string());
            }
        }
    }
}

/// Multipart body: every form field, then `start-date` and `end-date`
fn build_form_data(form: &HtmlFormElement, range: &DateRange) -> Result<FormData, FetchError> {
    let data = FormData::new_with_form(form).map_err(FetchError::form)?;
    data.append_with_str("start-date", &range.start)
        .map_err(FetchError::form)?;
    data.append_with_str("end-date", &range.end)
        .map_err(FetchError::form)?;
    Ok(data)
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Create a client and provide it to the component tree
pub fn provide_stock_client(state: AppState, config: ClientConfig) -> StockClient {
    let client = StockClient::with_config(state, config);
    provide_context(client.clone());
    client
}

pub fn use_stock_client() -> StockClient {
    expect_context::<StockClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range() {
        let range = DateRange::new("2024-01-01", "2024-03-31");
        assert_eq!(range.start, "2024-01-01");
        assert_eq!(range.end, "2024-03-31");
        assert_eq!(DateRange::default().start, "");
    }
}
