//! Shared HTTP harness for integration tests.
//!
//! Builds the production `/api` scope and trace middleware over an
//! [`InMemoryStore`] so every request runs through the real coordinators.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use petfinder::Trace;
use petfinder::domain::TRACE_ID_HEADER;
use petfinder::inbound::http::api_scope;
use petfinder::inbound::http::state::{HttpState, StoreAdapters};
use petfinder::test_support::{InMemoryStore, MutableClock};
use serde_json::Value;

pub struct Harness {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<MutableClock>,
}

pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryStore::default()),
            clock: Arc::new(MutableClock::fixed()),
        }
    }
}

impl Harness {
    fn state(&self) -> HttpState {
        HttpState::from_store_adapters(
            StoreAdapters {
                pets: self.store.clone(),
                status_log: self.store.clone(),
                bookings: self.store.clone(),
                categories: self.store.clone(),
                accounts: self.store.clone(),
            },
            self.clock.clone(),
        )
    }

    pub async fn send(&self, request: test::TestRequest) -> Reply {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.state()))
                .wrap(Trace)
                .service(api_scope()),
        )
        .await;
        let response = test::call_service(&app, request.to_request()).await;
        read_reply(response).await
    }

    pub async fn get(&self, uri: &str) -> Reply {
        self.send(test::TestRequest::get().uri(uri)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Reply {
        self.send(test::TestRequest::post().uri(uri).set_json(body))
            .await
    }
}

async fn read_reply<B>(response: ServiceResponse<B>) -> Reply
where
    B: MessageBody,
{
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(response).await;
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    Reply {
        status,
        trace_id,
        body,
    }
}
