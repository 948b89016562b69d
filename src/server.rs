use std::sync::Arc;

use axum::{extract::FromRef, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::trace::TraceLayer;

use crate::app::{shell, App};
use crate::config::MailConfig;
use crate::contact::{
    handler,
    mailer::{MailError, MailTransport, SmtpMailer},
    ContactService,
};

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub contact: ContactService,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions, mail: &MailConfig) -> Result<Self, MailError> {
        let mailer = SmtpMailer::new(mail)?;
        Ok(Self::with_transport(
            leptos_options,
            Arc::new(mailer),
            mail.recipient.as_str(),
        ))
    }

    pub fn with_transport(
        leptos_options: LeptosOptions,
        transport: Arc<dyn MailTransport>,
        recipient: &str,
    ) -> Self {
        Self {
            leptos_options,
            contact: ContactService::new(transport, recipient),
        }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl FromRef<AppState> for ContactService {
    fn from_ref(state: &AppState) -> Self {
        state.contact.clone()
    }
}

pub fn router(state: AppState) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    Router::<AppState>::new()
        .merge(handler::routes::<AppState>())
        .leptos_routes_with_context(
            &state,
            routes,
            {
                let contact = state.contact.clone();
                move || provide_context(contact.clone())
            },
            {
                let leptos_options = state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
