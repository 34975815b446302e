use axum::{
    Router,
    routing::{get, post},
};
use tally_adapters::{cache::ListingCache, config::InvoiceSettings};
use tally_application::{
    AuthenticateUseCase, InvoiceActions, ListInvoicesUseCase, MutationExecutor,
};
use tally_axum::{
    InvoicesState,
    routes::{create_invoice, delete_invoice, list_invoices, login, update_invoice},
};
use tally_core::{InvoiceStore, PasswordHashing, UserStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::request_tracing::{make_span_with_request_id, on_request, on_response};

/// The invoices dashboard service: login plus the invoice form actions
pub struct TallyService {
    router: Router,
}

impl TallyService {
    /// Create a new TallyService from its stores and hasher
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `hasher` - Password hasher used to check credentials
    /// * `invoice_store` - Store for invoices (must be Clone)
    /// * `settings` - Listing path and delete policy
    ///
    /// # Note on Architecture
    /// The listing cache is created here and shared between the listing
    /// route, which fills it, and the form actions, which invalidate it.
    pub fn new<U, H, I>(
        user_store: U,
        hasher: H,
        invoice_store: I,
        settings: &InvoiceSettings,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHashing + Clone + 'static,
        I: InvoiceStore + Clone + 'static,
    {
        let listing_path = settings.listing_path.clone();
        let cache = ListingCache::new();

        let actions = InvoiceActions::new(
            MutationExecutor::new(invoice_store.clone(), settings.delete_policy),
            cache.clone(),
            listing_path.clone(),
        );
        let invoices = InvoicesState::new(actions, ListInvoicesUseCase::new(invoice_store), cache);

        let router = Router::new()
            // Login only needs the user store and the hasher
            .route("/login", post(login::<U, H>))
            .with_state(AuthenticateUseCase::new(user_store, hasher))
            // Invoice routes share the actions, the listing and its cache
            .route(
                &listing_path,
                get(list_invoices::<I>).post(create_invoice::<I>),
            )
            .route(
                &format!("{listing_path}/{{id}}/edit"),
                post(update_invoice::<I>),
            )
            .route(
                &format!("{listing_path}/{{id}}/delete"),
                post(delete_invoice::<I>),
            )
            .with_state(invoices);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the TallyService into a router that can be nested into
    /// another application
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    ///
    /// # Returns
    /// Result indicating success or error
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Tally service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
