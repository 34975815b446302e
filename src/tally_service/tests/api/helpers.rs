use axum::Router;
use reqwest::{Client, Response, redirect::Policy};
use secrecy::Secret;
use tally_adapters::{
    config::{INVOICES_LISTING_PATH, InvoiceSettings, test},
    hashing::Argon2Hasher,
    persistence::{HashMapInvoiceStore, HashMapUserStore},
};
use tally_application::DeletePolicy;
use tally_core::{Email, Password, PasswordHashing, UserRecord, UserStore, UserStoreError};
use tally_service::TallyService;
use tokio::net::TcpListener;
use uuid::Uuid;

pub const USER_EMAIL: &str = "user@nextmail.com";
pub const USER_PASSWORD: &str = "123456";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub invoice_store: HashMapInvoiceStore,
    pub user_id: Uuid,
}

/// A user store whose database is gone.
#[derive(Clone)]
pub struct UnavailableUserStore;

#[async_trait::async_trait]
impl UserStore for UnavailableUserStore {
    async fn add_user(&self, _user: UserRecord) -> Result<(), UserStoreError> {
        Err(UserStoreError::Unavailable(UNAVAILABLE_DETAIL.to_owned()))
    }

    async fn find_user_by_email(
        &self,
        _email: &Email,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        Err(UserStoreError::Unavailable(UNAVAILABLE_DETAIL.to_owned()))
    }
}

pub const UNAVAILABLE_DETAIL: &str = "connection refused (os error 111)";

impl TestApp {
    pub async fn new() -> Self {
        Self::with_delete_policy(DeletePolicy::Fault).await
    }

    pub async fn with_delete_policy(delete_policy: DeletePolicy) -> Self {
        let (user_store, user_id) = seeded_user_store().await;
        Self::spawn(user_store, user_id, delete_policy, None).await
    }

    pub async fn with_user_store<U>(user_store: U) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        Self::spawn(user_store, Uuid::nil(), DeletePolicy::Fault, None).await
    }

    /// The service mounted under `prefix` inside a larger router. `address`
    /// already carries the prefix.
    pub async fn nested_under(prefix: &str) -> Self {
        let (user_store, user_id) = seeded_user_store().await;
        Self::spawn(user_store, user_id, DeletePolicy::Fault, Some(prefix)).await
    }

    async fn spawn<U>(
        user_store: U,
        user_id: Uuid,
        delete_policy: DeletePolicy,
        prefix: Option<&str>,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        let invoice_store = HashMapInvoiceStore::new();
        let settings = InvoiceSettings {
            listing_path: INVOICES_LISTING_PATH.to_owned(),
            delete_policy,
        };
        let service = TallyService::new(
            user_store,
            Argon2Hasher::default(),
            invoice_store.clone(),
            &settings,
        );

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let mut address = format!("http://{}", listener.local_addr().unwrap());

        match prefix {
            Some(prefix) => {
                address.push_str(prefix);
                let router = Router::new().nest(prefix, service.into_router());
                tokio::spawn(async move { axum::serve(listener, router).await });
            }
            None => {
                tokio::spawn(service.run_standalone(listener));
            }
        }

        let http_client = Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            invoice_store,
            user_id,
        }
    }

    pub async fn post_form(&self, path: &str, body: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post_form("/login", &[("email", email), ("password", password)])
            .await
    }
}

async fn seeded_user_store() -> (HashMapUserStore, Uuid) {
    let user_store = HashMapUserStore::new();
    let user_id = Uuid::new_v4();
    let password_hash = Argon2Hasher::default()
        .hash_password(Password::try_from(Secret::from(USER_PASSWORD.to_owned())).unwrap())
        .await
        .unwrap();
    user_store
        .add_user(UserRecord::new(
            user_id,
            "User".to_owned(),
            Email::try_from(Secret::from(USER_EMAIL.to_owned())).unwrap(),
            password_hash,
        ))
        .await
        .unwrap();
    (user_store, user_id)
}
