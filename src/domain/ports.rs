use crate::domain::model::{ContactForm, MenuItem};
use crate::utils::error::{FetchError, SubmitError};
use async_trait::async_trait;

/// The backend the view-models talk to.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `GET /api/menu`
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, FetchError>;

    /// `POST /api/contact`. `Ok(())` only for `{ "ok": true }`.
    async fn submit_contact(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
