pub mod contact;
pub mod menu;

pub use crate::domain::model::{
    ContactField, ContactForm, MenuItem, MenuState, SubmissionStatus, ALL_CATEGORY,
};
pub use crate::domain::ports::{BackendApi, ConfigProvider};
pub use crate::utils::error::Result;
pub use contact::ContactFormViewModel;
pub use menu::MenuViewModel;
