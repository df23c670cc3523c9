use crate::domain::model::{MenuItem, MenuState, ALL_CATEGORY};
use crate::domain::ports::BackendApi;
use crate::utils::error::FetchError;

/// Menu list, derived categories and the active category filter.
///
/// Starts in [`MenuState::Loading`]; the rendering layer calls [`load`](Self::load)
/// once on activation. Categories and the visible list are recomputed on
/// every read.
#[derive(Debug, Clone)]
pub struct MenuViewModel {
    items: Vec<MenuItem>,
    state: MenuState,
    active_category: String,
}

impl Default for MenuViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuViewModel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: MenuState::Loading,
            active_category: ALL_CATEGORY.to_string(),
        }
    }

    /// Fetch the menu and replace the current items.
    ///
    /// On failure the items are cleared and the state becomes
    /// [`MenuState::Failed`]. The error is returned for logging only; the
    /// view-model is already in a displayable state.
    pub async fn load<A: BackendApi + ?Sized>(&mut self, api: &A) -> Result<&[MenuItem], FetchError> {
        self.state = MenuState::Loading;

        match api.fetch_menu().await {
            Ok(items) => {
                tracing::info!("Loaded {} menu items", items.len());
                self.items = items;
                self.state = MenuState::Loaded;
                Ok(&self.items)
            }
            Err(e) => {
                tracing::warn!("Menu load failed: {}", e);
                self.items.clear();
                self.state = MenuState::Failed(MenuState::LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Manual retry. Same contract as [`load`](Self::load).
    pub async fn reload<A: BackendApi + ?Sized>(&mut self, api: &A) -> Result<&[MenuItem], FetchError> {
        self.load(api).await
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, MenuState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            MenuState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for cat in self.items.iter().filter_map(MenuItem::category) {
            if !seen.iter().any(|c| c == cat) {
                seen.push(cat.to_string());
            }
        }
        seen
    }

    /// `"All"` followed by [`categories`](Self::categories).
    pub fn tabs(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORY.to_string())
            .chain(self.categories())
            .collect()
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
        tracing::debug!("Active category set to '{}'", self.active_category);
    }

    pub fn visible_items(&self) -> Vec<&MenuItem> {
        if self.active_category == ALL_CATEGORY {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| item.category() == Some(self.active_category.as_str()))
            .collect()
    }
}
