// ── Presets view ──
//
// The device only serves its preset list while in navigation mode, so
// entering the view switches nav mode on before listing.

use fsremote_api::{ListItem, NodeValue};
use tracing::{debug, info};

use crate::context::AppContext;
use crate::error::CoreError;
use crate::nodes;
use crate::views::{NavAction, View};

pub struct PresetsView {
    ctx: AppContext,
    items: Vec<ListItem>,
}

impl PresetsView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Enable navigation mode, then load the preset list.
    pub async fn refresh(&mut self) -> Result<&[ListItem], CoreError> {
        let gateway = self.ctx.gateway();
        gateway.set(&nodes::NAV_STATE, &NodeValue::Int(1)).await?;
        let list = gateway.list(&nodes::NAV_PRESETS).await?;
        debug!(count = list.items.len(), "presets loaded");
        self.items = list.items;
        Ok(&self.items)
    }

    /// Find a loaded preset by key or (case-insensitive) name.
    pub fn find(&self, query: &str) -> Option<&ListItem> {
        self.items
            .iter()
            .find(|item| item.key.to_string() == query)
            .or_else(|| {
                self.items.iter().find(|item| {
                    item.name
                        .as_deref()
                        .is_some_and(|name| name.eq_ignore_ascii_case(query))
                })
            })
    }

    /// Select a preset by key. The caller should leave the view afterwards.
    pub async fn select(&mut self, key: &NodeValue) -> Result<NavAction, CoreError> {
        self.ctx.gateway().set(&nodes::SELECT_PRESET, key).await?;
        info!(%key, "preset selected");
        Ok(NavAction::Back)
    }
}

impl View for PresetsView {
    async fn on_enter(&mut self) -> Result<(), CoreError> {
        self.refresh().await.map(|_| ())
    }
}
