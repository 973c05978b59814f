// ── Router ──
//
// Owns one instance of every view and a history stack. A route only
// becomes current once its enter hook has finished; a failed or cancelled
// hook leaves the previous route in place.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::context::AppContext;
use crate::error::CoreError;
use crate::views::{HomeView, InfoView, NavAction, PresetsView, Route, SettingsView, View};

pub struct Router {
    home: HomeView,
    presets: PresetsView,
    settings: SettingsView,
    info: InfoView,
    history: Vec<Route>,
}

impl Router {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            home: HomeView::new(ctx.clone()),
            presets: PresetsView::new(ctx.clone()),
            settings: SettingsView::new(ctx.clone()),
            info: InfoView::new(ctx.clone()),
            history: Vec::new(),
        }
    }

    /// The active route, if any navigation has completed.
    pub fn current(&self) -> Option<Route> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    // ── View access ──────────────────────────────────────────────────

    pub fn home(&self) -> &HomeView {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeView {
        &mut self.home
    }

    pub fn presets(&self) -> &PresetsView {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut PresetsView {
        &mut self.presets
    }

    pub fn settings_mut(&mut self) -> &mut SettingsView {
        &mut self.settings
    }

    pub fn info(&self) -> &InfoView {
        &self.info
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Enter `route`, awaiting its hook unless `cancel` fires first.
    pub async fn navigate(
        &mut self,
        route: Route,
        cancel: &CancellationToken,
    ) -> Result<(), CoreError> {
        self.enter(route, cancel).await?;
        self.history.push(route);
        debug!(%route, depth = self.history.len(), "navigated");
        Ok(())
    }

    /// Leave the current route and re-enter the one before it.
    ///
    /// Returns the route now active, or `None` when history is exhausted.
    pub async fn back(&mut self, cancel: &CancellationToken) -> Result<Option<Route>, CoreError> {
        let Some(&previous) = self.history.iter().rev().nth(1) else {
            self.history.clear();
            return Ok(None);
        };
        self.enter(previous, cancel).await?;
        self.history.pop();
        debug!(route = %previous, "navigated back");
        Ok(Some(previous))
    }

    /// Apply a view's follow-up request.
    pub async fn follow(
        &mut self,
        action: NavAction,
        cancel: &CancellationToken,
    ) -> Result<Option<Route>, CoreError> {
        match action {
            NavAction::Stay => Ok(self.current()),
            NavAction::Back => self.back(cancel).await,
        }
    }

    async fn enter(&mut self, route: Route, cancel: &CancellationToken) -> Result<(), CoreError> {
        let hook = async {
            match route {
                Route::Home => self.home.on_enter().await,
                Route::Presets => self.presets.on_enter().await,
                Route::Settings => self.settings.on_enter().await,
                Route::Info => self.info.on_enter().await,
            }
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(CoreError::Cancelled {
                route: route.to_string(),
            }),
            result = hook => result,
        }
    }
}
