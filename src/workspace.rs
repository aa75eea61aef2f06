use std::sync::Mutex;

use crate::api::PanelApi;
use crate::models::resource::ResourceKind;
use crate::storage::KvStore;
use crate::template::TemplateCache;

/// Shown in the editor while no kind is selected.
pub const PLACEHOLDER_TEMPLATE: &str = "Please select a template first.";

// ── state ─────────────────────────────────────────────────────────────────────

/// Single source of truth for the text being edited.
///
/// Every selection change bumps `generation`; a template resolution is
/// applied only if it still carries the current generation, so a stale
/// in-flight fetch can never overwrite the latest selection's text.
#[derive(Debug, Clone)]
pub struct Workspace {
    selected_kind: Option<ResourceKind>,
    template_text: String,
    is_loading: bool,
    generation: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            selected_kind: None,
            template_text: PLACEHOLDER_TEMPLATE.to_string(),
            is_loading: false,
            generation: 0,
        }
    }

    pub fn selected_kind(&self) -> Option<ResourceKind> {
        self.selected_kind
    }

    pub fn template_text(&self) -> &str {
        &self.template_text
    }

    /// The editing surface is read-only whenever nothing is selected.
    pub fn is_editable(&self) -> bool {
        self.selected_kind.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Clearing the selection resets the text to the placeholder and
    /// invalidates any resolution still in flight.
    pub fn clear_selection(&mut self) {
        self.generation += 1;
        self.selected_kind = None;
        self.template_text = PLACEHOLDER_TEMPLATE.to_string();
        self.is_loading = false;
    }

    /// Marks `kind` selected and loading. Returns the generation that must
    /// accompany the eventual resolution.
    pub fn select(&mut self, kind: ResourceKind) -> u64 {
        self.generation += 1;
        self.selected_kind = Some(kind);
        self.is_loading = true;
        self.generation
    }

    /// Applies a resolved template if `generation` is still current.
    /// Returns false when the resolution has been superseded.
    pub fn apply(&mut self, generation: u64, text: String) -> bool {
        if generation != self.generation {
            log::info!("workspace: discarding stale template resolution");
            return false;
        }
        self.template_text = text;
        self.is_loading = false;
        true
    }

    /// Ends the loading state after a failed resolution, keeping the prior
    /// text so the user can retry. Stale failures are ignored.
    pub fn fail(&mut self, generation: u64) {
        if generation == self.generation {
            self.is_loading = false;
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

// ── orchestration ─────────────────────────────────────────────────────────────

/// Drives one selection change end to end: records the selection, resolves
/// the template through the cache, and applies the result if it has not
/// been superseded by a newer selection in the meantime.
///
/// The returned error is the user-visible warning text; the workspace is
/// left editable with its prior content so the user can select again.
pub async fn select_kind<S: KvStore>(
    workspace: &Mutex<Workspace>,
    cache: &TemplateCache<S>,
    api: &dyn PanelApi,
    kind: Option<ResourceKind>,
) -> Result<(), String> {
    let Some(kind) = kind else {
        workspace.lock().map_err(|e| e.to_string())?.clear_selection();
        return Ok(());
    };

    let generation = workspace.lock().map_err(|e| e.to_string())?.select(kind);

    match cache.resolve(kind, api).await {
        Ok(text) => {
            workspace
                .lock()
                .map_err(|e| e.to_string())?
                .apply(generation, text);
            Ok(())
        }
        Err(e) => {
            workspace.lock().map_err(|e| e.to_string())?.fail(generation);
            Err(format!("Failed to fetch template: {e}"))
        }
    }
}
