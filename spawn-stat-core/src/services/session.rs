//! Route session
//!
//! Owns the entry store, the route editor and the focus chain, and reads or
//! writes documents through the injected stores on confirm and Save/Load.
//!
//! Transitions:
//!
//! ```text
//!              begin_edit()                   confirm_edit()
//! Confirmed ──────────────────▶ Editing ──────────────────────▶ Confirmed
//!  (chain)    clear route,        toggle()*    rebuild chain,
//!             drop chain                       write route file
//! ```
//!
//! Restoring the route file and loading a save both run a full
//! `begin_edit → toggle* → confirm_edit` cycle.

use std::sync::Arc;

use crate::codec::{legacy_route, save_file};
use crate::error::CoreResult;
use crate::services::StatsUpdate;
use crate::state::{EditMode, EntryStore, FocusChain, RouteEditor};
use crate::traits::{RouteStore, SaveStore, ScrollContainer};
use crate::types::{DropKind, SubmitRequest};

/// Single-user session state
pub struct RouteSession {
    entries: EntryStore,
    editor: RouteEditor,
    /// `None` while editing
    chain: Option<FocusChain>,
    route_store: Arc<dyn RouteStore>,
    save_store: Arc<dyn SaveStore>,
}

impl RouteSession {
    /// New session with the identity route, confirmed
    #[must_use]
    pub fn new(
        entries: EntryStore,
        route_store: Arc<dyn RouteStore>,
        save_store: Arc<dyn SaveStore>,
    ) -> Self {
        let editor = RouteEditor::new(entries.len());
        let chain = Some(FocusChain::from_route(editor.current_route()));
        Self {
            entries,
            editor,
            chain,
            route_store,
            save_store,
        }
    }

    pub fn entries(&self) -> &EntryStore {
        &self.entries
    }

    pub fn editor(&self) -> &RouteEditor {
        &self.editor
    }

    pub fn mode(&self) -> EditMode {
        self.editor.mode()
    }

    /// Focus chain of the confirmed route; `None` while editing
    pub fn chain(&self) -> Option<&FocusChain> {
        self.chain.as_ref()
    }

    // ===== Route editing =====

    pub fn begin_edit(&mut self) {
        self.editor.begin_edit();
        self.chain = None;
        log::debug!("Route edit started");
    }

    pub fn toggle(&mut self, index: usize, included: bool) -> CoreResult<bool> {
        self.editor.toggle(index, included)
    }

    /// Confirm the route, rebuild the focus chain and write the route file.
    ///
    /// The route stays confirmed when the write fails; the error is returned for reporting.
    pub fn confirm_edit(&mut self) -> CoreResult<()> {
        let route = self.editor.confirm_edit().to_vec();
        self.chain = Some(FocusChain::from_route(&route));
        log::info!("Route confirmed with {} entries", route.len());
        self.route_store.write_route(&legacy_route::encode(&route))
    }

    /// Restore the route file at startup.
    ///
    /// # Returns
    /// * `Ok(false)` - no route file, the initial route is kept
    /// * `Ok(true)` - the route was rebuilt from the file
    pub fn restore_route(&mut self) -> CoreResult<bool> {
        let Some(text) = self.route_store.read_route()? else {
            return Ok(false);
        };
        let route = legacy_route::decode(&text, self.entries.len());
        self.rebuild_route(&route)?;
        Ok(true)
    }

    /// Rebuild the route through a full edit cycle
    fn rebuild_route(&mut self, route: &[usize]) -> CoreResult<()> {
        self.begin_edit();
        for &index in route {
            self.editor.toggle(index, true)?;
        }
        self.confirm_edit()
    }

    // ===== Classification =====

    pub fn classify(&mut self, index: usize, drop: DropKind) -> CoreResult<()> {
        self.entries.set_classification(index, drop)
    }

    /// Classify the focused entry, then advance focus like `next()`.
    ///
    /// Returns the new focus target, or `None` at the end of the chain or without a chain.
    pub fn classify_and_advance(
        &mut self,
        focused: usize,
        drop: DropKind,
        container: &mut dyn ScrollContainer,
    ) -> CoreResult<Option<usize>> {
        self.entries.set_classification(focused, drop)?;
        Ok(self
            .chain
            .as_ref()
            .and_then(|chain| chain.next(Some(focused), container)))
    }

    // ===== Save / Load =====

    /// Write the save file; returns the number of entries written
    pub fn save(&self) -> CoreResult<usize> {
        let pairs = save_file::encode_pairs(&self.entries, self.editor.current_route())?;
        self.save_store.write_save(&save_file::to_json(&pairs)?)?;
        log::info!("Saved {} classified entries", pairs.len());
        Ok(pairs.len())
    }

    /// Read the save file.
    ///
    /// State changes only after the whole document validates. Classifications are
    /// replaced wholesale (entries absent from the document become `None`) and the route is rebuilt in document order.
    ///
    /// # Returns
    /// * `Ok(None)` - no save file
    /// * `Ok(Some(n))` - n entries loaded
    pub fn load(&mut self) -> CoreResult<Option<usize>> {
        let Some(text) = self.save_store.read_save()? else {
            return Ok(None);
        };
        let pairs = save_file::decode(&text, self.entries.len())?;

        self.entries.reset_classifications();
        for &(index, drop) in &pairs {
            self.entries.set_classification(index, drop)?;
        }
        let route: Vec<usize> = pairs.iter().map(|&(index, _)| index).collect();
        self.rebuild_route(&route)?;

        log::info!("Loaded {} classified entries", pairs.len());
        Ok(Some(pairs.len()))
    }

    // ===== Remote sync =====

    /// Snapshot for submission, same sparse encoding as Save
    pub fn submission_request(&self) -> CoreResult<SubmitRequest> {
        Ok(SubmitRequest {
            drops: save_file::encode_pairs(&self.entries, self.editor.current_route())?,
        })
    }

    /// Clear what an accepted submission carried.
    ///
    /// Only entries still holding the submitted classification are reset;
    /// anything classified after the snapshot was taken survives. Returns the
    /// number of entries cleared.
    pub fn apply_submit_success(&mut self, submitted: &SubmitRequest) -> usize {
        let mut cleared = 0;
        for pair in &submitted.drops {
            let Some(sent) = pair.drop_kind() else {
                continue;
            };
            let index = pair.index();
            if self
                .entries
                .classification(index)
                .is_ok_and(|current| current == sent)
                && self.entries.set_classification(index, DropKind::None).is_ok()
            {
                cleared += 1;
            }
        }
        log::info!("Submission accepted, {cleared} classifications cleared");
        cleared
    }

    /// Apply fetched stats; returns the number of entries updated
    pub fn apply_stats(&mut self, update: &StatsUpdate) -> CoreResult<usize> {
        update.apply(&mut self.entries)
    }
}
