//! Named collection of readers, addressed by hotbox name from host
//! hotkeys.

use std::collections::HashMap;

use hotbox_core::geometry::Point;
use hotbox_core::{validate_unique_names, DataError, HotboxData, Result};
use tracing::{debug, info};

use crate::activation::ActionExecutor;
use crate::reader::{HideOutcome, HotboxReader};

/// Owns one `HotboxReader` per hotbox in the loaded document set.
#[derive(Debug, Default)]
pub struct HotboxRegistry {
    readers: HashMap<String, HotboxReader>,
    initialized: bool,
}

impl HotboxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Build readers from a document set. Names must be unique. A second
    /// call is a no-op, so host startup scripts can be sourced twice
    /// without resetting live hotbox state.
    pub fn initialize(&mut self, hotboxes: Vec<HotboxData>) -> Result<()> {
        if self.initialized {
            debug!("registry already initialized, keeping existing readers");
            return Ok(());
        }
        validate_unique_names(&hotboxes)?;
        for data in hotboxes {
            let reader = HotboxReader::new(data);
            self.readers.insert(reader.name().to_string(), reader);
        }
        self.initialized = true;
        info!(count = self.readers.len(), "hotbox registry initialized");
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<&HotboxReader> {
        self.readers.get(name).ok_or_else(|| DataError::UnknownHotbox {
            name: name.to_string(),
        })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut HotboxReader> {
        self.readers
            .get_mut(name)
            .ok_or_else(|| DataError::UnknownHotbox {
                name: name.to_string(),
            })
    }

    /// Show a hotbox at the cursor. Returns the window origin the host
    /// should place it at.
    pub fn show(&mut self, name: &str, screen_cursor: Point) -> Result<Point> {
        Ok(self.get_mut(name)?.show(screen_cursor))
    }

    /// Hide a hotbox. A root hotbox takes every open submenu down with
    /// it.
    pub fn hide(&mut self, name: &str, executor: &mut dyn ActionExecutor) -> Result<()> {
        let outcome = self.get_mut(name)?.hide(executor);
        if outcome.hide_submenus {
            self.hide_submenus(executor);
        }
        Ok(())
    }

    /// Toggle a hotbox: hide it when visible, show it at the cursor
    /// otherwise.
    pub fn switch(
        &mut self,
        name: &str,
        screen_cursor: Point,
        executor: &mut dyn ActionExecutor,
    ) -> Result<Option<Point>> {
        if self.get(name)?.is_visible() {
            self.hide(name, executor)?;
            Ok(None)
        } else {
            self.show(name, screen_cursor).map(Some)
        }
    }

    /// Hide every visible submenu hotbox.
    pub fn hide_submenus(&mut self, executor: &mut dyn ActionExecutor) {
        for reader in self.readers.values_mut() {
            if reader.is_submenu() && reader.is_visible() {
                let _: HideOutcome = reader.hide(executor);
            }
        }
    }
}
