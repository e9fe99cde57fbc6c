use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChartState;
use crate::error::ModebarResult;

use super::{ButtonRegistry, ModebarConfig, ToolbarConfig, resolve_toolbar};

/// Host-side toolbar instance.
///
/// The widget owns drawing and click handling; the manager only decides when
/// it is created, refreshed, or torn down.
pub trait ToolbarWidget {
    fn update(&mut self, toolbar: &ToolbarConfig);
    fn destroy(&mut self);
}

/// What `ModebarManager::manage` did with the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModebarOutcome {
    Created,
    Updated,
    Destroyed,
    /// Display disabled and no widget existed.
    Hidden,
}

/// Keeps at most one live toolbar per chart in sync with its configuration.
#[derive(Debug)]
pub struct ModebarManager<W: ToolbarWidget> {
    widget: Option<W>,
}

impl<W: ToolbarWidget> Default for ModebarManager<W> {
    fn default() -> Self {
        Self { widget: None }
    }
}

impl<W: ToolbarWidget> ModebarManager<W> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.widget.is_some()
    }

    /// Called on chart creation and on every configuration update.
    ///
    /// On a resolution error the current widget is left untouched.
    pub fn manage<F>(
        &mut self,
        registry: &ButtonRegistry,
        chart: &ChartState,
        config: &ModebarConfig,
        create: F,
    ) -> ModebarResult<ModebarOutcome>
    where
        F: FnOnce(&ToolbarConfig) -> W,
    {
        if !config.display_mode_bar {
            return Ok(match self.widget.take() {
                Some(mut widget) => {
                    widget.destroy();
                    debug!("modebar destroyed");
                    ModebarOutcome::Destroyed
                }
                None => ModebarOutcome::Hidden,
            });
        }

        let toolbar = resolve_toolbar(
            registry,
            chart.capabilities(),
            &chart.traces,
            &chart.axes,
            config,
        )?;

        Ok(match self.widget.as_mut() {
            Some(widget) => {
                widget.update(&toolbar);
                debug!(groups = toolbar.len(), "modebar updated");
                ModebarOutcome::Updated
            }
            None => {
                self.widget = Some(create(&toolbar));
                debug!(groups = toolbar.len(), "modebar created");
                ModebarOutcome::Created
            }
        })
    }
}
