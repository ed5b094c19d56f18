//! Panel sizing for the player page.
//!
//! Heights are derived from the viewport through a small breakpoint table.
//! Load and orientation changes recompute immediately; resize bursts are
//! debounced and only the last viewport of a burst is applied.

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep, Instant};

pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Used when the footer has not been measured yet.
pub const DEFAULT_FOOTER_HEIGHT: u32 = 60;

/// One row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Inclusive upper bound; `None` for the catch-all row
    pub max_width: Option<u32>,
    pub thumbnail_height: u32,
    pub gap: u32,
}

const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint {
        max_width: Some(320),
        thumbnail_height: 120,
        gap: 6,
    },
    Breakpoint {
        max_width: Some(480),
        thumbnail_height: 140,
        gap: 8,
    },
    Breakpoint {
        max_width: Some(768),
        thumbnail_height: 170,
        gap: 12,
    },
    Breakpoint {
        max_width: None,
        thumbnail_height: 180,
        gap: 12,
    },
];

pub fn breakpoint_for(width: u32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| bp.max_width.map_or(true, |max| width <= max))
        .unwrap_or(BREAKPOINTS[BREAKPOINTS.len() - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Measured page chrome around the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome {
    pub header_height: u32,
    /// `None` or `0` means not measured yet
    pub footer_height: Option<u32>,
}

impl Chrome {
    fn footer(&self) -> u32 {
        self.footer_height
            .filter(|h| *h > 0)
            .unwrap_or(DEFAULT_FOOTER_HEIGHT)
    }
}

/// Derived panel dimensions, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelHeights {
    pub content: u32,
    pub player: u32,
    pub thumbnails: u32,
    /// Gap between thumbnails
    pub gap: u32,
}

pub fn compute_layout(viewport: Viewport, chrome: Chrome) -> PanelHeights {
    let bp = breakpoint_for(viewport.width);
    let content = viewport
        .height
        .saturating_sub(chrome.header_height)
        .saturating_sub(chrome.footer());

    PanelHeights {
        content,
        player: content.saturating_sub(bp.thumbnail_height),
        thumbnails: bp.thumbnail_height,
        gap: bp.gap,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    Load(Viewport),
    Resize(Viewport),
    OrientationChange(Viewport),
}

/// Recomputes panel heights from viewport events.
#[derive(Debug, Clone, Copy)]
pub struct LayoutController {
    chrome: Chrome,
    debounce: Duration,
}

impl LayoutController {
    pub fn new(chrome: Chrome) -> Self {
        Self {
            chrome,
            debounce: RESIZE_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Consume events until the sender is dropped, publishing heights.
    ///
    /// A pending debounced resize is flushed when the channel closes.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<LayoutEvent>,
        heights: watch::Sender<PanelHeights>,
    ) {
        let publish = |viewport: Viewport| {
            heights.send_replace(compute_layout(viewport, self.chrome));
        };

        let mut pending: Option<Viewport> = None;
        let timer = sleep(self.debounce);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(LayoutEvent::Resize(viewport)) => {
                        pending = Some(viewport);
                        timer.as_mut().reset(Instant::now() + self.debounce);
                    }
                    Some(LayoutEvent::Load(viewport) | LayoutEvent::OrientationChange(viewport)) => {
                        pending = None;
                        publish(viewport);
                    }
                    None => {
                        if let Some(viewport) = pending.take() {
                            publish(viewport);
                        }
                        break;
                    }
                },
                () = &mut timer, if pending.is_some() => {
                    if let Some(viewport) = pending.take() {
                        publish(viewport);
                    }
                }
            }
        }
    }
}
