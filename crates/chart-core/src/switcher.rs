// File: crates/chart-core/src/switcher.rs
// Summary: Tab host cross-fading between chart renderers via one shared animated position.
// Notes:
// - All tabs stay mounted: every frame renders every tab, inactive ones faded/offset.
// - Only the active tab's content is reported by hit-testing.

use std::time::Duration;

use tracing::debug;

use crate::animation::AnimatedValue;
use crate::chart::ChartRenderer;
use crate::config::SwitcherConfig;
use crate::error::{ChartError, Result};
use crate::feedback::{trigger_quietly, HapticKind, Haptics, NoHaptics};
use crate::geometry::{Point, RectF};
use crate::scene::{Scene, Shape, TextAnchor};
use crate::theme::Theme;
use crate::types::LABEL_FONT_SIZE;

type RenderFn = Box<dyn Fn(&Theme) -> Scene>;

pub struct Tab {
    pub key: String,
    pub title: String,
    render: RenderFn,
}

impl Tab {
    pub fn new(key: impl Into<String>, title: impl Into<String>, render: impl Fn(&Theme) -> Scene + 'static) -> Self {
        Self { key: key.into(), title: title.into(), render: Box::new(render) }
    }

    /// Tab whose content is `chart` fully animated in.
    pub fn from_chart(key: impl Into<String>, title: impl Into<String>, chart: impl ChartRenderer + 'static) -> Self {
        Self::new(key, title, move |theme| chart.render(theme, 1.0))
    }

    pub fn render(&self, theme: &Theme) -> Scene {
        (self.render)(theme)
    }
}

/// Per-tab presentation state at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct TabFrame {
    pub index: usize,
    pub key: String,
    pub opacity: f32,
    pub offset_x: f32,
    pub interactive: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitcherFrame {
    /// Shared animated position; equals the active index once settled.
    pub position: f32,
    pub tabs: Vec<TabFrame>,
    /// Active-tab indicator in the header strip.
    pub indicator: RectF,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Header(usize),
    Content(usize),
}

pub struct ChartSwitcher {
    config: SwitcherConfig,
    tabs: Vec<Tab>,
    active: usize,
    position: AnimatedValue,
    haptics: Box<dyn Haptics>,
    on_change: Option<Box<dyn FnMut(usize)>>,
}

impl ChartSwitcher {
    pub fn new(config: SwitcherConfig) -> Self {
        let position = AnimatedValue::new(0.0, config.duration, config.easing);
        Self { config, tabs: Vec::new(), active: 0, position, haptics: Box::new(NoHaptics), on_change: None }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn push_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Callback receiving the newly selected index after every `select`.
    pub fn on_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn len(&self) -> usize { self.tabs.len() }
    pub fn is_empty(&self) -> bool { self.tabs.is_empty() }
    pub fn active(&self) -> usize { self.active }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Activate tab `index` and start the transition at clock time `now`.
    ///
    /// Reselecting the active tab restarts the tween toward the same value.
    pub fn select(&mut self, index: usize, now: Duration) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(ChartError::TabOutOfRange { index, len: self.tabs.len() });
        }
        debug!(from = self.active, to = index, "switching chart tab");
        self.active = index;
        self.position.set_target(index as f32, now);
        trigger_quietly(&*self.haptics, HapticKind::Selection);
        if let Some(cb) = self.on_change.as_mut() {
            cb(index);
        }
        Ok(())
    }

    /// Select by tab key.
    pub fn select_key(&mut self, key: &str, now: Duration) -> Result<()> {
        let index = self
            .tabs
            .iter()
            .position(|t| t.key == key)
            .ok_or_else(|| ChartError::UnknownTab(key.to_string()))?;
        self.select(index, now)
    }

    pub fn position(&self, now: Duration) -> f32 {
        self.position.sample(now)
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        !self.position.is_settled(now)
    }

    fn slot_width(&self) -> f32 {
        if self.tabs.is_empty() { 0.0 } else { self.config.width / self.tabs.len() as f32 }
    }

    pub fn frame(&self, now: Duration) -> SwitcherFrame {
        let pos = self.position(now);
        let width = self.config.width;
        let tabs = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let distance = i as f32 - pos;
                TabFrame {
                    index: i,
                    key: t.key.clone(),
                    opacity: (1.0 - distance.abs()).clamp(0.0, 1.0),
                    offset_x: distance * width,
                    interactive: i == self.active,
                }
            })
            .collect();
        let slot = self.slot_width();
        let indicator = RectF::from_ltwh(pos * slot, self.config.header_height - 3.0, slot, 3.0);
        SwitcherFrame { position: pos, tabs, indicator }
    }

    /// Which tab a pointer at `p` targets. Header slots always respond; content
    /// belongs to the active tab only.
    pub fn hit_test(&self, p: Point) -> Option<HitTarget> {
        if self.tabs.is_empty() || p.x < 0.0 || p.x >= self.config.width || p.y < 0.0 {
            return None;
        }
        if p.y < self.config.header_height {
            let i = (p.x / self.slot_width()) as usize;
            return Some(HitTarget::Header(i.min(self.tabs.len() - 1)));
        }
        Some(HitTarget::Content(self.active))
    }

    /// Compose header and every mounted tab at clock time `now`.
    pub fn render(&self, theme: &Theme, now: Duration) -> Scene {
        let frame = self.frame(now);
        let contents: Vec<Scene> = self.tabs.iter().map(|t| t.render(theme)).collect();
        let content_h = contents.iter().map(|s| s.height).fold(0.0f32, f32::max);
        let header_h = self.config.header_height;
        let mut scene = Scene::new(self.config.width, header_h + content_h);

        let slot = self.slot_width();
        for (i, t) in self.tabs.iter().enumerate() {
            let color = if i == self.active { theme.label } else { theme.muted };
            scene.push(Shape::text(
                Point::new((i as f32 + 0.5) * slot, header_h * 0.5 + LABEL_FONT_SIZE * 0.4),
                t.title.clone(),
                LABEL_FONT_SIZE + 2.0,
                color,
                TextAnchor::Middle,
            ));
        }
        scene.push(Shape::Rect { rect: frame.indicator, fill: theme.tab_indicator, corner_radius: 1.5, opacity: 1.0 });

        for (tf, content) in frame.tabs.iter().zip(contents) {
            scene.embed(content, Point::new(tf.offset_x, header_h), tf.opacity);
        }
        scene
    }
}
