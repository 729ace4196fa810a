//! 工作台模块：统一管理视图、输入分发与副作用执行

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action as KernelAction, AppState, Effect, FocusTarget, Store};
use crate::tui::view::{EventResult, View};
use crate::views::{ContentView, TreeView};
use ratatui::layout::Rect;
use ratatui::Frame;

mod input;
mod render;

const HEADER_HEIGHT: u16 = 2;
const SIDEBAR_MIN_WIDTH: u16 = 20;
const CONTENT_MIN_WIDTH: u16 = 30;
const WHEEL_STEP: isize = 3;

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    theme: UiTheme,
    compact_width: u16,
    sidebar_width: u16,
    tree_view: TreeView,
    content_view: ContentView,
    last_render_area: Option<Rect>,
    last_menu_button_area: Option<Rect>,
    last_search_area: Option<Rect>,
    last_sidebar_area: Option<Rect>,
}

impl Workbench {
    pub fn new(runtime: AsyncRuntime, settings: &Settings) -> Self {
        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);
        if !cfg!(test) {
            theme.adapt_to_terminal_capabilities();
        }

        Self {
            store: Store::new(AppState::new()),
            runtime,
            theme,
            compact_width: settings.compact_width,
            sidebar_width: settings.sidebar_width.max(SIDEBAR_MIN_WIDTH),
            tree_view: TreeView::new(),
            content_view: ContentView::new(),
            last_render_area: None,
            last_menu_button_area: None,
            last_search_area: None,
            last_sidebar_area: None,
        }
    }

    /// Kicks off the tree load.
    pub fn start(&mut self) {
        tracing::info!(source = %self.runtime.source_description(), "loading knowledge tree");
        let _ = self.dispatch_kernel(KernelAction::Start);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn runtime(&self) -> &AsyncRuntime {
        &self.runtime
    }

    pub(crate) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::LoadTree => self.runtime.load_tree(),
            Effect::LoadContent { request_id, node } => {
                tracing::debug!(request_id, id = %node.id, "loading content");
                self.runtime.load_content(request_id, node);
            }
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::TreeLoaded { roots } => {
                self.dispatch_kernel(KernelAction::TreeLoaded { roots })
            }
            AppMessage::TreeLoadFailed { error } => {
                tracing::warn!(error = %error, "showing empty knowledge tree");
                self.dispatch_kernel(KernelAction::TreeLoadFailed)
            }
            AppMessage::ContentResolved {
                request_id,
                content,
            } => self.dispatch_kernel(KernelAction::ContentResolved {
                request_id,
                content,
            }),
        }
    }

    /// Feeds the sizes measured during the last render back into the store.
    /// Returns true when another frame is needed.
    pub fn sync_layout(&mut self) -> bool {
        let mut changed = false;

        if let Some(area) = self.last_render_area {
            let compact = area.width < self.compact_width;
            changed |= self.dispatch_kernel(KernelAction::SetCompact(compact));
        }
        if let Some(height) = self.tree_view.view_height() {
            changed |= self.dispatch_kernel(KernelAction::SidebarSetViewHeight { height });
        }
        if let Some(height) = self.content_view.view_height() {
            let line_count = self.content_view.line_count();
            changed |= self.dispatch_kernel(KernelAction::ContentSetViewport { height, line_count });
        }

        changed
    }

    fn sidebar_visible(&self) -> bool {
        let ui = &self.store.state().ui;
        !ui.compact || ui.mobile_menu_open
    }

    fn content_page(&self) -> isize {
        let height = self.store.state().content.view_height.max(2);
        (height - 1) as isize
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}
