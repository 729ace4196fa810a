use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(_) if !event.is_key_press() => EventResult::Ignored,
        InputEvent::Key(key_event) => {
            let key = Key::from(*key_event);
            if key.is_ctrl() && key.code == KeyCode::Char('c') {
                return EventResult::Quit;
            }
            match workbench.focus() {
                FocusTarget::Search => handle_search_key(workbench, key),
                FocusTarget::Sidebar => handle_browse_key(workbench, key),
            }
        }
        InputEvent::Paste(text) if workbench.focus() == FocusTarget::Search => {
            let mut changed = false;
            for ch in text.chars().filter(|c| !c.is_control()) {
                changed |= workbench.dispatch_kernel(KernelAction::SearchAppend(ch));
            }
            EventResult::from_changed(changed)
        }
        InputEvent::Mouse(mouse_event) => handle_mouse(workbench, mouse_event),
        InputEvent::Resize(width, _) => {
            let compact = *width < workbench.compact_width;
            let _ = workbench.dispatch_kernel(KernelAction::SetCompact(compact));
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

fn handle_search_key(workbench: &mut Workbench, key: Key) -> EventResult {
    let action = match key.code {
        KeyCode::Esc => KernelAction::BlurSearch,
        KeyCode::Enter => {
            let changed = workbench.dispatch_kernel(KernelAction::SearchSubmit);
            let blurred = workbench.dispatch_kernel(KernelAction::BlurSearch);
            return EventResult::from_changed(changed || blurred);
        }
        KeyCode::Backspace => KernelAction::SearchBackspace,
        KeyCode::Char(ch) if !key.is_ctrl() => {
            let ch = if key.modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
                ch.to_ascii_uppercase()
            } else {
                ch
            };
            KernelAction::SearchAppend(ch)
        }
        _ => return EventResult::Ignored,
    };
    EventResult::from_changed(workbench.dispatch_kernel(action))
}

fn handle_browse_key(workbench: &mut Workbench, key: Key) -> EventResult {
    if key.is_ctrl() {
        return EventResult::Ignored;
    }

    let sidebar_visible = workbench.sidebar_visible();
    let action = match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('m') if workbench.store.state().ui.compact => KernelAction::ToggleMobileMenu,
        KeyCode::Esc => KernelAction::CloseMobileMenu,
        KeyCode::Char('/') => KernelAction::FocusSearch,
        KeyCode::Up | KeyCode::Char('k') if sidebar_visible => {
            KernelAction::SidebarMoveCursor { delta: -1 }
        }
        KeyCode::Down | KeyCode::Char('j') if sidebar_visible => {
            KernelAction::SidebarMoveCursor { delta: 1 }
        }
        KeyCode::Up | KeyCode::Char('k') => KernelAction::ContentScroll { delta: -1 },
        KeyCode::Down | KeyCode::Char('j') => KernelAction::ContentScroll { delta: 1 },
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l')
            if sidebar_visible =>
        {
            KernelAction::SidebarActivate
        }
        KeyCode::Enter | KeyCode::Char(' ') => KernelAction::ToggleMobileMenu,
        KeyCode::Left | KeyCode::Char('h') if sidebar_visible => KernelAction::SidebarCollapse,
        KeyCode::PageUp => KernelAction::ContentScroll {
            delta: -workbench.content_page(),
        },
        KeyCode::PageDown => KernelAction::ContentScroll {
            delta: workbench.content_page(),
        },
        KeyCode::Home => KernelAction::ContentScroll {
            delta: isize::MIN / 2,
        },
        KeyCode::End => KernelAction::ContentScroll {
            delta: isize::MAX / 2,
        },
        _ => return EventResult::Ignored,
    };
    EventResult::from_changed(workbench.dispatch_kernel(action))
}

fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> EventResult {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(workbench, x, y),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let delta = if event.kind == MouseEventKind::ScrollUp {
                -super::WHEEL_STEP
            } else {
                super::WHEEL_STEP
            };
            let over_sidebar = workbench
                .last_sidebar_area
                .is_some_and(|a| rect_contains(a, x, y));
            let action = if over_sidebar {
                KernelAction::SidebarScroll { delta }
            } else if workbench.content_view.contains(x, y) {
                KernelAction::ContentScroll { delta }
            } else {
                return EventResult::Ignored;
            };
            EventResult::from_changed(workbench.dispatch_kernel(action))
        }
        _ => EventResult::Ignored,
    }
}

fn handle_click(workbench: &mut Workbench, x: u16, y: u16) -> EventResult {
    if workbench
        .last_menu_button_area
        .is_some_and(|a| rect_contains(a, x, y))
    {
        let _ = workbench.dispatch_kernel(KernelAction::ToggleMobileMenu);
        return EventResult::Consumed;
    }

    if workbench
        .last_search_area
        .is_some_and(|a| rect_contains(a, x, y))
    {
        return EventResult::from_changed(workbench.dispatch_kernel(KernelAction::FocusSearch));
    }

    let mut changed = false;
    if workbench.focus() == FocusTarget::Search {
        changed |= workbench.dispatch_kernel(KernelAction::BlurSearch);
    }

    let ui = &workbench.store.state().ui;
    let overlay_open = ui.compact && ui.mobile_menu_open;
    let in_sidebar = workbench
        .last_sidebar_area
        .is_some_and(|a| rect_contains(a, x, y));

    if in_sidebar {
        let sidebar = &workbench.store.state().sidebar;
        let row = workbench
            .tree_view
            .hit_test_row(x, y, sidebar.scroll_offset, sidebar.rows.len());
        if let Some(row) = row {
            changed |= workbench.dispatch_kernel(KernelAction::SidebarClickRow { row });
        }
    } else if overlay_open {
        changed |= workbench.dispatch_kernel(KernelAction::CloseMobileMenu);
    }

    EventResult::from_changed(changed)
}

fn rect_contains(area: ratatui::layout::Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
