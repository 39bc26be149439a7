//! 内容面板：滚动与拖放

use crate::message::ContentMessage;
use crate::model::App;

/// PgUp / PgDn 的步长
const PAGE_SIZE: u16 = 10;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let limit = app.scroll_limit.get();

    match msg {
        ContentMessage::ScrollUp => {
            app.scroll = app.scroll.saturating_sub(1);
        }

        ContentMessage::ScrollDown => {
            app.scroll = app.scroll.saturating_add(1).min(limit);
        }

        ContentMessage::PageUp => {
            app.scroll = app.scroll.saturating_sub(PAGE_SIZE);
        }

        ContentMessage::PageDown => {
            app.scroll = app.scroll.saturating_add(PAGE_SIZE).min(limit);
        }

        ContentMessage::ScrollTop => {
            app.scroll = 0;
        }

        ContentMessage::SelectPrevious => {
            app.palette.select_previous();
        }

        ContentMessage::SelectNext => {
            app.palette.select_next();
        }

        ContentMessage::BeginDrag => {
            let component = app.palette.current();
            app.view.begin_drag(component);

            let message = format!("{} {}", app.t("draggingLabel"), app.t(component.id()));
            app.set_status(message);
        }

        ContentMessage::CompleteDrop => match app.view.complete_drop() {
            Some(component) => {
                tracing::debug!("Dropped {} ({} on canvas)", component.id(), app.view.dropped().len());
                let message = format!("{} {}", app.t("addedComponent"), app.t(component.id()));
                app.set_status(message);
            }
            None => {
                let message = app.t("statusNothingToDrop").to_string();
                app.set_status(message);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowcode_showcase_core::Component;

    #[test]
    fn test_scroll_clamped_to_limit() {
        let mut app = App::default();
        app.scroll_limit.set(12);

        update(&mut app, ContentMessage::PageDown);
        assert_eq!(app.scroll, 10);
        update(&mut app, ContentMessage::PageDown);
        assert_eq!(app.scroll, 12);
        update(&mut app, ContentMessage::ScrollDown);
        assert_eq!(app.scroll, 12);

        update(&mut app, ContentMessage::ScrollUp);
        assert_eq!(app.scroll, 11);
        update(&mut app, ContentMessage::ScrollTop);
        assert_eq!(app.scroll, 0);
        update(&mut app, ContentMessage::PageUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_pick_up_and_drop() {
        let mut app = App::default();
        update(&mut app, ContentMessage::BeginDrag);
        assert_eq!(app.view.drag_payload(), Some(Component::Chart));
        assert_eq!(app.status_message.as_deref(), Some("Dragging: Chart"));

        update(&mut app, ContentMessage::CompleteDrop);
        assert_eq!(app.view.dropped(), &[Component::Chart]);
        assert_eq!(app.status_message.as_deref(), Some("Added: Chart"));
    }

    #[test]
    fn test_drop_with_empty_hand() {
        let mut app = App::default();
        update(&mut app, ContentMessage::CompleteDrop);

        assert!(app.view.dropped().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Pick up a component first"));
    }

    #[test]
    fn test_second_pick_up_replaces_payload() {
        let mut app = App::default();
        update(&mut app, ContentMessage::BeginDrag);
        update(&mut app, ContentMessage::SelectPrevious);
        update(&mut app, ContentMessage::BeginDrag);
        update(&mut app, ContentMessage::CompleteDrop);

        assert_eq!(app.view.dropped(), &[Component::Table]);
    }
}
