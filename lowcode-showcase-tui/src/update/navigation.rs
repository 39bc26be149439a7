//! 分区切换

use lowcode_showcase_core::Section;

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    let target = match msg {
        NavigationMessage::SelectPrevious => app.view.section().prev(),
        NavigationMessage::SelectNext => app.view.section().next(),
        NavigationMessage::SelectFirst => Section::Overview,
        NavigationMessage::SelectLast => Section::Security,
        NavigationMessage::Select(section) => section,
    };

    if target == app.view.section() {
        return;
    }

    app.view.select_section(target);
    // 切换分区时重置滚动、熄灭高亮、清除状态消息
    app.scroll = 0;
    app.highlight.clear();
    app.clear_status();
    tracing::debug!("Section switched to {}", target.id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowcode_showcase_core::HighlightEvent;

    #[test]
    fn test_next_wraps() {
        let mut app = App::default();
        update(&mut app, NavigationMessage::SelectLast);
        assert_eq!(app.view.section(), Section::Security);

        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.view.section(), Section::Overview);

        update(&mut app, NavigationMessage::SelectPrevious);
        assert_eq!(app.view.section(), Section::Security);
    }

    #[test]
    fn test_switch_resets_scroll_and_highlight() {
        let mut app = App::default();
        app.scroll = 5;
        app.highlight.apply(HighlightEvent::On(0));

        update(&mut app, NavigationMessage::Select(Section::Testing));
        assert_eq!(app.scroll, 0);
        assert!(!app.highlight.is_lit(0));
    }

    #[test]
    fn test_reselect_keeps_scroll() {
        let mut app = App::default();
        app.scroll = 3;
        update(&mut app, NavigationMessage::Select(Section::Overview));
        assert_eq!(app.scroll, 3);
    }

    #[test]
    fn test_drops_survive_section_switch() {
        let mut app = App::default();
        app.view.begin_drag(lowcode_showcase_core::Component::Chart);
        app.view.complete_drop();

        update(&mut app, NavigationMessage::Select(Section::Security));
        update(&mut app, NavigationMessage::Select(Section::Development));
        assert_eq!(app.view.dropped().len(), 1);
    }
}
