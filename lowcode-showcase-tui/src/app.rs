//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//!     while let Some(ev) = timer.try_next() {         // 取出高亮定时器积压的事件
//!         update::update(&mut app , Highlight(ev))
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use lowcode_showcase_core::HighlightTimer;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, mut timer: Option<&mut HighlightTimer>) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 高亮事件
        if let Some(timer) = timer.as_mut() {
            while let Some(highlight) = timer.try_next() {
                update::update(app, AppMessage::Highlight(highlight));
            }
        }
    }

    Ok(())
}
