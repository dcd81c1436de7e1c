//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::{App, OverlayId};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            if let Some(id) = app.close_topmost() {
                log::trace!("Closed {}", id.title());
            }
        }

        ModalMessage::OpenInner => {
            if app.topmost_overlay() == Some(OverlayId::NestedOuter) {
                let lock = app.scroll_lock.clone();
                app.home.nested_inner.open((), &lock);
            }
        }
    }
}
