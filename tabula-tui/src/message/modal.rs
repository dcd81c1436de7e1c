//! 弹窗相关消息

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭最上层弹窗
    Close,

    /// 在外层嵌套弹窗中打开内层弹窗
    OpenInner,
}
