//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开详情）
    Confirm,

    // ========== 分页 ==========
    /// 上一页
    PreviousPage,
    /// 下一页
    NextPage,
    /// 跳转到指定页
    GoToPage(usize),

    // ========== 弹窗 ==========
    /// 打开当前页面的示例弹窗
    OpenModal,
    /// 打开嵌套弹窗（首页）
    OpenNestedModal,

    // ========== 联系表单 ==========
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 下一个输入字段
    NextField,
    /// 上一个输入字段
    PrevField,
    /// 提交表单
    Submit,
}
