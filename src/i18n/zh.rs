//! Chinese translations (简体中文)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Stargrid");
    m.insert(Key::AppTagline, "逐行为每一项评分");

    // Header toolbar
    m.insert(Key::ScrollToTop, "顶部");
    m.insert(Key::ScrollToBottom, "底部");
    m.insert(Key::ResetAll, "全部重置");
    m.insert(Key::ShowList, "显示列表");
    m.insert(Key::HideList, "隐藏列表");
    m.insert(Key::DarkMode, "深色");
    m.insert(Key::LightMode, "浅色");

    // Counters
    m.insert(Key::ItemsLoaded, "已加载 {loaded} / {total} 项");
    m.insert(Key::ItemsSubmitted, "已提交 {submitted} / {total} 项");

    // Rating list
    m.insert(Key::ListHidden, "评分列表已隐藏");
    m.insert(Key::LoadingRow, "加载中…");
    m.insert(Key::ClearRatings, "清除评分");

    // Rating widget
    m.insert(Key::Submit, "提交");
    m.insert(Key::Submitted, "已提交");
    m.insert(Key::Reset, "重置");
    m.insert(Key::NotRated, "未评分");

    // Footer
    m.insert(Key::FooterNote, "滚动时按需加载行。评分仅在本次会话中保留。");
    m.insert(Key::SandboxTitle, "独立组件");

    // Reset dialog
    m.insert(Key::ResetDialogTitle, "重置所有评分");
    m.insert(Key::ResetDialogMessage, "确定要重置所有评分吗？此操作无法撤销。");
    m.insert(Key::ResetDialogConfirm, "重置");
    m.insert(Key::Cancel, "取消");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
