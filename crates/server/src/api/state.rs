//! 统一的应用状态。

use std::sync::Arc;

use judge_client::CodeRunner;

/// 统一的应用状态，包含所有服务共享的数据。
#[derive(Clone)]
pub struct AppState {
    /// 代码执行器。
    pub runner: Arc<CodeRunner>,
}

impl AppState {
    /// 创建新的应用状态。
    pub fn new(runner: Arc<CodeRunner>) -> Self {
        Self { runner }
    }
}
