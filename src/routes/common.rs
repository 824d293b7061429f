use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
// 上限防止单次请求拉取整表
pub const MAX_LIMIT: i64 = 100;

// 分页查询参数
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    // 返回 (skip, limit)，缺省值 0 和 10，limit 夹在 [0, MAX_LIMIT]
    pub fn resolve(&self) -> (i64, i64) {
        let skip = self.skip.unwrap_or(0).max(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT);
        (skip, limit)
    }
}

// 删除成功的确认响应
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
