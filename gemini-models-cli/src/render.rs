//! Table rendering for the model listing.

use gemini_models::types::Model;
use gemini_models::Error;

const NAME_WIDTH: usize = 40;
const RULE_WIDTH: usize = 80;

/// 表头：标题行 + 分隔线。
pub fn header() -> [String; 2] {
    [
        format!(
            "{:<NAME_WIDTH$} | {}",
            "模型名称 (Model Name)", "支持的方法 (Methods)"
        ),
        "-".repeat(RULE_WIDTH),
    ]
}

/// 单个模型的数据行。
pub fn row(model: &Model) -> String {
    let name = model.name.as_deref().unwrap_or("");
    let methods = model.supported_generation_methods.join(", ");
    format!("{name:<NAME_WIDTH$} | {methods}")
}

/// 失败时的错误行。
pub fn failure_line(err: &Error) -> String {
    format!("❌ 获取模型列表失败: {err}")
}

/// 失败时的提示行。
pub fn hint_line() -> &'static str {
    "请检查 API Key 是否正确，以及网络代理是否配置成功。"
}
