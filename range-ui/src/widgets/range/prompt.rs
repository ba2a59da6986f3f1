/// 同步文本输入 (类似浏览器的 `prompt`)。返回 `None` 表示用户取消。
pub trait Prompt {
    fn ask(&mut self, message: &str) -> Option<String>;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn ask(&mut self, message: &str) -> Option<String> {
        self(message)
    }
}

/// 从不应答的输入源，等价于用户总是取消
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn ask(&mut self, _message: &str) -> Option<String> {
        None
    }
}

/// 解析用户输入；无法解析或不是有限数时返回 `None`
pub fn parse_value(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
