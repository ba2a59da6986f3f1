//! 标签文本。两种模式的格式刻意不同：
//! 连续模式 `25,00 €` (逗号小数，五位以上整数用 `.` 分组)，
//! 离散模式 `10.99 €`。

pub fn format_euro(value: f64) -> String {
    let digits = format!("{:.2}", value.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let int_part = if int_part.len() >= 5 {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };

    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{int_part},{frac_part} €")
}

pub fn format_fixed(value: f64) -> String {
    format!("{:.2} €", value)
}

pub fn format_label(value: f64, fixed_mode: bool) -> String {
    if fixed_mode {
        format_fixed(value)
    } else {
        format_euro(value)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
