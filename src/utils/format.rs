//! 文本格式化

/// 每个单词首字母大写，其余小写
pub fn capitalize(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// 金额格式化为 `R$ 1.234,56`
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let integer = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("maria DA silva"), "Maria Da Silva");
        assert_eq!(capitalize("  joão   pedro "), "João Pedro");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(650.0), "R$ 650,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(-10.0), "-R$ 10,00");
    }
}
