use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 长度：3 <= x <= 64，自动生成的 UUID 用户名为 36 位
    if username.len() < 3 || username.len() > 64 {
        return Err("o nome de usuário deve ter entre 3 e 64 caracteres!");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("o nome de usuário deve conter apenas letras, números, ponto, hífen ou sublinhado!");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("a senha deve ter pelo menos 6 caracteres!");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("o e-mail informado é inválido!");
    }
    Ok(())
}

/// CPF：忽略标点后必须是 11 位数字
pub fn validate_cpf(cpf: &str) -> Result<(), &'static str> {
    let digits = cpf.chars().filter(|c| !matches!(c, '.' | '-' | ' ')).count();
    if digits != 11 || !cpf.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | ' ')) {
        return Err("o CPF informado é inválido!");
    }
    Ok(())
}

/// 金额必须为非负有限数
pub fn validate_money(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value < 0.0 {
        return Err("o valor informado é inválido!");
    }
    Ok(())
}

pub fn validate_not_blank(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err(message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("secretaria").is_ok());
        assert!(validate_username("0b6f0a8e-8d4c-4f43-9b3e-1f4b1c2d3e4f").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("com espaço").is_err());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("a1b2c3").is_ok());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("mae@example.com").is_ok());
        assert!(validate_email("mae@").is_err());
    }

    #[test]
    fn test_cpf() {
        assert!(validate_cpf("123.456.789-09").is_ok());
        assert!(validate_cpf("12345678909").is_ok());
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cpf("123.456.789-0a").is_err());
    }

    #[test]
    fn test_money() {
        assert!(validate_money(0.0).is_ok());
        assert!(validate_money(650.5).is_ok());
        assert!(validate_money(-1.0).is_err());
        assert!(validate_money(f64::NAN).is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("1º ano", "nome obrigatório").is_ok());
        assert_eq!(
            validate_not_blank("   ", "nome obrigatório"),
            Err("nome obrigatório")
        );
    }
}
