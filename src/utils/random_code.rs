//! 自动开通账号时使用的随机凭据

/// 生成用户名（UUID v4）
pub fn generate_username() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 生成 6 位初始密码
pub fn generate_password() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..6].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_credentials_shape() {
        let username = generate_username();
        assert_eq!(username.len(), 36);
        assert!(uuid::Uuid::parse_str(&username).is_ok());

        let password = generate_password();
        assert_eq!(password.len(), 6);
        assert!(password.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(generate_username(), username);
    }
}
