//! 合同生效后为学生与责任人开通系统账号

use tracing::{info, warn};

use crate::cache::keys;
use crate::cache::ObjectCache;
use crate::errors::Result;
use crate::models::persons::entities::Person;
use crate::models::profiles::{
    entities::{Permissions, Profile},
    requests::ProfileRequest,
};
use crate::models::students::entities::{Gender, Student};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::providers::MailMessage;
use crate::providers::Providers;
use crate::storage::Storage;
use crate::utils::format::capitalize;
use crate::utils::password::hash_password;
use crate::utils::random_code::{generate_password, generate_username};

pub const STUDENT_PROFILE: &str = "Aluno";
pub const RESPONSIBLE_PROFILE: &str = "Responsável";
pub const USED_USERNAME: &str = "usuário já utilizado no sistema.";
pub const USED_PASSWORD: &str = "senha já utilizada no sistema.";

/// 明文凭据，只用于通知邮件
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// 按名称取得权限配置，不存在时以空权限创建
pub async fn find_or_create_profile(
    storage: &dyn Storage,
    cache: &dyn ObjectCache,
    name: &str,
) -> Result<Profile> {
    if let Some(profile) = storage.get_profile_by_name(name).await? {
        return Ok(profile);
    }

    let profile = storage
        .create_profile(ProfileRequest {
            name: name.to_string(),
            permissions: Permissions::default(),
        })
        .await?;
    cache.invalidate(keys::PROFILES).await;
    info!("Profile '{}' created on demand", name);
    Ok(profile)
}

/// 以随机用户名与密码创建用户
pub async fn provision_user(
    storage: &dyn Storage,
    profile_id: i64,
) -> Result<(User, Credentials)> {
    let credentials = Credentials {
        username: generate_username(),
        password: generate_password(),
    };

    let user = storage
        .create_user(CreateUserRequest {
            username: credentials.username.clone(),
            password: hash_password(&credentials.password)?,
            profile_id,
        })
        .await?;

    Ok((user, credentials))
}

/// 责任人已有账号时返回占位文本
pub async fn provision_responsible(
    storage: &dyn Storage,
    person_id: i64,
    profile_id: i64,
) -> Result<Credentials> {
    let person = storage.get_person_by_id(person_id).await?;
    if person.and_then(|p| p.user_id).is_some() {
        return Ok(used_credentials());
    }

    let (user, credentials) = provision_user(storage, profile_id).await?;
    if !storage.set_person_user(person_id, user.id).await? {
        warn!(
            "Person {} was linked concurrently, user {} left unlinked",
            person_id, user.id
        );
        return Ok(used_credentials());
    }
    Ok(credentials)
}

fn used_credentials() -> Credentials {
    Credentials {
        username: USED_USERNAME.to_string(),
        password: USED_PASSWORD.to_string(),
    }
}

/// 合同生效通知邮件
pub fn active_enrollment_mail(
    person: &Person,
    responsible: &Credentials,
    student: &Student,
    student_credentials: &Credentials,
) -> MailMessage {
    let (article_with_noun, article) = match student.gender {
        Gender::Male => ("do aluno", "do"),
        Gender::Female => ("da aluna", "da"),
    };

    let body = format!(
        "Olá {responsible_name},\n\n\
         A matrícula {article_with_noun} {student_name} foi efetivada.\n\n\
         Seu acesso ao sistema:\n\
         usuário: {responsible_username}\n\
         senha: {responsible_password}\n\n\
         Acesso {article} {student_name}:\n\
         usuário: {student_username}\n\
         senha: {student_password}\n",
        responsible_name = capitalize(&person.name),
        student_name = capitalize(&student.name),
        responsible_username = responsible.username,
        responsible_password = responsible.password,
        student_username = student_credentials.username,
        student_password = student_credentials.password,
    );

    MailMessage {
        to_name: person.name.clone(),
        to_email: person.email.clone(),
        subject: "[Santiago] Matrícula Efetivada".to_string(),
        body,
    }
}

/// 发送通知，失败只记录日志
pub async fn send_best_effort(providers: &Providers, mail: MailMessage) {
    let to = mail.to_email.clone();
    if let Err(e) = providers.mail.send_mail(mail).await {
        warn!("Failed to send active enrollment mail to {}: {}", to, e);
    }
}
