pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::{Result, SchoolError};
use crate::models::debits::{
    entities::{Debit, DebitType},
    requests::{CreateExtraDebitRequest, UpdateExtraDebitRequest},
};
use crate::storage::Storage;

pub struct DebitService;

impl DebitService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 新增额外账单
    pub async fn create_extra(
        &self,
        data: CreateExtraDebitRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_extra(data, request).await
    }

    pub async fn update_extra(
        &self,
        debit_id: i64,
        data: UpdateExtraDebitRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_extra(debit_id, data, request).await
    }

    pub async fn delete_extra(
        &self,
        debit_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_extra(debit_id, request).await
    }
}

pub(crate) fn validate_values(
    description: &str,
    value: f64,
    discount: f64,
) -> std::result::Result<(), &'static str> {
    if description.trim().is_empty() {
        return Err("a descrição do débito é obrigatória!");
    }
    if !value.is_finite() || value <= 0.0 {
        return Err("o valor do débito deve ser maior que zero!");
    }
    if !discount.is_finite() || discount < 0.0 || discount > value {
        return Err("o desconto deve estar entre zero e o valor do débito!");
    }
    Ok(())
}

/// 取出可修改的额外账单：存在、类型为 extra 且未支付
async fn editable_extra(storage: &dyn Storage, debit_id: i64, action: &str) -> Result<Debit> {
    let debit = storage
        .get_debit_by_id(debit_id)
        .await?
        .ok_or_else(|| SchoolError::validation(format!("não é possível {action} um débito que não existe!")))?;

    if debit.debit_type != DebitType::Extra {
        return Err(SchoolError::validation(format!(
            "não é possível {action} um débito que não é do tipo extra!"
        )));
    }
    if debit.paid {
        return Err(SchoolError::validation(format!(
            "não é possível {action} um débito que já foi pago!"
        )));
    }
    Ok(debit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_values() {
        assert!(validate_values("Uniforme", 120.0, 0.0).is_ok());
        assert!(validate_values("Uniforme", 120.0, 120.0).is_ok());
        assert!(validate_values("  ", 120.0, 0.0).is_err());
        assert!(validate_values("Uniforme", 0.0, 0.0).is_err());
        assert!(validate_values("Uniforme", 100.0, 150.0).is_err());
        assert!(validate_values("Uniforme", 100.0, -1.0).is_err());
    }
}
