//! 写操作事务作用域
//!
//! 每个写操作从连接池取得一个专用连接并开启事务，结束时提交或回滚，
//! 随后连接归还连接池。未结算就被丢弃的事务由 SeaORM 自动回滚。

use std::fmt;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};
use tracing::{debug, error};

use crate::errors::{Result, RosterError};

/// 事务生命周期状态，仅用于日志追踪
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionState {
    InTransaction,
    Committed,
    RolledBack,
    Released,
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionState::InTransaction => "in_transaction",
            TransactionState::Committed => "committed",
            TransactionState::RolledBack => "rolled_back",
            TransactionState::Released => "released",
        };
        f.write_str(name)
    }
}

pub(crate) struct TransactionScope {
    operation: &'static str,
    txn: DatabaseTransaction,
}

impl TransactionScope {
    /// 获取专用连接并执行 BEGIN
    pub async fn begin(db: &DatabaseConnection, operation: &'static str) -> Result<Self> {
        let txn = db.begin().await.map_err(|e| {
            error!(operation, "开启事务失败: {e}");
            RosterError::transaction(format!("{operation}: 开启事务失败: {e}"))
        })?;
        debug!(operation, state = %TransactionState::InTransaction, "transaction started");
        Ok(Self { operation, txn })
    }

    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// 按写操作结果结算事务
    ///
    /// 成功则提交；失败则回滚并返回原始错误。回滚本身失败时只记录日志，
    /// 不覆盖原始错误。唯一约束和外键约束冲突返回 `Conflict`。
    pub async fn settle<T>(self, outcome: std::result::Result<T, DbErr>) -> Result<T> {
        let Self { operation, txn } = self;

        let result = match outcome {
            Ok(value) => match txn.commit().await {
                Ok(()) => {
                    debug!(operation, state = %TransactionState::Committed, "transaction committed");
                    Ok(value)
                }
                Err(e) => {
                    error!(operation, "提交事务失败: {e}");
                    Err(RosterError::transaction(format!("{operation}: 提交事务失败: {e}")))
                }
            },
            Err(err) => {
                error!(operation, "{operation}失败，回滚事务: {err}");
                match txn.rollback().await {
                    Ok(()) => {
                        debug!(operation, state = %TransactionState::RolledBack, "transaction rolled back")
                    }
                    Err(rollback_err) => error!(operation, "回滚事务失败: {rollback_err}"),
                }
                Err(classify_write_error(operation, &err))
            }
        };

        debug!(operation, state = %TransactionState::Released, "connection released");
        result
    }
}

/// 按 SQL 错误种类区分约束冲突与其他存储故障
fn classify_write_error(operation: &str, err: &DbErr) -> RosterError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            RosterError::conflict(format!("{operation}失败: 唯一约束冲突: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            RosterError::conflict(format!("{operation}失败: 外键约束冲突: {detail}"))
        }
        _ => RosterError::database_operation(format!("{operation}失败: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_sql_error_is_database_operation() {
        let err = classify_write_error("创建学生", &DbErr::Custom("boom".to_string()));
        assert!(matches!(err, RosterError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(TransactionState::InTransaction.to_string(), "in_transaction");
        assert_eq!(TransactionState::RolledBack.to_string(), "rolled_back");
    }
}
