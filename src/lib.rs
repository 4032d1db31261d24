//! Santiago - 学校管理后端服务
//!
//! 基于 Actix Web 构建，负责入学申请、合同、学费账单与付款结清。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、权限与限流中间件
//! - `models`: 数据模型定义
//! - `providers`: 外部服务（邮件、收据、文件存储、节假日日历）
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod providers;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
