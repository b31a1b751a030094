//! # sqlchain-mysql
//!
//! MySQL execution for statements built with `sqlchain-core`. Any
//! terminal builder stage gains [`Execute::go`] and [`Execute::fetch`]
//! through a blanket impl; the `MySqlPool` is passed in by the caller.
//!
//! ```ignore
//! use sqlchain_core::{cond, select};
//! use sqlchain_mysql::{ConnectConfig, Execute};
//!
//! let config: ConnectConfig = serde_json::from_str(raw)?;
//! let pool = config.connect().await?;
//!
//! let rows = select(&["id", "name"])?
//!     .from(&["users"])?
//!     .and_where(&[cond("active", "=", true)])?
//!     .fetch(&pool)
//!     .await?;
//! ```

pub mod config;
pub mod execute;

pub use config::ConnectConfig;
pub use execute::Execute;
