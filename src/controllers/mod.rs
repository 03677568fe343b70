//
//  clumio-sdk
//  controllers/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Controllers
//!
//! One controller per resource family, each borrowing a [`ClumioClient`]. Every method
//! performs exactly one request/response exchange; nothing is retried and list endpoints are
//! not traversed page by page.
//!
//! | Accessor | Controller | Base path |
//! |----------|------------|-----------|
//! | [`ClumioClient::policy_definitions`] | [`PolicyDefinitions`] | `/policies/definitions` |
//! | [`ClumioClient::policy_rules`] | [`PolicyRules`] | `/policies/rules` |
//! | [`ClumioClient::organizational_units`] | [`OrganizationalUnits`] | `/organizational-units` |
//! | [`ClumioClient::tasks`] | [`Tasks`] | `/tasks` |
//! | [`ClumioClient::report_downloads`] | [`ReportDownloads`] | `/reports/downloads` |
//! | [`ClumioClient::aws_connections`] | [`AwsConnections`] | `/connections/aws` |
//! | [`ClumioClient::users`] | [`Users`] | `/users` |
//! | [`ClumioClient::audit_trails`] | [`AuditTrails`] | `/audit-trails` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use clumio_sdk::api::{ClumioClient, OperationResult};
//! use clumio_sdk::auth::ApiToken;
//! use clumio_sdk::models::CreateOrganizationalUnitRequest;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClumioClient::new("https://us-west-2.api.clumio.com")?
//!     .with_auth(ApiToken::new("your-api-token"));
//!
//! let request = CreateOrganizationalUnitRequest {
//!     name: Some("Finance".to_string()),
//!     ..Default::default()
//! };
//!
//! let response = client.organizational_units().create(&request).await?;
//! match response.into_data() {
//!     Some(OperationResult::Sync(ou)) => println!("created {:?}", ou.id),
//!     Some(OperationResult::Async(task)) => println!("pending task {:?}", task.task_id),
//!     None => {}
//! }
//! # Ok(())
//! # }
//! ```

mod audit_trails;
mod aws_connections;
mod organizational_units;
mod policy_definitions;
mod policy_rules;
mod report_downloads;
mod tasks;
mod users;

pub use audit_trails::*;
pub use aws_connections::*;
pub use organizational_units::*;
pub use policy_definitions::*;
pub use policy_rules::*;
pub use report_downloads::*;
pub use tasks::*;
pub use users::*;

use crate::api::ClumioClient;

impl ClumioClient {
    pub fn policy_definitions(&self) -> PolicyDefinitions<'_> {
        PolicyDefinitions::new(self)
    }

    pub fn policy_rules(&self) -> PolicyRules<'_> {
        PolicyRules::new(self)
    }

    pub fn organizational_units(&self) -> OrganizationalUnits<'_> {
        OrganizationalUnits::new(self)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self)
    }

    pub fn report_downloads(&self) -> ReportDownloads<'_> {
        ReportDownloads::new(self)
    }

    pub fn aws_connections(&self) -> AwsConnections<'_> {
        AwsConnections::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn audit_trails(&self) -> AuditTrails<'_> {
        AuditTrails::new(self)
    }
}
