//! Tool definitions module.
//!
//! One file per functional group of the Beagle Security API. Each tool is a
//! unit struct implementing [`super::ApiTool`].

pub mod applications;
pub mod common;
pub mod projects;
pub mod testing;
pub mod verification;

pub use applications::{
    ApplicationType, CreateApplicationTool, DeleteApplicationTool, GetApplicationTool,
    ListApplicationsTool,
};
pub use projects::{CreateProjectTool, DeleteProjectTool, ListProjectsTool};
pub use testing::{
    GetTestResultTool, GetTestStatusTool, ListRunningTestsTool, ListTestSessionsTool,
    StartTestTool, StopTestTool,
};
pub use verification::{GetDomainSignatureTool, VerifyDomainTool};
