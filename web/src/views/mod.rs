mod components;

mod overview;
pub use overview::Overview;

mod users;
pub use users::Users;

mod add_user;
pub use add_user::AddUser;

mod reports;
pub use reports::Reports;

mod revenue;
pub use revenue::Revenue;

mod orders;
pub use orders::OrdersCost;

mod messages;
pub use messages::{MessageDetail, Messages};

mod logs;
pub use logs::AuditLogs;

mod content;
pub use content::{ContentDetail, ContentList};

mod profile;
pub use profile::Profile;
