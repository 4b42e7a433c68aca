pub mod goal;
pub mod membership;
pub mod project;
pub mod section;
pub mod story;
pub mod tag;
pub mod task;
pub mod team;
pub mod user;
pub mod workspace;

pub use goal::Goal;
pub use membership::{MembershipRole, TeamMembership, WorkspaceMembership};
pub use project::Project;
pub use section::Section;
pub use story::Story;
pub use tag::Tag;
pub use task::Task;
pub use team::Team;
pub use user::User;
pub use workspace::Workspace;
