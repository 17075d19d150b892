pub mod api;
pub mod group;
pub mod invite;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use api::{
    ApiErrorBody, AuthResponse, GroupCreate, LoginRequest, RegisterRequest, RemoveMember,
    TaskCreate, TaskUpdate,
};
pub use group::{Group, GroupDetail, GroupDetailResponse};
pub use invite::{AcceptInvite, AcceptedInvite, Invite};
pub use task::{Task, TaskStatus};
pub use user::User;
