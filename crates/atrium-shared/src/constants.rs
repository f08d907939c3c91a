/// Application name shown in window titles and logs.
pub const APP_NAME: &str = "Atrium";

/// Namespace tag stamped on every document so Atrium's data stays isolated
/// inside a store shared by multiple applications.
pub const APP_ID: &str = "atrium-physics";

/// The one fixed teacher account.  Any other address is a student.
pub const TEACHER_EMAIL: &str = "teacher@atrium.school";

/// Display name used when the teacher publishes assignments and resources.
pub const TEACHER_NAME: &str = "Prof. Sharma";

/// Branch assigned to profiles created implicitly on first sign-in.
pub const DEFAULT_BRANCH: &str = "general";

/// Minimum accepted password length, checked client-side before the auth
/// collaborator is ever called.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum number of community messages kept in the live view.
pub const MESSAGE_HISTORY_LIMIT: usize = 50;

/// Resource links must point at this document-sharing domain.
pub const SHARING_DOMAIN: &str = "drive.google.com";

/// How long a toast notification stays visible, in milliseconds.
pub const TOAST_HIDE_MS: u64 = 5000;

/// Document collection names.
pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_PRESENCE: &str = "onlineUsers";
pub const COLLECTION_COMMUNITY: &str = "community";
pub const COLLECTION_ASSIGNMENTS: &str = "assignments";
pub const COLLECTION_RESOURCES: &str = "resources";
pub const COLLECTION_DOUBTS: &str = "doubts";
