use const_format::concatcp;

use crate::api::API_BASE_PATH;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Ping,
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Ping => concatcp!(API_BASE_PATH, "ping"),
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:id/logs"),
        }
    }

    /// Fills the `:id` segment of the path
    pub fn id_path<I: ToString>(&self, id: I) -> String {
        self.path().replace(":id", &id.to_string())
    }
}
