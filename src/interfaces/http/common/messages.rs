//! Response messages shared by handlers and tests

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const INVALID_PAYLOAD: &str = "Invalid payload";
pub const MISSING_TEACHER_EMAILS: &str = "Missing teacher emails";
pub const STUDENT_NOT_FOUND: &str = "Student not found";
pub const SOME_ERROR_OCCURRED: &str = "Some Error Occurred";
