pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Content of `HEAD` when it points at a branch
pub const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";
