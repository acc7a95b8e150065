pub const MAX_TAG_NAME_LENGTH: usize = 32;
pub const TAG_SEPARATOR: &str = ",";
pub const YES: &str = "yes";
pub const NO: &str = "no";
