// Stable error codes shared by every crate of the compliance engine

pub mod configuration {
    pub const INVALID_CONFIG: &str = "CONFIG_1001";
    pub const UNKNOWN_LOCATION: &str = "CONFIG_1002";
}

pub mod serialization {
    pub const INVALID_JSON: &str = "SERDE_2001";
}

pub mod storage {
    pub const IO_FAILED: &str = "STORAGE_3001";
    pub const STORE_FAILED: &str = "STORAGE_3002";
}

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_4001";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_5001";
}
