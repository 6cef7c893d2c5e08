use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    BlockErrWeightExceeded,
    BlockErrSubsidyExceeded,

    ParamsErrVersionInvalid,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BlockErrWeightExceeded => "BLOCK_ERR_WEIGHT_EXCEEDED",
            ErrorCode::BlockErrSubsidyExceeded => "BLOCK_ERR_SUBSIDY_EXCEEDED",

            ErrorCode::ParamsErrVersionInvalid => "PARAMS_ERR_VERSION_INVALID",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl RewardError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }
}

impl fmt::Display for RewardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for RewardError {}
