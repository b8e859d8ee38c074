use escrowswap_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    Expired = 300,
    InsufficientOutputAmount = 301,
    ExcessiveInputAmount = 302,
    InvalidPath = 303,
    PairNotFound = 304,
    IdenticalTokens = 305,
    InsufficientInput = 306,
    InsufficientLiquidity = 307,
    SlippageExceeded = 308,
    ArithmeticOverflow = 309,
    SwapNotFound = 310,
    SwapNotActive = 311,
    AlreadyInitialized = 312,
    NotInitialized = 313,
}

impl From<MathError> for RouterError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientInput => RouterError::InsufficientInput,
            MathError::InsufficientOutput => RouterError::InsufficientOutputAmount,
            MathError::InsufficientLiquidity => RouterError::InsufficientLiquidity,
            MathError::InvalidFee | MathError::ArithmeticOverflow => RouterError::ArithmeticOverflow,
        }
    }
}
