use escrowswap_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InsufficientLiquidity = 102,
    InsufficientInput = 103,
    InsufficientOutputAmount = 104,
    InvariantViolation = 105,
    Locked = 106,
    IdenticalTokens = 107,
    ArithmeticOverflow = 110,
    InvalidTo = 111,
    InsufficientLiquidityMinted = 112,
    InsufficientLiquidityBurned = 113,
}

impl From<MathError> for PairError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientInput => PairError::InsufficientInput,
            MathError::InsufficientOutput => PairError::InsufficientOutputAmount,
            MathError::InsufficientLiquidity => PairError::InsufficientLiquidity,
            MathError::InvalidFee | MathError::ArithmeticOverflow => PairError::ArithmeticOverflow,
        }
    }
}
