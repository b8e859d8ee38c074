#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum MathError {
    InsufficientInput,
    InsufficientOutput,
    InsufficientLiquidity,
    InvalidFee,
    ArithmeticOverflow,
}
