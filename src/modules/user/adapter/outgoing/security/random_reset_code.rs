use rand::Rng;

use crate::user::application::domain::entities::ResetCode;
use crate::user::application::ports::outgoing::ResetCodeGenerator;

/// Uniform six-digit codes from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomResetCodeGenerator;

impl ResetCodeGenerator for RandomResetCodeGenerator {
    fn generate(&self) -> ResetCode {
        let n = rand::thread_rng().gen_range(ResetCode::MIN..=ResetCode::MAX);
        // The range above is exactly the accepted one.
        ResetCode::from_number(n).unwrap_or_else(|_| unreachable!("{n} is within the code range"))
    }
}
