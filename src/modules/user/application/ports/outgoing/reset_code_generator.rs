use crate::user::application::domain::entities::ResetCode;

pub trait ResetCodeGenerator: Send + Sync {
    fn generate(&self) -> ResetCode;
}
