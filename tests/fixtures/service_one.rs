use either::Either;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOneError {
    UserIdNotFound,
    UserNameNotFound,
}

pub struct ServiceOne;

#[unwrapped(ServiceOneError)]
impl ServiceOne {
    pub fn find_user_id(&self, cookie: &str) -> Either<ServiceOneError, i32> {
        if cookie.starts_with("valid") {
            Either::Right(cookie.len() as i32)
        } else {
            Either::Left(ServiceOneError::UserIdNotFound)
        }
    }

    pub fn find_user_name(&self, id: i32) -> Either<ServiceOneError, String> {
        if id > 12 {
            Either::Right(id.to_string())
        } else {
            Either::Left(ServiceOneError::UserNameNotFound)
        }
    }
}
